use crate::app::AppState;
use crate::domain::{Tab, UiMode};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::AddingTask | UiMode::EditingTask => handle_input_form_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // List navigation
        KeyCode::Up => {
            if app.active_tab == Tab::List {
                app.move_selection_up();
            }
            Ok(false)
        }
        KeyCode::Down => {
            if app.active_tab == Tab::List {
                app.move_selection_down();
            }
            Ok(false)
        }

        // Toggle completion on the selected task
        KeyCode::Enter | KeyCode::Char(' ') => {
            if app.active_tab == Tab::List {
                app.toggle_selected();
            }
            Ok(false)
        }

        // Delete selected task
        KeyCode::Char('d') | KeyCode::Char('D') => {
            if app.active_tab == Tab::List {
                app.delete_selected();
            }
            Ok(false)
        }

        // Open the add-task form
        KeyCode::Char('a') | KeyCode::Char('A') => {
            app.open_add_form();
            Ok(false)
        }

        // Edit the selected task
        KeyCode::Char('e') | KeyCode::Char('E') => {
            if app.active_tab == Tab::List {
                app.open_edit_form();
            }
            Ok(false)
        }

        // Switch between list and calendar tabs
        KeyCode::Tab | KeyCode::Char('c') | KeyCode::Char('C') => {
            app.switch_tab();
            Ok(false)
        }

        // Calendar month navigation
        KeyCode::Char('[') => {
            if app.active_tab == Tab::Calendar {
                app.calendar_prev_month();
            }
            Ok(false)
        }
        KeyCode::Char(']') => {
            if app.active_tab == Tab::Calendar {
                app.calendar_next_month();
            }
            Ok(false)
        }

        // Focus timer controls
        KeyCode::Char('t') | KeyCode::Char('T') => {
            app.timer_toggle();
            Ok(false)
        }
        KeyCode::Char('s') | KeyCode::Char('S') => {
            app.timer_switch_phase();
            Ok(false)
        }

        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Ok(true),

        _ => Ok(false),
    }
}

/// Handle keys while the add-task form is open
fn handle_input_form_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Esc => {
            app.cancel_form();
            Ok(false)
        }
        KeyCode::Enter => {
            app.submit_form();
            Ok(false)
        }
        KeyCode::Tab => {
            if let Some(form) = &mut app.input_form {
                form.editing_field = (form.editing_field + 1) % 2;
            }
            Ok(false)
        }
        // Cycle priority with arrow keys
        KeyCode::Up | KeyCode::Down => {
            app.cycle_form_priority();
            Ok(false)
        }
        KeyCode::Backspace => {
            if let Some(form) = &mut app.input_form {
                match form.editing_field {
                    0 => {
                        form.title.pop();
                    }
                    _ => {
                        form.due_date.pop();
                    }
                }
            }
            Ok(false)
        }
        KeyCode::Char(c) => {
            if let Some(form) = &mut app.input_form {
                match form.editing_field {
                    0 => form.title.push(c),
                    _ => form.due_date.push(c),
                }
            }
            Ok(false)
        }
        _ => Ok(false),
    }
}
