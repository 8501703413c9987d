pub mod calendar_pane;
pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod list_pane;
pub mod styles;
pub mod timer_pane;

use crate::app::AppState;
use crate::domain::Tab;
use calendar_pane::render_calendar_pane;
use input_form::render_input_form;
use keybindings::render_keybindings;
use layout::create_layout;
use list_pane::render_list_pane;
use ratatui::Frame;
use timer_pane::render_timer_pane;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &mut AppState) {
    let size = f.size();
    let layout = create_layout(size);

    // Render keybindings bar
    render_keybindings(f, layout.keybindings_area);

    // Render main pane per active tab
    match app.active_tab {
        Tab::List => render_list_pane(f, app, layout.main_area),
        Tab::Calendar => render_calendar_pane(f, app, layout.main_area),
    }

    // Render timer sidebar
    render_timer_pane(f, app, layout.timer_area);

    // Render input form if active
    if app.input_form.is_some() {
        render_input_form(f, app, size);
    }
}
