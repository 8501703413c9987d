use crate::domain::{Priority, Tab, TaskId, TaskPatch, UiMode};
use crate::notifications::SystemCue;
use crate::tasks::TaskStore;
use crate::ticker::SecondTicker;
use crate::timer::FocusTimer;
use chrono::{Datelike, Local, NaiveDate};

/// Input form state for adding or editing tasks
#[derive(Debug, Clone, Default)]
pub struct InputFormState {
    pub title: String,
    pub due_date: String, // YYYY-MM-DD, empty for no due date
    pub priority: Option<Priority>,
    pub editing_field: usize, // 0 = title, 1 = due date
    /// Task being edited; None while adding
    pub editing: Option<TaskId>,
}

impl InputFormState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Main application state. Owns the task store, the focus timer, and the
/// view-side state (selection, tab, form, calendar cursor). All business
/// state lives in the core components; this layer only routes commands.
pub struct AppState {
    pub tasks: TaskStore,
    pub timer: FocusTimer,
    pub cue: SystemCue,
    pub ticker: SecondTicker,
    pub selected_index: usize,
    pub ui_mode: UiMode,
    pub active_tab: Tab,
    pub input_form: Option<InputFormState>,
    /// First day of the month the calendar pane displays (caller-owned
    /// navigation cursor; not part of the projector)
    pub calendar_month: NaiveDate,
}

impl AppState {
    pub fn new(tasks: TaskStore) -> Self {
        let today = Local::now().date_naive();
        Self {
            tasks,
            timer: FocusTimer::new(),
            cue: SystemCue,
            ticker: SecondTicker::new(),
            selected_index: 0,
            ui_mode: UiMode::Normal,
            active_tab: Tab::List,
            input_form: None,
            calendar_month: first_of_month(today),
        }
    }

    // --- list selection ---

    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.tasks.len() {
            self.selected_index += 1;
        }
    }

    pub fn selected_task_id(&self) -> Option<TaskId> {
        self.tasks.tasks().get(self.selected_index).map(|t| t.id)
    }

    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_task_id() {
            self.tasks.toggle_completed(id);
        }
    }

    pub fn delete_selected(&mut self) {
        if let Some(id) = self.selected_task_id() {
            self.tasks.remove(id);
            self.clamp_selection();
        }
    }

    fn clamp_selection(&mut self) {
        if self.selected_index >= self.tasks.len() && self.selected_index > 0 {
            self.selected_index = self.tasks.len().saturating_sub(1);
        }
    }

    // --- add-task form ---

    pub fn open_add_form(&mut self) {
        self.input_form = Some(InputFormState::new());
        self.ui_mode = UiMode::AddingTask;
    }

    /// Open the form pre-filled with the selected task for editing
    pub fn open_edit_form(&mut self) {
        let Some(task) = self.tasks.tasks().get(self.selected_index) else {
            return;
        };
        self.input_form = Some(InputFormState {
            title: task.title.clone(),
            due_date: task
                .due_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            priority: task.priority,
            editing_field: 0,
            editing: Some(task.id),
        });
        self.ui_mode = UiMode::EditingTask;
    }

    pub fn cancel_form(&mut self) {
        self.input_form = None;
        self.ui_mode = UiMode::Normal;
    }

    /// Submit the form. A blank title keeps the form open (on the add path
    /// the store rejects it anyway); an unparseable due date is treated as
    /// no due date. Editing routes through the store's update merge.
    pub fn submit_form(&mut self) {
        let Some(form) = &self.input_form else {
            return;
        };

        let due_date = parse_due_date(&form.due_date);
        let priority = form.priority;

        if let Some(id) = form.editing {
            if form.title.trim().is_empty() {
                return;
            }
            let patch = TaskPatch {
                title: Some(form.title.clone()),
                due_date: Some(due_date),
                priority: Some(priority),
                ..TaskPatch::default()
            };
            self.tasks.update(id, patch);
            self.input_form = None;
            self.ui_mode = UiMode::Normal;
        } else if let Some(id) = self.tasks.add(&form.title, due_date, priority) {
            // Select the new row
            if let Some(idx) = self.tasks.tasks().iter().position(|t| t.id == id) {
                self.selected_index = idx;
            }
            self.input_form = None;
            self.ui_mode = UiMode::Normal;
        }
    }

    pub fn cycle_form_priority(&mut self) {
        if let Some(form) = &mut self.input_form {
            form.priority = match form.priority {
                None => Some(Priority::Low),
                Some(Priority::High) => None,
                Some(p) => Some(p.next()),
            };
        }
    }

    // --- tabs and calendar cursor ---

    pub fn switch_tab(&mut self) {
        self.active_tab = self.active_tab.toggled();
    }

    pub fn calendar_prev_month(&mut self) {
        self.calendar_month = shift_month(self.calendar_month, -1);
    }

    pub fn calendar_next_month(&mut self) {
        self.calendar_month = shift_month(self.calendar_month, 1);
    }

    // --- focus timer ---

    /// Start/stop the countdown, keeping the tick source in lockstep: the
    /// ticker is armed only while the timer runs, so no tick can fire into a
    /// paused timer.
    pub fn timer_toggle(&mut self) {
        self.timer.toggle();
        if self.timer.is_running() {
            self.ticker.arm();
        } else {
            self.ticker.cancel();
        }
    }

    pub fn timer_switch_phase(&mut self) {
        // Manual switch: countdown resets, running flag and ticker untouched
        self.timer.switch_phase();
    }

    /// Advance the timer by however many whole seconds elapsed since the
    /// last event-loop pass. Automatic phase completion pauses the timer,
    /// at which point the ticker is cancelled and any residual seconds from
    /// this pass are dropped.
    pub fn tick(&mut self) {
        for _ in 0..self.ticker.drain_seconds() {
            self.timer.tick(&mut self.cue);
            if !self.timer.is_running() {
                self.ticker.cancel();
                break;
            }
        }
    }

    /// Deactivate the tick source on shutdown
    pub fn teardown(&mut self) {
        self.ticker.cancel();
    }
}

/// Parse a form due date; empty or malformed input means "no due date"
fn parse_due_date(input: &str) -> Option<NaiveDate> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok()
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date)
}

/// Shift a month-cursor date by whole months, landing on the 1st
fn shift_month(date: NaiveDate, delta: i32) -> NaiveDate {
    let months0 = date.year() * 12 + date.month0() as i32 + delta;
    let year = months0.div_euclid(12);
    let month = months0.rem_euclid(12) as u32 + 1;
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(date)
}
