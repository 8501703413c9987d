use crate::app::AppState;
use crate::domain::Task;
use crate::ui::styles::{
    border_style, default_style, done_style, due_style, priority_style, selected_style,
    title_style,
};
use chrono::Local;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render the task list pane
pub fn render_list_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let items: Vec<ListItem> = app
        .tasks
        .tasks()
        .iter()
        .enumerate()
        .map(|(idx, task)| {
            let line = create_task_line(task);
            let style = if idx == app.selected_index {
                selected_style()
            } else {
                default_style()
            };
            ListItem::new(line).style(style)
        })
        .collect();

    let date = Local::now().format("%a %b %d");
    let title = format!(" Tasks ({}) — {} open ", date, open_count(app.tasks.tasks()));

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(title, title_style())),
    );

    f.render_widget(list, area);
}

fn open_count(tasks: &[Task]) -> usize {
    tasks.iter().filter(|t| !t.completed).count()
}

/// Create a single line for a task
/// Format: [x] Buy milk  · due 2024-03-01  [high]
fn create_task_line(task: &Task) -> Line<'static> {
    let mut spans = Vec::new();

    let checkbox = if task.completed { "[x] " } else { "[ ] " };
    spans.push(Span::raw(checkbox.to_string()));

    let title_span = if task.completed {
        Span::styled(task.title.clone(), done_style())
    } else {
        Span::raw(task.title.clone())
    };
    spans.push(title_span);

    if let Some(due) = task.due_date {
        spans.push(Span::raw("  · ".to_string()));
        spans.push(Span::styled(format!("due {}", due.format("%Y-%m-%d")), due_style()));
    }

    if let Some(priority) = task.priority {
        spans.push(Span::raw("  ".to_string()));
        spans.push(Span::styled(
            format!("[{}]", priority.name()),
            priority_style(priority),
        ));
    }

    Line::from(spans)
}
