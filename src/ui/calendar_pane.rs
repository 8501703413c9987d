use crate::app::AppState;
use crate::calendar::{project_today, CalendarEvent};
use crate::ui::styles::{border_style, default_style, done_style, due_style, hint_style, title_style};
use chrono::{Datelike, NaiveDate};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the calendar pane: a month-scoped agenda of projected events
pub fn render_calendar_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let month = app.calendar_month;
    let mut events: Vec<CalendarEvent> = project_today(app.tasks.tasks())
        .filter(|e| in_month(e.start, month))
        .collect();
    events.sort_by_key(|e| e.start);

    let mut lines = Vec::new();
    if events.is_empty() {
        lines.push(Line::styled("  No tasks this month", hint_style()));
    }

    let mut last_date: Option<NaiveDate> = None;
    for event in &events {
        if last_date != Some(event.start) {
            lines.push(Line::styled(
                format!(" {}", event.start.format("%a %b %d")),
                due_style(),
            ));
            last_date = Some(event.start);
        }

        let marker = if event.completed { "   ✓ " } else { "   • " };
        let style = if event.completed {
            done_style()
        } else {
            default_style()
        };
        lines.push(Line::from(vec![
            Span::raw(marker.to_string()),
            Span::styled(event.title.clone(), style),
        ]));
    }

    let title = format!(" Calendar — {} ", month.format("%B %Y"));
    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(title, title_style())),
    );

    f.render_widget(paragraph, area);
}

fn in_month(date: NaiveDate, month: NaiveDate) -> bool {
    date.year() == month.year() && date.month() == month.month()
}
