use crate::app::AppState;
use crate::timer::Phase;
use crate::ui::styles::{border_style, break_phase_style, hint_style, title_style, work_phase_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the focus timer sidebar
pub fn render_timer_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let phase_style = match app.timer.phase() {
        Phase::Work => work_phase_style(),
        Phase::Break => break_phase_style(),
    };

    let state = if app.timer.is_running() {
        "running"
    } else {
        "paused"
    };

    let lines = vec![
        Line::raw(""),
        Line::from(Span::styled(
            format!("     {}", app.timer.display()),
            phase_style,
        )),
        Line::raw(""),
        Line::raw(format!("  {} time · {}", app.timer.phase().label(), state)),
        Line::raw(format!("  Cycles: {}", app.timer.completed_work_cycles())),
        Line::raw(""),
        Line::styled("  t start/pause · s switch", hint_style()),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(" Focus Timer ", title_style())),
    );

    f.render_widget(paragraph, area);
}
