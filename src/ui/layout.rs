//! Layout components (tab bar, banner, status bar)

use crate::app::App;
use crate::state::{SubmissionOutcome, View};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into tab bar, content, and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Tab bar
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the tab bar listing the three forms
pub fn draw_tab_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::raw(" ")];
    for (idx, view) in View::ALL.iter().enumerate() {
        let label = format!(" F{} {} ", idx + 1, view.title());
        let style = if *view == app.state.current_view {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Draw the outcome banner for a form (one line above the status bar)
pub fn draw_banner(frame: &mut Frame, area: Rect, outcome: &SubmissionOutcome) {
    let line = match outcome {
        SubmissionOutcome::Idle => return,
        SubmissionOutcome::Sending => Line::from(Span::styled(
            " Sending...",
            Style::default().fg(Color::Yellow),
        )),
        SubmissionOutcome::Settled(settled) => {
            let color = if settled.success {
                Color::Green
            } else {
                Color::Red
            };
            Line::from(Span::styled(
                format!(" {}", settled.message),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ))
        }
    };
    frame.render_widget(Paragraph::new(line), area);
}

/// Draw the status bar with key hints for the current view
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let hints = get_view_hints(&app.state.current_view);
    let status = Paragraph::new(Line::from(vec![
        Span::raw(" "),
        Span::styled(hints, Style::default().fg(Color::Gray)),
    ]))
    .style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Quit hint on the right
    let quit_hint = " Esc:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: quit_hint.len().min(area.width as usize) as u16,
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(view: &View) -> String {
    let submit = crate::platform::SUBMIT_SHORTCUT;
    match view {
        View::Contact => format!("Tab:next  Enter:newline in message  {submit}:submit"),
        View::ServiceInquiry => {
            format!("Tab:next  Up/Down:choose option  {submit}:submit")
        }
        View::Newsletter => format!("Enter:subscribe  {submit}:submit"),
    }
}
