//! Service-inquiry form rendering

use super::field_renderer::{draw_field, draw_field_error};
use crate::app::App;
use crate::state::Form;
use crate::ui::components::BUTTON_HEIGHT;
use crate::ui::layout::draw_banner;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Draw the service-inquiry form
pub fn draw_inquiry(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.inquiry;

    let block = Block::default()
        .title(" Request a Service ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Name
            Constraint::Length(1), // Name error
            Constraint::Length(3), // Email
            Constraint::Length(1), // Email error
            Constraint::Length(3), // Phone
            Constraint::Length(1), // Phone error
            Constraint::Length(3), // Service
            Constraint::Length(1), // Service error
            Constraint::Min(4),    // Details
            Constraint::Length(1), // Details error
            Constraint::Length(3), // Budget
            Constraint::Length(1), // Budget error
            Constraint::Length(BUTTON_HEIGHT), // Action row
            Constraint::Length(1), // Banner
        ])
        .split(inner);

    for idx in 0..6 {
        if let Some(field) = form.get_field(idx) {
            let error = form.errors.get(field.name);
            draw_field(
                frame,
                chunks[idx * 2],
                field,
                form.active_field_index == idx,
                error,
            );
            draw_field_error(frame, chunks[idx * 2 + 1], error);
        }
    }

    super::draw_action_row(
        frame,
        chunks[12],
        form.selected_button,
        form.is_buttons_row_active(),
        &form.outcome,
    );

    draw_banner(frame, chunks[13], &form.outcome);
}
