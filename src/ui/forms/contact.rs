//! Contact form rendering

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

/// Draw the general contact form
pub fn draw_contact(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.contact;

    let block = Block::default()
        .title(" Contact Us ")
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
            Constraint::Min(5),    // Message
            Constraint::Length(1), // Message error
            Constraint::Length(BUTTON_HEIGHT), // Action row
            Constraint::Length(1), // Banner
        ])
        .split(inner);

    for (idx, chunk_idx) in [(0usize, 0usize), (1, 2), (2, 4), (3, 6)] {
        if let Some(field) = form.get_field(idx) {
            let error = form.errors.get(field.name);
            draw_field(
                frame,
                chunks[chunk_idx],
                field,
                form.active_field_index == idx,
                error,
            );
            draw_field_error(frame, chunks[chunk_idx + 1], error);
        }
    }

    super::draw_action_row(
        frame,
        chunks[8],
        form.selected_button,
        form.is_buttons_row_active(),
        &form.outcome,
    );

    draw_banner(frame, chunks[9], &form.outcome);
}
