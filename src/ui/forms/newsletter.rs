//! Newsletter signup rendering

use super::field_renderer::{draw_field, draw_field_error};
use crate::app::App;
use crate::state::Form;
use crate::ui::components::BUTTON_HEIGHT;
use crate::ui::layout::draw_banner;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the newsletter signup form
pub fn draw_newsletter(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.newsletter;

    let block = Block::default()
        .title(" Newsletter ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Blurb
            Constraint::Length(3), // Email
            Constraint::Length(1), // Email error
            Constraint::Length(BUTTON_HEIGHT), // Action row
            Constraint::Length(1), // Banner
            Constraint::Min(0),
        ])
        .split(inner);

    let blurb = Paragraph::new(" Subscribe for occasional product updates.")
        .style(Style::default().fg(Color::Gray));
    frame.render_widget(blurb, chunks[0]);

    let error = form.errors.get(form.email.name);
    draw_field(
        frame,
        chunks[1],
        &form.email,
        form.active_field_index == 0,
        error,
    );
    draw_field_error(frame, chunks[2], error);

    super::draw_action_row(
        frame,
        chunks[3],
        form.selected_button,
        form.is_buttons_row_active(),
        &form.outcome,
    );

    draw_banner(frame, chunks[4], &form.outcome);
}
