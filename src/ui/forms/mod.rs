//! Form rendering

mod contact;
mod field_renderer;
mod inquiry;
mod newsletter;

pub use contact::draw_contact;
pub use inquiry::draw_inquiry;
pub use newsletter::draw_newsletter;

use crate::state::{SubmissionOutcome, BUTTON_CLEAR, BUTTON_SUBMIT};
use crate::ui::components::render_button;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

/// Draw the Clear / Submit action row shared by all forms.
/// Submit is disabled and relabeled while a request is in flight.
fn draw_action_row(
    frame: &mut Frame,
    area: Rect,
    selected_button: usize,
    is_focused: bool,
    outcome: &SubmissionOutcome,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(12), Constraint::Length(16)])
        .split(area);

    render_button(
        frame,
        chunks[0],
        "Clear",
        is_focused && selected_button == BUTTON_CLEAR,
        true,
    );

    let sending = outcome.is_sending();
    let submit_label = if sending { "Sending..." } else { "Submit" };
    render_button(
        frame,
        chunks[1],
        submit_label,
        is_focused && selected_button == BUTTON_SUBMIT,
        !sending,
    );
}
