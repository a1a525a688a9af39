//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let (tab_area, content_area, status_area) = layout::create_layout(area);

    layout::draw_tab_bar(frame, tab_area, app);

    match &app.state.current_view {
        View::Contact => forms::draw_contact(frame, content_area, app),
        View::ServiceInquiry => forms::draw_inquiry(frame, content_area, app),
        View::Newsletter => forms::draw_newsletter(frame, content_area, app),
    }

    layout::draw_status_bar(frame, status_area, app);
}
