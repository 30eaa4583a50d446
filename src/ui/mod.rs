//! UI module for rendering the TUI

mod admin;
mod forms;
mod home;
mod layout;
mod properties;
pub mod widgets;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let main_area = layout::create_layout(area);

    // Draw main content based on current view
    match &app.state.current_view {
        View::Home => home::draw(frame, main_area, app),
        View::Properties => properties::draw(frame, main_area, app),
        View::Register => forms::draw_register(frame, main_area, app),
        View::Admin => admin::draw(frame, main_area, app),
        View::PropertyCreate => forms::draw_property_create(frame, main_area, app),
    }

    // Draw status bar
    layout::draw_status_bar(frame, app);
}
