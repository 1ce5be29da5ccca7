//! UI module for rendering the TUI

mod browse;
mod confirmation;
mod forms;
mod layout;
mod welcome;

use crate::app::App;
use crate::config::TuiConfig;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App, config: &TuiConfig) {
    let area = frame.area();

    let (nav_area, main_area) = layout::create_layout(area);

    layout::draw_nav_bar(frame, nav_area, app, config);

    // Draw main content based on current view
    match app.state.current_view {
        View::Welcome => welcome::draw(frame, main_area, app, config),
        View::Register => forms::draw_registration(frame, main_area, app),
        View::Confirmation => confirmation::draw(frame, main_area, app),
        View::Browse => browse::draw(frame, main_area, app),
    }

    layout::draw_status_bar(frame, app, config);
}
