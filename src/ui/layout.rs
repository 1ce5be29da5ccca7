//! Layout components (nav bar, status bar)

use crate::app::App;
use crate::config::TuiConfig;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Nav bar entries, in display order
const NAV_ITEMS: &[(View, &str)] = &[
    (View::Welcome, "Home"),
    (View::Register, "Register"),
    (View::Browse, "Browse Pets"),
];

/// Create the main layout: nav bar on top, status bar reserved at the bottom
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Nav bar
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the navigation bar
pub fn draw_nav_bar(frame: &mut Frame, area: Rect, app: &App, config: &TuiConfig) {
    let mut spans = vec![Span::styled(
        format!(" {} ", config.platform_name()),
        Style::default().fg(Color::Black).bg(Color::Cyan),
    )];

    for (view, label) in NAV_ITEMS {
        let is_current = app.state.current_view == *view;
        let locked = view.requires_auth() && !app.state.is_authenticated;

        let style = if is_current {
            Style::default().fg(Color::Cyan)
        } else if locked {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Gray)
        };

        spans.push(Span::raw("  "));
        spans.push(Span::styled(*label, style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App, config: &TuiConfig) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![];

    // Auth indicator
    let auth_status = if app.state.is_authenticated {
        Span::styled(" ● ", Style::default().fg(Color::Green))
    } else {
        Span::styled(" ○ ", Style::default().fg(Color::Red))
    };
    spans.push(auth_status);

    if config.show_hints() {
        let hints = get_view_hints(&app.state.current_view);
        spans.push(Span::styled(hints, Style::default().fg(Color::DarkGray)));
    }

    // Transient status message
    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Yellow)));
    }

    let quit_hint = " ^C:quit ";

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: quit_hint.len() as u16,
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(view: &View) -> String {
    match view {
        View::Welcome => "r:register  b:browse  q:quit".to_string(),
        View::Register => format!(
            "Tab:next  \u{2190}/\u{2192}:role/button  {SUBMIT_SHORTCUT}:submit  Esc:back"
        ),
        View::Confirmation => "Enter:browse  Esc:home".to_string(),
        View::Browse => "Esc:back  q:quit".to_string(),
    }
}
