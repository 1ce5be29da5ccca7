//! Welcome screen

use crate::app::App;
use crate::config::TuiConfig;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App, config: &TuiConfig) {
    let block = Block::default()
        .title(format!(" {} ", config.platform_name()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let greeting = if app.state.is_authenticated {
        "Welcome back! Your account is active."
    } else {
        "Find your new best friend. Register to get started."
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            greeting,
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("r", Style::default().fg(Color::Cyan)),
            Span::raw("  Register as an adopter, shelter or veterinarian"),
        ]),
        Line::from(vec![
            Span::styled("b", Style::default().fg(Color::Cyan)),
            Span::raw("  Browse pets (requires an account)"),
        ]),
        Line::from(vec![
            Span::styled("q", Style::default().fg(Color::Cyan)),
            Span::raw("  Quit"),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
