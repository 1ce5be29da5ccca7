//! Post-submission confirmation screen

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.registration;

    let block = Block::default()
        .title(" Registration Complete ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("You are registered as: {}", form.role),
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            format!("Session {}", form.session_id),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Enter", Style::default().fg(Color::Cyan)),
            Span::raw("  Browse pets"),
        ]),
        Line::from(vec![
            Span::styled("Esc", Style::default().fg(Color::Cyan)),
            Span::raw("  Back to home"),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
