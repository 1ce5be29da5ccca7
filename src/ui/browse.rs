//! Pet browsing placeholder view
//!
//! Listing data comes from the platform backend, which this client does
//! not talk to yet.

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, _app: &App) {
    let block = Block::default()
        .title(" Browse Pets ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let lines = vec![
        Line::from(""),
        Line::from("No listings available."),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .style(Style::default().fg(Color::DarkGray))
            .block(block),
        area,
    );
}
