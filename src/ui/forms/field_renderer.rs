//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw a form field using FormField from the domain layer
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    error: Option<&str>,
) {
    draw_cell(
        frame,
        area,
        &field.label,
        &field.display_value(),
        is_active,
        error,
    );
}

/// Draw a single bordered input cell.
///
/// A revealed validation error turns the border red; when the cell is
/// empty the error message itself is shown in place of the value.
pub fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    is_active: bool,
    error: Option<&str>,
) {
    let border_style = if error.is_some() {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let value_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = match (value.is_empty(), error) {
        (true, Some(msg)) => Line::from(vec![
            Span::styled(msg.to_string(), Style::default().fg(Color::Red)),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]),
        (true, None) if !is_active => Line::from(Span::styled("(empty)", value_style)),
        _ => Line::from(vec![
            Span::styled(value.to_string(), value_style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]),
    };

    let block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(
        Paragraph::new(content).wrap(Wrap { trim: false }).block(block),
        area,
    );
}
