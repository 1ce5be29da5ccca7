//! Registration form rendering
//!
//! Renders the role selector, the active role's profile fields, one row
//! per education entry and the action buttons. Error messages only show
//! once the form's visibility gate has been opened by a submit attempt.

use super::field_renderer::{draw_cell, draw_field};
use crate::app::App;
use crate::platform::{ADD_ENTRY_SHORTCUT, REMOVE_ENTRY_SHORTCUT};
use crate::state::{EducationField, FocusTarget, RegistrationForm, BUTTON_CANCEL, BUTTON_SUBMIT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw_registration(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.registration;

    let block = Block::default()
        .title(format!(" Register — {} ", form.role))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let has_list = form.role.schema().has_education_list;
    let entry_count = form.veterinarian.education.len();

    // Build the vertical layout to match the active schema
    let mut constraints = vec![Constraint::Length(3)]; // role selector
    for i in 0..form.scalar_count() {
        let multiline = form
            .active_scalar(i)
            .map(|f| f.is_multiline)
            .unwrap_or(false);
        constraints.push(Constraint::Length(if multiline { 4 } else { 3 }));
    }
    if has_list {
        constraints.push(Constraint::Length(1)); // education header
        constraints.extend(std::iter::repeat(Constraint::Length(3)).take(entry_count));
        constraints.push(Constraint::Length(1)); // add-entry row
    }
    constraints.push(Constraint::Length(3)); // buttons
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(area);

    let focus = form.focus_target();
    let mut chunk = 0;

    // Role selector
    draw_role_selector(frame, chunks[chunk], form, focus == FocusTarget::RoleSelector);
    chunk += 1;

    // Scalar fields of the active payload
    for i in 0..form.scalar_count() {
        if let Some(field) = form.active_scalar(i) {
            let error = form.visible_error(&field.name);
            draw_field(
                frame,
                chunks[chunk],
                field,
                focus == FocusTarget::Scalar(i),
                error.as_deref(),
            );
        }
        chunk += 1;
    }

    if has_list {
        draw_education_header(frame, chunks[chunk], form);
        chunk += 1;

        for entry in 0..entry_count {
            draw_education_row(frame, chunks[chunk], form, entry, focus);
            chunk += 1;
        }

        draw_add_entry_row(frame, chunks[chunk], focus == FocusTarget::AddEntry);
        chunk += 1;
    }

    draw_buttons_row(frame, chunks[chunk], form, focus == FocusTarget::Buttons);
}

fn draw_role_selector(frame: &mut Frame, area: Rect, form: &RegistrationForm, is_active: bool) {
    let value = format!("◀ {} ▶", form.role);
    draw_cell(frame, area, "Account Type", &value, is_active, None);
}

fn draw_education_header(frame: &mut Frame, area: Rect, form: &RegistrationForm) {
    let mut spans = vec![Span::styled(
        "Education",
        Style::default().fg(Color::White),
    )];

    if let Some(msg) = form.visible_error("education") {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Red)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// One editable row per education entry, three cells wide
fn draw_education_row(
    frame: &mut Frame,
    area: Rect,
    form: &RegistrationForm,
    entry: usize,
    focus: FocusTarget,
) {
    let Some(record) = form.veterinarian.education.get(entry) else {
        return;
    };

    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(41),
            Constraint::Percentage(25),
        ])
        .split(area);

    for (cell_area, field) in cells.iter().zip(EducationField::ALL) {
        let error = form.visible_error(&field.error_key(entry));
        let is_active = focus == FocusTarget::Education { entry, field };
        draw_cell(
            frame,
            *cell_area,
            field.label(),
            record.get(field),
            is_active,
            error.as_deref(),
        );
    }
}

fn draw_add_entry_row(frame: &mut Frame, area: Rect, is_active: bool) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let line = Line::from(Span::styled(
        format!("+ Add education entry ({ADD_ENTRY_SHORTCUT}, {REMOVE_ENTRY_SHORTCUT}: remove)"),
        style,
    ));
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_buttons_row(frame: &mut Frame, area: Rect, form: &RegistrationForm, is_active: bool) {
    let button = |label: &str, selected: bool| {
        let style = if is_active && selected {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray)
        };
        Span::styled(format!("[ {label} ]"), style)
    };

    let mut spans = vec![
        button("Cancel", form.selected_button == BUTTON_CANCEL),
        Span::raw("  "),
        button("Submit", form.selected_button == BUTTON_SUBMIT),
        Span::raw("   "),
    ];

    if form.is_submit_ready() {
        spans.push(Span::styled("Ready", Style::default().fg(Color::Green)));
    } else if form.errors_revealed() {
        let count = form.compute_errors().len();
        spans.push(Span::styled(
            format!("{count} field(s) need attention"),
            Style::default().fg(Color::Red),
        ));
    }

    let block = Block::default().borders(Borders::NONE);
    frame.render_widget(
        Paragraph::new(Line::from(spans)).block(block),
        area,
    );
}
