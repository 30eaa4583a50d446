//! Property create form rendering (admin panel)

use super::field_renderer::{draw_field, draw_select_row};
use crate::app::App;
use crate::state::{Form, FormState, PropertyCreateForm, Validity};
use crate::ui::widgets::capitalize;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw_property_create(frame: &mut Frame, area: Rect, app: &App) {
    let FormState::PropertyCreate(form) = &app.state.form_state else {
        return;
    };

    let block = Block::default()
        .title(" New Property ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(40),    // Fields
            Constraint::Length(30), // Features and attachments
        ])
        .margin(1)
        .split(inner);

    draw_fields(frame, columns[0], form);
    draw_side_panel(frame, columns[1], app, form);
}

fn draw_fields(frame: &mut Frame, area: Rect, form: &PropertyCreateForm) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Type + status selects
            Constraint::Length(3), // Price + area
            Constraint::Length(3), // Bedrooms + bathrooms
            Constraint::Length(3), // City + street
            Constraint::Length(3), // Country
            Constraint::Min(4),    // Description
            Constraint::Length(2), // Messages live in the status bar
        ])
        .split(area);

    let selects = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);
    draw_select_row(
        frame,
        selects[0],
        "Type",
        &capitalize(form.property_type()),
        "Choose a type",
        form.active_field_index == 0,
        Validity::Unknown,
    );
    draw_select_row(
        frame,
        selects[1],
        "Status",
        &capitalize(form.property_status()),
        "Choose a status",
        form.active_field_index == 1,
        Validity::Unknown,
    );

    let paired = [(2usize, 3usize), (4, 5), (6, 7)];
    for (row, (left, right)) in paired.iter().enumerate() {
        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[row + 1]);
        if let Some(field) = form.get_field(*left) {
            draw_field(frame, halves[0], field, form.active_field_index == *left);
        }
        if let Some(field) = form.get_field(*right) {
            draw_field(frame, halves[1], field, form.active_field_index == *right);
        }
    }

    if let Some(field) = form.get_field(8) {
        draw_field(frame, rows[4], field, form.active_field_index == 8);
    }
    if let Some(field) = form.get_field(9) {
        draw_field(frame, rows[5], field, form.active_field_index == 9);
    }
}

fn draw_side_panel(frame: &mut Frame, area: Rect, app: &App, form: &PropertyCreateForm) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(6),    // Features checklist
            Constraint::Length(3), // Attachment path input
            Constraint::Min(4),    // Attached images
        ])
        .split(area);

    draw_features(frame, rows[0], app, form);

    draw_field(
        frame,
        rows[1],
        &form.attachment_input,
        form.is_attachments_row_active(),
    );

    draw_attachments(frame, rows[2], form);
}

fn draw_features(frame: &mut Frame, area: Rect, app: &App, form: &PropertyCreateForm) {
    let active = form.is_features_row_active();
    let border = if active { Color::Cyan } else { Color::DarkGray };

    let lines: Vec<Line> = if app.state.feature_options.is_empty() {
        vec![Line::styled(
            "No features available",
            Style::default().fg(Color::DarkGray),
        )]
    } else {
        app.state
            .feature_options
            .iter()
            .enumerate()
            .map(|(i, option)| {
                let checked = form.features.contains(&option.id);
                let marker = if checked { "[x] " } else { "[ ] " };
                let style = if active && i == form.feature_cursor {
                    Style::default().fg(Color::Cyan)
                } else if checked {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default().fg(Color::Gray)
                };
                Line::from(Span::styled(
                    format!("{marker}{}", capitalize(&option.name)),
                    style,
                ))
            })
            .collect()
    };

    let list = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(" Features ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    );
    frame.render_widget(list, area);
}

fn draw_attachments(frame: &mut Frame, area: Rect, form: &PropertyCreateForm) {
    let lines: Vec<Line> = if form.attachments.is_empty() {
        vec![Line::styled(
            "No images attached",
            Style::default().fg(Color::DarkGray),
        )]
    } else {
        form.attachments
            .iter()
            .map(|a| Line::from(Span::raw(a.file_name.clone())))
            .collect()
    };

    let count = form.attachments.len();
    let list = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(format!(" Images ({count}) "))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(list, area);
}
