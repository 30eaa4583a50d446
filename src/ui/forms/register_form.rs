//! Registration form rendering

use super::field_renderer::{draw_field, draw_select_row};
use crate::app::App;
use crate::state::{Form, FormState, RegisterForm, Validity, ROLE_PLACEHOLDER_ID};
use crate::ui::widgets::capitalize;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw_register(frame: &mut Frame, area: Rect, app: &App) {
    let FormState::Register(form) = &app.state.form_state else {
        return;
    };

    let block = Block::default()
        .title(" Create Account ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Username
            Constraint::Length(3), // Phone
            Constraint::Length(3), // Email
            Constraint::Length(3), // Password
            Constraint::Length(3), // Confirm password
            Constraint::Length(3), // Role select
            Constraint::Min(1),    // Messages
        ])
        .margin(1)
        .split(inner);

    for index in 0..5 {
        if let Some(field) = form.get_field(index) {
            draw_field(frame, chunks[index], field, form.active_field_index == index);
        }
    }

    draw_role_row(frame, chunks[5], app, form);
    draw_messages(frame, chunks[6], app);
}

fn draw_role_row(frame: &mut Frame, area: Rect, app: &App, form: &RegisterForm) {
    let name = if form.role_id == ROLE_PLACEHOLDER_ID {
        String::new()
    } else {
        app.state
            .role_options
            .iter()
            .find(|o| o.id == form.role_id)
            .map(|o| capitalize(&o.name))
            .unwrap_or_default()
    };

    draw_select_row(
        frame,
        area,
        "Role",
        &name,
        "Choose a role",
        form.is_role_row_active(),
        form.role_validity,
    );
}

fn draw_messages(frame: &mut Frame, area: Rect, app: &App) {
    if app.state.submission.messages.is_empty() {
        // Surface which fields still need attention instead
        if let FormState::Register(form) = &app.state.form_state {
            let invalid: Vec<&str> = (0..5)
                .filter_map(|i| form.get_field(i))
                .filter(|f| f.validity == Validity::Invalid)
                .map(|f| f.label.as_str())
                .collect();
            if !invalid.is_empty() {
                let hint = Paragraph::new(Line::from(vec![
                    Span::styled("Check: ", Style::default().fg(Color::DarkGray)),
                    Span::styled(invalid.join(", "), Style::default().fg(Color::Red)),
                ]));
                frame.render_widget(hint, area);
            }
        }
        return;
    }

    let lines: Vec<Line> = app
        .state
        .submission
        .messages
        .iter()
        .map(|m| Line::styled(m.clone(), Style::default().fg(Color::Red)))
        .collect();
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}
