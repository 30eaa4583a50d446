//! Admin view: login modal until a session exists, panel afterwards

use super::forms::field_renderer::draw_field;
use super::layout::centered_rect;
use crate::app::App;
use crate::state::FormState;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    if app.state.is_admin() {
        draw_panel(frame, area, app);
    } else {
        draw_login_modal(frame, area, app);
    }
}

fn draw_panel(frame: &mut Frame, area: Rect, app: &App) {
    let email = app
        .state
        .session
        .as_ref()
        .map(|s| s.email.as_str())
        .unwrap_or("");

    let panel = Paragraph::new(vec![
        Line::from(""),
        Line::styled(
            format!("Signed in as {email}"),
            Style::default().fg(Color::Green),
        ),
        Line::from(""),
        Line::styled("p  Create a new property", Style::default().fg(Color::Gray)),
        Line::styled("l  Log out", Style::default().fg(Color::Gray)),
        Line::styled("Esc  Back to home", Style::default().fg(Color::Gray)),
    ])
    .centered()
    .block(
        Block::default()
            .title(" Admin Panel ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(panel, area);
}

fn draw_login_modal(frame: &mut Frame, area: Rect, app: &App) {
    let FormState::AdminLogin(form) = &app.state.form_state else {
        return;
    };

    let modal = centered_rect(50, 10, area);
    frame.render_widget(Clear, modal);

    let block = Block::default()
        .title(" Admin Login ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(modal);
    frame.render_widget(block, modal);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Email
            Constraint::Length(3), // Password
            Constraint::Length(1), // Messages
        ])
        .split(inner);

    draw_field(frame, chunks[0], &form.email, form.active_field_index == 0);
    draw_field(frame, chunks[1], &form.password, form.active_field_index == 1);
    draw_messages(frame, chunks[2], app);
}

fn draw_messages(frame: &mut Frame, area: Rect, app: &App) {
    if app.state.submission.messages.is_empty() {
        return;
    }
    let message = Paragraph::new(app.state.submission.messages.join("  "))
        .style(Style::default().fg(Color::Red))
        .centered();
    frame.render_widget(message, area);
}
