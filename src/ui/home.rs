//! Home view: title banner and the property search bar

use super::forms::field_renderer::{draw_field, draw_select_row};
use super::widgets::capitalize;
use crate::app::App;
use crate::state::{Validity, PROPERTY_STATUSES, PROPERTY_TYPES};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Banner
            Constraint::Length(3), // Search bar
            Constraint::Min(0),    // Hint text
        ])
        .margin(1)
        .split(area);

    draw_banner(frame, chunks[0]);
    draw_search_bar(frame, chunks[1], app);
    draw_hints(frame, chunks[2]);
}

fn draw_banner(frame: &mut Frame, area: Rect) {
    let banner = Paragraph::new(vec![
        Line::from(""),
        Line::styled(
            "L A B Y R I N T H",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            "Find the home that finds you",
            Style::default().fg(Color::DarkGray),
        ),
    ])
    .centered()
    .block(Block::default().borders(Borders::NONE));
    frame.render_widget(banner, area);
}

fn draw_search_bar(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(16), // Status select
            Constraint::Length(18), // Type select
            Constraint::Min(20),    // Location input
        ])
        .split(area);

    let search = &app.state.search;

    let status = search
        .status_index
        .map(|i| capitalize(PROPERTY_STATUSES[i]))
        .unwrap_or_default();
    draw_select_row(
        frame,
        chunks[0],
        "Status",
        &status,
        "Any",
        search.active_field == 0,
        Validity::Unknown,
    );

    let property_type = search
        .type_index
        .map(|i| capitalize(PROPERTY_TYPES[i]))
        .unwrap_or_default();
    draw_select_row(
        frame,
        chunks[1],
        "Type",
        &property_type,
        "Any",
        search.active_field == 1,
        Validity::Unknown,
    );

    draw_field(frame, chunks[2], &search.location, search.active_field == 2);
}

fn draw_hints(frame: &mut Frame, area: Rect) {
    let hints = Paragraph::new(vec![
        Line::from(""),
        Line::styled(
            "Press Enter to search listings",
            Style::default().fg(Color::DarkGray),
        ),
        Line::styled(
            "r to create an account, a for the admin panel",
            Style::default().fg(Color::DarkGray),
        ),
    ])
    .centered();
    frame.render_widget(hints, area);
}
