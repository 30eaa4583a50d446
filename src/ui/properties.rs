//! Search results view

use super::widgets::{capitalize, render_scrollable_list};
use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    if app.state.properties.is_empty() {
        let empty = Paragraph::new("No properties matched your search.")
            .style(Style::default().fg(Color::DarkGray))
            .centered()
            .block(Block::default().title(" Results ").borders(Borders::ALL));
        frame.render_widget(empty, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(40),    // List
            Constraint::Length(42), // Detail of the selected listing
        ])
        .split(area);

    draw_list(frame, chunks[0], app);
    draw_detail(frame, chunks[1], app);
}

fn draw_list(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .state
        .properties
        .iter()
        .map(|p| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{} ", capitalize(&p.property_type)),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(
                    format!("[{}] ", p.status),
                    Style::default().fg(Color::Yellow),
                ),
                Span::raw(format!("{} EUR  ", p.price)),
                Span::styled(p.location_line(), Style::default().fg(Color::DarkGray)),
            ]))
        })
        .collect();

    let count = items.len();
    let list = List::new(items)
        .block(
            Block::default()
                .title(format!(" Results ({count}) "))
                .borders(Borders::ALL),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        );

    render_scrollable_list(frame, area, list, app.state.selected_index);
}

fn draw_detail(frame: &mut Frame, area: Rect, app: &App) {
    let Some(property) = app.state.properties.get(app.state.selected_index) else {
        return;
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Type: ", Style::default().fg(Color::DarkGray)),
            Span::raw(capitalize(&property.property_type)),
        ]),
        Line::from(vec![
            Span::styled("Status: ", Style::default().fg(Color::DarkGray)),
            Span::raw(capitalize(&property.status)),
        ]),
        Line::from(vec![
            Span::styled("Price: ", Style::default().fg(Color::DarkGray)),
            Span::raw(format!("{} EUR", property.price)),
        ]),
        Line::from(vec![
            Span::styled("Area: ", Style::default().fg(Color::DarkGray)),
            Span::raw(format!("{} sq ft", property.area)),
        ]),
        Line::from(vec![
            Span::styled("Rooms: ", Style::default().fg(Color::DarkGray)),
            Span::raw(format!(
                "{} bedrooms, {} bathrooms",
                property.bedrooms, property.bathrooms
            )),
        ]),
        Line::from(vec![
            Span::styled("Location: ", Style::default().fg(Color::DarkGray)),
            Span::raw(property.location_line()),
        ]),
    ];

    if !property.description.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::raw(property.description.clone()));
    }

    let detail = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().title(" Listing ").borders(Borders::ALL));
    frame.render_widget(detail, area);
}
