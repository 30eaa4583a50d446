//! Layout components (content area, status bar)

use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Create the main layout, reserving the bottom line for the status bar
pub fn create_layout(area: Rect) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    chunks[0]
}

/// Center a modal of the given size within the area
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    // Build status bar content
    let mut spans = vec![];

    // Session indicator
    let session_status = if app.state.is_admin() {
        Span::styled(" ● admin ", Style::default().fg(Color::Green))
    } else {
        Span::styled(" ○ ", Style::default().fg(Color::DarkGray))
    };
    spans.push(session_status);

    // View-specific hints
    let hints = get_view_hints(&app.state.current_view, app.state.is_admin());
    spans.push(Span::styled(hints, Style::default().fg(Color::DarkGray)));

    // Submission messages win over everything else
    if !app.state.submission.messages.is_empty() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            app.state.submission.messages.join("  "),
            Style::default().fg(Color::Red),
        ));
    } else if let Some(err) = app.state.errors.last() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(err, Style::default().fg(Color::Red)));
    } else if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    if app.state.submission.is_submitting() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            "Submitting...",
            Style::default().fg(Color::Yellow),
        ));
    }

    let quit_hint = " ^C:quit ";

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    // Render quit hint on the right
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: quit_hint.len() as u16,
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(view: &View, is_admin: bool) -> String {
    match view {
        View::Home => {
            "Tab:field  Space:cycle  Enter:search  r:register  a:admin  q:quit".to_string()
        }
        View::Properties => "↑/↓:nav  Esc:back  q:quit".to_string(),
        View::Register => format!("Tab:next  {SUBMIT_SHORTCUT}:submit  Esc:cancel"),
        View::Admin if is_admin => "p:new property  l:logout  Esc:back".to_string(),
        View::Admin => "Tab:next  Enter:login  Esc:cancel".to_string(),
        View::PropertyCreate => {
            format!("Tab:next  Space:cycle/toggle  {SUBMIT_SHORTCUT}:submit  Esc:cancel")
        }
    }
}
