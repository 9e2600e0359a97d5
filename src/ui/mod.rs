//! Rendering of the view state.
//!
//! The UI layer only reads the projections `App` exposes (users, selected
//! user, displayed posts, per-post comment state) and draws them; every
//! state change happens in the app layer.

mod posts;
mod theme;
mod users;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use theme::{COLOR_DIM, COLOR_ERROR};

/// Users panel width as a percentage of the terminal width.
const USERS_PANEL_PERCENT: u16 = 28;

/// Truncate a string to fit a width, adding "..." if needed.
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len > 3 {
        let cut: String = s.chars().take(max_len - 3).collect();
        format!("{}...", cut)
    } else {
        s.chars().take(max_len).collect()
    }
}

/// Render one frame.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(USERS_PANEL_PERCENT),
            Constraint::Percentage(100 - USERS_PANEL_PERCENT),
        ])
        .split(rows[0]);

    users::render_users(frame, panels[0], app);
    posts::render_posts(frame, panels[1], app);
    render_status_bar(frame, rows[1], app);
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let line = match &app.last_error {
        Some(error) => Line::from(Span::styled(
            format!(" {} ", error),
            Style::default().fg(COLOR_ERROR),
        )),
        None => Line::from(Span::styled(
            " tab: focus · enter: select/expand · a: show all · r: refresh · q: quit ",
            Style::default().fg(COLOR_DIM),
        )),
    };
    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_string_unchanged() {
        assert_eq!(truncate("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_long_string_gets_ellipsis() {
        assert_eq!(truncate("hello world", 8), "hello...");
    }

    #[test]
    fn test_truncate_tiny_width() {
        assert_eq!(truncate("hello", 2), "he");
    }
}
