//! Users panel (master list).

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Focus};
use crate::models::first_name;
use crate::state::LoadState;

use super::theme::{
    spinner_frame, COLOR_ACCENT, COLOR_BORDER, COLOR_BORDER_FOCUS, COLOR_DIM, COLOR_ERROR,
    COLOR_LOADING,
};
use super::truncate;

/// Render the users panel.
pub fn render_users(frame: &mut Frame, area: Rect, app: &App) {
    let border_color = if app.focus == Focus::Users {
        COLOR_BORDER_FOCUS
    } else {
        COLOR_BORDER
    };
    let block = Block::default()
        .title(" Users ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = match &app.users {
        LoadState::Loading => vec![Line::from(Span::styled(
            format!("{} Loading users...", spinner_frame(app.current_tick())),
            Style::default().fg(COLOR_LOADING),
        ))],
        LoadState::Failed(error) => vec![Line::from(Span::styled(
            format!("Failed to load users ({})", error.status),
            Style::default().fg(COLOR_ERROR),
        ))],
        LoadState::Idle => Vec::new(),
        LoadState::Loaded(users) => users
            .iter()
            .enumerate()
            .map(|(i, user)| {
                let selected = app
                    .selected_user
                    .as_ref()
                    .is_some_and(|selected| selected.id == user.id);
                let marker = if selected { "> " } else { "  " };
                let label = format!(
                    "{}{} ({})",
                    marker,
                    first_name(&user.name),
                    truncate(&user.username, 14)
                );
                let mut style = Style::default().fg(COLOR_DIM);
                if selected {
                    style = Style::default().fg(COLOR_ACCENT);
                }
                if i == app.user_cursor && app.focus == Focus::Users {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                Line::from(Span::styled(label, style))
            })
            .collect(),
    };

    frame.render_widget(Paragraph::new(lines), inner);
}
