//! Posts panel (detail view) with expandable per-post comments.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, Focus, POSTS_PREVIEW_COUNT};
use crate::state::{LoadState, PostView};

use super::theme::{
    spinner_frame, COLOR_ACCENT, COLOR_BORDER, COLOR_BORDER_FOCUS, COLOR_DIM, COLOR_ERROR,
    COLOR_LOADING, COLOR_TITLE,
};
use super::truncate;

/// Render the posts panel for the selected user.
pub fn render_posts(frame: &mut Frame, area: Rect, app: &App) {
    let border_color = if app.focus == Focus::Posts {
        COLOR_BORDER_FOCUS
    } else {
        COLOR_BORDER
    };
    let title = match &app.selected_user {
        Some(user) => format!(" Posts — {} ", user.name),
        None => " Posts ".to_string(),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    match &app.posts {
        LoadState::Idle => {
            lines.push(Line::from(Span::styled(
                "Select a user to see their posts",
                Style::default().fg(COLOR_DIM),
            )));
        }
        LoadState::Loading => {
            lines.push(Line::from(Span::styled(
                format!("{} Loading posts...", spinner_frame(app.current_tick())),
                Style::default().fg(COLOR_LOADING),
            )));
        }
        LoadState::Failed(error) => {
            lines.push(Line::from(Span::styled(
                format!("Failed to load posts ({})", error.status),
                Style::default().fg(COLOR_ERROR),
            )));
        }
        LoadState::Loaded(_) => {
            let width = inner.width.saturating_sub(4) as usize;
            for (i, view) in app.displayed_posts().iter().enumerate() {
                let cursor_here = i == app.post_cursor && app.focus == Focus::Posts;
                push_post(&mut lines, view, cursor_here, width, app.current_tick());
            }
            push_footer(&mut lines, app);
        }
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn push_post(lines: &mut Vec<Line>, view: &PostView, cursor_here: bool, width: usize, tick: u64) {
    let arrow = if view.expanded { "v" } else { ">" };
    let mut title_style = Style::default().fg(COLOR_TITLE);
    if cursor_here {
        title_style = title_style.add_modifier(Modifier::REVERSED);
    }
    lines.push(Line::from(Span::styled(
        format!("{} {}", arrow, truncate(&view.post.title, width)),
        title_style,
    )));

    if view.expanded {
        lines.push(Line::from(Span::styled(
            format!("  {}", view.post.body),
            Style::default().fg(COLOR_ACCENT),
        )));
        push_comments(lines, view, tick);
    }
    lines.push(Line::default());
}

fn push_comments(lines: &mut Vec<Line>, view: &PostView, tick: u64) {
    match &view.comments {
        LoadState::Loading => {
            lines.push(Line::from(Span::styled(
                format!("  {} Loading comments...", spinner_frame(tick)),
                Style::default().fg(COLOR_LOADING),
            )));
        }
        LoadState::Failed(error) => {
            lines.push(Line::from(Span::styled(
                format!("  Failed to load comments ({}), expand again to retry", error.status),
                Style::default().fg(COLOR_ERROR),
            )));
        }
        LoadState::Idle => {}
        LoadState::Loaded(comments) => {
            lines.push(Line::from(Span::styled(
                format!("  {} comment(s)", comments.len()),
                Style::default().fg(COLOR_DIM),
            )));
            for comment in comments {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("  • {} ", comment.email),
                        Style::default().fg(COLOR_ACCENT),
                    ),
                    Span::styled(comment.body.clone(), Style::default().fg(COLOR_DIM)),
                ]));
            }
        }
    }
}

fn push_footer(lines: &mut Vec<Line>, app: &App) {
    if !app.has_more_posts() {
        return;
    }
    let total = app.posts.data().map(Vec::len).unwrap_or_default();
    let hint = if app.show_all_posts {
        format!("[a] show first {} only", POSTS_PREVIEW_COUNT)
    } else {
        format!("[a] show all {} posts", total)
    };
    lines.push(Line::from(Span::styled(
        hint,
        Style::default().fg(COLOR_DIM).add_modifier(Modifier::ITALIC),
    )));
}
