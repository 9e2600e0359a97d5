//! Message and key handlers.
//!
//! `handle_message` is the single place fetch results are applied to
//! state, so the stale-result and failure rules live in one spot.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, warn};

use crate::app::{App, AppMessage, Focus};
use crate::state::{LoadState, PostView};

impl App {
    /// Apply one fetch result to the view state.
    pub fn handle_message(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::UsersLoaded(users) => {
                self.stale_users = None;
                if self.user_cursor >= users.len() {
                    self.user_cursor = users.len().saturating_sub(1);
                }
                self.users = LoadState::Loaded(users);
            }
            AppMessage::UsersLoadFailed(error) => {
                warn!(status = error.status, "error loading users: {}", error);
                self.last_error = Some(error.clone());
                // A failed refresh keeps the previously loaded list.
                self.users = match self.stale_users.take() {
                    Some(previous) => LoadState::Loaded(previous),
                    None => LoadState::Failed(error),
                };
            }
            AppMessage::PostsLoaded { epoch, posts } => {
                if epoch != self.posts_epoch {
                    debug!(epoch, current = self.posts_epoch, "discarding stale posts result");
                    return;
                }
                self.posts = LoadState::Loaded(posts.into_iter().map(PostView::new).collect());
                self.post_cursor = 0;
            }
            AppMessage::PostsLoadFailed { epoch, error } => {
                if epoch != self.posts_epoch {
                    debug!(epoch, current = self.posts_epoch, "discarding stale posts failure");
                    return;
                }
                warn!(status = error.status, "error loading posts: {}", error);
                self.last_error = Some(error.clone());
                self.posts = LoadState::Failed(error);
            }
            AppMessage::CommentsLoaded { post_id, comments } => {
                // The post may be gone if the user switched away while the
                // fetch was in flight; the result is dropped with it.
                if let LoadState::Loaded(views) = &mut self.posts {
                    if let Some(view) = views.iter_mut().find(|v| v.post.id == post_id) {
                        view.comments = LoadState::Loaded(comments);
                    }
                }
            }
            AppMessage::CommentsLoadFailed { post_id, error } => {
                warn!(
                    status = error.status,
                    post_id, "error loading comments: {}", error
                );
                self.last_error = Some(error.clone());
                if let LoadState::Loaded(views) = &mut self.posts {
                    if let Some(view) = views.iter_mut().find(|v| v.post.id == post_id) {
                        view.comments = LoadState::Failed(error);
                    }
                }
            }
        }
        self.needs_redraw = true;
    }

    /// Handle one key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        self.needs_redraw = true;
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focus = match self.focus {
                    Focus::Users => Focus::Posts,
                    Focus::Posts => Focus::Users,
                };
            }
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor_up(),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor_down(),
            KeyCode::Enter => self.activate(),
            KeyCode::Char(' ') if self.focus == Focus::Posts => {
                self.toggle_post_expansion(self.post_cursor);
            }
            KeyCode::Char('a') => self.toggle_show_all_posts(),
            KeyCode::Char('r') => self.load_users(),
            _ => {}
        }
    }

    fn move_cursor_up(&mut self) {
        match self.focus {
            Focus::Users => self.user_cursor = self.user_cursor.saturating_sub(1),
            Focus::Posts => self.post_cursor = self.post_cursor.saturating_sub(1),
        }
    }

    fn move_cursor_down(&mut self) {
        match self.focus {
            Focus::Users => {
                let len = self.users().len();
                if len > 0 && self.user_cursor + 1 < len {
                    self.user_cursor += 1;
                }
            }
            Focus::Posts => {
                let len = self.displayed_posts().len();
                if len > 0 && self.post_cursor + 1 < len {
                    self.post_cursor += 1;
                }
            }
        }
    }

    fn activate(&mut self) {
        match self.focus {
            Focus::Users => {
                if let Some(user) = self.users().get(self.user_cursor).cloned() {
                    self.select_user(user);
                    self.focus = Focus::Posts;
                }
            }
            Focus::Posts => self.toggle_post_expansion(self.post_cursor),
        }
    }
}
