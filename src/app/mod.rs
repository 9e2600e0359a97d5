//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct: the master-detail view
//! state over the remote dataset. `App` owns one [`LoadState`] per fetch
//! scope (users, the selected user's posts, comments per post), drives
//! all loads through spawned gateway calls, and exposes the derived
//! projections the rendering layer reads.

mod fetch;
mod handlers;
mod messages;

pub use messages::AppMessage;

use std::sync::Arc;
use tokio::sync::mpsc;

use crate::error::TransportError;
use crate::models::User;
use crate::state::{LoadState, PostView};
use crate::traits::DataGateway;

/// How many posts the truncated view shows before "show all".
pub const POSTS_PREVIEW_COUNT: usize = 3;

/// Which panel has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Users,
    Posts,
}

/// Master-detail view state over the remote dataset.
pub struct App {
    gateway: Arc<dyn DataGateway>,
    tx: mpsc::UnboundedSender<AppMessage>,
    /// Receiver half of the message channel; the event loop takes it.
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,

    /// The user list scope.
    pub users: LoadState<Vec<User>>,
    /// The selected master row, if any.
    pub selected_user: Option<User>,
    /// Posts of the selected user, decorated with per-post UI state.
    /// Reset to `Loading` (no data) on every selection, so it never
    /// holds another user's posts.
    pub posts: LoadState<Vec<PostView>>,
    /// Truncation toggle for the posts panel.
    pub show_all_posts: bool,
    /// Request token for the posts scope. Bumped on every selection;
    /// results carrying an older epoch are discarded.
    posts_epoch: u64,
    /// Snapshot of loaded users across a refresh, restored on failure.
    stale_users: Option<Vec<User>>,

    /// Most recent fetch failure, surfaced in the status line.
    pub last_error: Option<TransportError>,

    // TUI navigation state
    pub focus: Focus,
    pub user_cursor: usize,
    pub post_cursor: usize,
    pub needs_redraw: bool,
    pub should_quit: bool,
    tick_count: u64,
}

impl App {
    /// Create the app around a gateway. Call [`App::initialize`] once
    /// afterwards to kick off the initial user load.
    pub fn new(gateway: Arc<dyn DataGateway>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            gateway,
            tx,
            message_rx: Some(rx),
            users: LoadState::Idle,
            selected_user: None,
            posts: LoadState::Idle,
            show_all_posts: false,
            posts_epoch: 0,
            stale_users: None,
            last_error: None,
            focus: Focus::Users,
            user_cursor: 0,
            post_cursor: 0,
            needs_redraw: true,
            should_quit: false,
            tick_count: 0,
        }
    }

    /// Kick off the initial user load. Invoked once at startup.
    pub fn initialize(&mut self) {
        self.load_users();
    }

    /// Fetch (or re-fetch) the user list.
    ///
    /// A refresh keeps the already-loaded list on screen while in
    /// flight; if the refresh fails the old list is restored, so a
    /// failure never costs the user data they already had.
    pub fn load_users(&mut self) {
        if self.users.is_loading() {
            return;
        }
        if let LoadState::Loaded(current) = &self.users {
            self.stale_users = Some(current.clone());
        }
        self.users = LoadState::Loading;
        self.needs_redraw = true;
        fetch::spawn_fetch_users(Arc::clone(&self.gateway), self.tx.clone());
    }

    /// Select a user and load their posts.
    ///
    /// Synchronously clears the posts panel and the truncation toggle
    /// before the fetch resolves; re-selecting the same user re-fetches.
    pub fn select_user(&mut self, user: User) {
        let user_id = user.id;
        self.selected_user = Some(user);
        self.posts = LoadState::Loading;
        self.show_all_posts = false;
        self.post_cursor = 0;
        self.posts_epoch += 1;
        self.needs_redraw = true;
        fetch::spawn_fetch_posts(
            Arc::clone(&self.gateway),
            self.tx.clone(),
            user_id,
            self.posts_epoch,
        );
    }

    /// Flip the truncation toggle. Pure state change, no fetch.
    pub fn toggle_show_all_posts(&mut self) {
        self.show_all_posts = !self.show_all_posts;
        let visible = self.displayed_posts().len();
        if visible > 0 && self.post_cursor >= visible {
            self.post_cursor = visible - 1;
        }
        self.needs_redraw = true;
    }

    /// Flip one post's expansion.
    ///
    /// Expanding fetches comments lazily: only when the post's comment
    /// scope has neither a fetch in flight nor loaded data. Collapsing
    /// never fetches, and re-expanding a post with loaded comments is a
    /// pure toggle.
    pub fn toggle_post_expansion(&mut self, index: usize) {
        let LoadState::Loaded(views) = &mut self.posts else {
            return;
        };
        let Some(view) = views.get_mut(index) else {
            return;
        };
        view.expanded = !view.expanded;
        self.needs_redraw = true;
        if view.expanded && view.needs_comments() {
            let post_id = view.post.id;
            self.load_comments(post_id);
        }
    }

    /// Fetch comments for one post, marking its scope in flight.
    pub fn load_comments(&mut self, post_id: u64) {
        if let LoadState::Loaded(views) = &mut self.posts {
            if let Some(view) = views.iter_mut().find(|v| v.post.id == post_id) {
                view.comments = LoadState::Loading;
            }
        }
        fetch::spawn_fetch_comments(Arc::clone(&self.gateway), self.tx.clone(), post_id);
    }

    // ========================================================================
    // Derived projections
    // ========================================================================

    /// The posts currently visible: all of them when `show_all_posts`,
    /// otherwise the first [`POSTS_PREVIEW_COUNT`], order preserved.
    pub fn displayed_posts(&self) -> &[PostView] {
        let all = self
            .posts
            .data()
            .map(Vec::as_slice)
            .unwrap_or_default();
        if self.show_all_posts {
            all
        } else {
            &all[..all.len().min(POSTS_PREVIEW_COUNT)]
        }
    }

    /// Whether more posts exist than the truncated view shows.
    pub fn has_more_posts(&self) -> bool {
        self.posts
            .data()
            .is_some_and(|posts| posts.len() > POSTS_PREVIEW_COUNT)
    }

    /// The loaded users, or an empty slice before the first load.
    pub fn users(&self) -> &[User] {
        self.users.data().map(Vec::as_slice).unwrap_or_default()
    }

    // ========================================================================
    // Animation tick
    // ========================================================================

    /// Advance the animation counter (loading spinner frames).
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.users.is_loading() || self.posts.is_loading() || self.any_comments_loading() {
            self.needs_redraw = true;
        }
    }

    /// Current animation tick.
    pub fn current_tick(&self) -> u64 {
        self.tick_count
    }

    fn any_comments_loading(&self) -> bool {
        self.posts
            .data()
            .is_some_and(|views| views.iter().any(|v| v.comments.is_loading()))
    }
}
