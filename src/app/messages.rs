//! AppMessage enum for async communication within the application.

use crate::error::TransportError;
use crate::models::{Comment, Post, User};

/// Messages sent by spawned fetch tasks back to the event loop.
///
/// Each fetch task sends exactly one of these. Failures travel on the
/// same channel as successes so the state layer decides how to surface
/// them instead of logging into the void.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// The user list was fetched successfully
    UsersLoaded(Vec<User>),
    /// The user list fetch failed
    UsersLoadFailed(TransportError),
    /// Posts fetched for the selection that was current at `epoch`
    PostsLoaded { epoch: u64, posts: Vec<Post> },
    /// Posts fetch failed for the selection that was current at `epoch`
    PostsLoadFailed { epoch: u64, error: TransportError },
    /// Comments fetched for one post
    CommentsLoaded { post_id: u64, comments: Vec<Comment> },
    /// Comments fetch failed for one post
    CommentsLoadFailed { post_id: u64, error: TransportError },
}
