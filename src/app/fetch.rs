//! Spawned fetch tasks.
//!
//! Each function fires one gateway call on the runtime and reports the
//! outcome as a single [`AppMessage`]. State is never touched here; the
//! event loop applies results through `App::handle_message`. Send errors
//! are ignored: the receiver only disappears during shutdown.

use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;

use crate::app::AppMessage;
use crate::traits::DataGateway;

/// Fetch the user list.
pub fn spawn_fetch_users(gateway: Arc<dyn DataGateway>, tx: UnboundedSender<AppMessage>) {
    tokio::spawn(async move {
        let msg = match gateway.fetch_users().await {
            Ok(users) => AppMessage::UsersLoaded(users),
            Err(error) => AppMessage::UsersLoadFailed(error),
        };
        let _ = tx.send(msg);
    });
}

/// Fetch one user's posts, tagged with the epoch current at spawn time.
pub fn spawn_fetch_posts(
    gateway: Arc<dyn DataGateway>,
    tx: UnboundedSender<AppMessage>,
    user_id: u64,
    epoch: u64,
) {
    tokio::spawn(async move {
        let msg = match gateway.fetch_posts_by_user(user_id).await {
            Ok(posts) => AppMessage::PostsLoaded { epoch, posts },
            Err(error) => AppMessage::PostsLoadFailed { epoch, error },
        };
        let _ = tx.send(msg);
    });
}

/// Fetch one post's comments.
pub fn spawn_fetch_comments(
    gateway: Arc<dyn DataGateway>,
    tx: UnboundedSender<AppMessage>,
    post_id: u64,
) {
    tokio::spawn(async move {
        let msg = match gateway.fetch_comments_by_post(post_id).await {
            Ok(comments) => AppMessage::CommentsLoaded { post_id, comments },
            Err(error) => AppMessage::CommentsLoadFailed { post_id, error },
        };
        let _ = tx.send(msg);
    });
}
