//! Remote data gateway trait.
//!
//! The gateway is the only component that talks to the network. It exposes
//! exactly three read operations over the fixed dataset; each call is a
//! single request with no retry and no caching, and is safe to re-issue.

use async_trait::async_trait;

use crate::error::TransportError;
use crate::models::{Comment, Post, User};

/// The three read operations of the remote dataset.
///
/// The app holds this behind `Arc<dyn DataGateway>` so fetch tasks can be
/// spawned without tying the app state to a concrete HTTP stack, and so
/// tests can drive the state machine with a scripted gateway.
#[async_trait]
pub trait DataGateway: Send + Sync {
    /// Fetch all users.
    async fn fetch_users(&self) -> Result<Vec<User>, TransportError>;

    /// Fetch the posts of one user, filtered server-side.
    async fn fetch_posts_by_user(&self, user_id: u64) -> Result<Vec<Post>, TransportError>;

    /// Fetch the comments of one post, filtered server-side.
    async fn fetch_comments_by_post(&self, post_id: u64) -> Result<Vec<Comment>, TransportError>;
}
