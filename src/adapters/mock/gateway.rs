//! Scripted data gateway for driving the app state machine in tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::TransportError;
use crate::models::{Comment, Post, User};
use crate::traits::DataGateway;

/// A recorded gateway call for verification in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayCall {
    Users,
    PostsByUser(u64),
    CommentsByPost(u64),
}

/// Scripted [`DataGateway`] with per-argument results and a call log.
///
/// Unscripted calls fail with a status-0 transport error so a test that
/// forgot to script a fetch fails loudly instead of hanging on missing
/// data. Clones share the same script and log.
#[derive(Debug, Clone, Default)]
pub struct MockGateway {
    users: Arc<Mutex<Option<Result<Vec<User>, TransportError>>>>,
    posts: Arc<Mutex<HashMap<u64, Result<Vec<Post>, TransportError>>>>,
    comments: Arc<Mutex<HashMap<u64, Result<Vec<Comment>, TransportError>>>>,
    calls: Arc<Mutex<Vec<GatewayCall>>>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the result of the next `fetch_users` calls.
    pub fn script_users(&self, result: Result<Vec<User>, TransportError>) {
        *self.users.lock().unwrap() = Some(result);
    }

    /// Script the result of `fetch_posts_by_user` for one user id.
    pub fn script_posts(&self, user_id: u64, result: Result<Vec<Post>, TransportError>) {
        self.posts.lock().unwrap().insert(user_id, result);
    }

    /// Script the result of `fetch_comments_by_post` for one post id.
    pub fn script_comments(&self, post_id: u64, result: Result<Vec<Comment>, TransportError>) {
        self.comments.lock().unwrap().insert(post_id, result);
    }

    /// All calls made so far, in order.
    pub fn calls(&self) -> Vec<GatewayCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of calls matching the given call exactly.
    pub fn call_count(&self, call: &GatewayCall) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| *c == call)
            .count()
    }

    fn unscripted(what: &str) -> TransportError {
        TransportError::no_response(format!("unscripted mock call: {}", what))
    }
}

#[async_trait]
impl DataGateway for MockGateway {
    async fn fetch_users(&self) -> Result<Vec<User>, TransportError> {
        self.calls.lock().unwrap().push(GatewayCall::Users);
        self.users
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| Err(Self::unscripted("fetch_users")))
    }

    async fn fetch_posts_by_user(&self, user_id: u64) -> Result<Vec<Post>, TransportError> {
        self.calls
            .lock()
            .unwrap()
            .push(GatewayCall::PostsByUser(user_id));
        self.posts
            .lock()
            .unwrap()
            .get(&user_id)
            .cloned()
            .unwrap_or_else(|| Err(Self::unscripted("fetch_posts_by_user")))
    }

    async fn fetch_comments_by_post(&self, post_id: u64) -> Result<Vec<Comment>, TransportError> {
        self.calls
            .lock()
            .unwrap()
            .push(GatewayCall::CommentsByPost(post_id));
        self.comments
            .lock()
            .unwrap()
            .get(&post_id)
            .cloned()
            .unwrap_or_else(|| Err(Self::unscripted("fetch_comments_by_post")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_scripted_users_returned() {
        let gateway = MockGateway::new();
        gateway.script_users(Ok(vec![]));

        let users = gateway.fetch_users().await.unwrap();
        assert!(users.is_empty());
        assert_eq!(gateway.call_count(&GatewayCall::Users), 1);
    }

    #[tokio::test]
    async fn test_unscripted_call_fails() {
        let gateway = MockGateway::new();
        let result = gateway.fetch_posts_by_user(1).await;
        assert!(result.is_err());
        assert_eq!(gateway.calls(), vec![GatewayCall::PostsByUser(1)]);
    }

    #[tokio::test]
    async fn test_scripted_failure_is_cloned_back() {
        let gateway = MockGateway::new();
        gateway.script_comments(7, Err(TransportError::from_status(500, "Internal")));

        let err = gateway.fetch_comments_by_post(7).await.unwrap_err();
        assert_eq!(err.status, 500);
    }
}
