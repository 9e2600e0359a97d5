//! Post records as served by the remote dataset.

use serde::{Deserialize, Serialize};

/// A post belonging to a user.
///
/// This is the wire shape only; per-post UI state (expansion, lazily
/// fetched comments) lives in [`crate::state::PostView`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: u64,
    pub user_id: u64,
    pub title: String,
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_deserializes_camel_case() {
        let json = r#"{"userId": 1, "id": 7, "title": "t", "body": "b"}"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.user_id, 1);
        assert_eq!(post.id, 7);
    }
}
