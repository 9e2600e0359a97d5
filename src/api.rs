//! Typed client for the remote dataset API.
//!
//! [`ApiClient`] builds the three endpoint URLs, issues each request once
//! through an injected [`HttpClient`], and decodes the JSON body. It is
//! the production implementation of [`DataGateway`]; every failure —
//! non-2xx status, transport failure, undecodable body — collapses into
//! [`TransportError`].

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::error::TransportError;
use crate::models::{Comment, Post, User};
use crate::traits::{DataGateway, HttpClient};

/// Base URL of the public fixed dataset.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Client for the three read endpoints of the dataset.
#[derive(Debug, Clone)]
pub struct ApiClient<C: HttpClient> {
    http: C,
    base_url: String,
}

impl<C: HttpClient> ApiClient<C> {
    /// Create a client against the default public dataset.
    pub fn new(http: C) -> Self {
        Self::with_base_url(http, DEFAULT_BASE_URL)
    }

    /// Create a client against a custom base URL (tests, self-hosted data).
    pub fn with_base_url(http: C, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { http, base_url }
    }

    /// The base URL this client targets, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, TransportError> {
        let response = self
            .http
            .get(url)
            .await
            .map_err(|e| TransportError::no_response(e.to_string()))?;

        if !response.is_success() {
            return Err(TransportError::from_status(
                response.status,
                response.status_text.clone(),
            ));
        }

        response
            .json()
            .map_err(|e| TransportError::no_response(format!("invalid response body: {}", e)))
    }
}

#[async_trait]
impl<C: HttpClient> DataGateway for ApiClient<C> {
    async fn fetch_users(&self) -> Result<Vec<User>, TransportError> {
        let url = format!("{}/users", self.base_url);
        self.get_json(&url).await
    }

    async fn fetch_posts_by_user(&self, user_id: u64) -> Result<Vec<Post>, TransportError> {
        let url = format!("{}/posts?userId={}", self.base_url, user_id);
        self.get_json(&url).await
    }

    async fn fetch_comments_by_post(&self, post_id: u64) -> Result<Vec<Comment>, TransportError> {
        let url = format!("{}/comments?postId={}", self.base_url, post_id);
        self.get_json(&url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MockHttpClient;

    fn client(mock: &MockHttpClient) -> ApiClient<MockHttpClient> {
        ApiClient::with_base_url(mock.clone(), "http://data.test")
    }

    #[test]
    fn test_trailing_slash_is_stripped() {
        let api = ApiClient::with_base_url(MockHttpClient::new(), "http://data.test/");
        assert_eq!(api.base_url(), "http://data.test");
    }

    #[tokio::test]
    async fn test_fetch_users_url_and_decode() {
        let mock = MockHttpClient::new();
        mock.set_json_response(
            "http://data.test/users",
            200,
            r#"[{
                "id": 1, "name": "Leanne Graham", "username": "Bret",
                "email": "Sincere@april.biz", "phone": "1-770", "website": "hildegard.org",
                "address": {
                    "street": "Kulas Light", "suite": "Apt. 556", "city": "Gwenborough",
                    "zipcode": "92998-3874", "geo": {"lat": "-37.3159", "lng": "81.1496"}
                },
                "company": {"name": "Romaguera-Crona", "catchPhrase": "cp", "bs": "bs"}
            }]"#,
        );

        let users = client(&mock).fetch_users().await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].name, "Leanne Graham");
        assert_eq!(mock.requests(), vec!["http://data.test/users".to_string()]);
    }

    #[tokio::test]
    async fn test_fetch_posts_builds_query_url() {
        let mock = MockHttpClient::new();
        mock.set_json_response(
            "http://data.test/posts?userId=2",
            200,
            r#"[{"userId": 2, "id": 11, "title": "t", "body": "b"}]"#,
        );

        let posts = client(&mock).fetch_posts_by_user(2).await.unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].user_id, 2);
    }

    #[tokio::test]
    async fn test_fetch_comments_builds_query_url() {
        let mock = MockHttpClient::new();
        mock.set_json_response(
            "http://data.test/comments?postId=11",
            200,
            r#"[{"postId": 11, "id": 101, "name": "n", "email": "e@x.y", "body": "b"}]"#,
        );

        let comments = client(&mock).fetch_comments_by_post(11).await.unwrap();
        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].post_id, 11);
    }

    #[tokio::test]
    async fn test_non_2xx_maps_to_status_error() {
        let mock = MockHttpClient::new();
        mock.set_json_response("http://data.test/users", 503, "unavailable");

        let err = client(&mock).fetch_users().await.unwrap_err();
        assert_eq!(err.status, 503);
    }

    #[tokio::test]
    async fn test_transport_failure_maps_to_status_zero() {
        let mock = MockHttpClient::new();
        // No response configured: the mock fails before producing a response.
        let err = client(&mock).fetch_users().await.unwrap_err();
        assert_eq!(err.status, 0);
    }

    #[tokio::test]
    async fn test_undecodable_body_maps_to_status_zero() {
        let mock = MockHttpClient::new();
        mock.set_json_response("http://data.test/users", 200, "{not json");

        let err = client(&mock).fetch_users().await.unwrap_err();
        assert_eq!(err.status, 0);
        assert!(err.status_text.contains("invalid response body"));
    }
}
