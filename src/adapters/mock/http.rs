//! Mock HTTP client for testing.
//!
//! Provides a configurable mock HTTP client that can return predefined
//! responses or errors keyed by URL, recording every request for
//! verification.

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::traits::{HttpClient, HttpError, Response};

/// Configuration for a mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return a successful (or failing-status) response
    Success(Response),
    /// Fail before any response is received
    Error(HttpError),
}

/// Mock HTTP client for testing.
///
/// Responses are matched by exact URL; a default response covers
/// everything else. Clones share the same tables, so a clone handed to a
/// spawned task records into the same request log.
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    /// Configured responses by URL
    responses: Arc<Mutex<HashMap<String, MockResponse>>>,
    /// Default response when no specific match
    default_response: Arc<Mutex<Option<MockResponse>>>,
    /// Recorded request URLs for verification
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockHttpClient {
    /// Create a new mock HTTP client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a response for a specific URL. The URL is matched exactly.
    pub fn set_response(&self, url: &str, response: MockResponse) {
        let mut responses = self.responses.lock().unwrap();
        responses.insert(url.to_string(), response);
    }

    /// Set a successful JSON response for a specific URL.
    pub fn set_json_response(&self, url: &str, status: u16, body: &str) {
        self.set_response(
            url,
            MockResponse::Success(Response::new(status, "", Bytes::from(body.to_string()))),
        );
    }

    /// Set a default response for URLs without specific matches.
    pub fn set_default_response(&self, response: MockResponse) {
        let mut default = self.default_response.lock().unwrap();
        *default = Some(response);
    }

    /// Get all recorded request URLs.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of requests made to a specific URL.
    pub fn request_count(&self, url: &str) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|u| u.as_str() == url)
            .count()
    }

    fn lookup(&self, url: &str) -> Option<MockResponse> {
        let responses = self.responses.lock().unwrap();
        if let Some(response) = responses.get(url) {
            return Some(response.clone());
        }
        self.default_response.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str) -> Result<Response, HttpError> {
        self.requests.lock().unwrap().push(url.to_string());

        match self.lookup(url) {
            Some(MockResponse::Success(response)) => Ok(response),
            Some(MockResponse::Error(err)) => Err(err),
            None => Err(HttpError::Other(format!("no mock response for {}", url))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_configured_response_is_returned() {
        let client = MockHttpClient::new();
        client.set_json_response("http://test/users", 200, "[]");

        let response = client.get("http://test/users").await.unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(response.body, Bytes::from("[]"));
    }

    #[tokio::test]
    async fn test_unconfigured_url_errors() {
        let client = MockHttpClient::new();
        let result = client.get("http://test/missing").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_error_response() {
        let client = MockHttpClient::new();
        client.set_response(
            "http://test/users",
            MockResponse::Error(HttpError::ConnectionFailed("refused".to_string())),
        );

        let result = client.get("http://test/users").await;
        assert!(matches!(result, Err(HttpError::ConnectionFailed(_))));
    }

    #[tokio::test]
    async fn test_requests_are_recorded() {
        let client = MockHttpClient::new();
        client.set_json_response("http://test/users", 200, "[]");

        let _ = client.get("http://test/users").await;
        let _ = client.get("http://test/users").await;

        assert_eq!(client.request_count("http://test/users"), 2);
        assert_eq!(client.requests().len(), 2);
    }

    #[tokio::test]
    async fn test_clone_shares_request_log() {
        let client = MockHttpClient::new();
        client.set_json_response("http://test/users", 200, "[]");

        let clone = client.clone();
        let _ = clone.get("http://test/users").await;

        assert_eq!(client.request_count("http://test/users"), 1);
    }
}
