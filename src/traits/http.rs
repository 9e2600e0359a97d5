//! HTTP client trait abstraction.
//!
//! Provides a trait-based abstraction for HTTP operations, enabling
//! dependency injection and mocking in tests. The remote dataset is
//! read-only, so the surface is GET-only.

use async_trait::async_trait;
use bytes::Bytes;

/// HTTP response wrapper.
#[derive(Debug, Clone)]
pub struct Response {
    /// HTTP status code
    pub status: u16,
    /// Canonical reason phrase for the status, when known
    pub status_text: String,
    /// Response body
    pub body: Bytes,
}

impl Response {
    /// Create a new response.
    pub fn new(status: u16, status_text: impl Into<String>, body: Bytes) -> Self {
        Self {
            status,
            status_text: status_text.into(),
            body,
        }
    }

    /// Check if the response indicates success (2xx status).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Parse the response body as JSON.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

/// HTTP client errors.
///
/// These are the transport-level failures an adapter can produce; the
/// gateway collapses them into [`crate::error::TransportError`].
#[derive(Debug, Clone)]
pub enum HttpError {
    /// Connection failed
    ConnectionFailed(String),
    /// Request timeout
    Timeout(String),
    /// Invalid URL
    InvalidUrl(String),
    /// Other error
    Other(String),
}

impl std::fmt::Display for HttpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HttpError::ConnectionFailed(msg) => write!(f, "Connection failed: {}", msg),
            HttpError::Timeout(msg) => write!(f, "Request timeout: {}", msg),
            HttpError::InvalidUrl(msg) => write!(f, "Invalid URL: {}", msg),
            HttpError::Other(msg) => write!(f, "HTTP error: {}", msg),
        }
    }
}

impl std::error::Error for HttpError {}

/// Trait for HTTP client operations.
///
/// Implementations include the production reqwest-based client and a
/// mock client for testing.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Perform a GET request.
    ///
    /// Returns the response for any HTTP status; only failures to obtain
    /// a response at all surface as `Err`.
    async fn get(&self, url: &str) -> Result<Response, HttpError>;
}
