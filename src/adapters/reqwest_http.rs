//! Reqwest-based HTTP client adapter.
//!
//! Production implementation of the [`HttpClient`] trait from
//! `crate::traits`, wrapping a `reqwest::Client`.

use async_trait::async_trait;

use crate::traits::{HttpClient, HttpError, Response};

/// HTTP client implementation using reqwest.
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    /// Create a new ReqwestHttpClient with default settings.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Create a new ReqwestHttpClient with a custom reqwest::Client.
    ///
    /// This allows for advanced configuration like custom timeouts,
    /// connection pools, or TLS settings.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Convert reqwest error to HttpError.
    fn convert_error(err: reqwest::Error) -> HttpError {
        if err.is_timeout() {
            HttpError::Timeout(err.to_string())
        } else if err.is_connect() {
            HttpError::ConnectionFailed(err.to_string())
        } else if err.is_builder() {
            HttpError::InvalidUrl(err.to_string())
        } else {
            HttpError::Other(err.to_string())
        }
    }
}

impl Default for ReqwestHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &str) -> Result<Response, HttpError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(Self::convert_error)?;

        let status = response.status();
        let status_text = status.canonical_reason().unwrap_or_default().to_string();
        let body = response.bytes().await.map_err(Self::convert_error)?;

        Ok(Response::new(status.as_u16(), status_text, body))
    }
}
