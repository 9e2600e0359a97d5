//! The single failure type shared by all three remote fetches.

use thiserror::Error;

/// A failed fetch against the remote dataset.
///
/// Every failure mode collapses into one kind: an HTTP status with its
/// status text. Failures that never produced a response (connection
/// refused, timeout, undecodable body) carry status 0, matching how the
/// dataset's browser clients report them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("transport error ({status}): {status_text}")]
pub struct TransportError {
    /// HTTP status code, or 0 when no response was received.
    pub status: u16,
    /// Status text or a short description of the underlying failure.
    pub status_text: String,
}

impl TransportError {
    /// Build from a non-2xx HTTP response.
    pub fn from_status(status: u16, status_text: impl Into<String>) -> Self {
        Self {
            status,
            status_text: status_text.into(),
        }
    }

    /// Build from a failure that produced no HTTP response at all.
    pub fn no_response(message: impl Into<String>) -> Self {
        Self {
            status: 0,
            status_text: message.into(),
        }
    }

    /// Whether the server responded at all.
    pub fn has_response(&self) -> bool {
        self.status != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_status_and_text() {
        let err = TransportError::from_status(404, "Not Found");
        assert_eq!(err.to_string(), "transport error (404): Not Found");
    }

    #[test]
    fn test_no_response_has_status_zero() {
        let err = TransportError::no_response("connection refused");
        assert_eq!(err.status, 0);
        assert!(!err.has_response());
    }

    #[test]
    fn test_from_status_has_response() {
        assert!(TransportError::from_status(500, "Internal Server Error").has_response());
    }
}
