//! The request-failure error surfaced by every client operation
//!
//! The transport boundary exposes exactly one error kind: a request failure
//! carrying a human-readable message. Network failures, non-2xx statuses,
//! malformed JSON and token-storage failures all normalize into it, so
//! callers handle a single explicit failure path.

use serde_json::Value;
use thiserror::Error;

/// The generic message used when the server body names no reason.
const FALLBACK_MESSAGE: &str = "Request failed";

/// Flat request-failure error carrying a human-readable message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct RequestError {
    pub message: String,
}

impl RequestError {
    /// Create a request error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Extract the failure message from a parsed server body.
    ///
    /// The server reports failures as `{"error": ...}` and some successes as
    /// `{"message": ...}`; a failing response lacking both gets the generic
    /// fallback.
    pub fn from_body(body: &Value) -> Self {
        let message = body
            .get("error")
            .and_then(Value::as_str)
            .or_else(|| body.get("message").and_then(Value::as_str))
            .unwrap_or(FALLBACK_MESSAGE);

        Self::new(message)
    }
}

impl From<reqwest::Error> for RequestError {
    fn from(err: reqwest::Error) -> Self {
        Self::new(err.to_string())
    }
}

impl From<serde_json::Error> for RequestError {
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("Malformed response: {}", err))
    }
}

impl From<std::io::Error> for RequestError {
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("Token storage failed: {}", err))
    }
}

/// Type alias for client operation results
pub type ApiResult<T> = Result<T, RequestError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_message_prefers_error_field() {
        let body = json!({"error": "Invalid credentials", "message": "ignored"});
        assert_eq!(RequestError::from_body(&body).message, "Invalid credentials");
    }

    #[test]
    fn test_message_falls_back_to_message_field() {
        let body = json!({"message": "Olympiad created"});
        assert_eq!(RequestError::from_body(&body).message, "Olympiad created");
    }

    #[test]
    fn test_generic_fallback_when_body_names_no_reason() {
        assert_eq!(RequestError::from_body(&json!({})).message, "Request failed");
        assert_eq!(
            RequestError::from_body(&json!({"error": 42})).message,
            "Request failed"
        );
    }
}
