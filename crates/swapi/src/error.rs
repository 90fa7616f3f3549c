//! Uniform error shape for remote fetches
//!
//! Every failure mode (transport error, timeout, non-2xx response) is
//! normalized to a message plus an optional HTTP status, which is all the
//! presentation layer needs. Fetches are never retried here.

use thiserror::Error;

/// A normalized remote-fetch failure.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
    pub status: Option<u16>,
}

impl ApiError {
    pub fn new(message: impl Into<String>, status: Option<u16>) -> Self {
        Self {
            message: message.into(),
            status,
        }
    }

    /// Build the error for a non-2xx response, preferring the upstream
    /// body's own `message` field when the body is JSON.
    pub(crate) fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v.get("message")?.as_str().map(str::to_string))
            .unwrap_or_else(|| {
                if body.trim().is_empty() {
                    format!("Request failed with status {status}")
                } else {
                    body.trim().to_string()
                }
            });

        Self::new(message, Some(status))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        let status = err.status().map(|s| s.as_u16());
        let message = if err.is_timeout() {
            "Request timed out".to_string()
        } else {
            err.to_string()
        };
        Self::new(message, status)
    }
}
