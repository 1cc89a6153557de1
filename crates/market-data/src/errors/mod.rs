//! Error types for upstream market data calls.
//!
//! This module provides [`FetchError`], the failure taxonomy shared by the
//! quote, rate and search adapters. The cache-aside services propagate these
//! errors for batch quote fetches and absorb them everywhere else.

use thiserror::Error;

/// Errors that can occur while talking to an upstream market data endpoint.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request never produced a usable HTTP response: connection,
    /// DNS or TLS failure, or the per-request timeout firing.
    #[error("Transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The upstream answered with a non-success status.
    #[error("Upstream rejected request ({status}): {message}")]
    UpstreamRejection {
        /// HTTP status code returned by the upstream
        status: u16,
        /// Error message extracted from the response body, or the raw body
        message: String,
    },

    /// The response arrived with a 2xx status but its body did not match
    /// the documented shape.
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),
}

impl FetchError {
    /// Build an [`FetchError::UpstreamRejection`] from a non-success response
    /// body. Upstream error bodies carry an `error` field; when present its
    /// value becomes the message, otherwise the raw body is kept.
    pub fn upstream_rejection(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v.get("error").and_then(|e| e.as_str().map(String::from)))
            .unwrap_or_else(|| body.trim().to_string());
        Self::UpstreamRejection { status, message }
    }

    /// True when the failure happened before any HTTP response was read.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}
