//! Client error types.

use std::time::Duration;

use thiserror::Error;

/// Errors returned by the EZUnsub API client.
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP transport failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body could not be decoded
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// 401: API key missing or invalid
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// 403: authenticated but not allowed
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// 404: resource does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// 429: rate limited, with the server's Retry-After hint when present
    #[error("Rate limited: {message}")]
    RateLimited {
        message: String,
        retry_after: Option<u64>,
    },

    /// 400: request rejected as invalid
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Any other non-success status
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
}

impl Error {
    /// Whether a later retry of the same request could succeed.
    ///
    /// The client itself never retries; this is advisory for callers.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Http(e) => e.is_timeout() || e.is_connect(),
            Self::RateLimited { .. } => true,
            Self::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Suggested wait before retrying, from the Retry-After header.
    #[must_use]
    pub const fn retry_after(&self) -> Option<Duration> {
        match self {
            Self::RateLimited {
                retry_after: Some(secs),
                ..
            } => Some(Duration::from_secs(*secs)),
            _ => None,
        }
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;
