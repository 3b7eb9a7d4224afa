//! Error types for the stats API client.
//!
//! # Design
//! Input validation failures (`InvalidTag`, `InvalidArgument`, `UnknownKey`)
//! are raised by `build_*` methods before any request exists. Everything else
//! comes out of `parse_*` once the caller has a response, or out of a
//! transport adapter when no response arrived at all.

use thiserror::Error;

/// Errors returned by `BrawlApi` and the transport adapters built on it.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The tag is too short or contains characters the game never issues.
    #[error("invalid tag {tag:?}: {reason}")]
    InvalidTag { tag: String, reason: String },

    /// The server returned 400 or 404 for the requested resource.
    #[error("not found: {url}")]
    NotFound { url: String },

    /// The server rejected the API token (401 / 403).
    #[error("unauthorized: {url}")]
    Unauthorized { url: String },

    /// The server returned 429. Reported only; nothing is retried.
    #[error("rate limited: {url}")]
    RateLimited { url: String },

    /// The server returned a 5xx status.
    #[error("server error {status}: {url}")]
    Server { status: u16, url: String },

    /// Any other non-2xx status.
    #[error("unexpected HTTP {status}: {body}")]
    Unexpected { status: u16, body: String },

    /// A leaderboard or search parameter is out of range or unrecognized.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The constants category does not exist.
    #[error("no such constants key: {0}")]
    UnknownKey(String),

    /// The response body does not match the expected schema.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The request did not complete within the configured timeout.
    #[error("request timed out: {url}")]
    Timeout { url: String },

    /// The request could not be sent or the body could not be read.
    #[error("transport error: {0}")]
    Transport(String),
}

impl ApiError {
    /// True for `NotFound` and for `InvalidTag`, since a malformed tag can
    /// never resolve to a remote resource.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound { .. } | ApiError::InvalidTag { .. })
    }

    /// True for 5xx responses and timeouts.
    pub fn is_server_error(&self) -> bool {
        matches!(self, ApiError::Server { .. } | ApiError::Timeout { .. })
    }

    pub(crate) fn invalid_tag(tag: &str, reason: impl Into<String>) -> Self {
        ApiError::InvalidTag {
            tag: tag.to_string(),
            reason: reason.into(),
        }
    }
}
