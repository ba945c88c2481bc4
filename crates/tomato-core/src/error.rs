//! Error types for the trailer lookup
//!
//! [`TomatoError`] covers every I/O level failure (HTTP, HTML, cache).
//! [`PipelineError`] is the request level outcome whose messages are
//! returned to add-on clients verbatim.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error type for all upstream and parsing operations
#[derive(Error, Debug)]
pub enum TomatoError {
    /// HTTP request failed (connect, timeout, body read)
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Upstream answered with a non-success status
    #[error("Unexpected HTTP status {status} from {url}")]
    Status { status: u16, url: String },

    /// Failed to parse HTML or an embedded payload
    #[error("Failed to parse: {0}")]
    ParseError(String),

    /// Requested resource is absent upstream
    #[error("Not found: {0}")]
    NotFound(String),

    /// API credential cannot be sent as a header value
    #[error("Invalid credential: {0}")]
    InvalidCredential(String),

    /// Cache backend failure
    #[error("Cache error: {0}")]
    Cache(String),
}

impl Serialize for TomatoError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for upstream operations
pub type Result<T> = std::result::Result<T, TomatoError>;

/// Outcome of a failed trailer lookup
///
/// The display strings are part of the add-on protocol.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    #[error("Unsupported media type")]
    InvalidMediaType,

    #[error("Invalid media ID format")]
    InvalidMediaId,

    #[error("Failed to fetch data from TMDB")]
    UpstreamLookupFailed,

    #[error("Media not found in TMDB")]
    MediaNotFound,

    #[error("No matching result found in Rotten Tomatoes")]
    NoMatchingReview,

    #[error("No videos found on Rotten Tomatoes")]
    NoVideosFound,
}

impl PipelineError {
    /// HTTP status code this outcome maps to
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidMediaType | Self::InvalidMediaId => 400,
            Self::MediaNotFound | Self::NoMatchingReview | Self::NoVideosFound => 404,
            Self::UpstreamLookupFailed => 500,
        }
    }
}

impl Serialize for PipelineError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
