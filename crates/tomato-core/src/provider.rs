//! Upstream seams of the trailer pipeline
//!
//! The pipeline only talks to these traits, so tests can swap the
//! network backed implementations for in-memory doubles.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{ResolvedTitle, SearchCandidate, VideoDescriptor};

/// Maps an external (IMDb) identifier to a canonical title
#[async_trait]
pub trait MetadataResolver: Send + Sync {
    /// # Errors
    /// - `NotFound` if the metadata API has no match
    /// - `HttpError` / `Status` on upstream failure
    async fn resolve(&self, external_id: &str) -> Result<ResolvedTitle>;
}

/// Free text search on the review site
#[async_trait]
pub trait ReviewSearcher: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<SearchCandidate>>;
}

/// Extracts the embedded video list from a review site page
#[async_trait]
pub trait VideoExtractor: Send + Sync {
    /// # Errors
    /// - `NotFound` if the page carries no videos payload
    /// - `ParseError` if the payload is malformed
    /// - `HttpError` / `Status` on upstream failure
    async fn extract_videos(&self, page_url: &str) -> Result<Vec<VideoDescriptor>>;

    /// Builds the videos page URL for a matched search candidate link
    fn videos_url(&self, link: &str) -> String;
}
