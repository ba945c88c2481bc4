//! Trailer lookup pipeline
//!
//! Resolves an IMDb id to a title, finds the matching Rotten Tomatoes page
//! and returns its trailers. Steps run strictly in order and the first
//! failure ends the lookup.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::error::{PipelineError, TomatoError};
use crate::matcher::match_candidate;
use crate::provider::{MetadataResolver, ReviewSearcher, VideoExtractor};
use crate::types::{MediaRequest, MetaResponse, TrailerLink};

/// Trailer lookup service holding its upstream handles
#[derive(Clone)]
pub struct TrailerPipeline {
    resolver: Arc<dyn MetadataResolver>,
    searcher: Arc<dyn ReviewSearcher>,
    extractor: Arc<dyn VideoExtractor>,
}

impl TrailerPipeline {
    pub fn new(
        resolver: Arc<dyn MetadataResolver>,
        searcher: Arc<dyn ReviewSearcher>,
        extractor: Arc<dyn VideoExtractor>,
    ) -> Self {
        Self {
            resolver,
            searcher,
            extractor,
        }
    }

    /// Validate raw path segments and run the lookup
    ///
    /// # Errors
    /// Any [`PipelineError`]; validation errors are returned before any
    /// upstream call is made.
    pub async fn resolve_trailers(
        &self,
        media_type: &str,
        media_id: &str,
    ) -> Result<MetaResponse, PipelineError> {
        let request = MediaRequest::parse(media_type, media_id)?;
        self.resolve_request(&request).await
    }

    /// Run the lookup for an already validated request
    pub async fn resolve_request(
        &self,
        request: &MediaRequest,
    ) -> Result<MetaResponse, PipelineError> {
        let media_id = request.media_id.as_str();

        let resolved = self.resolver.resolve(media_id).await.map_err(|e| match e {
            TomatoError::NotFound(_) => PipelineError::MediaNotFound,
            other => {
                warn!(media_id, error = %other, "TMDB lookup failed");
                PipelineError::UpstreamLookupFailed
            }
        })?;

        let candidates = self.searcher.search(&resolved.title).await.map_err(|e| {
            warn!(media_id, error = %e, "Rotten Tomatoes search failed");
            PipelineError::UpstreamLookupFailed
        })?;

        let matched =
            match_candidate(&resolved, &candidates).ok_or(PipelineError::NoMatchingReview)?;
        info!(media_id, title = %resolved.title, link = %matched.link, "Matched review page");

        let videos_url = self.extractor.videos_url(&matched.link);
        let videos = self
            .extractor
            .extract_videos(&videos_url)
            .await
            .map_err(|e| match e {
                TomatoError::NotFound(_) | TomatoError::ParseError(_) => {
                    debug!(media_id, error = %e, "No usable videos payload");
                    PipelineError::NoVideosFound
                }
                other => {
                    warn!(media_id, error = %other, "Rotten Tomatoes videos fetch failed");
                    PipelineError::UpstreamLookupFailed
                }
            })?;

        let links: Vec<TrailerLink> = videos
            .into_iter()
            .filter(|video| video.is_playable_trailer())
            .map(TrailerLink::from)
            .collect();

        if links.is_empty() {
            return Err(PipelineError::NoVideosFound);
        }

        Ok(MetaResponse {
            id: request.media_id.clone(),
            media_type: request.media_type,
            name: resolved.title,
            links,
        })
    }
}
