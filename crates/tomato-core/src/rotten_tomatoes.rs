//! Rotten Tomatoes scraper
//!
//! Combines the HTTP client with the HTML parsers to search the site and
//! read the videos payload of a media page.

use async_trait::async_trait;
use tracing::debug;

use crate::client::{ClientConfig, TomatoClient};
use crate::error::Result;
use crate::parser::{parse_search_results, parse_videos};
use crate::provider::{ReviewSearcher, VideoExtractor};
use crate::types::{SearchCandidate, VideoDescriptor};
use crate::url::{RT_BASE_URL, build_search_url, build_videos_url};

/// Review site searcher and video extractor for rottentomatoes.com
#[derive(Debug, Clone)]
pub struct RottenTomatoesScraper {
    client: TomatoClient,
    base_url: String,
}

impl RottenTomatoesScraper {
    /// Create a new scraper with default configuration
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new scraper with custom client configuration
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = TomatoClient::with_config(config)?;
        Ok(Self::with_client(client, RT_BASE_URL))
    }

    /// Create a scraper sharing an existing client, rooted at `base_url`
    pub fn with_client(client: TomatoClient, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl ReviewSearcher for RottenTomatoesScraper {
    /// Search the site for media rows
    ///
    /// # Returns
    /// Candidates in page order, empty if the page has no media rows
    ///
    /// # Errors
    /// - `HttpError` / `Status` if the network request fails
    async fn search(&self, query: &str) -> Result<Vec<SearchCandidate>> {
        let search_url = build_search_url(&self.base_url, query);
        let html = self.client.fetch(&search_url).await?;

        let results = parse_search_results(&html)?;
        debug!(query, count = results.len(), "Parsed search results");
        Ok(results)
    }
}

#[async_trait]
impl VideoExtractor for RottenTomatoesScraper {
    async fn extract_videos(&self, page_url: &str) -> Result<Vec<VideoDescriptor>> {
        let html = self.client.fetch(page_url).await?;
        parse_videos(&html)
    }

    fn videos_url(&self, link: &str) -> String {
        build_videos_url(&self.base_url, link)
    }
}
