//! Rotten Tomatoes Trailers Core Library
//!
//! Provides the async trailer lookup behind the stream add-on: an IMDb id is
//! resolved to a title through TMDB, the matching Rotten Tomatoes page is
//! found through the site search, and the trailers embedded in the page's
//! videos payload are returned.
//!
//! # Overview
//!
//! - HTTP client with bounded per-request timeouts
//! - HTML parsers for the search page and the videos payload
//! - TMDB resolver and Rotten Tomatoes scraper behind small traits
//! - [`TrailerPipeline`] tying them together
//! - Response cache backends (Redis, in-memory)
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use tomato_core::{RottenTomatoesScraper, TmdbResolver, TomatoClient, TrailerPipeline};
//!
//! #[tokio::main]
//! async fn main() -> tomato_core::Result<()> {
//!     let client = TomatoClient::new()?;
//!     let scraper = Arc::new(RottenTomatoesScraper::with_client(
//!         client.clone(),
//!         tomato_core::url::RT_BASE_URL,
//!     ));
//!     let resolver = Arc::new(TmdbResolver::new(client, "tmdb-read-token"));
//!     let pipeline = TrailerPipeline::new(resolver, scraper.clone(), scraper);
//!
//!     match pipeline.resolve_trailers("movie", "tt1375666").await {
//!         Ok(meta) => {
//!             for link in &meta.links {
//!                 println!("{}: {}", link.provider, link.trailer_url);
//!             }
//!         }
//!         Err(e) => eprintln!("{}", e),
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod cache;
mod client;
mod error;
mod matcher;
pub mod parser;
mod pipeline;
mod provider;
mod rotten_tomatoes;
mod tmdb;
mod types;
pub mod url;

// Re-export client types
pub use client::{ClientConfig, TomatoClient};

// Re-export error types
pub use error::{PipelineError, Result, TomatoError};

// Re-export cache types
pub use cache::{CacheKeys, MemoryCache, RedisCache, ResponseCache};

// Re-export parser functions
pub use parser::{parse_search_results, parse_videos};

// Re-export pipeline API
pub use matcher::match_candidate;
pub use pipeline::TrailerPipeline;
pub use provider::{MetadataResolver, ReviewSearcher, VideoExtractor};
pub use rotten_tomatoes::RottenTomatoesScraper;
pub use tmdb::TmdbResolver;

// Re-export data types
pub use types::{
    MediaRequest, MediaType, MetaEnvelope, MetaResponse, ResolvedTitle, SearchCandidate,
    TrailerLink, VideoDescriptor, strip_extension,
};
