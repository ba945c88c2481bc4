//! Rotten Tomatoes Trailers add-on server
//!
//! Serves the stream add-on protocol over HTTP:
//!
//! - `GET /health`
//! - `GET /manifest.json`
//! - `GET /meta/{media_type}/{media_id}`
//!
//! # Usage
//!
//! ```ignore
//! let config = tomato_server::Config::from_env();
//! let state = tomato_server::AppState::from_config(&config).await?;
//! let app = tomato_server::create_app(state);
//! axum::serve(listener, app).await?;
//! ```

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tomato_core::{
    ClientConfig, MemoryCache, RedisCache, ResponseCache, Result, RottenTomatoesScraper,
    TmdbResolver, TomatoClient, TrailerPipeline,
};
use tower_http::trace::TraceLayer;
use tracing::info;

mod config;
mod error;
mod handlers;
mod manifest;

pub use config::{Config, MEMORY_CACHE_URL};
pub use error::ApiError;
pub use manifest::{MANIFEST, Manifest};

/// Shared handler state
///
/// Cheap to clone; every field is a shared handle.
#[derive(Clone)]
pub struct AppState {
    pub(crate) pipeline: TrailerPipeline,
    pub(crate) cache: Arc<dyn ResponseCache>,
}

impl AppState {
    pub fn new(pipeline: TrailerPipeline, cache: Arc<dyn ResponseCache>) -> Self {
        Self { pipeline, cache }
    }

    /// Build the production state: TMDB resolver, Rotten Tomatoes scraper
    /// and the configured cache backend
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be built or Redis is unreachable
    pub async fn from_config(config: &Config) -> Result<Self> {
        let client = TomatoClient::with_config(ClientConfig {
            timeout_secs: config.http_timeout_secs,
            ..ClientConfig::default()
        })?;

        let resolver = Arc::new(TmdbResolver::with_base_url(
            client.clone(),
            config.tmdb_api_key.clone(),
            config.tmdb_base_url.clone(),
        ));
        let scraper = Arc::new(RottenTomatoesScraper::with_client(
            client,
            config.rt_base_url.clone(),
        ));
        let pipeline = TrailerPipeline::new(resolver, scraper.clone(), scraper);

        let cache: Arc<dyn ResponseCache> = if config.uses_memory_cache() {
            info!("Using in-memory response cache");
            Arc::new(MemoryCache::new(config.cache_ttl))
        } else {
            Arc::new(RedisCache::new(&config.redis_url, config.cache_ttl).await?)
        };

        Ok(Self::new(pipeline, cache))
    }
}

/// Build the add-on router
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/manifest.json", get(handlers::manifest))
        .route("/meta/{media_type}/{media_id}", get(handlers::get_meta))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
