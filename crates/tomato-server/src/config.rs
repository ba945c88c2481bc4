//! Environment configuration

use std::env;
use std::time::Duration;

use tomato_core::cache::DEFAULT_TTL;
use tomato_core::url::{RT_BASE_URL, TMDB_BASE_URL};

/// Selects the in-process cache instead of Redis
pub const MEMORY_CACHE_URL: &str = "memory://";

const DEFAULT_REDIS_URL: &str = "redis://localhost:6379/0";
const DEFAULT_PORT: u16 = 6969;

#[derive(Debug, Clone)]
pub struct Config {
    // Server settings
    pub server_host: String,
    pub server_port: u16,

    // Upstream settings
    pub tmdb_api_key: String,
    pub tmdb_base_url: String,
    pub rt_base_url: String,
    pub http_timeout_secs: u64,

    // Cache settings
    pub redis_url: String,
    pub cache_ttl: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_host: "0.0.0.0".to_string(),
            server_port: DEFAULT_PORT,
            tmdb_api_key: String::new(),
            tmdb_base_url: TMDB_BASE_URL.to_string(),
            rt_base_url: RT_BASE_URL.to_string(),
            http_timeout_secs: 30,
            redis_url: DEFAULT_REDIS_URL.to_string(),
            cache_ttl: DEFAULT_TTL,
        }
    }
}

impl Config {
    /// Read configuration from the process environment
    ///
    /// Loads a `.env` file first if one is present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source
    ///
    /// Unparseable numbers fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            server_host: lookup("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port: lookup("SERVER_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),

            tmdb_api_key: lookup("TMDB_API_KEY").unwrap_or(defaults.tmdb_api_key),
            tmdb_base_url: lookup("TMDB_BASE_URL").unwrap_or(defaults.tmdb_base_url),
            rt_base_url: lookup("RT_BASE_URL").unwrap_or(defaults.rt_base_url),
            http_timeout_secs: lookup("HTTP_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.http_timeout_secs),

            redis_url: lookup("REDIS_URL").unwrap_or(defaults.redis_url),
            cache_ttl: lookup("CACHE_TTL_SECS")
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.cache_ttl),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    pub fn uses_memory_cache(&self) -> bool {
        self.redis_url.starts_with(MEMORY_CACHE_URL)
    }
}
