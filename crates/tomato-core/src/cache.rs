//! Response cache backends
//!
//! Entries are serialized response bodies keyed by request path and query.
//! They are written once and expire after a fixed TTL; nothing deletes them.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache;
use redis::{AsyncCommands, aio::ConnectionManager};
use tracing::{debug, info};

use crate::error::{Result, TomatoError};

/// 30 days
pub const DEFAULT_TTL: Duration = Duration::from_secs(2_592_000);

const MEMORY_MAX_ENTRIES: u64 = 10_000;

/// Key-value store for serialized responses
#[async_trait]
pub trait ResponseCache: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key` for the backend's TTL
    async fn set(&self, key: &str, value: &str) -> Result<()>;
}

#[derive(Debug, Clone, Copy)]
pub struct CacheKeys;

impl CacheKeys {
    /// Key for a metadata response: request path plus raw query string
    pub fn meta(path: &str, query: Option<&str>) -> String {
        format!("meta:{}?{}", path, query.unwrap_or_default())
    }
}

/// Redis backed cache using `SET EX`
#[derive(Clone)]
pub struct RedisCache {
    conn: ConnectionManager,
    ttl: Duration,
}

impl fmt::Debug for RedisCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedisCache")
            .field("connection", &"ConnectionManager")
            .field("ttl", &self.ttl)
            .finish()
    }
}

impl RedisCache {
    pub async fn new(redis_url: &str, ttl: Duration) -> Result<Self> {
        info!("Connecting to Redis cache at {}", redis_url);

        let client = redis::Client::open(redis_url)
            .map_err(|e| TomatoError::Cache(format!("Failed to create Redis client: {e}")))?;

        let conn = ConnectionManager::new(client)
            .await
            .map_err(|e| TomatoError::Cache(format!("Failed to connect to Redis: {e}")))?;

        info!("Successfully connected to Redis cache");

        Ok(Self { conn, ttl })
    }
}

#[async_trait]
impl ResponseCache for RedisCache {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.conn.clone();
        let data: Option<String> = conn
            .get(key)
            .await
            .map_err(|e| TomatoError::Cache(format!("Redis GET failed: {e}")))?;

        debug!(key, hit = data.is_some(), "Cache GET");
        Ok(data)
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        debug!("Cache SET: {} (TTL: {:?})", key, self.ttl);

        let mut conn = self.conn.clone();
        conn.set_ex::<_, _, ()>(key, value, self.ttl.as_secs())
            .await
            .map_err(|e| TomatoError::Cache(format!("Redis SETEX failed: {e}")))?;

        Ok(())
    }
}

/// In-process cache, for single instance deployments and tests
#[derive(Clone)]
pub struct MemoryCache {
    entries: Cache<String, String>,
}

impl fmt::Debug for MemoryCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryCache")
            .field("entries", &self.entries.entry_count())
            .finish()
    }
}

impl MemoryCache {
    pub fn new(ttl: Duration) -> Self {
        let entries = Cache::builder()
            .max_capacity(MEMORY_MAX_ENTRIES)
            .time_to_live(ttl)
            .build();

        Self { entries }
    }
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

#[async_trait]
impl ResponseCache for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let data = self.entries.get(key).await;
        debug!(key, hit = data.is_some(), "Cache GET");
        Ok(data)
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string()).await;
        Ok(())
    }
}
