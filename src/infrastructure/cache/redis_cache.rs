//! Redis-backed cache implementation.

use super::service::{CacheError, CacheResult, CacheService, cache_key};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, info};

/// Redis cache for alias lookups.
///
/// Values are the plain original URL strings stored under `short:<alias>`.
/// `ConnectionManager` reconnects transparently and is cheap to clone per call.
pub struct RedisCache {
    client: ConnectionManager,
    default_ttl: u64,
}

impl RedisCache {
    /// Connects to Redis, validates the connection with a PING, and configures the default TTL.
    ///
    /// The database index is taken from the URL path (`redis://host:6379/2`).
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::ConnectionError`] if the URL is invalid, the connection cannot
    /// be established, or the PING health check fails.
    pub async fn connect(redis_url: &str, default_ttl_seconds: u64) -> CacheResult<Self> {
        let client = Client::open(redis_url).map_err(|e| {
            CacheError::ConnectionError(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client).await.map_err(|e| {
            CacheError::ConnectionError(format!("Failed to connect to Redis: {}", e))
        })?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| CacheError::ConnectionError(format!("Redis PING failed: {}", e)))?;

        info!("Connected to Redis");

        Ok(Self {
            client: manager,
            default_ttl: default_ttl_seconds,
        })
    }
}

#[async_trait]
impl CacheService for RedisCache {
    async fn get_url(&self, alias: &str) -> CacheResult<Option<String>> {
        let key = cache_key(alias);
        let mut conn = self.client.clone();

        let cached = conn
            .get::<_, Option<String>>(&key)
            .await
            .map_err(|e| CacheError::OperationError(format!("GET {key}: {e}")))?;

        match &cached {
            Some(url) => debug!("Cache HIT: {} -> {}", alias, url),
            None => debug!("Cache MISS: {}", alias),
        }

        Ok(cached)
    }

    async fn set_url(
        &self,
        alias: &str,
        original_url: &str,
        ttl_seconds: Option<u64>,
    ) -> CacheResult<()> {
        let key = cache_key(alias);
        let mut conn = self.client.clone();
        let ttl = ttl_seconds.unwrap_or(self.default_ttl);

        conn.set_ex::<_, _, ()>(&key, original_url, ttl)
            .await
            .map_err(|e| CacheError::OperationError(format!("SET {key}: {e}")))?;

        debug!("Cache SET: {} -> {} (TTL: {}s)", alias, original_url, ttl);
        Ok(())
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}
