//! Cache service trait and error types.

use async_trait::async_trait;

/// Prefix of every cache key: `short:<alias>`.
pub const KEY_PREFIX: &str = "short:";

/// Builds the cache key for an alias.
pub fn cache_key(alias: &str) -> String {
    format!("{KEY_PREFIX}{alias}")
}

/// Errors that can occur during cache operations.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Cache connection error: {0}")]
    ConnectionError(String),

    #[error("Cache operation error: {0}")]
    OperationError(String),
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Trait for caching alias → original URL mappings.
///
/// The cache is a non-authoritative accelerator: callers treat any error as a miss
/// and fall back to the store.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed cache with TTL support
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Retrieves the original URL cached for an alias.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(url))` on cache hit
    /// - `Ok(None)` on cache miss
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::OperationError`] if the backend fails.
    async fn get_url(&self, alias: &str) -> CacheResult<Option<String>>;

    /// Stores an alias mapping with an optional TTL in seconds
    /// (implementation default when `None`).
    async fn set_url(&self, alias: &str, original_url: &str, ttl_seconds: Option<u64>)
    -> CacheResult<()>;

    /// Checks if the cache backend is healthy.
    async fn health_check(&self) -> bool;
}
