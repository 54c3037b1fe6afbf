//! Short URL entity mapping an alias to its original URL.

use chrono::{DateTime, Utc};

/// A stored alias → URL mapping.
///
/// `id` and `created_at` are assigned by the store at insert time.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct ShortUrl {
    pub id: i64,
    pub original_url: String,
    pub alias: String,
    pub created_at: DateTime<Utc>,
}

impl ShortUrl {
    /// Creates a new ShortUrl instance.
    pub fn new(id: i64, original_url: String, alias: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            original_url,
            alias,
            created_at,
        }
    }
}

/// Input data for inserting a new mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShortUrl {
    pub original_url: String,
    pub alias: String,
}

/// The outcome of resolving an alias for a redirect.
///
/// A cache hit only knows the original URL, so `url_id` is `None` in that case and
/// consumers that need the row id (click recording) must look it up by alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedUrl {
    pub alias: String,
    pub original_url: String,
    pub url_id: Option<i64>,
}

impl ResolvedUrl {
    /// Builds a resolution from a cached original URL.
    pub fn from_cache(alias: impl Into<String>, original_url: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            original_url: original_url.into(),
            url_id: None,
        }
    }

    /// Returns true if the value came from the cache rather than the store.
    pub fn is_cached(&self) -> bool {
        self.url_id.is_none()
    }
}

impl From<ShortUrl> for ResolvedUrl {
    fn from(url: ShortUrl) -> Self {
        Self {
            alias: url.alias,
            original_url: url.original_url,
            url_id: Some(url.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolved_from_store_keeps_id() {
        let url = ShortUrl::new(
            7,
            "https://example.com".to_string(),
            "abc123".to_string(),
            Utc::now(),
        );

        let resolved = ResolvedUrl::from(url);

        assert_eq!(resolved.url_id, Some(7));
        assert_eq!(resolved.alias, "abc123");
        assert_eq!(resolved.original_url, "https://example.com");
        assert!(!resolved.is_cached());
    }

    #[test]
    fn test_resolved_from_cache_has_no_id() {
        let resolved = ResolvedUrl::from_cache("abc123", "https://example.com");

        assert!(resolved.url_id.is_none());
        assert!(resolved.is_cached());
    }
}
