//! Alias creation and redirect resolution service.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::click_event::ClickEvent;
use crate::domain::entities::{NewClick, NewShortUrl, ResolvedUrl};
use crate::domain::repositories::{ClickRepository, ShortUrlRepository};
use crate::error::AppError;
use crate::infrastructure::cache::CacheService;
use crate::utils::alias::{generate_alias, validate_alias};

/// Service for creating aliases and resolving them for redirects.
///
/// Resolution is cache-aside: the cache is consulted first, the store is the
/// fallback, and a store hit is written back to the cache.
pub struct ShortenerService {
    url_repository: Arc<dyn ShortUrlRepository>,
    click_repository: Arc<dyn ClickRepository>,
    cache: Arc<dyn CacheService>,
    cache_ttl_seconds: Option<u64>,
}

impl ShortenerService {
    /// Creates a new shortener service.
    ///
    /// `cache_ttl_seconds` is the TTL for entries written back after a cache miss;
    /// `None` uses the cache implementation's default.
    pub fn new(
        url_repository: Arc<dyn ShortUrlRepository>,
        click_repository: Arc<dyn ClickRepository>,
        cache: Arc<dyn CacheService>,
        cache_ttl_seconds: Option<u64>,
    ) -> Self {
        Self {
            url_repository,
            click_repository,
            cache,
            cache_ttl_seconds,
        }
    }

    /// Stores `original_url` under a custom or generated alias and returns the alias.
    ///
    /// # Code Generation
    ///
    /// Without a custom alias an 8-character random alias is generated. Collisions
    /// are not retried: the caller receives [`AppError::AliasExists`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is empty or the custom alias
    /// contains characters outside `[A-Za-z0-9_-]`; nothing is stored.
    ///
    /// Returns [`AppError::AliasExists`] if the alias is already taken.
    pub async fn create_short_url(
        &self,
        original_url: String,
        custom_alias: Option<String>,
    ) -> Result<String, AppError> {
        if original_url.is_empty() {
            return Err(AppError::bad_request("url is empty"));
        }

        let alias = match custom_alias {
            Some(custom) => {
                validate_alias(&custom)?;
                custom
            }
            None => generate_alias(),
        };

        let id = self
            .url_repository
            .save_url(NewShortUrl {
                original_url,
                alias: alias.clone(),
            })
            .await?;

        debug!(%alias, id, "short url created");
        Ok(alias)
    }

    /// Resolves an alias to its original URL.
    ///
    /// A cache hit yields a [`ResolvedUrl`] without `url_id`. Cache errors are
    /// logged and treated as misses.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the alias is unknown to the store.
    pub async fn get_url(&self, alias: &str) -> Result<ResolvedUrl, AppError> {
        match self.cache.get_url(alias).await {
            Ok(Some(original_url)) => return Ok(ResolvedUrl::from_cache(alias, original_url)),
            Ok(None) => {}
            Err(e) => warn!(%alias, error = %e, "Cache lookup failed, falling back to store"),
        }

        let url = self.url_repository.get_url(alias).await?;

        if let Err(e) = self
            .cache
            .set_url(&url.alias, &url.original_url, self.cache_ttl_seconds)
            .await
        {
            warn!(%alias, error = %e, "Failed to populate cache");
        }

        Ok(url.into())
    }

    /// Records a click for a known url id.
    ///
    /// # Errors
    ///
    /// Returns the repository error unchanged.
    pub async fn save_user_click(&self, click: NewClick) -> Result<(), AppError> {
        self.click_repository.save_click(click).await
    }

    /// Persists a queued click event.
    ///
    /// Events produced from a cache hit carry no url id; it is looked up in the
    /// store by alias before inserting.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the alias no longer resolves, or the
    /// repository error from the insert.
    pub async fn record_click(&self, event: ClickEvent) -> Result<(), AppError> {
        let url_id = match event.url_id {
            Some(id) => id,
            None => self.url_repository.get_url(&event.alias).await?.id,
        };

        self.save_user_click(event.into_new_click(url_id)).await
    }
}
