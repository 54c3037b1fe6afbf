//! PostgreSQL implementation of the short URL repository.

use async_trait::async_trait;
use std::sync::Arc;

use super::DbCluster;
use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::domain::repositories::{MAX_ALIAS_LENGTH, ShortUrlRepository};
use crate::error::AppError;
use crate::utils::db_error::is_unique_violation_on_alias;

/// PostgreSQL repository for alias → URL mappings.
///
/// Inserts go to the master; lookups may be served by a replica.
pub struct PgShortUrlRepository {
    db: Arc<DbCluster>,
}

impl PgShortUrlRepository {
    /// Creates a new repository over a database cluster.
    pub fn new(db: Arc<DbCluster>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ShortUrlRepository for PgShortUrlRepository {
    async fn save_url(&self, new_url: NewShortUrl) -> Result<i64, AppError> {
        if new_url.alias.chars().count() > MAX_ALIAS_LENGTH {
            return Err(AppError::bad_request(format!(
                "alias too long (max {MAX_ALIAS_LENGTH} characters)"
            )));
        }

        let inserted = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO short_urls (original_url, alias)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(&new_url.original_url)
        .bind(&new_url.alias)
        .fetch_one(self.db.writer())
        .await;

        match inserted {
            Ok(id) => Ok(id),
            Err(e) if is_unique_violation_on_alias(&e) => Err(AppError::alias_exists(new_url.alias)),
            Err(e) => Err(e.into()),
        }
    }

    async fn get_url(&self, alias: &str) -> Result<ShortUrl, AppError> {
        sqlx::query_as::<_, ShortUrl>(
            r#"
            SELECT id, original_url, alias, created_at
            FROM short_urls
            WHERE alias = $1
            "#,
        )
        .bind(alias)
        .fetch_optional(self.db.reader())
        .await?
        .ok_or_else(|| AppError::not_found("url not found"))
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.db.writer()).await?;
        Ok(())
    }
}
