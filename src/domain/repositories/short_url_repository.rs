//! Repository trait for alias → URL mappings.

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::error::AppError;
use async_trait::async_trait;

/// Maximum alias length accepted by the store.
pub const MAX_ALIAS_LENGTH: usize = 64;

/// Repository interface for short URL mappings.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgShortUrlRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortUrlRepository: Send + Sync {
    /// Inserts a new mapping and returns its id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the alias is longer than
    /// [`MAX_ALIAS_LENGTH`] characters; nothing is inserted in that case.
    ///
    /// Returns [`AppError::AliasExists`] if the alias is already taken.
    ///
    /// Returns [`AppError::Database`] on any other database error.
    async fn save_url(&self, new_url: NewShortUrl) -> Result<i64, AppError>;

    /// Looks up a mapping by exact alias.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no row matches.
    /// Returns [`AppError::Database`] on database errors.
    async fn get_url(&self, alias: &str) -> Result<ShortUrl, AppError>;

    /// Checks that the store is reachable.
    async fn ping(&self) -> Result<(), AppError>;
}
