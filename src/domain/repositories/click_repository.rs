//! Repository trait for click logs and their aggregates.

use crate::domain::entities::{AgentStat, ClickLog, DayStat, MonthStat, NewClick};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for click recording and analytics.
///
/// All read operations are keyed by alias and join through the mapping table.
/// They return empty collections (or zero) for aliases without clicks, including
/// aliases that do not exist.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgClickRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClickRepository: Send + Sync {
    /// Appends a click log.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on any database error, including a dangling
    /// `url_id`.
    async fn save_click(&self, new_click: NewClick) -> Result<(), AppError>;

    /// Returns all clicks of an alias, newest first.
    async fn get_analytics(&self, alias: &str) -> Result<Vec<ClickLog>, AppError>;

    /// Counts all clicks of an alias.
    async fn count_clicks(&self, alias: &str) -> Result<i64, AppError>;

    /// Click counts per calendar day, most recent day first.
    async fn statistic_day(&self, alias: &str) -> Result<Vec<DayStat>, AppError>;

    /// Click counts per calendar month, most recent month first.
    async fn statistic_month(&self, alias: &str) -> Result<Vec<MonthStat>, AppError>;

    /// Click counts per user agent, ordered by user agent descending.
    async fn statistic_agent(&self, alias: &str) -> Result<Vec<AgentStat>, AppError>;
}
