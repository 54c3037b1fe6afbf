//! Click analytics service.

use std::sync::Arc;

use crate::domain::entities::{AgentStat, AnalyticsReport, ClickLog, DayStat, MonthStat};
use crate::domain::repositories::ClickRepository;
use crate::error::AppError;

/// Service for click analytics of a single alias.
///
/// All queries return empty results, not errors, for aliases without clicks.
pub struct AnalyticsService {
    repository: Arc<dyn ClickRepository>,
}

impl AnalyticsService {
    /// Creates a new analytics service.
    pub fn new(repository: Arc<dyn ClickRepository>) -> Self {
        Self { repository }
    }

    pub async fn count_clicks(&self, alias: &str) -> Result<i64, AppError> {
        self.repository.count_clicks(alias).await
    }

    /// Individual clicks, newest first.
    pub async fn get_analytics(&self, alias: &str) -> Result<Vec<ClickLog>, AppError> {
        self.repository.get_analytics(alias).await
    }

    pub async fn statistic_day(&self, alias: &str) -> Result<Vec<DayStat>, AppError> {
        self.repository.statistic_day(alias).await
    }

    pub async fn statistic_month(&self, alias: &str) -> Result<Vec<MonthStat>, AppError> {
        self.repository.statistic_month(alias).await
    }

    pub async fn statistic_agent(&self, alias: &str) -> Result<Vec<AgentStat>, AppError> {
        self.repository.statistic_agent(alias).await
    }

    /// Runs all analytics queries concurrently and combines them into one report.
    ///
    /// # Errors
    ///
    /// Returns the first repository error; partial reports are never produced.
    pub async fn report(&self, alias: &str) -> Result<AnalyticsReport, AppError> {
        let (clicks_total, records, by_day, by_month, by_agent) = tokio::try_join!(
            self.count_clicks(alias),
            self.get_analytics(alias),
            self.statistic_day(alias),
            self.statistic_month(alias),
            self.statistic_agent(alias),
        )?;

        Ok(AnalyticsReport {
            alias: alias.to_string(),
            clicks_total,
            records,
            by_day,
            by_month,
            by_agent,
        })
    }
}
