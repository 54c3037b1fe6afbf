//! PostgreSQL implementation of the click repository.

use async_trait::async_trait;
use std::sync::Arc;

use super::DbCluster;
use crate::domain::entities::{AgentStat, ClickLog, DayStat, MonthStat, NewClick};
use crate::domain::repositories::ClickRepository;
use crate::error::AppError;

/// PostgreSQL repository for click logs and analytics.
///
/// Day and month buckets use `date_trunc`, i.e. calendar boundaries in the
/// session time zone of the database.
pub struct PgClickRepository {
    db: Arc<DbCluster>,
}

impl PgClickRepository {
    /// Creates a new repository over a database cluster.
    pub fn new(db: Arc<DbCluster>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ClickRepository for PgClickRepository {
    async fn save_click(&self, new_click: NewClick) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO click_logs (url_id, user_agent, ip_address)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(new_click.url_id)
        .bind(&new_click.user_agent)
        .bind(&new_click.ip_address)
        .execute(self.db.writer())
        .await?;

        Ok(())
    }

    async fn get_analytics(&self, alias: &str) -> Result<Vec<ClickLog>, AppError> {
        let rows = sqlx::query_as::<_, ClickLog>(
            r#"
            SELECT c.id, c.url_id, c.user_agent, c.ip_address, c.clicked_at
            FROM click_logs c
            JOIN short_urls s ON s.id = c.url_id
            WHERE s.alias = $1
            ORDER BY c.clicked_at DESC, c.id DESC
            "#,
        )
        .bind(alias)
        .fetch_all(self.db.reader())
        .await?;

        Ok(rows)
    }

    async fn count_clicks(&self, alias: &str) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM click_logs c
            JOIN short_urls s ON s.id = c.url_id
            WHERE s.alias = $1
            "#,
        )
        .bind(alias)
        .fetch_one(self.db.reader())
        .await?;

        Ok(count)
    }

    async fn statistic_day(&self, alias: &str) -> Result<Vec<DayStat>, AppError> {
        let rows = sqlx::query_as::<_, DayStat>(
            r#"
            SELECT date_trunc('day', c.clicked_at) AS day,
                   COUNT(*) AS count
            FROM click_logs c
            JOIN short_urls s ON s.id = c.url_id
            WHERE s.alias = $1
            GROUP BY day
            ORDER BY day DESC
            "#,
        )
        .bind(alias)
        .fetch_all(self.db.reader())
        .await?;

        Ok(rows)
    }

    async fn statistic_month(&self, alias: &str) -> Result<Vec<MonthStat>, AppError> {
        let rows = sqlx::query_as::<_, MonthStat>(
            r#"
            SELECT date_trunc('month', c.clicked_at) AS month,
                   COUNT(*) AS count
            FROM click_logs c
            JOIN short_urls s ON s.id = c.url_id
            WHERE s.alias = $1
            GROUP BY month
            ORDER BY month DESC
            "#,
        )
        .bind(alias)
        .fetch_all(self.db.reader())
        .await?;

        Ok(rows)
    }

    async fn statistic_agent(&self, alias: &str) -> Result<Vec<AgentStat>, AppError> {
        let rows = sqlx::query_as::<_, AgentStat>(
            r#"
            SELECT c.user_agent AS user_agent,
                   COUNT(*) AS count
            FROM click_logs c
            JOIN short_urls s ON s.id = c.url_id
            WHERE s.alias = $1
            GROUP BY c.user_agent
            ORDER BY c.user_agent DESC
            "#,
        )
        .bind(alias)
        .fetch_all(self.db.reader())
        .await?;

        Ok(rows)
    }
}
