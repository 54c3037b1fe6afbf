//! Click log entity and the aggregate views derived from it.

use chrono::{DateTime, Utc};

/// One recorded visit through a short alias.
///
/// Click logs are append-only: the service never updates or deletes them.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct ClickLog {
    pub id: i64,
    pub url_id: i64,
    pub user_agent: String,
    pub ip_address: String,
    pub clicked_at: DateTime<Utc>,
}

/// Input data for recording a new click.
///
/// `clicked_at` is set by the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClick {
    pub url_id: i64,
    pub user_agent: String,
    pub ip_address: String,
}

/// Number of clicks within one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct DayStat {
    pub day: DateTime<Utc>,
    pub count: i64,
}

/// Number of clicks within one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct MonthStat {
    pub month: DateTime<Utc>,
    pub count: i64,
}

/// Number of clicks made with one user agent.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct AgentStat {
    pub user_agent: String,
    pub count: i64,
}

/// Everything known about the clicks of one alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyticsReport {
    pub alias: String,
    pub clicks_total: i64,
    pub records: Vec<ClickLog>,
    pub by_day: Vec<DayStat>,
    pub by_month: Vec<MonthStat>,
    pub by_agent: Vec<AgentStat>,
}

impl AnalyticsReport {
    /// A report for an alias without any recorded clicks.
    pub fn empty(alias: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            clicks_total: 0,
            records: Vec::new(),
            by_day: Vec::new(),
            by_month: Vec::new(),
            by_agent: Vec::new(),
        }
    }
}
