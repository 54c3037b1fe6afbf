//! DTOs for the analytics endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::{AgentStat, AnalyticsReport, ClickLog, DayStat, MonthStat};

/// Click analytics for one alias.
///
/// All arrays are present (possibly empty) even when the alias has no clicks.
#[derive(Debug, Serialize)]
pub struct AnalyticsResponse {
    pub alias: String,
    pub clicks_total: i64,
    pub records: Vec<ClickRecord>,
    pub by_day: Vec<DayCount>,
    pub by_month: Vec<MonthCount>,
    pub by_agent: Vec<AgentCount>,
}

/// Individual click.
#[derive(Debug, Serialize)]
pub struct ClickRecord {
    pub id: i64,
    pub url_id: i64,
    pub user_agent: String,
    pub ip_address: String,
    pub clicked_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct DayCount {
    pub day: DateTime<Utc>,
    pub count: i64,
}

#[derive(Debug, Serialize)]
pub struct MonthCount {
    pub month: DateTime<Utc>,
    pub count: i64,
}

#[derive(Debug, Serialize)]
pub struct AgentCount {
    pub user_agent: String,
    pub count: i64,
}

impl From<ClickLog> for ClickRecord {
    fn from(c: ClickLog) -> Self {
        Self {
            id: c.id,
            url_id: c.url_id,
            user_agent: c.user_agent,
            ip_address: c.ip_address,
            clicked_at: c.clicked_at,
        }
    }
}

impl From<DayStat> for DayCount {
    fn from(s: DayStat) -> Self {
        Self {
            day: s.day,
            count: s.count,
        }
    }
}

impl From<MonthStat> for MonthCount {
    fn from(s: MonthStat) -> Self {
        Self {
            month: s.month,
            count: s.count,
        }
    }
}

impl From<AgentStat> for AgentCount {
    fn from(s: AgentStat) -> Self {
        Self {
            user_agent: s.user_agent,
            count: s.count,
        }
    }
}

impl From<AnalyticsReport> for AnalyticsResponse {
    fn from(report: AnalyticsReport) -> Self {
        Self {
            alias: report.alias,
            clicks_total: report.clicks_total,
            records: report.records.into_iter().map(Into::into).collect(),
            by_day: report.by_day.into_iter().map(Into::into).collect(),
            by_month: report.by_month.into_iter().map(Into::into).collect(),
            by_agent: report.by_agent.into_iter().map(Into::into).collect(),
        }
    }
}
