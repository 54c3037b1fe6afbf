//! Click event model for asynchronous click tracking.

use crate::domain::entities::{NewClick, ResolvedUrl};

/// An in-memory click waiting to be persisted by the background worker.
///
/// Created by the redirect handler and sent through a bounded channel, so the
/// redirect never waits on the analytics write.
///
/// `url_id` is `None` when the redirect was served from the cache; the worker then
/// resolves it from the alias before inserting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickEvent {
    pub alias: String,
    pub url_id: Option<i64>,
    pub user_agent: String,
    pub ip_address: String,
}

impl ClickEvent {
    /// Creates a click event for a resolved alias.
    ///
    /// A missing `User-Agent` is recorded as an empty string.
    pub fn new(resolved: &ResolvedUrl, user_agent: Option<&str>, ip_address: String) -> Self {
        Self {
            alias: resolved.alias.clone(),
            url_id: resolved.url_id,
            user_agent: user_agent.unwrap_or_default().to_string(),
            ip_address,
        }
    }

    /// Converts the event into an insert payload for a known url id.
    pub fn into_new_click(self, url_id: i64) -> NewClick {
        NewClick {
            url_id,
            user_agent: self.user_agent,
            ip_address: self.ip_address,
        }
    }
}
