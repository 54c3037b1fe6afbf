//! Core domain entities.
//!
//! Entities are plain data structures without business logic. Insert payloads
//! use separate `New*` structs, mirroring what the store assigns on insert.
//!
//! - [`ShortUrl`] / [`NewShortUrl`] - alias → URL mappings
//! - [`ResolvedUrl`] - result of resolving an alias for a redirect
//! - [`ClickLog`] / [`NewClick`] - recorded visits
//! - [`DayStat`], [`MonthStat`], [`AgentStat`], [`AnalyticsReport`] - aggregate views

pub mod click;
pub mod short_url;

pub use click::{AgentStat, AnalyticsReport, ClickLog, DayStat, MonthStat, NewClick};
pub use short_url::{NewShortUrl, ResolvedUrl, ShortUrl};
