//! Application layer services implementing business logic.
//!
//! Services orchestrate repository and cache calls and provide a clean API for
//! HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::shortener_service::ShortenerService`] - Alias creation and redirect resolution
//! - [`services::analytics_service::AnalyticsService`] - Click counts and aggregates

pub mod services;
