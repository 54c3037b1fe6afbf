//! Top-level router configuration.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Timeout** - Requests exceeding the configured deadline get 408
//! - **Path normalization** - Trailing slash handling

use std::time::Duration;

use crate::api;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::http::StatusCode;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::timeout::TimeoutLayer;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState, request_timeout: Duration) -> NormalizePath<Router> {
    let router = api::routes::api_routes()
        .with_state(state)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
