//! API route configuration.

use crate::api::handlers::{analytics_handler, health_handler, redirect_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All public routes.
///
/// # Endpoints
///
/// - `POST /shorten`            - Create a short alias
/// - `GET  /s/{alias}`          - Redirect to the original URL (302)
/// - `GET  /analytics/{alias}`  - Click records and aggregates
/// - `GET  /health`             - DB, cache and click queue status
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/s/{alias}", get(redirect_handler))
        .route("/analytics/{alias}", get(analytics_handler))
        .route("/health", get(health_handler))
}
