//! Handler for click analytics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::analytics::AnalyticsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns raw clicks and aggregates for an alias.
///
/// # Endpoint
///
/// `GET /analytics/{alias}`
///
/// An unknown alias yields zero clicks and empty arrays, not 404.
///
/// # Errors
///
/// Returns 400 Bad Request if the alias is blank.
/// Returns 500 Internal Server Error if any of the queries fails.
pub async fn analytics_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<AnalyticsResponse>, AppError> {
    let alias = alias.trim();
    if alias.is_empty() {
        return Err(AppError::bad_request("alias is required"));
    }

    let report = state.analytics.report(alias).await?;

    Ok(Json(report.into()))
}
