//! Handler for short URL redirect.

use axum::{
    extract::{ConnectInfo, Path, State},
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
};
use std::net::SocketAddr;
use tokio::sync::mpsc::error::TrySendError;
use tracing::{debug, warn};

use crate::domain::click_event::ClickEvent;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::client_ip::client_ip;

/// Redirects an alias to its original URL.
///
/// # Endpoint
///
/// `GET /s/{alias}`
///
/// # Request Flow
///
/// 1. Resolve the alias (cache first, store on miss)
/// 2. Queue a click event for the background worker
/// 3. Return 302 Found with `Location` set to the original URL
///
/// # Click Tracking
///
/// Click events go to a bounded channel. If the queue is full the click is
/// dropped and the redirect still succeeds.
///
/// # Errors
///
/// Returns 400 Bad Request if the alias is blank.
/// Returns 404 Not Found if the alias doesn't exist. No click is recorded.
pub async fn redirect_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Result<impl IntoResponse, AppError> {
    let alias = alias.trim();
    if alias.is_empty() {
        return Err(AppError::bad_request("alias is required"));
    }

    let resolved = state.shortener.get_url(alias).await?;

    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok());
    let event = ClickEvent::new(&resolved, user_agent, client_ip(&headers, addr));

    match state.click_sender.try_send(event) {
        Ok(()) => debug!(%alias, cached = resolved.is_cached(), "click queued"),
        Err(TrySendError::Full(_)) => {
            metrics::counter!("shortlink_clicks_dropped_total").increment(1);
            warn!(%alias, "click queue full, dropping click");
        }
        Err(TrySendError::Closed(_)) => {
            warn!(%alias, "click queue closed, dropping click");
        }
    }

    Ok((
        StatusCode::FOUND,
        [(header::LOCATION, resolved.original_url)],
    ))
}
