//! Handler for the link shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode, header},
};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

const DEFAULT_HOST: &str = "localhost:8080";

/// Creates a short alias for a URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com/page",
///   "custom_alias": "my-link"
/// }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// {
///   "alias": "my-link",
///   "short": "http://localhost:8080/s/my-link"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for malformed JSON, a missing or invalid URL, an
/// invalid custom alias, or an alias that is already taken.
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let Json(payload) = payload.map_err(|_| AppError::bad_request("invalid json"))?;
    let payload = payload.normalize();

    if payload.url.is_empty() {
        return Err(AppError::bad_request("url is required"));
    }

    if let Err(errors) = payload.validate() {
        let message = if errors.field_errors().contains_key("url") {
            "invalid url format"
        } else {
            "invalid custom alias"
        };
        return Err(AppError::bad_request(message));
    }

    let alias = state
        .shortener
        .create_short_url(payload.url, payload.custom_alias)
        .await?;

    let short = short_link(state.public_base_url.as_deref(), &headers, &alias);

    Ok((StatusCode::CREATED, Json(ShortenResponse { alias, short })))
}

/// Builds the public short link: `PUBLIC_BASE_URL` if configured, otherwise
/// `http://{Host}`.
fn short_link(public_base_url: Option<&str>, headers: &HeaderMap, alias: &str) -> String {
    let base = match public_base_url {
        Some(base) => base.trim_end_matches('/').to_string(),
        None => {
            let host = headers
                .get(header::HOST)
                .and_then(|v| v.to_str().ok())
                .filter(|h| !h.is_empty())
                .unwrap_or(DEFAULT_HOST);
            format!("http://{host}")
        }
    };

    format!("{base}/s/{alias}")
}
