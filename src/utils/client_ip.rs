//! Client address extraction for click logs.

use axum::http::HeaderMap;
use std::net::SocketAddr;

/// Header set by reverse proxies with the original client chain.
const FORWARDED_FOR: &str = "x-forwarded-for";

/// Returns the visitor's IP address.
///
/// Prefers the first entry of `X-Forwarded-For` when present and non-empty,
/// otherwise falls back to the socket peer address (without port).
pub fn client_ip(headers: &HeaderMap, peer: SocketAddr) -> String {
    headers
        .get(FORWARDED_FOR)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|ip| !ip.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| peer.ip().to_string())
}
