//! Validation of URLs submitted for shortening.

use url::Url;

/// Reasons a submitted URL is rejected.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TargetUrlError {
    #[error("url is required")]
    Empty,

    #[error("invalid url format: {0}")]
    InvalidFormat(String),

    #[error("url must have a host")]
    MissingHost,
}

/// Checks that `raw` is an absolute URL with a non-empty scheme and host.
///
/// The URL itself is stored exactly as submitted; nothing is normalized. Control
/// characters are rejected outright: the parser strips tabs and newlines, but the
/// stored string must remain a valid `Location` header value.
///
/// # Errors
///
/// Returns [`TargetUrlError`] describing why the URL is not acceptable.
pub fn check_target_url(raw: &str) -> Result<(), TargetUrlError> {
    if raw.is_empty() {
        return Err(TargetUrlError::Empty);
    }

    if raw.chars().any(char::is_control) {
        return Err(TargetUrlError::InvalidFormat(
            "contains control characters".to_string(),
        ));
    }

    let parsed = Url::parse(raw).map_err(|e| TargetUrlError::InvalidFormat(e.to_string()))?;

    match parsed.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(TargetUrlError::MissingHost),
    }
}
