//! Alias generation and validation utilities.
//!
//! Generated aliases come from the OS random source, encoded as URL-safe base64.
//! User-supplied aliases are restricted to `[A-Za-z0-9_-]`.

use std::sync::LazyLock;

use base64::Engine as _;
use chrono::{DateTime, Local, TimeZone};
use regex::Regex;
use tracing::warn;

use crate::error::AppError;

/// Number of random bytes drawn for a generated alias.
const ALIAS_RANDOM_BYTES: usize = 8;

/// Length of a generated alias.
pub const GENERATED_ALIAS_LENGTH: usize = 8;

/// Pattern every custom alias must match.
pub static ALIAS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("alias regex is valid"));

/// Generates an 8-character alias from 8 cryptographically random bytes.
///
/// The bytes are encoded as URL-safe base64 without padding and truncated, so the
/// result only contains `[A-Za-z0-9_-]`.
///
/// If the random source fails, a 6-digit `HHMMSS` alias built from the local clock
/// is returned instead. That fallback collides for any two requests within the same
/// second (and across days), so it is logged as a warning.
pub fn generate_alias() -> String {
    let mut buffer = [0u8; ALIAS_RANDOM_BYTES];

    match getrandom::fill(&mut buffer) {
        Ok(()) => encode_alias(&buffer),
        Err(e) => {
            warn!(error = %e, "random source unavailable, using clock-based alias");
            clock_alias(&Local::now())
        }
    }
}

/// Encodes random bytes into a generated alias.
fn encode_alias(bytes: &[u8]) -> String {
    let mut alias = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(bytes);
    alias.truncate(GENERATED_ALIAS_LENGTH);
    alias
}

/// Formats the `HHMMSS` fallback alias.
pub fn clock_alias<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    now.format("%H%M%S").to_string()
}

/// Returns true if `alias` is non-empty and only contains `[A-Za-z0-9_-]`.
pub fn is_valid_alias(alias: &str) -> bool {
    ALIAS_REGEX.is_match(alias)
}

/// Validates a user-provided custom alias.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the alias is empty or contains characters
/// outside `[A-Za-z0-9_-]`.
pub fn validate_alias(alias: &str) -> Result<(), AppError> {
    if !is_valid_alias(alias) {
        return Err(AppError::bad_request("alias must be alphanumeric, -, _"));
    }

    Ok(())
}
