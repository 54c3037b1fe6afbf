//! DTOs for the link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::utils::alias::ALIAS_REGEX;
use crate::utils::target_url::check_target_url;

/// Request to shorten a URL.
///
/// An empty `custom_alias` is treated as absent (see [`ShortenRequest::normalize`]).
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL; must be absolute with a scheme and host.
    #[validate(custom(function = "validate_url_field"))]
    pub url: String,

    /// Optional custom alias: 1-64 characters of `[A-Za-z0-9_-]`.
    #[serde(default)]
    #[validate(length(min = 1, max = 64))]
    #[validate(regex(path = "*ALIAS_REGEX"))]
    pub custom_alias: Option<String>,
}

impl ShortenRequest {
    /// Trims the URL and drops an empty custom alias.
    pub fn normalize(mut self) -> Self {
        self.url = self.url.trim().to_string();
        self.custom_alias = self.custom_alias.filter(|alias| !alias.is_empty());
        self
    }
}

fn validate_url_field(url: &str) -> Result<(), ValidationError> {
    check_target_url(url).map_err(|_| ValidationError::new("url"))
}

/// Response for a created short URL.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub alias: String,
    pub short: String,
}
