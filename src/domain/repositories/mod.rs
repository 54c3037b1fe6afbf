//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access following the Repository pattern and are
//! implemented by the infrastructure layer.
//!
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are generated via `mockall` for unit tests
//!
//! # Available Repositories
//!
//! - [`ShortUrlRepository`] - alias → URL mappings
//! - [`ClickRepository`] - click logs and aggregate queries

pub mod click_repository;
pub mod short_url_repository;

pub use click_repository::ClickRepository;
pub use short_url_repository::{MAX_ALIAS_LENGTH, ShortUrlRepository};

#[cfg(test)]
pub use click_repository::MockClickRepository;
#[cfg(test)]
pub use short_url_repository::MockShortUrlRepository;
