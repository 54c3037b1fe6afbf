//! Utility functions for alias handling and request processing.
//!
//! - [`alias`] - Alias generation and validation
//! - [`target_url`] - Validation of URLs submitted for shortening
//! - [`client_ip`] - Visitor address extraction
//! - [`db_error`] - Database error classification

pub mod alias;
pub mod client_ip;
pub mod db_error;
pub mod target_url;
