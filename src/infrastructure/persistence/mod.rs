//! PostgreSQL repository implementations.
//!
//! Concrete implementations of the domain repository traits using SQLx, routed
//! through a [`DbCluster`] (writes to the master, reads to replicas).
//!
//! - [`PgShortUrlRepository`] - alias → URL mappings
//! - [`PgClickRepository`] - click logs and aggregate queries

pub mod db_cluster;
pub mod pg_click_repository;
pub mod pg_short_url_repository;

pub use db_cluster::{DbCluster, PoolSettings};
pub use pg_click_repository::PgClickRepository;
pub use pg_short_url_repository::PgShortUrlRepository;
