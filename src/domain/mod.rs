//! Domain layer containing business entities and logic.
//!
//! Defines entities, repository interfaces and the click pipeline, independent of
//! infrastructure concerns.
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`click_event`] - Click tracking event model
//! - [`click_worker`] - Asynchronous click processing worker
//!
//! # Click Processing Flow
//!
//! 1. The redirect handler resolves the alias and answers with a redirect
//! 2. A [`click_event::ClickEvent`] is offered to a bounded channel (dropped when full)
//! 3. [`click_worker::run_click_worker`] persists events with bounded concurrency
//! 4. Click data is stored via [`repositories::ClickRepository`]

pub mod click_event;
pub mod click_worker;
pub mod entities;
pub mod repositories;
