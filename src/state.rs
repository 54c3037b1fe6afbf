//! Shared application state injected into every handler.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::application::services::{AnalyticsService, ShortenerService};
use crate::domain::click_event::ClickEvent;
use crate::domain::repositories::ShortUrlRepository;
use crate::infrastructure::cache::CacheService;

#[derive(Clone)]
pub struct AppState {
    pub shortener: Arc<ShortenerService>,
    pub analytics: Arc<AnalyticsService>,
    /// Used by the health check.
    pub url_repository: Arc<dyn ShortUrlRepository>,
    pub cache: Arc<dyn CacheService>,
    pub click_sender: mpsc::Sender<ClickEvent>,
    /// Base for generated short links; falls back to the request `Host`.
    pub public_base_url: Option<String>,
}
