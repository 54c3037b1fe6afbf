//! Background worker persisting click events.
//!
//! Redirects hand click events to a bounded channel; this worker drains it and
//! writes each click with at most `concurrency` inserts in flight. Failures are
//! logged and counted, never retried: click recording is at-most-once.

use std::sync::Arc;

use tokio::sync::{Semaphore, mpsc};
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use crate::application::services::ShortenerService;
use crate::domain::click_event::ClickEvent;

/// Runs until every sender of `rx` is dropped and in-flight writes have finished.
pub async fn run_click_worker(
    mut rx: mpsc::Receiver<ClickEvent>,
    shortener: Arc<ShortenerService>,
    concurrency: usize,
) {
    let permits = Arc::new(Semaphore::new(concurrency.max(1)));
    let mut in_flight = JoinSet::new();

    while let Some(event) = rx.recv().await {
        let Ok(permit) = permits.clone().acquire_owned().await else {
            break;
        };

        let shortener = shortener.clone();
        in_flight.spawn(async move {
            let _permit = permit;
            let alias = event.alias.clone();

            match shortener.record_click(event).await {
                Ok(()) => {
                    metrics::counter!("shortlink_clicks_recorded_total").increment(1);
                    debug!(%alias, "click recorded");
                }
                Err(e) => {
                    metrics::counter!("shortlink_clicks_failed_total").increment(1);
                    warn!(%alias, error = %e, "failed to record click");
                }
            }
        });

        while in_flight.try_join_next().is_some() {}
    }

    while in_flight.join_next().await.is_some() {}

    info!("Click worker stopped");
}
