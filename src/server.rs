//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, cache setup, worker spawning, and Axum server lifecycle.

use crate::application::services::{AnalyticsService, ShortenerService};
use crate::config::Config;
use crate::domain::click_worker::run_click_worker;
use crate::infrastructure::cache::{CacheService, NullCache, RedisCache};
use crate::infrastructure::persistence::{DbCluster, PgClickRepository, PgShortUrlRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Time the click worker gets to drain the queue after the server stops.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(10);

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL master pool (with retries) and read replicas
/// - Apply migrations
/// - Redis cache (or NullCache fallback)
/// - Background click worker
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - The master database stays unreachable
/// - Migrations fail
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let cluster = DbCluster::connect(
        &config.database_url,
        &config.replica_urls,
        &config.pool_settings(),
    )
    .await
    .context("Failed to connect to database")?;
    tracing::info!(replicas = cluster.replica_count(), "Database ready");

    sqlx::migrate!("./migrations")
        .run(cluster.writer())
        .await
        .context("Failed to run migrations")?;

    let cache = connect_cache(&config).await;

    let cluster = Arc::new(cluster);
    let url_repository = Arc::new(PgShortUrlRepository::new(cluster.clone()));
    let click_repository = Arc::new(PgClickRepository::new(cluster));

    let shortener = Arc::new(ShortenerService::new(
        url_repository.clone(),
        click_repository.clone(),
        cache.clone(),
        Some(config.cache_ttl_seconds),
    ));
    let analytics = Arc::new(AnalyticsService::new(click_repository));

    let (click_sender, click_rx) = mpsc::channel(config.click_queue_capacity);
    let worker = tokio::spawn(run_click_worker(
        click_rx,
        shortener.clone(),
        config.click_worker_concurrency,
    ));
    tracing::info!(
        concurrency = config.click_worker_concurrency,
        "Click worker started"
    );

    let state = AppState {
        shortener,
        analytics,
        url_repository,
        cache,
        click_sender,
        public_base_url: config.public_base_url.clone(),
    };

    let app = app_router(state, config.request_timeout());

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    // The router (and the click sender inside its state) is dropped once serving
    // ends, which closes the queue and lets the worker finish.
    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped, draining click queue");
    match tokio::time::timeout(SHUTDOWN_GRACE, worker).await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => tracing::error!(error = %e, "Click worker panicked"),
        Err(_) => tracing::warn!("Click queue not drained within grace period"),
    }

    Ok(())
}

async fn connect_cache(config: &Config) -> Arc<dyn CacheService> {
    let Some(redis_url) = &config.redis_url else {
        tracing::info!("Cache disabled (NullCache)");
        return Arc::new(NullCache::new());
    };

    match RedisCache::connect(redis_url, config.cache_ttl_seconds).await {
        Ok(redis) => {
            tracing::info!("Cache enabled (Redis)");
            Arc::new(redis)
        }
        Err(e) => {
            tracing::warn!("Failed to connect to Redis: {}. Using NullCache.", e);
            Arc::new(NullCache::new())
        }
    }
}

/// Resolves on Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
