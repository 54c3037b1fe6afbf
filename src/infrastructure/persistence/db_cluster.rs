//! Master/replica connection routing.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tracing::{info, warn};

/// Pool sizing shared by the master and every replica.
#[derive(Debug, Clone)]
pub struct PoolSettings {
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
    pub idle_timeout: Duration,
    pub max_lifetime: Duration,
}

impl PoolSettings {
    fn options(&self) -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .acquire_timeout(self.connect_timeout)
            .idle_timeout(self.idle_timeout)
            .max_lifetime(self.max_lifetime)
    }
}

/// A master pool for writes plus optional read replicas.
///
/// Reads rotate over the replicas and use the master when none are configured.
/// There is no replica-lag handling: a read right after a write may miss it.
pub struct DbCluster {
    master: PgPool,
    replicas: Vec<PgPool>,
    next_replica: AtomicUsize,
}

impl DbCluster {
    /// Builds a cluster from already connected pools.
    pub fn new(master: PgPool, replicas: Vec<PgPool>) -> Self {
        Self {
            master,
            replicas,
            next_replica: AtomicUsize::new(0),
        }
    }

    /// A cluster consisting of a single pool used for both reads and writes.
    pub fn single(pool: PgPool) -> Self {
        Self::new(pool, Vec::new())
    }

    /// Connects to the master (with retries) and to every replica.
    ///
    /// Replicas that cannot be reached are skipped with a warning so that the
    /// service still starts against the master alone.
    ///
    /// # Errors
    ///
    /// Returns the last connection error if the master stays unreachable.
    pub async fn connect(
        master_url: &str,
        replica_urls: &[String],
        settings: &PoolSettings,
    ) -> Result<Self, sqlx::Error> {
        let strategy = ExponentialBackoff::from_millis(100)
            .max_delay(Duration::from_secs(5))
            .map(jitter)
            .take(5);

        let master = Retry::spawn(strategy, || async {
            settings.options().connect(master_url).await.inspect_err(|e| {
                warn!(error = %e, "Database connection attempt failed");
            })
        })
        .await?;
        info!("Connected to master database");

        let mut replicas = Vec::with_capacity(replica_urls.len());
        for (index, url) in replica_urls.iter().enumerate() {
            match settings.options().connect(url).await {
                Ok(pool) => {
                    info!(replica = index, "Connected to read replica");
                    replicas.push(pool);
                }
                Err(e) => warn!(replica = index, error = %e, "Skipping unreachable read replica"),
            }
        }

        Ok(Self::new(master, replicas))
    }

    /// Pool used for writes.
    pub fn writer(&self) -> &PgPool {
        &self.master
    }

    /// Pool used for reads.
    pub fn reader(&self) -> &PgPool {
        if self.replicas.is_empty() {
            return &self.master;
        }

        let index = self.next_replica.fetch_add(1, Ordering::Relaxed) % self.replicas.len();
        &self.replicas[index]
    }

    pub fn replica_count(&self) -> usize {
        self.replicas.len()
    }
}
