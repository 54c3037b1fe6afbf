#![allow(dead_code)]

use async_trait::async_trait;
use axum::{Router, extract::ConnectInfo};
use chrono::{DateTime, Datelike, TimeZone, Utc};
use shortlink::api::routes::api_routes;
use shortlink::application::services::{AnalyticsService, ShortenerService};
use shortlink::domain::click_event::ClickEvent;
use shortlink::domain::entities::{
    AgentStat, ClickLog, DayStat, MonthStat, NewClick, NewShortUrl, ShortUrl,
};
use shortlink::domain::repositories::{ClickRepository, MAX_ALIAS_LENGTH, ShortUrlRepository};
use shortlink::error::AppError;
use shortlink::infrastructure::cache::{CacheError, CacheResult, CacheService};
use shortlink::state::AppState;
use std::collections::{BTreeMap, HashMap};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::mpsc;
use tower::Layer;

/// In-memory store implementing both repository traits with the same
/// semantics as the PostgreSQL implementations.
#[derive(Default)]
pub struct MemoryStore {
    urls: Mutex<Vec<ShortUrl>>,
    clicks: Mutex<Vec<ClickLog>>,
    pub url_reads: AtomicUsize,
    /// Artificial latency for URL lookups, in milliseconds.
    pub read_delay_ms: AtomicU64,
}

impl MemoryStore {
    pub fn insert_url(&self, alias: &str, url: &str) -> i64 {
        let mut urls = self.urls.lock().unwrap();
        let id = urls.len() as i64 + 1;
        urls.push(ShortUrl::new(id, url.to_string(), alias.to_string(), Utc::now()));
        id
    }

    pub fn insert_click_at(&self, url_id: i64, user_agent: &str, clicked_at: DateTime<Utc>) {
        let mut clicks = self.clicks.lock().unwrap();
        let id = clicks.len() as i64 + 1;
        clicks.push(ClickLog {
            id,
            url_id,
            user_agent: user_agent.to_string(),
            ip_address: "10.0.0.1".to_string(),
            clicked_at,
        });
    }

    pub fn clicks(&self) -> Vec<ClickLog> {
        self.clicks.lock().unwrap().clone()
    }

    fn url_id(&self, alias: &str) -> Option<i64> {
        self.urls
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.alias == alias)
            .map(|u| u.id)
    }

    fn clicks_for(&self, alias: &str) -> Vec<ClickLog> {
        let Some(url_id) = self.url_id(alias) else {
            return Vec::new();
        };
        self.clicks
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.url_id == url_id)
            .cloned()
            .collect()
    }

    fn grouped<K: Ord>(clicks: &[ClickLog], key: impl Fn(&ClickLog) -> K) -> Vec<(K, i64)> {
        let mut groups: BTreeMap<K, i64> = BTreeMap::new();
        for click in clicks {
            *groups.entry(key(click)).or_default() += 1;
        }
        groups.into_iter().rev().collect()
    }
}

#[async_trait]
impl ShortUrlRepository for MemoryStore {
    async fn save_url(&self, new_url: NewShortUrl) -> Result<i64, AppError> {
        if new_url.alias.chars().count() > MAX_ALIAS_LENGTH {
            return Err(AppError::bad_request("alias is too long"));
        }
        if self.url_id(&new_url.alias).is_some() {
            return Err(AppError::alias_exists(new_url.alias));
        }
        Ok(self.insert_url(&new_url.alias, &new_url.original_url))
    }

    async fn get_url(&self, alias: &str) -> Result<ShortUrl, AppError> {
        self.url_reads.fetch_add(1, Ordering::SeqCst);
        let delay = self.read_delay_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
        self.urls
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.alias == alias)
            .cloned()
            .ok_or_else(|| AppError::not_found("url not found"))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

#[async_trait]
impl ClickRepository for MemoryStore {
    async fn save_click(&self, new_click: NewClick) -> Result<(), AppError> {
        let mut clicks = self.clicks.lock().unwrap();
        let id = clicks.len() as i64 + 1;
        clicks.push(ClickLog {
            id,
            url_id: new_click.url_id,
            user_agent: new_click.user_agent,
            ip_address: new_click.ip_address,
            clicked_at: Utc::now(),
        });
        Ok(())
    }

    async fn get_analytics(&self, alias: &str) -> Result<Vec<ClickLog>, AppError> {
        let mut clicks = self.clicks_for(alias);
        clicks.sort_by(|a, b| b.clicked_at.cmp(&a.clicked_at));
        Ok(clicks)
    }

    async fn count_clicks(&self, alias: &str) -> Result<i64, AppError> {
        Ok(self.clicks_for(alias).len() as i64)
    }

    async fn statistic_day(&self, alias: &str) -> Result<Vec<DayStat>, AppError> {
        let clicks = self.clicks_for(alias);
        Ok(Self::grouped(&clicks, |c| {
            Utc.with_ymd_and_hms(
                c.clicked_at.year(),
                c.clicked_at.month(),
                c.clicked_at.day(),
                0,
                0,
                0,
            )
            .unwrap()
        })
        .into_iter()
        .map(|(day, count)| DayStat { day, count })
        .collect())
    }

    async fn statistic_month(&self, alias: &str) -> Result<Vec<MonthStat>, AppError> {
        let clicks = self.clicks_for(alias);
        Ok(Self::grouped(&clicks, |c| {
            Utc.with_ymd_and_hms(c.clicked_at.year(), c.clicked_at.month(), 1, 0, 0, 0)
                .unwrap()
        })
        .into_iter()
        .map(|(month, count)| MonthStat { month, count })
        .collect())
    }

    async fn statistic_agent(&self, alias: &str) -> Result<Vec<AgentStat>, AppError> {
        let clicks = self.clicks_for(alias);
        Ok(Self::grouped(&clicks, |c| c.user_agent.clone())
            .into_iter()
            .map(|(user_agent, count)| AgentStat { user_agent, count })
            .collect())
    }
}

/// HashMap-backed cache that can be switched into a failing mode.
#[derive(Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, String>>,
    pub failing: AtomicBool,
}

impl MemoryCache {
    pub fn put(&self, alias: &str, url: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(alias.to_string(), url.to_string());
    }

    pub fn get(&self, alias: &str) -> Option<String> {
        self.entries.lock().unwrap().get(alias).cloned()
    }

    fn check(&self) -> CacheResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(CacheError::OperationError("cache down".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl CacheService for MemoryCache {
    async fn get_url(&self, alias: &str) -> CacheResult<Option<String>> {
        self.check()?;
        Ok(self.get(alias))
    }

    async fn set_url(&self, alias: &str, original_url: &str, _ttl: Option<u64>) -> CacheResult<()> {
        self.check()?;
        self.put(alias, original_url);
        Ok(())
    }

    async fn health_check(&self) -> bool {
        !self.failing.load(Ordering::SeqCst)
    }
}

pub struct TestContext {
    pub state: AppState,
    pub store: Arc<MemoryStore>,
    pub cache: Arc<MemoryCache>,
    pub click_rx: mpsc::Receiver<ClickEvent>,
}

pub fn create_test_context() -> TestContext {
    create_test_context_with(100, None)
}

pub fn create_test_context_with(queue_capacity: usize, public_base_url: Option<&str>) -> TestContext {
    let store = Arc::new(MemoryStore::default());
    let cache = Arc::new(MemoryCache::default());
    let (tx, rx) = mpsc::channel(queue_capacity);

    let shortener = Arc::new(ShortenerService::new(
        store.clone(),
        store.clone(),
        cache.clone(),
        Some(60),
    ));
    let analytics = Arc::new(AnalyticsService::new(store.clone()));

    let state = AppState {
        shortener,
        analytics,
        url_repository: store.clone(),
        cache: cache.clone(),
        click_sender: tx,
        public_base_url: public_base_url.map(str::to_string),
    };

    TestContext {
        state,
        store,
        cache,
        click_rx: rx,
    }
}

/// All API routes with a fixed peer address injected.
pub fn test_router(state: AppState) -> Router {
    api_routes().layer(MockConnectInfoLayer).with_state(state)
}

#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = "127.0.0.1:12345".parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}
