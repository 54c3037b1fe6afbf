//! PostgreSQL repository tests. Require a live database (`DATABASE_URL`):
//! `cargo test --test repository_pg -- --ignored`.

use shortlink::domain::entities::{NewClick, NewShortUrl};
use shortlink::domain::repositories::{ClickRepository, ShortUrlRepository};
use shortlink::error::AppError;
use shortlink::infrastructure::persistence::{DbCluster, PgClickRepository, PgShortUrlRepository};
use sqlx::PgPool;
use std::sync::Arc;

fn repositories(pool: PgPool) -> (PgShortUrlRepository, PgClickRepository) {
    let cluster = Arc::new(DbCluster::single(pool));
    (
        PgShortUrlRepository::new(cluster.clone()),
        PgClickRepository::new(cluster),
    )
}

fn new_url(alias: &str, url: &str) -> NewShortUrl {
    NewShortUrl {
        original_url: url.to_string(),
        alias: alias.to_string(),
    }
}

async fn insert_click_at(pool: &PgPool, url_id: i64, user_agent: &str, clicked_at: &str) {
    sqlx::query(
        "INSERT INTO click_logs (url_id, user_agent, ip_address, clicked_at) VALUES ($1, $2, '10.0.0.1', $3::timestamptz)",
    )
    .bind(url_id)
    .bind(user_agent)
    .bind(clicked_at)
    .execute(pool)
    .await
    .unwrap();
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires PostgreSQL"]
async fn test_save_and_get_url(pool: PgPool) {
    let (urls, _) = repositories(pool);

    let id = urls
        .save_url(new_url("pg-link", "https://example.com/pg"))
        .await
        .unwrap();

    let stored = urls.get_url("pg-link").await.unwrap();
    assert_eq!(stored.id, id);
    assert_eq!(stored.original_url, "https://example.com/pg");
    assert_eq!(stored.alias, "pg-link");
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires PostgreSQL"]
async fn test_duplicate_alias(pool: PgPool) {
    let (urls, _) = repositories(pool);

    urls.save_url(new_url("dup", "https://example.com/1"))
        .await
        .unwrap();
    let result = urls.save_url(new_url("dup", "https://example.com/2")).await;

    assert!(matches!(result, Err(AppError::AliasExists { .. })));
    assert_eq!(
        urls.get_url("dup").await.unwrap().original_url,
        "https://example.com/1"
    );
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires PostgreSQL"]
async fn test_alias_too_long_is_rejected(pool: PgPool) {
    let (urls, _) = repositories(pool);

    let result = urls
        .save_url(new_url(&"a".repeat(65), "https://example.com"))
        .await;

    assert!(matches!(result, Err(AppError::Validation { .. })));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires PostgreSQL"]
async fn test_get_unknown_url(pool: PgPool) {
    let (urls, _) = repositories(pool);

    let result = urls.get_url("missing").await;

    assert!(matches!(result, Err(AppError::NotFound { .. })));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires PostgreSQL"]
async fn test_click_aggregates(pool: PgPool) {
    let (urls, clicks) = repositories(pool.clone());

    let id = urls
        .save_url(new_url("agg", "https://example.com"))
        .await
        .unwrap();

    insert_click_at(&pool, id, "curl/8.0", "2025-01-01T09:00:00Z").await;
    insert_click_at(&pool, id, "wget/1.21", "2025-01-02T10:00:00Z").await;
    insert_click_at(&pool, id, "wget/1.21", "2025-02-03T11:00:00Z").await;
    clicks
        .save_click(NewClick {
            url_id: id,
            user_agent: "curl/8.0".to_string(),
            ip_address: "127.0.0.1".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(clicks.count_clicks("agg").await.unwrap(), 4);

    let records = clicks.get_analytics("agg").await.unwrap();
    assert_eq!(records.len(), 4);
    assert!(records.windows(2).all(|w| w[0].clicked_at >= w[1].clicked_at));
    assert_eq!(records[0].ip_address, "127.0.0.1");

    let by_day = clicks.statistic_day("agg").await.unwrap();
    assert_eq!(by_day.iter().map(|d| d.count).sum::<i64>(), 4);
    assert!(by_day.windows(2).all(|w| w[0].day > w[1].day));

    let by_month = clicks.statistic_month("agg").await.unwrap();
    assert_eq!(by_month.iter().map(|m| m.count).sum::<i64>(), 4);
    assert!(by_month.windows(2).all(|w| w[0].month > w[1].month));

    let by_agent = clicks.statistic_agent("agg").await.unwrap();
    assert_eq!(by_agent.len(), 2);
    assert_eq!(by_agent[0].user_agent, "wget/1.21");
    assert_eq!(by_agent[0].count, 2);
    assert_eq!(by_agent[1].user_agent, "curl/8.0");
    assert_eq!(by_agent[1].count, 2);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires PostgreSQL"]
async fn test_analytics_unknown_alias(pool: PgPool) {
    let (_, clicks) = repositories(pool);

    assert_eq!(clicks.count_clicks("nobody").await.unwrap(), 0);
    assert!(clicks.get_analytics("nobody").await.unwrap().is_empty());
    assert!(clicks.statistic_day("nobody").await.unwrap().is_empty());
    assert!(clicks.statistic_month("nobody").await.unwrap().is_empty());
    assert!(clicks.statistic_agent("nobody").await.unwrap().is_empty());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires PostgreSQL"]
async fn test_ping(pool: PgPool) {
    let (urls, _) = repositories(pool);

    assert!(urls.ping().await.is_ok());
}
