//! CLI administration tool for shortlink.
//!
//! Creates short links and prints click analytics directly against the
//! database, without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Create a short link with a generated alias
//! cargo run --bin admin -- create https://example.com/page
//!
//! # Create a short link with a custom alias
//! cargo run --bin admin -- create https://example.com/page --alias docs
//!
//! # Print analytics for an alias
//! cargo run --bin admin -- stats docs
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Database settings are read the same way as the server (`DATABASE_URL` or the
//! `DB_*` components).

use shortlink::application::services::{AnalyticsService, ShortenerService};
use shortlink::config::{self, Config};
use shortlink::infrastructure::cache::NullCache;
use shortlink::infrastructure::persistence::{DbCluster, PgClickRepository, PgShortUrlRepository};
use shortlink::utils::target_url::check_target_url;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::sync::Arc;

/// CLI tool for managing shortlink.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a short link
    Create {
        /// The URL to shorten
        url: String,

        /// Custom alias (generated if omitted)
        #[arg(short, long)]
        alias: Option<String>,
    },

    /// Show click analytics for an alias
    Stats {
        alias: String,

        /// Number of most recent clicks to print
        #[arg(short, long, default_value_t = 10)]
        recent: usize,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let cluster = DbCluster::connect(&config.database_url, &[], &config.pool_settings())
        .await
        .context("Failed to connect to database")?;
    let cluster = Arc::new(cluster);

    match cli.command {
        Commands::Create { url, alias } => create_link(cluster, &config, url, alias).await?,
        Commands::Stats { alias, recent } => show_stats(cluster, &alias, recent).await?,
        Commands::Db { action } => handle_db_action(action, &cluster).await?,
    }

    Ok(())
}

async fn create_link(
    cluster: Arc<DbCluster>,
    config: &Config,
    url: String,
    alias: Option<String>,
) -> Result<()> {
    let url = url.trim().to_string();
    check_target_url(&url).with_context(|| format!("Invalid URL '{url}'"))?;

    let urls = Arc::new(PgShortUrlRepository::new(cluster.clone()));
    let clicks = Arc::new(PgClickRepository::new(cluster));
    let shortener = ShortenerService::new(urls, clicks, Arc::new(NullCache::new()), None);

    let alias = shortener
        .create_short_url(url.clone(), alias.filter(|a| !a.is_empty()))
        .await?;

    let base = config
        .public_base_url
        .clone()
        .unwrap_or_else(|| format!("http://{}", config.listen_addr));

    println!("{}", "Short link created".green().bold());
    println!("  Alias: {}", alias.bright_white().bold());
    println!("  URL:   {}", url);
    println!(
        "  Short: {}",
        format!("{}/s/{}", base.trim_end_matches('/'), alias).bright_cyan()
    );

    Ok(())
}

async fn show_stats(cluster: Arc<DbCluster>, alias: &str, recent: usize) -> Result<()> {
    let analytics = AnalyticsService::new(Arc::new(PgClickRepository::new(cluster)));
    let report = analytics.report(alias).await?;

    println!("{} {}", "Analytics for".bright_blue().bold(), alias.bold());
    println!();
    println!(
        "  Clicks: {}",
        report.clicks_total.to_string().bright_green().bold()
    );

    if report.clicks_total == 0 {
        println!();
        return Ok(());
    }

    println!();
    println!("{}", "  By day".bright_blue());
    for stat in &report.by_day {
        println!("    {}  {}", stat.day.format("%Y-%m-%d"), stat.count);
    }

    println!("{}", "  By month".bright_blue());
    for stat in &report.by_month {
        println!("    {}  {}", stat.month.format("%Y-%m"), stat.count);
    }

    println!("{}", "  By user agent".bright_blue());
    for stat in &report.by_agent {
        let agent = if stat.user_agent.is_empty() {
            "(none)"
        } else {
            stat.user_agent.as_str()
        };
        println!("    {:>6}  {}", stat.count, agent);
    }

    println!("{}", "  Recent clicks".bright_blue());
    for click in report.records.iter().take(recent) {
        println!(
            "    {}  {:<15}  {}",
            click.clicked_at.format("%Y-%m-%d %H:%M:%S"),
            click.ip_address,
            click.user_agent.dimmed()
        );
    }
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, cluster: &DbCluster) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(cluster.writer()).await?;

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(cluster.writer())
                .await?;
            let urls: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM short_urls")
                .fetch_one(cluster.writer())
                .await?;
            let clicks: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM click_logs")
                .fetch_one(cluster.writer())
                .await?;

            println!("  PostgreSQL:  {}", version.bright_white());
            println!("  Short URLs:  {}", urls.to_string().bright_green());
            println!("  Clicks:      {}", clicks.to_string().bright_green());
            println!();
        }
    }

    Ok(())
}
