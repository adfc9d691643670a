use crate::config::Config;
use crate::error::Result;
use crate::infrastructure::{FileSystemStore, SteamClient};
use crate::services::{
    enrichment::Enrichment,
    freshness::FreshnessCache,
    sales_service::{emit, RefreshMode, SalesService},
    wishlist::WishlistService,
};
use chrono::Local;
use std::process::ExitCode;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{error, Level};

mod config;
mod domain;
mod error;
mod infrastructure;
mod services;

#[tokio::main]
async fn main() -> ExitCode {
    let config = match Config::new() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    // stdout carries the payload, so logs go to stderr.
    let level = Level::from_str(&config.args.log_level).unwrap_or(Level::WARN);
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(config: Config) -> Result<()> {
    let mode = if config.args.force {
        RefreshMode::Forced
    } else {
        RefreshMode::CacheAware
    };

    let store = Arc::new(FileSystemStore::new(config.cache_dir.clone()));
    let service = SalesService::new(
        SteamClient::new(config.http_client.clone(), config.country_code()),
        WishlistService::new(config.credentials.clone()),
        Enrichment::new(config.concurrency(), config.request_timeout()),
        FreshnessCache::new(store),
        Local::now().date_naive(),
    );

    let payload = service.run(mode).await?;
    emit(&payload, &mut std::io::stdout().lock())
}
