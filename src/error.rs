use thiserror::Error;

#[derive(Error, Debug)]
pub enum SalesError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Failed to fetch wishlist: {0}")]
    Fetch(String),
    #[error("Failed to enrich app {app_id}: {reason}")]
    Enrichment { app_id: String, reason: String },
    #[error("Failed to write cache: {0}")]
    CacheWrite(std::io::Error),
    #[error("Cache is corrupt: {0}")]
    CacheCorrupt(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, SalesError>;
