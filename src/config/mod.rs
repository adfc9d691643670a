use crate::config::cli::Args;
use crate::error::{Result, SalesError};
use clap::Parser;
use reqwest::Client;
use std::env;
use std::ffi::OsString;
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

pub(crate) mod cli;

const APP_DIR: &str = "steam-sales";

/// Credentials for the wishlist service. Passed explicitly to whoever needs
/// them instead of being read from the environment deep in the pipeline.
#[derive(Clone)]
pub struct SteamCredentials {
    pub api_key: String,
    pub steam_id: String,
}

impl std::fmt::Debug for SteamCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SteamCredentials")
            .field("api_key", &"<redacted>")
            .field("steam_id", &self.steam_id)
            .finish()
    }
}

pub struct Config {
    pub args: Args,
    pub credentials: SteamCredentials,
    pub cache_dir: PathBuf,
    pub http_client: Client,
}

impl Config {
    pub fn new() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    pub fn from_args(args: Args) -> Result<Self> {
        let api_key = args.api_key.trim().to_string();
        let steam_id = args.steam_id.trim().to_string();
        if api_key.is_empty() || steam_id.is_empty() {
            return Err(SalesError::Config(
                "both an API key and a Steam id are required".to_string(),
            ));
        }

        let cache_dir = match &args.cache_dir {
            Some(dir) => dir.clone(),
            None => default_cache_dir(env::var_os("XDG_CACHE_HOME"), env::var_os("HOME"))?,
        };
        debug!("Using cache directory {:?}", cache_dir);

        let http_client = Client::builder()
            .timeout(Duration::from_secs(args.timeout_secs))
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            credentials: SteamCredentials { api_key, steam_id },
            cache_dir,
            http_client,
            args,
        })
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.args.timeout_secs)
    }

    pub fn concurrency(&self) -> usize {
        usize::from(self.args.concurrency)
    }

    pub fn country_code(&self) -> Option<String> {
        self.args
            .country_code
            .as_deref()
            .map(str::trim)
            .filter(|cc| !cc.is_empty())
            .map(str::to_lowercase)
    }
}

fn default_cache_dir(xdg_cache_home: Option<OsString>, home: Option<OsString>) -> Result<PathBuf> {
    if let Some(xdg) = xdg_cache_home.filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(xdg).join(APP_DIR));
    }

    home.filter(|v| !v.is_empty())
        .map(|home| PathBuf::from(home).join(".cache").join(APP_DIR))
        .ok_or_else(|| {
            SalesError::Config(
                "cannot locate a cache directory, pass --cache-dir".to_string(),
            )
        })
}
