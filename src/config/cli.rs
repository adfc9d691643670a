use clap::Parser;
use std::path::PathBuf;

/// Reports discounted and free games from a Steam wishlist as a status bar
/// JSON payload.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Steam Web API key
    #[arg(long, env = "STEAM_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// 64-bit Steam id of the wishlist owner
    #[arg(long, env = "STEAM_ID")]
    pub steam_id: String,

    /// Directory for the daily cache [default: $XDG_CACHE_HOME/steam-sales]
    #[arg(long, env = "STEAM_SALES_CACHE_DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Ignore today's cached result and query Steam again
    #[arg(short, long, alias = "refresh")]
    pub force: bool,

    /// Maximum number of store lookups in flight at once
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u16).range(1..))]
    pub concurrency: u16,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_secs: u64,

    /// Storefront country code used for prices, e.g. "us" or "de"
    #[arg(long, env = "STEAM_COUNTRY_CODE")]
    pub country_code: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
