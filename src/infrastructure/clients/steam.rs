use crate::config::SteamCredentials;
use crate::error::{Result, SalesError};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use tracing::debug;

pub const WISHLIST_URL: &str = "https://api.steampowered.com/IWishlistService/GetWishlist/v1/";
pub const APP_DETAILS_URL: &str = "https://store.steampowered.com/api/appdetails";

#[derive(Debug, Deserialize)]
pub struct WishlistResponse {
    pub response: WishlistItems,
}

/// Steam omits `items` entirely for an empty wishlist.
#[derive(Debug, Deserialize)]
pub struct WishlistItems {
    #[serde(default)]
    pub items: Vec<WishlistItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WishlistItem {
    #[serde(default)]
    pub appid: Option<AppId>,
    #[serde(default)]
    pub priority: Option<i64>,
    #[serde(default)]
    pub date_added: i64,
}

/// App ids come back as numbers from the wishlist service, but older
/// responses and some proxies quote them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum AppId {
    Number(u64),
    Text(String),
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppId::Number(id) => write!(f, "{}", id),
            AppId::Text(id) => f.write_str(id),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AppDetailsEnvelope {
    pub success: bool,
    #[serde(default)]
    pub data: Option<AppDetails>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppDetails {
    pub name: String,
    #[serde(default)]
    pub is_free: bool,
    #[serde(default)]
    pub price_overview: Option<PriceOverview>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceOverview {
    pub discount_percent: u32,
    pub final_formatted: String,
}

#[derive(Debug, Clone)]
pub struct SteamEndpoints {
    pub wishlist_url: String,
    pub app_details_url: String,
}

impl Default for SteamEndpoints {
    fn default() -> Self {
        Self {
            wishlist_url: WISHLIST_URL.to_string(),
            app_details_url: APP_DETAILS_URL.to_string(),
        }
    }
}

/// The two Steam calls the pipeline depends on.
pub trait SteamApi: Send + Sync {
    fn fetch_wishlist(
        &self,
        credentials: &SteamCredentials,
    ) -> impl Future<Output = Result<Vec<WishlistItem>>> + Send;

    /// `Ok(None)` means the store answered but has no data for this app.
    fn fetch_app_details(
        &self,
        app_id: &str,
    ) -> impl Future<Output = Result<Option<AppDetails>>> + Send;
}

pub struct SteamClient {
    client: Client,
    endpoints: SteamEndpoints,
    country_code: Option<String>,
}

impl SteamClient {
    pub fn new(client: Client, country_code: Option<String>) -> Self {
        Self::with_endpoints(client, SteamEndpoints::default(), country_code)
    }

    pub fn with_endpoints(
        client: Client,
        endpoints: SteamEndpoints,
        country_code: Option<String>,
    ) -> Self {
        Self {
            client,
            endpoints,
            country_code,
        }
    }
}

impl SteamApi for SteamClient {
    async fn fetch_wishlist(&self, credentials: &SteamCredentials) -> Result<Vec<WishlistItem>> {
        // The request url carries the api key, so errors are stripped of it.
        let response = self
            .client
            .get(&self.endpoints.wishlist_url)
            .query(&[
                ("key", credentials.api_key.as_str()),
                ("steamid", credentials.steam_id.as_str()),
            ])
            .send()
            .await
            .map_err(|e| SalesError::Fetch(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SalesError::Fetch(format!(
                "wishlist endpoint returned {}",
                status
            )));
        }

        let body: WishlistResponse = response
            .json()
            .await
            .map_err(|e| SalesError::Fetch(e.without_url().to_string()))?;

        debug!("Wishlist returned {} items", body.response.items.len());
        Ok(body.response.items)
    }

    async fn fetch_app_details(&self, app_id: &str) -> Result<Option<AppDetails>> {
        let mut request = self
            .client
            .get(&self.endpoints.app_details_url)
            .query(&[("appids", app_id)]);
        if let Some(cc) = &self.country_code {
            request = request.query(&[("cc", cc.as_str())]);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SalesError::Enrichment {
                app_id: app_id.to_string(),
                reason: format!("store returned {}", status),
            });
        }

        let mut data: HashMap<String, AppDetailsEnvelope> = response.json().await?;
        Ok(data
            .remove(app_id)
            .filter(|d| d.success)
            .and_then(|d| d.data))
    }
}
