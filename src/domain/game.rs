use crate::infrastructure::AppDetails;
use serde::{Deserialize, Serialize};

const STORE_APP_URL: &str = "https://store.steampowered.com/app";

/// One wishlist entry, plus whatever the store-details lookup added to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub app_id: String,
    pub priority: i64,
    pub date_added: i64,
    pub name: String,
    pub is_free: bool,
    pub discount: u32,
    pub price: String,
    pub store_url: String,
}

impl GameRecord {
    pub fn new(app_id: impl Into<String>, priority: i64, date_added: i64) -> Self {
        let app_id = app_id.into();
        let store_url = format!("{}/{}", STORE_APP_URL, app_id);
        Self {
            app_id,
            priority,
            date_added,
            name: String::new(),
            is_free: false,
            discount: 0,
            price: String::new(),
            store_url,
        }
    }

    /// Applies store details to the record.
    ///
    /// Returns `None` when the game is not free and the store has no price
    /// overview for it (delisted, region locked, unreleased). Such a game
    /// cannot be reported, so the caller drops it.
    pub fn with_app_details(mut self, details: AppDetails) -> Option<Self> {
        self.name = details.name;
        self.is_free = details.is_free;

        if self.is_free {
            return Some(self);
        }

        let overview = details.price_overview?;
        self.discount = overview.discount_percent;
        self.price = overview.final_formatted;
        Some(self)
    }

    pub fn is_on_sale(&self) -> bool {
        self.is_free || self.discount > 0
    }
}
