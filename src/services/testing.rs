//! In-memory stand-ins for Steam and the cache directory.

use crate::config::SteamCredentials;
use crate::domain::storage::Storage;
use crate::domain::WidgetPayload;
use crate::error::{Result, SalesError};
use crate::infrastructure::{AppDetails, AppId, PriceOverview, SteamApi, WishlistItem};
use chrono::NaiveDate;
use std::collections::HashMap;
use std::io;
use std::sync::Mutex;
use std::time::Duration;

enum Reply {
    Found(AppDetails),
    Missing,
    Fail,
    Hang,
}

struct Scripted {
    reply: Reply,
    delay: Duration,
}

pub struct FakeSteam {
    wishlist: Option<Vec<WishlistItem>>,
    details: HashMap<String, Scripted>,
    wishlist_calls: Mutex<Vec<String>>,
    detail_calls: Mutex<Vec<String>>,
    completed: Mutex<Vec<String>>,
}

impl FakeSteam {
    pub fn new() -> Self {
        Self {
            wishlist: Some(Vec::new()),
            details: HashMap::new(),
            wishlist_calls: Mutex::new(Vec::new()),
            detail_calls: Mutex::new(Vec::new()),
            completed: Mutex::new(Vec::new()),
        }
    }

    pub fn with_wishlist(mut self, items: Vec<WishlistItem>) -> Self {
        self.wishlist = Some(items);
        self
    }

    /// Adds a wishlist entry along with its store answer.
    pub fn with_listed_game(
        mut self,
        app_id: u64,
        priority: i64,
        name: &str,
        is_free: bool,
        price: Option<(u32, &str)>,
    ) -> Self {
        self.wishlist
            .get_or_insert_with(Vec::new)
            .push(WishlistItem {
                appid: Some(AppId::Number(app_id)),
                priority: Some(priority),
                date_added: 0,
            });
        self.with_details(&app_id.to_string(), name, is_free, price)
    }

    pub fn with_failing_wishlist(mut self) -> Self {
        self.wishlist = None;
        self
    }

    pub fn with_details(
        self,
        app_id: &str,
        name: &str,
        is_free: bool,
        price: Option<(u32, &str)>,
    ) -> Self {
        let details = AppDetails {
            name: name.to_string(),
            is_free,
            price_overview: price.map(|(discount_percent, final_formatted)| PriceOverview {
                discount_percent,
                final_formatted: final_formatted.to_string(),
            }),
        };
        self.script(app_id, Reply::Found(details))
    }

    pub fn with_missing(self, app_id: &str) -> Self {
        self.script(app_id, Reply::Missing)
    }

    pub fn with_failure(self, app_id: &str) -> Self {
        self.script(app_id, Reply::Fail)
    }

    pub fn with_hang(self, app_id: &str) -> Self {
        self.script(app_id, Reply::Hang)
    }

    pub fn with_delay(mut self, app_id: &str, delay: Duration) -> Self {
        if let Some(scripted) = self.details.get_mut(app_id) {
            scripted.delay = delay;
        }
        self
    }

    fn script(mut self, app_id: &str, reply: Reply) -> Self {
        self.details.insert(
            app_id.to_string(),
            Scripted {
                reply,
                delay: Duration::ZERO,
            },
        );
        self
    }

    pub fn wishlist_calls(&self) -> Vec<String> {
        self.wishlist_calls.lock().unwrap().clone()
    }

    pub fn detail_calls(&self) -> Vec<String> {
        self.detail_calls.lock().unwrap().clone()
    }

    pub fn completion_order(&self) -> Vec<String> {
        self.completed.lock().unwrap().clone()
    }

    pub fn total_calls(&self) -> usize {
        self.wishlist_calls().len() + self.detail_calls().len()
    }
}

impl SteamApi for FakeSteam {
    async fn fetch_wishlist(&self, credentials: &SteamCredentials) -> Result<Vec<WishlistItem>> {
        self.wishlist_calls
            .lock()
            .unwrap()
            .push(credentials.steam_id.clone());
        self.wishlist
            .clone()
            .ok_or_else(|| SalesError::Io(io::Error::new(io::ErrorKind::ConnectionRefused, "down")))
    }

    async fn fetch_app_details(&self, app_id: &str) -> Result<Option<AppDetails>> {
        self.detail_calls.lock().unwrap().push(app_id.to_string());

        let Some(scripted) = self.details.get(app_id) else {
            return Ok(None);
        };

        if !scripted.delay.is_zero() {
            tokio::time::sleep(scripted.delay).await;
        }
        self.completed.lock().unwrap().push(app_id.to_string());

        match &scripted.reply {
            Reply::Found(details) => Ok(Some(details.clone())),
            Reply::Missing => Ok(None),
            Reply::Fail => Err(SalesError::Enrichment {
                app_id: app_id.to_string(),
                reason: "connection reset".to_string(),
            }),
            Reply::Hang => std::future::pending().await,
        }
    }
}

#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<Option<(NaiveDate, WidgetPayload)>>,
    corrupt: bool,
    read_only: bool,
    saves: Mutex<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn holding(date: NaiveDate, payload: WidgetPayload) -> Self {
        let store = Self::default();
        *store.state.lock().unwrap() = Some((date, payload));
        store
    }

    /// A dated cache whose payload cannot be parsed.
    pub fn corrupt(date: NaiveDate) -> Self {
        let store = Self {
            corrupt: true,
            ..Self::default()
        };
        *store.state.lock().unwrap() = Some((
            date,
            WidgetPayload {
                text: String::new(),
                alt: String::new(),
                tooltip: String::new(),
            },
        ));
        store
    }

    pub fn read_only() -> Self {
        Self {
            read_only: true,
            ..Self::default()
        }
    }

    pub fn saved(&self) -> Option<(NaiveDate, WidgetPayload)> {
        self.state.lock().unwrap().clone()
    }

    pub fn save_count(&self) -> usize {
        *self.saves.lock().unwrap()
    }
}

impl Storage for MemoryStore {
    fn load_date_marker(&self) -> Result<Option<NaiveDate>> {
        Ok(self.state.lock().unwrap().as_ref().map(|(date, _)| *date))
    }

    fn load_payload(&self) -> Result<Option<WidgetPayload>> {
        if self.corrupt {
            return Err(SalesError::CacheCorrupt("payload: expected value".to_string()));
        }
        Ok(self
            .state
            .lock()
            .unwrap()
            .as_ref()
            .map(|(_, payload)| payload.clone()))
    }

    fn save(&self, payload: &WidgetPayload, date: NaiveDate) -> Result<()> {
        *self.saves.lock().unwrap() += 1;
        if self.read_only {
            return Err(SalesError::CacheWrite(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "read-only file system",
            )));
        }
        *self.state.lock().unwrap() = Some((date, payload.clone()));
        Ok(())
    }
}
