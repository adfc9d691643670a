use crate::config::SteamCredentials;
use crate::domain::GameRecord;
use crate::error::{Result, SalesError};
use crate::infrastructure::{SteamApi, WishlistItem};
use tracing::{debug, info};

pub struct WishlistService {
    credentials: SteamCredentials,
}

impl WishlistService {
    pub fn new(credentials: SteamCredentials) -> Self {
        Self { credentials }
    }

    /// Fetches the wishlist and returns it ordered by ascending priority.
    pub async fn fetch<A: SteamApi>(&self, api: &A) -> Result<Vec<GameRecord>> {
        let items = api
            .fetch_wishlist(&self.credentials)
            .await
            .map_err(|e| match e {
                SalesError::Fetch(_) => e,
                other => SalesError::Fetch(other.to_string()),
            })?;

        let games = into_records(items);
        info!("Wishlist contains {} games", games.len());
        Ok(games)
    }
}

pub(crate) fn into_records(items: Vec<WishlistItem>) -> Vec<GameRecord> {
    let mut games: Vec<GameRecord> = items
        .into_iter()
        .filter_map(|item| match (item.appid, item.priority) {
            (Some(app_id), Some(priority)) => Some(GameRecord::new(
                app_id.to_string(),
                priority,
                item.date_added,
            )),
            (None, _) => {
                debug!("Skipping wishlist entry without an app id");
                None
            }
            (Some(app_id), None) => {
                debug!("Skipping wishlist entry {} without a priority", app_id);
                None
            }
        })
        .collect();

    games.sort_by_key(|game| game.priority);
    games
}
