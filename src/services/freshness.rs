use crate::domain::storage::Storage;
use crate::domain::{CachedPayload, WidgetPayload};
use crate::error::Result;
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{debug, warn};

/// Reuses a rendered payload for the rest of the calendar day it was made on.
pub struct FreshnessCache {
    store: Arc<dyn Storage>,
}

impl FreshnessCache {
    pub fn new(store: Arc<dyn Storage + 'static>) -> Self {
        Self { store }
    }

    /// Returns today's payload, or `None` when the cache is missing, from
    /// another day, or unreadable.
    pub fn load(&self, today: NaiveDate) -> Option<CachedPayload> {
        match self.try_load(today) {
            Ok(cached) => cached,
            Err(e) => {
                warn!("Ignoring unreadable cache: {}", e);
                None
            }
        }
    }

    fn try_load(&self, today: NaiveDate) -> Result<Option<CachedPayload>> {
        let Some(computed_date) = self.store.load_date_marker()? else {
            debug!("No cached payload yet");
            return Ok(None);
        };

        if computed_date != today {
            debug!("Cached payload from {} is stale", computed_date);
            return Ok(None);
        }

        Ok(self.store.load_payload()?.map(|payload| CachedPayload {
            computed_date,
            payload,
        }))
    }

    pub fn store(&self, payload: &WidgetPayload, today: NaiveDate) -> Result<()> {
        self.store.save(payload, today)
    }
}
