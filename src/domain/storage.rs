use super::WidgetPayload;
use crate::error::Result;
use chrono::NaiveDate;

/// Persistence surface for the daily payload cache.
///
/// Loads return `Ok(None)` when an artifact simply does not exist yet and
/// `Err(SalesError::CacheCorrupt)` when it exists but cannot be read back.
pub trait Storage: Send + Sync {
    fn load_date_marker(&self) -> Result<Option<NaiveDate>>;
    fn load_payload(&self) -> Result<Option<WidgetPayload>>;
    /// Replaces both artifacts.
    fn save(&self, payload: &WidgetPayload, date: NaiveDate) -> Result<()>;
}

pub struct StorageKeys;

impl StorageKeys {
    pub const DATE_MARKER: &'static str = "last_updated";
    pub const PAYLOAD: &'static str = "payload.json";
}
