use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The JSON object a status bar custom module reads from stdout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetPayload {
    pub text: String,
    pub alt: String,
    pub tooltip: String,
}

impl WidgetPayload {
    pub fn to_json_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedPayload {
    pub computed_date: NaiveDate,
    pub payload: WidgetPayload,
}
