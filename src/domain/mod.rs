mod game;
mod payload;
pub(crate) mod storage;

pub use game::GameRecord;
pub use payload::{CachedPayload, WidgetPayload};
