mod clients;
mod storage;

pub use clients::steam::{
    AppDetails, AppId, PriceOverview, SteamApi, SteamClient, WishlistItem,
};
pub use storage::fs_store::FileSystemStore;
