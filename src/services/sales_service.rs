use crate::domain::{CachedPayload, GameRecord, WidgetPayload};
use crate::error::Result;
use crate::infrastructure::SteamApi;
use crate::services::{
    enrichment::Enrichment, filtering::filter_on_sale, freshness::FreshnessCache,
    render::render_payload, wishlist::WishlistService,
};
use chrono::NaiveDate;
use std::io::Write;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshMode {
    /// Reuse today's payload when there is one.
    CacheAware,
    /// Always query Steam and overwrite the cache.
    Forced,
}

enum RunState {
    ForcedRefresh,
    CheckCache,
    CacheHit(CachedPayload),
    CacheMiss,
    Emit(WidgetPayload),
}

pub struct SalesService<A: SteamApi> {
    steam: A,
    wishlist: WishlistService,
    enrichment: Enrichment,
    cache: FreshnessCache,
    today: NaiveDate,
}

impl<A: SteamApi> SalesService<A> {
    pub fn new(
        steam: A,
        wishlist: WishlistService,
        enrichment: Enrichment,
        cache: FreshnessCache,
        today: NaiveDate,
    ) -> Self {
        Self {
            steam,
            wishlist,
            enrichment,
            cache,
            today,
        }
    }

    /// Produces the payload for this invocation, either from today's cache or
    /// by running the whole pipeline.
    pub async fn run(&self, mode: RefreshMode) -> Result<WidgetPayload> {
        let mut state = match mode {
            RefreshMode::Forced => RunState::ForcedRefresh,
            RefreshMode::CacheAware => RunState::CheckCache,
        };

        loop {
            state = match state {
                RunState::ForcedRefresh => {
                    info!("Forced refresh, skipping cache");
                    RunState::CacheMiss
                }
                RunState::CheckCache => match self.cache.load(self.today) {
                    Some(cached) => RunState::CacheHit(cached),
                    None => RunState::CacheMiss,
                },
                RunState::CacheHit(cached) => {
                    info!("Using cached payload from {}", cached.computed_date);
                    RunState::Emit(cached.payload)
                }
                RunState::CacheMiss => {
                    let payload = self.refresh().await?;
                    if let Err(e) = self.cache.store(&payload, self.today) {
                        warn!("Could not update cache: {}", e);
                    }
                    RunState::Emit(payload)
                }
                RunState::Emit(payload) => return Ok(payload),
            };
        }
    }

    async fn refresh(&self) -> Result<WidgetPayload> {
        info!("Starting wishlist sales pipeline");

        let games = self.wishlist.fetch(&self.steam).await?;
        let enriched = self.enrichment.enrich_games(&self.steam, games).await;
        let on_sale = filter_on_sale(enriched);
        info!("{} games are free or discounted", on_sale.len());
        log_games(&on_sale);

        Ok(render_payload(&on_sale))
    }
}

fn log_games(games: &[GameRecord]) {
    for game in games {
        debug!(
            "{} ({}) free={} discount={}% price={}",
            game.name, game.store_url, game.is_free, game.discount, game.price
        );
    }
}

/// Writes the payload as a single JSON line.
pub fn emit<W: Write>(payload: &WidgetPayload, out: &mut W) -> Result<()> {
    let line = payload.to_json_line()?;
    writeln!(out, "{}", line)?;
    out.flush()?;
    Ok(())
}
