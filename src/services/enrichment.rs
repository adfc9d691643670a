use crate::domain::GameRecord;
use crate::error::SalesError;
use crate::infrastructure::SteamApi;
use futures::stream::{self, StreamExt};
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, info, warn};

enum DetailOutcome {
    Enriched(GameRecord),
    MissingPrice(String),
    Failed(SalesError),
}

pub struct Enrichment {
    concurrency: usize,
    request_timeout: Duration,
}

impl Enrichment {
    pub fn new(concurrency: usize, request_timeout: Duration) -> Self {
        Self {
            concurrency: concurrency.max(1),
            request_timeout,
        }
    }

    /// Looks up store details for every game, at most `concurrency` at a time.
    ///
    /// The result keeps the input order. Games without a price overview and
    /// games whose lookup failed or timed out are left out; neither stops the
    /// run.
    pub async fn enrich_games<A: SteamApi>(
        &self,
        api: &A,
        games: Vec<GameRecord>,
    ) -> Vec<GameRecord> {
        let total = games.len();
        let outcomes: Vec<DetailOutcome> = stream::iter(games)
            .map(|game| self.enrich_game(api, game))
            .buffered(self.concurrency)
            .collect()
            .await;

        let mut enriched = Vec::with_capacity(total);
        let mut without_price = 0;
        let mut failed = 0;

        for outcome in outcomes {
            match outcome {
                DetailOutcome::Enriched(game) => enriched.push(game),
                DetailOutcome::MissingPrice(app_id) => {
                    debug!("No price data for app {}, dropping it", app_id);
                    without_price += 1;
                }
                DetailOutcome::Failed(e) => {
                    warn!("{}, dropping it", e);
                    failed += 1;
                }
            }
        }

        info!(
            "Enriched {} of {} games ({} without price data, {} failed)",
            enriched.len(),
            total,
            without_price,
            failed
        );
        enriched
    }

    async fn enrich_game<A: SteamApi>(&self, api: &A, game: GameRecord) -> DetailOutcome {
        let app_id = game.app_id.clone();
        let result = timeout(self.request_timeout, api.fetch_app_details(&app_id)).await;

        match result {
            Ok(Ok(Some(details))) => match game.with_app_details(details) {
                Some(game) => DetailOutcome::Enriched(game),
                None => DetailOutcome::MissingPrice(app_id),
            },
            Ok(Ok(None)) => DetailOutcome::MissingPrice(app_id),
            Ok(Err(e @ SalesError::Enrichment { .. })) => DetailOutcome::Failed(e),
            Ok(Err(e)) => DetailOutcome::Failed(SalesError::Enrichment {
                app_id,
                reason: e.to_string(),
            }),
            Err(_) => DetailOutcome::Failed(SalesError::Enrichment {
                app_id,
                reason: format!("timed out after {:?}", self.request_timeout),
            }),
        }
    }
}
