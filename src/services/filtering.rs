use crate::domain::GameRecord;

/// Keeps free games and games with a non-zero discount, in their original
/// order.
pub fn filter_on_sale(games: Vec<GameRecord>) -> Vec<GameRecord> {
    games.into_iter().filter(GameRecord::is_on_sale).collect()
}
