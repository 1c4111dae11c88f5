//! History consistency invariant: history, turn count and board agree.

use super::super::engine::GameEngine;
use super::Invariant;

/// Invariant: history length equals the turn count and the number of
/// marked cells.
///
/// Every accepted move appears once in history and fills exactly one cell.
pub struct HistoryConsistentInvariant;

impl Invariant<GameEngine> for HistoryConsistentInvariant {
    fn holds(game: &GameEngine) -> bool {
        let history_len = game.history().len();

        history_len == game.turn_count() && history_len == game.board().occupied_count()
    }

    fn description() -> &'static str {
        "History length matches turn count and occupied cells"
    }
}
