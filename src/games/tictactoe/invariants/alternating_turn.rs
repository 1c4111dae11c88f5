//! Alternating turn invariant: marks alternate X, O, X, O, ...

use super::super::engine::GameEngine;
use super::super::types::Mark;
use super::Invariant;

/// Invariant: players alternate turns, X first.
///
/// The k-th accepted move (zero-based) carries X when k is even and O when
/// k is odd, and the next player follows the same rule while the match runs.
pub struct AlternatingTurnInvariant;

impl Invariant<GameEngine> for AlternatingTurnInvariant {
    fn holds(game: &GameEngine) -> bool {
        let alternates = game
            .history()
            .iter()
            .enumerate()
            .all(|(turn, mov)| mov.mark == Mark::for_turn(turn));

        let expected_next = if game.is_finished() {
            None
        } else {
            Some(Mark::for_turn(game.turn_count()))
        };

        alternates && game.current_player() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
