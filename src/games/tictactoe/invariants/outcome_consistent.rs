//! Outcome consistency invariant: the stored outcome is derivable.

use super::super::engine::GameEngine;
use super::super::rules;
use super::Invariant;

/// Invariant: the outcome equals a fresh evaluation of board and turn count.
pub struct OutcomeConsistentInvariant;

impl Invariant<GameEngine> for OutcomeConsistentInvariant {
    fn holds(game: &GameEngine) -> bool {
        game.outcome() == rules::evaluate(game.board(), game.turn_count())
    }

    fn description() -> &'static str {
        "Outcome matches a fresh evaluation of the board"
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::outcome::MatchOutcome;
    use super::super::super::types::Mark;
    use super::*;

    #[test]
    fn test_holds_through_a_win() {
        let mut game = GameEngine::new(2).unwrap();
        game.submit_move(0, 0).unwrap();
        assert!(OutcomeConsistentInvariant::holds(&game));
        game.submit_move(1, 0).unwrap();
        game.submit_move(0, 1).unwrap();
        assert_eq!(game.outcome(), MatchOutcome::Win(Mark::X));
        assert!(OutcomeConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_stale_outcome_violates() {
        let mut game = GameEngine::new(2).unwrap();
        game.outcome = MatchOutcome::Draw;
        assert!(!OutcomeConsistentInvariant::holds(&game));
    }
}
