//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} action {Q}. Preconditions run on every move; postconditions run in
//! debug builds after a move is applied.

use super::action::MoveError;
use super::engine::GameEngine;
use super::invariants::{EngineInvariants, InvariantSet, InvariantViolation};
use super::position::Position;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), InvariantViolation>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the match has not finished.
pub struct GameNotFinished;

impl GameNotFinished {
    /// Rejects any move once the outcome is a win or a draw.
    pub fn check(game: &GameEngine) -> Result<(), MoveError> {
        if game.is_finished() {
            Err(MoveError::GameAlreadyFinished {
                outcome: game.outcome(),
            })
        } else {
            Ok(())
        }
    }
}

/// Precondition: the position lies on the board.
pub struct WithinBounds;

impl WithinBounds {
    /// Rejects coordinates outside `[0, N)`.
    pub fn check(position: &Position, game: &GameEngine) -> Result<(), MoveError> {
        if game.board().contains(*position) {
            Ok(())
        } else {
            Err(MoveError::OutOfBounds {
                position: *position,
                size: game.size(),
            })
        }
    }
}

/// Precondition: the target cell is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects cells that already hold a mark.
    pub fn check(position: &Position, game: &GameEngine) -> Result<(), MoveError> {
        match game.cell(position.x, position.y) {
            Ok(mark) if !mark.is_empty() => Err(MoveError::CellOccupied {
                position: *position,
                mark,
            }),
            Ok(_) => Ok(()),
            Err(_) => Err(MoveError::OutOfBounds {
                position: *position,
                size: game.size(),
            }),
        }
    }
}

/// Composite precondition, checked in order: not finished, in bounds, empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(level = "debug", skip(game))]
    pub fn check(position: &Position, game: &GameEngine) -> Result<(), MoveError> {
        GameNotFinished::check(game)?;
        WithinBounds::check(position, game)?;
        CellIsEmpty::check(position, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for `GameEngine::submit_move`.
///
/// Preconditions:
/// - Match not finished
/// - Position on the board
/// - Cell empty
///
/// Postconditions:
/// - Exactly one turn was added
/// - Marks present before the move are untouched
/// - All engine invariants hold
pub struct MoveContract;

impl Contract<GameEngine, Position> for MoveContract {
    fn pre(game: &GameEngine, position: &Position) -> Result<(), MoveError> {
        LegalMove::check(position, game)
    }

    fn post(before: &GameEngine, after: &GameEngine) -> Result<(), InvariantViolation> {
        let mut descriptions = Vec::new();

        if after.turn_count() != before.turn_count() + 1 {
            descriptions.push("Exactly one turn is added per move".to_string());
        }

        let preserved = before
            .board()
            .cells()
            .iter()
            .zip(after.board().cells())
            .all(|(old, new)| old.is_empty() || old == new);
        if !preserved {
            descriptions.push("Placed marks are never changed".to_string());
        }

        if let Err(violations) = EngineInvariants::check_all(after) {
            descriptions.extend(violations.into_iter().map(|v| v.description));
        }

        if descriptions.is_empty() {
            Ok(())
        } else {
            Err(InvariantViolation::new(format!(
                "Postcondition failed: {}",
                descriptions.join("; ")
            )))
        }
    }
}

/// Asserts the move postconditions (panics on violation in debug builds).
#[instrument(level = "debug", skip_all)]
pub fn assert_invariants(before: &GameEngine, after: &GameEngine) {
    if let Err(violation) = MoveContract::post(before, after) {
        warn!(%violation, "Engine invariant violated");
        debug_assert!(false, "{}", violation);
    }
}
