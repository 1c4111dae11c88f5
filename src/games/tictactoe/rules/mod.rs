//! Game rules for N×N tic-tac-toe.
//!
//! Pure functions over a board and a turn count. Rules are separated from
//! board storage so the engine, contracts and invariants can share them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, max_turns, turns_exhausted};
pub use win::{Line, WinningLine, check_winner, find_winning_line};

use super::outcome::MatchOutcome;
use super::types::Board;
use tracing::instrument;

/// Evaluates the match from scratch.
///
/// The whole board is rescanned on every call rather than tracking the
/// line touched by the last move. This is O(N²) per move, which is cheap for
/// realistic board sizes and keeps no incremental state to go stale.
#[instrument(level = "debug", skip(board), fields(size = board.size()))]
pub fn evaluate(board: &Board, turn_count: usize) -> MatchOutcome {
    if let Some(winner) = check_winner(board) {
        return MatchOutcome::Win(winner);
    }

    if turns_exhausted(board, turn_count) {
        return MatchOutcome::Draw;
    }

    MatchOutcome::InProgress
}
