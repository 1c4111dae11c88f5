//! Draw detection for N×N tic-tac-toe.

use super::super::types::Board;
use super::win::check_winner;
use tracing::instrument;

/// Number of turns in a match on a board of side `size`.
pub fn max_turns(size: usize) -> usize {
    size * size
}

/// Checks if every turn has been played.
///
/// Driven by the turn count rather than by inspecting cells: each accepted
/// move fills exactly one cell, so the two agree while the engine owns the board.
pub fn turns_exhausted(board: &Board, turn_count: usize) -> bool {
    turn_count >= max_turns(board.size())
}

/// Checks if the match is drawn: all turns played and no completed line.
#[instrument(level = "debug", skip(board), fields(size = board.size()))]
pub fn is_draw(board: &Board, turn_count: usize) -> bool {
    turns_exhausted(board, turn_count) && check_winner(board).is_none()
}
