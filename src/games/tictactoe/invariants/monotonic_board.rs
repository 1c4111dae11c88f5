//! Monotonic board invariant: cells never change once marked.

use super::super::engine::GameEngine;
use super::super::position::Position;
use super::super::types::Board;
use super::Invariant;

/// Invariant: marks are never overwritten or removed.
///
/// Verified by replaying the move history onto an empty board and
/// comparing. The row and column scans in the win check stop at an empty
/// leading cell; that shortcut relies on marks never being cleared mid-match.
pub struct MonotonicBoardInvariant;

impl Invariant<GameEngine> for MonotonicBoardInvariant {
    fn holds(game: &GameEngine) -> bool {
        let Ok(mut reconstructed) = Board::new(game.size()) else {
            return false;
        };

        for mov in game.history() {
            let Position { x, y } = mov.position;

            // Cell must be empty before placing
            if !reconstructed.is_empty_at(mov.position) {
                return false;
            }

            if reconstructed.set(x, y, mov.mark).is_err() {
                return false;
            }
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::action::Move;
    use super::super::super::types::Mark;
    use super::*;

    #[test]
    fn test_empty_game_holds() {
        let game = GameEngine::new(3).unwrap();
        assert!(MonotonicBoardInvariant::holds(&game));
    }

    #[test]
    fn test_multiple_moves_hold() {
        let mut game = GameEngine::new(4).unwrap();
        for (x, y) in [(0, 0), (1, 1), (3, 0), (0, 3)] {
            game.submit_move(x, y).unwrap();
        }
        assert!(MonotonicBoardInvariant::holds(&game));
    }

    #[test]
    fn test_corrupted_board_violates() {
        let mut game = GameEngine::new(3).unwrap();
        game.submit_move(1, 1).unwrap();

        game.board.set(1, 1, Mark::O).unwrap();
        assert!(!MonotonicBoardInvariant::holds(&game));
    }

    #[test]
    fn test_duplicate_history_violates() {
        let mut game = GameEngine::new(3).unwrap();
        game.submit_move(1, 1).unwrap();

        game.history.push(Move::new(Mark::O, Position::new(1, 1)));
        assert!(!MonotonicBoardInvariant::holds(&game));
    }
}
