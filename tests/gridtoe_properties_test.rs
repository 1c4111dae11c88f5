//! Property tests for board and turn invariants.

use proptest::prelude::*;
use strictly_gridtoe::{
    Board, EngineInvariants, GameEngine, InvariantSet, Mark, MatchOutcome, MoveError,
};

proptest! {
    #[test]
    fn fresh_board_is_empty(size in 2usize..64) {
        let board = Board::new(size).unwrap();
        prop_assert_eq!(board.cell_count(), size * size);
        prop_assert!(board.cells().iter().all(|m| *m == Mark::Empty));
    }

    #[test]
    fn accepted_moves_alternate(
        size in 2usize..7,
        picks in proptest::collection::vec((0usize..8, 0usize..8), 0..60),
    ) {
        let mut engine = GameEngine::new(size).unwrap();
        let mut accepted = 0usize;

        for (x, y) in picks {
            let before = engine.board().clone();
            let turns = engine.turn_count();
            match engine.submit_move(x, y) {
                Ok(result) => {
                    let expected = if accepted % 2 == 0 { Mark::X } else { Mark::O };
                    prop_assert_eq!(result.mark, expected);
                    accepted += 1;
                }
                Err(MoveError::CellOccupied { .. })
                | Err(MoveError::OutOfBounds { .. })
                | Err(MoveError::GameAlreadyFinished { .. }) => {
                    prop_assert_eq!(engine.board(), &before);
                    prop_assert_eq!(engine.turn_count(), turns);
                }
            }
        }

        prop_assert_eq!(engine.turn_count(), accepted);
        prop_assert!(EngineInvariants::check_all(&engine).is_ok());
    }

    #[test]
    fn out_of_range_always_rejected(size in 2usize..10, offset in 0usize..100, y in 0usize..10) {
        let mut engine = GameEngine::new(size).unwrap();
        let is_out_of_bounds = matches!(
            engine.submit_move(size + offset, y),
            Err(MoveError::OutOfBounds { .. })
        );
        prop_assert!(is_out_of_bounds);
        prop_assert_eq!(engine.turn_count(), 0);
    }

    #[test]
    fn filling_every_cell_finishes(size in 2usize..6, seed in any::<u64>()) {
        let mut engine = GameEngine::new(size).unwrap();
        let mut order: Vec<usize> = (0..size * size).collect();
        // Cheap deterministic shuffle
        let mut state = seed | 1;
        for i in (1..order.len()).rev() {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            order.swap(i, (state % (i as u64 + 1)) as usize);
        }

        for index in order {
            if engine.is_finished() {
                break;
            }
            engine.submit_move(index % size, index / size).unwrap();
        }

        prop_assert!(engine.is_finished());
        if engine.turn_count() < size * size {
            prop_assert!(matches!(engine.outcome(), MatchOutcome::Win(_)));
        }
    }

    #[test]
    fn reset_restores_start(size in 2usize..6, picks in proptest::collection::vec((0usize..6, 0usize..6), 0..30)) {
        let mut engine = GameEngine::new(size).unwrap();
        for (x, y) in picks {
            let _ = engine.submit_move(x, y);
        }
        engine.reset();

        prop_assert_eq!(engine.outcome(), MatchOutcome::InProgress);
        prop_assert_eq!(engine.turn_count(), 0);
        prop_assert_eq!(engine.board().occupied_count(), 0);
        prop_assert_eq!(engine.size(), size);
    }
}
