//! Turn sequencing and outcome tracking for an N×N match.

use super::action::{Move, MoveError, MoveOutcome};
use super::contracts::{Contract, MoveContract};
use super::outcome::MatchOutcome;
use super::position::Position;
use super::rules::{self, WinningLine};
use super::types::{Board, BoardError, Mark};
use crate::config::EngineConfig;
use derive_more::{Display, Error};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// Tic-tac-toe engine for one match on an N×N board.
///
/// The engine owns its board exclusively. Hosts submit moves and query the
/// outcome; they never write to the board directly. Once the outcome is a
/// win or a draw the engine rejects further moves until [`reset`](Self::reset).
#[derive(Debug, Clone, Serialize)]
pub struct GameEngine {
    pub(super) board: Board,
    pub(super) turn_count: usize,
    pub(super) history: Vec<Move>,
    pub(super) outcome: MatchOutcome,
}

impl GameEngine {
    /// Creates a new match on an empty board of side `size`.
    ///
    /// # Errors
    ///
    /// Returns `BoardError::InvalidDimension` for unsupported sizes.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, BoardError> {
        let board = Board::new(size)?;
        info!(size, "Created new match");
        Ok(Self {
            board,
            turn_count: 0,
            history: Vec::new(),
            outcome: MatchOutcome::InProgress,
        })
    }

    /// Creates a new match sized by the given configuration.
    #[instrument(skip(config), fields(size = config.size()))]
    pub fn with_config(config: &EngineConfig) -> Result<Self, BoardError> {
        Self::new(*config.size())
    }

    /// Places the current player's mark at column `x`, row `y`.
    ///
    /// Checks, in order: the match is not finished, the position is on the
    /// board, the cell is empty. A rejected move leaves the engine untouched.
    ///
    /// # Errors
    ///
    /// - `MoveError::GameAlreadyFinished` after a win or draw
    /// - `MoveError::OutOfBounds` for coordinates outside `[0, N)`
    /// - `MoveError::CellOccupied` if the cell already holds a mark
    #[instrument(skip(self), fields(turn = self.turn_count))]
    pub fn submit_move(&mut self, x: usize, y: usize) -> Result<MoveOutcome, MoveError> {
        let position = Position::new(x, y);

        MoveContract::pre(self, &position).inspect_err(|e| {
            warn!(%position, error = %e, "Move rejected");
        })?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let mark = Mark::for_turn(self.turn_count);
        let size = self.board.size();
        self.board
            .set(x, y, mark)
            .map_err(|_| MoveError::OutOfBounds { position, size })?;
        self.turn_count += 1;
        self.history.push(Move::new(mark, position));
        self.outcome = rules::evaluate(&self.board, self.turn_count);

        debug!(%position, %mark, turn_count = self.turn_count, "Move accepted");
        if self.outcome.is_finished() {
            info!(outcome = %self.outcome, turns = self.turn_count, "Match finished");
        }

        #[cfg(debug_assertions)]
        super::contracts::assert_invariants(&before, self);

        Ok(MoveOutcome {
            mark,
            position,
            outcome: self.outcome,
        })
    }

    /// Returns the mark to play next, or `None` once the match is finished.
    pub fn current_player(&self) -> Option<Mark> {
        (!self.outcome.is_finished()).then(|| Mark::for_turn(self.turn_count))
    }

    /// Returns the match outcome as of the last accepted move.
    pub fn outcome(&self) -> MatchOutcome {
        self.outcome
    }

    /// Returns true once the match is won or drawn.
    pub fn is_finished(&self) -> bool {
        self.outcome.is_finished()
    }

    /// Returns the completed line when the match was won.
    pub fn winning_line(&self) -> Option<WinningLine> {
        match self.outcome {
            MatchOutcome::Win(_) => rules::find_winning_line(&self.board),
            _ => None,
        }
    }

    /// Gets the mark at column `x`, row `y`.
    pub fn cell(&self, x: usize, y: usize) -> Result<Mark, BoardError> {
        self.board.get(x, y)
    }

    /// Returns a read-only view of the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the board side length.
    pub fn size(&self) -> usize {
        self.board.size()
    }

    /// Returns the number of accepted moves.
    pub fn turn_count(&self) -> usize {
        self.turn_count
    }

    /// Returns the number of turns after which the match is drawn.
    pub fn max_turns(&self) -> usize {
        rules::max_turns(self.board.size())
    }

    /// Returns accepted moves in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the positions the current player may take.
    ///
    /// Empty once the match is finished.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.is_finished() {
            return Vec::new();
        }
        self.board.empty_positions()
    }

    /// Starts a new match in place, keeping the board size.
    #[instrument(skip(self), fields(size = self.board.size(), outcome = %self.outcome))]
    pub fn reset(&mut self) {
        self.board.clear();
        self.turn_count = 0;
        self.history.clear();
        self.outcome = MatchOutcome::InProgress;
        info!("Match reset");
    }

    /// Replays moves from an empty board of side `size`.
    ///
    /// Stops at the first rejected move.
    #[instrument(skip(moves), fields(move_count = moves.len()))]
    pub fn replay(size: usize, moves: &[Position]) -> Result<Self, ReplayError> {
        let mut engine = Self::new(size)?;

        for (index, position) in moves.iter().enumerate() {
            engine
                .submit_move(position.x, position.y)
                .map_err(|source| ReplayError::Move { index, source })?;
        }

        debug!(outcome = %engine.outcome, "Replay complete");
        Ok(engine)
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self {
            board: Board::default(),
            turn_count: 0,
            history: Vec::new(),
            outcome: MatchOutcome::InProgress,
        }
    }
}

/// Error from [`GameEngine::replay`].
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, derive_more::From)]
pub enum ReplayError {
    /// The board could not be created.
    #[display("Cannot create board: {}", _0)]
    Board(BoardError),

    /// A move in the sequence was rejected.
    #[display("Move {} rejected: {}", index, source)]
    #[from(ignore)]
    Move {
        /// Zero-based index of the rejected move.
        index: usize,
        /// Why it was rejected.
        source: MoveError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(engine: &mut GameEngine, moves: &[(usize, usize)]) -> MatchOutcome {
        let mut outcome = engine.outcome();
        for &(x, y) in moves {
            outcome = engine.submit_move(x, y).unwrap().outcome;
        }
        outcome
    }

    #[test]
    fn test_new_engine() {
        let engine = GameEngine::new(3).unwrap();
        assert_eq!(engine.size(), 3);
        assert_eq!(engine.turn_count(), 0);
        assert_eq!(engine.current_player(), Some(Mark::X));
        assert_eq!(engine.outcome(), MatchOutcome::InProgress);
        assert_eq!(engine.max_turns(), 9);
        assert_eq!(engine.valid_moves().len(), 9);
    }

    #[test]
    fn test_default_is_five_by_five() {
        let engine = GameEngine::default();
        assert_eq!(engine.size(), 5);
        assert_eq!(engine.max_turns(), 25);
    }

    #[test]
    fn test_invalid_size() {
        assert_eq!(
            GameEngine::new(1).unwrap_err(),
            BoardError::InvalidDimension { size: 1 }
        );
    }

    #[test]
    fn test_submit_move_places_current_mark() {
        let mut engine = GameEngine::new(3).unwrap();
        let result = engine.submit_move(1, 2).unwrap();
        assert_eq!(result.mark, Mark::X);
        assert_eq!(result.position, Position::new(1, 2));
        assert_eq!(result.outcome, MatchOutcome::InProgress);
        assert_eq!(engine.cell(1, 2), Ok(Mark::X));
        assert_eq!(engine.current_player(), Some(Mark::O));
        assert_eq!(engine.history(), &[Move::new(Mark::X, Position::new(1, 2))]);
    }

    #[test]
    fn test_occupied_cell_rejected_without_change() {
        let mut engine = GameEngine::new(3).unwrap();
        engine.submit_move(0, 0).unwrap();
        let snapshot = engine.board().clone();

        let err = engine.submit_move(0, 0).unwrap_err();
        assert_eq!(
            err,
            MoveError::CellOccupied {
                position: Position::new(0, 0),
                mark: Mark::X
            }
        );
        assert_eq!(engine.board(), &snapshot);
        assert_eq!(engine.turn_count(), 1);
        assert_eq!(engine.current_player(), Some(Mark::O));
    }

    #[test]
    fn test_out_of_bounds_rejected_without_change() {
        let mut engine = GameEngine::new(3).unwrap();
        for (x, y) in [(3, 0), (0, 3), (usize::MAX, 1)] {
            assert!(matches!(
                engine.submit_move(x, y),
                Err(MoveError::OutOfBounds { size: 3, .. })
            ));
        }
        assert_eq!(engine.turn_count(), 0);
        assert_eq!(engine.board().occupied_count(), 0);
    }

    #[test]
    fn test_horizontal_win() {
        let mut engine = GameEngine::new(3).unwrap();
        let outcome = play(&mut engine, &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 0)]);
        assert_eq!(outcome, MatchOutcome::Win(Mark::X));
        assert!(engine.is_finished());
        assert_eq!(engine.current_player(), None);
        assert_eq!(
            engine.winning_line().map(|w| w.line),
            Some(rules::Line::Row(0))
        );
        assert!(engine.valid_moves().is_empty());
    }

    #[test]
    fn test_finished_rejects_moves() {
        let mut engine = GameEngine::new(3).unwrap();
        play(&mut engine, &[(0, 0), (0, 1), (1, 1), (1, 0), (2, 2)]);
        assert_eq!(engine.outcome(), MatchOutcome::Win(Mark::X));

        let snapshot = engine.board().clone();
        assert_eq!(
            engine.submit_move(2, 0),
            Err(MoveError::GameAlreadyFinished {
                outcome: MatchOutcome::Win(Mark::X)
            })
        );
        assert_eq!(engine.board(), &snapshot);
        assert_eq!(engine.turn_count(), 5);
    }

    #[test]
    fn test_finished_check_precedes_bounds_check() {
        let mut engine = GameEngine::new(2).unwrap();
        play(&mut engine, &[(0, 0), (1, 0), (0, 1)]);
        assert!(matches!(
            engine.submit_move(9, 9),
            Err(MoveError::GameAlreadyFinished { .. })
        ));
    }

    #[test]
    fn test_reset() {
        let mut engine = GameEngine::new(3).unwrap();
        play(&mut engine, &[(0, 0), (0, 1), (1, 1), (1, 0), (2, 2)]);
        engine.reset();

        assert_eq!(engine.outcome(), MatchOutcome::InProgress);
        assert_eq!(engine.turn_count(), 0);
        assert!(engine.history().is_empty());
        assert_eq!(engine.board().occupied_count(), 0);
        assert_eq!(engine.size(), 3);
        assert_eq!(engine.current_player(), Some(Mark::X));
        assert!(engine.submit_move(0, 0).is_ok());
    }

    #[test]
    fn test_replay_stops_at_rejected_move() {
        let moves = [Position::new(0, 0), Position::new(1, 1), Position::new(0, 0)];
        let err = GameEngine::replay(3, &moves).unwrap_err();
        assert_eq!(
            err,
            ReplayError::Move {
                index: 2,
                source: MoveError::CellOccupied {
                    position: Position::new(0, 0),
                    mark: Mark::X
                }
            }
        );
    }

    #[test]
    fn test_replay_invalid_size() {
        assert_eq!(
            GameEngine::replay(0, &[]).unwrap_err(),
            ReplayError::Board(BoardError::InvalidDimension { size: 0 })
        );
    }
}
