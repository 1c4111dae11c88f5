//! First-class move types.
//!
//! An accepted move is recorded as a `Move` so the history can be replayed
//! and checked against the board.

use super::outcome::MatchOutcome;
use super::position::Position;
use super::types::Mark;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark placed.
    pub mark: Mark,
    /// Where it was placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, position: Position) -> Self {
        Self { mark, position }
    }

    /// Returns the mark placed by this move.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position)
    }
}

/// What an accepted move produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// The mark just placed.
    pub mark: Mark,
    /// Where it was placed.
    pub position: Position,
    /// Match outcome after the move.
    pub outcome: MatchOutcome,
}

/// Why a move was rejected. A rejected move never changes the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// Coordinates outside the board.
    #[display("Position {} is outside the {}x{} board", position, size, size)]
    OutOfBounds {
        /// Requested position.
        position: Position,
        /// Side length of the board.
        size: usize,
    },

    /// The target cell already holds a mark.
    #[display("Cell {} is already occupied by {}", position, mark)]
    CellOccupied {
        /// Requested position.
        position: Position,
        /// Mark already in the cell.
        mark: Mark,
    },

    /// The match is over; call `reset` first.
    #[display("Game is already finished: {}", outcome)]
    GameAlreadyFinished {
        /// Outcome the match ended with.
        outcome: MatchOutcome,
    },
}
