//! Generalized tic-tac-toe: N in a row on an N×N board.

mod action;
mod contracts;
mod engine;
mod invariants;
mod outcome;
mod position;
mod rules;
mod types;

pub use action::{Move, MoveError, MoveOutcome};
pub use contracts::{CellIsEmpty, Contract, GameNotFinished, LegalMove, MoveContract, WithinBounds};
pub use engine::{GameEngine, ReplayError};
pub use invariants::{
    AlternatingTurnInvariant, EngineInvariants, HistoryConsistentInvariant, Invariant,
    InvariantSet, InvariantViolation, MonotonicBoardInvariant, OutcomeConsistentInvariant,
};
pub use outcome::MatchOutcome;
pub use position::{Position, PositionParseError};
pub use rules::{Line, WinningLine, check_winner, evaluate, find_winning_line, is_draw, max_turns};
pub use types::{Board, BoardError, DEFAULT_SIZE, MAX_SIZE, MIN_SIZE, Mark};
