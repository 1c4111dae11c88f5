//! Strictly Gridtoe - N-in-a-row tic-tac-toe on an N×N board
//!
//! # Architecture
//!
//! - **Board**: N×N grid of marks, no game rules
//! - **GameEngine**: turn sequencing, move validation, win/draw evaluation
//! - **Rules**: pure win/draw checks over a board
//! - **Sessions**: many independent matches behind one handle
//!
//! # Example
//!
//! ```
//! use strictly_gridtoe::{GameEngine, Mark, MatchOutcome};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut engine = GameEngine::new(3)?;
//! for (x, y) in [(0, 0), (0, 1), (1, 0), (1, 1), (2, 0)] {
//!     engine.submit_move(x, y)?;
//! }
//! assert_eq!(engine.outcome(), MatchOutcome::Win(Mark::X));
//! assert_eq!(engine.outcome().banner().as_deref(), Some("X WIN !!!"));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod session;

// Crate-level exports - Configuration
pub use config::{ConfigError, EngineConfig};

// Crate-level exports - Session management
pub use session::{GameSession, Player, PlayerId, SessionError, SessionId, SessionManager};

// Crate-level exports - Game types
pub use games::tictactoe::{
    AlternatingTurnInvariant, Board, BoardError, CellIsEmpty, Contract, DEFAULT_SIZE,
    EngineInvariants, GameEngine, GameNotFinished, HistoryConsistentInvariant, Invariant,
    InvariantSet, InvariantViolation, LegalMove, Line, MAX_SIZE, MIN_SIZE, Mark, MatchOutcome,
    MonotonicBoardInvariant, Move, MoveContract, MoveError, MoveOutcome,
    OutcomeConsistentInvariant, Position, PositionParseError, ReplayError, WinningLine,
    WithinBounds, check_winner, evaluate, find_winning_line, is_draw, max_turns,
};
