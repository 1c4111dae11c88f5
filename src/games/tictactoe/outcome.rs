//! Match outcome and phase.
//!
//! `MatchOutcome` doubles as the engine's state tag: `InProgress` is the
//! only live phase, `Win` and `Draw` are the two finished phases.

use super::types::Mark;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of a match at a given point in time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchOutcome {
    /// No line completed and turns remain.
    #[default]
    InProgress,
    /// A mark completed a line. Never `Mark::Empty`.
    Win(Mark),
    /// Every turn was played without a completed line.
    Draw,
}

impl MatchOutcome {
    /// Returns true once the match is won or drawn.
    pub fn is_finished(&self) -> bool {
        !matches!(self, MatchOutcome::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            MatchOutcome::Win(mark) => Some(*mark),
            _ => None,
        }
    }

    /// Returns true if the match was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, MatchOutcome::Draw)
    }

    /// Result message for hosts to show once the match is over.
    ///
    /// `"X WIN !!!"`, `"O WIN !!!"` or `"DRAWWW !!!"`; `None` while in progress.
    pub fn banner(&self) -> Option<String> {
        match self {
            MatchOutcome::InProgress => None,
            MatchOutcome::Win(mark) => Some(format!("{} WIN !!!", mark)),
            MatchOutcome::Draw => Some("DRAWWW !!!".to_string()),
        }
    }
}

impl fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchOutcome::InProgress => write!(f, "In progress"),
            MatchOutcome::Win(mark) => write!(f, "Player {} wins", mark),
            MatchOutcome::Draw => write!(f, "Draw"),
        }
    }
}
