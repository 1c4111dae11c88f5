//! Board coordinates.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::instrument;

/// A zero-based cell coordinate: `x` is the column, `y` the row.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Position {
    /// Column.
    pub x: usize,
    /// Row.
    pub y: usize,
}

impl Position {
    /// Creates a position from column and row.
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Returns the column.
    pub fn x(&self) -> usize {
        self.x
    }

    /// Returns the row.
    pub fn y(&self) -> usize {
        self.y
    }
}

impl From<(usize, usize)> for Position {
    fn from((x, y): (usize, usize)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Input that could not be read as a position.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Cannot parse {:?} as a position, expected \"x,y\" or \"x y\"", input)]
pub struct PositionParseError {
    /// The rejected input.
    pub input: String,
}

impl FromStr for Position {
    type Err = PositionParseError;

    /// Parses `"x,y"`, `"x y"` or `"(x, y)"`.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || PositionParseError {
            input: s.to_string(),
        };

        let trimmed = s.trim().trim_start_matches('(').trim_end_matches(')');
        let parts: Vec<&str> = trimmed
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect();

        match parts.as_slice() {
            [x, y] => {
                let x = x.parse().map_err(|_| err())?;
                let y = y.parse().map_err(|_| err())?;
                Ok(Self::new(x, y))
            }
            _ => Err(err()),
        }
    }
}
