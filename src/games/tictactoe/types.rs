//! Core domain types for N×N tic-tac-toe.

use super::position::Position;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{instrument, warn};

/// Smallest supported board side.
pub const MIN_SIZE: usize = 2;

/// Largest supported board side. `MAX_SIZE * MAX_SIZE` fits an `i32` turn counter.
pub const MAX_SIZE: usize = 46_340;

/// Board side used when nothing else is configured.
pub const DEFAULT_SIZE: usize = 5;

/// The value occupying a cell.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Mark {
    /// Unmarked cell.
    #[default]
    #[strum(to_string = ".")]
    Empty,
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Mark {
    /// Returns the mark placed on the given zero-based turn.
    ///
    /// Even turns belong to X, odd turns to O.
    pub fn for_turn(turn: usize) -> Self {
        if turn % 2 == 0 { Mark::X } else { Mark::O }
    }

    /// Returns the opposing mark. `Empty` has no opponent and maps to itself.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
            Mark::Empty => Mark::Empty,
        }
    }

    /// Checks if this is the empty mark.
    pub fn is_empty(self) -> bool {
        self == Mark::Empty
    }
}

/// Errors raised by the board container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// Side length outside the supported range.
    #[display("Board size {} is outside the supported range {}..={}", size, MIN_SIZE, MAX_SIZE)]
    InvalidDimension {
        /// Requested side length.
        size: usize,
    },

    /// Coordinates outside the grid.
    #[display("Position {} is outside the {}x{} board", position, size, size)]
    OutOfBounds {
        /// Offending coordinates.
        position: Position,
        /// Side length of the board.
        size: usize,
    },
}

/// Square N×N grid of marks.
///
/// The board is a plain container: it enforces coordinates but no game
/// rules. Cells are stored in row-major order, `index = y * size + x`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    size: usize,
    cells: Vec<Mark>,
}

impl Board {
    /// Creates an empty board with the given side length.
    ///
    /// # Errors
    ///
    /// Returns `BoardError::InvalidDimension` if `size` is below
    /// [`MIN_SIZE`] or above [`MAX_SIZE`].
    #[instrument]
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
            warn!(size, "Rejected board size");
            return Err(BoardError::InvalidDimension { size });
        }

        Ok(Self {
            size,
            cells: vec![Mark::Empty; size * size],
        })
    }

    /// Returns the side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of cells (`size * size`).
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Gets the mark at column `x`, row `y`.
    pub fn get(&self, x: usize, y: usize) -> Result<Mark, BoardError> {
        let index = self.index(x, y)?;
        Ok(self.cells[index])
    }

    /// Overwrites the mark at column `x`, row `y`.
    ///
    /// No occupancy check is made here.
    pub fn set(&mut self, x: usize, y: usize, mark: Mark) -> Result<(), BoardError> {
        let index = self.index(x, y)?;
        self.cells[index] = mark;
        Ok(())
    }

    /// Checks if a position lies on the board.
    pub fn contains(&self, position: Position) -> bool {
        position.x < self.size && position.y < self.size
    }

    /// Checks if a position is on the board and unmarked.
    pub fn is_empty_at(&self, position: Position) -> bool {
        matches!(self.get(position.x, position.y), Ok(Mark::Empty))
    }

    /// Returns every unmarked position in row-major order.
    pub fn empty_positions(&self) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, mark)| mark.is_empty())
            .map(|(index, _)| Position::new(index % self.size, index / self.size))
            .collect()
    }

    /// Counts marked cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|mark| !mark.is_empty()).count()
    }

    /// Checks if every cell is marked.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|mark| !mark.is_empty())
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Mark] {
        &self.cells
    }

    /// Iterates over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Mark]> {
        self.cells.chunks(self.size)
    }

    /// Resets every cell to `Empty`.
    pub fn clear(&mut self) {
        self.cells.fill(Mark::Empty);
    }

    /// Reads a cell the caller already knows to be on the board.
    pub(crate) fn mark_at(&self, x: usize, y: usize) -> Mark {
        debug_assert!(x < self.size && y < self.size);
        self.cells[y * self.size + x]
    }

    fn index(&self, x: usize, y: usize) -> Result<usize, BoardError> {
        if x >= self.size || y >= self.size {
            return Err(BoardError::OutOfBounds {
                position: Position::new(x, y),
                size: self.size,
            });
        }
        Ok(y * self.size + x)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            cells: vec![Mark::Empty; DEFAULT_SIZE * DEFAULT_SIZE],
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for (x, mark) in row.iter().enumerate() {
                if x > 0 {
                    write!(f, "|")?;
                }
                write!(f, "{}", mark)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(4).unwrap();
        assert_eq!(board.size(), 4);
        assert_eq!(board.cell_count(), 16);
        assert!(board.cells().iter().all(|m| m.is_empty()));
    }

    #[test]
    fn test_size_limits() {
        assert_eq!(Board::new(0), Err(BoardError::InvalidDimension { size: 0 }));
        assert_eq!(Board::new(1), Err(BoardError::InvalidDimension { size: 1 }));
        assert_eq!(
            Board::new(MAX_SIZE + 1),
            Err(BoardError::InvalidDimension { size: MAX_SIZE + 1 })
        );
        assert!(Board::new(MIN_SIZE).is_ok());
    }

    #[test]
    fn test_get_set_row_major() {
        let mut board = Board::new(3).unwrap();
        board.set(2, 1, Mark::O).unwrap();
        assert_eq!(board.get(2, 1), Ok(Mark::O));
        assert_eq!(board.cells()[5], Mark::O);
        assert_eq!(board.get(1, 2), Ok(Mark::Empty));
    }

    #[test]
    fn test_out_of_bounds() {
        let mut board = Board::new(3).unwrap();
        let expected = BoardError::OutOfBounds {
            position: Position::new(3, 0),
            size: 3,
        };
        assert_eq!(board.get(3, 0), Err(expected));
        assert_eq!(board.set(3, 0, Mark::X), Err(expected));
        assert!(board.get(0, 3).is_err());
        assert_eq!(board.occupied_count(), 0);
    }

    #[test]
    fn test_set_overwrites_unconditionally() {
        let mut board = Board::new(2).unwrap();
        board.set(0, 0, Mark::X).unwrap();
        board.set(0, 0, Mark::O).unwrap();
        assert_eq!(board.get(0, 0), Ok(Mark::O));
    }

    #[test]
    fn test_empty_positions_and_full() {
        let mut board = Board::new(2).unwrap();
        board.set(1, 0, Mark::X).unwrap();
        assert_eq!(
            board.empty_positions(),
            vec![Position::new(0, 0), Position::new(0, 1), Position::new(1, 1)]
        );
        assert!(!board.is_full());

        for (x, y) in [(0, 0), (0, 1), (1, 1)] {
            board.set(x, y, Mark::O).unwrap();
        }
        assert!(board.is_full());
        assert!(board.empty_positions().is_empty());

        board.clear();
        assert_eq!(board.occupied_count(), 0);
    }

    #[test]
    fn test_display() {
        let mut board = Board::new(3).unwrap();
        board.set(0, 0, Mark::X).unwrap();
        board.set(1, 1, Mark::O).unwrap();
        assert_eq!(board.to_string(), "X|.|.\n.|O|.\n.|.|.");
    }

    #[test]
    fn test_mark_for_turn() {
        assert_eq!(Mark::for_turn(0), Mark::X);
        assert_eq!(Mark::for_turn(1), Mark::O);
        assert_eq!(Mark::for_turn(10), Mark::X);
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::Empty.opponent(), Mark::Empty);
    }
}
