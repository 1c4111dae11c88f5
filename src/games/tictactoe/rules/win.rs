//! Win detection for N×N tic-tac-toe.
//!
//! Lines are checked in a fixed order: rows, columns, the main diagonal,
//! then the anti-diagonal. The first complete line found is reported.

use super::super::position::Position;
use super::super::types::{Board, Mark};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::instrument;

/// A full line of N cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Line {
    /// Row `y`.
    Row(usize),
    /// Column `x`.
    Column(usize),
    /// Top-left to bottom-right: `(i, i)`.
    Diagonal,
    /// Top-right to bottom-left: `(N-1-i, i)`.
    AntiDiagonal,
}

impl Line {
    /// Returns the cells of this line on a board of side `size`.
    pub fn positions(self, size: usize) -> Vec<Position> {
        match self {
            Line::Row(y) => (0..size).map(|x| Position::new(x, y)).collect(),
            Line::Column(x) => (0..size).map(|y| Position::new(x, y)).collect(),
            Line::Diagonal => (0..size).map(|i| Position::new(i, i)).collect(),
            Line::AntiDiagonal => (0..size).map(|i| Position::new(size - 1 - i, i)).collect(),
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Line::Row(y) => write!(f, "row {}", y),
            Line::Column(x) => write!(f, "column {}", x),
            Line::Diagonal => write!(f, "diagonal"),
            Line::AntiDiagonal => write!(f, "anti-diagonal"),
        }
    }
}

/// A completed line and the mark that filled it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine {
    /// The winning mark.
    pub mark: Mark,
    /// Which line was completed.
    pub line: Line,
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` if a mark fills a whole row, column or diagonal,
/// `None` otherwise.
#[instrument(level = "debug", skip(board), fields(size = board.size()))]
pub fn check_winner(board: &Board) -> Option<Mark> {
    find_winning_line(board).map(|won| won.mark)
}

/// Finds the first completed line in priority order.
#[instrument(level = "debug", skip(board), fields(size = board.size()))]
pub fn find_winning_line(board: &Board) -> Option<WinningLine> {
    horizontal(board)
        .or_else(|| vertical(board))
        .or_else(|| diagonal(board))
        .or_else(|| anti_diagonal(board))
}

/// Scans rows top to bottom.
///
/// Stops at the first row whose leading cell is empty; rows below it are not
/// examined.
fn horizontal(board: &Board) -> Option<WinningLine> {
    for (y, row) in board.rows().enumerate() {
        let first = row[0];
        if first.is_empty() {
            break;
        }
        if row[1..].iter().all(|mark| *mark == first) {
            return Some(WinningLine {
                mark: first,
                line: Line::Row(y),
            });
        }
    }
    None
}

/// Scans columns left to right with the same early stop on `(x, 0)`.
fn vertical(board: &Board) -> Option<WinningLine> {
    let size = board.size();
    for x in 0..size {
        let first = board.mark_at(x, 0);
        if first.is_empty() {
            break;
        }
        if (1..size).all(|y| board.mark_at(x, y) == first) {
            return Some(WinningLine {
                mark: first,
                line: Line::Column(x),
            });
        }
    }
    None
}

fn diagonal(board: &Board) -> Option<WinningLine> {
    let size = board.size();
    let first = board.mark_at(0, 0);
    if first.is_empty() {
        return None;
    }
    (1..size)
        .all(|i| board.mark_at(i, i) == first)
        .then_some(WinningLine {
            mark: first,
            line: Line::Diagonal,
        })
}

fn anti_diagonal(board: &Board) -> Option<WinningLine> {
    let last = board.size() - 1;
    let first = board.mark_at(last, 0);
    if first.is_empty() {
        return None;
    }
    (1..=last)
        .all(|y| board.mark_at(last - y, y) == first)
        .then_some(WinningLine {
            mark: first,
            line: Line::AntiDiagonal,
        })
}
