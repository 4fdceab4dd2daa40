//! Board size and cell coordinates.

use crate::SolveError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The side length of a square board, which is also the number of queens.
///
/// Any non-negative value is accepted. Enumeration cost grows roughly
/// factorially, so sizes beyond about 15 are impractical to enumerate in full;
/// rejecting such sizes is the caller's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoardSize(usize);

impl BoardSize {
    /// The standard 8×8 chess board.
    pub const CLASSIC: BoardSize = BoardSize(8);

    /// Creates a board size from an unsigned value.
    #[inline]
    pub const fn new(n: usize) -> Self {
        BoardSize(n)
    }

    /// Creates a board size from a signed value.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::InvalidArgument`] if `n` is negative.
    pub fn from_signed(n: i64) -> Result<Self, SolveError> {
        usize::try_from(n)
            .map(BoardSize)
            .map_err(|_| SolveError::InvalidArgument(n))
    }

    /// Returns the side length.
    #[inline]
    pub const fn get(self) -> usize {
        self.0
    }

    /// Returns the number of diagonals in one diagonal family.
    ///
    /// Both the `row - col` and the `row + col` families have `2n - 1`
    /// members; an empty board has none.
    #[inline]
    pub const fn diagonals(self) -> usize {
        self.0.saturating_mul(2).saturating_sub(1)
    }

    /// Returns true if `cell` lies on this board.
    #[inline]
    pub const fn contains(self, cell: Cell) -> bool {
        cell.row < self.0 && cell.col < self.0
    }
}

impl TryFrom<i64> for BoardSize {
    type Error = SolveError;

    fn try_from(n: i64) -> Result<Self, Self::Error> {
        BoardSize::from_signed(n)
    }
}

impl From<BoardSize> for usize {
    fn from(size: BoardSize) -> Self {
        size.0
    }
}

impl fmt::Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}×{}", self.0, self.0)
    }
}

/// A cell on the board, 0-indexed in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Cell { row, col }
    }

    /// Returns true if a queen on `self` attacks a queen on `other`.
    ///
    /// Queens attack along rows, columns and both diagonals. A cell does not
    /// attack itself.
    pub const fn attacks(self, other: Cell) -> bool {
        if self.row == other.row && self.col == other.col {
            return false;
        }
        self.row == other.row
            || self.col == other.col
            || self.row.abs_diff(other.row) == self.col.abs_diff(other.col)
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Cell { row, col }
    }
}

impl From<Cell> for (usize, usize) {
    fn from(cell: Cell) -> Self {
        (cell.row, cell.col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_size_from_signed() {
        assert_eq!(BoardSize::from_signed(8), Ok(BoardSize::CLASSIC));
        assert_eq!(BoardSize::from_signed(0), Ok(BoardSize::new(0)));
        assert_eq!(
            BoardSize::from_signed(-1),
            Err(SolveError::InvalidArgument(-1))
        );
        assert_eq!(
            BoardSize::try_from(i64::MIN),
            Err(SolveError::InvalidArgument(i64::MIN))
        );
    }

    #[test]
    fn board_size_diagonals() {
        assert_eq!(BoardSize::new(0).diagonals(), 0);
        assert_eq!(BoardSize::new(1).diagonals(), 1);
        assert_eq!(BoardSize::new(8).diagonals(), 15);
    }

    #[test]
    fn board_size_display() {
        assert_eq!(BoardSize::new(4).to_string(), "4×4");
    }

    #[test]
    fn board_size_contains() {
        let size = BoardSize::new(4);
        assert!(size.contains(Cell::new(3, 3)));
        assert!(!size.contains(Cell::new(4, 0)));
        assert!(!size.contains(Cell::new(0, 4)));
    }

    #[test]
    fn cell_attacks() {
        let c = Cell::new(2, 2);
        assert!(c.attacks(Cell::new(2, 0)));
        assert!(c.attacks(Cell::new(0, 2)));
        assert!(c.attacks(Cell::new(0, 0)));
        assert!(c.attacks(Cell::new(4, 0)));
        assert!(!c.attacks(Cell::new(0, 1)));
        assert!(!c.attacks(Cell::new(3, 0)));
        assert!(!c.attacks(c));
    }

    #[test]
    fn cell_display() {
        assert_eq!(Cell::new(1, 3).to_string(), "(1,3)");
    }
}
