//! Complete queen placements.

use crate::notation::{Markers, NotationError};
use crate::{BoardSize, Cell};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A complete, conflict-free placement of `n` queens on an `n×n` board.
///
/// Stored as one column per row: `columns()[row] == col`. Rows are implied by
/// position, so two queens can never share a row.
///
/// Serializes as the bare column array, e.g. `[1,3,0,2]`. Deserialization
/// validates the placement.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct Solution {
    columns: Vec<usize>,
}

impl Solution {
    /// Creates a solution from a column-per-row assignment, validating it.
    ///
    /// # Errors
    ///
    /// Returns [`NotationError::ColumnOutOfRange`] if a column is not on the
    /// board, or [`NotationError::Conflict`] if two queens attack each other.
    pub fn new(columns: Vec<usize>) -> Result<Self, NotationError> {
        let n = columns.len();
        if let Some((row, &col)) = columns.iter().enumerate().find(|&(_, &c)| c >= n) {
            return Err(NotationError::ColumnOutOfRange { row, col, size: n });
        }
        if let Some((a, b)) = first_conflict(&columns) {
            return Err(NotationError::Conflict(a, b));
        }
        Ok(Solution { columns })
    }

    /// Creates a solution without checking it.
    ///
    /// The search produces placements that are conflict-free by construction,
    /// so re-checking every one would only repeat work. Callers must pass a
    /// valid placement; debug builds assert it.
    #[inline]
    pub fn from_columns_unchecked(columns: Vec<usize>) -> Self {
        debug_assert!(columns.iter().all(|&c| c < columns.len()));
        debug_assert!(first_conflict(&columns).is_none());
        Solution { columns }
    }

    /// Parses the grid shape produced by [`to_rows`](Self::to_rows).
    ///
    /// The number of rows determines the board size. Each row must have
    /// exactly that many cells, one of them a queen.
    pub fn from_rows<S: AsRef<str>>(rows: &[S], markers: &Markers) -> Result<Self, NotationError> {
        let n = rows.len();
        let mut columns = Vec::with_capacity(n);
        for (row, text) in rows.iter().enumerate() {
            let text = text.as_ref();
            let found = text.chars().count();
            if found != n {
                return Err(NotationError::RowLength {
                    row,
                    expected: n,
                    found,
                });
            }
            let mut queen = None;
            let mut queens = 0;
            for (col, c) in text.chars().enumerate() {
                if c == markers.queen {
                    queen = Some(col);
                    queens += 1;
                } else if c != markers.empty {
                    return Err(NotationError::InvalidMarker { row, marker: c });
                }
            }
            match queen {
                Some(col) if queens == 1 => columns.push(col),
                _ => return Err(NotationError::QueenCount { row, found: queens }),
            }
        }
        Solution::new(columns)
    }

    /// Returns the board size.
    #[inline]
    pub fn size(&self) -> BoardSize {
        BoardSize::new(self.columns.len())
    }

    /// Returns the queen's column for each row.
    #[inline]
    pub fn columns(&self) -> &[usize] {
        &self.columns
    }

    /// Returns the queen's column in `row`, if the row is on the board.
    #[inline]
    pub fn column(&self, row: usize) -> Option<usize> {
        self.columns.get(row).copied()
    }

    /// Returns true if a queen stands on `cell`.
    #[inline]
    pub fn has_queen(&self, cell: Cell) -> bool {
        self.column(cell.row) == Some(cell.col)
    }

    /// Iterates over the queens as `(row, col)` cells in row order.
    pub fn queens(&self) -> impl ExactSizeIterator<Item = Cell> + '_ {
        self.columns
            .iter()
            .enumerate()
            .map(|(row, &col)| Cell::new(row, col))
    }

    /// Renders the board as `n` strings of `n` markers, top row first.
    pub fn to_rows(&self, markers: &Markers) -> Vec<String> {
        let n = self.columns.len();
        self.columns
            .iter()
            .map(|&col| {
                (0..n)
                    .map(|c| if c == col { markers.queen } else { markers.empty })
                    .collect()
            })
            .collect()
    }

    /// Returns the compact notation, e.g. `1,3,0,2`.
    pub fn to_notation(&self) -> String {
        self.to_string()
    }
}

/// Finds the first pair of attacking queens in a column-per-row placement.
///
/// This is the direct all-pairs check: every queen is compared against every
/// earlier one, O(n²) overall.
pub fn first_conflict(columns: &[usize]) -> Option<(Cell, Cell)> {
    columns.iter().enumerate().find_map(|(row, &col)| {
        let cell = Cell::new(row, col);
        columns[..row]
            .iter()
            .enumerate()
            .map(|(r, &c)| Cell::new(r, c))
            .find(|earlier| earlier.attacks(cell))
            .map(|earlier| (earlier, cell))
    })
}

impl TryFrom<Vec<usize>> for Solution {
    type Error = NotationError;

    fn try_from(columns: Vec<usize>) -> Result<Self, Self::Error> {
        Solution::new(columns)
    }
}

impl From<Solution> for Vec<usize> {
    fn from(solution: Solution) -> Self {
        solution.columns
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, col) in self.columns.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", col)?;
        }
        Ok(())
    }
}

impl FromStr for Solution {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::notation::parse_columns(s).and_then(Solution::new)
    }
}
