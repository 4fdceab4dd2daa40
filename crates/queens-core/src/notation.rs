//! Text notation for solutions.
//!
//! Two shapes are supported:
//! - compact: the queen's column for each row, comma separated (`1,3,0,2`).
//!   An empty board is the empty string.
//! - grid: one string per row, `n` cells each, using a queen marker and an
//!   empty marker (`.Q..`).
//!
//! Both are row-major and 0-indexed.

use crate::Cell;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when reading a solution from text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("invalid column '{0}': expected a non-negative integer")]
    InvalidColumn(String),

    #[error("column {col} in row {row} is off a board of size {size}")]
    ColumnOutOfRange { row: usize, col: usize, size: usize },

    #[error("queens on {0} and {1} attack each other")]
    Conflict(Cell, Cell),

    #[error("row {row} has {found} cells, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("row {row} contains unknown marker '{marker}'")]
    InvalidMarker { row: usize, marker: char },

    #[error("row {row} has {found} queens, expected exactly 1")]
    QueenCount { row: usize, found: usize },
}

/// The two characters used to draw a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Markers {
    /// Marker for a cell holding a queen.
    #[serde(default = "default_queen")]
    pub queen: char,
    /// Marker for an empty cell.
    #[serde(default = "default_empty")]
    pub empty: char,
}

fn default_queen() -> char {
    'Q'
}

fn default_empty() -> char {
    '.'
}

impl Markers {
    pub const fn new(queen: char, empty: char) -> Self {
        Markers { queen, empty }
    }

    /// Returns true if the two markers can be told apart.
    pub const fn is_distinct(&self) -> bool {
        self.queen != self.empty
    }
}

impl Default for Markers {
    fn default() -> Self {
        Markers {
            queen: default_queen(),
            empty: default_empty(),
        }
    }
}

/// Parses compact notation into raw columns without validating the placement.
pub fn parse_columns(s: &str) -> Result<Vec<usize>, NotationError> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(Vec::new());
    }
    s.split(',')
        .map(|token| {
            let token = token.trim();
            token
                .parse::<usize>()
                .map_err(|_| NotationError::InvalidColumn(token.to_string()))
        })
        .collect()
}
