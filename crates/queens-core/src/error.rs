//! Errors reported by the solver.

use thiserror::Error;

/// Errors that can occur when enumerating solutions.
///
/// An empty result is not an error: boards such as 2×2 and 3×3 simply have
/// no solutions.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SolveError {
    #[error("invalid board size: {0} (must be non-negative)")]
    InvalidArgument(i64),

    #[error("search cancelled before completion")]
    Cancelled,
}
