//! Backtracking N-Queens solver.
//!
//! This crate provides:
//! - [`solve`] - every solution for a board size, in lexicographic order
//! - [`Solutions`] - the same sequence produced lazily, one at a time
//! - [`solve_cancellable`] - a search that stops when a flag is raised
//! - [`count()`] - solution totals without storing solutions
//! - [`ConflictTracker`] - trait for the attack test used by the search
//! - [`verify()`] - cross-check against a slow reference tracker
//!
//! # Architecture
//!
//! The search places one queen per row, top to bottom, trying columns left to
//! right. Occupied columns and diagonals are kept in bitsets so the attack
//! test is constant time. Every placement is undone on the way back up, so a
//! single [`SearchState`] serves the whole traversal.
//!
//! # Example
//!
//! ```
//! use queens_core::BoardSize;
//! use queens_engine::{count, solutions, solve};
//!
//! let all = solve(8).unwrap();
//! assert_eq!(all.len(), 92);
//!
//! // Stop after the first solution
//! let first = solutions(BoardSize::new(8)).next().unwrap();
//! assert_eq!(first.to_string(), "0,4,7,5,2,6,1,3");
//!
//! assert_eq!(count(BoardSize::new(10)), 724);
//! ```

mod bitset;
pub mod conflict;
mod count;
mod search;
mod state;
pub mod verify;

pub use bitset::BitSet;
pub use conflict::{ConflictTracker, DiagonalMasks, PairwiseScan};
pub use count::{count, count_cancellable, count_divide, count_divide_cancellable, count_with};
pub use search::{first_solution, solutions, solutions_with, solve, solve_cancellable, Solutions};
pub use state::SearchState;
pub use verify::{verify, verify_cancellable, Verification};

pub use queens_core::{BoardSize, Solution, SolveError};
