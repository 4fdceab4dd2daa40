//! Core types for the N-Queens puzzle.
//!
//! This crate provides the value types shared by the solver and its callers:
//! - [`BoardSize`] and [`Cell`] for board coordinates
//! - [`Solution`] for a complete, conflict-free placement
//! - compact and grid notation via [`Markers`]
//! - [`Pager`] for stepping through a result list
//! - [`SolveError`] for invalid input and cancelled searches

mod board;
mod error;
pub mod notation;
mod pager;
mod solution;

pub use board::{BoardSize, Cell};
pub use error::SolveError;
pub use notation::{Markers, NotationError};
pub use pager::Pager;
pub use solution::{first_conflict, Solution};
