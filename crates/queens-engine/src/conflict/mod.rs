//! Conflict tracking for partial placements.
//!
//! This module provides the [`ConflictTracker`] trait which abstracts over how
//! the search decides whether a new queen is attacked by the ones already on
//! the board. The search itself is tracker-agnostic.

mod diagonal;
mod pairwise;

pub use diagonal::DiagonalMasks;
pub use pairwise::PairwiseScan;

use queens_core::{BoardSize, Cell};

/// Trait for recording placed queens and answering attack queries.
///
/// Queens are placed one row at a time and removed in reverse order, so an
/// implementation may assume `remove` is always called with the most recently
/// placed cell.
///
/// # Example
///
/// ```
/// use queens_core::{BoardSize, Cell};
/// use queens_engine::conflict::{ConflictTracker, DiagonalMasks};
///
/// let mut tracker = DiagonalMasks::with_size(BoardSize::new(4));
/// tracker.place(Cell::new(0, 1));
/// assert!(!tracker.is_safe(Cell::new(1, 2)));
/// assert!(tracker.is_safe(Cell::new(1, 3)));
/// ```
pub trait ConflictTracker {
    /// Creates an empty tracker for a board of the given size.
    fn with_size(size: BoardSize) -> Self
    where
        Self: Sized;

    /// Returns true if a queen on `cell` would not be attacked by any placed
    /// queen.
    fn is_safe(&self, cell: Cell) -> bool;

    /// Records a queen on `cell`.
    fn place(&mut self, cell: Cell);

    /// Forgets the queen on `cell`.
    fn remove(&mut self, cell: Cell);
}
