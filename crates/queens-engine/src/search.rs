//! Depth-first enumeration of solutions.
//!
//! The search fills rows top to bottom and tries columns left to right, so
//! solutions come out in lexicographic order of their column sequences.
//! [`Solutions`] walks the tree with an explicit cursor instead of recursion
//! and yields each solution as soon as it is found.

use crate::conflict::{ConflictTracker, DiagonalMasks};
use crate::SearchState;
use queens_core::{BoardSize, Solution, SolveError};
use std::iter::FusedIterator;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::debug;

/// Lazy iterator over every solution for one board size.
///
/// Each iterator owns its own search state, so independent iterators (on the
/// same or different threads) never interfere. Creating a new iterator
/// restarts the traversal from the beginning.
#[derive(Debug, Clone)]
pub struct Solutions<'a, T = DiagonalMasks> {
    state: SearchState<T>,
    /// Next column to try in the current row.
    cursor: usize,
    exhausted: bool,
    cancel: Option<&'a AtomicBool>,
    cancelled: bool,
}

impl<T: ConflictTracker> Solutions<'static, T> {
    /// Starts a fresh traversal.
    pub fn new(size: BoardSize) -> Self {
        Solutions {
            state: SearchState::new(size),
            cursor: 0,
            exhausted: false,
            cancel: None,
            cancelled: false,
        }
    }
}

impl<'a, T: ConflictTracker> Solutions<'a, T> {
    /// Starts a fresh traversal that stops as soon as `cancel` is set.
    ///
    /// The flag is polled before every column attempt. After a stop the
    /// iterator yields nothing more and [`is_cancelled`](Self::is_cancelled)
    /// returns true.
    pub fn with_cancel(size: BoardSize, cancel: &'a AtomicBool) -> Self {
        Solutions {
            state: SearchState::new(size),
            cursor: 0,
            exhausted: false,
            cancel: Some(cancel),
            cancelled: false,
        }
    }

    /// Returns the board size being searched.
    pub fn size(&self) -> BoardSize {
        self.state.size()
    }

    /// Returns true if the traversal was stopped by its cancel flag.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Takes back the last queen and moves the cursor past its column.
    ///
    /// Returns false once there is nothing left to take back.
    fn backtrack(&mut self) -> bool {
        match self.state.undo() {
            Some(col) => {
                self.cursor = col + 1;
                true
            }
            None => {
                self.exhausted = true;
                false
            }
        }
    }

    #[inline]
    fn cancel_requested(&self) -> bool {
        self.cancel.is_some_and(|flag| flag.load(Ordering::Relaxed))
    }
}

impl<T: ConflictTracker> Iterator for Solutions<'_, T> {
    type Item = Solution;

    fn next(&mut self) -> Option<Solution> {
        if self.exhausted {
            return None;
        }
        let n = self.state.size().get();
        loop {
            if self.cancel_requested() {
                self.cancelled = true;
                self.exhausted = true;
                return None;
            }

            if self.state.is_complete() {
                let solution = self.state.to_solution();
                self.backtrack();
                return Some(solution);
            }

            if self.cursor < n {
                let col = self.cursor;
                if self.state.is_safe(col) {
                    self.state.commit(col);
                    self.cursor = 0;
                } else {
                    self.cursor += 1;
                }
            } else if !self.backtrack() {
                return None;
            }
        }
    }
}

impl<T: ConflictTracker> FusedIterator for Solutions<'_, T> {}

/// Returns a lazy iterator over every solution for `size`.
pub fn solutions(size: BoardSize) -> Solutions<'static> {
    Solutions::new(size)
}

/// Returns a lazy iterator over every solution using a specific tracker.
pub fn solutions_with<T: ConflictTracker>(size: BoardSize) -> Solutions<'static, T> {
    Solutions::new(size)
}

/// Returns the first solution in search order, if any.
pub fn first_solution(size: BoardSize) -> Option<Solution> {
    solutions(size).next()
}

/// Enumerates every solution for an `n×n` board.
///
/// `n = 0` has exactly one solution, the empty placement. Boards with no
/// solutions (2×2, 3×3) give an empty list.
///
/// The number of solutions grows quickly with `n`; enumerating beyond about
/// 15 takes a long time and a lot of memory. No limit is applied here.
///
/// # Errors
///
/// Returns [`SolveError::InvalidArgument`] if `n` is negative.
pub fn solve(n: i64) -> Result<Vec<Solution>, SolveError> {
    let size = BoardSize::from_signed(n)?;
    let found: Vec<Solution> = solutions(size).collect();
    debug!(n = size.get(), solutions = found.len(), "search finished");
    Ok(found)
}

/// Like [`solve`], but gives up when `cancel` is set.
///
/// # Errors
///
/// Returns [`SolveError::InvalidArgument`] if `n` is negative, or
/// [`SolveError::Cancelled`] if the flag was set before the search finished.
/// Solutions found before cancellation are discarded.
pub fn solve_cancellable(n: i64, cancel: &AtomicBool) -> Result<Vec<Solution>, SolveError> {
    let size = BoardSize::from_signed(n)?;
    let mut iter: Solutions<'_> = Solutions::with_cancel(size, cancel);
    let found: Vec<Solution> = iter.by_ref().collect();
    if iter.is_cancelled() {
        debug!(n = size.get(), found = found.len(), "search cancelled");
        return Err(SolveError::Cancelled);
    }
    debug!(n = size.get(), solutions = found.len(), "search finished");
    Ok(found)
}
