//! Solution counting without materializing solutions.
//!
//! Counting walks the same tree as [`solutions`](crate::solutions) but only
//! tallies complete placements, which makes it the quickest way to check the
//! search against published totals.

use crate::conflict::{ConflictTracker, DiagonalMasks};
use crate::SearchState;
use queens_core::{BoardSize, SolveError};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::debug;

/// Counts the solutions for `size`.
pub fn count(size: BoardSize) -> u64 {
    count_with::<DiagonalMasks>(size)
}

/// Counts the solutions for `size` using a specific tracker.
pub fn count_with<T: ConflictTracker>(size: BoardSize) -> u64 {
    let mut state = SearchState::<T>::new(size);
    count_from(&mut state, &AtomicBool::new(false))
}

/// Like [`count`], but gives up when `cancel` is set.
///
/// The flag is polled at every node of the search tree.
///
/// # Errors
///
/// Returns [`SolveError::Cancelled`] if the flag was set before the count
/// finished.
pub fn count_cancellable(size: BoardSize, cancel: &AtomicBool) -> Result<u64, SolveError> {
    let mut state = SearchState::<DiagonalMasks>::new(size);
    let total = count_from(&mut state, cancel);
    if cancel.load(Ordering::Relaxed) {
        debug!(n = size.get(), "count cancelled");
        return Err(SolveError::Cancelled);
    }
    Ok(total)
}

/// Count with divide - splits the total by the column of the first-row queen.
///
/// Useful for narrowing down which subtree disagrees with a reference. An
/// empty board has no first row and gives an empty list, even though its
/// total is 1.
pub fn count_divide(size: BoardSize) -> Vec<(usize, u64)> {
    divide_from(size, &AtomicBool::new(false))
}

/// Like [`count_divide`], but gives up when `cancel` is set.
///
/// # Errors
///
/// Returns [`SolveError::Cancelled`] if the flag was set before every subtree
/// was counted.
pub fn count_divide_cancellable(
    size: BoardSize,
    cancel: &AtomicBool,
) -> Result<Vec<(usize, u64)>, SolveError> {
    let results = divide_from(size, cancel);
    if cancel.load(Ordering::Relaxed) {
        debug!(n = size.get(), "count cancelled");
        return Err(SolveError::Cancelled);
    }
    Ok(results)
}

fn divide_from(size: BoardSize, cancel: &AtomicBool) -> Vec<(usize, u64)> {
    let mut state = SearchState::<DiagonalMasks>::new(size);
    (0..size.get())
        .map(|col| {
            state.commit(col);
            let nodes = count_from(&mut state, cancel);
            state.undo();
            (col, nodes)
        })
        .collect()
}

/// Returns a partial total once `cancel` is set; callers check the flag.
fn count_from<T: ConflictTracker>(state: &mut SearchState<T>, cancel: &AtomicBool) -> u64 {
    if cancel.load(Ordering::Relaxed) {
        return 0;
    }
    if state.is_complete() {
        return 1;
    }

    let mut total = 0u64;
    for col in 0..state.size().get() {
        if state.is_safe(col) {
            state.commit(col);
            total += count_from(state, cancel);
            state.undo();
        }
    }
    total
}
