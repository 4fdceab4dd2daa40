//! Working state of a single search.

use crate::conflict::{ConflictTracker, DiagonalMasks};
use queens_core::{BoardSize, Cell, Solution};

/// The partial placement under construction plus its conflict tracker.
///
/// Rows are filled in order from 0. [`commit`](Self::commit) places a queen in
/// the next row and [`undo`](Self::undo) takes back the last one, so the
/// tracker always reflects exactly the committed rows.
#[derive(Debug, Clone)]
pub struct SearchState<T = DiagonalMasks> {
    size: BoardSize,
    placement: Vec<usize>,
    tracker: T,
}

impl<T: ConflictTracker> SearchState<T> {
    /// Creates an empty state for a board of the given size.
    pub fn new(size: BoardSize) -> Self {
        SearchState {
            size,
            placement: Vec::with_capacity(size.get()),
            tracker: T::with_size(size),
        }
    }

    #[inline]
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Returns the row the next queen goes in.
    #[inline]
    pub fn row(&self) -> usize {
        self.placement.len()
    }

    /// Returns true once every row holds a queen.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.placement.len() == self.size.get()
    }

    /// Returns the committed column for each filled row.
    #[inline]
    pub fn placement(&self) -> &[usize] {
        &self.placement
    }

    /// Returns true if `col` in the next row is not attacked.
    #[inline]
    pub fn is_safe(&self, col: usize) -> bool {
        self.tracker.is_safe(Cell::new(self.row(), col))
    }

    /// Places a queen at `col` in the next row.
    ///
    /// The caller checks [`is_safe`](Self::is_safe) first.
    #[inline]
    pub fn commit(&mut self, col: usize) {
        debug_assert!(!self.is_complete());
        debug_assert!(col < self.size.get());
        self.tracker.place(Cell::new(self.row(), col));
        self.placement.push(col);
    }

    /// Removes the queen from the last filled row, returning its column.
    #[inline]
    pub fn undo(&mut self) -> Option<usize> {
        let col = self.placement.pop()?;
        self.tracker.remove(Cell::new(self.placement.len(), col));
        Some(col)
    }

    /// Copies the complete placement out as a [`Solution`].
    pub fn to_solution(&self) -> Solution {
        debug_assert!(self.is_complete());
        Solution::from_columns_unchecked(self.placement.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commit_and_undo() {
        let mut state: SearchState = SearchState::new(BoardSize::new(4));
        assert_eq!(state.row(), 0);
        assert!(state.is_safe(1));
        state.commit(1);
        assert_eq!(state.row(), 1);
        assert!(!state.is_safe(0));
        assert!(!state.is_safe(1));
        assert!(!state.is_safe(2));
        assert!(state.is_safe(3));

        assert_eq!(state.undo(), Some(1));
        assert_eq!(state.row(), 0);
        assert!(state.is_safe(1));
        assert_eq!(state.undo(), None);
    }

    #[test]
    fn complete_state_yields_solution() {
        let mut state: SearchState = SearchState::new(BoardSize::new(4));
        for col in [2, 0, 3, 1] {
            assert!(state.is_safe(col));
            state.commit(col);
        }
        assert!(state.is_complete());
        assert_eq!(state.to_solution().columns(), &[2, 0, 3, 1]);
        assert_eq!(state.placement(), &[2, 0, 3, 1]);
    }

    #[test]
    fn empty_board_is_already_complete() {
        let state: SearchState = SearchState::new(BoardSize::new(0));
        assert!(state.is_complete());
        assert!(state.to_solution().columns().is_empty());
    }
}
