//! Constant-time conflict tracking with occupancy bitsets.

use super::ConflictTracker;
use crate::BitSet;
use queens_core::{BoardSize, Cell};

/// Tracks occupied columns and both diagonal families.
///
/// A diagonal running down-right has a constant `row - col`; one running
/// down-left has a constant `row + col`. The first is offset by `n - 1` so
/// both index into `0..2n - 1`.
#[derive(Debug, Clone)]
pub struct DiagonalMasks {
    size: usize,
    columns: BitSet,
    diagonals: BitSet,
    anti_diagonals: BitSet,
}

impl DiagonalMasks {
    #[inline]
    fn diagonal(&self, cell: Cell) -> usize {
        cell.row + (self.size - 1) - cell.col
    }

    #[inline]
    fn anti_diagonal(cell: Cell) -> usize {
        cell.row + cell.col
    }

    /// Returns the number of queens currently recorded.
    pub fn queens(&self) -> u32 {
        self.columns.count()
    }
}

impl ConflictTracker for DiagonalMasks {
    fn with_size(size: BoardSize) -> Self {
        DiagonalMasks {
            size: size.get(),
            columns: BitSet::with_capacity(size.get()),
            diagonals: BitSet::with_capacity(size.diagonals()),
            anti_diagonals: BitSet::with_capacity(size.diagonals()),
        }
    }

    #[inline]
    fn is_safe(&self, cell: Cell) -> bool {
        !self.columns.contains(cell.col)
            && !self.diagonals.contains(self.diagonal(cell))
            && !self.anti_diagonals.contains(Self::anti_diagonal(cell))
    }

    #[inline]
    fn place(&mut self, cell: Cell) {
        debug_assert!(self.is_safe(cell));
        let diagonal = self.diagonal(cell);
        self.columns.insert(cell.col);
        self.diagonals.insert(diagonal);
        self.anti_diagonals.insert(Self::anti_diagonal(cell));
    }

    #[inline]
    fn remove(&mut self, cell: Cell) {
        let diagonal = self.diagonal(cell);
        self.columns.remove(cell.col);
        self.diagonals.remove(diagonal);
        self.anti_diagonals.remove(Self::anti_diagonal(cell));
    }
}
