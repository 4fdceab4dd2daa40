//! Reference conflict tracking by scanning every placed queen.
//!
//! Each check is O(n). It exists to cross-check [`DiagonalMasks`] on small
//! boards, not for real searches.
//!
//! [`DiagonalMasks`]: super::DiagonalMasks

use super::ConflictTracker;
use queens_core::{BoardSize, Cell};

/// Keeps the placed queens in a list and compares against all of them.
#[derive(Debug, Clone, Default)]
pub struct PairwiseScan {
    queens: Vec<Cell>,
}

impl PairwiseScan {
    /// Returns the queens placed so far, in placement order.
    pub fn queens(&self) -> &[Cell] {
        &self.queens
    }
}

impl ConflictTracker for PairwiseScan {
    fn with_size(size: BoardSize) -> Self {
        PairwiseScan {
            queens: Vec::with_capacity(size.get()),
        }
    }

    fn is_safe(&self, cell: Cell) -> bool {
        self.queens.iter().all(|queen| !queen.attacks(cell))
    }

    fn place(&mut self, cell: Cell) {
        self.queens.push(cell);
    }

    fn remove(&mut self, cell: Cell) {
        let removed = self.queens.pop();
        debug_assert_eq!(removed, Some(cell));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conflict::DiagonalMasks;

    #[test]
    fn agrees_with_masks_after_one_queen() {
        let size = BoardSize::new(6);
        for row in 0..6 {
            for col in 0..6 {
                let queen = Cell::new(row, col);
                let mut scan = PairwiseScan::with_size(size);
                let mut masks = DiagonalMasks::with_size(size);
                scan.place(queen);
                masks.place(queen);
                // The search never revisits a row, so only later rows are probed.
                for r in (row + 1)..6 {
                    for c in 0..6 {
                        let probe = Cell::new(r, c);
                        assert_eq!(
                            scan.is_safe(probe),
                            masks.is_safe(probe),
                            "{queen} vs {probe}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn remove_pops_last() {
        let mut scan = PairwiseScan::with_size(BoardSize::new(4));
        scan.place(Cell::new(0, 1));
        scan.place(Cell::new(1, 3));
        scan.remove(Cell::new(1, 3));
        assert_eq!(scan.queens(), &[Cell::new(0, 1)]);
    }
}
