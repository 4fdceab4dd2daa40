//! Cursor for stepping through a list of solutions.

/// A cursor over `len` items that wraps around at both ends.
///
/// Stepping past the last item returns to the first, and stepping back from
/// the first goes to the last. An empty list has no current item and
/// stepping does nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pager {
    len: usize,
    index: usize,
}

impl Pager {
    /// Creates a pager positioned on the first item.
    pub const fn new(len: usize) -> Self {
        Pager { len, index: 0 }
    }

    /// Creates a pager positioned on `index`, wrapped into range.
    pub const fn at(len: usize, index: usize) -> Self {
        let index = if len == 0 { 0 } else { index % len };
        Pager { len, index }
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current index, or `None` if there is nothing to show.
    #[inline]
    pub const fn current(&self) -> Option<usize> {
        if self.len == 0 {
            None
        } else {
            Some(self.index)
        }
    }

    /// Advances to the next item, wrapping to the first.
    pub fn forward(&mut self) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        self.index = (self.index + 1) % self.len;
        Some(self.index)
    }

    /// Steps back to the previous item, wrapping to the last.
    pub fn back(&mut self) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        self.index = (self.index + self.len - 1) % self.len;
        Some(self.index)
    }

    /// Returns a 1-based status line such as `3 / 92 solutions`.
    pub fn status(&self) -> String {
        match self.current() {
            Some(i) => format!("{} / {} solutions", i + 1, self.len),
            None => "No solutions found.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn next_wraps_to_first() {
        let mut p = Pager::new(3);
        assert_eq!(p.current(), Some(0));
        assert_eq!(p.forward(), Some(1));
        assert_eq!(p.forward(), Some(2));
        assert_eq!(p.forward(), Some(0));
    }

    #[test]
    fn prev_wraps_to_last() {
        let mut p = Pager::new(3);
        assert_eq!(p.back(), Some(2));
        assert_eq!(p.back(), Some(1));
    }

    #[test]
    fn single_item_stays_put() {
        let mut p = Pager::new(1);
        assert_eq!(p.forward(), Some(0));
        assert_eq!(p.back(), Some(0));
    }

    #[test]
    fn empty_pager_has_no_current() {
        let mut p = Pager::new(0);
        assert!(p.is_empty());
        assert_eq!(p.current(), None);
        assert_eq!(p.forward(), None);
        assert_eq!(p.back(), None);
        assert_eq!(p.status(), "No solutions found.");
    }

    #[test]
    fn at_wraps_start_index() {
        assert_eq!(Pager::at(4, 6).current(), Some(2));
        assert_eq!(Pager::at(0, 6).current(), None);
    }

    #[test]
    fn status_is_one_based() {
        let mut p = Pager::new(92);
        assert_eq!(p.status(), "1 / 92 solutions");
        p.back();
        assert_eq!(p.status(), "92 / 92 solutions");
    }

    proptest! {
        #[test]
        fn full_lap_returns_to_start(len in 1usize..200, start in 0usize..400) {
            let mut p = Pager::at(len, start);
            let origin = p.current();
            for _ in 0..len {
                p.forward();
            }
            prop_assert_eq!(p.current(), origin);
            for _ in 0..len {
                p.back();
            }
            prop_assert_eq!(p.current(), origin);
        }

        #[test]
        fn back_undoes_forward(len in 1usize..200, start in 0usize..400) {
            let mut p = Pager::at(len, start);
            let origin = p.current();
            p.forward();
            p.back();
            prop_assert_eq!(p.current(), origin);
        }
    }
}
