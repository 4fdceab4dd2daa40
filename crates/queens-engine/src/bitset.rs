//! Growable bitset used for occupancy tracking.
//!
//! Each bit marks one column or one diagonal as occupied. Words are allocated
//! once per search, so membership tests and updates are single word
//! operations regardless of board size.

use std::fmt;

const WORD_BITS: usize = u64::BITS as usize;

/// A fixed-capacity set of small integers backed by 64-bit words.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct BitSet {
    words: Vec<u64>,
}

impl BitSet {
    /// Creates an empty set able to hold `0..bits`.
    pub fn with_capacity(bits: usize) -> Self {
        BitSet {
            words: vec![0; bits.div_ceil(WORD_BITS)],
        }
    }

    /// Returns the number of representable members.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.words.len() * WORD_BITS
    }

    /// Returns true if no bit is set.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Returns the number of set bits.
    #[inline]
    pub fn count(&self) -> u32 {
        self.words.iter().map(|w| w.count_ones()).sum()
    }

    /// Returns true if `index` is set. Out-of-range indices are never set.
    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        self.words
            .get(index / WORD_BITS)
            .is_some_and(|w| w & mask(index) != 0)
    }

    /// Sets `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is beyond the capacity.
    #[inline]
    pub fn insert(&mut self, index: usize) {
        self.words[index / WORD_BITS] |= mask(index);
    }

    /// Clears `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is beyond the capacity.
    #[inline]
    pub fn remove(&mut self, index: usize) {
        self.words[index / WORD_BITS] &= !mask(index);
    }

    /// Clears every bit.
    pub fn clear(&mut self) {
        self.words.fill(0);
    }

    /// Iterates over set bits in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.words.iter().enumerate().flat_map(|(i, &word)| {
            let mut bits = word;
            std::iter::from_fn(move || {
                if bits == 0 {
                    None
                } else {
                    let bit = bits.trailing_zeros() as usize;
                    bits &= bits - 1; // Clear the LSB
                    Some(i * WORD_BITS + bit)
                }
            })
        })
    }
}

#[inline]
const fn mask(index: usize) -> u64 {
    1u64 << (index % WORD_BITS)
}

impl fmt::Debug for BitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set() {
        let s = BitSet::with_capacity(10);
        assert!(s.is_empty());
        assert_eq!(s.count(), 0);
        assert_eq!(s.capacity(), 64);
        assert!(!s.contains(3));
    }

    #[test]
    fn zero_capacity() {
        let s = BitSet::with_capacity(0);
        assert_eq!(s.capacity(), 0);
        assert!(!s.contains(0));
    }

    #[test]
    fn insert_and_remove() {
        let mut s = BitSet::with_capacity(130);
        s.insert(0);
        s.insert(63);
        s.insert(64);
        s.insert(129);
        assert!(s.contains(0));
        assert!(s.contains(63));
        assert!(s.contains(64));
        assert!(s.contains(129));
        assert!(!s.contains(1));
        assert_eq!(s.count(), 4);

        s.remove(63);
        assert!(!s.contains(63));
        assert!(s.contains(64));
        assert_eq!(s.count(), 3);
    }

    #[test]
    fn out_of_range_is_absent() {
        let s = BitSet::with_capacity(8);
        assert!(!s.contains(1000));
    }

    #[test]
    fn iter_ascending() {
        let mut s = BitSet::with_capacity(200);
        for i in [150, 3, 64, 65, 0] {
            s.insert(i);
        }
        assert_eq!(s.iter().collect::<Vec<_>>(), vec![0, 3, 64, 65, 150]);
        assert_eq!(format!("{:?}", s), "{0, 3, 64, 65, 150}");
    }

    #[test]
    fn clear_resets() {
        let mut s = BitSet::with_capacity(70);
        s.insert(5);
        s.insert(69);
        s.clear();
        assert!(s.is_empty());
    }
}
