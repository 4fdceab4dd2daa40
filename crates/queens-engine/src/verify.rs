//! Cross-checking the fast search against the reference search.

use crate::conflict::{DiagonalMasks, PairwiseScan};
use crate::search::Solutions;
use queens_core::{first_conflict, BoardSize, Solution, SolveError};
use std::fmt;
use std::sync::atomic::AtomicBool;

/// Result of comparing [`DiagonalMasks`] with [`PairwiseScan`] on one board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verification {
    pub size: BoardSize,
    /// Solutions produced by the fast tracker.
    pub solutions: usize,
    pub outcome: Outcome,
}

/// What the comparison found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Both searches produced the same valid sequence.
    Agree,
    /// The sequences differ at `index`. `None` means that side had already
    /// ended.
    Mismatch {
        index: usize,
        fast: Option<Solution>,
        reference: Option<Solution>,
    },
    /// The fast search produced a placement with attacking queens.
    Invalid { index: usize, solution: Solution },
}

impl Verification {
    pub fn is_ok(&self) -> bool {
        self.outcome == Outcome::Agree
    }
}

impl fmt::Display for Verification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            Outcome::Agree => write!(f, "{}: {} solutions, ok", self.size, self.solutions),
            Outcome::Mismatch {
                index,
                fast,
                reference,
            } => {
                let show = |s: &Option<Solution>| match s {
                    Some(s) => s.to_string(),
                    None => "<end>".to_string(),
                };
                write!(
                    f,
                    "{}: mismatch at #{}: fast {} vs reference {}",
                    self.size,
                    index,
                    show(fast),
                    show(reference)
                )
            }
            Outcome::Invalid { index, solution } => {
                write!(f, "{}: invalid solution #{}: {}", self.size, index, solution)
            }
        }
    }
}

/// Runs both trackers over `size` and compares their output in order.
///
/// The reference check is O(n) per candidate, so keep `size` small.
pub fn verify(size: BoardSize) -> Verification {
    compare(
        size,
        Solutions::<DiagonalMasks>::new(size),
        Solutions::<PairwiseScan>::new(size),
    )
}

/// Like [`verify`], but gives up when `cancel` is set.
///
/// # Errors
///
/// Returns [`SolveError::Cancelled`] if the flag was set before the
/// comparison finished.
pub fn verify_cancellable(
    size: BoardSize,
    cancel: &AtomicBool,
) -> Result<Verification, SolveError> {
    let mut fast = Solutions::<DiagonalMasks>::with_cancel(size, cancel);
    let mut reference = Solutions::<PairwiseScan>::with_cancel(size, cancel);
    let result = compare(size, &mut fast, &mut reference);
    if fast.is_cancelled() || reference.is_cancelled() {
        return Err(SolveError::Cancelled);
    }
    Ok(result)
}

fn compare<F, R>(size: BoardSize, mut fast: F, mut reference: R) -> Verification
where
    F: Iterator<Item = Solution>,
    R: Iterator<Item = Solution>,
{
    let mut index = 0;

    let outcome = loop {
        match (fast.next(), reference.next()) {
            (None, None) => break Outcome::Agree,
            (Some(a), Some(b)) if a == b => {
                if first_conflict(a.columns()).is_some() {
                    break Outcome::Invalid { index, solution: a };
                }
            }
            (a, b) => {
                break Outcome::Mismatch {
                    index,
                    fast: a,
                    reference: b,
                }
            }
        }
        index += 1;
    };

    Verification {
        size,
        solutions: index,
        outcome,
    }
}
