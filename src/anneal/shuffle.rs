//! Randomized pairwise swaps with exact undo.

use rand::Rng;

use crate::error::{TourError, TourResult};
use crate::tour::Route;

/// Applies randomized pairwise swaps to a working route and records
/// them so the most recent batch can be undone exactly.
///
/// A swap is its own inverse, so replaying recorded swaps most recent
/// first restores the pre-perturbation ordering position for position.
/// Forward-order replay does not: overlapping swaps do not commute.
#[derive(Debug, Default)]
pub struct Shuffler {
    history: Vec<(usize, usize)>,
}

impl Shuffler {
    pub fn new() -> Self {
        Self {
            history: Vec::new(),
        }
    }

    /// Number of swaps recorded since the last clear.
    pub fn recorded(&self) -> usize {
        self.history.len()
    }

    /// Applies `n` random swaps of two distinct positions, in sequence.
    ///
    /// Each swap draws both positions uniformly, resampling the second
    /// until it differs from the first. Later swaps see the route
    /// state left by earlier ones within the same call.
    pub fn perturb<R: Rng>(&mut self, route: &mut Route, n: usize, rng: &mut R) {
        let len = route.len();
        debug_assert!(len >= 2, "perturbation needs at least two positions");

        for _ in 0..n {
            let left = rng.random_range(0..len);
            let mut right = rng.random_range(0..len);
            while right == left {
                right = rng.random_range(0..len);
            }
            route.swap(left, right);
            self.history.push((left, right));
        }
    }

    /// Undoes the `n` most recent swaps, most recent first.
    ///
    /// Errors when `n` exceeds the recorded history; an underflowing
    /// revert is a defect in the calling sequence and is never clamped
    /// to a no-op.
    pub fn revert(&mut self, route: &mut Route, n: usize) -> TourResult<()> {
        if n > self.history.len() {
            return Err(TourError::HistoryUnderflow {
                requested: n,
                recorded: self.history.len(),
            });
        }

        let start = self.history.len() - n;
        for &(left, right) in self.history[start..].iter().rev() {
            route.swap(left, right);
        }
        self.history.truncate(start);
        Ok(())
    }

    /// Discards all recorded swaps without touching the route.
    ///
    /// Called once a trial is resolved; an accepted change must not be
    /// undone by a later rejection.
    pub fn clear(&mut self) {
        self.history.clear();
    }
}
