//! Annealing schedule configuration.

use crate::error::{TourError, TourResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for the annealing-style tour optimizer.
///
/// # Examples
///
/// ```
/// use river_tour::anneal::AnnealConfig;
///
/// let config = AnnealConfig::default()
///     .with_initial_swap_count(6)
///     .with_phases(20)
///     .with_trials_per_phase(500)
///     .with_initial_acceptance(0.4)
///     .with_acceptance_decay(0.6);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnnealConfig {
    /// Swaps applied per trial at phase 0. Decremented by one each
    /// phase, floored at 1.
    pub initial_swap_count: usize,

    /// Outer loop: number of schedule decay steps.
    pub phases: usize,

    /// Inner loop: perturb/evaluate/accept cycles per phase.
    pub trials_per_phase: usize,

    /// Probability of accepting a worse tour at phase 0.
    pub initial_acceptance: f64,

    /// Multiplicative shrink of the acceptance probability per phase.
    pub acceptance_decay: f64,

    /// Random seed for reproducibility. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            initial_swap_count: 4,
            phases: 15,
            trials_per_phase: 1000,
            initial_acceptance: 0.35,
            acceptance_decay: 0.5,
            seed: None,
        }
    }
}

impl AnnealConfig {
    pub fn with_initial_swap_count(mut self, n: usize) -> Self {
        self.initial_swap_count = n;
        self
    }

    pub fn with_phases(mut self, n: usize) -> Self {
        self.phases = n;
        self
    }

    pub fn with_trials_per_phase(mut self, n: usize) -> Self {
        self.trials_per_phase = n;
        self
    }

    pub fn with_initial_acceptance(mut self, p: f64) -> Self {
        self.initial_acceptance = p;
        self
    }

    pub fn with_acceptance_decay(mut self, decay: f64) -> Self {
        self.acceptance_decay = decay;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> TourResult<()> {
        if self.initial_swap_count < 1 {
            return Err(TourError::config("initial_swap_count must be at least 1"));
        }
        if self.phases < 1 {
            return Err(TourError::config("phases must be at least 1"));
        }
        if self.trials_per_phase < 1 {
            return Err(TourError::config("trials_per_phase must be at least 1"));
        }
        if !self.initial_acceptance.is_finite()
            || !(0.0..=1.0).contains(&self.initial_acceptance)
        {
            return Err(TourError::config(format!(
                "initial_acceptance must be in [0, 1], got {}",
                self.initial_acceptance
            )));
        }
        if !self.acceptance_decay.is_finite()
            || self.acceptance_decay <= 0.0
            || self.acceptance_decay >= 1.0
        {
            return Err(TourError::config(format!(
                "acceptance_decay must be in (0, 1), got {}",
                self.acceptance_decay
            )));
        }
        Ok(())
    }
}
