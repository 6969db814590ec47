//! Annealing-style closed-tour optimization over 2D points.
//!
//! Computes a short closed tour (traveling-salesman style) over a set
//! of stops, optionally subject to a linear "river" obstacle that a
//! tour edge may only cross at fixed bridge waypoints.
//!
//! - **Tour model** ([`tour`]): immutable location arena plus the
//!   route ordering the optimizer mutates.
//! - **Distance model** ([`distance`]): river crossing test, bridge
//!   selection, and the obstacle-aware pairwise distance table built
//!   once per run.
//! - **Annealing engine** ([`anneal`]): batched random pairwise swaps
//!   with exact undo, driven by a phase/trial schedule with decaying
//!   acceptance probability and decaying perturbation strength.
//!
//! Point counts are assumed small: the distance table is O(n²) and
//! every trial rescores the full cycle.
//!
//! # Example
//!
//! ```
//! use river_tour::anneal::{AnnealConfig, AnnealRunner};
//! use river_tour::tour::TourInstance;
//!
//! let instance = TourInstance::new(
//!     vec![(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)],
//!     None,
//!     vec![],
//! )?;
//! let config = AnnealConfig::default()
//!     .with_phases(10)
//!     .with_trials_per_phase(200)
//!     .with_seed(42);
//!
//! let result = AnnealRunner::run(&instance, &config)?;
//! assert!(result.best_cost <= 4.0 + 1e-9);
//! # Ok::<(), river_tour::error::TourError>(())
//! ```

pub mod anneal;
pub mod distance;
pub mod error;
pub mod tour;
