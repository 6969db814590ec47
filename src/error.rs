//! Error types for river-tour.

use thiserror::Error;

/// Result type alias for fallible river-tour operations.
pub type TourResult<T> = Result<T, TourError>;

/// Unified error type for instance construction and optimization.
///
/// Everything here is surfaced before or during a run and has no
/// recovery path: construction either fails fast or the run proceeds
/// to completion. Stochastic rejection of a trial is a normal
/// algorithmic outcome, not an error.
#[derive(Debug, Error)]
pub enum TourError {
    /// A closed tour is undefined below two stops.
    #[error("tour needs at least 2 stops, got {count}")]
    TooFewStops {
        /// Number of stops supplied.
        count: usize,
    },

    /// NaN or infinite value in the input geometry.
    #[error("non-finite coordinate in {what} at index {index}")]
    NonFiniteCoordinate {
        /// Which input carried the bad value ("stops", "waypoints", "river").
        what: &'static str,
        /// Position of the offending entry within that input.
        index: usize,
    },

    /// A river is configured but there is no waypoint to cross it.
    #[error("river configured without any bridge waypoints")]
    RiverWithoutWaypoints,

    /// Schedule parameter out of range.
    #[error("invalid config: {message}")]
    InvalidConfig {
        /// Description of the rejected parameter.
        message: String,
    },

    /// Revert asked for more swaps than the history holds.
    #[error("history underflow: revert of {requested} swaps requested, {recorded} recorded")]
    HistoryUnderflow {
        /// Swaps the caller asked to undo.
        requested: usize,
        /// Swaps actually recorded since the last clear.
        recorded: usize,
    },
}

impl TourError {
    /// Creates an [`InvalidConfig`](TourError::InvalidConfig) error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}
