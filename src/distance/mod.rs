//! Obstacle-aware distance model.
//!
//! The [`River`] decides whether a straight tour edge crosses the
//! obstacle line and which bridge to detour through; the
//! [`DistanceTable`] precomputes the resulting travel cost for every
//! ordered pair of stops, once, before any optimization step.

mod river;
mod table;

pub use river::River;
pub use table::DistanceTable;
