//! Validated location arena.

use super::types::{Location, LocationKind, Route};
use crate::distance::River;
use crate::error::{TourError, TourResult};

/// The validated, immutable input to one optimization run.
///
/// Owns every stop and bridge waypoint as a single arena of
/// [`Location`]s (stops numbered first, waypoints after them) plus the
/// optional river obstacle. Routes reference this arena by index and
/// never duplicate coordinate data.
#[derive(Debug, Clone)]
pub struct TourInstance {
    locations: Vec<Location>,
    stop_count: usize,
    river: Option<River>,
}

impl TourInstance {
    /// Builds an instance from raw coordinate data.
    ///
    /// Fails fast on inputs the optimizer cannot work with: fewer than
    /// two stops, non-finite coordinates or river parameters, or a
    /// river with no waypoint to cross it.
    pub fn new(
        stops: Vec<(f64, f64)>,
        river: Option<River>,
        waypoints: Vec<(f64, f64)>,
    ) -> TourResult<Self> {
        if stops.len() < 2 {
            return Err(TourError::TooFewStops { count: stops.len() });
        }
        for (i, &(x, y)) in stops.iter().enumerate() {
            if !x.is_finite() || !y.is_finite() {
                return Err(TourError::NonFiniteCoordinate {
                    what: "stops",
                    index: i,
                });
            }
        }
        for (i, &(x, y)) in waypoints.iter().enumerate() {
            if !x.is_finite() || !y.is_finite() {
                return Err(TourError::NonFiniteCoordinate {
                    what: "waypoints",
                    index: i,
                });
            }
        }
        if let Some(river) = &river {
            if !river.slope.is_finite() || !river.intercept.is_finite() {
                return Err(TourError::NonFiniteCoordinate {
                    what: "river",
                    index: 0,
                });
            }
            if waypoints.is_empty() {
                return Err(TourError::RiverWithoutWaypoints);
            }
        }

        let stop_count = stops.len();
        let mut locations = Vec::with_capacity(stop_count + waypoints.len());
        for (i, (x, y)) in stops.into_iter().enumerate() {
            locations.push(Location {
                x,
                y,
                index: i,
                kind: LocationKind::Stop,
            });
        }
        for (i, (x, y)) in waypoints.into_iter().enumerate() {
            locations.push(Location {
                x,
                y,
                index: stop_count + i,
                kind: LocationKind::Waypoint,
            });
        }

        Ok(Self {
            locations,
            stop_count,
            river,
        })
    }

    /// Number of stops (tour length).
    pub fn stop_count(&self) -> usize {
        self.stop_count
    }

    /// The river obstacle, if one is configured.
    pub fn river(&self) -> Option<&River> {
        self.river.as_ref()
    }

    /// The location with the given stable index.
    pub fn location(&self, index: usize) -> &Location {
        &self.locations[index]
    }

    /// Stops in input order.
    pub fn stops(&self) -> &[Location] {
        &self.locations[..self.stop_count]
    }

    /// Bridge waypoints, empty when no river is configured.
    pub fn waypoints(&self) -> &[Location] {
        &self.locations[self.stop_count..]
    }

    /// The route visiting stops in input order.
    pub fn initial_route(&self) -> Route {
        Route::new((0..self.stop_count).collect())
    }
}
