//! River obstacle: crossing test and bridge selection.

use crate::tour::Location;
use tracing::warn;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tolerance for treating a tour edge as parallel to the river.
const PARALLEL_EPS: f64 = 1e-12;

/// A linear obstacle `y = slope * x + intercept`.
///
/// A tour edge crossing the river must detour through a bridge
/// waypoint; edges that stay on one side are unaffected.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct River {
    pub slope: f64,
    pub intercept: f64,
}

impl River {
    pub fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    /// Whether the straight segment from `a` to `b` crosses the river.
    ///
    /// The segment is treated as its own line and intersected with the
    /// river algebraically. A genuine crossing requires the
    /// intersection to fall strictly inside the segment on both axes;
    /// the double test rejects intersections of the infinite lines
    /// that lie beyond the segment's endpoints.
    pub fn crosses(&self, a: &Location, b: &Location) -> bool {
        // A vertical segment has no slope/intercept form of its own.
        if a.x == b.x {
            let y = self.slope * a.x + self.intercept;
            return strictly_between(y, a.y, b.y);
        }

        let mp = (b.y - a.y) / (b.x - a.x);
        let cp = a.y - mp * a.x;

        if (mp - self.slope).abs() < PARALLEL_EPS {
            if (cp - self.intercept).abs() < PARALLEL_EPS {
                warn!(
                    slope = self.slope,
                    intercept = self.intercept,
                    "tour edge lies on the river line, treating as non-crossing"
                );
            }
            return false;
        }

        let ix = (self.intercept - cp) / (mp - self.slope);
        let iy = mp * ix + cp;
        strictly_between(ix, a.x, b.x) && strictly_between(iy, a.y, b.y)
    }

    /// Picks the bridge minimizing the detour `a -> bridge -> b`.
    ///
    /// Instance validation rejects a river without waypoints, so
    /// callers always have at least one candidate.
    pub fn select_bridge<'a>(
        &self,
        a: &Location,
        b: &Location,
        bridges: &'a [Location],
    ) -> &'a Location {
        debug_assert!(!bridges.is_empty(), "bridge selection needs a candidate");

        let mut best = &bridges[0];
        let mut best_detour = a.distance_to(best) + best.distance_to(b);
        for bridge in &bridges[1..] {
            let detour = a.distance_to(bridge) + bridge.distance_to(b);
            if detour < best_detour {
                best = bridge;
                best_detour = detour;
            }
        }
        best
    }
}

/// Exclusive-bounds interval test; `lo`/`hi` may arrive in either order.
fn strictly_between(v: f64, lo: f64, hi: f64) -> bool {
    let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
    lo < v && v < hi
}
