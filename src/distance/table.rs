//! Obstacle-aware pairwise distance table.

use std::collections::HashMap;

use crate::tour::{Route, TourInstance};

/// Travel cost between every ordered pair of stops, built once per run.
///
/// Each entry holds the direct Euclidean distance, or the two-leg
/// distance through the selected bridge when the direct segment
/// crosses the river. Geometry is fixed for the run, so the table is
/// never recomputed.
#[derive(Debug, Clone)]
pub struct DistanceTable {
    costs: HashMap<(usize, usize), f64>,
}

impl DistanceTable {
    /// Computes the cost of every ordered pair of distinct stops.
    pub fn build(instance: &TourInstance) -> Self {
        let stops = instance.stops();
        let mut costs = HashMap::with_capacity(stops.len() * stops.len());

        for a in stops {
            for b in stops {
                if a.index == b.index {
                    continue;
                }
                let mut cost = a.distance_to(b);
                if let Some(river) = instance.river() {
                    if river.crosses(a, b) {
                        let bridge = river.select_bridge(a, b, instance.waypoints());
                        cost = a.distance_to(bridge) + bridge.distance_to(b);
                    }
                }
                costs.insert((a.index, b.index), cost);
            }
        }

        Self { costs }
    }

    /// Cost from stop `a` to stop `b`, keyed by stable location index.
    ///
    /// # Panics
    ///
    /// Panics if the pair was never entered into the table. A missing
    /// pair is a defect in the calling sequence, not a runtime
    /// condition to recover from.
    pub fn between(&self, a: usize, b: usize) -> f64 {
        match self.costs.get(&(a, b)) {
            Some(&cost) => cost,
            None => panic!("no distance entry for stop pair ({a}, {b})"),
        }
    }

    /// Total cost of a route as a closed cycle, including the edge
    /// from the last stop back to the first.
    pub fn route_cost(&self, route: &Route) -> f64 {
        let order = route.order();
        let mut total = 0.0;
        for (i, &from) in order.iter().enumerate() {
            let to = order[(i + 1) % order.len()];
            total += self.between(from, to);
        }
        total
    }

    /// Number of ordered pairs in the table.
    pub fn len(&self) -> usize {
        self.costs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }
}
