//! Route query result.

use std::fmt;

use velo_core::NodeId;

/// The outcome of a single shortest-path query.
///
/// Immutable once constructed.  `path` runs from start to end inclusive; a
/// start == end query yields a one-node path with zero totals.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathResult {
    /// Visited location ids in travel order.
    pub path: Vec<NodeId>,
    /// Total length in kilometres.
    pub total_distance_km: f64,
    /// Total traffic-inflated travel time in minutes.
    pub total_time_min: f64,
    /// Accumulated weighted cost that drove the search.
    pub total_cost: f64,
    /// Settle events during the search — an effort metric, not a correctness
    /// value.
    pub nodes_explored: usize,
}

impl fmt::Display for PathResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.2} km, {:.2} min, cost {:.2} ({} stops, {} explored)",
            self.total_distance_km,
            self.total_time_min,
            self.total_cost,
            self.path.len(),
            self.nodes_explored,
        )
    }
}
