//! Coverage metric: the fraction of locations within reach of a station.

use velo_core::{NodeId, is_reachable};
use velo_graph::CityGraph;

/// Walking distance considered "covered", in kilometres.
pub const DEFAULT_COVERAGE_RADIUS_KM: f64 = 0.5;

/// Fraction of all graph locations within `max_distance_km` straight-line
/// distance of at least one member of `stations`.
///
/// An empty graph has zero coverage.  Station ids absent from the node table
/// cover nothing (their distance to everything is the unreachable sentinel).
pub fn coverage_fraction(graph: &CityGraph, stations: &[NodeId], max_distance_km: f64) -> f64 {
    if graph.is_empty() {
        return 0.0;
    }

    let covered = graph
        .node_ids()
        .iter()
        .filter(|id| {
            stations.iter().any(|s| {
                let d = graph.distance_km(id.as_str(), s.as_str());
                is_reachable(d) && d <= max_distance_km
            })
        })
        .count();

    covered as f64 / graph.node_count() as f64
}
