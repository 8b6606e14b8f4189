//! Greedy marginal-coverage station selection.

use velo_core::NodeId;
use velo_graph::CityGraph;

use crate::coverage::coverage_fraction;

/// Select up to `num_stations` station locations by repeatedly adding the
/// candidate that maximizes resulting coverage.
///
/// `existing` seeds the selection and counts toward the requested total.
/// Candidates are scanned in node insertion order and the first maximal
/// coverage wins ties, so the result is deterministic.  Returns fewer ids
/// when the graph runs out of candidates.
///
/// Each round re-scores every remaining candidate against every node —
/// O(stations × remaining × nodes).  Fine at city-district scale; incremental
/// coverage bookkeeping is the first thing to reach for on larger graphs.
pub fn greedy_placement(
    graph: &CityGraph,
    num_stations: usize,
    existing: &[NodeId],
    max_coverage_km: f64,
) -> Vec<NodeId> {
    let mut selected: Vec<NodeId> = existing.to_vec();
    let mut remaining: Vec<NodeId> = graph
        .node_ids()
        .iter()
        .filter(|id| !selected.contains(id))
        .cloned()
        .collect();

    while selected.len() < num_stations && !remaining.is_empty() {
        let mut best_index = 0;
        let mut best_coverage = -1.0;

        for (i, candidate) in remaining.iter().enumerate() {
            selected.push(candidate.clone());
            let coverage = coverage_fraction(graph, &selected, max_coverage_km);
            selected.pop();

            if coverage > best_coverage {
                best_coverage = coverage;
                best_index = i;
            }
        }

        let chosen = remaining.remove(best_index);
        selected.push(chosen);
    }

    selected
}
