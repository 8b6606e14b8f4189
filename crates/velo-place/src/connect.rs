//! Connectivity-repair suggestions for a selected station set.

use rustc_hash::FxHashSet;

use velo_core::NodeId;
use velo_graph::CityGraph;

/// Propose new edges so every station has at least `min_connections` direct
/// links to other selected stations.
///
/// For each deficient station the nearest not-yet-connected other stations
/// are suggested in ascending (straight-line distance, id) order until the
/// minimum is met or candidates run out.  Returns `(source, destination)`
/// pairs only — the graph is never mutated.
pub fn suggest_connections(
    graph: &CityGraph,
    stations: &[NodeId],
    min_connections: usize,
) -> Vec<(NodeId, NodeId)> {
    let station_set: FxHashSet<&NodeId> = stations.iter().collect();
    let mut suggestions = Vec::new();

    for station in stations {
        let neighbors = graph.neighbors(station.as_str());
        let current = neighbors
            .iter()
            .filter(|e| station_set.contains(&e.to))
            .count();
        if current >= min_connections {
            continue;
        }

        let mut candidates: Vec<(f64, &NodeId)> = Vec::new();
        for other in stations {
            if other == station {
                continue;
            }
            let already_connected = neighbors.iter().any(|e| e.to == *other);
            if !already_connected {
                candidates.push((graph.distance_km(station.as_str(), other.as_str()), other));
            }
        }
        candidates.sort_by(|a, b| a.0.total_cmp(&b.0).then_with(|| a.1.cmp(b.1)));

        for (_, other) in candidates.into_iter().take(min_connections - current) {
            suggestions.push((station.clone(), other.clone()));
        }
    }

    suggestions
}
