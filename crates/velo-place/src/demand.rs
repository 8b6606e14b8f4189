//! Demand-ranked selection and density-based demand assignment.

use velo_core::{GeoPoint, NodeId};
use velo_graph::{CityGraph, Node};

/// Seeds beyond this straight-line distance contribute no demand.
const DEMAND_RADIUS_KM: f64 = 2.0;

/// A high-density area feeding demand into nearby locations.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DensitySeed {
    pub lat: f64,
    pub lon: f64,
    /// Relative density weight; only ratios between seeds are meaningful.
    pub density: f64,
}

impl DensitySeed {
    pub fn new(lat: f64, lon: f64, density: f64) -> Self {
        Self { lat, lon, density }
    }
}

/// Select up to `num_stations` locations by descending demand.
///
/// Locations at or above `demand_threshold` are taken first; if too few
/// qualify, the next-highest-demand locations pad the set regardless of the
/// threshold.  The underlying sort is stable, so equal-demand locations keep
/// their insertion order.
pub fn demand_placement(
    graph: &CityGraph,
    num_stations: usize,
    demand_threshold: f64,
) -> Vec<NodeId> {
    let mut ranked: Vec<&Node> = graph.nodes().collect();
    ranked.sort_by(|a, b| b.demand.total_cmp(&a.demand));

    let mut selected: Vec<NodeId> = ranked
        .iter()
        .filter(|n| n.demand >= demand_threshold)
        .take(num_stations)
        .map(|n| n.id.clone())
        .collect();

    if selected.len() < num_stations {
        for node in &ranked {
            if selected.len() >= num_stations {
                break;
            }
            if !selected.contains(&node.id) {
                selected.push(node.id.clone());
            }
        }
    }

    selected
}

/// Overwrite every location's demand from its proximity to density seeds.
///
/// For each location the contribution of a seed within 2 km is
/// `density / (1 + d²)` — inverse-square decay, not a normalized
/// distribution — and the location keeps the maximum across seeds.
/// Locations beyond 2 km of every seed get demand 0.  This is the one
/// graph-mutating pass in the crate; the `&mut` receiver makes the side
/// effect explicit at the call site.
pub fn assign_demand_from_density(graph: &mut CityGraph, seeds: &[DensitySeed]) {
    let ids: Vec<NodeId> = graph.node_ids().to_vec();
    for id in ids {
        let Some(node) = graph.node(id.as_str()) else {
            continue;
        };
        let point = node.point;

        let mut demand = 0.0f64;
        for seed in seeds {
            let d = point.distance_km(GeoPoint::new(seed.lat, seed.lon));
            if d < DEMAND_RADIUS_KM {
                let local = seed.density / (1.0 + d * d);
                if local > demand {
                    demand = local;
                }
            }
        }

        if let Some(node) = graph.node_mut(id.as_str()) {
            node.demand = demand;
        }
    }
}
