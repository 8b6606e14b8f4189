//! Placement quality metrics.

use rustc_hash::FxHashSet;

use velo_core::NodeId;
use velo_graph::CityGraph;

use crate::coverage::{DEFAULT_COVERAGE_RADIUS_KM, coverage_fraction};

/// Quality summary of a selected station set.
///
/// The pairwise distance statistics are all zero when fewer than two stations
/// are selected — the degenerate sets have no pairs to measure.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacementMetrics {
    /// Fraction of locations within the walking radius of some station.
    pub coverage: f64,
    pub avg_station_distance_km: f64,
    pub min_station_distance_km: f64,
    pub max_station_distance_km: f64,
    /// Mean count of direct in-network edges per station (0 for an empty set).
    pub avg_connections_per_station: f64,
}

/// Evaluate a station set: coverage at the 0.5 km walking radius, pairwise
/// straight-line distance statistics, and average in-network degree.
pub fn evaluate_placement(graph: &CityGraph, stations: &[NodeId]) -> PlacementMetrics {
    let coverage = coverage_fraction(graph, stations, DEFAULT_COVERAGE_RADIUS_KM);

    let (mut avg, mut min, mut max) = (0.0, 0.0, 0.0);
    if stations.len() > 1 {
        let mut distances = Vec::new();
        for (i, a) in stations.iter().enumerate() {
            for b in &stations[i + 1..] {
                distances.push(graph.distance_km(a.as_str(), b.as_str()));
            }
        }
        avg = distances.iter().sum::<f64>() / distances.len() as f64;
        min = distances.iter().copied().fold(f64::INFINITY, f64::min);
        max = distances.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    }

    let station_set: FxHashSet<&NodeId> = stations.iter().collect();
    let total_connections: usize = stations
        .iter()
        .map(|s| {
            graph
                .neighbors(s.as_str())
                .iter()
                .filter(|e| station_set.contains(&e.to))
                .count()
        })
        .sum();
    let avg_connections_per_station = if stations.is_empty() {
        0.0
    } else {
        total_connections as f64 / stations.len() as f64
    };

    PlacementMetrics {
        coverage,
        avg_station_distance_km: avg,
        min_station_distance_km: min,
        max_station_distance_km: max,
        avg_connections_per_station,
    }
}
