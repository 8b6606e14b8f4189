//! Centroid-clustering station selection (Lloyd iterations).
//!
//! Cluster assignment and re-centering use planar distance on raw degree
//! coordinates — relative closeness is all that matters here, and it keeps
//! the arithmetic identical between assignment and the snap step.  Centroids
//! are always real graph locations: each non-empty cluster's mean is snapped
//! to the nearest **member** of that cluster.
//!
//! # Determinism
//!
//! The initial centroids are drawn with a [`PlacementRng`] over the node
//! insertion order, so a fixed seed reproduces the same station set on every
//! run.  The seed is part of the public contract (see
//! [`velo_core::DEFAULT_SEED`]).

use velo_core::{GeoPoint, NodeId, PlacementRng};
use velo_graph::{CityGraph, Node};

/// Select `num_stations` locations by clustering the map and keeping each
/// cluster's representative node.
///
/// Iterates until no representative changes or `max_iterations` is reached.
/// Empty clusters keep their previous centroid.  If the graph holds fewer
/// nodes than requested, every node is returned.
pub fn clustered_placement(
    graph: &CityGraph,
    num_stations: usize,
    max_iterations: usize,
    seed: u64,
) -> Vec<NodeId> {
    if num_stations == 0 {
        return Vec::new();
    }

    let nodes: Vec<&Node> = graph.nodes().collect();
    if nodes.len() < num_stations {
        return nodes.iter().map(|n| n.id.clone()).collect();
    }

    let mut rng = PlacementRng::new(seed);
    let mut centroids = rng.sample_indices(nodes.len(), num_stations);

    for _ in 0..max_iterations {
        // Assign every node to its nearest centroid (first wins ties).
        let mut clusters: Vec<Vec<usize>> = vec![Vec::new(); num_stations];
        for (ni, node) in nodes.iter().enumerate() {
            let mut closest = 0;
            let mut min_dist = f64::INFINITY;
            for (ci, &centroid) in centroids.iter().enumerate() {
                let d = node.point.euclidean_deg(nodes[centroid].point);
                if d < min_dist {
                    min_dist = d;
                    closest = ci;
                }
            }
            clusters[closest].push(ni);
        }

        // Re-center each cluster on its mean, snapped to the nearest member.
        let mut next = Vec::with_capacity(num_stations);
        let mut converged = true;
        for (ci, cluster) in clusters.iter().enumerate() {
            if cluster.is_empty() {
                next.push(centroids[ci]);
                continue;
            }

            let n = cluster.len() as f64;
            let mean = GeoPoint::new(
                cluster.iter().map(|&i| nodes[i].point.lat).sum::<f64>() / n,
                cluster.iter().map(|&i| nodes[i].point.lon).sum::<f64>() / n,
            );

            let mut snapped = cluster[0];
            let mut min_dist = f64::INFINITY;
            for &i in cluster {
                let d = nodes[i].point.euclidean_deg(mean);
                if d < min_dist {
                    min_dist = d;
                    snapped = i;
                }
            }

            if nodes[snapped].id != nodes[centroids[ci]].id {
                converged = false;
            }
            next.push(snapped);
        }

        centroids = next;
        if converged {
            break;
        }
    }

    centroids.iter().map(|&i| nodes[i].id.clone()).collect()
}
