//! Shortest-path search over the city graph.
//!
//! Two algorithms share one relaxation loop: label-setting (Dijkstra) orders
//! the queue by accumulated weighted cost alone, the heuristic-guided variant
//! (A*) adds a straight-line estimate toward the target.  Both settle the
//! target before returning, skip stale queue entries, and count settle events
//! in `nodes_explored`.
//!
//! # Cost model
//!
//! Every traversed edge contributes `Edge::weighted_cost(weights)`; cumulative
//! distance and traffic-inflated time are tracked alongside so the result can
//! report physical totals independent of the weight blend.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, VecDeque};

use rustc_hash::{FxHashMap, FxHashSet};

use velo_core::{CostWeights, NodeId, is_reachable};
use velo_graph::CityGraph;

use crate::error::{RouteError, RouteResult};
use crate::result::PathResult;

/// Assumed rider speed for the straight-line time estimate, km/h.
const AVG_BIKE_SPEED_KMH: f64 = 15.0;

// ── Queue entry ───────────────────────────────────────────────────────────────

/// Min-heap entry.  `priority` is the queue key (tentative cost, plus the
/// heuristic for A*); `cost` is the tentative cost alone, kept for the
/// stale-entry check.  Ties break on the node id so runs are deterministic.
#[derive(Clone, Debug)]
struct QueueEntry {
    priority: f64,
    cost: f64,
    node: NodeId,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .total_cmp(&other.priority)
            .then_with(|| self.node.cmp(&other.node))
    }
}

// ── RoutePlanner ──────────────────────────────────────────────────────────────

/// Shortest-path queries over a borrowed [`CityGraph`].
///
/// The planner never mutates the graph; construct once and query repeatedly.
pub struct RoutePlanner<'g> {
    graph: &'g CityGraph,
}

impl<'g> RoutePlanner<'g> {
    pub fn new(graph: &'g CityGraph) -> Self {
        Self { graph }
    }

    /// Label-setting shortest path (Dijkstra) under the given weight blend.
    ///
    /// Returns [`RouteError::NoPath`] when the target is never settled.
    pub fn dijkstra(&self, start: &str, end: &str, weights: &CostWeights) -> RouteResult<PathResult> {
        self.search(start, end, weights, |_| 0.0)
    }

    /// Heuristic-guided shortest path (A*) under the given weight blend.
    ///
    /// The queue key adds a straight-line estimate to the target: haversine
    /// distance blended with a 15 km/h time conversion through the distance
    /// and time weights.  Traffic cannot be estimated from geometry, so the
    /// traffic weight plays no part in the estimate; an unreachable
    /// straight-line distance (unknown id) degrades to a zero estimate.
    /// Expected to settle no more nodes than [`dijkstra`](Self::dijkstra) for
    /// the same query.
    pub fn a_star(&self, start: &str, end: &str, weights: &CostWeights) -> RouteResult<PathResult> {
        self.search(start, end, weights, |id| {
            let d = self.graph.distance_km(id, end);
            if !is_reachable(d) {
                return 0.0;
            }
            let est_time_min = d / AVG_BIKE_SPEED_KMH * 60.0;
            weights.distance * d + weights.time * est_time_min
        })
    }

    /// One relaxation loop for both algorithms; `heuristic` returns the
    /// estimate added to the queue key (identically zero for Dijkstra).
    fn search(
        &self,
        start: &str,
        end: &str,
        weights: &CostWeights,
        heuristic: impl Fn(&str) -> f64,
    ) -> RouteResult<PathResult> {
        // A query to the same location is a valid one-node path; the
        // relaxation loop is never entered, so nothing counts as explored.
        if start == end {
            return Ok(PathResult {
                path: vec![NodeId::from(start)],
                total_distance_km: 0.0,
                total_time_min: 0.0,
                total_cost: 0.0,
                nodes_explored: 0,
            });
        }

        let start_id = NodeId::from(start);

        // Best known tentative cost, cumulative distance/time, predecessor.
        let mut best: FxHashMap<NodeId, f64> = FxHashMap::default();
        let mut dist: FxHashMap<NodeId, f64> = FxHashMap::default();
        let mut time: FxHashMap<NodeId, f64> = FxHashMap::default();
        let mut prev: FxHashMap<NodeId, NodeId> = FxHashMap::default();

        best.insert(start_id.clone(), 0.0);
        dist.insert(start_id.clone(), 0.0);
        time.insert(start_id.clone(), 0.0);

        let mut heap: BinaryHeap<Reverse<QueueEntry>> = BinaryHeap::new();
        heap.push(Reverse(QueueEntry {
            priority: heuristic(start),
            cost: 0.0,
            node: start_id.clone(),
        }));

        let mut explored = 0usize;

        while let Some(Reverse(entry)) = heap.pop() {
            let node = entry.node;

            // Skip stale heap entries — a cheaper path was settled since push.
            if entry.cost > best[&node] {
                continue;
            }

            explored += 1;

            if node == end {
                let path = reconstruct(&prev, start, &node);
                return Ok(PathResult {
                    path,
                    total_distance_km: dist[&node],
                    total_time_min: time[&node],
                    total_cost: best[&node],
                    nodes_explored: explored,
                });
            }

            let node_cost = best[&node];
            let node_dist = dist[&node];
            let node_time = time[&node];

            for edge in self.graph.neighbors(node.as_str()) {
                let tentative = node_cost + edge.weighted_cost(weights);
                if best.get(&edge.to).is_none_or(|&b| tentative < b) {
                    best.insert(edge.to.clone(), tentative);
                    dist.insert(edge.to.clone(), node_dist + edge.distance_km);
                    time.insert(edge.to.clone(), node_time + edge.time_min * edge.traffic);
                    prev.insert(edge.to.clone(), node.clone());
                    heap.push(Reverse(QueueEntry {
                        priority: tentative + heuristic(edge.to.as_str()),
                        cost: tentative,
                        node: edge.to.clone(),
                    }));
                }
            }
        }

        Err(RouteError::NoPath {
            from: start_id,
            to: NodeId::from(end),
        })
    }

    // ── Network analysis ──────────────────────────────────────────────────

    /// Breadth-first reachability sweep bounded by `max_depth` hops.
    ///
    /// Returns one discovered path per reachable location — shortest by hop
    /// count, not by weight.  Nodes are expanded in discovery order and never
    /// revisited once enqueued; the start maps to its own one-node path.
    pub fn reachable_within(&self, start: &str, max_depth: usize) -> FxHashMap<NodeId, Vec<NodeId>> {
        let start_id = NodeId::from(start);

        let mut visited: FxHashSet<NodeId> = FxHashSet::default();
        visited.insert(start_id.clone());

        let mut paths: FxHashMap<NodeId, Vec<NodeId>> = FxHashMap::default();
        paths.insert(start_id.clone(), vec![start_id.clone()]);

        let mut queue: VecDeque<(NodeId, usize)> = VecDeque::new();
        queue.push_back((start_id, 0));

        while let Some((node, depth)) = queue.pop_front() {
            if depth >= max_depth {
                continue;
            }
            for edge in self.graph.neighbors(node.as_str()) {
                if visited.insert(edge.to.clone()) {
                    let mut path = paths[&node].clone();
                    path.push(edge.to.clone());
                    paths.insert(edge.to.clone(), path);
                    queue.push_back((edge.to.clone(), depth + 1));
                }
            }
        }

        paths
    }

    /// Up to `k` shortest routes between two locations.
    ///
    /// **Partial implementation:** only the single best route is enumerated
    /// today — the result holds at most one entry however large `k` is
    /// (loopless alternative-path enumeration is not performed).  `k = 0`
    /// returns an empty list, as does a disconnected pair.
    pub fn k_shortest_paths(
        &self,
        start: &str,
        end: &str,
        k: usize,
        weights: &CostWeights,
    ) -> Vec<PathResult> {
        let mut results = match self.dijkstra(start, end, weights) {
            Ok(best) => vec![best],
            Err(RouteError::NoPath { .. }) => Vec::new(),
        };
        results.truncate(k);
        results
    }
}

// ── Path reconstruction ───────────────────────────────────────────────────────

/// Walk predecessor links from `end` back to the root and reverse.
///
/// If the chain does not terminate at `start` the predecessor map is
/// corrupted; the contract is to return an empty path rather than a wrong one.
fn reconstruct(prev: &FxHashMap<NodeId, NodeId>, start: &str, end: &NodeId) -> Vec<NodeId> {
    let mut path = Vec::new();
    let mut current = end.clone();
    loop {
        let parent = prev.get(&current).cloned();
        path.push(current);
        match parent {
            Some(p) => current = p,
            None => break,
        }
    }
    path.reverse();
    if path.first().is_some_and(|first| *first == start) {
        path
    } else {
        Vec::new()
    }
}
