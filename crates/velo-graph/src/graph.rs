//! City graph: node table, adjacency lists, and distance lookup.
//!
//! # Determinism
//!
//! Node iteration follows **insertion order** (a side list next to the hash
//! table).  Placement heuristics tie-break by candidate order and the
//! clustering seed draws over this sequence, so the order is part of observable
//! behavior, not a cosmetic detail.
//!
//! # Missing ids
//!
//! Nothing enforces that an edge destination exists in the node table.
//! Lookups against absent ids degrade gracefully: `node()` returns `None`,
//! `neighbors()` an empty slice, and `distance_km()` the infinite sentinel
//! (test with [`velo_core::is_reachable`]).

use rustc_hash::FxHashMap;

use velo_core::NodeId;

use crate::node::{Edge, Node};

/// Weighted directed graph of city locations.
#[derive(Clone, Debug, Default)]
pub struct CityGraph {
    nodes: FxHashMap<NodeId, Node>,
    adjacency: FxHashMap<NodeId, Vec<Edge>>,
    /// Node ids in first-insertion order; drives all deterministic iteration.
    order: Vec<NodeId>,
}

impl CityGraph {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Construction ──────────────────────────────────────────────────────

    /// Insert a node, replacing any existing node with the same id.
    ///
    /// Re-adding an id keeps its original position in the iteration order.
    pub fn add_node(&mut self, node: Node) {
        let id = node.id.clone();
        if self.nodes.insert(id.clone(), node).is_none() {
            self.order.push(id);
        }
    }

    /// Insert a directed edge from `source` to `dest`.
    ///
    /// Neither endpoint is required to exist in the node table.
    pub fn add_directed_edge(
        &mut self,
        source: impl Into<NodeId>,
        dest: impl Into<NodeId>,
        distance_km: f64,
        time_min: f64,
        traffic: f64,
    ) {
        self.adjacency.entry(source.into()).or_default().push(Edge {
            to: dest.into(),
            distance_km,
            time_min,
            traffic,
        });
    }

    /// Insert a connection in **both directions** with identical weights.
    ///
    /// The two directions are stored as independent records; later one-way
    /// inserts can make the costs diverge, which shows up as asymmetric
    /// routing between the endpoints.
    pub fn add_connection(
        &mut self,
        a: impl Into<NodeId> + Clone,
        b: impl Into<NodeId> + Clone,
        distance_km: f64,
        time_min: f64,
        traffic: f64,
    ) {
        self.add_directed_edge(a.clone(), b.clone(), distance_km, time_min, traffic);
        self.add_directed_edge(b, a, distance_km, time_min, traffic);
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn node_mut(&mut self, id: &str) -> Option<&mut Node> {
        self.nodes.get_mut(id)
    }

    /// Outgoing edges of `id`; empty for unknown ids.
    pub fn neighbors(&self, id: &str) -> &[Edge] {
        self.adjacency.get(id).map_or(&[], Vec::as_slice)
    }

    /// Great-circle distance between two locations in kilometres.
    ///
    /// Returns `f64::INFINITY` when either id is absent.
    pub fn distance_km(&self, a: &str, b: &str) -> f64 {
        match (self.nodes.get(a), self.nodes.get(b)) {
            (Some(a), Some(b)) => a.point.distance_km(b.point),
            _ => f64::INFINITY,
        }
    }

    // ── Iteration ─────────────────────────────────────────────────────────

    /// Node ids in insertion order.
    pub fn node_ids(&self) -> &[NodeId] {
        &self.order
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.order.iter().filter_map(|id| self.nodes.get(id))
    }

    /// All locations currently flagged as stations, in insertion order.
    pub fn stations(&self) -> Vec<&Node> {
        self.nodes().filter(|n| n.is_station).collect()
    }

    /// Adjacency sources that have no node record, in lexicographic order.
    ///
    /// The model tolerates these; the list exists so callers (export,
    /// integrity checks) can still enumerate every edge deterministically.
    pub fn dangling_sources(&self) -> Vec<&NodeId> {
        let mut orphans: Vec<&NodeId> = self
            .adjacency
            .keys()
            .filter(|id| !self.nodes.contains_key(id.as_str()))
            .collect();
        orphans.sort();
        orphans
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Total directed edge records; a bidirectional connection counts as 2.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
