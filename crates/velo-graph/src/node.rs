//! Location and weighted-arc value types.

use velo_core::{CostWeights, GeoPoint, NodeId};

/// A city location: an intersection, point of interest, or bike station.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub id: NodeId,
    pub name: String,
    pub point: GeoPoint,
    /// Whether a bike station currently operates here.
    pub is_station: bool,
    /// Station capacity in bikes; meaningful only when `is_station`.
    pub capacity: u32,
    /// Estimated rider demand, set by the demand-assignment pass.
    /// Comparable only relative to other nodes, not an absolute rate.
    pub demand: f64,
}

impl Node {
    /// Create a plain (non-station) location with zero demand.
    pub fn new(id: impl Into<NodeId>, name: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            point: GeoPoint::new(lat, lon),
            is_station: false,
            capacity: 0,
            demand: 0.0,
        }
    }
}

/// A directed weighted arc to another location.
///
/// A "bidirectional" connection is two independent `Edge` records; nothing
/// ties their weights together after insertion.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub to: NodeId,
    /// Physical length in kilometres.
    pub distance_km: f64,
    /// Free-flow travel time in minutes.
    pub time_min: f64,
    /// Multiplicative congestion factor; 1.0 = free flow.
    pub traffic: f64,
}

impl Edge {
    /// The blended traversal cost under `weights`.
    ///
    /// The traffic factor scales only the time term — distance is congestion-
    /// independent.
    #[inline]
    pub fn weighted_cost(&self, weights: &CostWeights) -> f64 {
        weights.distance * self.distance_km
            + weights.time * self.time_min
            + weights.traffic * (self.time_min * self.traffic)
    }
}
