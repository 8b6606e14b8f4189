//! The edge-cost blend.
//!
//! A traversal cost is a linear combination of an edge's distance, nominal
//! time, and traffic-inflated time:
//!
//! ```text
//! cost = distance·d + time·t + traffic·(t·factor)
//! ```
//!
//! The weights are plain non-negative floats and are **not** required to sum
//! to 1.  Algorithms never assume defaults — callers pass an explicit
//! `CostWeights`, with [`CostWeights::default`] supplying the standard blend
//! at the call boundary.

/// Weights applied to the distance, time, and traffic terms of an edge cost.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostWeights {
    /// Weight of the distance term (per km).
    pub distance: f64,
    /// Weight of the nominal time term (per minute).
    pub time: f64,
    /// Weight of the traffic-inflated time term (per minute).
    pub traffic: f64,
}

impl CostWeights {
    /// The standard blend: 0.4 distance, 0.4 time, 0.2 traffic.
    pub const STANDARD: CostWeights = CostWeights {
        distance: 0.4,
        time: 0.4,
        traffic: 0.2,
    };

    pub fn new(distance: f64, time: f64, traffic: f64) -> Self {
        Self { distance, time, traffic }
    }
}

impl Default for CostWeights {
    fn default() -> Self {
        Self::STANDARD
    }
}
