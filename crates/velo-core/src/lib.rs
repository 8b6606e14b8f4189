//! `velo-core` — foundational types for the `veloplan` bike-share planner.
//!
//! This crate is a dependency of every other `velo-*` crate.  It intentionally
//! has no `velo-*` dependencies and minimal external ones (only `rand`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`ids`]     | `NodeId` — typed location identifier                  |
//! | [`geo`]     | `GeoPoint`, haversine distance, reachability sentinel |
//! | [`weights`] | `CostWeights` — the edge-cost blend                   |
//! | [`rng`]     | `PlacementRng` — seeded randomness for clustering     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod geo;
pub mod ids;
pub mod rng;
pub mod weights;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use geo::{GeoPoint, is_reachable};
pub use ids::NodeId;
pub use rng::{DEFAULT_SEED, PlacementRng};
pub use weights::CostWeights;
