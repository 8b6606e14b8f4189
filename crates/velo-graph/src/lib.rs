//! `velo-graph` — the weighted city graph model.
//!
//! # Crate layout
//!
//! | Module    | Contents                                             |
//! |-----------|------------------------------------------------------|
//! | [`node`]  | `Node` (location) and `Edge` (weighted arc)          |
//! | [`graph`] | `CityGraph` — node table, adjacency, distance lookup |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                               |
//! |---------|------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.   |

pub mod graph;
pub mod node;

#[cfg(test)]
mod tests;

pub use graph::CityGraph;
pub use node::{Edge, Node};
