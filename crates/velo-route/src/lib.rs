//! `velo-route` — shortest-path search for bike-share route planning.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                 |
//! |-------------|----------------------------------------------------------|
//! | [`planner`] | `RoutePlanner` — Dijkstra, A*, BFS reachability, k-best  |
//! | [`result`]  | `PathResult` — path plus distance/time/cost totals       |
//! | [`error`]   | `RouteError`, `RouteResult<T>`                           |

pub mod error;
pub mod planner;
pub mod result;

#[cfg(test)]
mod tests;

pub use error::{RouteError, RouteResult};
pub use planner::RoutePlanner;
pub use result::PathResult;
