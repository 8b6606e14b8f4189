//! Routing error type.

use thiserror::Error;

use velo_core::NodeId;

/// Errors produced by route queries.
#[derive(Debug, Error)]
pub enum RouteError {
    /// The target was never settled — the endpoints are disconnected (or one
    /// of them does not exist).  Distinct from the valid one-node path
    /// returned when start and end coincide.
    #[error("no route from {from} to {to}")]
    NoPath { from: NodeId, to: NodeId },
}

pub type RouteResult<T> = Result<T, RouteError>;
