//! `velo-output` — tabular export of a city-graph snapshot.
//!
//! One backend: a two-section CSV file (node attributes, then edge
//! attributes) consumed by external analysis tooling.  The file is
//! write-only — nothing in the planner reads it back.

pub mod csv;
pub mod error;


pub use csv::export_network;
pub use error::{OutputError, OutputResult};
