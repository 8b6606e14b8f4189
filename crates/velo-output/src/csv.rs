//! CSV export backend.
//!
//! Layout (one file, two sections separated by a blank row):
//!
//! ```text
//! Node Data
//! ID,Name,Latitude,Longitude,Is Station,Capacity,Demand
//! ...
//!
//! Edge Data
//! Source,Destination,Distance (km),Time (min),Traffic Factor
//! ...
//! ```

use std::fs::File;
use std::path::Path;

use csv::{Writer, WriterBuilder};

use velo_graph::{CityGraph, Edge};

use crate::error::OutputResult;

/// Write the graph snapshot to `path`.
///
/// Node rows follow insertion order.  Edge rows follow node insertion order,
/// then any dangling adjacency sources in lexicographic order, so repeated
/// exports of the same graph are byte-identical.
pub fn export_network(graph: &CityGraph, path: &Path) -> OutputResult<()> {
    // Section headers have fewer fields than data rows.
    let mut w = WriterBuilder::new().flexible(true).from_path(path)?;

    w.write_record(["Node Data"])?;
    w.write_record(["ID", "Name", "Latitude", "Longitude", "Is Station", "Capacity", "Demand"])?;
    for node in graph.nodes() {
        w.write_record(&[
            node.id.to_string(),
            node.name.clone(),
            node.point.lat.to_string(),
            node.point.lon.to_string(),
            node.is_station.to_string(),
            node.capacity.to_string(),
            node.demand.to_string(),
        ])?;
    }

    w.write_record([""])?;

    w.write_record(["Edge Data"])?;
    w.write_record(["Source", "Destination", "Distance (km)", "Time (min)", "Traffic Factor"])?;
    for source in graph.node_ids() {
        write_edges(&mut w, source.as_str(), graph.neighbors(source.as_str()))?;
    }
    for source in graph.dangling_sources() {
        write_edges(&mut w, source.as_str(), graph.neighbors(source.as_str()))?;
    }

    w.flush()?;
    Ok(())
}

fn write_edges(w: &mut Writer<File>, source: &str, edges: &[Edge]) -> OutputResult<()> {
    for edge in edges {
        w.write_record(&[
            source.to_string(),
            edge.to.to_string(),
            edge.distance_km.to_string(),
            edge.time_min.to_string(),
            edge.traffic.to_string(),
        ])?;
    }
    Ok(())
}
