//! midtown — scripted end-to-end demo of the veloplan engine.
//!
//! Builds the 16-location sample district, compares the two route-planning
//! algorithms on representative trips, runs all three station-placement
//! methods with evaluation metrics, suggests connectivity repairs for the
//! chosen set, and exports the network snapshot as CSV.

mod city;

use std::path::Path;

use anyhow::Result;

use velo_core::{CostWeights, DEFAULT_SEED};
use velo_graph::CityGraph;
use velo_output::export_network;
use velo_place::{
    PlacementMetrics, assign_demand_from_density, clustered_placement, demand_placement,
    evaluate_placement, greedy_placement, suggest_connections,
};
use velo_route::{PathResult, RoutePlanner};

use city::{DENSITY_SEEDS, build_city};

// ── Parameters ────────────────────────────────────────────────────────────────

const NUM_STATIONS: usize = 6;
const STATION_CAPACITY: u32 = 20;
const COVERAGE_RADIUS_KM: f64 = 0.5;
const DEMAND_THRESHOLD: f64 = 0.3;
const MIN_CONNECTIONS: usize = 3;
const CLUSTER_ITERATIONS: usize = 100;
const EXPORT_PATH: &str = "midtown_network.csv";

fn main() -> Result<()> {
    let mut graph = build_city();
    println!("Midtown sample district: {} locations, {} connections", graph.node_count(), graph.edge_count());

    demo_routes(&graph);
    let stations = demo_placement(&mut graph);
    demo_connectivity(&graph, &stations);

    export_network(&graph, Path::new(EXPORT_PATH))?;
    println!("\nNetwork snapshot exported to {EXPORT_PATH}");
    Ok(())
}

// ── Route planning ────────────────────────────────────────────────────────────

fn demo_routes(graph: &CityGraph) {
    let planner = RoutePlanner::new(graph);
    let weights = CostWeights::default();

    let trips = [
        ("RES_01", "COM_01", "Residential North to Downtown"),
        ("EDU_01", "TRAN_01", "University to Train Station"),
        ("PARK_01", "MED_01", "Park to Hospital"),
    ];

    println!("\n=== Route planning ===");
    for (start, end, label) in trips {
        println!("\n{label} ({start} -> {end})");
        match planner.dijkstra(start, end, &weights) {
            Ok(route) => print_route(graph, "dijkstra", &route),
            Err(e) => println!("  dijkstra: {e}"),
        }
        match planner.a_star(start, end, &weights) {
            Ok(route) => print_route(graph, "a*      ", &route),
            Err(e) => println!("  a*: {e}"),
        }
    }
}

fn print_route(graph: &CityGraph, label: &str, route: &PathResult) {
    let stops: Vec<&str> = route
        .path
        .iter()
        .map(|id| graph.node(id.as_str()).map_or(id.as_str(), |n| n.name.as_str()))
        .collect();
    println!("  {label}: {route}");
    println!("            via {}", stops.join(" -> "));
}

// ── Station placement ─────────────────────────────────────────────────────────

fn demo_placement(graph: &mut CityGraph) -> Vec<velo_core::NodeId> {
    println!("\n=== Station placement ({NUM_STATIONS} stations) ===");

    assign_demand_from_density(graph, &DENSITY_SEEDS);
    println!("Demand assigned from {} density seeds", DENSITY_SEEDS.len());

    let greedy = greedy_placement(graph, NUM_STATIONS, &[], COVERAGE_RADIUS_KM);
    let clustered = clustered_placement(graph, NUM_STATIONS, CLUSTER_ITERATIONS, DEFAULT_SEED);
    let by_demand = demand_placement(graph, NUM_STATIONS, DEMAND_THRESHOLD);

    println!("\n{:<20} {:>9} {:>13} {:>12}", "method", "coverage", "avg dist km", "avg degree");
    for (name, selection) in [
        ("greedy coverage", &greedy),
        ("clustering", &clustered),
        ("demand ranking", &by_demand),
    ] {
        let m: PlacementMetrics = evaluate_placement(graph, selection);
        println!(
            "{:<20} {:>9.3} {:>13.3} {:>12.3}",
            name, m.coverage, m.avg_station_distance_km, m.avg_connections_per_station,
        );
    }

    // Keep the greedy selection: it optimizes the metric riders feel most.
    for id in &greedy {
        if let Some(node) = graph.node_mut(id.as_str()) {
            node.is_station = true;
            node.capacity = STATION_CAPACITY;
        }
    }
    println!("\nSelected stations (greedy):");
    for node in graph.stations() {
        println!("  {} — {} (capacity {})", node.id, node.name, node.capacity);
    }

    greedy
}

// ── Connectivity repair ───────────────────────────────────────────────────────

fn demo_connectivity(graph: &CityGraph, stations: &[velo_core::NodeId]) {
    println!("\n=== Connectivity suggestions (min {MIN_CONNECTIONS} links) ===");
    let suggestions = suggest_connections(graph, stations, MIN_CONNECTIONS);
    if suggestions.is_empty() {
        println!("Every station already has enough in-network links.");
        return;
    }
    for (from, to) in &suggestions {
        let km = graph.distance_km(from.as_str(), to.as_str());
        println!("  link {from} <-> {to} ({km:.2} km)");
    }
}
