//! Unit tests for velo-route.
//!
//! All fixtures are hand-crafted so expected totals can be computed by hand.

#[cfg(test)]
mod helpers {
    use velo_graph::{CityGraph, Node};

    /// Five locations in a straight line, N0..N4.
    ///
    /// Every hop: 0.5 km, 4.0 min, free-flowing traffic.  The only route
    /// N0 → N4 is the full line: 2.0 km, 16.0 min,
    /// cost 4 × (0.4·0.5 + 0.4·4.0 + 0.2·4.0) = 10.4 under standard weights.
    pub fn line() -> CityGraph {
        let mut g = CityGraph::new();
        for i in 0..5 {
            g.add_node(Node::new(
                format!("N{i}"),
                format!("Stop {i}"),
                40.700 + 0.004 * i as f64,
                -73.990,
            ));
        }
        for i in 0..4 {
            g.add_connection(format!("N{i}"), format!("N{}", i + 1), 0.5, 4.0, 1.0);
        }
        g
    }

    /// A target-ward corridor plus a cheap dead-end spur in the opposite
    /// direction.
    ///
    /// ```text
    ///   W2 — W1 — S — X1 — X2 — E
    /// ```
    ///
    /// Eastward hops are expensive (cost 2.8 each), westward hops nearly free
    /// (cost 0.34), so plain label-setting settles the spur before reaching E
    /// while the straight-line estimate steers the guided search away from it.
    pub fn corridor() -> CityGraph {
        let mut g = CityGraph::new();
        g.add_node(Node::new("S", "Start", 0.0, 0.0));
        g.add_node(Node::new("X1", "East 1", 0.0, 0.01));
        g.add_node(Node::new("X2", "East 2", 0.0, 0.02));
        g.add_node(Node::new("E", "End", 0.0, 0.03));
        g.add_node(Node::new("W1", "West 1", 0.0, -0.01));
        g.add_node(Node::new("W2", "West 2", 0.0, -0.02));
        g.add_connection("S", "X1", 1.0, 4.0, 1.0);
        g.add_connection("X1", "X2", 1.0, 4.0, 1.0);
        g.add_connection("X2", "E", 1.0, 4.0, 1.0);
        g.add_connection("S", "W1", 0.1, 0.5, 1.0);
        g.add_connection("W1", "W2", 0.1, 0.5, 1.0);
        g
    }
}

#[cfg(test)]
mod dijkstra {
    use velo_core::CostWeights;
    use velo_graph::{CityGraph, Node};
    use crate::{RouteError, RoutePlanner};
    use super::helpers::line;

    #[test]
    fn endpoints_and_totals_on_line() {
        let g = line();
        let planner = RoutePlanner::new(&g);
        let r = planner.dijkstra("N0", "N4", &CostWeights::default()).unwrap();

        let ids: Vec<&str> = r.path.iter().map(|id| id.as_str()).collect();
        assert_eq!(ids, ["N0", "N1", "N2", "N3", "N4"]);
        assert!((r.total_distance_km - 2.0).abs() < 1e-9);
        assert!((r.total_time_min - 16.0).abs() < 1e-9);
        assert!((r.total_cost - 10.4).abs() < 1e-9);
    }

    #[test]
    fn cost_is_sum_of_traversed_edge_costs() {
        let g = line();
        let planner = RoutePlanner::new(&g);
        let w = CostWeights::default();
        let r = planner.dijkstra("N0", "N3", &w).unwrap();

        let mut expected = 0.0;
        for pair in r.path.windows(2) {
            let edge = g
                .neighbors(pair[0].as_str())
                .iter()
                .find(|e| e.to == pair[1])
                .unwrap();
            expected += edge.weighted_cost(&w);
        }
        assert!((r.total_cost - expected).abs() < 1e-9);
    }

    #[test]
    fn weight_override_changes_objective() {
        let g = line();
        let planner = RoutePlanner::new(&g);
        // Distance-only blend: cost over N0→N4 collapses to pure kilometres.
        let r = planner
            .dijkstra("N0", "N4", &CostWeights::new(1.0, 0.0, 0.0))
            .unwrap();
        assert!((r.total_cost - 2.0).abs() < 1e-9);
        assert!((r.total_time_min - 16.0).abs() < 1e-9); // physical totals unchanged
    }

    #[test]
    fn self_query_is_single_node_with_zero_totals() {
        let g = line();
        let planner = RoutePlanner::new(&g);
        let r = planner.dijkstra("N2", "N2", &CostWeights::default()).unwrap();
        assert_eq!(r.path.len(), 1);
        assert_eq!(r.path[0], "N2");
        assert_eq!(r.total_distance_km, 0.0);
        assert_eq!(r.total_time_min, 0.0);
        assert_eq!(r.total_cost, 0.0);
        assert_eq!(r.nodes_explored, 0);
    }

    #[test]
    fn isolated_target_is_no_path() {
        let mut g = line();
        g.add_node(Node::new("ISLAND", "No roads here", 40.80, -73.95));
        let planner = RoutePlanner::new(&g);
        let result = planner.dijkstra("N0", "ISLAND", &CostWeights::default());
        assert!(matches!(result, Err(RouteError::NoPath { .. })));
    }

    #[test]
    fn unknown_endpoint_is_no_path() {
        let g = line();
        let planner = RoutePlanner::new(&g);
        assert!(planner.dijkstra("N0", "NOWHERE", &CostWeights::default()).is_err());
        assert!(planner.dijkstra("NOWHERE", "N0", &CostWeights::default()).is_err());
    }

    #[test]
    fn empty_graph_self_query_still_trivial() {
        let g = CityGraph::new();
        let planner = RoutePlanner::new(&g);
        // Identical endpoints are a valid one-node path even off the map.
        let r = planner.dijkstra("X", "X", &CostWeights::default()).unwrap();
        assert_eq!(r.path.len(), 1);
    }
}

#[cfg(test)]
mod a_star {
    use velo_core::CostWeights;
    use crate::RoutePlanner;
    use super::helpers::{corridor, line};

    #[test]
    fn agrees_with_dijkstra_on_line() {
        let g = line();
        let planner = RoutePlanner::new(&g);
        let w = CostWeights::default();
        let d = planner.dijkstra("N0", "N4", &w).unwrap();
        let a = planner.a_star("N0", "N4", &w).unwrap();
        assert_eq!(a.path, d.path);
        assert!((a.total_cost - d.total_cost).abs() < 1e-9);
        assert!((a.total_distance_km - d.total_distance_km).abs() < 1e-9);
        assert!((a.total_time_min - d.total_time_min).abs() < 1e-9);
    }

    #[test]
    fn explores_no_more_than_dijkstra() {
        let g = corridor();
        let planner = RoutePlanner::new(&g);
        let w = CostWeights::default();
        let d = planner.dijkstra("S", "E", &w).unwrap();
        let a = planner.a_star("S", "E", &w).unwrap();
        assert!(
            a.nodes_explored <= d.nodes_explored,
            "guided search settled {} nodes, label-setting {}",
            a.nodes_explored,
            d.nodes_explored,
        );
        // The spur makes the gap strict on this fixture.
        assert!(a.nodes_explored < d.nodes_explored);
    }

    #[test]
    fn no_path_signalled_like_dijkstra() {
        let g = line();
        let planner = RoutePlanner::new(&g);
        assert!(planner.a_star("N0", "NOWHERE", &CostWeights::default()).is_err());
    }
}

#[cfg(test)]
mod reachability {
    use crate::RoutePlanner;
    use super::helpers::line;

    #[test]
    fn depth_bound_limits_sweep() {
        let g = line();
        let planner = RoutePlanner::new(&g);
        let paths = planner.reachable_within("N0", 2);
        assert_eq!(paths.len(), 3); // N0, N1, N2

        let to_n2: Vec<&str> = paths["N2"].iter().map(|id| id.as_str()).collect();
        assert_eq!(to_n2, ["N0", "N1", "N2"]);
    }

    #[test]
    fn start_maps_to_itself() {
        let g = line();
        let planner = RoutePlanner::new(&g);
        let paths = planner.reachable_within("N3", 1);
        assert_eq!(paths["N3"].len(), 1);
        assert_eq!(paths.len(), 3); // N3 plus both line neighbors
    }

    #[test]
    fn unknown_start_reaches_only_itself() {
        let g = line();
        let planner = RoutePlanner::new(&g);
        let paths = planner.reachable_within("NOWHERE", 3);
        assert_eq!(paths.len(), 1);
    }
}

#[cfg(test)]
mod k_shortest {
    use velo_core::CostWeights;
    use crate::RoutePlanner;
    use super::helpers::corridor;

    #[test]
    fn at_most_one_route_regardless_of_k() {
        let g = corridor();
        let planner = RoutePlanner::new(&g);
        let routes = planner.k_shortest_paths("S", "E", 5, &CostWeights::default());
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].path.first().unwrap(), "S");
        assert_eq!(routes[0].path.last().unwrap(), "E");
    }

    #[test]
    fn zero_k_is_empty() {
        let g = corridor();
        let planner = RoutePlanner::new(&g);
        assert!(planner.k_shortest_paths("S", "E", 0, &CostWeights::default()).is_empty());
    }

    #[test]
    fn disconnected_pair_is_empty() {
        let g = corridor();
        let planner = RoutePlanner::new(&g);
        assert!(planner.k_shortest_paths("S", "NOWHERE", 3, &CostWeights::default()).is_empty());
    }
}
