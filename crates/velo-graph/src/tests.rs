//! Unit tests for velo-graph.

#[cfg(test)]
mod helpers {
    use crate::{CityGraph, Node};

    /// Small downtown fixture.
    ///
    /// Nodes: A (station), B, C; connections A-B and B-C (both directions),
    /// one-way C→A.
    pub fn downtown() -> CityGraph {
        let mut g = CityGraph::new();
        let mut a = Node::new("A", "Downtown", 40.7589, -73.9851);
        a.is_station = true;
        a.capacity = 20;
        g.add_node(a);
        g.add_node(Node::new("B", "Station Square", 40.7527, -73.9772));
        g.add_node(Node::new("C", "Riverside", 40.7700, -73.9950));
        g.add_connection("A", "B", 0.8, 6.0, 1.2);
        g.add_connection("B", "C", 1.1, 8.0, 1.0);
        g.add_directed_edge("C", "A", 1.5, 10.0, 1.3);
        g
    }
}

#[cfg(test)]
mod structure {
    use crate::Node;
    use super::helpers::downtown;

    #[test]
    fn counts() {
        let g = downtown();
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.edge_count(), 5); // two connections (2 each) + one one-way
    }

    #[test]
    fn insertion_order_is_stable() {
        let g = downtown();
        let ids: Vec<&str> = g.node_ids().iter().map(|id| id.as_str()).collect();
        assert_eq!(ids, ["A", "B", "C"]);
    }

    #[test]
    fn readd_overwrites_but_keeps_position() {
        let mut g = downtown();
        g.add_node(Node::new("B", "Renamed Square", 40.75, -73.98));
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.node("B").unwrap().name, "Renamed Square");
        let ids: Vec<&str> = g.node_ids().iter().map(|id| id.as_str()).collect();
        assert_eq!(ids, ["A", "B", "C"]);
    }

    #[test]
    fn neighbors_of_unknown_id_is_empty() {
        let g = downtown();
        assert!(g.neighbors("ZZZ").is_empty());
    }

    #[test]
    fn unknown_node_lookup_is_none() {
        let g = downtown();
        assert!(g.node("ZZZ").is_none());
    }

    #[test]
    fn stations_filter() {
        let g = downtown();
        let stations = g.stations();
        assert_eq!(stations.len(), 1);
        assert_eq!(stations[0].id, "A");
        assert_eq!(stations[0].capacity, 20);
    }

    #[test]
    fn dangling_sources_listed_sorted() {
        let mut g = downtown();
        g.add_directed_edge("Z_GHOST", "A", 0.5, 3.0, 1.0);
        g.add_directed_edge("M_GHOST", "B", 0.5, 3.0, 1.0);
        let orphans: Vec<&str> = g.dangling_sources().iter().map(|id| id.as_str()).collect();
        assert_eq!(orphans, ["M_GHOST", "Z_GHOST"]);
    }
}

#[cfg(test)]
mod distance {
    use velo_core::is_reachable;
    use super::helpers::downtown;

    #[test]
    fn self_distance_is_zero() {
        let g = downtown();
        assert_eq!(g.distance_km("A", "A"), 0.0);
    }

    #[test]
    fn symmetric_between_nodes() {
        let g = downtown();
        let ab = g.distance_km("A", "B");
        let ba = g.distance_km("B", "A");
        assert!(ab > 0.0);
        assert!((ab - ba).abs() < 1e-12);
    }

    #[test]
    fn absent_id_is_unreachable() {
        let g = downtown();
        assert!(!is_reachable(g.distance_km("A", "ZZZ")));
        assert!(!is_reachable(g.distance_km("ZZZ", "A")));
    }
}

#[cfg(test)]
mod cost {
    use velo_core::CostWeights;
    use velo_core::NodeId;
    use crate::Edge;

    #[test]
    fn weighted_cost_blend() {
        let e = Edge {
            to: NodeId::new("B"),
            distance_km: 1.0,
            time_min: 10.0,
            traffic: 1.5,
        };
        // 0.4·1.0 + 0.4·10.0 + 0.2·(10.0·1.5) = 7.4
        let cost = e.weighted_cost(&CostWeights::default());
        assert!((cost - 7.4).abs() < 1e-9);
    }

    #[test]
    fn traffic_scales_time_only() {
        let free = Edge { to: NodeId::new("B"), distance_km: 2.0, time_min: 10.0, traffic: 1.0 };
        let jammed = Edge { to: NodeId::new("B"), distance_km: 2.0, time_min: 10.0, traffic: 2.0 };
        let w = CostWeights::new(1.0, 0.0, 1.0);
        // Distance term identical; only the traffic-inflated time term grows.
        assert!((jammed.weighted_cost(&w) - free.weighted_cost(&w) - 10.0).abs() < 1e-9);
    }
}
