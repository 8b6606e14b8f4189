//! Sample city fixture: a Midtown-Manhattan-flavored district.
//!
//! 16 locations and 27 bidirectional connections with hand-tuned distances,
//! times, and congestion factors.  Coordinates center on the Times Square
//! area.

use velo_graph::{CityGraph, Node};
use velo_place::DensitySeed;

/// High-density areas feeding the demand model: downtown, the train station,
/// the university, and the park.
pub const DENSITY_SEEDS: [DensitySeed; 4] = [
    DensitySeed { lat: 40.7589, lon: -73.9851, density: 1.0 },
    DensitySeed { lat: 40.7527, lon: -73.9772, density: 0.9 },
    DensitySeed { lat: 40.7630, lon: -73.9840, density: 0.8 },
    DensitySeed { lat: 40.7678, lon: -73.9815, density: 0.6 },
];

pub fn build_city() -> CityGraph {
    let mut g = CityGraph::new();

    let locations: &[(&str, &str, f64, f64)] = &[
        ("RES_01", "Residential Area North", 40.7700, -73.9900),
        ("RES_02", "Residential Area East", 40.7650, -73.9700),
        ("RES_03", "Residential Area South", 40.7500, -73.9850),
        ("RES_04", "Residential Area West", 40.7600, -74.0000),
        ("COM_01", "Downtown Business District", 40.7589, -73.9851),
        ("COM_02", "Shopping Center", 40.7620, -73.9780),
        ("COM_03", "Office Complex", 40.7560, -73.9920),
        ("PARK_01", "Central Park South", 40.7678, -73.9815),
        ("PARK_02", "Riverside Park", 40.7700, -73.9950),
        ("TRAN_01", "Main Train Station", 40.7527, -73.9772),
        ("TRAN_02", "Bus Terminal", 40.7570, -73.9900),
        ("EDU_01", "University Campus", 40.7630, -73.9840),
        ("EDU_02", "College District", 40.7660, -73.9760),
        ("MED_01", "City Hospital", 40.7540, -73.9800),
        ("ENT_01", "Theater District", 40.7580, -73.9860),
        ("ENT_02", "Sports Arena", 40.7510, -73.9930),
    ];
    for &(id, name, lat, lon) in locations {
        g.add_node(Node::new(id, name, lat, lon));
    }

    // (from, to, km, minutes, congestion factor)
    let connections: &[(&str, &str, f64, f64, f64)] = &[
        ("RES_01", "PARK_01", 0.3, 2.5, 1.0),
        ("RES_01", "PARK_02", 0.4, 3.0, 1.1),
        ("RES_02", "COM_02", 0.4, 3.0, 1.2),
        ("RES_02", "EDU_02", 0.3, 2.0, 1.0),
        ("RES_03", "TRAN_01", 0.3, 2.5, 1.3),
        ("RES_03", "MED_01", 0.5, 4.0, 1.1),
        ("RES_04", "COM_03", 0.4, 3.0, 1.0),
        ("RES_04", "PARK_02", 0.3, 2.5, 1.0),
        ("COM_01", "ENT_01", 0.2, 1.5, 1.5),
        ("COM_01", "TRAN_01", 0.3, 2.0, 1.6),
        ("COM_01", "COM_02", 0.4, 3.0, 1.4),
        ("COM_02", "EDU_01", 0.3, 2.0, 1.1),
        ("COM_03", "TRAN_02", 0.3, 2.0, 1.2),
        ("COM_03", "COM_01", 0.4, 3.0, 1.3),
        ("PARK_01", "EDU_01", 0.3, 2.0, 1.0),
        ("PARK_01", "COM_01", 0.4, 3.0, 1.1),
        ("PARK_02", "PARK_01", 0.5, 4.0, 1.0),
        ("TRAN_01", "TRAN_02", 0.4, 3.0, 1.5),
        ("TRAN_01", "MED_01", 0.3, 2.0, 1.2),
        ("TRAN_02", "ENT_02", 0.4, 3.0, 1.3),
        ("EDU_01", "COM_01", 0.3, 2.5, 1.2),
        ("EDU_01", "EDU_02", 0.4, 3.0, 1.0),
        ("EDU_02", "PARK_01", 0.3, 2.0, 1.0),
        ("MED_01", "ENT_02", 0.4, 3.0, 1.1),
        ("ENT_01", "ENT_02", 0.5, 4.0, 1.4),
        ("ENT_01", "COM_02", 0.4, 3.0, 1.3),
        ("ENT_02", "COM_03", 0.3, 2.5, 1.2),
    ];
    for &(from, to, km, min, traffic) in connections {
        g.add_connection(from, to, km, min, traffic);
    }

    g
}
