//! The hand-authored ten-node map the visualizer ships with.
//!
//! Nodes A through J with positive integer weights, mirrored in both
//! directions, plus a pixel position for each node. The data is compiled in;
//! construction cannot fail.

use crate::geometry::Point;
use crate::graph::{Graph, Placement};

/// Conversion from pixel distance to edge-weight units for the heuristic.
/// The map is authored so that no two nodes are further apart, in scaled
/// straight-line terms, than the cheapest path between them - which keeps
/// the A* heuristic admissible for this placement.
const WEIGHT_UNITS_PER_PIXEL: f64 = 1.0 / 300.0;

/// The sample graph
pub fn graph() -> Graph {
    Graph::from_edges([
        ("A", "B", 5),
        ("A", "C", 1),
        ("A", "F", 2),
        ("B", "D", 3),
        ("B", "E", 2),
        ("C", "D", 2),
        ("C", "G", 4),
        ("D", "H", 1),
        ("E", "F", 3),
        ("E", "I", 4),
        ("F", "G", 1),
        ("G", "H", 3),
        ("G", "J", 2),
        ("H", "I", 2),
        ("I", "J", 3),
    ])
    .expect("authored map is well formed")
}

/// Pixel positions for the sample graph, sized for a 1000x700 window
pub fn placement() -> Placement {
    Placement::from_points(
        [
            ("A", Point::new(150.0, 150.0)),
            ("B", Point::new(350.0, 200.0)),
            ("C", Point::new(250.0, 350.0)),
            ("D", Point::new(450.0, 300.0)),
            ("E", Point::new(550.0, 150.0)),
            ("F", Point::new(200.0, 500.0)),
            ("G", Point::new(400.0, 450.0)),
            ("H", Point::new(600.0, 350.0)),
            ("I", Point::new(700.0, 200.0)),
            ("J", Point::new(750.0, 450.0)),
        ],
        WEIGHT_UNITS_PER_PIXEL,
    )
}
