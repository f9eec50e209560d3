use crate::FxIndexMap;
use crate::errors::GraphError;
use crate::geometry::Point;

/// A static weighted graph with string node ids.
///
/// Built once at startup and read-only afterwards: the search queries only
/// ever look up neighbor lists. Authoring is undirected - every declared edge
/// is mirrored with the same weight - but nothing in the search code relies
/// on symmetry.
///
/// Adjacency uses an insertion-ordered map so traversal order, and with it
/// tie-breaking between equal-length paths, follows authoring order.
#[derive(Debug, Clone)]
pub struct Graph {
    adjacency: FxIndexMap<String, Vec<(String, u32)>>,
}

impl Graph {
    /// Build a graph from undirected `(a, b, weight)` edges.
    ///
    /// Both endpoints of every edge are registered, so a neighbor reference
    /// can never dangle. Zero weights and twice-declared edges are rejected
    /// here rather than left for the search algorithms to misbehave on.
    pub fn from_edges<S, I>(edges: I) -> Result<Self, GraphError>
    where
        S: Into<String>,
        I: IntoIterator<Item = (S, S, u32)>,
    {
        let mut adjacency: FxIndexMap<String, Vec<(String, u32)>> = FxIndexMap::default();

        for (a, b, weight) in edges {
            let (a, b) = (a.into(), b.into());

            if weight == 0 {
                return Err(GraphError::ZeroWeight { from: a, to: b });
            }

            let already_present = adjacency
                .get(&a)
                .is_some_and(|edges| edges.iter().any(|(n, _)| *n == b));
            if already_present {
                return Err(GraphError::DuplicateEdge { from: a, to: b });
            }

            // mirror the edge - the map is authored undirected
            adjacency.entry(a.clone()).or_default().push((b.clone(), weight));
            adjacency.entry(b).or_default().push((a, weight));
        }

        Ok(Self { adjacency })
    }

    /// Register a node with no edges. Construction-time only, used for
    /// authoring disconnected nodes.
    pub fn with_node(mut self, id: impl Into<String>) -> Self {
        self.adjacency.entry(id.into()).or_default();
        self
    }

    /// Outgoing edges of a node as `(neighbor, weight)` pairs.
    /// `None` when the id is not part of the graph.
    pub fn neighbors(&self, node: &str) -> Option<&[(String, u32)]> {
        self.adjacency.get(node).map(Vec::as_slice)
    }

    pub fn contains(&self, node: &str) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Node ids in authoring order
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Weight of the edge `from -> to`, if one exists
    pub fn weight(&self, from: &str, to: &str) -> Option<u32> {
        self.neighbors(from)?
            .iter()
            .find(|(n, _)| n.as_str() == to)
            .map(|&(_, w)| w)
    }
}

/// 2-D coordinates for each node, used by the A* heuristic and by rendering.
///
/// Coordinates are authored in whatever unit the renderer wants (pixels,
/// here). `units_per_coord` converts a straight-line coordinate distance
/// into edge-weight units inside [`Placement::heuristic`]; the map author
/// picks it small enough that the heuristic never overestimates a real path
/// cost, which is what keeps A* optimal.
#[derive(Debug, Clone)]
pub struct Placement {
    points: FxIndexMap<String, Point>,
    units_per_coord: f64,
}

impl Placement {
    pub fn from_points<S, I>(points: I, units_per_coord: f64) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = (S, Point)>,
    {
        Self {
            points: points.into_iter().map(|(id, p)| (id.into(), p)).collect(),
            units_per_coord,
        }
    }

    /// Coordinate of a node, for rendering
    pub fn position(&self, node: &str) -> Option<Point> {
        self.points.get(node).copied()
    }

    /// Estimated remaining cost from `from` to `to` in edge-weight units.
    ///
    /// A node without a placement gets an estimate of zero - always
    /// admissible, so an incomplete placement degrades A* toward Dijkstra
    /// instead of breaking it.
    pub fn heuristic(&self, from: &str, to: &str) -> f64 {
        match (self.position(from), self.position(to)) {
            (Some(a), Some(b)) => a.distance_to(&b) * self.units_per_coord,
            _ => 0.0,
        }
    }
}
