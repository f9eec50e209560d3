pub mod a_star;
pub mod dijkstra;
mod path;

pub use a_star::a_star;
pub use dijkstra::dijkstra;

use crate::FxIndexMap;

/// Per-query bookkeeping for both search algorithms.
///
/// Keys borrow node ids from the graph; the value holds
/// (predecessor index into this same map, best known cost from the start).
/// The start node is the only entry with no predecessor.
pub(crate) type NodeMap<'a> = FxIndexMap<&'a str, (Option<usize>, f64)>;

/// Outcome of a point-to-point query.
///
/// A fresh value per call; the caller owns it outright. An unreachable
/// target is a normal outcome, not an error: empty path, infinite distance.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Node ids from start to end inclusive; empty when no path exists
    pub path: Vec<String>,
    /// Total accumulated edge weight; `f64::INFINITY` when no path exists
    pub distance: f64,
}

impl SearchResult {
    pub(crate) fn found(path: Vec<String>, distance: f64) -> Self {
        Self { path, distance }
    }

    /// The "no path" signal: empty path, infinite distance
    pub fn no_path() -> Self {
        Self {
            path: Vec::new(),
            distance: f64::INFINITY,
        }
    }

    pub fn is_unreachable(&self) -> bool {
        self.path.is_empty()
    }
}
