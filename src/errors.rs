use std::fmt;

/// Errors surfaced by the search queries
/// An unreachable target is not an error - it comes back as an empty path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    UnknownNode(String), // id is not present in the graph
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::UnknownNode(id) => write!(f, "unknown node id `{id}`"),
        }
    }
}

impl std::error::Error for SearchError {}

/// Errors rejected at graph construction time
/// Dijkstra/A* correctness requires every edge weight > 0
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    ZeroWeight { from: String, to: String },
    DuplicateEdge { from: String, to: String },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::ZeroWeight { from, to } => {
                write!(f, "edge {from} -> {to} has zero weight")
            }
            GraphError::DuplicateEdge { from, to } => {
                write!(f, "edge {from} -> {to} is declared twice")
            }
        }
    }
}

impl std::error::Error for GraphError {}
