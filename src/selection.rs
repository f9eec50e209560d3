use crate::errors::SearchError;
use crate::graph::{Graph, Placement};
use crate::search::{SearchResult, a_star, dijkstra};

use log::{debug, info};

/// Which search answers the next query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Dijkstra,
    AStar,
}

impl Algorithm {
    pub fn toggled(self) -> Self {
        match self {
            Algorithm::Dijkstra => Algorithm::AStar,
            Algorithm::AStar => Algorithm::Dijkstra,
        }
    }

    /// Display name, for panels and logs
    pub fn label(self) -> &'static str {
        match self {
            Algorithm::Dijkstra => "Dijkstra",
            Algorithm::AStar => "A*",
        }
    }
}

/// The start/end pair the user has clicked so far, the active algorithm and
/// the last computed result.
///
/// This is the state the presentation layer drives: it resolves a click to a
/// node id and calls [`pick`](Selection::pick), wires its buttons to
/// [`toggle_algorithm`](Selection::toggle_algorithm) and
/// [`clear`](Selection::clear), and draws whatever [`result`](Selection::result)
/// holds. The graph and placement are borrowed read-only; all mutation is in
/// these explicit transitions.
#[derive(Debug)]
pub struct Selection<'a> {
    graph: &'a Graph,
    placement: &'a Placement,
    start: Option<String>,
    end: Option<String>,
    algorithm: Algorithm,
    result: Option<SearchResult>,
}

impl<'a> Selection<'a> {
    pub fn new(graph: &'a Graph, placement: &'a Placement) -> Self {
        Self {
            graph,
            placement,
            start: None,
            end: None,
            algorithm: Algorithm::Dijkstra,
            result: None,
        }
    }

    /// A node was clicked.
    ///
    /// The first valid pick becomes the start; a second, different pick
    /// becomes the end and triggers the search immediately. Re-picking the
    /// start while choosing the end is ignored, as is any pick once both
    /// endpoints are set - the selection has to be cleared first.
    pub fn pick(&mut self, node: &str) -> Result<(), SearchError> {
        if !self.graph.contains(node) {
            return Err(SearchError::UnknownNode(node.to_string()));
        }

        if self.start.is_none() {
            debug!("selection: start = {node}");
            self.start = Some(node.to_string());
        } else if self.end.is_none() && self.start.as_deref() != Some(node) {
            debug!("selection: end = {node}");
            self.end = Some(node.to_string());
            self.recompute();
        }

        Ok(())
    }

    /// Flip between Dijkstra and A*. With both endpoints set the path is
    /// recomputed against the unchanged selection.
    pub fn toggle_algorithm(&mut self) {
        self.algorithm = self.algorithm.toggled();
        debug!("selection: algorithm = {}", self.algorithm.label());
        if self.start.is_some() && self.end.is_some() {
            self.recompute();
        }
    }

    /// Reset to the empty selection, dropping any computed result
    pub fn clear(&mut self) {
        debug!("selection: cleared");
        self.start = None;
        self.end = None;
        self.result = None;
    }

    fn recompute(&mut self) {
        let (Some(start), Some(end)) = (self.start.clone(), self.end.clone()) else {
            return;
        };

        // Endpoints were validated on pick, so the queries cannot fail on
        // the unchanged graph
        let result = match self.algorithm {
            Algorithm::Dijkstra => dijkstra(self.graph, &start, &end),
            Algorithm::AStar => a_star(self.graph, &start, &end, self.placement),
        };

        match result {
            Ok(result) => {
                info!(
                    "{} {start} -> {end}: distance {}",
                    self.algorithm.label(),
                    result.distance
                );
                self.result = Some(result);
            }
            Err(err) => {
                debug!("selection: dropping stale endpoints ({err})");
                self.clear();
            }
        }
    }

    pub fn start(&self) -> Option<&str> {
        self.start.as_deref()
    }

    pub fn end(&self) -> Option<&str> {
        self.end.as_deref()
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// The last computed path, if both endpoints have been picked
    pub fn result(&self) -> Option<&SearchResult> {
        self.result.as_ref()
    }
}
