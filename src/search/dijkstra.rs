use super::path::reconstruct;
use super::{NodeMap, SearchResult};
use crate::errors::SearchError;
use crate::graph::Graph;

use std::{cmp::Ordering, collections::BinaryHeap};
use indexmap::map::Entry::{Occupied, Vacant};
use log::debug;
use ordered_float::OrderedFloat;

/// Shortest path between two nodes using Dijkstra's algorithm
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
///
/// Returns the path from `start` to `end` inclusive together with its total
/// weight. An unreachable `end` yields [`SearchResult::no_path`]; an id that
/// is not in the graph at all is an error. `start == end` yields the
/// single-node path with distance zero.
pub fn dijkstra<'a>(graph: &'a Graph, start: &'a str, end: &'a str) -> Result<SearchResult, SearchError> {
    for id in [start, end] {
        if !graph.contains(id) {
            return Err(SearchError::UnknownNode(id.to_string()));
        }
    }

    // Nodes to visit - binary heap, reversed so the smallest tentative
    // distance pops first. Stale entries are tolerated: a node pushed again
    // with a better distance shadows its earlier pushes, which get skipped
    // on pop.
    let mut queue: BinaryHeap<Visit> = BinaryHeap::new();

    // Every node seen so far, with its predecessor and best known distance
    let mut nodes: NodeMap<'a> = NodeMap::default();

    let (start_index, _) = nodes.insert_full(start, (None, 0.0));
    queue.push(Visit {
        index: start_index,
        distance: OrderedFloat(0.0),
    });

    while let Some(Visit { index, distance }) = queue.pop() {
        let (&node, &(_, best)) = nodes.get_index(index).unwrap();

        // A better path to this node was found after this entry was pushed
        if distance.into_inner() > best {
            continue;
        }

        // First pop of the target carries its final shortest distance
        if node == end {
            debug!("dijkstra {start} -> {end}: distance {best}");
            return Ok(match reconstruct(&nodes, index, start) {
                Some(path) => SearchResult::found(path, best),
                None => SearchResult::no_path(),
            });
        }

        for (neighbor, weight) in graph.neighbors(node).into_iter().flatten() {
            let next = best + f64::from(*weight);

            // Relax: keep the entry only if it improves on what we know
            let neighbor_index = match nodes.entry(neighbor.as_str()) {
                Vacant(e) => {
                    let i = e.index();
                    e.insert((Some(index), next));
                    i
                }
                Occupied(mut e) => {
                    if e.get().1 > next {
                        e.insert((Some(index), next));
                        e.index()
                    } else {
                        continue;
                    }
                }
            };

            queue.push(Visit {
                index: neighbor_index,
                distance: OrderedFloat(next),
            });
        }
    }

    debug!("dijkstra {start} -> {end}: no path");
    Ok(SearchResult::no_path())
}

/// Queue entry: index into the node map plus the tentative distance it was
/// pushed with. Ordering is reversed for the max-heap, with ties broken
/// toward the earlier-indexed node so equal-length paths resolve the same
/// way on every run.
#[derive(Debug)]
struct Visit {
    index: usize,
    distance: OrderedFloat<f64>,
}

impl Ord for Visit {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .cmp(&self.distance)
            .then_with(|| other.index.cmp(&self.index))
    }
}
impl PartialOrd for Visit {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl PartialEq for Visit {
    fn eq(&self, other: &Self) -> bool {
        self.distance == other.distance && self.index == other.index
    }
}
impl Eq for Visit {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample;

    #[test]
    fn test_shortest_path_a_to_h() {
        let graph = sample::graph();
        let result = dijkstra(&graph, "A", "H").unwrap();

        assert_eq!(result.path, vec!["A", "C", "D", "H"]);
        assert_eq!(result.distance, 4.0);
    }

    #[test]
    fn test_shortest_path_a_to_j() {
        let graph = sample::graph();
        let result = dijkstra(&graph, "A", "J").unwrap();

        assert_eq!(result.path, vec!["A", "F", "G", "J"]);
        assert_eq!(result.distance, 5.0);
    }

    #[test]
    fn test_start_equals_end() {
        let graph = sample::graph();
        let result = dijkstra(&graph, "A", "A").unwrap();

        assert_eq!(result.path, vec!["A"]);
        assert_eq!(result.distance, 0.0);
        assert!(!result.is_unreachable());
    }

    #[test]
    fn test_unreachable_target() {
        let graph = sample::graph().with_node("K");
        let result = dijkstra(&graph, "A", "K").unwrap();

        assert!(result.is_unreachable());
        assert!(result.path.is_empty());
        assert_eq!(result.distance, f64::INFINITY);
    }

    #[test]
    fn test_unreachable_is_distinct_from_zero_length() {
        let graph = sample::graph().with_node("K");

        let unreachable = dijkstra(&graph, "A", "K").unwrap();
        let trivial = dijkstra(&graph, "A", "A").unwrap();

        assert!(unreachable.is_unreachable());
        assert!(!trivial.is_unreachable());
        assert_eq!(trivial.distance, 0.0);
    }

    #[test]
    fn test_unknown_node_is_an_error() {
        let graph = sample::graph();

        let bad_start = dijkstra(&graph, "Z", "A");
        assert!(matches!(bad_start, Err(SearchError::UnknownNode(ref id)) if id == "Z"));

        let bad_end = dijkstra(&graph, "A", "Z");
        assert!(matches!(bad_end, Err(SearchError::UnknownNode(ref id)) if id == "Z"));
    }

    #[test]
    fn test_returned_paths_are_valid_walks() {
        // Every returned path must start at start, end at end, follow real
        // edges, and sum to the reported distance.
        let graph = sample::graph();
        let nodes: Vec<String> = graph.nodes().map(str::to_string).collect();

        for start in &nodes {
            for end in &nodes {
                let result = dijkstra(&graph, start, end).unwrap();
                assert_eq!(result.path.first(), Some(start));
                assert_eq!(result.path.last(), Some(end));

                let mut total = 0.0;
                for pair in result.path.windows(2) {
                    let weight = graph
                        .weight(&pair[0], &pair[1])
                        .unwrap_or_else(|| panic!("no edge {} -> {}", pair[0], pair[1]));
                    total += f64::from(weight);
                }
                assert_eq!(total, result.distance, "{start} -> {end}");
            }
        }
    }

    #[test]
    fn test_optimality_against_exhaustive_enumeration() {
        // Ten nodes is small enough to enumerate every simple path
        let graph = sample::graph();
        let nodes: Vec<String> = graph.nodes().map(str::to_string).collect();

        for start in &nodes {
            for end in &nodes {
                if start == end {
                    continue;
                }
                let best = simple_path_costs(&graph, start, end)
                    .into_iter()
                    .fold(f64::INFINITY, f64::min);
                let result = dijkstra(&graph, start, end).unwrap();
                assert_eq!(result.distance, best, "{start} -> {end}");
            }
        }
    }

    #[test]
    fn test_tie_break_is_deterministic() {
        // Two routes from A to D of equal total weight
        let graph = Graph::from_edges([
            ("A", "B", 1),
            ("A", "C", 1),
            ("B", "D", 1),
            ("C", "D", 1),
        ])
        .unwrap();

        let first = dijkstra(&graph, "A", "D").unwrap();
        assert_eq!(first.distance, 2.0);
        for _ in 0..10 {
            assert_eq!(dijkstra(&graph, "A", "D").unwrap().path, first.path);
        }
    }

    /// Total weight of every simple path from start to end
    fn simple_path_costs(graph: &Graph, start: &str, end: &str) -> Vec<f64> {
        fn walk(
            graph: &Graph,
            node: &str,
            end: &str,
            visited: &mut Vec<String>,
            cost: f64,
            out: &mut Vec<f64>,
        ) {
            if node == end {
                out.push(cost);
                return;
            }
            for (neighbor, weight) in graph.neighbors(node).into_iter().flatten() {
                if !visited.iter().any(|v| v == neighbor) {
                    visited.push(neighbor.clone());
                    walk(graph, neighbor, end, visited, cost + f64::from(*weight), out);
                    visited.pop();
                }
            }
        }

        let mut out = Vec::new();
        walk(graph, start, end, &mut vec![start.to_string()], 0.0, &mut out);
        out
    }
}
