use super::path::reconstruct;
use super::{NodeMap, SearchResult};
use crate::errors::SearchError;
use crate::graph::{Graph, Placement};

use std::{cmp::Ordering, collections::BinaryHeap};
use indexmap::map::Entry::{Occupied, Vacant};
use log::debug;
use ordered_float::OrderedFloat;

/// Shortest path between two nodes using the A* algorithm
/// https://en.wikipedia.org/wiki/A*_search_algorithm
///
/// Same relaxation as Dijkstra, but the queue is ordered by
/// `g(node) + h(node, end)` where `h` is the placement's straight-line
/// estimate. Optimality holds as long as `h` never overestimates the true
/// remaining cost - a property of how the map was authored, not something
/// verified here. The reported distance is the accumulated `g(end)`, in the
/// same units Dijkstra reports, so the two are directly comparable.
pub fn a_star<'a>(
    graph: &'a Graph,
    start: &'a str,
    end: &'a str,
    placement: &Placement,
) -> Result<SearchResult, SearchError> {
    for id in [start, end] {
        if !graph.contains(id) {
            return Err(SearchError::UnknownNode(id.to_string()));
        }
    }

    // Open list ordered by estimated total cost
    let mut open: BinaryHeap<Visit> = BinaryHeap::new();

    // Every node seen so far, with its predecessor and best known g-cost
    let mut nodes: NodeMap<'a> = NodeMap::default();

    let (start_index, _) = nodes.insert_full(start, (None, 0.0));
    open.push(Visit {
        index: start_index,
        g: 0.0,
        f: OrderedFloat(placement.heuristic(start, end)),
    });

    while let Some(Visit { index, g, .. }) = open.pop() {
        let (&node, &(_, best)) = nodes.get_index(index).unwrap();

        // A better path to this node was found after this entry was pushed
        if g > best {
            continue;
        }

        if node == end {
            debug!("a_star {start} -> {end}: distance {best}");
            return Ok(match reconstruct(&nodes, index, start) {
                Some(path) => SearchResult::found(path, best),
                None => SearchResult::no_path(),
            });
        }

        for (neighbor, weight) in graph.neighbors(node).into_iter().flatten() {
            // Confirmed cost, not the estimate
            let next = best + f64::from(*weight);

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

            open.push(Visit {
                index: neighbor_index,
                g: next,
                f: OrderedFloat(next + placement.heuristic(neighbor, end)),
            });
        }
    }

    debug!("a_star {start} -> {end}: no path");
    Ok(SearchResult::no_path())
}

/// Open-list entry: ordering is reversed on the estimated total cost so the
/// most promising node pops first, with ties broken toward the
/// earlier-indexed node for run-to-run reproducibility.
#[derive(Debug)]
struct Visit {
    index: usize,
    g: f64,
    f: OrderedFloat<f64>,
}

impl Ord for Visit {
    fn cmp(&self, other: &Self) -> Ordering {
        other.f.cmp(&self.f).then_with(|| other.index.cmp(&self.index))
    }
}
impl PartialOrd for Visit {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl PartialEq for Visit {
    fn eq(&self, other: &Self) -> bool {
        self.f == other.f && self.index == other.index
    }
}
impl Eq for Visit {}
