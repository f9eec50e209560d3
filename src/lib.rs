//! Shortest-path core for an interactive map pathfinder.
//!
//! The crate holds the pieces a renderer drives: a small read-only weighted
//! [`Graph`] with a 2-D [`Placement`] for each node, point-to-point
//! [`dijkstra`] and [`a_star`] queries over it, and the [`Selection`] state
//! machine that tracks the clicked start/end pair and the active algorithm.
//! Windowing, drawing and input polling belong to the presentation layer;
//! every query here is a pure function of (graph, placement, start, end).

pub mod errors;
pub mod geometry;
pub mod graph;
pub mod sample;
pub mod search;
pub mod selection;

use std::hash::BuildHasherDefault;
use indexmap::IndexMap;
use rustc_hash::FxHasher;

pub use graph::{Graph, Placement};
pub use search::{SearchResult, a_star, dijkstra};
pub use selection::{Algorithm, Selection};

/// indexmap for insertion-ordered iteration + rustc_hash for fast hashing
pub(crate) type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;
