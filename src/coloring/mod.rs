//! Greedy sequential graph coloring.
//!
//! Vertices are visited in an order chosen by an [`OrderingStrategy`];
//! each receives the smallest color not held by an already-colored
//! neighbor. Any visiting order yields a proper coloring with at most
//! `max_degree + 1` colors using the contiguous range `0..k`.
//!
//! # Usage
//!
//! ```
//! use u_timetable::coloring::{color_graph, strategies};
//! use u_timetable::models::ConflictGraph;
//!
//! let mut graph = ConflictGraph::with_vertices(["A", "B", "C", "D"]).unwrap();
//! for (a, b) in [("A", "B"), ("B", "C"), ("C", "D"), ("A", "D")] {
//!     graph.add_edge(a, b).unwrap();
//! }
//!
//! let (coloring, groups) = color_graph(&graph, &strategies::LargestFirst);
//! assert_eq!(coloring.color_of("A"), Some(0));
//! assert_eq!(coloring.color_of("B"), Some(1));
//! assert_eq!(groups.slot(1).unwrap(), &["A", "C"]);
//! assert_eq!(groups.slot(2).unwrap(), &["B", "D"]);
//! ```
//!
//! # References
//!
//! - Welsh & Powell (1967), "An upper bound for the chromatic number of a graph"
//! - Matula & Beck (1983), "Smallest-last ordering and clustering and graph coloring algorithms"

mod greedy;
pub mod strategies;

pub use greedy::{color_graph, color_in_order, GreedyColorer};

use crate::models::ConflictGraph;
use std::fmt::Debug;

/// A vertex-ordering heuristic for greedy coloring.
///
/// # Order Convention
/// `order` returns vertex insertion indices (positions in
/// [`ConflictGraph::vertices`]) in visiting order. It should be a
/// permutation of `0..vertex_count()`; the colorer tolerates and logs
/// malformed orders by skipping repeats and appending missed vertices.
pub trait OrderingStrategy: Send + Sync + Debug {
    /// Strategy name (e.g., "largest_first").
    fn name(&self) -> &'static str;

    /// Visiting order for `graph`.
    fn order(&self, graph: &ConflictGraph) -> Vec<usize>;

    /// Strategy description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
