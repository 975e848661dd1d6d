//! Greedy sequential coloring engine.
//!
//! # Algorithm
//!
//! 1. Ask the ordering strategy for a visiting order.
//! 2. For each vertex, mark colors held by already-colored neighbors.
//! 3. Assign the smallest unmarked color.
//! 4. Invert the coloring into 1-based slot groups.
//!
//! A vertex of degree `d` sees at most `d` neighbor colors, so a free color
//! exists in `0..=d`. This gives the `max_degree + 1` bound.
//!
//! # Complexity
//! O(V + E) after ordering.

use std::sync::Arc;

use tracing::{debug, trace, warn};

use super::strategies::LargestFirst;
use super::OrderingStrategy;
use crate::models::{Coloring, ConflictGraph, SlotGroups};

/// Greedy colorer with a configurable ordering strategy.
///
/// Defaults to [`LargestFirst`].
///
/// # Example
/// ```
/// use u_timetable::coloring::{strategies, GreedyColorer};
/// use u_timetable::models::ConflictGraph;
///
/// let mut graph = ConflictGraph::with_vertices(["L1", "L2", "L3"]).unwrap();
/// graph.add_edge("L1", "L2").unwrap();
///
/// let colorer = GreedyColorer::new().with_strategy(strategies::SmallestLast);
/// let (coloring, groups) = colorer.color(&graph);
/// assert!(coloring.is_proper(&graph));
/// assert_eq!(groups.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct GreedyColorer {
    strategy: Arc<dyn OrderingStrategy>,
}

impl GreedyColorer {
    /// Creates a largest-first colorer.
    pub fn new() -> Self {
        Self {
            strategy: Arc::new(LargestFirst),
        }
    }

    /// Sets the ordering strategy.
    pub fn with_strategy<S: OrderingStrategy + 'static>(mut self, strategy: S) -> Self {
        self.strategy = Arc::new(strategy);
        self
    }

    /// The active strategy.
    pub fn strategy(&self) -> &dyn OrderingStrategy {
        self.strategy.as_ref()
    }

    /// Colors `graph` and groups its vertices into slots.
    pub fn color(&self, graph: &ConflictGraph) -> (Coloring, SlotGroups) {
        color_graph(graph, self.strategy.as_ref())
    }
}

impl Default for GreedyColorer {
    fn default() -> Self {
        Self::new()
    }
}

/// Colors `graph` with the given ordering strategy.
///
/// Returns the coloring (in visiting order) and its 1-based slot groups.
/// An empty graph yields an empty coloring and no slots.
pub fn color_graph<S>(graph: &ConflictGraph, strategy: &S) -> (Coloring, SlotGroups)
where
    S: OrderingStrategy + ?Sized,
{
    let order = strategy.order(graph);
    let coloring = color_in_order(graph, &order);
    let groups = coloring.groups();
    debug!(
        strategy = strategy.name(),
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        colors = groups.len(),
        "graph colored"
    );
    (coloring, groups)
}

/// Greedy coloring along an explicit visiting order.
///
/// Out-of-range and repeated indices are skipped; vertices the order never
/// mentions are colored afterwards in insertion order.
pub fn color_in_order(graph: &ConflictGraph, order: &[usize]) -> Coloring {
    let n = graph.vertex_count();
    let mut colors: Vec<Option<usize>> = vec![None; n];
    let mut coloring = Coloring::new();
    let mut taken: Vec<bool> = Vec::new();

    let mut visited = 0usize;
    for &v in order {
        if v < n && colors[v].is_none() {
            assign_smallest_free(graph, v, &mut colors, &mut taken, &mut coloring);
            visited += 1;
        }
    }

    if visited != n || order.len() != n {
        warn!(
            expected = n,
            received = order.len(),
            distinct = visited,
            "visiting order was not a permutation"
        );
        for v in 0..n {
            if colors[v].is_none() {
                assign_smallest_free(graph, v, &mut colors, &mut taken, &mut coloring);
            }
        }
    }

    coloring
}

fn assign_smallest_free(
    graph: &ConflictGraph,
    v: usize,
    colors: &mut [Option<usize>],
    taken: &mut Vec<bool>,
    coloring: &mut Coloring,
) {
    let degree = graph.degree_at(v);
    taken.clear();
    taken.resize(degree + 1, false);
    for &u in graph.neighbor_indices(v) {
        if let Some(c) = colors[u] {
            if c <= degree {
                taken[c] = true;
            }
        }
    }
    let color = taken.iter().position(|&t| !t).unwrap_or(degree);

    let name = &graph.vertices()[v];
    trace!(vertex = name.as_str(), color, "colored");
    colors[v] = Some(color);
    coloring.assign(name.clone(), color);
}
