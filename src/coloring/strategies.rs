//! Built-in vertex orderings.
//!
//! # Strategies
//!
//! - **LargestFirst**: descending degree (Welsh-Powell)
//! - **SmallestLast**: reverse of repeated minimum-degree removal
//! - **InsertionOrder**: the graph's own vertex order
//!
//! Ties are broken by insertion index so every ordering is deterministic.

use std::cmp::Reverse;

use super::OrderingStrategy;
use crate::models::ConflictGraph;

/// Largest degree first.
///
/// Sorts vertices by descending degree with a stable sort, so vertices of
/// equal degree keep their insertion order. Tends to use fewer colors than
/// an arbitrary order; no optimality guarantee.
///
/// # Reference
/// Welsh & Powell (1967)
#[derive(Debug, Clone, Copy, Default)]
pub struct LargestFirst;

impl OrderingStrategy for LargestFirst {
    fn name(&self) -> &'static str {
        "largest_first"
    }

    fn order(&self, graph: &ConflictGraph) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..graph.vertex_count()).collect();
        indices.sort_by_key(|&i| Reverse(graph.degree_at(i)));
        indices
    }

    fn description(&self) -> &'static str {
        "Largest degree first"
    }
}

/// Smallest degree last.
///
/// Repeatedly removes a vertex of minimum remaining degree (lowest
/// insertion index on ties) and colors in reverse removal order. Uses at
/// most `degeneracy + 1` colors.
///
/// # Reference
/// Matula & Beck (1983)
#[derive(Debug, Clone, Copy, Default)]
pub struct SmallestLast;

impl OrderingStrategy for SmallestLast {
    fn name(&self) -> &'static str {
        "smallest_last"
    }

    fn order(&self, graph: &ConflictGraph) -> Vec<usize> {
        let n = graph.vertex_count();
        let mut degree: Vec<usize> = (0..n).map(|i| graph.degree_at(i)).collect();
        let mut removed = vec![false; n];
        let mut order = Vec::with_capacity(n);

        for _ in 0..n {
            let Some(v) = (0..n).filter(|&i| !removed[i]).min_by_key(|&i| degree[i]) else {
                break;
            };
            removed[v] = true;
            order.push(v);
            for &u in graph.neighbor_indices(v) {
                if !removed[u] {
                    degree[u] -= 1;
                }
            }
        }

        order.reverse();
        order
    }

    fn description(&self) -> &'static str {
        "Smallest degree last"
    }
}

/// Vertices in insertion order.
#[derive(Debug, Clone, Copy, Default)]
pub struct InsertionOrder;

impl OrderingStrategy for InsertionOrder {
    fn name(&self) -> &'static str {
        "insertion_order"
    }

    fn order(&self, graph: &ConflictGraph) -> Vec<usize> {
        (0..graph.vertex_count()).collect()
    }

    fn description(&self) -> &'static str {
        "Graph insertion order"
    }
}
