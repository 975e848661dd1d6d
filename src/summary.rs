//! Timetable quality summary.
//!
//! Condenses a colored conflict graph into the figures a report or chart
//! needs.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Slot count | Number of colors used |
//! | Group sizes | Entities per slot |
//! | Largest / smallest group | Extremes of group sizes |
//! | Greedy bound | `max_degree + 1` |
//! | Density | Edges over possible edges |

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{ConflictGraph, SlotGroups};

/// Summary of a timetable produced from a conflict graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimetableSummary {
    /// Number of entities.
    pub entity_count: usize,
    /// Number of conflict edges.
    pub conflict_count: usize,
    /// Number of slots (colors) used.
    pub slot_count: usize,
    /// Entities per slot, keyed by 1-based slot number.
    pub group_sizes: BTreeMap<usize, usize>,
    /// Size of the largest slot (0 if none).
    pub largest_group: usize,
    /// Size of the smallest slot (0 if none).
    pub smallest_group: usize,
    /// Largest vertex degree.
    pub max_degree: usize,
    /// Greedy upper bound on the slot count: `max_degree + 1`
    /// (0 for an empty graph).
    pub greedy_bound: usize,
    /// Edge density (0.0..1.0).
    pub density: f64,
}

impl TimetableSummary {
    /// Computes the summary from a graph and its slot groups.
    pub fn calculate(graph: &ConflictGraph, groups: &SlotGroups) -> Self {
        let group_sizes = groups.sizes();
        let largest_group = group_sizes.values().copied().max().unwrap_or(0);
        let smallest_group = group_sizes.values().copied().min().unwrap_or(0);
        let max_degree = graph.max_degree();
        let greedy_bound = if graph.is_empty() { 0 } else { max_degree + 1 };

        Self {
            entity_count: graph.vertex_count(),
            conflict_count: graph.edge_count(),
            slot_count: groups.len(),
            group_sizes,
            largest_group,
            smallest_group,
            max_degree,
            greedy_bound,
            density: graph.density(),
        }
    }

    /// Whether the slot count respects the greedy bound.
    pub fn within_greedy_bound(&self) -> bool {
        self.slot_count <= self.greedy_bound
    }

    /// Mean entities per slot (0.0 if no slots).
    pub fn average_group_size(&self) -> f64 {
        if self.slot_count == 0 {
            0.0
        } else {
            self.entity_count as f64 / self.slot_count as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coloring::{color_graph, strategies::LargestFirst};

    #[test]
    fn test_summary_cycle() {
        let mut g = ConflictGraph::with_vertices(["A", "B", "C", "D"]).unwrap();
        g.add_edge("A", "B").unwrap();
        g.add_edge("B", "C").unwrap();
        g.add_edge("C", "D").unwrap();
        g.add_edge("A", "D").unwrap();
        let (_, groups) = color_graph(&g, &LargestFirst);

        let summary = TimetableSummary::calculate(&g, &groups);
        assert_eq!(summary.entity_count, 4);
        assert_eq!(summary.conflict_count, 4);
        assert_eq!(summary.slot_count, 2);
        assert_eq!(summary.group_sizes, BTreeMap::from([(1, 2), (2, 2)]));
        assert_eq!(summary.largest_group, 2);
        assert_eq!(summary.smallest_group, 2);
        assert_eq!(summary.max_degree, 2);
        assert_eq!(summary.greedy_bound, 3);
        assert!(summary.within_greedy_bound());
        assert!((summary.average_group_size() - 2.0).abs() < 1e-10);
        assert!((summary.density - 4.0 / 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_summary_uneven_groups() {
        let mut g = ConflictGraph::with_vertices(["Hub", "L1", "L2", "L3"]).unwrap();
        g.add_edge("Hub", "L1").unwrap();
        g.add_edge("Hub", "L2").unwrap();
        g.add_edge("Hub", "L3").unwrap();
        let (_, groups) = color_graph(&g, &LargestFirst);

        let summary = TimetableSummary::calculate(&g, &groups);
        assert_eq!(summary.slot_count, 2);
        assert_eq!(summary.largest_group, 3);
        assert_eq!(summary.smallest_group, 1);
    }

    #[test]
    fn test_summary_empty() {
        let g = ConflictGraph::new();
        let (_, groups) = color_graph(&g, &LargestFirst);
        let summary = TimetableSummary::calculate(&g, &groups);
        assert_eq!(summary.slot_count, 0);
        assert_eq!(summary.greedy_bound, 0);
        assert_eq!(summary.largest_group, 0);
        assert!(summary.within_greedy_bound());
        assert!((summary.average_group_size() - 0.0).abs() < 1e-10);
    }
}
