//! Coloring (solution) model.
//!
//! A coloring maps each vertex to a 0-based color index. Slot groups
//! invert it into 1-based time slots, each listing the entities that can
//! be scheduled together.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashSet};

use super::ConflictGraph;

/// Vertex → color index.
///
/// Iteration order is assignment order (for greedy colorings, the order in
/// which vertices were processed).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Coloring {
    colors: IndexMap<String, usize>,
}

impl Coloring {
    /// Creates an empty coloring.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns a color, replacing any previous one for the vertex.
    pub fn assign(&mut self, vertex: impl Into<String>, color: usize) {
        self.colors.insert(vertex.into(), color);
    }

    /// Color of a vertex.
    pub fn color_of(&self, vertex: &str) -> Option<usize> {
        self.colors.get(vertex).copied()
    }

    /// Number of colored vertices.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether nothing is colored.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// `(vertex, color)` pairs in assignment order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.colors.iter().map(|(v, &c)| (v.as_str(), c))
    }

    /// Number of distinct colors used.
    pub fn color_count(&self) -> usize {
        self.colors.values().collect::<HashSet<_>>().len()
    }

    /// Highest color index, if any vertex is colored.
    pub fn max_color(&self) -> Option<usize> {
        self.colors.values().copied().max()
    }

    /// Whether the used colors are exactly `0..color_count()`.
    pub fn is_contiguous(&self) -> bool {
        match self.max_color() {
            None => true,
            Some(max) => max + 1 == self.color_count(),
        }
    }

    /// Edges whose endpoints share a color.
    pub fn conflicts(&self, graph: &ConflictGraph) -> Vec<(String, String)> {
        graph
            .edges()
            .filter(|(a, b)| match (self.color_of(a), self.color_of(b)) {
                (Some(ca), Some(cb)) => ca == cb,
                _ => false,
            })
            .map(|(a, b)| (a.to_string(), b.to_string()))
            .collect()
    }

    /// Whether every vertex of `graph` is colored and no edge is monochrome.
    pub fn is_proper(&self, graph: &ConflictGraph) -> bool {
        graph.vertices().iter().all(|v| self.colors.contains_key(v))
            && self.conflicts(graph).is_empty()
    }

    /// Inverts the coloring into 1-based slot groups.
    pub fn groups(&self) -> SlotGroups {
        let mut groups: BTreeMap<usize, Vec<String>> = BTreeMap::new();
        for (vertex, &color) in &self.colors {
            groups.entry(color + 1).or_default().push(vertex.clone());
        }
        SlotGroups { groups }
    }
}

/// Slot number (color + 1) → entities sharing that slot.
///
/// Member lists keep the coloring's assignment order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotGroups {
    groups: BTreeMap<usize, Vec<String>>,
}

impl SlotGroups {
    /// Members of a 1-based slot.
    pub fn slot(&self, number: usize) -> Option<&[String]> {
        self.groups.get(&number).map(|v| v.as_slice())
    }

    /// Slot number holding a vertex.
    pub fn slot_of(&self, vertex: &str) -> Option<usize> {
        self.groups
            .iter()
            .find(|(_, members)| members.iter().any(|m| m == vertex))
            .map(|(&slot, _)| slot)
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether there are no slots.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// `(slot, members)` in ascending slot order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[String])> {
        self.groups.iter().map(|(&k, v)| (k, v.as_slice()))
    }

    /// Slot → member count.
    pub fn sizes(&self) -> BTreeMap<usize, usize> {
        self.groups.iter().map(|(&k, v)| (k, v.len())).collect()
    }

    /// Total members across all slots.
    pub fn member_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Whether the slots cover every vertex of `graph` exactly once.
    pub fn is_partition_of(&self, graph: &ConflictGraph) -> bool {
        let mut seen = BTreeSet::new();
        for member in self.groups.values().flatten() {
            if !graph.contains_vertex(member) || !seen.insert(member.as_str()) {
                return false;
            }
        }
        seen.len() == graph.vertex_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> ConflictGraph {
        let mut g = ConflictGraph::with_vertices(["X", "Y", "Z"]).unwrap();
        g.add_edge("X", "Y").unwrap();
        g.add_edge("Y", "Z").unwrap();
        g.add_edge("X", "Z").unwrap();
        g
    }

    #[test]
    fn test_proper_and_conflicts() {
        let g = triangle();
        let mut c = Coloring::new();
        c.assign("X", 0);
        c.assign("Y", 1);
        c.assign("Z", 2);
        assert!(c.is_proper(&g));
        assert!(c.conflicts(&g).is_empty());

        c.assign("Z", 0);
        assert!(!c.is_proper(&g));
        assert_eq!(c.conflicts(&g), vec![("X".to_string(), "Z".to_string())]);
    }

    #[test]
    fn test_missing_vertex_not_proper() {
        let g = triangle();
        let mut c = Coloring::new();
        c.assign("X", 0);
        c.assign("Y", 1);
        assert!(c.conflicts(&g).is_empty());
        assert!(!c.is_proper(&g));
    }

    #[test]
    fn test_color_count_and_contiguity() {
        let mut c = Coloring::new();
        assert!(c.is_contiguous());
        assert_eq!(c.max_color(), None);

        c.assign("A", 0);
        c.assign("B", 2);
        c.assign("C", 0);
        assert_eq!(c.color_count(), 2);
        assert_eq!(c.max_color(), Some(2));
        assert!(!c.is_contiguous());

        c.assign("D", 1);
        assert!(c.is_contiguous());
    }

    #[test]
    fn test_groups_are_one_based_and_ordered() {
        let mut c = Coloring::new();
        c.assign("B", 1);
        c.assign("A", 0);
        c.assign("D", 1);
        c.assign("C", 0);

        let groups = c.groups();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups.slot(1).unwrap(), &["A", "C"]);
        assert_eq!(groups.slot(2).unwrap(), &["B", "D"]);
        assert_eq!(groups.slot(0), None);
        assert_eq!(groups.slot_of("D"), Some(2));
        assert_eq!(groups.slot_of("nobody"), None);
        assert_eq!(groups.member_count(), 4);
        assert_eq!(groups.sizes(), BTreeMap::from([(1, 2), (2, 2)]));
    }

    #[test]
    fn test_partition_check() {
        let g = triangle();
        let mut c = Coloring::new();
        c.assign("X", 0);
        c.assign("Y", 1);
        assert!(!c.groups().is_partition_of(&g));

        c.assign("Z", 2);
        assert!(c.groups().is_partition_of(&g));

        c.assign("W", 0);
        assert!(!c.groups().is_partition_of(&g));
    }

    #[test]
    fn test_empty_coloring() {
        let c = Coloring::new();
        assert!(c.is_empty());
        assert!(c.groups().is_empty());
        assert!(c.is_proper(&ConflictGraph::new()));
        assert!(c.groups().is_partition_of(&ConflictGraph::new()));
    }

    #[test]
    fn test_groups_serialize_with_slot_keys() {
        let mut c = Coloring::new();
        c.assign("L1", 0);
        c.assign("L2", 1);
        let json = serde_json::to_string(&c.groups()).unwrap();
        assert_eq!(json, r#"{"1":["L1"],"2":["L2"]}"#);
    }
}
