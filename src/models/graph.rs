//! Conflict graph model.
//!
//! An undirected simple graph over named entities. Vertices keep their
//! insertion order, which is the stable tie-break used by the ordering
//! strategies. Edges are unordered pairs of distinct vertices; adding an
//! existing edge is a no-op and self-loops are rejected.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap, VecDeque};

use super::AdjacencyList;
use crate::error::{Result, TimetableError};

/// An undirected conflict graph.
///
/// Serializes as an [`AdjacencyList`] (vertex name → neighbor names).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "AdjacencyList", try_from = "AdjacencyList")]
pub struct ConflictGraph {
    vertices: Vec<String>,
    index: HashMap<String, usize>,
    adjacency: Vec<BTreeSet<usize>>,
    edge_count: usize,
}

impl ConflictGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an edgeless graph over the given vertices.
    ///
    /// # Errors
    /// `DuplicateVertex` if a name repeats.
    pub fn with_vertices<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut graph = Self::new();
        for name in names {
            graph.add_vertex(name)?;
        }
        Ok(graph)
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, name: impl Into<String>) -> Result<usize> {
        let name = name.into();
        if self.index.contains_key(&name) {
            return Err(TimetableError::DuplicateVertex { name });
        }
        let idx = self.vertices.len();
        self.index.insert(name.clone(), idx);
        self.vertices.push(name);
        self.adjacency.push(BTreeSet::new());
        Ok(idx)
    }

    /// Adds an undirected edge between two existing vertices.
    ///
    /// Returns `true` if the edge is new, `false` if it already existed.
    pub fn add_edge(&mut self, a: &str, b: &str) -> Result<bool> {
        let i = self.require(a)?;
        let j = self.require(b)?;
        if i == j {
            return Err(TimetableError::SelfLoop { name: a.to_string() });
        }
        Ok(self.link(i, j))
    }

    /// Index-based edge insertion. Callers guarantee `i != j` and both in range.
    pub(crate) fn link(&mut self, i: usize, j: usize) -> bool {
        debug_assert!(i != j, "self-loop on vertex index {i}");
        if self.adjacency[i].insert(j) {
            self.adjacency[j].insert(i);
            self.edge_count += 1;
            true
        } else {
            false
        }
    }

    fn require(&self, name: &str) -> Result<usize> {
        self.index_of(name)
            .ok_or_else(|| TimetableError::UnknownVertex {
                name: name.to_string(),
            })
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Whether the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Vertex names in insertion order.
    pub fn vertices(&self) -> &[String] {
        &self.vertices
    }

    /// Name of the vertex at `idx`.
    pub fn vertex(&self, idx: usize) -> Option<&str> {
        self.vertices.get(idx).map(|s| s.as_str())
    }

    /// Insertion index of a vertex.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Whether the vertex exists.
    pub fn contains_vertex(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Whether an edge joins `a` and `b`. Unknown names yield `false`.
    pub fn has_edge(&self, a: &str, b: &str) -> bool {
        match (self.index_of(a), self.index_of(b)) {
            (Some(i), Some(j)) => self.adjacency[i].contains(&j),
            _ => false,
        }
    }

    pub(crate) fn has_link(&self, i: usize, j: usize) -> bool {
        self.adjacency[i].contains(&j)
    }

    /// Degree of a vertex, or `None` if unknown.
    pub fn degree(&self, name: &str) -> Option<usize> {
        self.index_of(name).map(|i| self.adjacency[i].len())
    }

    /// Degree of the vertex at insertion index `idx`.
    ///
    /// # Panics
    /// If `idx >= vertex_count()`.
    pub fn degree_at(&self, idx: usize) -> usize {
        self.adjacency[idx].len()
    }

    /// Largest vertex degree (0 for an empty graph).
    pub fn max_degree(&self) -> usize {
        self.adjacency.iter().map(BTreeSet::len).max().unwrap_or(0)
    }

    /// Neighbors of a vertex in insertion order. Empty if the vertex is unknown.
    pub fn neighbors(&self, name: &str) -> impl Iterator<Item = &str> + '_ {
        self.index_of(name)
            .into_iter()
            .flat_map(move |i| self.adjacency[i].iter().map(move |&j| self.vertices[j].as_str()))
    }

    /// Insertion indices of the neighbors of vertex `idx`, ascending.
    ///
    /// # Panics
    /// If `idx >= vertex_count()`.
    pub fn neighbor_indices(&self, idx: usize) -> &BTreeSet<usize> {
        &self.adjacency[idx]
    }

    /// All edges as `(u, v)` with `u` inserted before `v`.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.adjacency.iter().enumerate().flat_map(move |(i, adj)| {
            adj.range(i + 1..)
                .map(move |&j| (self.vertices[i].as_str(), self.vertices[j].as_str()))
        })
    }

    /// Edge set with each pair normalized lexicographically.
    ///
    /// Order-independent: two graphs with the same conflicts compare equal
    /// regardless of vertex insertion order.
    pub fn edge_set(&self) -> BTreeSet<(String, String)> {
        self.edges()
            .map(|(a, b)| {
                if a <= b {
                    (a.to_string(), b.to_string())
                } else {
                    (b.to_string(), a.to_string())
                }
            })
            .collect()
    }

    /// Number of possible edges in a simple graph of this order.
    pub fn max_edge_count(&self) -> usize {
        complete_edge_count(self.vertex_count())
    }

    /// Edge density `|E| / (n(n-1)/2)`; 0.0 below two vertices.
    pub fn density(&self) -> f64 {
        let max = self.max_edge_count();
        if max == 0 {
            0.0
        } else {
            self.edge_count as f64 / max as f64
        }
    }

    /// Whether every vertex is reachable from every other (BFS).
    ///
    /// An empty graph is treated as connected.
    pub fn is_connected(&self) -> bool {
        if self.vertices.is_empty() {
            return true;
        }
        let mut visited = vec![false; self.vertices.len()];
        let mut queue = VecDeque::from([0]);
        visited[0] = true;
        let mut reached = 1;

        while let Some(v) = queue.pop_front() {
            for &next in &self.adjacency[v] {
                if !visited[next] {
                    visited[next] = true;
                    reached += 1;
                    queue.push_back(next);
                }
            }
        }

        reached == self.vertices.len()
    }

    /// Exports the graph as an adjacency list keyed by vertex name.
    pub fn to_adjacency(&self) -> AdjacencyList {
        let mut list = AdjacencyList::new();
        for (i, name) in self.vertices.iter().enumerate() {
            let neighbors = self.adjacency[i]
                .iter()
                .map(|&j| self.vertices[j].clone())
                .collect();
            list.insert(name.clone(), neighbors);
        }
        list
    }
}

/// `n(n-1)/2`.
pub(crate) fn complete_edge_count(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

impl From<ConflictGraph> for AdjacencyList {
    fn from(graph: ConflictGraph) -> Self {
        graph.to_adjacency()
    }
}

impl TryFrom<AdjacencyList> for ConflictGraph {
    type Error = TimetableError;

    /// Rebuilds a graph from an adjacency list.
    ///
    /// Keys become vertices in list order. Neighbors that never appear as a
    /// key are added as vertices when first referenced. One-sided entries
    /// are enough to create an edge; symmetric duplicates are merged. The
    /// list itself holds each key once, and deserializing it rejects
    /// documents that repeat a key.
    fn try_from(list: AdjacencyList) -> Result<Self> {
        let mut graph = ConflictGraph::new();
        for name in list.vertices() {
            graph.add_vertex(name.clone())?;
        }
        for (name, neighbors) in list.iter() {
            for neighbor in neighbors {
                if neighbor == name {
                    return Err(TimetableError::SelfLoop { name: name.clone() });
                }
                if !graph.contains_vertex(neighbor) {
                    graph.add_vertex(neighbor.clone())?;
                }
                graph.add_edge(name, neighbor)?;
            }
        }
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cycle4() -> ConflictGraph {
        let mut g = ConflictGraph::with_vertices(["A", "B", "C", "D"]).unwrap();
        g.add_edge("A", "B").unwrap();
        g.add_edge("B", "C").unwrap();
        g.add_edge("C", "D").unwrap();
        g.add_edge("A", "D").unwrap();
        g
    }

    #[test]
    fn test_add_vertex_and_edge() {
        let g = cycle4();
        assert_eq!(g.vertex_count(), 4);
        assert_eq!(g.edge_count(), 4);
        assert!(g.has_edge("A", "B"));
        assert!(g.has_edge("B", "A"));
        assert!(!g.has_edge("A", "C"));
        assert!(!g.has_edge("A", "Z"));
        assert_eq!(g.degree("A"), Some(2));
        assert_eq!(g.degree("Z"), None);
        assert_eq!(g.max_degree(), 2);
    }

    #[test]
    fn test_duplicate_edge_is_noop() {
        let mut g = cycle4();
        assert!(!g.add_edge("B", "A").unwrap());
        assert_eq!(g.edge_count(), 4);
        assert_eq!(g.degree("A"), Some(2));
    }

    #[test]
    fn test_rejects_self_loop_and_unknown() {
        let mut g = cycle4();
        assert_eq!(
            g.add_edge("A", "A"),
            Err(TimetableError::SelfLoop { name: "A".into() })
        );
        assert_eq!(
            g.add_edge("A", "Q"),
            Err(TimetableError::UnknownVertex { name: "Q".into() })
        );
    }

    #[test]
    fn test_duplicate_vertex() {
        let err = ConflictGraph::with_vertices(["A", "B", "A"]).unwrap_err();
        assert_eq!(err, TimetableError::DuplicateVertex { name: "A".into() });
    }

    #[test]
    fn test_neighbors_in_insertion_order() {
        let g = cycle4();
        let n: Vec<&str> = g.neighbors("A").collect();
        assert_eq!(n, vec!["B", "D"]);
        assert_eq!(g.neighbors("missing").count(), 0);
    }

    #[test]
    fn test_edges_listed_once() {
        let g = cycle4();
        let edges: Vec<(&str, &str)> = g.edges().collect();
        assert_eq!(edges, vec![("A", "B"), ("A", "D"), ("B", "C"), ("C", "D")]);
    }

    #[test]
    fn test_connectivity() {
        let mut g = ConflictGraph::with_vertices(["A", "B", "C"]).unwrap();
        assert!(!g.is_connected());
        g.add_edge("A", "B").unwrap();
        assert!(!g.is_connected());
        g.add_edge("C", "B").unwrap();
        assert!(g.is_connected());

        assert!(ConflictGraph::new().is_connected());
        assert!(ConflictGraph::with_vertices(["solo"]).unwrap().is_connected());
    }

    #[test]
    fn test_density() {
        let g = cycle4();
        assert_eq!(g.max_edge_count(), 6);
        assert!((g.density() - 4.0 / 6.0).abs() < 1e-10);
        assert!((ConflictGraph::new().density() - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_adjacency_round_trip() {
        let g = cycle4();
        let list = g.to_adjacency();
        assert_eq!(list.get("A").unwrap(), &vec!["B".to_string(), "D".to_string()]);

        let rebuilt = ConflictGraph::try_from(list).unwrap();
        assert_eq!(rebuilt.vertices(), g.vertices());
        assert_eq!(rebuilt.edge_set(), g.edge_set());
        assert_eq!(rebuilt, g);
    }

    #[test]
    fn test_adjacency_one_sided_and_implicit_vertices() {
        let mut list = AdjacencyList::new();
        list.insert("A".into(), vec!["B".into(), "C".into()]);
        list.insert("B".into(), vec![]);

        let g = ConflictGraph::try_from(list).unwrap();
        assert_eq!(g.vertices(), &["A", "B", "C"]);
        assert_eq!(g.edge_count(), 2);
        assert!(g.has_edge("B", "A"));
    }

    #[test]
    fn test_adjacency_self_loop_rejected() {
        let mut list = AdjacencyList::new();
        list.insert("A".into(), vec!["A".into()]);
        assert_eq!(
            ConflictGraph::try_from(list),
            Err(TimetableError::SelfLoop { name: "A".into() })
        );
    }

    #[test]
    fn test_serde_as_adjacency_object() {
        let g = cycle4();
        let json = serde_json::to_string(&g).unwrap();
        assert_eq!(
            json,
            r#"{"A":["B","D"],"B":["A","C"],"C":["B","D"],"D":["A","C"]}"#
        );

        let back: ConflictGraph = serde_json::from_str(&json).unwrap();
        assert_eq!(back.edge_set(), g.edge_set());
    }

    #[test]
    fn test_serde_rejects_self_loop() {
        let result: std::result::Result<ConflictGraph, _> =
            serde_json::from_str(r#"{"A":["A"]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_serde_rejects_repeated_vertex_key() {
        let result: std::result::Result<ConflictGraph, _> =
            serde_json::from_str(r#"{"A":["B"],"A":["C"]}"#);
        assert!(result.is_err());
    }
}
