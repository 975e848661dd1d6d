//! Adjacency-list exchange format.
//!
//! The shape persistence layers store: each vertex name mapped to the
//! names of its neighbors. Key order follows vertex insertion order so an
//! export → import cycle reproduces the same graph, tie-breaks included.

use std::fmt;

use indexmap::IndexMap;
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// Vertex name → neighbor names.
///
/// Serializes as a plain JSON object, e.g. `{"A": ["B"], "B": ["A"]}`.
/// Deserializing a document that repeats a vertex key fails instead of
/// keeping only the last entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AdjacencyList(IndexMap<String, Vec<String>>);

impl AdjacencyList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the neighbors of a vertex, replacing any previous entry.
    pub fn insert(&mut self, vertex: String, neighbors: Vec<String>) {
        self.0.insert(vertex, neighbors);
    }

    /// Neighbors recorded for a vertex.
    pub fn get(&self, vertex: &str) -> Option<&Vec<String>> {
        self.0.get(vertex)
    }

    /// Number of keyed vertices.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the list has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Keyed vertex names in order.
    pub fn vertices(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    /// Entries in order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.0.iter()
    }
}

impl FromIterator<(String, Vec<String>)> for AdjacencyList {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'de> Deserialize<'de> for AdjacencyList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(AdjacencyVisitor)
    }
}

struct AdjacencyVisitor;

impl<'de> Visitor<'de> for AdjacencyVisitor {
    type Value = AdjacencyList;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of vertex names to neighbor lists")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut entries = IndexMap::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((vertex, neighbors)) = map.next_entry::<String, Vec<String>>()? {
            if entries.contains_key(&vertex) {
                return Err(de::Error::custom(format!("duplicate vertex key '{vertex}'")));
            }
            entries.insert(vertex, neighbors);
        }
        Ok(AdjacencyList(entries))
    }
}
