//! Edge-generation settings for the graph builder.

use serde::{Deserialize, Serialize};

/// Inclusive range of total edge counts from which a target is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeCountRange {
    /// Lower bound (inclusive).
    pub min: usize,
    /// Upper bound (inclusive).
    pub max: usize,
}

impl EdgeCountRange {
    /// Creates a range. Inverted ranges are rejected at build time.
    pub fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    /// `[n, 2n]` for `n` entities.
    pub fn proportional(n: usize) -> Self {
        Self {
            min: n,
            max: n.saturating_mul(2),
        }
    }

    /// Whether `count` lies within the range.
    pub fn contains(&self, count: usize) -> bool {
        (self.min..=self.max).contains(&count)
    }
}

/// How conflict edges are added on top of the path backbone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum EdgeModel {
    /// Draw a total edge count uniformly from the range (default `[n, 2n]`
    /// when `None`) and add random distinct pairs until it is reached.
    RandomEdgeCount(Option<EdgeCountRange>),
    /// Link every pair independently with the given probability.
    PairwiseProbability(f64),
}

impl Default for EdgeModel {
    fn default() -> Self {
        Self::RandomEdgeCount(None)
    }
}
