//! Conflict-graph construction.
//!
//! Synthesizes connected conflict graphs over named entities for
//! timetabling experiments: a path backbone guarantees connectivity and
//! random conflict edges are layered on top.
//!
//! # Edge models
//!
//! | Model | Extra edges |
//! |-------|-------------|
//! | `RandomEdgeCount` | Total edge count drawn from `[n, 2n]` (or a custom range) |
//! | `PairwiseProbability` | Each pair linked independently with probability `p` |
//!
//! Randomness comes from the caller's `Rng`, so a seeded generator
//! reproduces the same graph.

mod config;
mod conflict;

pub use config::{EdgeCountRange, EdgeModel};
pub use conflict::{build_conflict_graph, GraphBuilder};
