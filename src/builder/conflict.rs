//! Connected conflict-graph synthesis.
//!
//! # Algorithm
//!
//! 1. Link consecutive entities in input order (path backbone). This alone
//!    makes the graph connected.
//! 2. Add random conflict edges according to the [`EdgeModel`]:
//!    - `RandomEdgeCount`: draw a target total edge count, then sample
//!      distinct pairs, skipping existing edges. Rejection sampling runs
//!      under an attempt budget; once spent, the remaining edges are drawn
//!      without replacement from the explicit non-adjacent pair list.
//!    - `PairwiseProbability`: link each pair with probability `p`.
//! 3. Verify connectivity by BFS.
//!
//! # Complexity
//! O(budget + n²) worst case; typical sparse targets finish in O(n).

use rand::prelude::IndexedRandom;
use rand::seq::index;
use rand::Rng;
use tracing::{debug, error, trace};

use super::{EdgeCountRange, EdgeModel};
use crate::error::{Result, TimetableError};
use crate::models::{complete_edge_count, ConflictGraph};
use crate::validation::validate_input;

/// Rejection-sampling attempts allowed per target edge.
const DEFAULT_ATTEMPTS_PER_EDGE: usize = 32;

/// Builds connected conflict graphs over named entities.
///
/// # Example
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use u_timetable::builder::GraphBuilder;
/// use u_timetable::models::EntityNames;
///
/// let subjects = EntityNames::subjects(20);
/// let mut rng = StdRng::seed_from_u64(7);
/// let graph = GraphBuilder::new().build(&subjects, &mut rng).unwrap();
///
/// assert!(graph.is_connected());
/// assert!((19..=40).contains(&graph.edge_count()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    model: EdgeModel,
    max_attempts: Option<usize>,
}

impl GraphBuilder {
    /// Creates a builder using the default `[n, 2n]` edge-count model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the edge model.
    pub fn with_model(mut self, model: EdgeModel) -> Self {
        self.model = model;
        self
    }

    /// Uses a fixed edge-count range instead of `[n, 2n]`.
    pub fn with_edge_count_range(mut self, range: EdgeCountRange) -> Self {
        self.model = EdgeModel::RandomEdgeCount(Some(range));
        self
    }

    /// Caps rejection-sampling attempts before switching to explicit
    /// candidate enumeration. Defaults to 32 per target edge.
    pub fn with_max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = Some(attempts);
        self
    }

    /// The configured edge model.
    pub fn model(&self) -> &EdgeModel {
        &self.model
    }

    /// Builds a connected conflict graph.
    ///
    /// # Errors
    /// - `InvalidInput` for empty or duplicate entities, or a malformed model.
    /// - `InvariantViolation` if the result is disconnected (never expected).
    pub fn build<S, R>(&self, entities: &[S], rng: &mut R) -> Result<ConflictGraph>
    where
        S: AsRef<str>,
        R: Rng,
    {
        validate_input(entities, &self.model)?;

        let mut graph = ConflictGraph::with_vertices(entities.iter().map(|e| e.as_ref()))?;
        let n = graph.vertex_count();

        for i in 1..n {
            graph.link(i - 1, i);
        }
        trace!(entities = n, backbone = graph.edge_count(), "backbone linked");

        match self.model {
            EdgeModel::RandomEdgeCount(range) => {
                let range = range.unwrap_or_else(|| EdgeCountRange::proportional(n));
                let drawn = rng.random_range(range.min..=range.max);
                let target = drawn.min(complete_edge_count(n));
                debug!(entities = n, drawn, target, "sampling conflict edges");
                self.add_random_edges(&mut graph, target, rng);
            }
            EdgeModel::PairwiseProbability(p) => {
                debug!(entities = n, probability = p, "linking pairs");
                add_pairwise_edges(&mut graph, p, rng);
            }
        }

        let connected = graph.is_connected();
        debug_assert!(connected, "path backbone must keep the graph connected");
        if !connected {
            error!(
                vertices = graph.vertex_count(),
                edges = graph.edge_count(),
                "conflict graph is disconnected despite backbone"
            );
            return Err(TimetableError::invariant(
                "built conflict graph is not connected",
            ));
        }

        debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "conflict graph built"
        );
        Ok(graph)
    }

    fn add_random_edges<R: Rng>(&self, graph: &mut ConflictGraph, target: usize, rng: &mut R) {
        let n = graph.vertex_count();
        let budget = self
            .max_attempts
            .unwrap_or_else(|| target.saturating_mul(DEFAULT_ATTEMPTS_PER_EDGE));

        let mut attempts = 0;
        while graph.edge_count() < target && attempts < budget {
            attempts += 1;
            let pair = index::sample(rng, n, 2);
            graph.link(pair.index(0), pair.index(1));
        }

        if graph.edge_count() >= target {
            trace!(attempts, "target reached by rejection sampling");
            return;
        }

        let missing = target - graph.edge_count();
        debug!(
            attempts,
            missing, "attempt budget spent, sampling from candidate pairs"
        );
        let candidates: Vec<(usize, usize)> = (0..n)
            .flat_map(|i| (i + 1..n).map(move |j| (i, j)))
            .filter(|&(i, j)| !graph.has_link(i, j))
            .collect();
        let chosen: Vec<(usize, usize)> = candidates
            .choose_multiple(rng, missing)
            .copied()
            .collect();
        for (i, j) in chosen {
            graph.link(i, j);
        }
    }
}

fn add_pairwise_edges<R: Rng>(graph: &mut ConflictGraph, probability: f64, rng: &mut R) {
    let n = graph.vertex_count();
    for i in 0..n {
        for j in i + 1..n {
            if rng.random_bool(probability) {
                graph.link(i, j);
            }
        }
    }
}

/// Builds a connected conflict graph with the default builder settings.
///
/// `edge_count_range` defaults to `[n, 2n]` when `None`.
pub fn build_conflict_graph<S, R>(
    entities: &[S],
    edge_count_range: Option<EdgeCountRange>,
    rng: &mut R,
) -> Result<ConflictGraph>
where
    S: AsRef<str>,
    R: Rng,
{
    GraphBuilder::new()
        .with_model(EdgeModel::RandomEdgeCount(edge_count_range))
        .build(entities, rng)
}
