use tracing::debug;

use super::*;
use crate::{
    error::ParameterError,
    utils::{check_probability, geometric::SkipSampler},
};

/// `G(n,p)` graphs contain every loop-free edge of `n` nodes with probability `p`
/// independent from each other.
///
/// Instead of flipping a coin per node pair, the loop-free edge space is enumerated by index
/// (see [`Edge::from_index_directed`] and [`Edge::from_index_undirected`]) and the selected
/// indices are drawn by geometric jumps, so generation runs in `O(n + m)` expected time.
///
/// An unset probability defaults to `0`, i.e. an edgeless graph.
#[derive(Debug, Copy, Clone, Default)]
pub struct Gnp {
    n: NumNodes,
    p: f64,
    directed: bool,
}

impl Gnp {
    /// Creates a new empty `G(n,p)` generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates `p`; fails if `prob` is not in `[0, 1]`
    pub fn prob(mut self, prob: f64) -> Result<Self, ParameterError> {
        self.p = check_probability("edge probability", prob)?;
        Ok(self)
    }
}

impl NumNodesGen for Gnp {
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }
}

impl DirectedGen for Gnp {
    fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }
}

impl NamedGenerator for Gnp {
    fn name(&self) -> &str {
        "Edge Probability (G(n,p))"
    }
}

impl GraphGenerator for Gnp {
    fn generate<R>(&self, rng: &mut R) -> Graph
    where
        R: Rng,
    {
        let n = self.n as u64;
        let end = Edge::max_loopless(self.n, self.directed);

        let edges: Vec<Edge> = SkipSampler::new(self.p, end)
            .iter(rng)
            .map(|x| {
                if self.directed {
                    Edge::from_index_directed(x, n)
                } else {
                    Edge::from_index_undirected(x, n)
                }
            })
            .collect();

        debug!(n = self.n, p = self.p, m = edges.len(), "generated G(n,p) graph");
        Graph::from_edges(self.directed, self.n, edges)
    }
}
