use fxhash::FxHashSet;
use tracing::{debug, warn};

use super::*;
use crate::{error::ParameterError, utils::check_probability};

/// Watts–Strogatz small-world graphs.
///
/// Starts from an undirected ring lattice in which every node is connected to its `k/2`
/// nearest neighbors on either side. Then every lattice edge `(u, v)`, taken in order of
/// increasing offset `v - u`, is rewired with probability `beta` to `(u, w)` for a uniformly
/// chosen `w` that creates neither a self-loop nor a parallel edge. If `u` is already adjacent
/// to all other nodes, the edge is kept as it is.
///
/// Rewiring never changes the number of edges `n * k / 2`.
#[derive(Debug, Copy, Clone)]
pub struct WattsStrogatz {
    n: NumNodes,
    k: NumNodes,
    beta: f64,
}

impl WattsStrogatz {
    /// Creates a generator over `n` nodes with ring degree `k` and no rewiring.
    ///
    /// Odd `k` are rounded down to the next even number. Fails if the resulting `k` is
    /// positive but not smaller than `n`.
    pub fn new(n: NumNodes, k: NumNodes) -> Result<Self, ParameterError> {
        let k = k - k % 2;
        if k > 0 && k >= n {
            return Err(ParameterError::RingDegreeTooLarge { k, n });
        }
        Ok(Self { n, k, beta: 0.0 })
    }

    /// Sets the probability of rewiring each lattice edge
    pub fn rewiring_prob(mut self, beta: f64) -> Result<Self, ParameterError> {
        self.beta = check_probability("rewiring probability", beta)?;
        Ok(self)
    }

    /// The (even) lattice degree
    pub fn ring_degree(&self) -> NumNodes {
        self.k
    }
}

impl NamedGenerator for WattsStrogatz {
    fn name(&self) -> &str {
        "Watts-Strogatz"
    }
}

impl GraphGenerator for WattsStrogatz {
    fn generate<R>(&self, rng: &mut R) -> Graph
    where
        R: Rng,
    {
        let n = self.n;
        let mut adj: Vec<FxHashSet<Node>> = vec![FxHashSet::default(); n as usize];
        for offset in 1..=self.k / 2 {
            for u in 0..n {
                let v = (u + offset) % n;
                adj[u as usize].insert(v);
                adj[v as usize].insert(u);
            }
        }

        let mut rewired = 0usize;
        let mut skipped = 0usize;
        for offset in 1..=self.k / 2 {
            for u in 0..n {
                if !rng.random_bool(self.beta) {
                    continue;
                }
                if adj[u as usize].len() + 1 >= n as usize {
                    skipped += 1;
                    continue;
                }

                let w = loop {
                    let w = rng.random_range(0..n);
                    if w != u && !adj[u as usize].contains(&w) {
                        break w;
                    }
                };

                let v = (u + offset) % n;
                adj[u as usize].remove(&v);
                adj[v as usize].remove(&u);
                adj[u as usize].insert(w);
                adj[w as usize].insert(u);
                rewired += 1;
            }
        }

        if skipped > 0 {
            warn!(skipped, "rewiring skipped for nodes adjacent to all others");
        }
        debug!(n, k = self.k, beta = self.beta, rewired, "generated Watts-Strogatz graph");

        let edges = adj.iter().enumerate().flat_map(|(u, nbs)| {
            let u = u as Node;
            nbs.iter().filter(move |&&v| u < v).map(move |&v| Edge(u, v))
        });
        Graph::from_edges(false, n, edges)
    }
}
