/*!
Betweenness centrality by Brandes' algorithm.

For every source `s` a [`ShortestPathSearch`] records path counts, predecessors and the
visitation order. Walking the order backwards (non-increasing distance), the dependency of
every predecessor `p` of `w` grows by `paths[p] / paths[w] * (1 + dependency[w])`; the
dependency of every node other than `s` is then added to its total. In undirected graphs
every pair is seen from both ends, so totals are halved.

The whole computation takes `O(V * E)` time and `O(V + E)` memory per worker.
*/

use tracing::instrument;

use super::*;
use crate::algo::ShortestPathSearch;

/// Betweenness centrality of every node; unreachable pairs contribute nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Betweenness {
    normalized: bool,
}

impl Betweenness {
    /// Raw (unnormalized) betweenness
    pub fn new() -> Self {
        Self::default()
    }

    /// Divides all values by the number of pairs not involving the node, i.e.
    /// `(n-1)(n-2)` for directed and `(n-1)(n-2)/2` for undirected graphs.
    /// Graphs with at most two nodes are left as they are.
    pub fn normalized(mut self, normalized: bool) -> Self {
        self.normalized = normalized;
        self
    }

    /// Returns *true* if values are normalized
    pub fn is_normalized(&self) -> bool {
        self.normalized
    }

    fn scale<L: Label>(&self, graph: &Graph<L>) -> f64 {
        let n = graph.number_of_nodes() as f64;
        if self.normalized && n > 2.0 {
            // halving and the halved pair count cancel for undirected graphs
            1.0 / ((n - 1.0) * (n - 2.0))
        } else if graph.is_directed() {
            1.0
        } else {
            0.5
        }
    }
}

/// Per-worker buffers of the accumulation phase
struct Accumulator {
    search: ShortestPathSearch,
    dependency: Vec<f64>,
    totals: Vec<f64>,
}

impl Accumulator {
    fn new(n: NumNodes) -> Self {
        Self {
            search: ShortestPathSearch::new(n),
            dependency: vec![0.0; n as usize],
            totals: vec![0.0; n as usize],
        }
    }

    fn add_source<G: AdjacencyList>(&mut self, graph: &G, source: Node) {
        let search = self.search.run(graph, source);

        for &w in search.order().iter().rev() {
            let coeff = (1.0 + self.dependency[w as usize]) / search.num_paths(w);
            for &p in search.predecessors(w) {
                self.dependency[p as usize] += search.num_paths(p) * coeff;
            }
            if w != source {
                self.totals[w as usize] += self.dependency[w as usize];
            }
        }

        for &w in search.order() {
            self.dependency[w as usize] = 0.0;
        }
    }
}

impl<L: Label> NodeMetric<L> for Betweenness {
    type Value = f64;

    fn name(&self) -> &str {
        "Betweenness Centrality"
    }

    /// Runs the full algorithm; prefer [`NodeMetric::evaluate_all`] for more than one node.
    fn evaluate(&self, graph: &Graph<L>, u: Node) -> f64 {
        self.evaluate_all(graph)[u as usize]
    }

    #[instrument(skip_all, fields(nodes = graph.number_of_nodes(), edges = graph.number_of_edges()))]
    fn evaluate_all(&self, graph: &Graph<L>) -> Vec<f64> {
        let n = graph.number_of_nodes();

        #[cfg(not(feature = "parallel"))]
        let mut totals = {
            let mut acc = Accumulator::new(n);
            for s in graph.vertices() {
                acc.add_source(graph, s);
            }
            acc.totals
        };

        #[cfg(feature = "parallel")]
        let mut totals = {
            use rayon::prelude::*;

            (0..n)
                .into_par_iter()
                .fold(
                    || Accumulator::new(n),
                    |mut acc, s| {
                        acc.add_source(graph, s);
                        acc
                    },
                )
                .map(|acc| acc.totals)
                .reduce(
                    || vec![0.0; n as usize],
                    |mut a, b| {
                        a.iter_mut().zip(b).for_each(|(x, y)| *x += y);
                        a
                    },
                )
        };

        let scale = self.scale(graph);
        totals.iter_mut().for_each(|x| *x *= scale);
        totals
    }
}
