use fxhash::FxHashMap;
use tracing::debug;

use super::*;

/// Generator for uniform `G(n,m)` random graphs with `n` nodes and `m` distinct loop-free edges.
///
/// If `m` exceeds the number of possible edges, the complete graph is produced, i.e. the output
/// always has exactly `min(m, n(n-1))` (directed) or `min(m, n(n-1)/2)` (undirected) edges.
/// Unset parameters default to `0`.
#[derive(Debug, Copy, Clone, Default)]
pub struct Gnm {
    n: NumNodes,
    m: NumEdges,
    directed: bool,
}

impl Gnm {
    /// Creates a new empty `G(n,m)` generator.
    pub fn new() -> Self {
        Self::default()
    }
}

impl NumNodesGen for Gnm {
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }
}

impl NumEdgesGen for Gnm {
    fn edges(mut self, m: NumEdges) -> Self {
        self.m = m;
        self
    }
}

impl DirectedGen for Gnm {
    fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }
}

impl NamedGenerator for Gnm {
    fn name(&self) -> &str {
        "Edge Count (G(n,m))"
    }
}

impl GraphGenerator for Gnm {
    /// Edges are sampled uniformly without replacement from the loop-free edge space.
    fn generate<R>(&self, rng: &mut R) -> Graph
    where
        R: Rng,
    {
        let n = self.n as u64;
        let end = Edge::max_loopless(self.n, self.directed);
        let m = self.m.min(end);

        let edges: Vec<Edge> = IndexSampler::new(rng, end, m)
            .map(|x| {
                if self.directed {
                    Edge::from_index_directed(x, n)
                } else {
                    Edge::from_index_undirected(x, n)
                }
            })
            .collect();

        debug!(n = self.n, requested = self.m, m, "generated G(n,m) graph");
        Graph::from_edges(self.directed, self.n, edges)
    }
}

/// Produces `m` uniformly random and distinct values of `0..end`.
///
/// The algorithm used is based on:
/// > *V. Batagelj and U. Brandes. Efficient Generation of Large Random Networks.
/// > Physical Review E 71.3 (2005): 036113.*
///
/// It runs a Fisher-Yates shuffle on the virtual array `0..end` but stops after `m` steps.
/// Only the swapped positions are stored in a hash map, so memory is `O(m)` even if `end`
/// is quadratic in the number of nodes.
struct IndexSampler<'a, R: Rng> {
    rng: &'a mut R,
    rem: u64,
    cur: u64,
    end: u64,
    swapped: FxHashMap<u64, u64>,
}

impl<'a, R: Rng> IndexSampler<'a, R> {
    fn new(rng: &'a mut R, end: u64, m: u64) -> Self {
        debug_assert!(m <= end);
        Self {
            rng,
            rem: m,
            cur: 0,
            end,
            swapped: FxHashMap::with_capacity_and_hasher(m as usize, Default::default()),
        }
    }
}

impl<R: Rng> Iterator for IndexSampler<'_, R> {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rem == 0 {
            return None;
        }

        // Draw a position of the unshuffled suffix and swap it with the front of the suffix
        let pos = self.rng.random_range(self.cur..self.end);
        let value = self.swapped.get(&pos).copied().unwrap_or(pos);
        let front = self.swapped.get(&self.cur).copied().unwrap_or(self.cur);
        self.swapped.insert(pos, front);

        self.cur += 1;
        self.rem -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.rem as usize, Some(self.rem as usize))
    }
}

impl<R: Rng> ExactSizeIterator for IndexSampler<'_, R> {}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;
    use rstest::rstest;

    use super::*;
    use crate::testing::test_generator_invariants;

    #[test]
    fn index_sampler_is_without_replacement() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1);
        for (end, m) in [(10, 10), (100, 37), (1 << 40, 1000), (5, 0)] {
            let values = IndexSampler::new(rng, end, m).collect_vec();
            assert_eq!(values.len() as u64, m);
            assert_eq!(values.iter().unique().count() as u64, m);
            assert!(values.iter().all(|&x| x < end));
        }
    }

    #[test]
    fn index_sampler_is_uniform() {
        let rng = &mut Pcg64Mcg::seed_from_u64(2);
        let mut hits = [0u32; 20];
        for _ in 0..2000 {
            for x in IndexSampler::new(rng, 20, 5) {
                hits[x as usize] += 1;
            }
        }
        // every index is drawn with probability 1/4
        assert!(hits.iter().all(|&h| (400..600).contains(&h)));
    }

    #[rstest]
    #[case(false, 10, 0)]
    #[case(false, 10, 20)]
    #[case(false, 10, 45)]
    #[case(false, 10, 1000)]
    #[case(true, 10, 45)]
    #[case(true, 10, 90)]
    #[case(true, 10, 91)]
    #[case(true, 1, 5)]
    #[case(false, 0, 5)]
    fn exact_edge_count(#[case] directed: bool, #[case] n: NumNodes, #[case] m: NumEdges) {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);
        let g = Gnm::new().nodes(n).edges(m).directed(directed).generate(rng);

        assert_eq!(g.number_of_nodes(), n);
        assert_eq!(
            g.number_of_edges(),
            m.min(Edge::max_loopless(n, directed))
        );
        crate::testing::assert_loop_free(&g);
    }

    test_generator_invariants!(undirected_invariants, Gnm::new().nodes(25).edges(100));
    test_generator_invariants!(
        directed_invariants,
        Gnm::new().nodes(25).edges(500).directed(true)
    );
}
