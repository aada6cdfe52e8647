use rand::{
    distr::{Distribution, weighted::WeightedIndex},
    seq::IndexedRandom,
};
use tracing::debug;

use super::*;
use crate::{error::ParameterError, utils::Probability};

/// Random draws from the degree urn before falling back to an explicit weighted choice
const MAX_URN_DRAWS: usize = 32;

/// Number of edges each new node brings along
#[derive(Debug, Clone)]
enum EdgesPerNode {
    Fixed(NumNodes),
    /// Entry `i` is the probability of adding `i` edges
    Distribution(WeightedIndex<f64>),
}

/// Barabási–Albert preferential attachment.
///
/// Grows an undirected seed graph to `n` nodes. Every new node is connected to distinct
/// existing nodes, each chosen with probability proportional to its current degree. The
/// number of edges per new node is either fixed or drawn from a probability vector; it is
/// capped by the number of existing nodes with positive degree.
///
/// The seed nodes keep their indices `0..n0` in the output (labels of the seed are dropped)
/// and self-loops of the seed are ignored. If `n` is below the seed size, the seed is
/// returned as it is.
#[derive(Debug, Clone)]
pub struct PreferentialAttachment {
    seed_nodes: NumNodes,
    seed_edges: Vec<Edge>,
    n: NumNodes,
    edges_per_node: EdgesPerNode,
}

impl PreferentialAttachment {
    /// Creates a generator growing `seed`, adding one edge per new node.
    ///
    /// Fails if the seed is directed, has no nodes, or has no edges besides self-loops.
    pub fn new<L: Label>(seed: &Graph<L>) -> Result<Self, ParameterError> {
        if seed.is_directed() {
            return Err(ParameterError::DirectedSeed);
        }
        if seed.is_empty() {
            return Err(ParameterError::EmptySeed);
        }

        let seed_edges: Vec<Edge> = seed.index_edges().filter(|e| !e.is_loop()).collect();
        if seed_edges.is_empty() {
            return Err(ParameterError::EdgelessSeed);
        }

        Ok(Self {
            seed_nodes: seed.number_of_nodes(),
            seed_edges,
            n: seed.number_of_nodes(),
            edges_per_node: EdgesPerNode::Fixed(1),
        })
    }

    /// Every new node adds exactly `m` edges (as far as there are enough nodes to connect to)
    pub fn edges_per_node(mut self, m: NumNodes) -> Result<Self, ParameterError> {
        if m == 0 {
            return Err(ParameterError::ZeroEdgesPerNode);
        }
        self.edges_per_node = EdgesPerNode::Fixed(m);
        Ok(self)
    }

    /// Every new node adds `i` edges with probability `probs[i]`.
    ///
    /// Fails unless `probs` is non-empty, all entries are probabilities and they sum to one.
    pub fn edge_distribution(mut self, probs: &[f64]) -> Result<Self, ParameterError> {
        if probs.is_empty() {
            return Err(ParameterError::EmptyDistribution);
        }
        if let Some(&value) = probs.iter().find(|p| !p.is_valid_probability()) {
            return Err(ParameterError::InvalidProbability {
                name: "edge distribution entry",
                value,
            });
        }

        let sum: f64 = probs.iter().sum();
        if (sum - 1.0).abs() > 1e-9 * probs.len() as f64 {
            return Err(ParameterError::DistributionNotNormalized { sum });
        }

        let distr = WeightedIndex::new(probs)
            .map_err(|_| ParameterError::DistributionNotNormalized { sum })?;
        self.edges_per_node = EdgesPerNode::Distribution(distr);
        Ok(self)
    }

    /// Number of nodes of the seed graph
    pub fn seed_nodes(&self) -> NumNodes {
        self.seed_nodes
    }
}

impl NumNodesGen for PreferentialAttachment {
    /// Sets the total number of nodes, including the seed
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }
}

impl NamedGenerator for PreferentialAttachment {
    fn name(&self) -> &str {
        "Preferential Attachment"
    }
}

impl GraphGenerator for PreferentialAttachment {
    fn generate<R>(&self, rng: &mut R) -> Graph
    where
        R: Rng,
    {
        let n = self.n.max(self.seed_nodes);
        let mut edges = self.seed_edges.clone();

        // Every edge puts both endpoints into the urn, so nodes appear as often as their degree
        let mut urn: Vec<Node> = edges.iter().flat_map(|&Edge(u, v)| [u, v]).collect();
        let mut degrees = vec![0 as NumNodes; n as usize];
        for &u in &urn {
            degrees[u as usize] += 1;
        }
        let mut connected = degrees.iter().filter(|&&d| d > 0).count() as NumNodes;

        let mut targets = Vec::new();
        for x in self.seed_nodes..n {
            let m = match &self.edges_per_node {
                EdgesPerNode::Fixed(m) => *m,
                EdgesPerNode::Distribution(distr) => distr.sample(rng) as NumNodes,
            };

            targets.clear();
            while (targets.len() as NumNodes) < m.min(connected) {
                match pick_by_degree(rng, &urn, &degrees[..x as usize], &targets) {
                    Some(t) => targets.push(t),
                    None => break,
                }
            }

            for &t in &targets {
                edges.push(Edge(t, x));
                urn.extend([t, x]);
                degrees[t as usize] += 1;
                degrees[x as usize] += 1;
            }
            if !targets.is_empty() {
                connected += 1;
            }
        }

        debug!(
            n,
            seed = self.seed_nodes,
            m = edges.len(),
            "generated preferential attachment graph"
        );
        Graph::from_edges(false, n, edges)
    }
}

/// Picks a node not in `exclude` with probability proportional to its degree.
/// Returns `None` if all nodes of positive degree are excluded.
fn pick_by_degree<R: Rng>(
    rng: &mut R,
    urn: &[Node],
    degrees: &[NumNodes],
    exclude: &[Node],
) -> Option<Node> {
    for _ in 0..MAX_URN_DRAWS {
        let &u = urn.choose(rng)?;
        if !exclude.contains(&u) {
            return Some(u);
        }
    }

    let candidates: Vec<Node> = (0..degrees.len() as Node)
        .filter(|u| degrees[*u as usize] > 0 && !exclude.contains(u))
        .collect();
    candidates
        .choose_weighted(rng, |&u| degrees[u as usize] as f64)
        .ok()
        .copied()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::testing::{path_graph, star_graph, test_generator_invariants};

    fn triangle() -> Graph {
        Graph::from_edges(false, 3, [(0, 1), (1, 2), (2, 0)])
    }

    #[test]
    fn seed_validation() {
        assert_eq!(
            PreferentialAttachment::new(&path_graph(true, 3)).unwrap_err(),
            ParameterError::DirectedSeed
        );
        assert_eq!(
            PreferentialAttachment::new(&Graph::empty(false, 0)).unwrap_err(),
            ParameterError::EmptySeed
        );
        assert_eq!(
            PreferentialAttachment::new(&Graph::from_edges(false, 2, [(1, 1)])).unwrap_err(),
            ParameterError::EdgelessSeed
        );
    }

    #[test]
    fn parameter_validation() {
        let generator = PreferentialAttachment::new(&triangle()).unwrap();

        assert_eq!(
            generator.clone().edges_per_node(0).unwrap_err(),
            ParameterError::ZeroEdgesPerNode
        );
        assert_eq!(
            generator.clone().edge_distribution(&[]).unwrap_err(),
            ParameterError::EmptyDistribution
        );
        assert!(matches!(
            generator.clone().edge_distribution(&[0.5, 0.6]),
            Err(ParameterError::DistributionNotNormalized { .. })
        ));
        assert!(matches!(
            generator.clone().edge_distribution(&[1.5, -0.5]),
            Err(ParameterError::InvalidProbability { .. })
        ));
        assert!(generator.edge_distribution(&[0.2, 0.3, 0.5]).is_ok());
    }

    #[test]
    fn fixed_edges_per_node() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1);
        let g = PreferentialAttachment::new(&triangle())
            .unwrap()
            .edges_per_node(2)
            .unwrap()
            .nodes(50)
            .generate(rng);

        assert_eq!(g.number_of_nodes(), 50);
        assert_eq!(g.number_of_edges(), 3 + 2 * 47);
        assert!(g.degrees().all(|d| d >= 2));
    }

    #[test]
    fn edges_per_node_is_capped() {
        let rng = &mut Pcg64Mcg::seed_from_u64(2);
        let seed = Graph::from_edges(false, 2, [(0, 1)]);
        let g = PreferentialAttachment::new(&seed)
            .unwrap()
            .edges_per_node(5)
            .unwrap()
            .nodes(5)
            .generate(rng);

        // the new nodes see 2, 3 and 4 connected nodes
        assert_eq!(g.number_of_edges(), 1 + 2 + 3 + 4);
        assert_eq!(g.degree_of(4), 4);
    }

    #[test]
    fn distribution_of_edges() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);
        let g = PreferentialAttachment::new(&triangle())
            .unwrap()
            .edge_distribution(&[0.0, 0.5, 0.5])
            .unwrap()
            .nodes(40)
            .generate(rng);

        assert!((3 + 37..=3 + 2 * 37).contains(&g.number_of_edges()));
        assert!(g.degrees().all(|d| d >= 1));
    }

    #[test]
    fn attachment_prefers_high_degree() {
        // a single new node joins the center of a 10-leaf star with probability 1/2
        let generator = PreferentialAttachment::new(&star_graph(11)).unwrap().nodes(12);
        let mut center = 0;
        for seed in 0..1000 {
            let g = generator.generate(&mut Pcg64Mcg::seed_from_u64(seed));
            if g.has_edge(0, 11) {
                center += 1;
            }
        }
        assert!((400..600).contains(&center));
    }

    #[test]
    fn labelled_seed_and_small_targets() {
        let rng = &mut Pcg64Mcg::seed_from_u64(4);
        let seed = Graph::new(false, ["a", "b", "c"], [("a", "b"), ("b", "c")]).unwrap();
        let generator = PreferentialAttachment::new(&seed).unwrap();
        assert_eq!(generator.seed_nodes(), 3);

        let g = generator.clone().nodes(1).generate(rng);
        assert_eq!(g, path_graph(false, 3));

        let g = generator.nodes(6).generate(rng);
        assert_eq!(g.number_of_edges(), 5);
        assert!(g.has_edge(0, 1) && g.has_edge(1, 2));
    }

    test_generator_invariants!(
        invariants,
        PreferentialAttachment::new(&triangle())
            .unwrap()
            .edges_per_node(3)
            .unwrap()
            .nodes(60)
    );
}
