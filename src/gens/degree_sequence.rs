/*!
# Configuration Model

[`DegreeSequence`] realizes a prescribed degree histogram as a simple graph: `histogram[i]` is
the number of nodes of degree `i` (out-degree for directed graphs). Nodes receive their degrees
in histogram order, i.e. the lowest indices get the smallest degrees.

**Directed graphs** are always realized exactly: every node of out-degree `d` picks `d`
distinct targets other than itself uniformly at random.

**Undirected graphs** pair up stubs (open degree units) in three stages:

1. Random stub pairs are joined unless they form a loop or a parallel edge. The stage ends
   after a bounded number of consecutive rejections.
2. All remaining valid pairs of nodes with open stubs are enumerated and one of them is
   joined at random, until no valid pair is left.
3. Leftover stubs are repaired by double-edge swaps: an existing edge `{x, y}` is replaced by
   `{u, x}` and `{v, y}` (or `{u, x}` and `{u, y}` for a single node `u`), which keeps the
   degrees of `x` and `y` and closes two open stubs. Afterwards stage 2 is resumed.

If no swap applies either but the sequence is graphical (Erdős–Gallai), the graph is rebuilt
by the Havel–Hakimi construction and then shuffled by random degree-preserving edge swaps.
Only non-graphical sequences end with a partial graph, reporting the stubs that stayed open
in a [`Realization`].
*/

use fxhash::FxHashSet;
use rand::seq::{IndexedRandom, index};
use tracing::{debug, instrument, warn};

use super::*;
use crate::error::ParameterError;

/// Consecutive rejected random stub pairs before switching to exhaustive search
const MAX_REJECTIONS: usize = 64;

/// Attempted edge swaps per edge when shuffling a Havel–Hakimi graph
const SWAPS_PER_EDGE: usize = 10;

/// Outcome of a configuration model run
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Realization {
    missing_stubs: u64,
}

impl Realization {
    /// Returns *true* if every node received its requested degree
    pub fn is_complete(&self) -> bool {
        self.missing_stubs == 0
    }

    /// Sum over all nodes of requested minus realized degree
    pub fn missing_stubs(&self) -> u64 {
        self.missing_stubs
    }
}

/// Configuration model generator; see the [module documentation](self).
#[derive(Debug, Clone, Default)]
pub struct DegreeSequence {
    directed: bool,
    nodes: NumNodes,
    histogram: Vec<NumNodes>,
}

impl DegreeSequence {
    /// Creates a generator for the degree histogram `histogram`.
    ///
    /// Fails if the histogram describes more than `NumNodes::MAX` nodes, if the degree sum of
    /// an undirected histogram is odd, or if some degree is not smaller than the number of
    /// nodes and could thus only be realized with loops or parallel edges.
    pub fn new(directed: bool, histogram: Vec<NumNodes>) -> Result<Self, ParameterError> {
        let nodes: u64 = histogram.iter().map(|&c| c as u64).sum();
        let Ok(num_nodes) = NumNodes::try_from(nodes) else {
            return Err(ParameterError::TooManyNodes { nodes });
        };

        if !directed {
            let sum: u64 = histogram
                .iter()
                .enumerate()
                .map(|(d, &c)| d as u64 * c as u64)
                .sum();
            if sum % 2 == 1 {
                return Err(ParameterError::OddDegreeSum { sum });
            }
        }

        let max_degree = histogram.iter().rposition(|&c| c > 0);
        if let Some(degree) = max_degree.filter(|&d| d as u64 >= nodes) {
            return Err(ParameterError::DegreeTooLarge { degree, nodes });
        }

        Ok(Self {
            directed,
            nodes: num_nodes,
            histogram,
        })
    }

    /// Number of nodes described by the histogram
    pub fn number_of_nodes(&self) -> NumNodes {
        self.nodes
    }

    /// Returns *true* if the sequence has a simple realization.
    /// Directed sequences always have one once validated.
    pub fn is_graphical(&self) -> bool {
        self.directed || is_graphical(&self.degrees().collect::<Vec<_>>())
    }

    /// The requested degree of every node in index order
    pub fn degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.histogram
            .iter()
            .enumerate()
            .flat_map(|(d, &c)| std::iter::repeat_n(d as NumNodes, c as usize))
    }

    /// Generates a graph and reports whether all degrees could be realized
    #[instrument(skip_all, fields(nodes = self.number_of_nodes(), directed = self.directed))]
    pub fn generate_with_report<R>(&self, rng: &mut R) -> (Graph, Realization)
    where
        R: Rng,
    {
        let n = self.number_of_nodes();
        let (edges, realization) = if self.directed {
            (self.directed_edges(rng), Realization::default())
        } else {
            let degrees: Vec<NumNodes> = self.degrees().collect();
            let mut pairing = StubPairing::new(degrees.clone());
            pairing.run(rng);

            if !pairing.is_complete() && is_graphical(&degrees) {
                debug!("random pairing got stuck, rebuilding by Havel-Hakimi");
                pairing = StubPairing::new(degrees);
                pairing.havel_hakimi();
                pairing.shuffle(rng);
            }
            pairing.finish()
        };

        if realization.is_complete() {
            debug!(m = edges.len(), "realized degree sequence");
        } else {
            warn!(
                missing = realization.missing_stubs(),
                m = edges.len(),
                "degree sequence only partially realized"
            );
        }

        (Graph::from_edges(self.directed, n, edges), realization)
    }

    fn directed_edges<R: Rng>(&self, rng: &mut R) -> Vec<Edge> {
        let n = self.number_of_nodes();
        let mut edges = Vec::new();
        for (u, d) in (0..n).zip(self.degrees()) {
            for x in index::sample(rng, n as usize - 1, d as usize) {
                let v = x as Node;
                edges.push(Edge(u, if v >= u { v + 1 } else { v }));
            }
        }
        edges
    }
}

impl NamedGenerator for DegreeSequence {
    fn name(&self) -> &str {
        "Degree Sequence (configuration model)"
    }
}

impl GraphGenerator for DegreeSequence {
    /// Generates a graph; see [`DegreeSequence::generate_with_report`] to learn whether all
    /// degrees were realized
    fn generate<R>(&self, rng: &mut R) -> Graph
    where
        R: Rng,
    {
        self.generate_with_report(rng).0
    }
}

/// Erdős–Gallai test: for every `k`, the `k` largest degrees can be absorbed by a clique
/// among them plus at most `k` edges to each of the remaining nodes
fn is_graphical(degrees: &[NumNodes]) -> bool {
    let mut sorted: Vec<u64> = degrees.iter().map(|&d| d as u64).collect();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    if sorted.iter().sum::<u64>() % 2 == 1 {
        return false;
    }

    let mut prefix = 0;
    for k in 1..=sorted.len() {
        prefix += sorted[k - 1];
        let k = k as u64;
        let tail: u64 = sorted[k as usize..].iter().map(|&d| d.min(k)).sum();
        if prefix > k * (k - 1) + tail {
            return false;
        }
    }
    true
}

/// Working state of the undirected pairing; dropped once the graph is built
struct StubPairing {
    remaining: Vec<NumNodes>,
    adj: Vec<FxHashSet<Node>>,
}

impl StubPairing {
    fn new(remaining: Vec<NumNodes>) -> Self {
        let adj = vec![FxHashSet::default(); remaining.len()];
        Self { remaining, adj }
    }

    fn can_join(&self, u: Node, v: Node) -> bool {
        u != v && !self.adj[u as usize].contains(&v)
    }

    fn join(&mut self, u: Node, v: Node) {
        self.adj[u as usize].insert(v);
        self.adj[v as usize].insert(u);
        self.remaining[u as usize] -= 1;
        self.remaining[v as usize] -= 1;
    }

    fn unjoin(&mut self, u: Node, v: Node) {
        self.adj[u as usize].remove(&v);
        self.adj[v as usize].remove(&u);
        self.remaining[u as usize] += 1;
        self.remaining[v as usize] += 1;
    }

    fn open_nodes(&self) -> Vec<Node> {
        (0..self.remaining.len() as Node)
            .filter(|&u| self.remaining[u as usize] > 0)
            .collect()
    }

    fn edges(&self) -> impl Iterator<Item = (Node, Node)> + '_ {
        self.adj.iter().enumerate().flat_map(|(u, nbs)| {
            let u = u as Node;
            nbs.iter().filter(move |&&v| u < v).map(move |&v| (u, v))
        })
    }

    fn run<R: Rng>(&mut self, rng: &mut R) {
        self.join_random_stubs(rng);
        loop {
            self.join_valid_pairs(rng);
            if !self.swap_open_stubs(rng) {
                break;
            }
        }
    }

    /// Stage 1
    fn join_random_stubs<R: Rng>(&mut self, rng: &mut R) {
        let mut stubs: Vec<Node> = (0..self.remaining.len() as Node)
            .flat_map(|u| std::iter::repeat_n(u, self.remaining[u as usize] as usize))
            .collect();

        let mut rejections = 0;
        while stubs.len() >= 2 && rejections < MAX_REJECTIONS {
            let i = rng.random_range(0..stubs.len());
            let j = rng.random_range(0..stubs.len());
            let (u, v) = (stubs[i], stubs[j]);
            if i == j || !self.can_join(u, v) {
                rejections += 1;
                continue;
            }

            self.join(u, v);
            stubs.swap_remove(i.max(j));
            stubs.swap_remove(i.min(j));
            rejections = 0;
        }
    }

    /// Stage 2
    fn join_valid_pairs<R: Rng>(&mut self, rng: &mut R) {
        loop {
            let open = self.open_nodes();
            let mut candidates = Vec::new();
            for (i, &u) in open.iter().enumerate() {
                for &v in &open[i + 1..] {
                    if self.can_join(u, v) {
                        candidates.push((u, v));
                    }
                }
            }

            match candidates.choose(rng) {
                Some(&(u, v)) => self.join(u, v),
                None => return,
            }
        }
    }

    /// Stage 3: closes two open stubs by a double-edge swap; returns *false* if none applies
    fn swap_open_stubs<R: Rng>(&mut self, rng: &mut R) -> bool {
        let open = self.open_nodes();
        let (u, v) = match open.as_slice() {
            [] => return false,
            [u] if self.remaining[*u as usize] >= 2 => (*u, *u),
            [_] => return false,
            [u, v, ..] => (*u, *v),
        };

        // (x, y) is replaced by (u, x) and (v, y)
        let mut candidates = Vec::new();
        for (x, y) in self.edges() {
            if [x, y].iter().any(|w| *w == u || *w == v) {
                continue;
            }
            for (x, y) in [(x, y), (y, x)] {
                if self.can_join(u, x) && self.can_join(v, y) {
                    candidates.push((x, y));
                }
            }
        }

        let Some(&(x, y)) = candidates.choose(rng) else {
            return false;
        };

        self.unjoin(x, y);
        self.join(u, x);
        self.join(v, y);
        true
    }

    fn is_complete(&self) -> bool {
        self.remaining.iter().all(|&r| r == 0)
    }

    /// Joins the node of largest open degree to the next largest ones until all stubs are
    /// closed. Succeeds on every graphical sequence when started without edges.
    fn havel_hakimi(&mut self) {
        loop {
            let mut open = self.open_nodes();
            open.sort_by_key(|&u| std::cmp::Reverse(self.remaining[u as usize]));

            let Some((&u, rest)) = open.split_first() else {
                return;
            };
            let d = self.remaining[u as usize] as usize;
            if d > rest.len() {
                return;
            }
            for &v in &rest[..d] {
                self.join(u, v);
            }
        }
    }

    /// Random double-edge swaps `{a, b}, {c, d} -> {a, d}, {c, b}` keeping all degrees
    fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        let mut edges: Vec<(Node, Node)> = self.edges().collect();
        if edges.len() < 2 {
            return;
        }

        for _ in 0..SWAPS_PER_EDGE * edges.len() {
            let i = rng.random_range(0..edges.len());
            let j = rng.random_range(0..edges.len());
            let (a, b) = edges[i];
            let (c, d) = if rng.random_bool(0.5) {
                edges[j]
            } else {
                (edges[j].1, edges[j].0)
            };

            if i == j || !self.can_join(a, d) || !self.can_join(c, b) {
                continue;
            }

            self.unjoin(a, b);
            self.unjoin(c, d);
            self.join(a, d);
            self.join(c, b);
            edges[i] = (a, d);
            edges[j] = (c, b);
        }
    }

    fn finish(self) -> (Vec<Edge>, Realization) {
        let edges = self.edges().map(Edge::from).collect();
        let missing_stubs = self.remaining.iter().map(|&r| r as u64).sum();
        (edges, Realization { missing_stubs })
    }
}
