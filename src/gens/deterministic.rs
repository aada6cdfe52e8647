/*!
# Deterministic Families

Complete graphs, cycles, paths, stars and wheels. None of them consume randomness; they are
[`DeterministicGenerator`]s and thus also [`GraphGenerator`]s.

Small node counts follow the general construction rule: pairs that coincide are collapsed
and would-be self-loops are omitted, so for instance an undirected cycle on two nodes is a
single edge and a cycle on one node has no edges.
*/

use itertools::Itertools;

use super::*;

/// Builds an index-labelled graph from edges, dropping loops
fn loop_free<I>(directed: bool, n: NumNodes, edges: I) -> Graph
where
    I: IntoIterator<Item = (Node, Node)>,
{
    Graph::from_edges(directed, n, edges.into_iter().filter(|(u, v)| u != v))
}

/// Edges of a cycle through `nodes` in order
fn cycle_edges(nodes: std::ops::Range<Node>) -> impl Iterator<Item = (Node, Node)> {
    nodes.circular_tuple_windows()
}

/// Every ordered (directed) or unordered (undirected) pair of distinct nodes
#[derive(Debug, Copy, Clone, Default)]
pub struct Complete {
    n: NumNodes,
    directed: bool,
}

impl Complete {
    /// Creates a new empty complete graph generator.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Edges `(i, (i + 1) mod n)`
#[derive(Debug, Copy, Clone, Default)]
pub struct Cycle {
    n: NumNodes,
    directed: bool,
}

impl Cycle {
    /// Creates a new empty cycle generator.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Edges `(i, i + 1)`
#[derive(Debug, Copy, Clone, Default)]
pub struct Path {
    n: NumNodes,
    directed: bool,
}

impl Path {
    /// Creates a new empty path generator.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Undirected star with center `0` and leaves `1..n`
#[derive(Debug, Copy, Clone, Default)]
pub struct Star {
    n: NumNodes,
}

impl Star {
    /// Creates a new empty star generator.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Undirected wheel: a cycle over `1..n` with every node also connected to the hub `0`
#[derive(Debug, Copy, Clone, Default)]
pub struct Wheel {
    n: NumNodes,
}

impl Wheel {
    /// Creates a new empty wheel generator.
    pub fn new() -> Self {
        Self::default()
    }
}

macro_rules! impl_builder_traits {
    ($($gen:ident),*; directed) => {$(
        impl_builder_traits!($gen);

        impl DirectedGen for $gen {
            fn directed(mut self, directed: bool) -> Self {
                self.directed = directed;
                self
            }
        }
    )*};
    ($($gen:ident),*) => {$(
        impl NumNodesGen for $gen {
            fn nodes(mut self, n: NumNodes) -> Self {
                self.n = n;
                self
            }
        }
    )*};
}

impl_builder_traits!(Complete, Cycle, Path; directed);
impl_builder_traits!(Star, Wheel);

impl NamedGenerator for Complete {
    fn name(&self) -> &str {
        "Complete Graph"
    }
}

impl DeterministicGenerator for Complete {
    fn build(&self) -> Graph {
        let n = self.n;
        let directed = self.directed;
        Graph::from_edges(
            directed,
            n,
            (0..n)
                .cartesian_product(0..n)
                .filter(|&(u, v)| if directed { u != v } else { u < v }),
        )
    }
}

impl NamedGenerator for Cycle {
    fn name(&self) -> &str {
        "Cycle Graph"
    }
}

impl DeterministicGenerator for Cycle {
    fn build(&self) -> Graph {
        loop_free(self.directed, self.n, cycle_edges(0..self.n))
    }
}

impl NamedGenerator for Path {
    fn name(&self) -> &str {
        "Path Graph"
    }
}

impl DeterministicGenerator for Path {
    fn build(&self) -> Graph {
        Graph::from_edges(self.directed, self.n, (0..self.n).tuple_windows::<(_, _)>())
    }
}

impl NamedGenerator for Star {
    fn name(&self) -> &str {
        "Star Graph"
    }
}

impl DeterministicGenerator for Star {
    fn build(&self) -> Graph {
        Graph::from_edges(false, self.n, (1..self.n).map(|v| (0, v)))
    }
}

impl NamedGenerator for Wheel {
    fn name(&self) -> &str {
        "Wheel Graph"
    }
}

impl DeterministicGenerator for Wheel {
    fn build(&self) -> Graph {
        let spokes = (1..self.n).map(|v| (0, v));
        let rim = cycle_edges(1..self.n.max(1));
        loop_free(false, self.n, spokes.chain(rim))
    }
}
