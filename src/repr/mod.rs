/*!
# Graph Representation

[`Graph`] is the single, immutable graph type of this crate. It stores

- the node labels in insertion order together with a hash index `label -> Node`,
- the adjacency as a [CSR](csr) structure over dense node indices
  (directed graphs additionally keep the reverse adjacency), and
- a `directed` flag that decides how edges are read.

Graphs are created through [`GraphBuilder`], [`Graph::new`] or [`Graph::from_edges`] and are
never mutated afterwards: generators and algorithms such as contraction always produce new
graphs. Parallel edges are collapsed on construction, self-loops are kept.

In an undirected graph, a self-loop occupies one entry of its node's neighbor list, so it
contributes `1` to the degree of that node.
*/

use fxhash::FxHashMap;

use crate::{error::GraphError, prelude::*};

mod builder;
mod csr;

pub use builder::*;
pub(crate) use csr::Csr;

/// Immutable graph over nodes labelled by `L`.
#[derive(Debug, Clone)]
pub struct Graph<L: Label = Node> {
    directed: bool,
    labels: Vec<L>,
    index: FxHashMap<L, Node>,
    out_nbs: Csr,
    /// Reverse adjacency; only stored for directed graphs
    in_nbs: Option<Csr>,
    num_edges: NumEdges,
}

impl<L: Label> Graph<L> {
    /// Creates a graph from explicit nodes and edges between them.
    ///
    /// Fails if a node is listed twice or if an edge refers to a node not in `nodes`.
    pub fn new<N, E>(directed: bool, nodes: N, edges: E) -> Result<Self, GraphError>
    where
        N: IntoIterator<Item = L>,
        E: IntoIterator<Item = (L, L)>,
    {
        let mut builder = GraphBuilder::new(directed);
        for label in nodes {
            builder.try_add_node(label)?;
        }
        for (u, v) in edges {
            builder.add_edge(&u, &v)?;
        }
        Ok(builder.build())
    }

    /// Assembles a graph from labels and index edges. Edges may contain duplicates and, for
    /// undirected graphs, both orientations of the same edge.
    pub(crate) fn from_parts(
        directed: bool,
        labels: Vec<L>,
        index: FxHashMap<L, Node>,
        mut edges: Vec<Edge>,
    ) -> Self {
        let n = labels.len() as NumNodes;
        debug_assert!(edges.iter().all(|&Edge(u, v)| u < n && v < n));

        if directed {
            edges.sort_unstable();
            edges.dedup();

            let mut reversed: Vec<Edge> = edges.iter().map(Edge::reverse).collect();
            reversed.sort_unstable();

            Self {
                directed,
                labels,
                index,
                out_nbs: Csr::from_sorted_edges(n, &edges),
                in_nbs: Some(Csr::from_sorted_edges(n, &reversed)),
                num_edges: edges.len() as NumEdges,
            }
        } else {
            edges.iter_mut().for_each(|e| *e = e.normalized());
            edges.sort_unstable();
            edges.dedup();
            let num_edges = edges.len() as NumEdges;

            let mut symmetric = Vec::with_capacity(2 * edges.len());
            for e in edges {
                symmetric.push(e);
                if !e.is_loop() {
                    symmetric.push(e.reverse());
                }
            }
            symmetric.sort_unstable();

            Self {
                directed,
                labels,
                index,
                out_nbs: Csr::from_sorted_edges(n, &symmetric),
                in_nbs: None,
                num_edges,
            }
        }
    }

    /// Returns the labels of all nodes in index order
    pub fn nodes(&self) -> impl Iterator<Item = &L> + '_ {
        self.labels.iter()
    }

    /// Returns all edges as label pairs. Undirected edges are reported once.
    pub fn edges(&self) -> impl Iterator<Item = (&L, &L)> + '_ {
        self.index_edges()
            .map(|Edge(u, v)| (self.label_of(u), self.label_of(v)))
    }

    /// Returns *true* if `label` is a node of this graph
    pub fn contains(&self, label: &L) -> bool {
        self.index.contains_key(label)
    }

    /// Returns the dense index of `label`
    pub fn node_of(&self, label: &L) -> Option<Node> {
        self.index.get(label).copied()
    }

    /// Like [`Graph::node_of`] but reports unknown labels as an error
    pub fn try_node_of(&self, label: &L) -> Result<Node, GraphError> {
        self.node_of(label).ok_or_else(|| GraphError::unknown(label))
    }

    /// Returns the label of node index `u`
    /// ** Panics if `u >= n` **
    pub fn label_of(&self, u: Node) -> &L {
        &self.labels[u as usize]
    }

    /// Returns *true* if the edge `(u, v)` exists; respects directedness.
    /// Unknown labels are never adjacent.
    pub fn adjacent(&self, u: &L, v: &L) -> bool {
        match (self.node_of(u), self.node_of(v)) {
            (Some(u), Some(v)) => self.has_edge(u, v),
            _ => false,
        }
    }

    /// Returns the (out-)neighbors of `label`; empty for unknown labels
    pub fn neighbors(&self, label: &L) -> impl Iterator<Item = &L> + '_ {
        let slice = match self.node_of(label) {
            Some(u) => self.out_nbs.slice(u),
            None => &[],
        };
        slice.iter().map(|&v| self.label_of(v))
    }

    /// Returns the in-neighbors of `label`; coincides with [`Graph::neighbors`] if undirected
    pub fn in_neighbors(&self, label: &L) -> impl Iterator<Item = &L> + '_ {
        let slice = match self.node_of(label) {
            Some(u) => self.in_csr().slice(u),
            None => &[],
        };
        slice.iter().map(|&v| self.label_of(v))
    }

    /// Returns the number of neighbors of `label` (out-degree for directed graphs)
    pub fn degree(&self, label: &L) -> Option<NumNodes> {
        self.node_of(label).map(|u| self.degree_of(u))
    }

    /// Returns the number of outgoing edges of `label`
    pub fn out_degree(&self, label: &L) -> Option<NumNodes> {
        self.degree(label)
    }

    /// Returns the number of incoming edges of `label`
    pub fn in_degree(&self, label: &L) -> Option<NumNodes> {
        self.node_of(label).map(|u| self.in_degree_of(u))
    }

    /// Returns the neighbor slice of node index `u`
    pub(crate) fn neighbors_slice(&self, u: Node) -> &[Node] {
        self.out_nbs.slice(u)
    }

    fn in_csr(&self) -> &Csr {
        self.in_nbs.as_ref().unwrap_or(&self.out_nbs)
    }

    pub(crate) fn labels(&self) -> &[L] {
        &self.labels
    }
}

impl Graph<Node> {
    /// Creates a graph on nodes `0..n` labelled by their index.
    /// ** Panics if an endpoint is `>= n` **
    pub fn from_edges<I, E>(directed: bool, n: NumNodes, edges: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge>,
    {
        let edges: Vec<Edge> = edges.into_iter().map(Into::into).collect();
        assert!(
            edges.iter().all(|&Edge(u, v)| u < n && v < n),
            "edge endpoint out of range for {n} nodes"
        );

        let labels: Vec<Node> = (0..n).collect();
        let index = labels.iter().map(|&u| (u, u)).collect();
        Self::from_parts(directed, labels, index, edges)
    }

    /// Creates a graph on nodes `0..n` without edges
    pub fn empty(directed: bool, n: NumNodes) -> Self {
        Self::from_edges(directed, n, std::iter::empty::<Edge>())
    }
}

impl<L: Label> GraphType for Graph<L> {
    fn is_directed(&self) -> bool {
        self.directed
    }
}

impl<L: Label> GraphNodeOrder for Graph<L> {
    fn number_of_nodes(&self) -> NumNodes {
        self.labels.len() as NumNodes
    }
}

impl<L: Label> GraphEdgeOrder for Graph<L> {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl<L: Label> AdjacencyList for Graph<L> {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.out_nbs.slice(u).iter().copied()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.out_nbs.len_of(u)
    }
}

impl<L: Label> DirectedAdjacencyList for Graph<L> {
    fn in_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.in_csr().slice(u).iter().copied()
    }

    fn in_degree_of(&self, u: Node) -> NumNodes {
        self.in_csr().len_of(u)
    }
}

impl<L: Label> AdjacencyTest for Graph<L> {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.out_nbs.contains(u, v)
    }
}

impl<L: Label> PartialEq for Graph<L> {
    /// Two graphs are equal if they agree on orientation, node labels (in order) and edges.
    fn eq(&self, other: &Self) -> bool {
        self.directed == other.directed
            && self.labels == other.labels
            && self.out_nbs == other.out_nbs
    }
}

impl<L: Label> Eq for Graph<L> {}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn undirected_graph_is_symmetric() {
        let g = Graph::new(false, ["a", "b", "c"], [("a", "b"), ("b", "a"), ("c", "b")]).unwrap();

        assert_eq!(g.number_of_nodes(), 3);
        assert_eq!(g.number_of_edges(), 2);
        assert!(g.adjacent(&"a", &"b"));
        assert!(g.adjacent(&"b", &"a"));
        assert!(g.adjacent(&"b", &"c"));
        assert!(!g.adjacent(&"a", &"c"));
        assert_eq!(g.degree(&"b"), Some(2));
        assert_eq!(g.neighbors(&"b").copied().collect_vec(), vec!["a", "c"]);
        assert_eq!(g.edges().count(), 2);
    }

    #[test]
    fn directed_graph_keeps_orientation() {
        let g = Graph::new(true, [1, 2, 3], [(1, 2), (2, 3), (3, 1), (1, 2)]).unwrap();

        assert_eq!(g.number_of_edges(), 3);
        assert!(g.adjacent(&1, &2));
        assert!(!g.adjacent(&2, &1));
        assert_eq!(g.out_degree(&1), Some(1));
        assert_eq!(g.in_degree(&1), Some(1));
        assert_eq!(g.in_neighbors(&3).copied().collect_vec(), vec![2]);
        assert_eq!(g.degree(&7), None);
    }

    #[test]
    fn self_loops_are_kept() {
        let g = Graph::from_edges(false, 2, [(0, 0), (0, 1)]);
        assert_eq!(g.number_of_edges(), 2);
        assert!(g.has_self_loop(0));
        assert_eq!(g.degree_of(0), 2);
        assert_eq!(g.degree_of(1), 1);
        assert_eq!(g.index_edges().collect_vec(), vec![Edge(0, 0), Edge(0, 1)]);
    }

    #[test]
    fn unknown_endpoints_are_rejected() {
        let err = Graph::new(false, ["a"], [("a", "z")]).unwrap_err();
        assert_eq!(
            err,
            GraphError::UnknownNode {
                label: "\"z\"".to_string()
            }
        );

        let err = Graph::new(true, [1, 1], std::iter::empty()).unwrap_err();
        assert!(matches!(err, GraphError::DuplicateNode { .. }));
    }

    #[test]
    fn degree_histogram() {
        let g = Graph::from_edges(false, 4, [(0, 1), (0, 2), (0, 3)]);
        assert_eq!(g.degree_histogram(), vec![0, 3, 0, 1]);
        assert!(Graph::empty(false, 0).degree_histogram().is_empty());
    }
}
