use fxhash::FxHashMap;

use super::*;

/// Incrementally collects nodes and edges and freezes them into an immutable [`Graph`].
///
/// # Example
/// ```
/// use netmetrics::prelude::*;
///
/// let mut builder = GraphBuilder::new(false);
/// builder.add_nodes(["x", "y", "z"]);
/// builder.add_edge(&"x", &"y").unwrap();
/// assert!(builder.add_edge(&"x", &"w").is_err());
///
/// let graph = builder.build();
/// assert_eq!(graph.number_of_edges(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct GraphBuilder<L: Label> {
    directed: bool,
    labels: Vec<L>,
    index: FxHashMap<L, Node>,
    edges: Vec<Edge>,
}

impl<L: Label> GraphBuilder<L> {
    /// Creates an empty builder
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            labels: Vec::new(),
            index: FxHashMap::default(),
            edges: Vec::new(),
        }
    }

    /// Returns *true* if the graph under construction is directed
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Adds a node and returns its index. Adding a known label returns the existing index.
    pub fn add_node(&mut self, label: L) -> Node {
        if let Some(&u) = self.index.get(&label) {
            return u;
        }
        let u = self.labels.len() as Node;
        self.index.insert(label.clone(), u);
        self.labels.push(label);
        u
    }

    /// Adds a node that must not be present yet
    pub fn try_add_node(&mut self, label: L) -> Result<Node, GraphError> {
        if self.index.contains_key(&label) {
            return Err(GraphError::DuplicateNode {
                label: format!("{label:?}"),
            });
        }
        Ok(self.add_node(label))
    }

    /// Adds all nodes of the collection
    pub fn add_nodes<I: IntoIterator<Item = L>>(&mut self, labels: I) {
        for label in labels {
            self.add_node(label);
        }
    }

    /// Adds the edge `(u, v)`. Both endpoints must have been added before.
    pub fn add_edge(&mut self, u: &L, v: &L) -> Result<(), GraphError> {
        let u = self.index_of(u)?;
        let v = self.index_of(v)?;
        self.edges.push(Edge(u, v));
        Ok(())
    }

    /// Adds an edge between two indices returned by [`GraphBuilder::add_node`]
    /// ** Panics if an index is unknown **
    pub fn add_edge_by_index(&mut self, u: Node, v: Node) {
        let n = self.labels.len() as Node;
        assert!(u < n && v < n, "edge ({u},{v}) refers to unknown node index");
        self.edges.push(Edge(u, v));
    }

    /// Returns the number of nodes added so far
    pub fn number_of_nodes(&self) -> NumNodes {
        self.labels.len() as NumNodes
    }

    fn index_of(&self, label: &L) -> Result<Node, GraphError> {
        self.index
            .get(label)
            .copied()
            .ok_or_else(|| GraphError::unknown(label))
    }

    /// Freezes the builder into an immutable graph
    pub fn build(self) -> Graph<L> {
        Graph::from_parts(self.directed, self.labels, self.index, self.edges)
    }
}
