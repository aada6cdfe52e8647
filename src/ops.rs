/*!
# Index-level Graph Operations

Capability traits on the dense node indices of a graph. Algorithms in [`crate::algo`] and
[`crate::metrics`] are written against these traits rather than a concrete representation.
*/

use crate::{edge::*, node::*};

/// Provides the orientation of a graph
pub trait GraphType {
    /// Returns *true* if edges are ordered pairs
    fn is_directed(&self) -> bool;

    /// Returns *true* if every edge is bidirectional
    fn is_undirected(&self) -> bool {
        !self.is_directed()
    }
}

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over all node indices
    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        0..self.number_of_nodes()
    }

    /// Returns an empty bitset with one entry per node
    fn vertex_bitset_unset(&self) -> NodeBitSet {
        NodeBitSet::new(self.number_of_nodes())
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges; undirected edges are counted once
    fn number_of_edges(&self) -> NumEdges;
}

/// Getters for neighborhoods and edges
pub trait AdjacencyList: GraphNodeOrder + GraphType {
    /// Returns an iterator over the (open) neighborhood of `u` in ascending order.
    /// For directed graphs these are the out-neighbors.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns the number of (outgoing) neighbors of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns an iterator over the degrees of all nodes
    fn degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.vertices().map(|u| self.degree_of(u))
    }

    /// Returns the maximum degree in the graph
    fn max_degree(&self) -> NumNodes {
        self.degrees().max().unwrap_or(0)
    }

    /// Returns the degree histogram: entry `i` is the number of nodes of degree `i`
    fn degree_histogram(&self) -> Vec<NumNodes> {
        let mut histogram = vec![0; self.max_degree() as usize + 1];
        for d in self.degrees() {
            histogram[d as usize] += 1;
        }
        if self.is_empty() {
            histogram.clear();
        }
        histogram
    }

    /// Returns an iterator over all edges in the graph.
    /// For undirected graphs, every edge is reported once as `(u, v)` with `u <= v`.
    fn index_edges(&self) -> impl Iterator<Item = Edge> + '_ {
        let undirected = self.is_undirected();
        self.vertices().flat_map(move |u| {
            self.neighbors_of(u)
                .map(move |v| Edge(u, v))
                .filter(move |e| !undirected || e.is_normalized())
        })
    }
}

/// Getters for the reverse direction of directed graphs.
/// For undirected graphs, in- and out-neighborhoods coincide.
pub trait DirectedAdjacencyList: AdjacencyList {
    /// Returns an iterator over nodes `v` with edges `(v, u)`
    /// ** Panics if `u >= n` **
    fn in_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns the number of incoming neighbors of `u`
    /// ** Panics if `u >= n` **
    fn in_degree_of(&self, u: Node) -> NumNodes;

    /// Returns the number of outgoing neighbors of `u`
    fn out_degree_of(&self, u: Node) -> NumNodes {
        self.degree_of(u)
    }

    /// Returns an iterator over all in-degrees
    fn in_degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.vertices().map(|u| self.in_degree_of(u))
    }
}

/// Test existence of edges
pub trait AdjacencyTest: GraphNodeOrder {
    /// Returns *true* if the edge `(u,v)` exists in the graph.
    /// ** Panics if `u >= n || v >= n` **
    fn has_edge(&self, u: Node, v: Node) -> bool;

    /// Returns *true* if a self-loop `(u,u)` exists.
    fn has_self_loop(&self, u: Node) -> bool {
        self.has_edge(u, u)
    }
}
