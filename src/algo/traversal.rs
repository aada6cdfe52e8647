/*!
Breadth-first traversals.

This module provides:
- a lazy [`BFS`] iterator over all nodes reachable from a start node,
- [`ShortestPathSearch`], a reusable BFS that records for every reachable node the number of
  shortest paths, the distance, the predecessors on shortest paths and the visitation order
  (the forward phase of Brandes' algorithm), and
- the [`Traversal`] trait exposing these directly as methods on graphs.

All traversals follow edge directions, i.e. they walk `neighbors_of`, which are the
out-neighbors for directed graphs.
*/

use std::collections::VecDeque;

use smallvec::SmallVec;

use super::*;

/// A BFS traversal iterator visiting nodes in breadth-first order from a start node.
pub struct BFS<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    visited: NodeBitSet,
    queue: VecDeque<Node>,
}

impl<'a, G> BFS<'a, G>
where
    G: AdjacencyList,
{
    /// Creates a new traversal starting from `start`
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a G, start: Node) -> Self {
        let mut visited = graph.vertex_bitset_unset();
        visited.set_bit(start);
        Self {
            graph,
            visited,
            queue: VecDeque::from(vec![start]),
        }
    }

    /// Excludes a node from the search as if it had been visited already.
    /// Has no effect on nodes that are queued already.
    pub fn with_node_excluded(mut self, u: Node) -> Self {
        self.visited.set_bit(u);
        self
    }

    /// Returns *true* if `u` has been discovered so far
    pub fn did_visit_node(&self, u: Node) -> bool {
        self.visited.get_bit(u)
    }
}

impl<G> Iterator for BFS<'_, G>
where
    G: AdjacencyList,
{
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;
        for v in self.graph.neighbors_of(u) {
            if !self.visited.get_bit(v) {
                self.visited.set_bit(v);
                self.queue.push_back(v);
            }
        }
        Some(u)
    }
}

/// Reusable single-source shortest path search for unweighted graphs.
///
/// After [`ShortestPathSearch::run`], the following is available for the last source `s`:
/// - [`num_paths`](Self::num_paths): number of distinct shortest `s`-`v` paths; the source has one
///   path to itself. Counts are kept as `f64` as they grow exponentially with the depth.
/// - [`distance`](Self::distance): the geodesic distance or `None` if `v` is unreachable.
/// - [`order`](Self::order): reachable nodes in visitation order. Distances along it are
///   non-decreasing, so iterating it in reverse processes nodes by non-increasing distance.
/// - [`predecessors`](Self::predecessors): nodes directly preceding `v` on shortest paths.
///
/// Buffers are allocated once and only the touched entries are reset between runs, so repeated
/// searches cost `O(V + E)` each.
#[derive(Debug, Clone)]
pub struct ShortestPathSearch {
    source: Node,
    num_paths: Vec<f64>,
    distance: Vec<NumNodes>,
    order: Vec<Node>,
    predecessors: Vec<SmallVec<[Node; 2]>>,
    queue: VecDeque<Node>,
}

impl ShortestPathSearch {
    /// Allocates buffers for graphs with `n` nodes
    pub fn new(n: NumNodes) -> Self {
        Self {
            source: INVALID_NODE,
            num_paths: vec![0.0; n as usize],
            distance: vec![INVALID_NODE; n as usize],
            order: Vec::with_capacity(n as usize),
            predecessors: vec![SmallVec::new(); n as usize],
            queue: VecDeque::new(),
        }
    }

    /// Runs the search from `source`, discarding the results of a previous run.
    /// ** Panics if the graph has more nodes than the search was created for **
    pub fn run<G: AdjacencyList>(&mut self, graph: &G, source: Node) -> &Self {
        assert!(graph.len() <= self.distance.len());

        for &u in &self.order {
            self.num_paths[u as usize] = 0.0;
            self.distance[u as usize] = INVALID_NODE;
            self.predecessors[u as usize].clear();
        }
        self.order.clear();

        self.source = source;
        self.num_paths[source as usize] = 1.0;
        self.distance[source as usize] = 0;
        self.queue.push_back(source);

        while let Some(u) = self.queue.pop_front() {
            self.order.push(u);
            let next = self.distance[u as usize] + 1;

            for v in graph.neighbors_of(u) {
                let dv = &mut self.distance[v as usize];
                if *dv == INVALID_NODE {
                    *dv = next;
                    self.queue.push_back(v);
                }

                if *dv == next {
                    self.num_paths[v as usize] += self.num_paths[u as usize];
                    self.predecessors[v as usize].push(u);
                }
            }
        }

        self
    }

    /// Source of the last run
    pub fn source(&self) -> Node {
        self.source
    }

    /// Number of shortest paths from the source to `v` (zero if unreachable)
    pub fn num_paths(&self, v: Node) -> f64 {
        self.num_paths[v as usize]
    }

    /// Distance from the source to `v`
    pub fn distance(&self, v: Node) -> Option<NumNodes> {
        let d = self.distance[v as usize];
        (d != INVALID_NODE).then_some(d)
    }

    /// Reachable nodes in order of non-decreasing distance, starting with the source
    pub fn order(&self) -> &[Node] {
        &self.order
    }

    /// Predecessors of `v` on shortest paths from the source
    pub fn predecessors(&self, v: Node) -> &[Node] {
        &self.predecessors[v as usize]
    }
}

/// Traversal algorithms as methods on graphs
pub trait Traversal: AdjacencyList + Sized {
    /// Returns an iterator visiting all nodes reachable from `start` in BFS order
    fn bfs(&self, start: Node) -> BFS<'_, Self> {
        BFS::new(self, start)
    }

    /// Returns the geodesic distance from `start` to every node (`None` if unreachable)
    fn distances_from(&self, start: Node) -> Vec<Option<NumNodes>> {
        let mut distances = vec![None; self.len()];
        distances[start as usize] = Some(0);

        let mut queue = VecDeque::from(vec![start]);
        while let Some(u) = queue.pop_front() {
            let next = distances[u as usize].map(|d| d + 1);
            for v in self.neighbors_of(u) {
                if distances[v as usize].is_none() {
                    distances[v as usize] = next;
                    queue.push_back(v);
                }
            }
        }

        distances
    }

    /// Runs a single [`ShortestPathSearch`] from `source`
    fn shortest_paths_from(&self, source: Node) -> ShortestPathSearch {
        let mut search = ShortestPathSearch::new(self.number_of_nodes());
        search.run(self, source);
        search
    }

    /// Returns *true* if there is a path from `u` to `v`
    fn is_reachable(&self, u: Node, v: Node) -> bool {
        self.bfs(u).any(|x| x == v)
    }
}

impl<G> Traversal for G where G: AdjacencyList + Sized {}
