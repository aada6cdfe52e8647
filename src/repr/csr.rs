/*!
# Compressed Sparse Row Adjacency

All neighbor lists of a graph are stored in one flattened array; `offsets[u]..offsets[u + 1]`
marks the slice of node `u`. Slices are sorted, which makes adjacency tests a binary search.
The structure is immutable once built.
*/

use crate::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Csr {
    offsets: Vec<usize>,
    targets: Vec<Node>,
}

impl Csr {
    /// Builds the adjacency of `n` nodes from edges sorted by `(source, target)` without duplicates.
    pub(crate) fn from_sorted_edges(n: NumNodes, edges: &[Edge]) -> Self {
        debug_assert!(edges.windows(2).all(|w| w[0] < w[1]));

        let mut offsets = Vec::with_capacity(n as usize + 1);
        offsets.push(0);

        let mut curr_node = 0;
        let targets: Vec<Node> = edges
            .iter()
            .enumerate()
            .map(|(i, &Edge(u, v))| {
                while u > curr_node {
                    offsets.push(i);
                    curr_node += 1;
                }
                v
            })
            .collect();

        while offsets.len() <= n as usize {
            offsets.push(targets.len());
        }

        Self { offsets, targets }
    }

    #[inline]
    pub(crate) fn slice(&self, u: Node) -> &[Node] {
        let u = u as usize;
        &self.targets[self.offsets[u]..self.offsets[u + 1]]
    }

    #[inline]
    pub(crate) fn len_of(&self, u: Node) -> NumNodes {
        self.slice(u).len() as NumNodes
    }

    #[inline]
    pub(crate) fn contains(&self, u: Node, v: Node) -> bool {
        self.slice(u).binary_search(&v).is_ok()
    }
}
