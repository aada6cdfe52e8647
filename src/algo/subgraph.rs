/*!
# Local Subgraphs

Distance-bounded neighborhoods of a node and edge counts of vertex-induced subgraphs.
Both are expressed on [`NodeBitSet`]s so that membership tests stay `O(1)`.
*/

use super::*;

/// Neighborhood and induced-subgraph queries
pub trait Subgraph: AdjacencyList {
    /// Returns all nodes at distance `1..=radius` from `u` (following edge directions).
    /// `u` itself is never part of the result, even if it lies on a cycle or carries a loop.
    fn within_distance(&self, u: Node, radius: NumNodes) -> NodeBitSet {
        let mut reached = self.vertex_bitset_unset();
        reached.set_bit(u);

        let mut frontier = vec![u];
        for _ in 0..radius {
            let mut next = Vec::new();
            for &x in &frontier {
                for v in self.neighbors_of(x) {
                    if !reached.get_bit(v) {
                        reached.set_bit(v);
                        next.push(v);
                    }
                }
            }
            if next.is_empty() {
                break;
            }
            frontier = next;
        }

        reached.clear_bit(u);
        reached
    }

    /// Returns the number of edges with both endpoints in `vertices`.
    /// Undirected edges are counted once; self-loops count as edges.
    fn induced_edge_count(&self, vertices: &NodeBitSet) -> NumEdges {
        let undirected = self.is_undirected();
        vertices
            .iter_set_bits()
            .map(|u| {
                self.neighbors_of(u)
                    .filter(|&v| vertices.get_bit(v) && (!undirected || u <= v))
                    .count() as NumEdges
            })
            .sum()
    }
}

impl<G> Subgraph for G where G: AdjacencyList {}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;
    use crate::testing::path_graph;

    #[test]
    fn within_distance_on_path() {
        let g = path_graph(false, 6);

        assert_eq!(g.within_distance(2, 0).cardinality(), 0);
        assert_eq!(g.within_distance(2, 1).iter_set_bits().collect_vec(), vec![1, 3]);
        assert_eq!(
            g.within_distance(2, 2).iter_set_bits().collect_vec(),
            vec![0, 1, 3, 4]
        );
        assert_eq!(g.within_distance(0, 10).cardinality(), 5);
    }

    #[test]
    fn within_distance_skips_self_on_cycles() {
        let g = Graph::from_edges(true, 3, [(0, 1), (1, 2), (2, 0), (0, 0)]);
        let reached = g.within_distance(0, 3);
        assert!(!reached.get_bit(0));
        assert_eq!(reached.cardinality(), 2);
    }

    #[test]
    fn induced_edges() {
        let g = Graph::from_edges(false, 5, [(0, 1), (1, 2), (2, 0), (2, 3), (3, 3), (3, 4)]);

        let mut set = g.vertex_bitset_unset();
        for u in [0, 1, 2] {
            set.set_bit(u);
        }
        assert_eq!(g.induced_edge_count(&set), 3);

        set.set_bit(3);
        assert_eq!(g.induced_edge_count(&set), 5);

        let d = Graph::from_edges(true, 3, [(0, 1), (1, 0), (1, 2)]);
        let mut set = d.vertex_bitset_unset();
        set.set_bit(0);
        set.set_bit(1);
        assert_eq!(d.induced_edge_count(&set), 2);
    }
}
