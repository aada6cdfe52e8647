/*!
# Graph Contraction

Merges a subset of nodes into one representative:

- edges between two subset members (including loops on members) are dropped,
- edges between a member and an outside node are re-pointed to the representative,
- edges between two outside nodes are kept as they are.

Edges that coincide after re-pointing are collapsed into one, as [`Graph`] is a simple graph.
Consumers that care about multiplicity have to count it before contracting. All surviving nodes
keep their labels and relative order.
*/

use fxhash::FxHashMap;

use super::*;

/// Contraction of node subsets
pub trait Contract<L: Label> {
    /// Returns a new graph in which all nodes of `subset` are merged into `representative`.
    ///
    /// Fails if the subset is empty, contains unknown labels, or does not contain the
    /// representative. Duplicates within `subset` are ignored.
    fn contract(&self, subset: &[L], representative: &L) -> Result<Graph<L>, GraphError>;
}

impl<L: Label> Contract<L> for Graph<L> {
    fn contract(&self, subset: &[L], representative: &L) -> Result<Graph<L>, GraphError> {
        if subset.is_empty() {
            return Err(GraphError::EmptySubset);
        }

        let mut members = self.vertex_bitset_unset();
        for label in subset {
            members.set_bit(self.try_node_of(label)?);
        }

        let rep = self.try_node_of(representative)?;
        if !members.get_bit(rep) {
            return Err(GraphError::RepresentativeNotInSubset {
                label: format!("{representative:?}"),
            });
        }

        // Old index -> new index; every member maps onto the representative's new index
        let mut new_index = vec![INVALID_NODE; self.len()];
        let mut labels = Vec::with_capacity(self.len());
        let mut index = FxHashMap::default();
        for u in self.vertices() {
            if u == rep || !members.get_bit(u) {
                let new_u = labels.len() as Node;
                new_index[u as usize] = new_u;
                index.insert(self.label_of(u).clone(), new_u);
                labels.push(self.label_of(u).clone());
            }
        }
        for u in members.iter_set_bits() {
            new_index[u as usize] = new_index[rep as usize];
        }

        let edges = self
            .index_edges()
            .filter(|&Edge(u, v)| !(members.get_bit(u) && members.get_bit(v)))
            .map(|Edge(u, v)| Edge(new_index[u as usize], new_index[v as usize]))
            .collect();

        Ok(Graph::from_parts(self.is_directed(), labels, index, edges))
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;
    use crate::testing::path_graph;

    #[test]
    fn contracting_path_shortens_it() {
        let g = path_graph(false, 5);
        let c = g.contract(&[1, 2], &1).unwrap();

        assert_eq!(c.nodes().copied().collect_vec(), vec![0, 1, 3, 4]);
        assert_eq!(c.number_of_edges(), 3);
        assert!(c.adjacent(&1, &3));
        assert!(c.adjacent(&0, &1));
        assert!(!c.contains(&2));
    }

    #[test]
    fn parallel_edges_collapse() {
        // Both 1 and 2 are adjacent to 0 and 3
        let g = Graph::from_edges(false, 4, [(0, 1), (0, 2), (1, 3), (2, 3), (1, 2)]);
        let c = g.contract(&[2, 1], &2).unwrap();

        assert_eq!(c.number_of_nodes(), 3);
        assert_eq!(c.number_of_edges(), 2);
        assert_eq!(c.degree(&2), Some(2));
        assert!(!c.adjacent(&2, &2));
    }

    #[test]
    fn direction_is_kept() {
        let g = Graph::from_edges(true, 4, [(0, 1), (2, 3), (3, 0)]);
        let c = g.contract(&[1, 2], &1).unwrap();

        assert!(c.adjacent(&0, &1));
        assert!(c.adjacent(&1, &3));
        assert!(c.adjacent(&3, &0));
        assert!(!c.adjacent(&1, &0));
    }

    #[test]
    fn invalid_subsets() {
        let g = path_graph(false, 3);
        assert_eq!(g.contract(&[], &0), Err(GraphError::EmptySubset));
        assert!(matches!(
            g.contract(&[0, 7], &0),
            Err(GraphError::UnknownNode { .. })
        ));
        assert!(matches!(
            g.contract(&[0, 1], &2),
            Err(GraphError::RepresentativeNotInSubset { .. })
        ));
    }
}
