/*!
Subset metrics derived from node metrics.

- [`Additive`] sums a node metric over the distinct members of a subset.
- [`Contractive`] contracts the subset onto its first member (see [`Contract`]) and evaluates
  the node metric at that member in the contracted graph.
*/

use super::*;
use crate::algo::Contract;

/// Sum of a node metric over the members of a subset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Additive<M> {
    metric: M,
}

impl<M> Additive<M> {
    /// Sums `metric` over the members of a subset
    pub fn new(metric: M) -> Self {
        Self { metric }
    }

    /// The underlying node metric
    pub fn metric(&self) -> &M {
        &self.metric
    }
}

impl<L, M> SubsetMetric<L> for Additive<M>
where
    L: Label,
    M: NodeMetric<L>,
{
    type Value = M::Value;

    fn name(&self) -> &str {
        self.metric.name()
    }

    fn value(&self, graph: &Graph<L>, subset: &[L]) -> Result<Self::Value, GraphError> {
        if subset.is_empty() {
            return Err(GraphError::EmptySubset);
        }

        let mut members = graph.vertex_bitset_unset();
        for label in subset {
            members.set_bit(graph.try_node_of(label)?);
        }

        Ok(members
            .iter_set_bits()
            .fold(M::Value::zero(), |acc, u| acc + self.metric.evaluate(graph, u)))
    }
}

/// A node metric evaluated on the representative of a contracted subset.
///
/// The first element of the subset becomes the representative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contractive<M> {
    metric: M,
}

impl<M> Contractive<M> {
    /// Evaluates `metric` on the node a subset is contracted into
    pub fn new(metric: M) -> Self {
        Self { metric }
    }

    /// The underlying node metric
    pub fn metric(&self) -> &M {
        &self.metric
    }
}

impl<L, M> SubsetMetric<L> for Contractive<M>
where
    L: Label,
    M: NodeMetric<L>,
{
    type Value = M::Value;

    fn name(&self) -> &str {
        self.metric.name()
    }

    fn value(&self, graph: &Graph<L>, subset: &[L]) -> Result<Self::Value, GraphError> {
        let representative = subset.first().ok_or(GraphError::EmptySubset)?;
        let contracted = graph.contract(subset, representative)?;
        self.metric.apply(&contracted, representative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::path_graph;

    #[test]
    fn additive_sums_distinct_members() {
        let g = Graph::from_edges(false, 5, [(0, 1), (1, 2), (2, 0), (2, 3)]);
        let clique = CliqueCount::radius_two();
        let values = clique.evaluate_all(&g);

        let additive = Additive::new(clique);
        assert_eq!(
            additive.value(&g, &[0, 2, 3]),
            Ok(values[0] + values[2] + values[3])
        );
        assert_eq!(additive.value(&g, &[3, 3, 3]), Ok(values[3]));
        assert_eq!(additive.value(&g, &[4]), Ok(1));
    }

    #[test]
    fn contractive_evaluates_merged_node() {
        // 0 - 1 - 2 - 3 - 4 becomes 0 - 1 - 3 - 4
        let g = path_graph(false, 5);
        let contractive = Contractive::new(Betweenness::new());

        assert_eq!(contractive.value(&g, &[1, 2]), Ok(2.0));
        assert_eq!(contractive.value(&g, &[2, 1]), Ok(2.0));
        assert_eq!(contractive.value(&g, &[0]), Ok(0.0));
        assert_eq!(SubsetMetric::<Node>::name(&contractive), "Betweenness Centrality");
    }

    #[test]
    fn invalid_subsets() {
        let g = Graph::new(false, ["a", "b"], [("a", "b")]).unwrap();
        let additive = Additive::new(CliqueCount::radius_one());
        let contractive = Contractive::new(CliqueCount::radius_one());

        assert_eq!(additive.value(&g, &[]), Err(GraphError::EmptySubset));
        assert_eq!(contractive.value(&g, &[]), Err(GraphError::EmptySubset));
        assert!(matches!(
            additive.value(&g, &["a", "c"]),
            Err(GraphError::UnknownNode { .. })
        ));
        assert!(matches!(
            contractive.value(&g, &["c", "a"]),
            Err(GraphError::UnknownNode { .. })
        ));
    }
}
