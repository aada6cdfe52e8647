/*!
# Graph Metrics

Metrics come in three categories, each with its own capability trait:

- [`NodeMetric`]: one value per node, e.g. [`Betweenness`], [`Decay`], [`CliqueCount`],
- [`GlobalMetric`]: one value per graph, e.g. [`EdgeDensity`],
- [`SubsetMetric`]: one value per node subset, built from a node metric by the
  [`Additive`] or [`Contractive`] combinators.

Node metrics are evaluated on dense node indices; [`NodeMetric::apply`] and
[`NodeMetric::apply_all`] translate from and to node labels. Values are never reported for
nodes outside the evaluated graph.

```rust
use netmetrics::{prelude::*, metrics::*};

let star = Graph::from_edges(false, 4, [(0, 1), (0, 2), (0, 3)]);
let scores = Betweenness::new().apply_all(&star);
assert_eq!(scores[&0], 3.0);
assert_eq!(scores[&1], 0.0);
```

With the `parallel` feature, batch evaluation can be spread over threads by
[`par_evaluate_all`]; betweenness parallelizes over its BFS sources internally.
*/

use std::{fmt::Debug, ops::Add};

use fxhash::FxHashMap;
use num::{ToPrimitive, Zero};
use tracing::debug;

use crate::{error::GraphError, prelude::*};

mod betweenness;
mod clique;
mod decay;
mod density;
mod subset;

pub use betweenness::*;
pub use clique::*;
pub use decay::*;
pub use density::*;
pub use subset::*;

/// Values of a node metric keyed by node label
pub type NodeValues<L, V> = FxHashMap<L, V>;

/// Numeric result type of a metric. Integer metrics stay integer, real metrics stay real.
pub trait MetricValue:
    Copy + Debug + PartialOrd + Zero + Add<Output = Self> + ToPrimitive + Send + Sync
{
}

impl<T> MetricValue for T where
    T: Copy + Debug + PartialOrd + Zero + Add<Output = T> + ToPrimitive + Send + Sync
{
}

/// A metric assigning a value to every node of a graph
pub trait NodeMetric<L: Label> {
    /// Numeric type of the metric
    type Value: MetricValue;

    /// Stable display name
    fn name(&self) -> &str;

    /// Computes the value of node index `u`
    /// ** Panics if `u >= n` **
    fn evaluate(&self, graph: &Graph<L>, u: Node) -> Self::Value;

    /// Computes the values of all nodes, indexed by node index.
    ///
    /// The default evaluates every node independently; metrics that share work between
    /// nodes override this.
    fn evaluate_all(&self, graph: &Graph<L>) -> Vec<Self::Value> {
        graph.vertices().map(|u| self.evaluate(graph, u)).collect()
    }

    /// Computes the value of the node labelled `node`
    fn apply(&self, graph: &Graph<L>, node: &L) -> Result<Self::Value, GraphError> {
        Ok(self.evaluate(graph, graph.try_node_of(node)?))
    }

    /// Computes the values of all nodes keyed by label
    fn apply_all(&self, graph: &Graph<L>) -> NodeValues<L, Self::Value> {
        let values = self.evaluate_all(graph);
        debug!(metric = self.name(), nodes = values.len(), "evaluated node metric");
        graph.labels().iter().cloned().zip(values).collect()
    }
}

/// A metric assigning a single value to a graph
pub trait GlobalMetric<L: Label> {
    /// Numeric type of the metric
    type Value: MetricValue;

    /// Stable display name
    fn name(&self) -> &str;

    /// Computes the value of the graph
    fn apply(&self, graph: &Graph<L>) -> Self::Value;
}

/// A metric assigning a value to a subset of nodes
pub trait SubsetMetric<L: Label> {
    /// Numeric type of the metric
    type Value: MetricValue;

    /// Stable display name
    fn name(&self) -> &str;

    /// Computes the value of `subset`. Duplicate members are ignored.
    /// Fails on empty subsets and unknown labels.
    fn value(&self, graph: &Graph<L>, subset: &[L]) -> Result<Self::Value, GraphError>;
}

/// Evaluates a node metric on all nodes in parallel, indexed by node index
#[cfg(feature = "parallel")]
pub fn par_evaluate_all<L, M>(metric: &M, graph: &Graph<L>) -> Vec<M::Value>
where
    L: Label,
    M: NodeMetric<L> + Sync,
{
    use rayon::prelude::*;

    (0..graph.number_of_nodes())
        .into_par_iter()
        .map(|u| metric.evaluate(graph, u))
        .collect()
}

#[cfg(all(test, feature = "parallel"))]
mod tests {
    use super::*;
    use crate::testing::path_graph;

    #[test]
    fn parallel_matches_sequential() {
        let g = path_graph(false, 30);
        let metric = CliqueCount::radius_two();
        assert_eq!(par_evaluate_all(&metric, &g), metric.evaluate_all(&g));
    }
}
