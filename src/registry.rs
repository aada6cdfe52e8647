/*!
# Registry

Named collections of metrics and generators for hosts that select them at runtime, e.g. from a
menu or a command line. Nothing is discovered automatically: [`node_metrics`],
[`global_metrics`] and [`generators`] list the built-in entries explicitly, and hosts can
[`register`](Registry::register) their own.

Metrics of different value types are unified behind [`ScalarNodeMetric`] and
[`ScalarGlobalMetric`], which report every value as `f64`.

```rust
use netmetrics::{prelude::*, registry};

let graph = Graph::from_edges(false, 3, [(0, 1), (1, 2)]);
let metrics = registry::node_metrics::<Node>();

let betweenness = metrics.get("betweenness").unwrap();
assert_eq!(betweenness.scores(&graph)[&1], 1.0);
assert!(metrics.names().any(|name| name == "clique-2"));
```
*/

use num::ToPrimitive;

use crate::{error::ParameterError, gens::*, metrics::*, prelude::*};

/// Insertion-ordered collection of entries with unique names
#[derive(Debug, Clone)]
pub struct Registry<T> {
    entries: Vec<(&'static str, T)>,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T> Registry<T> {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `value` under `name` and returns the entry it replaced, if any
    pub fn register(&mut self, name: &'static str, value: T) -> Option<T> {
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some((_, old)) => Some(std::mem::replace(old, value)),
            None => {
                self.entries.push((name, value));
                None
            }
        }
    }

    /// Returns the entry registered under `name`
    pub fn get(&self, name: &str) -> Option<&T> {
        self.entries
            .iter()
            .find_map(|(key, value)| (*key == name).then_some(value))
    }

    /// Names of all entries in registration order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(key, _)| *key)
    }

    /// All entries in registration order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &T)> + '_ {
        self.entries.iter().map(|(key, value)| (*key, value))
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns *true* if nothing is registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A node metric with values converted to `f64`
pub trait ScalarNodeMetric<L: Label>: Send + Sync {
    /// Display name of the metric
    fn name(&self) -> &str;

    /// Values of all nodes keyed by label; values without an `f64` representation become `NaN`
    fn scores(&self, graph: &Graph<L>) -> NodeValues<L, f64>;
}

impl<L, M> ScalarNodeMetric<L> for M
where
    L: Label,
    M: NodeMetric<L> + Send + Sync,
{
    fn name(&self) -> &str {
        NodeMetric::<L>::name(self)
    }

    fn scores(&self, graph: &Graph<L>) -> NodeValues<L, f64> {
        self.apply_all(graph)
            .into_iter()
            .map(|(label, value)| (label, value.to_f64().unwrap_or(f64::NAN)))
            .collect()
    }
}

/// A global metric with its value converted to `f64`
pub trait ScalarGlobalMetric<L: Label>: Send + Sync {
    /// Display name of the metric
    fn name(&self) -> &str;

    /// Value of the graph; values without an `f64` representation become `NaN`
    fn score(&self, graph: &Graph<L>) -> f64;
}

impl<L, M> ScalarGlobalMetric<L> for M
where
    L: Label,
    M: GlobalMetric<L> + Send + Sync,
{
    fn name(&self) -> &str {
        GlobalMetric::<L>::name(self)
    }

    fn score(&self, graph: &Graph<L>) -> f64 {
        self.apply(graph).to_f64().unwrap_or(f64::NAN)
    }
}

/// Built-in node metrics: `betweenness`, `decay` (factor `1/2`), `clique-1` and `clique-2`
pub fn node_metrics<L: Label>() -> Registry<Box<dyn ScalarNodeMetric<L>>> {
    let mut registry: Registry<Box<dyn ScalarNodeMetric<L>>> = Registry::new();
    registry.register("betweenness", Box::new(Betweenness::new()));
    registry.register("decay", Box::new(Decay::default()));
    registry.register("clique-1", Box::new(CliqueCount::radius_one()));
    registry.register("clique-2", Box::new(CliqueCount::radius_two()));
    registry
}

/// Built-in global metrics: `density`
pub fn global_metrics<L: Label>() -> Registry<Box<dyn ScalarGlobalMetric<L>>> {
    let mut registry: Registry<Box<dyn ScalarGlobalMetric<L>>> = Registry::new();
    registry.register("density", Box::new(EdgeDensity));
    registry
}

/// Example configurations of every built-in generator on a few dozen nodes
pub fn generators() -> Result<Registry<Box<dyn DynGenerator>>, ParameterError> {
    let triangle = Complete::new().nodes(3).build();

    let mut registry: Registry<Box<dyn DynGenerator>> = Registry::new();
    registry.register("complete", Box::new(Complete::new().nodes(10)));
    registry.register("cycle", Box::new(Cycle::new().nodes(10)));
    registry.register("path", Box::new(Path::new().nodes(10)));
    registry.register("star", Box::new(Star::new().nodes(10)));
    registry.register("wheel", Box::new(Wheel::new().nodes(10)));
    registry.register("gnp", Box::new(Gnp::new().nodes(50).prob(0.1)?));
    registry.register("gnm", Box::new(Gnm::new().nodes(50).edges(100)));
    registry.register(
        "watts-strogatz",
        Box::new(WattsStrogatz::new(50, 4)?.rewiring_prob(0.1)?),
    );
    registry.register(
        "configuration-model",
        Box::new(DegreeSequence::new(false, vec![0, 10, 20, 10])?),
    );
    registry.register(
        "preferential-attachment",
        Box::new(
            PreferentialAttachment::new(&triangle)?
                .edges_per_node(2)?
                .nodes(50),
        ),
    );
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::testing::path_graph;

    #[test]
    fn register_replaces_by_name() {
        let mut registry = Registry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.register("a", 1), None);
        assert_eq!(registry.register("b", 2), None);
        assert_eq!(registry.register("a", 3), Some(1));

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("a"), Some(&3));
        assert_eq!(registry.get("c"), None);
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn node_metrics_match_direct_evaluation() {
        let graph = path_graph(false, 5);
        let metrics = node_metrics::<Node>();
        assert_eq!(
            metrics.names().collect::<Vec<_>>(),
            vec!["betweenness", "decay", "clique-1", "clique-2"]
        );

        let clique = CliqueCount::radius_two().evaluate_all(&graph);
        let scores = metrics.get("clique-2").unwrap().scores(&graph);
        for u in graph.vertices() {
            assert_eq!(scores[&u], clique[u as usize] as f64);
        }

        let betweenness = metrics.get("betweenness").unwrap();
        assert_eq!(betweenness.name(), "Betweenness Centrality");
        assert_eq!(betweenness.scores(&graph)[&2], 4.0);
    }

    #[test]
    fn labelled_metrics() {
        let graph = Graph::new(false, ["a", "b"], [("a", "b")]).unwrap();
        let density = global_metrics::<&str>();
        assert_eq!(density.get("density").unwrap().score(&graph), 1.0);
    }

    #[test]
    fn generators_are_usable() {
        let generators = generators().unwrap();
        assert_eq!(generators.len(), 10);

        for (key, generator) in generators.iter() {
            let graph = generator.generate_dyn(&mut Pcg64Mcg::seed_from_u64(5));
            assert!(graph.number_of_nodes() > 0, "{key}");
            crate::testing::assert_loop_free(&graph);
        }

        let gnm = generators.get("gnm").unwrap();
        assert_eq!(gnm.name(), "Edge Count (G(n,m))");
        let graph = gnm.generate_dyn(&mut Pcg64Mcg::seed_from_u64(6));
        assert_eq!(graph.number_of_edges(), 100);
    }
}
