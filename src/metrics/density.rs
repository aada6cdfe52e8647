use super::*;

/// Fraction of possible loop-free edges that are present:
/// `|E| / (n(n-1))` for directed and `|E| / (n(n-1)/2)` for undirected graphs.
///
/// Graphs with at most one node have no possible edge and a density of `0.0`.
/// Self-loops are counted in `|E|`, so graphs with loops can exceed `1.0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeDensity;

impl<L: Label> GlobalMetric<L> for EdgeDensity {
    type Value = f64;

    fn name(&self) -> &str {
        "Edge Density"
    }

    fn apply(&self, graph: &Graph<L>) -> f64 {
        let possible = Edge::max_loopless(graph.number_of_nodes(), graph.is_directed());
        if possible == 0 {
            return 0.0;
        }
        graph.number_of_edges() as f64 / possible as f64
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::testing::path_graph;

    #[rstest]
    #[case(2)]
    #[case(3)]
    #[case(10)]
    fn complete_graphs_are_dense(#[case] n: NumNodes) {
        for directed in [false, true] {
            let edges = (0..n).flat_map(|u| (0..n).filter(move |&v| v != u).map(move |v| (u, v)));
            let g = Graph::from_edges(directed, n, edges);
            assert_eq!(EdgeDensity.apply(&g), 1.0);
        }
    }

    #[test]
    fn density_of_paths() {
        assert_eq!(EdgeDensity.apply(&path_graph(false, 4)), 0.5);
        assert_eq!(EdgeDensity.apply(&path_graph(true, 4)), 0.25);
    }

    #[test]
    fn tiny_graphs_have_zero_density() {
        assert_eq!(EdgeDensity.apply(&Graph::empty(false, 0)), 0.0);
        assert_eq!(EdgeDensity.apply(&Graph::empty(true, 1)), 0.0);
        assert_eq!(EdgeDensity.apply(&Graph::from_edges(false, 1, [(0, 0)])), 0.0);
    }
}
