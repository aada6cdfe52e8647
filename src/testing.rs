//! Test helpers shared across modules.

use itertools::Itertools;

use crate::prelude::*;

/// Path `0 - 1 - ... - (n-1)`
pub(crate) fn path_graph(directed: bool, n: NumNodes) -> Graph {
    Graph::from_edges(directed, n, (0..n).tuple_windows::<(_, _)>())
}

/// Star with center `0` and leaves `1..n`
pub(crate) fn star_graph(n: NumNodes) -> Graph {
    Graph::from_edges(false, n, (1..n).map(|v| (0, v)))
}

/// Asserts that a generated graph is simple: no loops, and for undirected graphs a
/// symmetric adjacency. Duplicates cannot be represented by [`Graph`] at all.
pub(crate) fn assert_loop_free(graph: &Graph) {
    for u in graph.vertices() {
        assert!(!graph.has_self_loop(u), "self-loop at {u}");
        if graph.is_undirected() {
            for v in graph.neighbors_of(u) {
                assert!(graph.has_edge(v, u), "asymmetric edge ({u},{v})");
            }
        }
    }
}

/// Every generator must produce simple, index-labelled graphs for a range of seeds.
macro_rules! test_generator_invariants {
    ($name:ident, $generator:expr) => {
        #[test]
        fn $name() {
            use rand::SeedableRng;
            use rand_pcg::Pcg64Mcg;

            for seed in 0..10 {
                let rng = &mut Pcg64Mcg::seed_from_u64(seed);
                let graph = $generator.generate(rng);

                crate::testing::assert_loop_free(&graph);
                assert!(
                    graph
                        .nodes()
                        .enumerate()
                        .all(|(i, &label)| label as usize == i)
                );
                assert_eq!(graph.index_edges().count() as NumEdges, graph.number_of_edges());
            }
        }
    };
}

pub(crate) use test_generator_invariants;
