use super::*;
use crate::algo::Subgraph;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Radius {
    One,
    Two,
}

/// Edge counts in the neighborhood of a node.
///
/// - **radius 1**: number of edges among the neighbors of `v` (excluding `v`); in a simple
///   undirected graph this is the number of triangles through `v`.
/// - **radius 2**: with `N2` the nodes at distance `1` or `2` from `v` (excluding `v`), the value
///   is `inducedEdges(N2) - |N2| + 1`. This is negative for sparse neighborhoods such as the
///   center of a star, and is reported as a signed integer.
///
/// Neighborhoods follow edge directions in directed graphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CliqueCount {
    radius: Radius,
}

impl CliqueCount {
    /// Counts edges among the direct neighbors
    pub fn radius_one() -> Self {
        Self { radius: Radius::One }
    }

    /// Compares edges and nodes within distance two
    pub fn radius_two() -> Self {
        Self { radius: Radius::Two }
    }

    /// Radius of the neighborhood, `1` or `2`
    pub fn radius(&self) -> NumNodes {
        match self.radius {
            Radius::One => 1,
            Radius::Two => 2,
        }
    }
}

impl<L: Label> NodeMetric<L> for CliqueCount {
    type Value = i64;

    fn name(&self) -> &str {
        match self.radius {
            Radius::One => "Clique Count (radius 1)",
            Radius::Two => "Clique Count (radius 2)",
        }
    }

    fn evaluate(&self, graph: &Graph<L>, u: Node) -> i64 {
        let neighborhood = graph.within_distance(u, self.radius());
        let edges = graph.induced_edge_count(&neighborhood) as i64;

        match self.radius {
            Radius::One => edges,
            Radius::Two => edges - neighborhood.cardinality() as i64 + 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::star_graph;

    /// Triangle `0 1 2` with pendant `3` at `2` and isolated `4`
    fn triangle_with_pendant() -> Graph {
        Graph::from_edges(false, 5, [(0, 1), (1, 2), (2, 0), (2, 3)])
    }

    #[test]
    fn radius_one_counts_neighbor_edges() {
        let metric = CliqueCount::radius_one();
        assert_eq!(metric.evaluate_all(&triangle_with_pendant()), vec![1, 1, 1, 0, 0]);
        assert_eq!(metric.evaluate_all(&star_graph(5)), vec![0; 5]);
    }

    #[test]
    fn radius_two_on_hand_checked_graph() {
        let metric = CliqueCount::radius_two();
        // node 2: N2 = {0, 1, 3} with the single edge 0-1
        assert_eq!(metric.evaluate_all(&triangle_with_pendant()), vec![0, 0, -1, 1, 1]);
    }

    #[test]
    fn radius_two_on_star() {
        let metric = CliqueCount::radius_two();
        // center: 4 leaves without edges; leaf: center plus 3 leaves, 3 edges
        assert_eq!(metric.evaluate_all(&star_graph(5)), vec![-3, 0, 0, 0, 0]);
    }

    #[test]
    fn self_loops_are_ignored_at_the_center() {
        let with_loop = Graph::from_edges(false, 3, [(0, 0), (0, 1), (1, 2), (2, 0)]);
        let without = Graph::from_edges(false, 3, [(0, 1), (1, 2), (2, 0)]);

        for metric in [CliqueCount::radius_one(), CliqueCount::radius_two()] {
            assert_eq!(metric.evaluate(&with_loop, 0), metric.evaluate(&without, 0));
        }
    }

    #[test]
    fn directed_neighborhoods() {
        let g = Graph::from_edges(true, 3, [(0, 1), (0, 2), (1, 2)]);
        let metric = CliqueCount::radius_one();
        assert_eq!(metric.evaluate_all(&g), vec![1, 0, 0]);
        assert_eq!(NodeMetric::<Node>::name(&metric), "Clique Count (radius 1)");
    }
}
