use super::*;
use crate::{algo::Traversal, error::ParameterError, utils::Probability};

/// Decay centrality: the sum of `alpha^d` over all nodes reachable at distance `d >= 1`.
///
/// The node itself (distance `0`) does not contribute, so `alpha = 0` yields `0` everywhere
/// and `alpha = 1` counts the reachable nodes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decay {
    alpha: f64,
}

impl Decay {
    /// Creates the metric with decay factor `alpha`.
    /// Fails if `alpha` does not lie in `[0, 1]`.
    pub fn new(alpha: f64) -> Result<Self, ParameterError> {
        let mut decay = Self { alpha: 0.0 };
        decay.set_alpha(alpha)?;
        Ok(decay)
    }

    /// Replaces the decay factor; on error the previous value is kept
    pub fn set_alpha(&mut self, alpha: f64) -> Result<(), ParameterError> {
        if !alpha.is_valid_probability() {
            return Err(ParameterError::InvalidDecay { alpha });
        }
        self.alpha = alpha;
        Ok(())
    }

    /// The decay factor
    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

impl Default for Decay {
    /// Decay factor `1/2`
    fn default() -> Self {
        Self { alpha: 0.5 }
    }
}

impl<L: Label> NodeMetric<L> for Decay {
    type Value = f64;

    fn name(&self) -> &str {
        "Decay Centrality"
    }

    fn evaluate(&self, graph: &Graph<L>, u: Node) -> f64 {
        graph
            .distances_from(u)
            .into_iter()
            .flatten()
            .filter(|&d| d > 0)
            .map(|d| self.alpha.powi(d as i32))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::testing::{path_graph, star_graph};

    #[test]
    fn rejects_invalid_alpha() {
        for alpha in [-0.1, 1.5, f64::NAN] {
            assert!(matches!(
                Decay::new(alpha),
                Err(ParameterError::InvalidDecay { .. })
            ));
        }

        let mut decay = Decay::new(0.5).unwrap();
        assert!(decay.set_alpha(2.0).is_err());
        assert_eq!(decay.alpha(), 0.5);
    }

    #[rstest]
    #[case(path_graph(false, 5))]
    #[case(path_graph(true, 5))]
    #[case(star_graph(6))]
    #[case(Graph::from_edges(false, 3, [(0, 0), (1, 2)]))]
    fn zero_alpha_vanishes(#[case] graph: Graph) {
        let decay = Decay::new(0.0).unwrap();
        assert!(decay.evaluate_all(&graph).into_iter().all(|x| x == 0.0));
    }

    #[test]
    fn sums_over_distances() {
        let g = path_graph(false, 4);
        let decay = Decay::new(0.5).unwrap();
        assert_eq!(decay, Decay::default());
        assert_eq!(decay.evaluate_all(&g), vec![0.875, 1.25, 1.25, 0.875]);

        let decay = Decay::new(1.0).unwrap();
        assert_eq!(decay.evaluate_all(&path_graph(true, 4)), vec![3.0, 2.0, 1.0, 0.0]);
    }

    #[test]
    fn unreachable_nodes_do_not_contribute() {
        let g = Graph::from_edges(false, 4, [(0, 1)]);
        let decay = Decay::new(0.5).unwrap();
        assert_eq!(decay.evaluate_all(&g), vec![0.5, 0.5, 0.0, 0.0]);
    }
}
