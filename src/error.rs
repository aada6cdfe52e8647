//! Error types for graph construction, metric evaluation and generator configuration.

use thiserror::Error;

/// An error produced while building or querying a [`crate::repr::Graph`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// A node label was referenced that is not part of the graph.
    #[error("node {label} is not part of the graph")]
    UnknownNode {
        /// Debug rendering of the offending label.
        label: String,
    },
    /// The same node label was supplied twice.
    #[error("node {label} was supplied more than once")]
    DuplicateNode {
        /// Debug rendering of the offending label.
        label: String,
    },
    /// A subset operation received no nodes.
    #[error("the node subset is empty")]
    EmptySubset,
    /// A contraction representative was chosen outside the contracted subset.
    #[error("representative {label} is not a member of the subset")]
    RepresentativeNotInSubset {
        /// Debug rendering of the offending label.
        label: String,
    },
}

impl GraphError {
    pub(crate) fn unknown<L: std::fmt::Debug>(label: &L) -> Self {
        Self::UnknownNode {
            label: format!("{label:?}"),
        }
    }
}

/// An error produced when a metric or generator parameter is set to an invalid value.
///
/// Parameters are validated when they are set; generation itself never fails on them.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ParameterError {
    /// A probability outside `[0, 1]`.
    #[error("{name} must be a probability in [0, 1] (got {value})")]
    InvalidProbability {
        /// Name of the parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// A decay factor outside `[0, 1]`.
    #[error("decay factor must lie in [0, 1] (got {alpha})")]
    InvalidDecay {
        /// The rejected value.
        alpha: f64,
    },
    /// The degree histogram of an undirected model has an odd degree sum.
    #[error("degree sum {sum} is odd; undirected edges need an even number of stubs")]
    OddDegreeSum {
        /// Sum over all requested degrees.
        sum: u64,
    },
    /// A requested degree cannot be realized without loops or multi-edges.
    #[error("degree {degree} cannot be realized with {nodes} nodes")]
    DegreeTooLarge {
        /// The largest requested degree.
        degree: usize,
        /// Number of nodes described by the histogram.
        nodes: u64,
    },
    /// A degree histogram describes more nodes than a graph can index.
    #[error("histogram describes {nodes} nodes, more than a graph can hold")]
    TooManyNodes {
        /// Sum over all histogram entries.
        nodes: u64,
    },
    /// The ring lattice degree does not fit the number of nodes.
    #[error("ring degree {k} requires more than {n} nodes")]
    RingDegreeTooLarge {
        /// Requested (even) ring degree.
        k: u32,
        /// Number of nodes.
        n: u32,
    },
    /// A probability vector was empty.
    #[error("distribution over added edges is empty")]
    EmptyDistribution,
    /// A probability vector does not sum to one.
    #[error("distribution over added edges sums to {sum}, expected 1")]
    DistributionNotNormalized {
        /// Sum over the supplied entries.
        sum: f64,
    },
    /// A fixed number of edges per new node of zero.
    #[error("at least one edge must be added per new node")]
    ZeroEdgesPerNode,
    /// A seed graph was directed.
    #[error("seed graph must be undirected")]
    DirectedSeed,
    /// A seed graph had no nodes.
    #[error("seed graph must contain at least one node")]
    EmptySeed,
    /// A seed graph had no edges.
    #[error("seed graph must contain at least one edge")]
    EdgelessSeed,
}
