use std::fmt::{Debug, Display};

use crate::node::{Node, NumNodes};

/// An edge between two node indices.
/// Whether it is read as directed or not is up to the graph it belongs to.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

/// Number of edges of a graph. Edge spaces of `n` nodes are enumerated in `u64`.
pub type NumEdges = u64;

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Returns the edge with the smaller endpoint first
    pub fn normalized(&self) -> Self {
        Edge(self.0.min(self.1), self.0.max(self.1))
    }

    /// Returns *true* if the smaller endpoint comes first
    pub fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }

    /// Returns *true* if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Swaps both endpoints
    pub fn reverse(&self) -> Self {
        Edge(self.1, self.0)
    }

    /// Number of loop-free edges among `n` nodes.
    pub fn max_loopless(n: NumNodes, directed: bool) -> NumEdges {
        let n = n as NumEdges;
        if n < 2 {
            0
        } else if directed {
            n * (n - 1)
        } else {
            n * (n - 1) / 2
        }
    }

    /// Bijection from `0..n(n-1)` onto all directed edges of `n` nodes without self-loops.
    ///
    /// Index `x` picks the source `x / (n-1)` and the `x % (n-1)`-th other node as target.
    pub fn from_index_directed(x: u64, n: u64) -> Self {
        debug_assert!(n >= 2 && x < n * (n - 1));

        let u = x / (n - 1);
        let w = x % (n - 1);
        let v = if w >= u { w + 1 } else { w };
        Edge(u as Node, v as Node)
    }

    /// Bijection from `0..n(n-1)/2` onto all normalized loop-free edges of `n` nodes.
    ///
    /// Every node `u` is assigned the next `(n-1)/2` nodes modulo `n`. For even `n` this
    /// leaves one antipodal partner per node over, which the upper half of the nodes
    /// takes in addition.
    pub fn from_index_undirected(x: u64, n: u64) -> Self {
        debug_assert!(n >= 2 && x < n * (n - 1) / 2);

        let half = (n - 1) / 2;
        if n % 2 == 1 {
            let u = x / half;
            let v = (u + 1 + x % half) % n;
            return Edge(u as Node, v as Node).normalized();
        }

        let lower = half * (n / 2);
        if x < lower {
            let u = x / half;
            let v = u + 1 + x % half;
            return Edge(u as Node, v as Node);
        }

        let x = x - lower;
        let u = x / (half + 1) + n / 2;
        let v = (u + 1 + x % (half + 1)) % n;
        Edge(u as Node, v as Node).normalized()
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&(Node, Node)> for Edge {
    fn from(value: &(Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&Edge> for Edge {
    fn from(value: &Edge) -> Self {
        *value
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn directed_index_space_is_bijective() {
        for n in 2..12u64 {
            let edges = (0..n * (n - 1))
                .map(|x| Edge::from_index_directed(x, n))
                .collect_vec();

            assert!(edges.iter().all(|e| !e.is_loop()));
            assert!(edges.iter().all(|e| (e.0 as u64) < n && (e.1 as u64) < n));
            assert_eq!(edges.iter().unique().count() as u64, n * (n - 1));
        }
    }

    #[test]
    fn undirected_index_space_is_bijective() {
        for n in 2..12u64 {
            let edges = (0..n * (n - 1) / 2)
                .map(|x| Edge::from_index_undirected(x, n))
                .collect_vec();

            assert!(edges.iter().all(|e| !e.is_loop() && e.is_normalized()));
            assert!(edges.iter().all(|e| (e.1 as u64) < n));
            assert_eq!(edges.iter().unique().count() as u64, n * (n - 1) / 2);
        }
    }

    #[test]
    fn max_loopless() {
        assert_eq!(Edge::max_loopless(0, true), 0);
        assert_eq!(Edge::max_loopless(1, false), 0);
        assert_eq!(Edge::max_loopless(5, true), 20);
        assert_eq!(Edge::max_loopless(5, false), 10);
    }
}
