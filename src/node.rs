/*!
# Node Representation

Graphs in this crate carry two notions of a node:

- a **label** of an arbitrary, caller-chosen type `L` (see [`Label`]) that identifies the node
  towards the outside world, and
- a dense internal **index** of type [`Node`] in the range `0..n`, assigned in insertion order.

All algorithms work on indices, which keeps adjacency compact and lets us use flat arrays and
bitsets for per-node state. Results are translated back to labels at the API boundary.

We choose `Node = u32` as almost all use-cases involve less than `2^32` nodes.
*/

use std::{fmt::Debug, hash::Hash};

use stream_bitset::bitset::BitSetImpl;

/// Dense node index from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// BitSet over node indices
pub type NodeBitSet = BitSetImpl<Node>;

/// Identity of a node as seen by callers.
///
/// Any cloneable, hashable and totally ordered type that can be shared between threads
/// qualifies; integers, strings and small tuples are the common choices.
/// Generators in this crate produce graphs labelled by [`Node`].
pub trait Label: Clone + Eq + Hash + Ord + Debug + Send + Sync {}

impl<T> Label for T where T: Clone + Eq + Hash + Ord + Debug + Send + Sync {}
