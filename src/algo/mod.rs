/*!
# Graph Algorithms

Traversal and structural utilities the metrics engine is built on:
breadth-first search with shortest-path bookkeeping, distance-bounded neighborhoods,
induced edge counts and graph contraction.
All of them are re-exported at the top level of this module:
```rust
use netmetrics::{prelude::*, algo::*};

let graph = Graph::from_edges(false, 3, [(0, 1), (1, 2)]);
assert_eq!(graph.distances_from(0), vec![Some(0), Some(1), Some(2)]);
```
*/

mod contraction;
mod subgraph;
mod traversal;

use crate::{error::GraphError, prelude::*};

pub use contraction::*;
pub use subgraph::*;
pub use traversal::*;
