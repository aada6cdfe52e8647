/*!
`netmetrics` is a library for **measuring** and **generating** graphs:
- **metrics** assign numbers to nodes (betweenness, decay centrality, clique counts), to whole
  graphs (edge density) and to node subsets (additive and contractive combinations),
- **generators** produce graphs from deterministic families (complete, cycle, path, star,
  wheel) and random models (`G(n,p)`, `G(n,m)`, Watts–Strogatz, configuration model,
  preferential attachment).

# Representation

A [`Graph<L>`](crate::repr::Graph) is immutable and identifies its nodes by **labels** of any
hashable, ordered type `L`. Internally every node also has a dense **index** (a [`Node`](node::Node)
`= u32` in the range `0..n`), which all algorithms work on. Adjacency is stored in compressed
sparse rows, so neighborhoods are contiguous sorted slices.

### Directed vs Undirected

We support both **directed** and **undirected** graphs:

- In an **undirected** graph, an edge `{u, v}` is reported by both endpoints and counted once.
- In a **directed** graph, `(u, v)` and `(v, u)` are distinct; neighborhoods follow edge
  directions and the reverse adjacency is stored as well.

Parallel edges are collapsed; self-loops are kept but never produced by generators.

# Design

All metrics and generators are provided as configurable structs that one can alter to their
needs using the *Builder* / *Setter* pattern before applying them. Parameters are validated
when they are set, so applying a configured metric or generator never fails on them.
Randomized generators take the random source as an explicit argument.

# Usage

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, basic graph operations and the graph type,
- [`metrics`] includes node, global and subset metrics,
- [`gens`] includes deterministic and random graph generators,
- [`algo`] includes traversals (`graph.bfs(start_node)`, shortest path searches), bounded
  neighborhoods and graph contraction implemented on graphs itself.

[`registry`] lists all built-in metrics and generators by name for hosts that select them at
runtime. With the `parallel` feature, batch metric evaluation runs on `rayon`.

In most use-cases, `use netmetrics::{prelude::*, metrics::*};` suffices for your needs.

```rust
use netmetrics::{prelude::*, gens::*, metrics::*};

let star = Star::new().nodes(5).build();
let betweenness = Betweenness::new().apply_all(&star);
assert_eq!(betweenness[&0], 6.0);
assert_eq!(EdgeDensity.apply(&star), 0.4);
```

Diagnostics are emitted through `tracing`; the library never installs a subscriber.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod metrics;
pub mod node;
pub mod ops;
pub mod registry;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;
pub mod utils;

/// `netmetrics::prelude` includes definitions for nodes and edges, all basic graph operation traits as well as the graph type.
pub mod prelude {
    pub use super::{edge::*, node::*, ops::*, repr::*};
}
