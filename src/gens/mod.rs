/*!
# Graph Generators

Every generator is a small builder struct that doubles as its own parameter object:

1. Create a generator instance (e.g., `Gnp::new()`).
2. Set parameters using builder methods (e.g., `.nodes(n).prob(p)?`). Setters that can receive
   invalid values return a `Result` and reject them right away.
3. Generate a graph via [`GraphGenerator::generate`] with a caller-provided random source.

All generated graphs are labelled by their node indices `0..n`, are simple (no parallel edges)
and contain no self-loops.

Supported models include:
- deterministic families: [`Complete`], [`Cycle`], [`Path`], [`Star`] and [`Wheel`],
- `G(n,p)`: every loop-free edge independently with probability `p` ([`Gnp`]),
- `G(n,m)`: uniform graphs with exactly `m` edges ([`Gnm`]),
- [`WattsStrogatz`]: small-world graphs by rewiring a ring lattice,
- [`DegreeSequence`]: the configuration model for a prescribed degree histogram,
- [`PreferentialAttachment`]: Barabási–Albert growth from a seed graph.

```rust
use netmetrics::{prelude::*, gens::*};
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

let rng = &mut Pcg64Mcg::seed_from_u64(1);
let graph = Gnm::new().nodes(10).edges(15).generate(rng);
assert_eq!(graph.number_of_edges(), 15);

let wheel = Wheel::new().nodes(5).build();
assert_eq!(wheel.degree_of(0), 4);
```
*/

use rand::{Rng, RngCore};

use crate::prelude::*;

mod degree_sequence;
mod deterministic;
mod gnm;
mod gnp;
mod preferential;
mod watts_strogatz;

pub use degree_sequence::*;
pub use deterministic::*;
pub use gnm::*;
pub use gnp::*;
pub use preferential::*;
pub use watts_strogatz::*;

/// Trait for generators that allow setting the number of nodes.
///
/// This is the most common builder trait across all generators.
pub trait NumNodesGen {
    /// Sets the number of nodes in the graph generator.
    fn nodes(self, n: NumNodes) -> Self;
}

/// Trait for generators that allow setting the number of edges.
pub trait NumEdgesGen {
    /// Sets the number of edges in the graph generator.
    fn edges(self, m: NumEdges) -> Self;
}

/// Trait for generators that can produce both directed and undirected graphs.
pub trait DirectedGen: Sized {
    /// Marks the generated graphs as directed (or not).
    fn directed(self, directed: bool) -> Self;

    /// Marks the generated graphs as undirected (or not).
    fn undirected(self, undirected: bool) -> Self {
        self.directed(!undirected)
    }
}

/// Display name shared by all generator traits
pub trait NamedGenerator {
    /// Stable display name of the model
    fn name(&self) -> &str;
}

/// A configured random graph model.
pub trait GraphGenerator: NamedGenerator {
    /// Generates a graph drawing all randomness from `rng`.
    /// Equal seeds of a deterministic `rng` produce equal graphs.
    fn generate<R>(&self, rng: &mut R) -> Graph
    where
        R: Rng;

    /// Generates a graph using the thread-local generator [`rand::rng`]
    fn generate_default(&self) -> Graph {
        self.generate(&mut rand::rng())
    }
}

/// A generator whose output does not depend on randomness.
///
/// Every deterministic generator is a [`GraphGenerator`] that ignores its random source.
pub trait DeterministicGenerator: NamedGenerator {
    /// Builds the graph
    fn build(&self) -> Graph;
}

impl<G> GraphGenerator for G
where
    G: DeterministicGenerator,
{
    fn generate<R>(&self, _rng: &mut R) -> Graph
    where
        R: Rng,
    {
        self.build()
    }
}

/// Object-safe view of a [`GraphGenerator`], e.g. for heterogeneous collections of
/// generators as in [`crate::registry`].
pub trait DynGenerator: NamedGenerator + Send + Sync {
    /// Generates a graph drawing all randomness from `rng`
    fn generate_dyn(&self, rng: &mut dyn RngCore) -> Graph;
}

impl<G> DynGenerator for G
where
    G: GraphGenerator + Send + Sync,
{
    fn generate_dyn(&self, mut rng: &mut dyn RngCore) -> Graph {
        self.generate(&mut rng)
    }
}
