/*!
`wgraphs` is a small graph data structure & algorithms library built around
keeping *two* storage backends for the same graph:

- an **adjacency list** for cheap row enumeration and out-degrees,
- an **adjacency matrix** for constant-time edge lookups.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number
of nodes in the graph. As most common graphs do not exceed `2^32` nodes,
this should normally suffice and save space as compared to `u64/usize`.
**Edges** are stored as [`Edge`](crate::edge::Edge) structs carrying a
destination node and an `i32` weight.

### Directed vs Undirected

Every graph is constructed as either **directed** or **undirected**:

- In an **undirected** graph, inserting `(u, v)` also stores the mirror
  `(v, u)`; the pair counts as one logical edge.
- In a **directed** graph, the edge has orientation, so `(u, v)` and
  `(v, u)` are distinct.

### Weighted vs Unweighted

Likewise, a graph is constructed as **weighted** or **unweighted**. An
unweighted graph coerces every inserted weight to `1`, so traversal code
can treat the two uniformly.

### Available Representations

See the [`repr`] module for the graph storage backends:

- [`ListGraph`](crate::repr::ListGraph)
- [`MatrixGraph`](crate::repr::MatrixGraph)
- [`Graph`](crate::repr::Graph), the unified pair of both

Each representation makes different trade-offs in terms of memory usage and
lookup/iteration performance; [`Graph`](crate::repr::Graph) pays double the
memory to route every query to the cheaper backend.

# Design

Capability traits in [`ops`] split the graph interface into small pieces
(order, adjacency scans, edge tests, degrees, mutation), and all algorithms
in [`algo`] are written once against those traits, making them available as
methods on every representation.

Queries on out-of-range nodes answer sentinel values
([`UNREACHED`](crate::node::UNREACHED),
[`INVALID_DEGREE`](crate::node::INVALID_DEGREE), `false`) instead of
panicking; only the explicitly marked slice accessors panic.

# Usage

There are *3* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, basic graph
  operations, and all graph representations,
- [`algo`] includes algorithm traits implemented on the graphs themselves:
  BFS (`graph.bfs(anchor)`), 0-1-BFS, DFS, and cycle detection,
- [`repr`] gives access to the individual storage backends.

In most use-cases, `use wgraphs::{prelude::*, algo::*};` suffices for your
needs.

```rust
use wgraphs::{prelude::*, algo::*};

let mut g = Graph::from_edges(4, false, [(0, 1), (1, 2), (2, 3)]);
assert_eq!(g.bfs(0), vec![0, 1, 2, 3]);
assert!(!g.find_cycle());

g.add_edge(3, 0);
assert!(g.find_cycle());
```

# When to use

You should only use this library if the following apply:
- Your graphs are small enough that a dense matrix is affordable
- You want to work in *Rust*
- You require only basic functionality for graphs

In all other cases, it might make sense for you to check out
[petgraph](https://crates.io/crates/petgraph) who provide a more extensive
library for general graphs in *Rust*.
*/

pub mod algo;
pub mod edge;
pub mod node;
pub mod ops;
pub mod repr;
pub(crate) mod testing;

/// `wgraphs::prelude` includes definitions for nodes and edges, all basic graph operation traits as well as all implemented representations.
pub mod prelude {
    pub use super::{edge::*, node::*, ops::*, repr::*};
}
