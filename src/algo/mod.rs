/*!
# Graph Algorithms

Traversal and cycle-detection routines, written exactly once against the
[`AdjacencyScan`](crate::ops::AdjacencyScan) seam and therefore available as
methods on every representation:

```rust
use wgraphs::{prelude::*, algo::*};

let g = ListGraph::from_edges(4, false, [(0, 1), (1, 2), (2, 3)]);
assert_eq!(g.bfs(0), vec![0, 1, 2, 3]);
assert!(!g.find_cycle());
```
*/

mod cycle;
mod traversal;

pub use cycle::*;
pub use traversal::*;
