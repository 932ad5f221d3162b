/*!
# Node Representation

We choose `Node = u32` as graphs in this crate are classroom-scale and never
come close to `2^32` vertices. Identifiers are dense: a graph of order `n`
owns exactly the nodes `0..n`, and inserting an edge that references a node
`>= n` implicitly grows the graph.

Query results that can fail use signed sentinel types instead of `Option`s or
errors: degree queries answer [`INVALID_DEGREE`] and distance arrays use
[`UNREACHED`] for vertices a traversal never discovered.
*/

/// Nodes are dense unsigned integers in `0..order`
pub type Node = u32;

/// Number of nodes of a graph (its *order*)
pub type NumNodes = Node;

/// Node-value that is considered invalid; used as the "no parent" marker
/// in traversals
pub const INVALID_NODE: Node = Node::MAX;

/// Degrees are signed so that out-of-range queries can answer `-1`
/// instead of failing
pub type Degree = i32;

/// Sentinel answer of all degree queries for nodes outside `0..order`
pub const INVALID_DEGREE: Degree = -1;

/// Hop-count distances produced by the breadth-first traversals
pub type Distance = i32;

/// Sentinel distance of nodes that a traversal never reached
pub const UNREACHED: Distance = -1;
