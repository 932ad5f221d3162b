use std::fmt::{Debug, Display};

use crate::node::Node;

/// Edge weights. Unweighted graphs coerce every stored weight to
/// [`DEFAULT_WEIGHT`].
pub type Weight = i32;

/// Weight assigned to edges of unweighted graphs (and to edges inserted
/// without an explicit weight)
pub const DEFAULT_WEIGHT: Weight = 1;

/// Edge counts are signed: `remove_edge` decrements the count even when no
/// edge was removed, so a misused graph may report a negative size.
pub type NumEdges = i32;

/// A directed connection to a destination node, carrying a weight.
///
/// The source is implicit: edges live in the adjacency row of their source
/// node. Two edges are equal if destination **and** weight match; comparing
/// an edge against a bare [`Node`] matches on the destination alone.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge {
    pub dest: Node,
    pub weight: Weight,
}

impl Edge {
    /// Creates an edge towards `dest` with the given weight
    pub const fn new(dest: Node, weight: Weight) -> Self {
        Self { dest, weight }
    }

    /// Creates an edge towards `dest` with [`DEFAULT_WEIGHT`]
    pub const fn unweighted(dest: Node) -> Self {
        Self::new(dest, DEFAULT_WEIGHT)
    }
}

impl PartialEq<Node> for Edge {
    fn eq(&self, other: &Node) -> bool {
        self.dest == *other
    }
}

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.dest, self.weight)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl From<Node> for Edge {
    fn from(dest: Node) -> Self {
        Edge::unweighted(dest)
    }
}

impl From<(Node, Weight)> for Edge {
    fn from((dest, weight): (Node, Weight)) -> Self {
        Edge::new(dest, weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_overloads() {
        let e = Edge::new(3, 7);
        assert_eq!(e, 3u32);
        assert_ne!(e, 4u32);
        assert_eq!(e, Edge::new(3, 7));
        assert_ne!(e, Edge::new(3, 1));
    }

    #[test]
    fn display() {
        assert_eq!(Edge::new(2, 5).to_string(), "(2,5)");
        assert_eq!(Edge::unweighted(0).to_string(), "(0,1)");
    }
}
