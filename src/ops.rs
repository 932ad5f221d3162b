use std::ops::Range;

use crate::{edge::*, node::*};

/// Provides getters pertaining to the size and flags of a graph
pub trait GraphOrder {
    /// Returns the number of nodes of the graph (its *order*)
    fn order(&self) -> NumNodes;

    /// Returns the number of logical edges of the graph (its *size*).
    ///
    /// An undirected edge stores two mirrored entries but counts once here.
    /// Note that `remove_edge` decrements this count even if no edge was
    /// removed, so the value is only meaningful if edges are removed at most
    /// once (see [`GraphEdgeEditing::remove_edge`]).
    fn size(&self) -> NumEdges;

    /// Returns *true* if caller-supplied edge weights are stored verbatim.
    /// Unweighted graphs coerce every weight to [`DEFAULT_WEIGHT`].
    fn is_weighted(&self) -> bool;

    /// Returns *true* if edges have an orientation. Undirected graphs mirror
    /// every insertion and removal symmetrically.
    fn is_directed(&self) -> bool;

    /// Returns the number of nodes as usize
    fn len(&self) -> usize {
        self.order() as usize
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.order() == 0
    }

    /// Returns an iterator over V. The range does not borrow the graph and
    /// may be used where additional references of the graph are needed.
    fn vertices(&self) -> Range<Node> {
        0..self.order()
    }
}

/// The minimal neighbor-enumeration capability every representation offers.
///
/// All traversal and cycle-detection algorithms in [`crate::algo`] are
/// written once against this trait rather than per representation.
pub trait AdjacencyScan: GraphOrder {
    /// Returns an iterator over the outgoing edges of a given node.
    /// ** Panics if `u >= order` **
    ///
    /// For undirected graphs this enumerates the mirrored entries as well,
    /// i.e. every incident edge appears in the rows of both endpoints.
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Edge> + '_;

    /// Returns an iterator over all stored `(source, edge)` pairs.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::prelude::*;
    ///
    /// let g = ListGraph::from_edges(3, true, [(0, 1), (1, 2)]);
    /// assert_eq!(g.edges().count(), 2);
    /// ```
    fn edges(&self) -> impl Iterator<Item = (Node, Edge)> + '_
    where
        Self: Sized,
    {
        self.vertices()
            .flat_map(move |u| self.neighbors_of(u).map(move |e| (u, e)))
    }
}

/// Trait to test existence of edges in a graph
pub trait AdjacencyTest: GraphOrder {
    /// Returns *true* if the directed edge `(a,b)` exists in the graph.
    /// Answers *false* (never faults) if either endpoint is out of range.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::prelude::*;
    ///
    /// let g = MatrixGraph::from_edges(2, false, [(0, 1)]);
    /// assert!(g.is_edge(0, 1));
    /// assert!(g.is_edge(1, 0)); // mirrored: the graph is undirected
    /// assert!(!g.is_edge(0, 7));
    /// ```
    fn is_edge(&self, a: Node, b: Node) -> bool;
}

/// Degree queries. All answer [`INVALID_DEGREE`] for out-of-range nodes.
pub trait Degrees: GraphOrder {
    /// Returns the number of outgoing edges of `v`, or `-1` if `v` is out
    /// of range
    fn out_degree(&self, v: Node) -> Degree;

    /// Returns the number of incoming edges of `v`, or `-1` if `v` is out
    /// of range
    fn in_degree(&self, v: Node) -> Degree;

    /// Returns the total degree of `v`: in- plus out-degree for directed
    /// graphs, the out-degree alone for undirected ones (where both
    /// coincide). Answers `-1` if `v` is out of range.
    fn degree(&self, v: Node) -> Degree {
        if v as usize >= self.len() {
            return INVALID_DEGREE;
        }
        if self.is_directed() {
            self.in_degree(v) + self.out_degree(v)
        } else {
            self.out_degree(v)
        }
    }

    /// Returns an iterator over the total degrees of all nodes
    fn degrees(&self) -> impl Iterator<Item = Degree> + '_
    where
        Self: Sized,
    {
        self.vertices().map(|v| self.degree(v))
    }

    /// Returns the maximum total degree in the graph (0 if it has no nodes)
    fn max_degree(&self) -> Degree
    where
        Self: Sized,
    {
        self.degrees().max().unwrap_or(0)
    }
}

/// Provides functions to insert/delete nodes and edges
pub trait GraphEdgeEditing: GraphOrder {
    /// Appends `amount` fresh isolated nodes, growing every adjacency
    /// structure zero/empty-initialized. There is no upper bound; unbounded
    /// growth is caller responsibility.
    fn add_vertices(&mut self, amount: NumNodes);

    /// Adds the edge `(a,b)` with an explicit weight.
    ///
    /// - Returns *false* without touching the graph if the edge exists.
    /// - Grows the graph if `a` or `b` is out of range.
    /// - Coerces `w` to [`DEFAULT_WEIGHT`] if the graph is unweighted.
    /// - Mirrors the insertion as `(b,a)` if the graph is undirected
    ///   (self-loops are stored once).
    /// - Increments `size` once and returns *true*.
    fn add_weighted_edge(&mut self, a: Node, b: Node, w: Weight) -> bool;

    /// Adds the edge `(a,b)` with [`DEFAULT_WEIGHT`].
    /// See [`GraphEdgeEditing::add_weighted_edge`].
    ///
    /// # Examples
    /// ```
    /// use wgraphs::prelude::*;
    ///
    /// let mut g = ListGraph::new(2, false, true);
    /// assert!(g.add_edge(0, 1));
    /// assert!(!g.add_edge(0, 1)); // duplicate
    /// assert!(g.add_edge(0, 5)); // grows the graph
    /// assert_eq!(g.order(), 6);
    /// ```
    fn add_edge(&mut self, a: Node, b: Node) -> bool {
        self.add_weighted_edge(a, b, DEFAULT_WEIGHT)
    }

    /// Adds all edges in the collection with [`DEFAULT_WEIGHT`]
    fn add_edges<I>(&mut self, edges: I)
    where
        I: IntoIterator<Item = (Node, Node)>,
    {
        for (a, b) in edges {
            self.add_edge(a, b);
        }
    }

    /// Adds all weighted edges in the collection
    fn add_weighted_edges<I>(&mut self, edges: I)
    where
        I: IntoIterator<Item = (Node, Node, Weight)>,
    {
        for (a, b, w) in edges {
            self.add_weighted_edge(a, b, w);
        }
    }

    /// Removes the edge `(a,b)` (and its mirror if the graph is undirected)
    /// and returns whether the forward entry was found.
    ///
    /// `size` is decremented **unconditionally**, even if the edge was
    /// absent — a documented quirk inherited from the reference semantics:
    /// callers removing non-existent edges desynchronize `size` from the
    /// actual edge count and may drive it negative. Out-of-range endpoints
    /// return *false* without touching `size`.
    fn remove_edge(&mut self, a: Node, b: Node) -> bool;
}

/// Trait for creating a new empty graph
pub trait GraphNew {
    /// Creates a graph with `order` isolated nodes and no edges
    fn new(order: NumNodes, weighted: bool, directed: bool) -> Self;
}

/// A super trait for creating a graph from scratch from a set of edges
pub trait GraphFromScratch: GraphNew + GraphEdgeEditing + Sized {
    /// Creates an unweighted graph from a number of nodes and an iterator
    /// over edges
    fn from_edges<I>(order: NumNodes, directed: bool, edges: I) -> Self
    where
        I: IntoIterator<Item = (Node, Node)>,
    {
        let mut graph = Self::new(order, false, directed);
        graph.add_edges(edges);
        graph
    }

    /// Creates a weighted graph from a number of nodes and an iterator over
    /// weighted edges
    fn from_weighted_edges<I>(order: NumNodes, directed: bool, edges: I) -> Self
    where
        I: IntoIterator<Item = (Node, Node, Weight)>,
    {
        let mut graph = Self::new(order, true, directed);
        graph.add_weighted_edges(edges);
        graph
    }
}

impl<G: GraphNew + GraphEdgeEditing> GraphFromScratch for G {}
