use std::fmt::Display;

use crate::{prelude::*, testing::test_graph_ops};

/// The unified representation: an adjacency list and an adjacency matrix
/// kept in sync under every mutation.
///
/// Queries are routed to whichever half answers cheaper: edge lookups hit
/// the matrix (`O(1)`), out-degrees and row enumeration hit the list
/// (`O(1)` / `O(deg)`), and in-degree picks the matrix column scan once the
/// graph carries more edges than nodes.
///
/// Zero-weight edges are a representational blind spot of the matrix half
/// (a zero cell means "no edge"), so duplicate detection during insertion
/// is routed through the list half instead. The blind spot still shows in
/// matrix-routed queries: `is_edge` answers *false* for a zero-weight
/// edge, and once `in_degree` switches to the column scan it does not
/// count zero-weight entries either.
#[derive(Clone)]
pub struct Graph {
    list: ListGraph,
    matrix: MatrixGraph,
}

impl Graph {
    /// Returns the list half
    pub fn as_list(&self) -> &ListGraph {
        &self.list
    }

    /// Returns the matrix half
    pub fn as_matrix(&self) -> &MatrixGraph {
        &self.matrix
    }
}

impl GraphOrder for Graph {
    fn order(&self) -> NumNodes {
        self.list.order()
    }

    fn size(&self) -> NumEdges {
        self.list.size()
    }

    fn is_weighted(&self) -> bool {
        self.list.is_weighted()
    }

    fn is_directed(&self) -> bool {
        self.list.is_directed()
    }
}

impl GraphNew for Graph {
    fn new(order: NumNodes, weighted: bool, directed: bool) -> Self {
        Self {
            list: ListGraph::new(order, weighted, directed),
            matrix: MatrixGraph::new(order, weighted, directed),
        }
    }
}

impl AdjacencyScan for Graph {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Edge> + '_ {
        self.list.neighbors_of(u)
    }
}

impl AdjacencyTest for Graph {
    fn is_edge(&self, a: Node, b: Node) -> bool {
        self.matrix.is_edge(a, b)
    }
}

impl Degrees for Graph {
    fn out_degree(&self, v: Node) -> Degree {
        self.list.out_degree(v)
    }

    fn in_degree(&self, v: Node) -> Degree {
        // The column scan beats the full list scan once the graph carries
        // more edges than nodes
        if (self.order() as NumEdges) < self.size() {
            self.matrix.in_degree(v)
        } else {
            self.list.in_degree(v)
        }
    }
}

impl GraphEdgeEditing for Graph {
    fn add_vertices(&mut self, amount: NumNodes) {
        self.list.add_vertices(amount);
        self.matrix.add_vertices(amount);
    }

    fn add_weighted_edge(&mut self, a: Node, b: Node, w: Weight) -> bool {
        let added = self.list.add_weighted_edge(a, b, w);
        if added {
            self.matrix.add_weighted_edge(a, b, w);
        }
        added
    }

    fn remove_edge(&mut self, a: Node, b: Node) -> bool {
        let found = self.list.remove_edge(a, b);
        self.matrix.remove_edge(a, b);
        found
    }
}

impl Display for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.list.fmt(f)
    }
}

test_graph_ops!(test_dual_graph, Graph);
