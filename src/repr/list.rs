use std::fmt::{Display, Write as _};

use itertools::Itertools;

use crate::{prelude::*, repr::macros::impl_common_graph_ops, testing::test_graph_ops};

/// Adjacency-list representation: one row of outgoing [`Edge`]s per node.
///
/// Edge lookup scans the source row (`O(deg)`), out-degree is `O(1)` and
/// in-degree is a full scan over all stored entries (`O(size)`). Rows keep
/// insertion order; removal shifts the remaining entries.
#[derive(Clone)]
pub struct ListGraph {
    rows: Vec<Vec<Edge>>,
    num_edges: NumEdges,
    weighted: bool,
    directed: bool,
}

impl_common_graph_ops!(ListGraph);

impl ListGraph {
    fn grow(&mut self, amount: NumNodes) {
        let order = self.rows.len() + amount as usize;
        self.rows.resize_with(order, Vec::new);
    }

    fn insert_arc(&mut self, a: Node, b: Node, w: Weight) {
        self.rows[a as usize].push(Edge::new(b, w));
    }

    fn remove_arc(&mut self, a: Node, b: Node) -> bool {
        let row = &mut self.rows[a as usize];
        if let Some((pos, _)) = row.iter().find_position(|e| **e == b) {
            row.remove(pos);
            true
        } else {
            false
        }
    }

    /// Returns the adjacency row of a given node as a slice.
    /// ** Panics if `u >= order` **
    pub fn row(&self, u: Node) -> &[Edge] {
        &self.rows[u as usize]
    }
}

impl AdjacencyScan for ListGraph {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Edge> + '_ {
        self.rows[u as usize].iter().copied()
    }
}

impl AdjacencyTest for ListGraph {
    fn is_edge(&self, a: Node, b: Node) -> bool {
        if a as usize >= self.len() || b as usize >= self.len() {
            return false;
        }
        self.rows[a as usize].iter().any(|e| *e == b)
    }
}

impl Degrees for ListGraph {
    fn out_degree(&self, v: Node) -> Degree {
        if v as usize >= self.len() {
            return INVALID_DEGREE;
        }
        self.rows[v as usize].len() as Degree
    }

    fn in_degree(&self, v: Node) -> Degree {
        if v as usize >= self.len() {
            return INVALID_DEGREE;
        }
        self.rows
            .iter()
            .flatten()
            .filter(|e| **e == v)
            .count() as Degree
    }
}

/// Renders one line per node: `<id> | [dest weight][dest weight]...`,
/// the weight omitted for unweighted graphs.
///
/// # Examples
/// ```
/// use wgraphs::prelude::*;
///
/// let g = ListGraph::from_edges(3, true, [(0, 1), (0, 2)]);
/// assert_eq!(g.to_string(), "0 | [1][2]\n1 | \n2 | \n");
/// ```
impl Display for ListGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut out = String::new();
        for (u, row) in self.rows.iter().enumerate() {
            write!(out, "{u} | ")?;
            for e in row {
                if self.weighted {
                    write!(out, "[{} {}]", e.dest, e.weight)?;
                } else {
                    write!(out, "[{}]", e.dest)?;
                }
            }
            out.push('\n');
        }
        f.write_str(&out)
    }
}

test_graph_ops!(test_list_graph, ListGraph);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weighted_rendering() {
        let g = ListGraph::from_weighted_edges(2, false, [(0, 1, 5)]);
        assert_eq!(g.to_string(), "0 | [1 5]\n1 | [0 5]\n");
    }

    #[test]
    fn rows_keep_insertion_order() {
        let g = ListGraph::from_edges(4, true, [(0, 3), (0, 1), (0, 2)]);
        let row = g.row(0).iter().map(|e| e.dest).collect::<Vec<_>>();
        assert_eq!(row, vec![3, 1, 2]);
    }
}
