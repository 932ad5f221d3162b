use crate::{prelude::*, repr::macros::impl_common_graph_ops, testing::test_graph_ops};

/// Adjacency-matrix representation: a dense `order x order` weight table.
///
/// A zero cell means "no edge"; any other value is the stored weight.
/// Edge lookup is `O(1)`, every degree query and row enumeration is
/// `O(order)`.
#[derive(Clone)]
pub struct MatrixGraph {
    rows: Vec<Vec<Weight>>,
    num_edges: NumEdges,
    weighted: bool,
    directed: bool,
}

impl_common_graph_ops!(MatrixGraph);

impl MatrixGraph {
    fn grow(&mut self, amount: NumNodes) {
        let order = self.rows.len() + amount as usize;
        for row in &mut self.rows {
            row.resize(order, 0);
        }
        self.rows.resize_with(order, || vec![0; order]);
    }

    fn insert_arc(&mut self, a: Node, b: Node, w: Weight) {
        self.rows[a as usize][b as usize] = w;
    }

    fn remove_arc(&mut self, a: Node, b: Node) -> bool {
        let cell = &mut self.rows[a as usize][b as usize];
        let found = *cell != 0;
        *cell = 0;
        found
    }

    /// Returns the weight row of a given node as a slice.
    /// ** Panics if `u >= order` **
    pub fn row(&self, u: Node) -> &[Weight] {
        &self.rows[u as usize]
    }
}

impl AdjacencyScan for MatrixGraph {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Edge> + '_ {
        self.rows[u as usize]
            .iter()
            .enumerate()
            .filter_map(|(v, &w)| (w != 0).then(|| Edge::new(v as Node, w)))
    }
}

impl AdjacencyTest for MatrixGraph {
    fn is_edge(&self, a: Node, b: Node) -> bool {
        if a as usize >= self.len() || b as usize >= self.len() {
            return false;
        }
        self.rows[a as usize][b as usize] != 0
    }
}

impl Degrees for MatrixGraph {
    fn out_degree(&self, v: Node) -> Degree {
        if v as usize >= self.len() {
            return INVALID_DEGREE;
        }
        self.rows[v as usize].iter().filter(|&&w| w != 0).count() as Degree
    }

    fn in_degree(&self, v: Node) -> Degree {
        if v as usize >= self.len() {
            return INVALID_DEGREE;
        }
        self.rows
            .iter()
            .filter(|row| row[v as usize] != 0)
            .count() as Degree
    }
}

test_graph_ops!(test_matrix_graph, MatrixGraph);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn growth_keeps_rows_square() {
        let mut g = MatrixGraph::new(2, false, true);
        g.add_edge(0, 1);
        g.add_vertices(3);

        assert_eq!(g.order(), 5);
        for u in 0..5 {
            assert_eq!(g.row(u).len(), 5);
        }
        assert!(g.is_edge(0, 1));
        assert!(!g.is_edge(1, 4));
    }

    #[test]
    fn unweighted_coerces_cell_to_one() {
        let mut g = MatrixGraph::new(2, false, true);
        g.add_weighted_edge(0, 1, 42);
        assert_eq!(g.row(0)[1], 1);

        let mut g = MatrixGraph::new(2, true, true);
        g.add_weighted_edge(0, 1, 42);
        assert_eq!(g.row(0)[1], 42);
    }
}
