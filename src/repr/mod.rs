/*!
# Graph Representations

This module defines the storage backends of the crate:

- [`ListGraph`] — per-node rows of outgoing [`Edge`]s. Cheap edge
  enumeration and `O(1)` out-degree, `O(deg)` edge lookup.
- [`MatrixGraph`] — a dense `order x order` weight table. `O(1)` edge
  lookup, `O(order)` degree queries and row enumeration.
- [`Graph`] — the unified variant keeping one of each in sync and routing
  every query to whichever half answers it cheaper.

All three implement the same operation traits from [`crate::ops`] and must
answer identically for identical edge sequences; the algorithms in
[`crate::algo`] only see the [`AdjacencyScan`](crate::ops::AdjacencyScan)
seam and never care which backend they run on.
*/

mod dual;
mod list;
mod matrix;

pub use dual::*;
pub use list::*;
pub use matrix::*;

pub(crate) mod macros {
    /// Implements the order getters and the grow/insert/remove edge policy
    /// shared by the two storage backends. Expects the struct to carry the
    /// fields `rows`, `num_edges`, `weighted`, `directed` and to provide the
    /// inherent helpers `grow`, `insert_arc`, `remove_arc`.
    macro_rules! impl_common_graph_ops {
        ($struct:ident) => {
            impl GraphOrder for $struct {
                fn order(&self) -> NumNodes {
                    self.rows.len() as NumNodes
                }

                fn size(&self) -> NumEdges {
                    self.num_edges
                }

                fn is_weighted(&self) -> bool {
                    self.weighted
                }

                fn is_directed(&self) -> bool {
                    self.directed
                }
            }

            impl GraphNew for $struct {
                fn new(order: NumNodes, weighted: bool, directed: bool) -> Self {
                    let mut graph = Self {
                        rows: Vec::new(),
                        num_edges: 0,
                        weighted,
                        directed,
                    };
                    graph.grow(order);
                    graph
                }
            }

            impl GraphEdgeEditing for $struct {
                fn add_vertices(&mut self, amount: NumNodes) {
                    self.grow(amount);
                }

                fn add_weighted_edge(&mut self, a: Node, b: Node, w: Weight) -> bool {
                    if self.is_edge(a, b) {
                        return false;
                    }

                    let max_node = a.max(b);
                    if max_node >= self.order() {
                        self.grow(max_node - self.order() + 1);
                    }

                    let w = if self.weighted { w } else { DEFAULT_WEIGHT };
                    self.insert_arc(a, b, w);
                    if !self.directed && a != b {
                        self.insert_arc(b, a, w);
                    }

                    self.num_edges += 1;
                    true
                }

                fn remove_edge(&mut self, a: Node, b: Node) -> bool {
                    if a as usize >= self.len() || b as usize >= self.len() {
                        return false;
                    }

                    let found = self.remove_arc(a, b);
                    if !self.directed && a != b {
                        self.remove_arc(b, a);
                    }

                    // Decrements even if nothing was found; see the trait docs
                    self.num_edges -= 1;
                    found
                }
            }
        };
    }

    pub(crate) use impl_common_graph_ops;
}

#[cfg(test)]
mod equivalence {
    use crate::prelude::*;
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    /// Applies the same random mutation sequence to all three backends and
    /// asserts that every query of the public contract agrees.
    #[test]
    fn representations_agree_under_random_mutations() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);

        for directed in [false, true] {
            for weighted in [false, true] {
                for _ in 0..20 {
                    let n: NumNodes = rng.random_range(2..20);

                    let mut list = ListGraph::new(n, weighted, directed);
                    let mut matrix = MatrixGraph::new(n, weighted, directed);
                    let mut dual = Graph::new(n, weighted, directed);

                    for _ in 0..(3 * n) {
                        let a = rng.random_range(0..n);
                        let b = rng.random_range(0..n);
                        let w = rng.random_range(1..10);

                        if rng.random_bool(0.7) {
                            let r = list.add_weighted_edge(a, b, w);
                            assert_eq!(r, matrix.add_weighted_edge(a, b, w));
                            assert_eq!(r, dual.add_weighted_edge(a, b, w));
                        } else if list.is_edge(a, b) {
                            // Only remove existing edges so `size` stays in
                            // sync with the actual edge count
                            assert!(list.remove_edge(a, b));
                            assert!(matrix.remove_edge(a, b));
                            assert!(dual.remove_edge(a, b));
                        }
                    }

                    assert_eq!(list.order(), matrix.order());
                    assert_eq!(list.order(), dual.order());
                    assert_eq!(list.size(), matrix.size());
                    assert_eq!(list.size(), dual.size());

                    for a in 0..(n + 2) {
                        assert_eq!(list.out_degree(a), matrix.out_degree(a));
                        assert_eq!(list.out_degree(a), dual.out_degree(a));
                        assert_eq!(list.in_degree(a), matrix.in_degree(a));
                        assert_eq!(list.in_degree(a), dual.in_degree(a));
                        assert_eq!(list.degree(a), matrix.degree(a));
                        assert_eq!(list.degree(a), dual.degree(a));

                        for b in 0..(n + 2) {
                            assert_eq!(list.is_edge(a, b), matrix.is_edge(a, b));
                            assert_eq!(list.is_edge(a, b), dual.is_edge(a, b));
                        }
                    }

                    // Same logical edge set, possibly enumerated in
                    // different orders
                    let list_edges = list.edges().sorted().collect_vec();
                    let matrix_edges = matrix.edges().sorted().collect_vec();
                    let dual_edges = dual.edges().sorted().collect_vec();
                    assert_eq!(list_edges, matrix_edges);
                    assert_eq!(list_edges, dual_edges);
                }
            }
        }
    }

    #[test]
    fn mirrored_insertions_stay_symmetric() {
        let rng = &mut Pcg64Mcg::seed_from_u64(11);

        let n: NumNodes = 12;
        let mut graph = Graph::new(n, false, false);

        for _ in 0..100 {
            let a = rng.random_range(0..n);
            let b = rng.random_range(0..n);

            if rng.random_bool(0.6) {
                graph.add_edge(a, b);
            } else if graph.is_edge(a, b) {
                graph.remove_edge(a, b);
            }

            for u in 0..n {
                for v in 0..n {
                    assert_eq!(graph.is_edge(u, v), graph.is_edge(v, u));
                }
            }
        }
    }
}
