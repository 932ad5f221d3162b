/*!
Breadth- and depth-first traversals.

All three traversals run on anything implementing
[`AdjacencyScan`](crate::ops::AdjacencyScan) and produce transient value
arrays with no back-reference to the graph. Out-of-range anchors yield the
all-unreached result instead of failing, in line with the crate-wide
sentinel convention.
*/

use std::collections::VecDeque;

use crate::prelude::*;

/// Provides traversal methods on every graph representation
pub trait Traversal: AdjacencyScan + Sized {
    /// Level-order traversal from `anchor`.
    ///
    /// Returns a distance array of length `order`: `dist[anchor] = 0`,
    /// `dist[v]` is the number of edge hops on a shortest path from the
    /// anchor, and [`UNREACHED`] marks vertices no path leads to. FIFO
    /// queue discipline guarantees shortest hop counts in the unweighted
    /// sense; edge weights are ignored.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = Graph::from_edges(4, false, [(0, 1), (1, 2), (2, 3)]);
    /// assert_eq!(g.bfs(0), vec![0, 1, 2, 3]);
    /// assert_eq!(g.bfs(3), vec![3, 2, 1, 0]);
    /// ```
    fn bfs(&self, anchor: Node) -> Vec<Distance> {
        let mut dist = vec![UNREACHED; self.len()];
        if anchor as usize >= self.len() {
            return dist;
        }

        let mut queue = VecDeque::new();
        dist[anchor as usize] = 0;
        queue.push_back(anchor);

        while let Some(u) = queue.pop_front() {
            for e in self.neighbors_of(u) {
                if dist[e.dest as usize] == UNREACHED {
                    dist[e.dest as usize] = dist[u as usize] + 1;
                    queue.push_back(e.dest);
                }
            }
        }

        dist
    }

    /// Deque-based shortest distances for graphs whose edge weights are
    /// restricted to `{0, 1}`.
    ///
    /// A zero-weight edge re-enters the frontier at the *front* with the
    /// current distance, a weight-1 edge at the *back* with distance + 1,
    /// so the deque is processed in non-decreasing distance order and no
    /// priority queue is needed. A vertex reached again over a cheaper
    /// path is re-relaxed. The result is unspecified if any edge carries
    /// a weight other than 0 or 1 (weights are not checked; every nonzero
    /// weight counts one hop).
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = ListGraph::from_weighted_edges(3, true, [(0, 1, 1), (0, 2, 0), (2, 1, 0)]);
    /// assert_eq!(g.zero_one_bfs(0), vec![0, 0, 0]);
    /// ```
    fn zero_one_bfs(&self, anchor: Node) -> Vec<Distance> {
        let mut dist = vec![UNREACHED; self.len()];
        if anchor as usize >= self.len() {
            return dist;
        }

        let mut deque = VecDeque::new();
        dist[anchor as usize] = 0;
        deque.push_back(anchor);

        while let Some(u) = deque.pop_front() {
            for e in self.neighbors_of(u) {
                let hop = (e.weight != 0) as Distance;
                let d = dist[u as usize] + hop;

                if dist[e.dest as usize] == UNREACHED || d < dist[e.dest as usize] {
                    dist[e.dest as usize] = d;
                    if hop == 0 {
                        deque.push_front(e.dest);
                    } else {
                        deque.push_back(e.dest);
                    }
                }
            }
        }

        dist
    }

    /// Depth-first visitation from `anchor`.
    ///
    /// Returns a boolean array marking the vertices reachable from the
    /// anchor; vertices outside the anchor's component stay `false`. Uses
    /// an explicit stack, so the recursion-depth limits of the classic
    /// formulation do not apply.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = ListGraph::from_edges(4, true, [(0, 1), (2, 3)]);
    /// assert_eq!(g.dfs(0), vec![true, true, false, false]);
    /// ```
    fn dfs(&self, anchor: Node) -> Vec<bool> {
        let mut visited = vec![false; self.len()];
        if anchor as usize >= self.len() {
            return visited;
        }

        let mut stack = vec![anchor];
        visited[anchor as usize] = true;

        while let Some(u) = stack.pop() {
            for e in self.neighbors_of(u) {
                if !visited[e.dest as usize] {
                    visited[e.dest as usize] = true;
                    stack.push(e.dest);
                }
            }
        }

        visited
    }
}

impl<G: AdjacencyScan + Sized> Traversal for G {}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn bfs_distances_on_a_path() {
        let g = Graph::from_edges(4, false, [(0, 1), (1, 2), (2, 3)]);
        assert_eq!(g.bfs(0), vec![0, 1, 2, 3]);
        assert_eq!(g.bfs(2), vec![2, 1, 0, 1]);
    }

    #[test]
    fn bfs_marks_unreachable_vertices() {
        // Directed chain: nothing leads back to 0, nothing leaves 3's side
        let g = ListGraph::from_edges(5, true, [(0, 1), (1, 2), (4, 3)]);
        assert_eq!(g.bfs(0), vec![0, 1, 2, UNREACHED, UNREACHED]);
        assert_eq!(g.bfs(4), vec![UNREACHED, UNREACHED, UNREACHED, 1, 0]);
    }

    #[test]
    fn bfs_prefers_fewest_hops() {
        //     /- 1 -\
        //    0       3 - 4
        //     \ 2 - /
        let g = MatrixGraph::from_edges(5, false, [(0, 1), (1, 3), (0, 2), (2, 3), (3, 4)]);
        assert_eq!(g.bfs(0), vec![0, 1, 1, 2, 3]);
    }

    #[test]
    fn out_of_range_anchors_answer_sentinels() {
        let g = ListGraph::from_edges(3, true, [(0, 1)]);
        assert_eq!(g.bfs(17), vec![UNREACHED; 3]);
        assert_eq!(g.zero_one_bfs(17), vec![UNREACHED; 3]);
        assert_eq!(g.dfs(17), vec![false; 3]);
    }

    #[test]
    fn representations_traverse_identically() {
        let edges = [(0, 1), (1, 2), (0, 3), (3, 4), (4, 1)];
        let list = ListGraph::from_edges(5, true, edges);
        let matrix = MatrixGraph::from_edges(5, true, edges);
        let dual = Graph::from_edges(5, true, edges);

        for anchor in 0..5 {
            assert_eq!(list.bfs(anchor), matrix.bfs(anchor));
            assert_eq!(list.bfs(anchor), dual.bfs(anchor));
            assert_eq!(list.dfs(anchor), matrix.dfs(anchor));
            assert_eq!(list.dfs(anchor), dual.dfs(anchor));
        }
    }

    #[test]
    fn zero_one_bfs_zero_edges_are_free() {
        let g = ListGraph::from_weighted_edges(
            5,
            true,
            [(0, 1, 0), (1, 2, 1), (2, 3, 0), (3, 4, 1)],
        );
        assert_eq!(g.zero_one_bfs(0), vec![0, 0, 1, 1, 2]);
    }

    #[test]
    fn zero_one_bfs_relaxes_later_cheaper_paths() {
        // The weight-1 edge to 1 is scanned before the zero-cost detour
        // over 2; the detour must still win
        let g = ListGraph::from_weighted_edges(3, true, [(0, 1, 1), (0, 2, 0), (2, 1, 0)]);
        assert_eq!(g.zero_one_bfs(0), vec![0, 0, 0]);
    }

    /// Bellman-Ford restricted to the stored {0,1} weights
    fn reference_distances<G: AdjacencyScan>(graph: &G, anchor: Node) -> Vec<Distance> {
        let edges = graph.edges().collect_vec();
        let mut dist = vec![UNREACHED; graph.len()];
        dist[anchor as usize] = 0;

        for _ in 1..graph.len() {
            for &(u, e) in &edges {
                if dist[u as usize] == UNREACHED {
                    continue;
                }
                let d = dist[u as usize] + (e.weight != 0) as Distance;
                if dist[e.dest as usize] == UNREACHED || d < dist[e.dest as usize] {
                    dist[e.dest as usize] = d;
                }
            }
        }

        dist
    }

    #[test]
    fn zero_one_bfs_matches_bellman_ford() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);

        for _ in 0..30 {
            let n: NumNodes = rng.random_range(2..15);
            let edges = (0..3 * n)
                .map(|_| {
                    (
                        rng.random_range(0..n),
                        rng.random_range(0..n),
                        rng.random_range(0..2),
                    )
                })
                .collect_vec();

            let g = ListGraph::from_weighted_edges(n, true, edges);
            for anchor in 0..n {
                assert_eq!(g.zero_one_bfs(anchor), reference_distances(&g, anchor));
            }
        }
    }

    #[test]
    fn dfs_covers_the_reachable_component() {
        let g = Graph::from_edges(6, false, [(0, 1), (1, 2), (3, 4)]);
        assert_eq!(g.dfs(0), vec![true, true, true, false, false, false]);
        assert_eq!(g.dfs(3), vec![false, false, false, true, true, false]);
        assert_eq!(g.dfs(5), vec![false, false, false, false, false, true]);
    }

    #[test]
    fn dfs_follows_edge_orientation() {
        let g = ListGraph::from_edges(3, true, [(0, 1), (2, 1)]);
        assert_eq!(g.dfs(0), vec![true, true, false]);
        assert_eq!(g.dfs(2), vec![false, true, true]);
    }
}
