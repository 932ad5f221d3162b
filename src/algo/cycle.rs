/*!
Cycle detection for directed and undirected graphs.

A single entry point, [`CycleDetection::find_cycle`], dispatches on the
graph's orientation flag: undirected graphs use a parent-tracking DFS (an
already-visited neighbor other than the tree parent closes a cycle),
directed graphs a three-color DFS (an edge back into a vertex still on the
recursion path closes one). Both run over every component, so cycles
disconnected from vertex 0 are found too.
*/

use crate::prelude::*;

/// Stack frame of the directed scan: vertices are processed once on the
/// way down and once on the way back up
enum Visit {
    Enter(Node),
    Leave(Node),
}

/// Provides cycle queries on every graph representation
pub trait CycleDetection: AdjacencyScan + Sized {
    /// Tests whether the graph contains any cycle, respecting the graph's
    /// orientation.
    ///
    /// In an undirected graph the two stored directions of one edge do not
    /// count as a cycle, but a self-loop and any closed walk of three or
    /// more vertices do. In a directed graph a cycle is a closed directed
    /// walk, including a self-loop and the two-vertex cycle `a -> b -> a`.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let mut g = Graph::from_edges(4, false, [(0, 1), (1, 2), (2, 3)]);
    /// assert!(!g.find_cycle());
    ///
    /// g.add_edge(3, 0);
    /// assert!(g.find_cycle());
    /// ```
    fn find_cycle(&self) -> bool {
        if self.is_directed() {
            self.find_cycle_directed()
        } else {
            self.find_cycle_undirected()
        }
    }

    /// Undirected cycle test: DFS with parent tracking, run from every
    /// still-unvisited vertex.
    fn find_cycle_undirected(&self) -> bool {
        let mut visited = vec![false; self.len()];
        let mut stack: Vec<(Node, Node)> = Vec::new();

        for root in self.vertices() {
            if visited[root as usize] {
                continue;
            }

            visited[root as usize] = true;
            stack.push((root, INVALID_NODE));

            while let Some((u, parent)) = stack.pop() {
                for e in self.neighbors_of(u) {
                    if e.dest == u {
                        // Self-loop
                        return true;
                    }
                    if e.dest == parent {
                        continue;
                    }
                    if visited[e.dest as usize] {
                        return true;
                    }
                    visited[e.dest as usize] = true;
                    stack.push((e.dest, u));
                }
            }
        }

        false
    }

    /// Directed cycle test: three-color DFS, run from every vertex not yet
    /// fully explored. An edge into a vertex still on the active path is a
    /// back edge and closes a cycle.
    fn find_cycle_directed(&self) -> bool {
        // 0 = untouched, 1 = on the active path, 2 = fully explored
        let mut state = vec![0u8; self.len()];
        let mut stack: Vec<Visit> = Vec::new();

        for root in self.vertices() {
            if state[root as usize] != 0 {
                continue;
            }

            stack.push(Visit::Enter(root));

            while let Some(visit) = stack.pop() {
                match visit {
                    Visit::Enter(u) => {
                        if state[u as usize] != 0 {
                            continue;
                        }
                        state[u as usize] = 1;
                        stack.push(Visit::Leave(u));

                        for e in self.neighbors_of(u) {
                            match state[e.dest as usize] {
                                1 => return true,
                                0 => stack.push(Visit::Enter(e.dest)),
                                _ => {}
                            }
                        }
                    }
                    Visit::Leave(u) => state[u as usize] = 2,
                }
            }
        }

        false
    }
}

impl<G: AdjacencyScan + Sized> CycleDetection for G {}
