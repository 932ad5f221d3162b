/// Stamps out the operation test battery every representation must pass.
/// The three backends share one contract; the macro keeps the assertions
/// identical across them.
macro_rules! test_graph_ops {
    ($env:ident, $graph:ident) => {
        #[cfg(test)]
        mod $env {
            use crate::prelude::*;
            use itertools::Itertools;
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;

            /// Creates a deduplicated list of at most `m_ub` random edges
            /// over the nodes `0..n`
            fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m_ub: usize) -> Vec<(Node, Node)> {
                let mut edges = (0..m_ub)
                    .map(|_| (rng.random_range(0..n), rng.random_range(0..n)))
                    .collect_vec();
                edges.sort_unstable();
                edges.dedup();
                edges
            }

            #[test]
            fn graph_new() {
                for n in 0..30 {
                    for directed in [false, true] {
                        let graph = <$graph>::new(n, false, directed);

                        assert_eq!(graph.order(), n);
                        assert_eq!(graph.size(), 0);
                        assert_eq!(graph.is_directed(), directed);
                        assert!(!graph.is_weighted());
                        assert_eq!(graph.is_empty(), n == 0);
                        assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
                    }
                }
            }

            #[test]
            fn insert_then_query() {
                let rng = &mut Pcg64Mcg::seed_from_u64(3);

                for directed in [false, true] {
                    for n in [5 as NumNodes, 10, 20] {
                        for _ in 0..5 {
                            let edges = random_edges(rng, n, 3 * n as usize);

                            let mut reference = vec![vec![false; n as usize]; n as usize];
                            let mut graph = <$graph>::new(n, false, directed);
                            let mut m: NumEdges = 0;

                            for &(a, b) in &edges {
                                let fresh = !reference[a as usize][b as usize];
                                assert_eq!(graph.add_edge(a, b), fresh);
                                m += fresh as NumEdges;

                                reference[a as usize][b as usize] = true;
                                if !directed {
                                    reference[b as usize][a as usize] = true;
                                }
                            }

                            assert_eq!(graph.size(), m);

                            for a in 0..n {
                                for b in 0..n {
                                    assert_eq!(
                                        graph.is_edge(a, b),
                                        reference[a as usize][b as usize]
                                    );
                                }
                            }

                            for v in 0..n {
                                let out =
                                    reference[v as usize].iter().filter(|x| **x).count() as Degree;
                                let inn = (0..n)
                                    .filter(|&u| reference[u as usize][v as usize])
                                    .count() as Degree;

                                assert_eq!(graph.out_degree(v), out);
                                assert_eq!(graph.in_degree(v), inn);
                                assert_eq!(
                                    graph.degree(v),
                                    if directed { out + inn } else { out }
                                );
                            }
                        }
                    }
                }
            }

            #[test]
            fn remove_edge_bookkeeping() {
                for directed in [false, true] {
                    let mut graph = <$graph>::from_edges(3, directed, [(0, 1), (1, 2)]);
                    assert_eq!(graph.size(), 2);

                    assert!(graph.remove_edge(0, 1));
                    assert!(!graph.is_edge(0, 1));
                    assert!(!graph.is_edge(1, 0));
                    assert_eq!(graph.size(), 1);

                    // The documented quirk: removing an absent edge still
                    // decrements the size
                    assert!(!graph.remove_edge(0, 1));
                    assert_eq!(graph.size(), 0);

                    // Out-of-range endpoints answer false without touching
                    // the counter
                    assert!(!graph.remove_edge(0, 99));
                    assert_eq!(graph.size(), 0);
                }
            }

            #[test]
            fn insert_grows_the_graph() {
                let mut graph = <$graph>::new(2, false, true);
                assert!(graph.add_edge(1, 6));

                assert_eq!(graph.order(), 7);
                assert!(graph.is_edge(1, 6));
                assert_eq!(graph.out_degree(6), 0);

                graph.add_vertices(3);
                assert_eq!(graph.order(), 10);
                assert_eq!(graph.size(), 1);
            }

            #[test]
            fn out_of_range_queries_answer_sentinels() {
                let graph = <$graph>::from_edges(3, true, [(0, 1)]);

                assert!(!graph.is_edge(0, 3));
                assert!(!graph.is_edge(3, 0));
                assert_eq!(graph.out_degree(3), INVALID_DEGREE);
                assert_eq!(graph.in_degree(3), INVALID_DEGREE);
                assert_eq!(graph.degree(3), INVALID_DEGREE);
            }

            #[test]
            fn unweighted_graphs_coerce_weights() {
                let mut graph = <$graph>::new(2, false, true);
                assert!(graph.add_weighted_edge(0, 1, 42));
                assert_eq!(
                    graph.neighbors_of(0).collect_vec(),
                    vec![Edge::new(1, DEFAULT_WEIGHT)]
                );

                let mut graph = <$graph>::new(2, true, true);
                assert!(graph.add_weighted_edge(0, 1, 42));
                assert_eq!(graph.neighbors_of(0).collect_vec(), vec![Edge::new(1, 42)]);
            }

            #[test]
            fn undirected_insertions_are_mirrored() {
                let mut graph = <$graph>::new(4, false, false);
                assert!(graph.add_edge(0, 1));
                assert!(graph.is_edge(1, 0));

                // The mirror is one logical edge
                assert_eq!(graph.size(), 1);
                assert_eq!(graph.out_degree(0), 1);
                assert_eq!(graph.out_degree(1), 1);

                // Self-loops are stored once
                assert!(graph.add_edge(2, 2));
                assert_eq!(graph.out_degree(2), 1);
                assert_eq!(graph.size(), 2);
            }
        }
    };
}

pub(crate) use test_graph_ops;
