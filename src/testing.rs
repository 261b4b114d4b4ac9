/// Every graph representation should pass the same battery of adjacency checks.
/// The first arm sets up a test module, every other arm emits one test.
macro_rules! test_graph_ops {
    ($env:ident, $graph:ident, ($($trait:ident),*)) => {
        #[cfg(test)]
        mod $env {
            use crate::{ops::*, repr::*, testing::test_graph_ops, *};
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;
            use itertools::Itertools;

            /// Creates a list of at most `m_ub` random normalized edges for nodes `0..n`
            #[allow(dead_code)]
            fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m_ub: NumEdges) -> Vec<Edge> {
                let mut edges: Vec<Edge> = (0..m_ub).map(|_| {
                    let u = rng.random_range(0..n);
                    let v = rng.random_range(0..n);
                    Edge(u, v).normalized()
                }).collect_vec();
                edges.sort_unstable();
                edges.dedup();

                edges
            }

            $(
                test_graph_ops!($graph: $trait);
            )*
        }
    };
    ($graph:ident: GraphNew) => {
        #[test]
        fn graph_new() {
            for n in 0..20 {
                let graph = <$graph>::new(n);

                assert_eq!(graph.number_of_edges(), 0);
                assert_eq!(graph.number_of_nodes(), n);
                assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
                assert!(graph.vertices().all(|u| graph.degree_of(u) == 0));
            }
        }
    };
    ($graph:ident: AdjacencyList) => {
        #[test]
        fn test_adjacency_list() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [1 as NumNodes, 5, 10] {
                for m_ub in [n, n * 2, n * 4] {
                    for _ in 0..10 {
                        let edges = random_edges(rng, n, m_ub as NumEdges);
                        let graph = <$graph>::from_edges(n, edges.iter());

                        assert_eq!(graph.number_of_nodes(), n);
                        assert_eq!(graph.number_of_edges(), edges.len() as NumEdges);
                        assert_eq!(graph.ordered_edges(true), edges);

                        for &Edge(u, v) in &edges {
                            assert!(graph.has_edge(u, v));
                        }
                    }
                }
            }
        }
    };
    ($graph:ident: Symmetry) => {
        #[test]
        fn test_symmetry() {
            let rng = &mut Pcg64Mcg::seed_from_u64(5);

            for n in [2 as NumNodes, 6, 10] {
                for _ in 0..20 {
                    let edges = random_edges(rng, n, 2 * n);
                    let graph = <$graph>::from_edges(n, edges.iter());

                    for u in graph.vertices() {
                        for v in graph.neighbors_of(u) {
                            assert!(graph.neighbors_of(v).contains(&u), "{u} -> {v} not mirrored");
                        }
                    }
                }
            }
        }
    };
    ($graph:ident: ParallelEdges) => {
        #[test]
        fn test_parallel_edges() {
            let graph = <$graph>::from_edges(3, [(0, 1), (1, 0), (1, 2)]);

            assert_eq!(graph.number_of_edges(), 3);
            assert_eq!(graph.neighbors_of(1).collect_vec(), vec![0, 0, 2]);
            assert_eq!(graph.degree_of(0), 2);
        }
    };
}

pub(crate) use test_graph_ops;
