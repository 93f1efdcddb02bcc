//! Property-based tests for Strassen multiplication and Seidel's algorithm.

use proptest::prelude::*;

use seidel_core::{solve, solve_with_options, IntMatrix, Options, SquareMatrix};

/// Power-of-two square matrix with small signed entries.
fn square_matrix(size: usize) -> impl Strategy<Value = SquareMatrix> {
    prop::collection::vec(prop::collection::vec(-100i64..=100, size), size)
        .prop_map(|rows| SquareMatrix::from_rows(&rows).unwrap())
}

fn matrix_pair() -> impl Strategy<Value = (SquareMatrix, SquareMatrix)> {
    prop::sample::select(vec![1usize, 2, 4, 8, 16])
        .prop_flat_map(|size| (square_matrix(size), square_matrix(size)))
}

/// Undirected adjacency matrix on 1..=max nodes with the given edge density.
fn undirected_graph(max: usize) -> impl Strategy<Value = IntMatrix> {
    (1..=max).prop_flat_map(|n| {
        prop::collection::vec(prop::bool::weighted(0.3), n * n).prop_map(move |bits| {
            let mut adj = vec![vec![0i64; n]; n];
            for i in 0..n {
                for j in (i + 1)..n {
                    if bits[i * n + j] {
                        adj[i][j] = 1;
                        adj[j][i] = 1;
                    }
                }
            }
            adj
        })
    })
}

fn bfs_distances(adjacency: &[Vec<i64>]) -> IntMatrix {
    let n = adjacency.len();
    let mut out = vec![vec![0; n]; n];
    for (start, dist) in out.iter_mut().enumerate() {
        let mut seen = vec![false; n];
        seen[start] = true;
        let mut frontier = vec![start];
        let mut hops = 0;
        while !frontier.is_empty() {
            hops += 1;
            let mut next = Vec::new();
            for &u in &frontier {
                for v in 0..n {
                    if adjacency[u][v] != 0 && !seen[v] {
                        seen[v] = true;
                        dist[v] = hops;
                        next.push(v);
                    }
                }
            }
            frontier = next;
        }
    }
    out
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Strassen agrees with the naive triple loop.
    #[test]
    fn strassen_equals_naive((a, b) in matrix_pair()) {
        prop_assert_eq!(a.multiply(&b).unwrap(), a.multiply_naive(&b).unwrap());
    }

    /// (A + B) - B == A.
    #[test]
    fn add_then_subtract_is_identity((a, b) in matrix_pair()) {
        let sum = a.add(&b).unwrap();
        prop_assert_eq!(sum.subtract(&b).unwrap(), a);
    }

    /// A·I == A.
    #[test]
    fn identity_is_neutral(a in prop::sample::select(vec![1usize, 2, 4, 8]).prop_flat_map(square_matrix)) {
        let id = SquareMatrix::identity(a.size()).unwrap();
        prop_assert_eq!(a.multiply(&id).unwrap(), a);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Distances on undirected graphs equal BFS hop counts (0 when unreachable).
    #[test]
    fn distances_match_bfs(adj in undirected_graph(20)) {
        prop_assert_eq!(solve(&adj).unwrap(), bfs_distances(&adj));
    }

    /// Symmetric input gives symmetric output with a zero diagonal.
    #[test]
    fn symmetric_with_zero_diagonal(adj in undirected_graph(20)) {
        let d = solve(&adj).unwrap();
        prop_assert_eq!(d.len(), adj.len());
        for i in 0..d.len() {
            prop_assert_eq!(d[i][i], 0);
            for j in 0..d.len() {
                prop_assert_eq!(d[i][j], d[j][i], "asymmetric at ({}, {})", i, j);
            }
        }
    }

    /// Solving is deterministic and independent of the Strassen cutoff.
    #[test]
    fn deterministic_across_cutoffs(adj in undirected_graph(17), cutoff in 1usize..=32) {
        let first = solve(&adj).unwrap();
        prop_assert_eq!(&solve(&adj).unwrap(), &first);
        let opts = Options::default().with_strassen_cutoff(cutoff);
        prop_assert_eq!(solve_with_options(&adj, &opts).unwrap(), first);
    }
}
