#![no_main]

use libfuzzer_sys::fuzz_target;

use seidel_core::solve;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }
    // First byte picks the node count (1..=24), the rest are edge bits.
    let n = usize::from(data[0] % 24) + 1;
    let bit = |k: usize| data.get(1 + k / 8).is_some_and(|&b| (b >> (k % 8)) & 1 == 1);

    let mut adjacency = vec![vec![0i64; n]; n];
    for i in 0..n {
        for j in (i + 1)..n {
            if bit(i * n + j) {
                adjacency[i][j] = 1;
                adjacency[j][i] = 1;
            }
        }
    }

    // Should not panic; undirected input gives a symmetric, zero-diagonal result.
    let d = solve(&adjacency).unwrap();
    for i in 0..n {
        assert_eq!(d[i][i], 0);
        for j in 0..n {
            assert_eq!(d[i][j], d[j][i]);
            assert!(d[i][j] >= 0 && d[i][j] < n as i64);
        }
    }
});
