#![no_main]

use libfuzzer_sys::fuzz_target;

use seidel_core::{IntMatrix, SquareMatrix};

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }
    // First byte picks the size (1..=16), the rest fills both operands.
    let size = 1usize << (data[0] % 5);
    let body = &data[1..];
    if body.len() < 2 * size * size {
        return;
    }

    let rows = |offset: usize| -> IntMatrix {
        (0..size)
            .map(|i| {
                (0..size)
                    .map(|j| i64::from(body[offset + i * size + j] as i8))
                    .collect()
            })
            .collect()
    };
    let a = SquareMatrix::from_rows(&rows(0)).unwrap();
    let b = SquareMatrix::from_rows(&rows(size * size)).unwrap();
    let cutoff = usize::from(data[0] >> 5);

    let expected = a.multiply_naive(&b).unwrap();
    assert_eq!(a.multiply(&b).unwrap(), expected);
    assert_eq!(a.multiply_with_cutoff(&b, cutoff).unwrap(), expected);
});
