//! Matrix multiplication: Strassen recursion and the naive reference product.

use crate::constants::DEFAULT_STRASSEN_CUTOFF;
use crate::matrix::{MatrixError, SquareMatrix};

impl SquareMatrix {
    /// Multiply using Strassen's algorithm, recursing down to 1x1 blocks.
    ///
    /// Cost is Θ(size^log₂7) ≈ Θ(size^2.807).
    ///
    /// # Errors
    ///
    /// Returns `MatrixError::SizeMismatch` if the sizes differ.
    pub fn multiply(&self, other: &Self) -> Result<Self, MatrixError> {
        self.multiply_with_cutoff(other, DEFAULT_STRASSEN_CUTOFF)
    }

    /// Multiply using Strassen's algorithm, switching to the naive product
    /// once blocks are `cutoff` wide or smaller.
    ///
    /// The result does not depend on `cutoff`.
    ///
    /// # Errors
    ///
    /// Returns `MatrixError::SizeMismatch` if the sizes differ.
    pub fn multiply_with_cutoff(&self, other: &Self, cutoff: usize) -> Result<Self, MatrixError> {
        self.check_same_size(other)?;
        Ok(strassen(self, other, cutoff.max(1)))
    }

    /// Multiply with the O(n³) triple loop.
    ///
    /// # Errors
    ///
    /// Returns `MatrixError::SizeMismatch` if the sizes differ.
    pub fn multiply_naive(&self, other: &Self) -> Result<Self, MatrixError> {
        self.check_same_size(other)?;
        Ok(naive(self, other))
    }

    /// Copy the `size/2` block whose top-left corner is `(row0, col0)`.
    fn quadrant(&self, row0: usize, col0: usize) -> Self {
        let half = self.size() / 2;
        let mut data = Vec::with_capacity(half * half);
        for i in row0..row0 + half {
            data.extend_from_slice(&self.row(i)[col0..col0 + half]);
        }
        Self::from_raw(half, data)
    }

    /// Split into top-left, top-right, bottom-left and bottom-right blocks.
    fn quadrants(&self) -> [Self; 4] {
        let half = self.size() / 2;
        [
            self.quadrant(0, 0),
            self.quadrant(0, half),
            self.quadrant(half, 0),
            self.quadrant(half, half),
        ]
    }

    /// Assemble a matrix twice the size of the (equal-sized) blocks.
    fn from_quadrants(c11: &Self, c12: &Self, c21: &Self, c22: &Self) -> Self {
        let half = c11.size();
        let size = half * 2;
        let mut data = Vec::with_capacity(size * size);
        for (left, right) in [(c11, c12), (c21, c22)] {
            for i in 0..half {
                data.extend_from_slice(left.row(i));
                data.extend_from_slice(right.row(i));
            }
        }
        Self::from_raw(size, data)
    }
}

/// Strassen recursion on operands of equal size.
fn strassen(a: &SquareMatrix, b: &SquareMatrix, cutoff: usize) -> SquareMatrix {
    let size = a.size();
    if size == 1 {
        return SquareMatrix::from_raw(1, vec![a.get(0, 0) * b.get(0, 0)]);
    }
    if size <= cutoff {
        return naive(a, b);
    }

    let [a11, a12, a21, a22] = a.quadrants();
    let [b11, b12, b21, b22] = b.quadrants();

    let m1 = strassen(&(&a11 + &a22), &(&b11 + &b22), cutoff);
    let m2 = strassen(&(&a21 + &a22), &b11, cutoff);
    let m3 = strassen(&a11, &(&b12 - &b22), cutoff);
    let m4 = strassen(&a22, &(&b21 - &b11), cutoff);
    let m5 = strassen(&(&a11 + &a12), &b22, cutoff);
    let m6 = strassen(&(&a21 - &a11), &(&b11 + &b12), cutoff);
    let m7 = strassen(&(&a12 - &a22), &(&b21 + &b22), cutoff);

    let c11 = &(&(&m1 + &m4) - &m5) + &m7;
    let c12 = &m3 + &m5;
    let c21 = &m2 + &m4;
    let c22 = &(&(&m1 - &m2) + &m3) + &m6;

    SquareMatrix::from_quadrants(&c11, &c12, &c21, &c22)
}

fn naive(a: &SquareMatrix, b: &SquareMatrix) -> SquareMatrix {
    let size = a.size();
    let mut out = SquareMatrix::zeroed(size);
    for i in 0..size {
        for k in 0..size {
            let aik = a.get(i, k);
            if aik == 0 {
                continue;
            }
            for j in 0..size {
                out.set(i, j, out.get(i, j) + aik * b.get(k, j));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(rows: &[&[i64]]) -> SquareMatrix {
        let rows: Vec<Vec<i64>> = rows.iter().map(|r| r.to_vec()).collect();
        SquareMatrix::from_rows(&rows).unwrap()
    }

    /// Deterministic pseudo-random fill (xorshift), values in [-50, 50].
    fn pseudo_random(size: usize, seed: u64) -> SquareMatrix {
        let mut state = seed | 1;
        let mut data = Vec::with_capacity(size * size);
        for _ in 0..size * size {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            data.push(i64::try_from(state % 101).unwrap() - 50);
        }
        SquareMatrix::from_raw(size, data)
    }

    #[test]
    fn multiply_scalars() {
        let a = m(&[&[3]]);
        let b = m(&[&[2]]);
        assert_eq!(a.multiply(&b).unwrap(), m(&[&[6]]));
    }

    #[test]
    fn multiply_4x4() {
        let a = m(&[&[1, 2, 3, 4], &[4, 3, 0, 1], &[5, 6, 1, 1], &[0, 2, 5, 6]]);
        let b = m(&[&[1, 0, 5, 1], &[1, 2, 0, 2], &[0, 3, 2, 3], &[1, 2, 1, 2]]);
        let expected = m(&[
            &[7, 21, 15, 22],
            &[8, 8, 21, 12],
            &[12, 17, 28, 22],
            &[8, 31, 16, 31],
        ]);
        assert_eq!(a.multiply(&b).unwrap(), expected);
    }

    #[test]
    fn multiply_4x4_negative_entries() {
        let a = m(&[&[23, -43, 3, 3], &[47, 57, 2, 0], &[-4, -5, -7, 2], &[-5, 5, -4, 3]]);
        let b = m(&[&[3, -3, 51, 59], &[5, 9, -4, 5], &[-8, 9, 58, -8], &[29, 84, -1, 8]]);
        let expected = m(&[
            &[-83, -177, 1516, 1142],
            &[410, 390, 2285, 3042],
            &[77, 72, -592, -189],
            &[129, 276, -510, -214],
        ]);
        assert_eq!(a.multiply(&b).unwrap(), expected);
        assert_eq!(a.multiply_naive(&b).unwrap(), expected);
    }

    #[test]
    fn strassen_matches_naive() {
        for (seed, size) in [1usize, 2, 4, 8, 16].into_iter().enumerate() {
            let seed = seed as u64;
            let a = pseudo_random(size, 0x9E37_79B9 + seed);
            let b = pseudo_random(size, 0x85EB_CA6B + seed);
            assert_eq!(
                a.multiply(&b).unwrap(),
                a.multiply_naive(&b).unwrap(),
                "size {size}"
            );
        }
    }

    #[test]
    fn cutoff_does_not_change_result() {
        let a = pseudo_random(16, 7);
        let b = pseudo_random(16, 11);
        let expected = a.multiply_naive(&b).unwrap();
        for cutoff in [0, 1, 2, 4, 8, 16, 32] {
            assert_eq!(
                a.multiply_with_cutoff(&b, cutoff).unwrap(),
                expected,
                "cutoff {cutoff}"
            );
        }
    }

    #[test]
    fn multiply_by_identity() {
        let a = pseudo_random(8, 3);
        let id = SquareMatrix::identity(8).unwrap();
        assert_eq!(a.multiply(&id).unwrap(), a);
        assert_eq!(id.multiply(&a).unwrap(), a);
    }

    #[test]
    fn multiply_size_mismatch() {
        let a = SquareMatrix::new(2).unwrap();
        let b = SquareMatrix::new(4).unwrap();
        assert_eq!(
            a.multiply(&b),
            Err(MatrixError::SizeMismatch { left: 2, right: 4 })
        );
        assert!(a.multiply_naive(&b).is_err());
        assert!(b.multiply_with_cutoff(&a, 8).is_err());
    }

    #[test]
    fn quadrants_round_trip() {
        let a = pseudo_random(8, 5);
        let [q11, q12, q21, q22] = a.quadrants();
        assert_eq!(q11.size(), 4);
        assert_eq!(q12.get(0, 0), a.get(0, 4));
        assert_eq!(q21.get(0, 0), a.get(4, 0));
        assert_eq!(q22.get(3, 3), a.get(7, 7));
        assert_eq!(SquareMatrix::from_quadrants(&q11, &q12, &q21, &q22), a);
    }
}
