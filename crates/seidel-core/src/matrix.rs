//! Power-of-two square integer matrices.
//!
//! `SquareMatrix` has value semantics: every arithmetic operation returns a
//! freshly allocated matrix and never touches its operands. The size is fixed
//! at construction and is always a strictly positive power of two, which is
//! what Strassen's quadrant recursion in `strassen.rs` relies on.

use std::fmt;
use std::ops::{Add, Sub};

/// Plain row-major 2D integer array, used for adjacency input and distance output.
pub type IntMatrix = Vec<Vec<i64>>;

/// Error type for matrix construction and arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatrixError {
    /// Requested size is not a strictly positive power of two.
    #[error("size {0} is not a power of two")]
    Size(usize),

    /// Operands of an elementwise operation or product differ in size.
    #[error("incompatible matrix sizes {left} and {right}")]
    SizeMismatch { left: usize, right: usize },

    /// A row's length differs from the number of rows.
    #[error("row {row} has {len} entries, expected {rows}")]
    NotSquare { rows: usize, row: usize, len: usize },
}

/// Square matrix of `i64` whose size is a power of two.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SquareMatrix {
    size: usize,
    data: Vec<i64>,
}

impl SquareMatrix {
    /// Create a zero-filled matrix of the given size.
    ///
    /// # Errors
    ///
    /// Returns `MatrixError::Size` if `size` is not a positive power of two.
    pub fn new(size: usize) -> Result<Self, MatrixError> {
        check_power_of_two(size)?;
        Ok(Self::zeroed(size))
    }

    /// Create the identity matrix of the given size.
    ///
    /// # Errors
    ///
    /// Returns `MatrixError::Size` if `size` is not a positive power of two.
    pub fn identity(size: usize) -> Result<Self, MatrixError> {
        let mut m = Self::new(size)?;
        for i in 0..size {
            m.set(i, i, 1);
        }
        Ok(m)
    }

    /// Build a matrix by copying the given rows.
    ///
    /// # Errors
    ///
    /// Returns `MatrixError::Size` if the row count is not a positive power of
    /// two, or `MatrixError::NotSquare` if any row has the wrong length.
    pub fn from_rows(rows: &[Vec<i64>]) -> Result<Self, MatrixError> {
        let size = rows.len();
        check_power_of_two(size)?;
        let mut data = Vec::with_capacity(size * size);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != size {
                return Err(MatrixError::NotSquare {
                    rows: size,
                    row,
                    len: values.len(),
                });
            }
            data.extend_from_slice(values);
        }
        Ok(Self { size, data })
    }

    /// Zero-filled matrix for sizes already known to be valid.
    pub(crate) fn zeroed(size: usize) -> Self {
        debug_assert!(size.is_power_of_two());
        Self {
            size,
            data: vec![0; size * size],
        }
    }

    /// Wrap an already laid-out row-major buffer.
    pub(crate) fn from_raw(size: usize, data: Vec<i64>) -> Self {
        debug_assert!(size.is_power_of_two());
        debug_assert_eq!(data.len(), size * size);
        Self { size, data }
    }

    /// Number of rows (and columns).
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Entry at row `i`, column `j`.
    ///
    /// Panics if either index is out of range.
    #[inline]
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> i64 {
        self.data[i * self.size + j]
    }

    #[inline]
    pub(crate) fn set(&mut self, i: usize, j: usize, value: i64) {
        self.data[i * self.size + j] = value;
    }

    /// Row `i` as a slice.
    #[inline]
    #[must_use]
    pub fn row(&self, i: usize) -> &[i64] {
        &self.data[i * self.size..(i + 1) * self.size]
    }

    /// Sum of the entries in row `i`.
    #[must_use]
    pub fn row_sum(&self, i: usize) -> i64 {
        self.row(i).iter().sum()
    }

    /// Elementwise sum.
    ///
    /// # Errors
    ///
    /// Returns `MatrixError::SizeMismatch` if the sizes differ.
    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, other: &Self) -> Result<Self, MatrixError> {
        self.check_same_size(other)?;
        Ok(self.zip_with(other, |a, b| a + b))
    }

    /// Elementwise difference.
    ///
    /// # Errors
    ///
    /// Returns `MatrixError::SizeMismatch` if the sizes differ.
    pub fn subtract(&self, other: &Self) -> Result<Self, MatrixError> {
        self.check_same_size(other)?;
        Ok(self.zip_with(other, |a, b| a - b))
    }

    /// Copy the contents out as plain rows.
    #[must_use]
    pub fn to_rows(&self) -> IntMatrix {
        self.data.chunks(self.size).map(<[i64]>::to_vec).collect()
    }

    pub(crate) fn check_same_size(&self, other: &Self) -> Result<(), MatrixError> {
        if self.size == other.size {
            Ok(())
        } else {
            Err(MatrixError::SizeMismatch {
                left: self.size,
                right: other.size,
            })
        }
    }

    fn zip_with(&self, other: &Self, f: impl Fn(i64, i64) -> i64) -> Self {
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(&a, &b)| f(a, b))
            .collect();
        Self::from_raw(self.size, data)
    }
}

/// Unchecked elementwise sum used inside the Strassen recursion, where both
/// operands are quadrants of equal size.
impl Add for &SquareMatrix {
    type Output = SquareMatrix;

    fn add(self, rhs: Self) -> SquareMatrix {
        debug_assert_eq!(self.size, rhs.size);
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl Sub for &SquareMatrix {
    type Output = SquareMatrix;

    fn sub(self, rhs: Self) -> SquareMatrix {
        debug_assert_eq!(self.size, rhs.size);
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl fmt::Display for SquareMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.size {
            let line = self
                .row(i)
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

fn check_power_of_two(size: usize) -> Result<(), MatrixError> {
    // `is_power_of_two` is false for 0.
    if size.is_power_of_two() {
        Ok(())
    } else {
        Err(MatrixError::Size(size))
    }
}
