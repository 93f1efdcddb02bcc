//! # seidel-core
//!
//! All-pairs shortest paths for unweighted graphs using Seidel's algorithm,
//! built on a power-of-two square matrix type with Strassen multiplication.

pub mod apsp;
pub mod constants;
pub mod matrix;
pub mod options;
mod strassen;

// Re-exports
pub use apsp::{reachability_levels, solve, solve_with_options, ReachabilitySequence};
pub use constants::{exit_codes, DEFAULT_STRASSEN_CUTOFF};
pub use matrix::{IntMatrix, MatrixError, SquareMatrix};
pub use options::Options;
