//! Seidel's all-pairs shortest paths for unweighted graphs.
//!
//! The solve runs in four steps:
//! 1. pad the adjacency matrix to a power-of-two `SquareMatrix` with a
//!    self-loop on every node, padding nodes included;
//! 2. square it repeatedly into a sequence of Boolean reachability levels;
//! 3. walk the levels top-down, refining a distance estimate with the
//!    product-vs-degree parity test;
//! 4. cut the padded result back to the input shape.
//!
//! Pairs with no path between them come out as `0`, the same value as the
//! diagonal. Callers that need to tell "same node" from "unreachable" must
//! check `i == j` themselves.

use tracing::{debug, trace};

use crate::matrix::{IntMatrix, MatrixError, SquareMatrix};
use crate::options::Options;

/// Boolean reachability levels `R₀ … Rₘ` for one solve.
///
/// `R₀` is the padded adjacency matrix with ones on the diagonal. For
/// `k ≥ 1`, `Rₖ[i][j] = 1` iff `i ≠ j` and `j` is reachable from `i` within
/// `2^k` hops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReachabilitySequence {
    levels: Vec<SquareMatrix>,
}

impl ReachabilitySequence {
    /// Square `base` until the hop horizon covers the whole matrix.
    fn build(base: SquareMatrix, cutoff: usize) -> Result<Self, MatrixError> {
        let size = base.size();
        let mut levels = Vec::new();
        let mut current = base;
        let mut horizon = 1;
        while horizon < size {
            let next = next_level(&current, cutoff)?;
            levels.push(current);
            current = next;
            horizon *= 2;
            trace!(level = levels.len(), horizon, "Reachability level built");
        }
        levels.push(current);
        Ok(Self { levels })
    }

    /// All levels, `R₀` first.
    #[must_use]
    pub fn levels(&self) -> &[SquareMatrix] {
        &self.levels
    }

    /// Number of levels (`⌈log₂ size⌉ + 1`).
    #[must_use]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Always false: a sequence holds at least `R₀`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Size of the padded matrices.
    #[must_use]
    pub fn padded_size(&self) -> usize {
        self.levels[0].size()
    }

    /// The most saturated level `Rₘ`.
    #[must_use]
    pub fn last(&self) -> &SquareMatrix {
        &self.levels[self.levels.len() - 1]
    }
}

/// Compute the shortest-path hop counts between every pair of nodes.
///
/// `adjacency[i][j]` is non-zero when there is an edge from `i` to `j`. The
/// result has the same shape as the input. Unreachable pairs read as `0`.
///
/// # Errors
///
/// Returns `MatrixError::Size` for an empty input and
/// `MatrixError::NotSquare` if any row length differs from the row count.
///
/// # Example
/// ```
/// let path = vec![vec![0, 1, 0], vec![1, 0, 1], vec![0, 1, 0]];
/// let d = seidel_core::solve(&path).unwrap();
/// assert_eq!(d, vec![vec![0, 1, 2], vec![1, 0, 1], vec![2, 1, 0]]);
/// ```
pub fn solve(adjacency: &[Vec<i64>]) -> Result<IntMatrix, MatrixError> {
    solve_with_options(adjacency, &Options::default())
}

/// Same as [`solve`], with explicit options.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_with_options(adjacency: &[Vec<i64>], opts: &Options) -> Result<IntMatrix, MatrixError> {
    let opts = opts.clone().normalize();
    let n = adjacency.len();
    let sequence = build_sequence(adjacency, &opts)?;
    debug!(
        nodes = n,
        padded = sequence.padded_size(),
        levels = sequence.len(),
        "Reachability sequence complete"
    );

    let distances = reconstruct_distances(&sequence, opts.strassen_cutoff)?;
    Ok(unpad(&distances, n))
}

/// Build the reachability levels for `adjacency` without reconstructing
/// distances.
///
/// # Errors
///
/// See [`solve`].
pub fn reachability_levels(
    adjacency: &[Vec<i64>],
    opts: &Options,
) -> Result<ReachabilitySequence, MatrixError> {
    build_sequence(adjacency, &opts.clone().normalize())
}

fn build_sequence(adjacency: &[Vec<i64>], opts: &Options) -> Result<ReachabilitySequence, MatrixError> {
    let base = pad_with_self_loops(adjacency)?;
    ReachabilitySequence::build(base, opts.strassen_cutoff)
}

/// Embed `adjacency` in the smallest power-of-two matrix that holds it,
/// putting a `1` on every diagonal entry and normalizing edges to `1`.
fn pad_with_self_loops(adjacency: &[Vec<i64>]) -> Result<SquareMatrix, MatrixError> {
    let n = adjacency.len();
    if n == 0 {
        return Err(MatrixError::Size(0));
    }
    for (row, values) in adjacency.iter().enumerate() {
        if values.len() != n {
            return Err(MatrixError::NotSquare {
                rows: n,
                row,
                len: values.len(),
            });
        }
    }

    let size = n.next_power_of_two();
    let mut base = SquareMatrix::new(size)?;
    for (i, values) in adjacency.iter().enumerate() {
        for (j, &value) in values.iter().enumerate() {
            if i == j || value != 0 {
                base.set(i, j, 1);
            }
        }
    }
    // Padding nodes only reach themselves.
    for i in n..size {
        base.set(i, i, 1);
    }
    Ok(base)
}

/// `Rₖ₊₁` from `Rₖ`: pairs joined by a walk of at most two `Rₖ` steps,
/// capped at 1, diagonal cleared.
fn next_level(current: &SquareMatrix, cutoff: usize) -> Result<SquareMatrix, MatrixError> {
    let squared = current.multiply_with_cutoff(current, cutoff)?;
    let size = current.size();
    let mut next = SquareMatrix::new(size)?;
    for i in 0..size {
        for j in 0..size {
            // Keeping already-reachable pairs matters once the diagonal is
            // cleared: an isolated edge has no two-step walk of its own.
            if i != j && (squared.get(i, j) > 0 || current.get(i, j) > 0) {
                next.set(i, j, 1);
            }
        }
    }
    Ok(next)
}

/// Fold the reachability levels back into hop counts, starting from `Rₘ`
/// and refining once per level, `Rₘ` included.
fn reconstruct_distances(
    sequence: &ReachabilitySequence,
    cutoff: usize,
) -> Result<SquareMatrix, MatrixError> {
    let mut distances = sequence.last().clone();
    for (k, reachability) in sequence.levels().iter().enumerate().rev() {
        distances = refine_distances(&distances, reachability, cutoff)?;
        trace!(level = k, "Distances refined");
    }
    Ok(distances)
}

/// One step of Seidel's recurrence.
///
/// `D'[i][j]` is `2·D[i][j]` when `(D·A)[i][j] ≥ D[i][j]·deg(j)`, otherwise
/// `2·D[i][j] − 1`, and `0` on the diagonal.
fn refine_distances(
    distances: &SquareMatrix,
    reachability: &SquareMatrix,
    cutoff: usize,
) -> Result<SquareMatrix, MatrixError> {
    let product = distances.multiply_with_cutoff(reachability, cutoff)?;
    let size = distances.size();
    let degrees: Vec<i64> = (0..size).map(|j| reachability.row_sum(j)).collect();

    let mut refined = SquareMatrix::new(size)?;
    for i in 0..size {
        for j in 0..size {
            if i == j {
                continue;
            }
            let d = distances.get(i, j);
            let value = if product.get(i, j) >= d * degrees[j] {
                2 * d
            } else {
                2 * d - 1
            };
            refined.set(i, j, value);
        }
    }
    Ok(refined)
}

/// Top-left `n×n` block as plain rows.
fn unpad(distances: &SquareMatrix, n: usize) -> IntMatrix {
    (0..n).map(|i| distances.row(i)[..n].to_vec()).collect()
}
