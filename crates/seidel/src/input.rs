//! Adjacency matrix input: reading and parsing.

use std::io::Read;
use std::path::Path;

use seidel_core::IntMatrix;

use crate::config::Format;

/// Error type for reading and parsing an adjacency matrix.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// A text entry is not an integer.
    #[error("line {line}: invalid entry '{token}'")]
    Parse { line: usize, token: String },

    /// The JSON document is not an array of integer arrays.
    #[error("invalid JSON adjacency matrix: {0}")]
    Json(#[from] serde_json::Error),

    /// Edge entries must be non-negative.
    #[error("negative entry {value} at row {row}, column {col}")]
    Negative { row: usize, col: usize, value: i64 },

    /// No rows at all.
    #[error("adjacency matrix is empty")]
    Empty,

    /// The input could not be read.
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

/// Read the raw input from `path`, or from stdin when `path` is `None`.
///
/// # Errors
///
/// Returns `InputError::Io` if reading fails.
pub fn read_input(path: Option<&Path>) -> Result<String, InputError> {
    match path {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Parse an adjacency matrix in the given format and reject negative entries.
///
/// Shape (squareness) is left to the solver, which reports it precisely.
///
/// # Errors
///
/// Returns an `InputError` describing the first problem found.
pub fn parse(raw: &str, format: Format) -> Result<IntMatrix, InputError> {
    let matrix = match format {
        Format::Text => parse_text(raw)?,
        Format::Json => parse_json(raw)?,
    };
    if matrix.is_empty() {
        return Err(InputError::Empty);
    }
    check_non_negative(&matrix)?;
    Ok(matrix)
}

/// One row per line; entries separated by whitespace and/or commas.
/// Blank lines and lines starting with `#` are skipped.
///
/// # Errors
///
/// Returns `InputError::Parse` for a token that is not an integer.
pub fn parse_text(raw: &str) -> Result<IntMatrix, InputError> {
    let mut rows = Vec::new();
    for (idx, line) in raw.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let row = line
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .map(|token| {
                token.parse::<i64>().map_err(|_| InputError::Parse {
                    line: idx + 1,
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        rows.push(row);
    }
    Ok(rows)
}

/// A JSON array of integer arrays, e.g. `[[0,1],[1,0]]`.
///
/// # Errors
///
/// Returns `InputError::Json` if the document has a different shape.
pub fn parse_json(raw: &str) -> Result<IntMatrix, InputError> {
    Ok(serde_json::from_str(raw)?)
}

fn check_non_negative(matrix: &IntMatrix) -> Result<(), InputError> {
    for (row, values) in matrix.iter().enumerate() {
        if let Some((col, &value)) = values.iter().enumerate().find(|(_, v)| **v < 0) {
            return Err(InputError::Negative { row, col, value });
        }
    }
    Ok(())
}
