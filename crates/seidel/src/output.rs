//! Distance matrix output formatting.

use std::fmt::Write as _;
use std::io;
use std::path::Path;
use std::time::Duration;

use seidel_core::IntMatrix;

use crate::config::Format;

/// Render the distance matrix in the requested format, newline-terminated.
///
/// # Errors
///
/// Returns a JSON error if serialization fails.
pub fn render(distances: &IntMatrix, format: Format) -> Result<String, serde_json::Error> {
    match format {
        Format::Text => Ok(format_text(distances)),
        Format::Json => {
            let mut s = serde_json::to_string(distances)?;
            s.push('\n');
            Ok(s)
        }
    }
}

/// One row per line, entries right-aligned to the widest value.
#[must_use]
pub fn format_text(distances: &IntMatrix) -> String {
    let width = distances
        .iter()
        .flatten()
        .map(|v| v.to_string().len())
        .max()
        .unwrap_or(1);
    let mut out = String::new();
    for row in distances {
        let line = row
            .iter()
            .map(|v| format!("{v:>width$}"))
            .collect::<Vec<_>>()
            .join(" ");
        let _ = writeln!(out, "{line}");
    }
    out
}

/// Format a duration for display.
#[must_use]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else {
        format!("{secs:.3}s")
    }
}

/// Shape of one solve, for verbose output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub nodes: usize,
    pub padded_size: usize,
    pub levels: usize,
    pub duration: Duration,
}

impl Summary {
    /// Summary for a graph on `nodes` nodes solved in `duration`.
    #[must_use]
    pub fn new(nodes: usize, duration: Duration) -> Self {
        let padded_size = nodes.max(1).next_power_of_two();
        Self {
            nodes,
            padded_size,
            levels: padded_size.trailing_zeros() as usize + 1,
            duration,
        }
    }

    /// Print to stderr so stdout stays machine-readable.
    pub fn present(&self) {
        eprintln!("Nodes: {}", self.nodes);
        eprintln!("Padded size: {}", self.padded_size);
        eprintln!("Reachability levels: {}", self.levels);
        eprintln!("Duration: {}", format_duration(self.duration));
    }
}

/// Write rendered output to a file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: &Path, contents: &str) -> io::Result<()> {
    std::fs::write(path, contents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_is_aligned() {
        let d = vec![vec![0, 1, 12], vec![1, 0, 11], vec![12, 11, 0]];
        assert_eq!(format_text(&d), " 0  1 12\n 1  0 11\n12 11  0\n");
    }

    #[test]
    fn text_single_digit() {
        let d = vec![vec![0, 1], vec![1, 0]];
        assert_eq!(render(&d, Format::Text).unwrap(), "0 1\n1 0\n");
    }

    #[test]
    fn json_round_trips() {
        let d = vec![vec![0, 2], vec![2, 0]];
        let s = render(&d, Format::Json).unwrap();
        assert_eq!(s, "[[0,2],[2,0]]\n");
        let back: IntMatrix = serde_json::from_str(&s).unwrap();
        assert_eq!(back, d);
    }

    #[test]
    fn summary_levels() {
        let s = Summary::new(5, Duration::ZERO);
        assert_eq!(s.padded_size, 8);
        assert_eq!(s.levels, 4);
        let s = Summary::new(1, Duration::ZERO);
        assert_eq!(s.padded_size, 1);
        assert_eq!(s.levels, 1);
    }

    #[test]
    fn format_duration_units() {
        assert!(format_duration(Duration::from_nanos(500)).contains("µs"));
        assert!(format_duration(Duration::from_millis(42)).contains("ms"));
        assert!(format_duration(Duration::from_secs(3)).ends_with('s'));
    }

    #[test]
    fn write_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        write_to_file(&path, "0\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "0\n");
    }
}
