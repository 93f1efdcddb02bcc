//! Application configuration from CLI flags and environment.

use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use seidel_core::Options;

/// seidel — all-pairs shortest paths for unweighted graphs (Seidel's algorithm).
#[derive(Parser, Debug)]
#[command(name = "seidel", version, about)]
pub struct AppConfig {
    /// Adjacency matrix file. Reads stdin when absent or "-".
    #[arg(env = "SEIDEL_INPUT")]
    pub input: Option<PathBuf>,

    /// Input format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Output format for the distance matrix.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub output_format: Format,

    /// Write the distance matrix to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Block size at or below which multiplication leaves Strassen for the
    /// naive product (0 = library default).
    #[arg(long, default_value = "0", env = "SEIDEL_STRASSEN_CUTOFF")]
    pub strassen_cutoff: usize,

    /// Print graph and timing details to stderr.
    #[arg(short, long)]
    pub verbose: bool,

    /// Print nothing but the distance matrix.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

/// Matrix serialization format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// One row per line, entries separated by whitespace or commas.
    Text,
    /// A JSON array of integer arrays.
    Json,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Input file, or `None` for stdin.
    #[must_use]
    pub fn input_path(&self) -> Option<&Path> {
        self.input
            .as_deref()
            .filter(|path| path.as_os_str() != "-")
    }

    /// Solver options derived from the flags.
    #[must_use]
    pub fn options(&self) -> Options {
        Options::default()
            .with_strassen_cutoff(self.strassen_cutoff)
            .normalize()
    }
}
