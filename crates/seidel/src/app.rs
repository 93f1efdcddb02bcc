//! Application entry point and dispatch.

use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;

use seidel_core::solve_with_options;

use crate::config::AppConfig;
use crate::input;
use crate::output::{self, Summary};

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        crate::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    let raw = input::read_input(config.input_path()).with_context(|| match config.input_path() {
        Some(path) => format!("reading {}", path.display()),
        None => "reading stdin".to_string(),
    })?;
    let adjacency = input::parse(&raw, config.format)?;
    info!(nodes = adjacency.len(), "Adjacency matrix loaded");

    let opts = config.options();
    let start = Instant::now();
    let distances = solve_with_options(&adjacency, &opts)?;
    let duration = start.elapsed();
    info!(nodes = adjacency.len(), ?duration, "Distances computed");

    if config.verbose {
        Summary::new(adjacency.len(), duration).present();
    }

    let rendered = output::render(&distances, config.output_format)?;
    match &config.output {
        Some(path) => {
            output::write_to_file(path, &rendered)
                .with_context(|| format!("writing {}", path.display()))?;
            if !config.quiet {
                eprintln!("Distances written to {}", path.display());
            }
        }
        None => print!("{rendered}"),
    }

    Ok(())
}
