//! Inspect command implementation for the metqc CLI
//!
//! Loads a raw series and prints its per-variable summary statistics
//! without running any check or writing any output.

use std::time::Instant;

use colored::Colorize;

use super::shared::{setup_logging, RunStats};
use crate::app::services::{loader, summary};
use crate::cli::args::InspectArgs;
use crate::Result;

/// Inspect command runner: read-only raw data summary
pub fn run_inspect(args: InspectArgs) -> Result<RunStats> {
    let start_time = Instant::now();

    setup_logging("warn", true)?;

    let (table, _) = loader::load_observations(&args.input_path)?;

    println!(
        "{} {} ({} records)",
        "Raw series".bold(),
        args.input_path.display(),
        table.len()
    );
    for row in summary::describe(&table) {
        println!("  {row}");
    }

    Ok(RunStats {
        records_loaded: table.len(),
        elapsed: start_time.elapsed(),
        ..Default::default()
    })
}
