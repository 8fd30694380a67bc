//! Process command implementation for the metqc CLI
//!
//! Runs the complete quality control workflow: load the raw series, take
//! the read-only raw snapshot for plotting, run the four checks in order,
//! persist the cleaned series and ledger, and render comparison plots.

use std::time::Instant;

use colored::Colorize;
use indicatif::HumanDuration;
use tracing::{debug, info};

use super::shared::{setup_logging, RunStats};
use crate::app::models::Variable;
use crate::app::services::{checks, loader, plotter, report_writer, summary};
use crate::cli::args::ProcessArgs;
use crate::Result;

/// Process command runner
///
/// Workflow:
/// 1. Set up logging and validate arguments
/// 2. Load the raw series and the empty ledger
/// 3. Run checks 1-4 in pipeline order
/// 4. Persist the cleaned series and the correction ledger
/// 5. Render before/after plots against the raw snapshot
pub fn run_process(args: ProcessArgs) -> Result<RunStats> {
    let start_time = Instant::now();

    setup_logging(&args.log_level, args.quiet)?;

    info!("Starting metqc");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    let (table, ledger) = loader::load_observations(&args.input_path)?;
    info!("Raw data loaded");
    summary::log_stage_summary(&table);

    // Read-only baseline for the comparison plots, taken before any check
    let raw_snapshot = table.clone();

    let (table, ledger) = checks::run_all(table, ledger);

    report_writer::write_outputs(&table, &ledger, &args.output_dir)?;
    let mut files_written = 2;

    if args.no_plots {
        info!("Plot rendering disabled");
    } else {
        plotter::render_comparison_plots(&raw_snapshot, &table, &args.output_dir)?;
        files_written += Variable::ALL.len();
    }

    let stats = RunStats {
        records_loaded: table.len(),
        total_corrections: ledger.total_corrections(),
        files_written,
        elapsed: start_time.elapsed(),
    };

    if !args.quiet {
        print_final_report(&stats, &ledger);
    }

    Ok(stats)
}

/// Print the colored end-of-run report
fn print_final_report(stats: &RunStats, ledger: &crate::app::models::CorrectionLedger) {
    println!();
    println!("{}", "Quality control complete".green().bold());
    println!(
        "  {} records processed, {} corrections applied",
        stats.records_loaded.to_string().cyan(),
        stats.total_corrections.to_string().cyan()
    );
    for (label, counts) in ledger.rows() {
        println!(
            "  {:<16} {:>6} {:>6} {:>6} {:>6}",
            label, counts[0], counts[1], counts[2], counts[3]
        );
    }
    println!(
        "  {} files written in {}",
        stats.files_written,
        HumanDuration(stats.elapsed)
    );
}
