//! Shared helpers for metqc CLI commands
//!
//! Logging setup and the run statistics reported back to main.

use std::time::Duration;

use crate::Result;

/// Statistics accumulated over a command run, reported to the user at exit
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    /// Number of daily records loaded from the input file
    pub records_loaded: usize,
    /// Total corrections recorded in the ledger across all checks
    pub total_corrections: u64,
    /// Number of output files written (cleaned series, ledger, plots)
    pub files_written: usize,
    /// Wall-clock duration of the run
    pub elapsed: Duration,
}

/// Set up tracing output for a command
///
/// `RUST_LOG` overrides the requested level. Quiet mode drops to warnings
/// with a compact stderr layer; otherwise a standard fmt layer is used.
pub fn setup_logging(log_level: &str, quiet: bool) -> Result<()> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let level = if quiet { "warn" } else { log_level };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("metqc={level}")));

    if quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init();
    }

    Ok(())
}
