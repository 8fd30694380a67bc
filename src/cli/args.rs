//! Command-line argument definitions for metqc
//!
//! Defines the complete CLI interface using the clap derive API.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::{Error, Result};

/// CLI arguments for the metqc quality control tool
///
/// Runs sequential quality control on a daily meteorological time series:
/// precipitation, max/min air temperature and wind speed.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "metqc",
    version,
    about = "Sequential quality control for daily meteorological time series",
    long_about = "Runs a fixed four-stage quality control pipeline over a daily \
                  meteorological series (precipitation, max/min temperature, wind speed): \
                  no-data sentinel replacement, gross error bounds, swapped temperature \
                  repair and temperature span limits. Produces the cleaned series, a \
                  per-check correction ledger and before/after comparison plots."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for metqc
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Run the full quality control pipeline and persist outputs
    Process(ProcessArgs),
    /// Load a raw series and print its summary statistics without modifying it
    Inspect(InspectArgs),
}

/// Arguments for the process command (main pipeline)
#[derive(Debug, Clone, Parser)]
pub struct ProcessArgs {
    /// Input path to the raw observation file
    ///
    /// Whitespace-delimited text with no header row and columns
    /// Date, Precip, MaxTemp, MinTemp, WindSpeed; -999 marks missing data.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "Input path to the raw observation file"
    )]
    pub input_path: PathBuf,

    /// Output directory for the cleaned series, ledger and plots
    ///
    /// Will be created if it doesn't exist. Defaults to ./output
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        default_value = "output",
        help = "Output directory for generated files"
    )]
    pub output_dir: PathBuf,

    /// Skip rendering the before/after comparison plots
    #[arg(long = "no-plots", help = "Skip rendering comparison plots")]
    pub no_plots: bool,

    /// Suppress per-stage summary logging; errors only
    #[arg(short = 'q', long = "quiet", help = "Suppress informational output")]
    pub quiet: bool,

    /// Log level for diagnostic output
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        default_value = "info",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

impl ProcessArgs {
    /// Validate argument combinations before the pipeline starts
    pub fn validate(&self) -> Result<()> {
        if !self.input_path.exists() {
            return Err(Error::io(
                format!("input file '{}' not found", self.input_path.display()),
                std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
            ));
        }

        const LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];
        if !LEVELS.contains(&self.log_level.as_str()) {
            return Err(Error::io(
                format!(
                    "invalid log level '{}' (expected one of {})",
                    self.log_level,
                    LEVELS.join(", ")
                ),
                std::io::Error::new(std::io::ErrorKind::InvalidInput, "bad log level"),
            ));
        }

        Ok(())
    }
}

/// Arguments for the inspect command (read-only summary)
#[derive(Debug, Clone, Parser)]
pub struct InspectArgs {
    /// Input path to the raw observation file
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "Input path to the raw observation file"
    )]
    pub input_path: PathBuf,
}
