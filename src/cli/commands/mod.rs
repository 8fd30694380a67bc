//! Command implementations for the metqc CLI
//!
//! Each command lives in its own module; shared logging setup and run
//! statistics live in [`shared`].

pub mod inspect;
pub mod process;
pub mod shared;

pub use shared::RunStats;

use crate::cli::args::Commands;
use crate::Result;

/// Dispatch to the subcommand handler selected on the command line
pub fn run(command: Commands) -> Result<RunStats> {
    match command {
        Commands::Process(process_args) => process::run_process(process_args),
        Commands::Inspect(inspect_args) => inspect::run_inspect(inspect_args),
    }
}
