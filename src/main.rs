use clap::Parser;
use metqc::cli::{args::Args, commands};
use std::process;

fn main() {
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    let Some(command) = args.command else {
        show_help_and_commands();
        process::exit(0);
    };

    match commands::run(command) {
        Ok(_stats) => {
            // Success - the command has already reported its results
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {error:#}");
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("metqc - Daily Meteorological Series Quality Control");
    println!("===================================================");
    println!();
    println!("Run sequential quality control over a daily meteorological time series");
    println!("(precipitation, max/min air temperature, wind speed).");
    println!();
    println!("USAGE:");
    println!("    metqc <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    process     Run the four-stage quality control pipeline (main command)");
    println!("    inspect     Print raw series summary statistics without modifying it");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Run the full pipeline on a raw observation file:");
    println!("    metqc process --input DataQualityChecking.txt --output output");
    println!();
    println!("    # Skip the comparison plots:");
    println!("    metqc process --input DataQualityChecking.txt --no-plots");
    println!();
    println!("    # Summarize the raw series without changing anything:");
    println!("    metqc inspect --input DataQualityChecking.txt");
    println!();
    println!("For detailed help on any command, use:");
    println!("    metqc <COMMAND> --help");
}
