//! metqc Library
//!
//! A Rust library for sequential quality control of daily meteorological
//! time series (precipitation, max/min temperature, wind speed).
//!
//! This library provides tools for:
//! - Parsing whitespace-delimited daily observation files into a date-indexed table
//! - Running a fixed four-stage validation pipeline (sentinel replacement,
//!   gross-error bounds, swapped temperature repair, temperature span limits)
//! - Tracking per-check, per-variable correction counts in a ledger
//! - Persisting the cleaned series and the correction ledger
//! - Rendering before/after comparison plots for each variable

pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod checks;
        pub mod loader;
        pub mod plotter;
        pub mod report_writer;
        pub mod summary;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Check, CorrectionLedger, DailyRecord, ObservationTable, Variable};

/// Result type alias for metqc operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for quality control operations
///
/// Parsing problems are fatal and abort the run before any check executes;
/// per-row defects found by the checks are data outcomes recorded in the
/// ledger, never errors.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Malformed observation record
    #[error("parse error in '{file}' line {line}: {message}")]
    Parse {
        file: String,
        line: usize,
        message: String,
    },

    /// Two records share the same calendar date
    #[error("duplicate date in '{file}' line {line}: {date}")]
    DuplicateDate {
        file: String,
        line: usize,
        date: chrono::NaiveDate,
    },

    /// Plot rendering failed
    #[error("plot rendering error: {message}")]
    Plot { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a parse error with file position context
    pub fn parse(file: impl Into<String>, line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            file: file.into(),
            line,
            message: message.into(),
        }
    }

    /// Create a duplicate date error
    pub fn duplicate_date(file: impl Into<String>, line: usize, date: chrono::NaiveDate) -> Self {
        Self::DuplicateDate {
            file: file.into(),
            line,
            date,
        }
    }

    /// Create a plot rendering error
    pub fn plot(message: impl Into<String>) -> Self {
        Self::Plot {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}
