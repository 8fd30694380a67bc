//! Raw observation file loading
//!
//! Parses whitespace-delimited daily observation files into an
//! [`ObservationTable`] and initializes the correction ledger the checks
//! report into. Loading is atomic: any malformed record fails the whole
//! load before any check runs.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::app::models::{CorrectionLedger, DailyRecord, ObservationTable, Variable};
use crate::constants::{DATE_FORMATS, RAW_FIELD_COUNT};
use crate::{Error, Result};

/// Load a raw observation file into a table and a fresh ledger
///
/// Expects whitespace-delimited records with no header row, columns
/// [Date, Precip, MaxTemp, MinTemp, WindSpeed]. The date is the unique row
/// key; the four measurement columns are parsed as real numbers (including
/// the -999 sentinel, which is left for Check 1 to interpret). Blank lines
/// are skipped.
pub fn load_observations(path: &Path) -> Result<(ObservationTable, CorrectionLedger)> {
    let contents = fs::read_to_string(path)
        .map_err(|e| Error::io(format!("failed to read '{}'", path.display()), e))?;

    let file_name = path.display().to_string();
    let table = parse_observations(&contents, &file_name)?;

    info!(
        "Loaded {} daily records from '{}'",
        table.len(),
        path.display()
    );

    Ok((table, CorrectionLedger::new()))
}

/// Parse raw observation text into a table
///
/// Separated from file access so tests can drive the parser from string
/// fixtures. `source_name` is used for error reporting only.
pub fn parse_observations(contents: &str, source_name: &str) -> Result<ObservationTable> {
    let mut records = Vec::new();
    let mut seen_dates = HashSet::new();

    for (line_index, line) in contents.lines().enumerate() {
        let line_number = line_index + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let fields: Vec<&str> = trimmed.split_whitespace().collect();
        if fields.len() != RAW_FIELD_COUNT {
            return Err(Error::parse(
                source_name,
                line_number,
                format!(
                    "expected {} whitespace-delimited fields, found {}",
                    RAW_FIELD_COUNT,
                    fields.len()
                ),
            ));
        }

        let date = parse_date(fields[0], source_name, line_number)?;
        if !seen_dates.insert(date) {
            return Err(Error::duplicate_date(source_name, line_number, date));
        }

        let mut values = [0.0f64; 4];
        for (variable, (slot, field)) in Variable::ALL
            .iter()
            .zip(values.iter_mut().zip(&fields[1..]))
        {
            *slot = field
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| {
                    Error::parse(
                        source_name,
                        line_number,
                        format!("invalid {} value '{}'", variable.label(), field),
                    )
                })?;
        }

        records.push(DailyRecord::new(
            date, values[0], values[1], values[2], values[3],
        ));
    }

    debug!("Parsed {} records from '{}'", records.len(), source_name);
    Ok(ObservationTable::from_records(records))
}

/// Parse a calendar date field, trying each accepted format in order
fn parse_date(field: &str, source_name: &str, line_number: usize) -> Result<NaiveDate> {
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(field, format) {
            return Ok(date);
        }
    }
    Err(Error::parse(
        source_name,
        line_number,
        format!("invalid date '{field}'"),
    ))
}
