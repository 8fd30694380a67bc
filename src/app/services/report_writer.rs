//! Output persistence for the cleaned series and the correction ledger
//!
//! Serialization is split from file writing so tests can assert on the
//! rendered text. Persistence failures are fatal; there is no partial
//! output and no retry.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::app::models::{CorrectionLedger, ObservationTable, Variable};
use crate::constants::{CLEANED_DATA_FILENAME, LEDGER_FILENAME, MISSING_TOKEN, VARIABLE_LABELS};
use crate::{Error, Result};

/// Persist the cleaned table and ledger into `output_dir`
///
/// Creates the directory if needed. Writes the cleaned series as
/// space-delimited text and the ledger as a tab-delimited table.
pub fn write_outputs(
    table: &ObservationTable,
    ledger: &CorrectionLedger,
    output_dir: &Path,
) -> Result<()> {
    fs::create_dir_all(output_dir).map_err(|e| {
        Error::io(
            format!("failed to create output directory '{}'", output_dir.display()),
            e,
        )
    })?;

    let data_path = output_dir.join(CLEANED_DATA_FILENAME);
    fs::write(&data_path, render_cleaned_table(table))
        .map_err(|e| Error::io(format!("failed to write '{}'", data_path.display()), e))?;
    info!("Wrote cleaned series to '{}'", data_path.display());

    let ledger_path = output_dir.join(LEDGER_FILENAME);
    fs::write(&ledger_path, render_ledger(ledger))
        .map_err(|e| Error::io(format!("failed to write '{}'", ledger_path.display()), e))?;
    info!("Wrote correction ledger to '{}'", ledger_path.display());

    Ok(())
}

/// Render the cleaned table as space-delimited text
///
/// Header row `Date Precip MaxTemp MinTemp WindSpeed`, ISO dates, missing
/// values serialized as the `NaN` token.
pub fn render_cleaned_table(table: &ObservationTable) -> String {
    let mut out = String::from("Date Precip MaxTemp MinTemp WindSpeed\n");
    for record in table.records() {
        out.push_str(&record.date.format("%Y-%m-%d").to_string());
        for variable in Variable::ALL {
            out.push(' ');
            match record.value(variable) {
                Some(value) => out.push_str(&format!("{value}")),
                None => out.push_str(MISSING_TOKEN),
            }
        }
        out.push('\n');
    }
    out
}

/// Render the ledger as tab-delimited text
///
/// One labeled row per check in execution order under a labeled column
/// header; the first header cell is empty, matching the row-label column.
pub fn render_ledger(ledger: &CorrectionLedger) -> String {
    let mut out = String::new();
    out.push('\t');
    out.push_str(&VARIABLE_LABELS.join("\t"));
    out.push('\n');

    for (label, counts) in ledger.rows() {
        out.push_str(label);
        for count in counts {
            out.push_str(&format!("\t{count}"));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::{Check, DailyRecord};
    use chrono::NaiveDate;

    fn sample_table() -> ObservationTable {
        let mut a = DailyRecord::new(
            NaiveDate::from_ymd_opt(1915, 1, 1).unwrap(),
            0.0,
            8.9,
            -3.9,
            4.79,
        );
        a.precip = None;
        let b = DailyRecord::new(
            NaiveDate::from_ymd_opt(1915, 1, 2).unwrap(),
            0.51,
            6.1,
            0.6,
            4.4,
        );
        ObservationTable::from_records(vec![a, b])
    }

    fn sample_ledger() -> CorrectionLedger {
        let mut ledger = CorrectionLedger::new();
        ledger.record(Check::NoData, [2, 1, 0, 3]);
        ledger.record(Check::GrossError, [1, 0, 2, 0]);
        ledger.record(Check::Swapped, [0, 4, 4, 0]);
        ledger.record(Check::SpanFail, [0, 1, 1, 0]);
        ledger
    }

    #[test]
    fn test_cleaned_table_rendering() {
        let text = render_cleaned_table(&sample_table());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Date Precip MaxTemp MinTemp WindSpeed");
        assert_eq!(lines[1], "1915-01-01 NaN 8.9 -3.9 4.79");
        assert_eq!(lines[2], "1915-01-02 0.51 6.1 0.6 4.4");
    }

    #[test]
    fn test_ledger_rendering() {
        let text = render_ledger(&sample_ledger());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "\tPrecip\tMax Temp\tMin Temp\tWind Speed");
        assert_eq!(lines[1], "1. No Data\t2\t1\t0\t3");
        assert_eq!(lines[2], "2. Gross Error\t1\t0\t2\t0");
        assert_eq!(lines[3], "3. Swapped\t0\t4\t4\t0");
        assert_eq!(lines[4], "4. Range Fail\t0\t1\t1\t0");
    }

    #[test]
    fn test_write_outputs_creates_both_files() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("qc");

        write_outputs(&sample_table(), &sample_ledger(), &out).unwrap();

        assert!(out.join(CLEANED_DATA_FILENAME).exists());
        assert!(out.join(LEDGER_FILENAME).exists());
    }

    #[test]
    fn test_unwritable_output_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let blocking_file = dir.path().join("blocked");
        std::fs::write(&blocking_file, "not a directory").unwrap();

        let err = write_outputs(&sample_table(), &sample_ledger(), &blocking_file).unwrap_err();
        assert!(matches!(err, crate::Error::Io { .. }));
    }
}
