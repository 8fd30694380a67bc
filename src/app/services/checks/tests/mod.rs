//! Tests for the four-stage quality control pipeline
//!
//! Shared fixture builders live here; each check has its own test module.

mod temp_order_tests;
mod temp_span_tests;

use chrono::NaiveDate;

use crate::app::models::{CorrectionLedger, DailyRecord, ObservationTable};

/// Build a date in January 2020, one day per row index
pub fn day(n: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, n).unwrap()
}

/// Build a fully-present record for day `n`
pub fn record(n: u32, precip: f64, max_temp: f64, min_temp: f64, wind_speed: f64) -> DailyRecord {
    DailyRecord::new(day(n), precip, max_temp, min_temp, wind_speed)
}

/// Build a table from rows of (precip, max_temp, min_temp, wind_speed),
/// one per consecutive day, with a trailing benign row so the scanned
/// prefix covers every row of interest (the last table row is outside the
/// order/span scan bounds)
pub fn table_with_guard(rows: &[(f64, f64, f64, f64)]) -> ObservationTable {
    let mut records: Vec<DailyRecord> = rows
        .iter()
        .enumerate()
        .map(|(i, &(p, mx, mn, ws))| record(i as u32 + 1, p, mx, mn, ws))
        .collect();
    records.push(record(rows.len() as u32 + 1, 0.0, 10.0, 5.0, 2.0));
    ObservationTable::from_records(records)
}

/// Build a table with no trailing guard row
pub fn table(rows: &[(f64, f64, f64, f64)]) -> ObservationTable {
    let records = rows
        .iter()
        .enumerate()
        .map(|(i, &(p, mx, mn, ws))| record(i as u32 + 1, p, mx, mn, ws))
        .collect();
    ObservationTable::from_records(records)
}

/// Fresh ledger holding only the zeroed initial row
pub fn ledger() -> CorrectionLedger {
    CorrectionLedger::new()
}
