//! Core data models for the quality control pipeline
//!
//! This module defines the date-indexed observation table the checks mutate,
//! the per-check correction ledger they report into, and the variable/check
//! enumerations that tie the two together.

use chrono::NaiveDate;

use crate::constants::{
    CHECK_LABELS, PRECIP_RANGE, TEMPERATURE_RANGE, VARIABLE_LABELS, WIND_SPEED_RANGE,
};

/// Number of observed variables per daily record
pub const VARIABLE_COUNT: usize = 4;

/// The four observed meteorological variables, in table column order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variable {
    /// Daily precipitation (mm)
    Precip,
    /// Daily maximum air temperature (°C)
    MaxTemp,
    /// Daily minimum air temperature (°C)
    MinTemp,
    /// Daily wind speed (m/s)
    WindSpeed,
}

impl Variable {
    /// All variables in table column order
    pub const ALL: [Variable; VARIABLE_COUNT] = [
        Variable::Precip,
        Variable::MaxTemp,
        Variable::MinTemp,
        Variable::WindSpeed,
    ];

    /// Column position of this variable in the table and ledger
    pub fn index(&self) -> usize {
        match self {
            Variable::Precip => 0,
            Variable::MaxTemp => 1,
            Variable::MinTemp => 2,
            Variable::WindSpeed => 3,
        }
    }

    /// Human-readable column label
    pub fn label(&self) -> &'static str {
        VARIABLE_LABELS[self.index()]
    }

    /// Closed plausible-value range enforced by the gross error check
    pub fn valid_range(&self) -> (f64, f64) {
        match self {
            Variable::Precip => PRECIP_RANGE,
            Variable::MaxTemp | Variable::MinTemp => TEMPERATURE_RANGE,
            Variable::WindSpeed => WIND_SPEED_RANGE,
        }
    }
}

/// The four pipeline checks, in mandatory execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    /// Check 1: replace the -999 sentinel with the missing marker
    NoData,
    /// Check 2: mark values outside plausible bounds missing
    GrossError,
    /// Check 3: swap inverted max/min temperature pairs
    Swapped,
    /// Check 4: remove temperature pairs with an implausible spread
    SpanFail,
}

impl Check {
    /// All checks in execution order
    pub const ALL: [Check; 4] = [
        Check::NoData,
        Check::GrossError,
        Check::Swapped,
        Check::SpanFail,
    ];

    /// Ledger row label for this check
    pub fn label(&self) -> &'static str {
        match self {
            Check::NoData => CHECK_LABELS[0],
            Check::GrossError => CHECK_LABELS[1],
            Check::Swapped => CHECK_LABELS[2],
            Check::SpanFail => CHECK_LABELS[3],
        }
    }

}

/// One day of observations; `None` is the explicit missing marker
#[derive(Debug, Clone, PartialEq)]
pub struct DailyRecord {
    /// Calendar date of the observation (unique table key)
    pub date: NaiveDate,
    /// Daily precipitation (mm)
    pub precip: Option<f64>,
    /// Daily maximum air temperature (°C)
    pub max_temp: Option<f64>,
    /// Daily minimum air temperature (°C)
    pub min_temp: Option<f64>,
    /// Daily wind speed (m/s)
    pub wind_speed: Option<f64>,
}

impl DailyRecord {
    /// Create a record with all four variables present
    pub fn new(
        date: NaiveDate,
        precip: f64,
        max_temp: f64,
        min_temp: f64,
        wind_speed: f64,
    ) -> Self {
        Self {
            date,
            precip: Some(precip),
            max_temp: Some(max_temp),
            min_temp: Some(min_temp),
            wind_speed: Some(wind_speed),
        }
    }

    /// Read one variable's value
    pub fn value(&self, variable: Variable) -> Option<f64> {
        match variable {
            Variable::Precip => self.precip,
            Variable::MaxTemp => self.max_temp,
            Variable::MinTemp => self.min_temp,
            Variable::WindSpeed => self.wind_speed,
        }
    }

    /// Overwrite one variable's value
    pub fn set_value(&mut self, variable: Variable, value: Option<f64>) {
        match variable {
            Variable::Precip => self.precip = value,
            Variable::MaxTemp => self.max_temp = value,
            Variable::MinTemp => self.min_temp = value,
            Variable::WindSpeed => self.wind_speed = value,
        }
    }
}

/// Date-indexed table of daily observations
///
/// Row order equals the chronological order of the source file and is never
/// changed by the checks; dates are unique (enforced by the loader). Checks
/// mutate values in place, either marking them missing or swapping the two
/// temperature fields of a row.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObservationTable {
    records: Vec<DailyRecord>,
}

impl ObservationTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table from pre-validated records (caller guarantees unique dates)
    pub fn from_records(records: Vec<DailyRecord>) -> Self {
        Self { records }
    }

    /// Number of daily records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in source order
    pub fn records(&self) -> &[DailyRecord] {
        &self.records
    }

    /// Mutable records in source order
    pub fn records_mut(&mut self) -> &mut [DailyRecord] {
        &mut self.records
    }

    /// Per-column count of missing values, in column order
    ///
    /// This is the running state the ledger delta arithmetic is built on:
    /// each check's recorded count is this total minus the ledger's column
    /// totals at the time the check completes.
    pub fn missing_counts(&self) -> [u64; VARIABLE_COUNT] {
        let mut counts = [0u64; VARIABLE_COUNT];
        for record in &self.records {
            for variable in Variable::ALL {
                if record.value(variable).is_none() {
                    counts[variable.index()] += 1;
                }
            }
        }
        counts
    }

    /// Values of one variable in row order, missing included
    pub fn column(&self, variable: Variable) -> Vec<Option<f64>> {
        self.records.iter().map(|r| r.value(variable)).collect()
    }
}

/// Per-check, per-variable correction counts
///
/// One labeled row per check, one column per variable. The ledger is created
/// with the zeroed "1. No Data" row; Check 1 overwrites it and Checks 2-4
/// append their own rows. Every row is written exactly once, by its own
/// check, after that check completes.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrectionLedger {
    rows: Vec<(&'static str, [u64; VARIABLE_COUNT])>,
}

impl CorrectionLedger {
    /// Create a ledger holding only the zeroed initial row
    pub fn new() -> Self {
        Self {
            rows: vec![(Check::NoData.label(), [0; VARIABLE_COUNT])],
        }
    }

    /// Record a check's correction counts
    ///
    /// Check 1 overwrites the initial row it shares a label with; the later
    /// checks append. Recording the same check twice is a pipeline ordering
    /// bug and panics.
    pub fn record(&mut self, check: Check, counts: [u64; VARIABLE_COUNT]) {
        match check {
            Check::NoData => {
                assert_eq!(
                    self.rows[0],
                    (Check::NoData.label(), [0; VARIABLE_COUNT]),
                    "ledger row '{}' already written",
                    check.label()
                );
                self.rows[0].1 = counts;
            }
            _ => {
                assert!(
                    self.rows.iter().all(|(label, _)| *label != check.label()),
                    "ledger row '{}' already written",
                    check.label()
                );
                self.rows.push((check.label(), counts));
            }
        }
    }

    /// Labeled rows in check order
    pub fn rows(&self) -> &[(&'static str, [u64; VARIABLE_COUNT])] {
        &self.rows
    }

    /// Counts recorded for one check, if that check has run
    pub fn counts(&self, check: Check) -> Option<[u64; VARIABLE_COUNT]> {
        self.rows
            .iter()
            .find(|(label, _)| *label == check.label())
            .map(|(_, counts)| *counts)
    }

    /// Per-column sum over all rows recorded so far
    ///
    /// Equals the table's cumulative missing count after the value-removing
    /// checks, which is what Check 2's delta is computed against.
    pub fn column_totals(&self) -> [u64; VARIABLE_COUNT] {
        let mut totals = [0u64; VARIABLE_COUNT];
        for (_, counts) in &self.rows {
            for (total, count) in totals.iter_mut().zip(counts) {
                *total += count;
            }
        }
        totals
    }

    /// Total corrections across all checks and variables
    pub fn total_corrections(&self) -> u64 {
        self.column_totals().iter().sum()
    }
}

impl Default for CorrectionLedger {
    fn default() -> Self {
        Self::new()
    }
}
