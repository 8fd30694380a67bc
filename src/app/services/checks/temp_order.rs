//! Check 3: swapped temperature repair
//!
//! Days where the recorded maximum temperature is below the minimum are a
//! transcription defect: the two values are real but written to the wrong
//! columns. The repair reorders them in place; no value is altered or
//! removed.

use std::mem;

use tracing::debug;

use crate::app::models::{Check, CorrectionLedger, ObservationTable};

/// Swap max/min temperature pairs recorded in inverted order
///
/// Scans all rows except the last (the final row is intentionally excluded
/// from the scan bounds). Rows where either temperature is missing are
/// never swapped: a missing value never satisfies the strict comparison.
/// Records ledger row "3. Swapped" as [0, count, count, 0] since only the
/// two temperature columns are touched.
pub fn check_swapped_temperatures(
    mut table: ObservationTable,
    mut ledger: CorrectionLedger,
) -> (ObservationTable, CorrectionLedger) {
    let scan_end = table.len().saturating_sub(1);
    let mut swapped = 0u64;

    for record in &mut table.records_mut()[..scan_end] {
        if let (Some(max), Some(min)) = (record.max_temp, record.min_temp) {
            if max < min {
                debug!(
                    "{}: swapping inverted temperature pair ({}, {})",
                    record.date, max, min
                );
                mem::swap(&mut record.max_temp, &mut record.min_temp);
                swapped += 1;
            }
        }
    }

    ledger.record(Check::Swapped, [0, swapped, swapped, 0]);
    (table, ledger)
}
