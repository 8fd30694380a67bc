//! Check 4: temperature span limits
//!
//! Runs after the order check, so inverted pairs have already been
//! repaired. A max-min spread beyond the limit therefore reflects genuine
//! measurement inconsistency rather than an ordering defect, and neither
//! value can be trusted: both are removed.

use tracing::debug;

use crate::app::models::{Check, CorrectionLedger, ObservationTable};
use crate::constants::MAX_TEMPERATURE_SPAN;

/// Remove temperature pairs whose daily spread exceeds the span limit
///
/// Scans the same bounds as the order check (the final row is not
/// inspected). Rows where either temperature is missing are skipped; the
/// span is undefined there. On violation both temperatures are set missing
/// and ledger row "4. Range Fail" is recorded as [0, count, count, 0].
pub fn check_temperature_span(
    mut table: ObservationTable,
    mut ledger: CorrectionLedger,
) -> (ObservationTable, CorrectionLedger) {
    let scan_end = table.len().saturating_sub(1);
    let mut failed = 0u64;

    for record in &mut table.records_mut()[..scan_end] {
        if let (Some(max), Some(min)) = (record.max_temp, record.min_temp) {
            if max - min > MAX_TEMPERATURE_SPAN {
                debug!(
                    "{}: temperature span {} exceeds {}, removing pair",
                    record.date,
                    max - min,
                    MAX_TEMPERATURE_SPAN
                );
                record.max_temp = None;
                record.min_temp = None;
                failed += 1;
            }
        }
    }

    ledger.record(Check::SpanFail, [0, failed, failed, 0]);
    (table, ledger)
}
