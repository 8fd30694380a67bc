//! Check 2: gross error bounds
//!
//! The thresholds are physically implausible bounds for daily climate
//! observations, not statistical outlier bounds. Any violation is treated
//! as a gross measurement or transmission error and the value is removed;
//! nothing is ever un-marked.

use tracing::debug;

use crate::app::models::{Check, CorrectionLedger, ObservationTable, Variable, VARIABLE_COUNT};

/// Mark every value strictly outside its variable's closed valid range missing
///
/// The ledger row "2. Gross Error" is a delta against the cumulative
/// missing-count state: per-column total missing after marking, minus the
/// ledger's column totals recorded so far. Already-missing values pass
/// through untouched, so the delta is never negative.
pub fn check_gross_errors(
    mut table: ObservationTable,
    mut ledger: CorrectionLedger,
) -> (ObservationTable, CorrectionLedger) {
    for record in table.records_mut() {
        for variable in Variable::ALL {
            let (low, high) = variable.valid_range();
            if let Some(value) = record.value(variable) {
                if value < low || value > high {
                    debug!(
                        "{}: {} value {} outside [{}, {}]",
                        record.date,
                        variable.label(),
                        value,
                        low,
                        high
                    );
                    record.set_value(variable, None);
                }
            }
        }
    }

    let missing = table.missing_counts();
    let recorded = ledger.column_totals();
    let mut delta = [0u64; VARIABLE_COUNT];
    for i in 0..VARIABLE_COUNT {
        delta[i] = missing[i].saturating_sub(recorded[i]);
    }

    ledger.record(Check::GrossError, delta);
    (table, ledger)
}
