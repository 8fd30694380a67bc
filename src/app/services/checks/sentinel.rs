//! Check 1: no-data sentinel replacement
//!
//! Raw files mark unrecorded observations with a reserved -999 sentinel.
//! This stage converts every sentinel occurrence, in any of the four
//! variable columns, into the explicit missing marker so later stages
//! never mistake it for a measurement.

use tracing::debug;

use crate::app::models::{Check, CorrectionLedger, ObservationTable, Variable};
use crate::constants::NO_DATA_SENTINEL;

/// Replace every exact -999 value with the missing marker
///
/// Records the per-column missing count after replacement as ledger row
/// "1. No Data". The table enters this stage with no missing values, so
/// the count equals the number of sentinels replaced.
pub fn check_no_data(
    mut table: ObservationTable,
    mut ledger: CorrectionLedger,
) -> (ObservationTable, CorrectionLedger) {
    let mut replaced = 0u64;
    for record in table.records_mut() {
        for variable in Variable::ALL {
            if record.value(variable) == Some(NO_DATA_SENTINEL) {
                record.set_value(variable, None);
                replaced += 1;
            }
        }
    }
    debug!("Replaced {} no-data sentinel values", replaced);

    ledger.record(Check::NoData, table.missing_counts());
    (table, ledger)
}
