//! The four-stage quality control pipeline
//!
//! Checks execute in a fixed order because each ledger row's delta
//! arithmetic depends on the cumulative missing-count state left by every
//! prior stage, and the span check relies on the order check having already
//! repaired inverted temperature pairs:
//!
//! 1. [`sentinel`] — replace the -999 no-data sentinel with the missing marker
//! 2. [`gross_error`] — mark values outside plausible physical bounds missing
//! 3. [`temp_order`] — swap inverted max/min temperature pairs
//! 4. [`temp_span`] — remove temperature pairs with an implausible spread
//!
//! Each stage takes the owned `(table, ledger)` pair, mutates both, and
//! returns them; per-row defects are data outcomes recorded in the ledger,
//! never errors.

pub mod gross_error;
pub mod sentinel;
pub mod temp_order;
pub mod temp_span;

#[cfg(test)]
mod tests;

use tracing::info;

use crate::app::models::{CorrectionLedger, ObservationTable};
use crate::app::services::summary;

/// Run all four checks in pipeline order, logging a stage summary after each
pub fn run_all(
    table: ObservationTable,
    ledger: CorrectionLedger,
) -> (ObservationTable, CorrectionLedger) {
    let (table, ledger) = sentinel::check_no_data(table, ledger);
    info!("No-data sentinel replacement complete");
    summary::log_stage_summary(&table);

    let (table, ledger) = gross_error::check_gross_errors(table, ledger);
    info!("Gross error check complete");
    summary::log_stage_summary(&table);

    let (table, ledger) = temp_order::check_swapped_temperatures(table, ledger);
    info!("Swapped temperature check complete");
    summary::log_stage_summary(&table);

    let (table, ledger) = temp_span::check_temperature_span(table, ledger);
    info!("Temperature span check complete");
    summary::log_stage_summary(&table);

    (table, ledger)
}
