//! Tests for the temperature span check

use super::{ledger, table, table_with_guard};
use crate::app::models::Check;
use crate::app::services::checks::temp_span::check_temperature_span;

#[test]
fn test_excessive_span_removes_both_temperatures() {
    let table = table_with_guard(&[
        (5.0, 30.0, -5.0, 3.0), // span 35
        (5.0, 30.0, 5.0, 3.0),  // span 25, allowed
        (5.0, 20.0, 10.0, 3.0),
    ]);

    let (table, ledger) = check_temperature_span(table, ledger());

    assert_eq!(table.records()[0].max_temp, None);
    assert_eq!(table.records()[0].min_temp, None);
    assert_eq!(table.records()[0].precip, Some(5.0));
    assert_eq!(table.records()[0].wind_speed, Some(3.0));

    // Strict comparison: a span of exactly 25 passes
    assert_eq!(table.records()[1].max_temp, Some(30.0));
    assert_eq!(table.records()[1].min_temp, Some(5.0));

    assert_eq!(ledger.counts(Check::SpanFail), Some([0, 1, 1, 0]));
}

#[test]
fn test_missing_temperature_skips_span_computation() {
    let mut rows = table_with_guard(&[(5.0, 30.0, -5.0, 3.0)]);
    rows.records_mut()[0].min_temp = None;

    let (table, ledger) = check_temperature_span(rows, ledger());

    assert_eq!(table.records()[0].max_temp, Some(30.0));
    assert_eq!(ledger.counts(Check::SpanFail), Some([0, 0, 0, 0]));
}

#[test]
fn test_last_row_excluded_from_scan() {
    let table = table(&[(5.0, 20.0, 10.0, 3.0), (5.0, 30.0, -5.0, 3.0)]);

    let (table, ledger) = check_temperature_span(table, ledger());

    assert_eq!(table.records()[1].max_temp, Some(30.0));
    assert_eq!(table.records()[1].min_temp, Some(-5.0));
    assert_eq!(ledger.counts(Check::SpanFail), Some([0, 0, 0, 0]));
}

#[test]
fn test_no_scanned_row_keeps_excessive_span() {
    let table = table_with_guard(&[
        (5.0, 30.0, -5.0, 3.0),
        (5.0, 35.0, 9.0, 3.0),
        (5.0, 34.0, 8.5, 3.0),
    ]);

    let (table, _) = check_temperature_span(table, ledger());

    let scan_end = table.len() - 1;
    for record in &table.records()[..scan_end] {
        if let (Some(max), Some(min)) = (record.max_temp, record.min_temp) {
            assert!(max - min <= 25.0);
        }
    }
}
