//! Tests for the swapped temperature repair check

use super::{ledger, record, table, table_with_guard};
use crate::app::models::{Check, ObservationTable};
use crate::app::services::checks::temp_order::check_swapped_temperatures;

#[test]
fn test_inverted_pairs_swapped_in_place() {
    let table = table_with_guard(&[
        (0.0, 5.0, 15.0, 2.0), // inverted
        (0.0, 20.0, 10.0, 2.0),
        (0.0, -3.9, 8.9, 2.0), // inverted
    ]);

    let (table, ledger) = check_swapped_temperatures(table, ledger());

    assert_eq!(table.records()[0].max_temp, Some(15.0));
    assert_eq!(table.records()[0].min_temp, Some(5.0));
    assert_eq!(table.records()[1].max_temp, Some(20.0));
    assert_eq!(table.records()[2].max_temp, Some(8.9));
    assert_eq!(table.records()[2].min_temp, Some(-3.9));

    assert_eq!(ledger.counts(Check::Swapped), Some([0, 2, 2, 0]));
}

#[test]
fn test_swap_preserves_value_multiset() {
    let before = table_with_guard(&[(0.3, -1.5, 7.25, 2.0)]);
    let (after, _) = check_swapped_temperatures(before.clone(), ledger());

    for (b, a) in before.records().iter().zip(after.records()) {
        let mut old = [b.max_temp, b.min_temp];
        let mut new = [a.max_temp, a.min_temp];
        old.sort_by(|x, y| x.partial_cmp(y).unwrap());
        new.sort_by(|x, y| x.partial_cmp(y).unwrap());
        assert_eq!(old, new);
        assert_eq!(b.precip, a.precip);
        assert_eq!(b.wind_speed, a.wind_speed);
    }
}

#[test]
fn test_equal_temperatures_not_swapped() {
    let table = table_with_guard(&[(0.0, 10.0, 10.0, 2.0)]);
    let (_, ledger) = check_swapped_temperatures(table, ledger());
    assert_eq!(ledger.counts(Check::Swapped), Some([0, 0, 0, 0]));
}

#[test]
fn test_missing_temperature_never_swapped() {
    let mut rows = table_with_guard(&[(0.0, 5.0, 15.0, 2.0), (0.0, 5.0, 15.0, 2.0)]);
    rows.records_mut()[0].max_temp = None;
    rows.records_mut()[1].min_temp = None;

    let (table, ledger) = check_swapped_temperatures(rows, ledger());

    assert_eq!(table.records()[0].max_temp, None);
    assert_eq!(table.records()[0].min_temp, Some(15.0));
    assert_eq!(table.records()[1].max_temp, Some(5.0));
    assert_eq!(table.records()[1].min_temp, None);
    assert_eq!(ledger.counts(Check::Swapped), Some([0, 0, 0, 0]));
}

#[test]
fn test_last_row_excluded_from_scan() {
    // No guard row: the trailing inverted pair sits outside the scan bounds
    let table = table(&[(0.0, 20.0, 10.0, 2.0), (0.0, 5.0, 15.0, 2.0)]);

    let (table, ledger) = check_swapped_temperatures(table, ledger());

    assert_eq!(table.records()[1].max_temp, Some(5.0));
    assert_eq!(table.records()[1].min_temp, Some(15.0));
    assert_eq!(ledger.counts(Check::Swapped), Some([0, 0, 0, 0]));
}

#[test]
fn test_empty_and_single_row_tables() {
    let empty = ObservationTable::new();
    let (empty, l) = check_swapped_temperatures(empty, ledger());
    assert!(empty.is_empty());
    assert_eq!(l.counts(Check::Swapped), Some([0, 0, 0, 0]));

    let single = ObservationTable::from_records(vec![record(1, 0.0, 5.0, 15.0, 2.0)]);
    let (single, l) = check_swapped_temperatures(single, ledger());
    // A single row is its own last row and stays unscanned
    assert_eq!(single.records()[0].max_temp, Some(5.0));
    assert_eq!(l.counts(Check::Swapped), Some([0, 0, 0, 0]));
}
