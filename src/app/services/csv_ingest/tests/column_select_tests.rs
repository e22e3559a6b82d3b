//! Tests for the measurement-column heuristic

use super::{headers, rows};
use crate::app::services::csv_ingest::{select_measurement_column, ColumnSelection};

#[test]
fn test_keyword_header_wins() {
    let selection = select_measurement_column(
        &headers(&["Timestamp", "Status", "Voltage (VDC)"]),
        &rows(&[&["1", "ok", "10.0"]]),
    );
    assert_eq!(selection, ColumnSelection::Keyword(2));
}

#[test]
fn test_keyword_matching_is_case_insensitive_and_substring() {
    for header in ["VOLTAGE", "  vdc  ", "Shunt Resistance", "OHMS", "adc_raw", "Measurement"] {
        let selection = select_measurement_column(&headers(&["Time", header]), &rows(&[]));
        assert_eq!(selection, ColumnSelection::Keyword(1), "header {header:?}");
    }
}

#[test]
fn test_leftmost_keyword_wins_over_later_ones() {
    let selection = select_measurement_column(
        &headers(&["Current [A]", "Voltage [V]"]),
        &rows(&[&["0.1", "10.0"]]),
    );
    assert_eq!(selection, ColumnSelection::Keyword(0));
}

#[test]
fn test_fallback_picks_rightmost_numeric_column() {
    let selection = select_measurement_column(
        &headers(&["Index", "Note", "Reading1", "Reading2"]),
        &rows(&[
            &["1", "warmup", "9.8", "10.011883"],
            &["2", "", "9.9", "10.012001"],
        ]),
    );
    assert_eq!(selection, ColumnSelection::LastNumeric(3));
}

#[test]
fn test_blank_cells_do_not_disqualify_a_column() {
    let selection = select_measurement_column(
        &headers(&["Note", "Reading"]),
        &rows(&[&["a", "1.5"], &["b", ""], &["c", "2.5"]]),
    );
    assert_eq!(selection, ColumnSelection::LastNumeric(1));
}

#[test]
fn test_mixed_text_disqualifies_a_column() {
    // One non-numeric cell among the samples rules the column out
    let selection = select_measurement_column(
        &headers(&["Reading"]),
        &rows(&[&["1.5"], &["overload"], &["2.5"]]),
    );
    assert_eq!(selection, ColumnSelection::NoNumericColumn);
}

#[test]
fn test_all_blank_column_is_not_numeric() {
    let selection =
        select_measurement_column(&headers(&["Note", "Spare"]), &rows(&[&["a", ""], &["b", ""]]));
    assert_eq!(selection, ColumnSelection::NoNumericColumn);
}

#[test]
fn test_no_numeric_column_signal() {
    let selection = select_measurement_column(
        &headers(&["Name", "Status"]),
        &rows(&[&["probe", "ok"], &["probe", "ok"]]),
    );
    assert_eq!(selection, ColumnSelection::NoNumericColumn);
    assert_eq!(selection.index(), None);
}

#[test]
fn test_empty_input() {
    let selection = select_measurement_column(&[], &rows(&[]));
    assert_eq!(selection, ColumnSelection::NoNumericColumn);
}
