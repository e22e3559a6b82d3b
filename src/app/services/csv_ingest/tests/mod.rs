//! Shared fixtures for CSV ingest testing

mod column_select_tests;

use csv::StringRecord;

/// Build sample rows from string slices
pub fn rows(data: &[&[&str]]) -> Vec<StringRecord> {
    data.iter().map(|row| StringRecord::from(*row)).collect()
}

/// Headers vector from string slices
pub fn headers(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

/// A keyword-labelled export like the VT2816A writes
pub fn labelled_csv() -> &'static str {
    "\
Timestamp,Status,Voltage (VDC)
2024-01-15 12:30:01,ok,10.011883
2024-01-15 12:30:02,ok,10.012001
2024-01-15 12:30:03,ok,10.011790
"
}

/// An unlabelled export where only position identifies the measurement
pub fn unlabelled_csv() -> &'static str {
    "\
Index,Note,Reading1,Reading2
1,warmup,9.8,10.011883
2,,9.9,10.012001
3,,9.9,10.011790
"
}
