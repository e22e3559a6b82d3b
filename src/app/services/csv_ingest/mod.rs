//! CSV ingest for Output-type device readings
//!
//! Equipment CSV exports vary in shape: some carry a labelled
//! measurement column (`Voltage (VDC)`, `ADC Reading`), others only a
//! timestamp plus unlabelled numeric columns. Column choice is a pure
//! decision over headers and sampled rows ([`column_select`]); the
//! reader applies it and collects the column's parseable values.

pub mod column_select;
pub mod reader;

#[cfg(test)]
pub mod tests;

pub use column_select::{select_measurement_column, ColumnSelection};
pub use reader::read_measurements;
