//! Measurement column selection
//!
//! A pure decision over the header row and a sample of data rows, so
//! the heuristic stays testable without touching the filesystem.

use csv::StringRecord;

use crate::constants::MEASUREMENT_COLUMN_KEYWORDS;

/// Outcome of choosing the measurement column in a CSV export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnSelection {
    /// A header contained one of the measurement keywords
    Keyword(usize),
    /// No keyword hit; the rightmost column whose sampled values are all
    /// numeric was chosen
    LastNumeric(usize),
    /// No keyword hit and no column with numeric content
    NoNumericColumn,
}

impl ColumnSelection {
    /// Chosen column index, `None` when no column qualified
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::Keyword(idx) | Self::LastNumeric(idx) => Some(*idx),
            Self::NoNumericColumn => None,
        }
    }
}

/// Choose the measurement column from headers and sampled data rows
///
/// Keyword matching runs first: the leftmost header whose lowercased,
/// trimmed text contains any measurement keyword wins. Otherwise the
/// rightmost column whose sampled cells all parse as numbers (blank
/// cells skipped, at least one value required) is taken. Index columns
/// on the left and measurement columns on the right is the layout every
/// observed export follows, hence rightmost.
pub fn select_measurement_column(headers: &[String], sample_rows: &[StringRecord]) -> ColumnSelection {
    for (idx, header) in headers.iter().enumerate() {
        let header_lower = header.to_lowercase();
        let header_lower = header_lower.trim();
        if MEASUREMENT_COLUMN_KEYWORDS
            .iter()
            .any(|keyword| header_lower.contains(keyword))
        {
            return ColumnSelection::Keyword(idx);
        }
    }

    let numeric_column = (0..headers.len())
        .rev()
        .find(|&idx| column_is_numeric(idx, sample_rows));

    match numeric_column {
        Some(idx) => ColumnSelection::LastNumeric(idx),
        None => ColumnSelection::NoNumericColumn,
    }
}

/// A column is numeric when its sampled non-blank cells all parse as
/// `f64` and at least one such cell exists
fn column_is_numeric(idx: usize, sample_rows: &[StringRecord]) -> bool {
    let mut seen_value = false;
    for row in sample_rows {
        let Some(cell) = row.get(idx) else {
            continue;
        };
        let cell = cell.trim();
        if cell.is_empty() {
            continue;
        }
        if cell.parse::<f64>().is_err() {
            return false;
        }
        seen_value = true;
    }
    seen_value
}
