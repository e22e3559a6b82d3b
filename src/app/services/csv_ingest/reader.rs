//! Measurement extraction from CSV exports on disk

use std::path::Path;

use csv::StringRecord;
use tracing::debug;

use super::column_select::{select_measurement_column, ColumnSelection};
use crate::constants::COLUMN_PROBE_ROWS;
use crate::{Error, Result};

/// Read the measurement column's values from a CSV export
///
/// The whole file is parsed up front; a malformed record fails the file
/// (the batch layer treats that as a per-file skip). Blank and
/// non-numeric cells inside the chosen column are dropped rather than
/// failing, so an empty result means the file held no usable samples.
pub fn read_measurements(path: &Path) -> Result<Vec<f64>> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| Error::csv_parsing(&file_name, "Failed to open CSV file", Some(e)))?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| Error::csv_parsing(&file_name, "Failed to read CSV header", Some(e)))?
        .iter()
        .map(str::to_string)
        .collect();

    let records: Vec<StringRecord> = reader
        .records()
        .collect::<std::result::Result<_, _>>()
        .map_err(|e| Error::csv_parsing(&file_name, "Malformed CSV record", Some(e)))?;

    let probe = &records[..records.len().min(COLUMN_PROBE_ROWS)];
    let selection = select_measurement_column(&headers, probe);
    let Some(column) = selection.index() else {
        return Err(Error::csv_parsing(
            &file_name,
            "No numeric measurement column found",
            None,
        ));
    };

    debug!(
        "{}: measurement column {} ('{}') via {:?}",
        file_name,
        column,
        headers.get(column).map(String::as_str).unwrap_or(""),
        selection
    );

    let values: Vec<f64> = records
        .iter()
        .filter_map(|record| record.get(column))
        .filter(|cell| !cell.is_empty())
        .filter_map(|cell| cell.parse::<f64>().ok())
        .collect();

    Ok(values)
}
