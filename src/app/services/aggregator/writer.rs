//! Versioned results-file output

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use tracing::info;

use super::results::ResultRow;
use crate::{Error, Result};

static VERSION_SUFFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(.+)_v(\d+)$").unwrap());

/// Next free path for a results file, never overwriting an earlier run
///
/// `name.csv` stays as-is when free, otherwise `name_v2.csv`,
/// `name_v3.csv` and so on. A base name already carrying a `_v<n>`
/// suffix continues counting from n.
pub fn versioned_path(base: &Path) -> PathBuf {
    if !base.exists() {
        return base.to_path_buf();
    }

    let stem = base
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let extension = base
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();

    let (name, mut version) = match VERSION_SUFFIX.captures(&stem) {
        Some(caps) => (
            caps.get(1).unwrap().as_str().to_string(),
            caps.get(2).unwrap().as_str().parse::<u32>().unwrap_or(1),
        ),
        None => (stem, 1),
    };

    loop {
        version += 1;
        let candidate = base.with_file_name(format!("{name}_v{version}{extension}"));
        if !candidate.exists() {
            return candidate;
        }
    }
}

fn header_row(unit: &str, with_tolerance: bool) -> Vec<String> {
    let mut headers = vec![
        "Channel".to_string(),
        "I/O Type".to_string(),
        "Range Setting".to_string(),
        format!("Test Value [{unit}]"),
    ];
    if with_tolerance {
        headers.push(format!("Reference Value [{unit}]"));
        headers.push(format!("Tolerance [{unit}]"));
        headers.push(format!("Lower Limit [{unit}]"));
        headers.push(format!("Upper Limit [{unit}]"));
    }
    headers.push(format!("Mean [{unit}]"));
    headers.push(format!("StdDev [{unit}]"));
    headers.push(format!("Min [{unit}]"));
    headers.push(format!("Max [{unit}]"));
    headers.push("Samples".to_string());
    if with_tolerance {
        headers.push("Mean Check".to_string());
        headers.push("Mean±2σ Check".to_string());
    }
    headers
}

fn optional_number(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Write the result table as CSV to a versioned path derived from `base`
///
/// Tolerance columns appear only when at least one row carries a
/// reference value. Returns the path actually written.
pub fn write_csv_results(rows: &[ResultRow], unit: &str, base: &Path) -> Result<PathBuf> {
    let path = versioned_path(base);
    let with_tolerance = rows.iter().any(|row| row.reference.is_some());

    let mut writer = csv::Writer::from_path(&path)
        .map_err(|e| Error::results_writing(format!("Failed to create {}", path.display()), Box::new(e)))?;

    writer
        .write_record(header_row(unit, with_tolerance))
        .map_err(|e| Error::results_writing("Failed to write results header", Box::new(e)))?;

    for row in rows {
        let mut record = vec![
            row.channel.to_string(),
            row.io_type.to_string(),
            row.range_setting.clone(),
            row.test_value.to_string(),
        ];
        if with_tolerance {
            record.push(optional_number(row.reference));
            record.push(optional_number(row.tolerance));
            record.push(optional_number(row.lower_limit));
            record.push(optional_number(row.upper_limit));
        }
        record.push(row.stats.mean.to_string());
        record.push(optional_number(row.stats.std_dev));
        record.push(row.stats.min.to_string());
        record.push(row.stats.max.to_string());
        record.push(row.stats.count.to_string());
        if with_tolerance {
            record.push(
                row.mean_check
                    .map(|c| c.to_string())
                    .unwrap_or_default(),
            );
            record.push(
                row.mean_two_sigma_check
                    .map(|c| c.to_string())
                    .unwrap_or_default(),
            );
        }

        writer
            .write_record(&record)
            .map_err(|e| Error::results_writing("Failed to write result row", Box::new(e)))?;
    }

    writer
        .flush()
        .map_err(|e| Error::results_writing("Failed to flush results file", Box::new(e)))?;

    info!("Wrote {} result row(s) to {}", rows.len(), path.display());
    Ok(path)
}

#[derive(Serialize)]
struct JsonReport<'a> {
    generated: String,
    unit: &'a str,
    results: &'a [ResultRow],
}

/// Write the result table as JSON to a versioned path derived from `base`
pub fn write_json_results(rows: &[ResultRow], unit: &str, base: &Path) -> Result<PathBuf> {
    let path = versioned_path(base);
    let report = JsonReport {
        generated: chrono::Local::now().to_rfc3339(),
        unit,
        results: rows,
    };

    let content = serde_json::to_string_pretty(&report)?;
    std::fs::write(&path, content)
        .map_err(|e| Error::io(format!("Failed to write {}", path.display()), e))?;

    info!("Wrote {} result row(s) to {}", rows.len(), path.display());
    Ok(path)
}
