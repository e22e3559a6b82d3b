//! Measurement-type label enumeration
//!
//! Some instrument logs record more than one derived metric per channel
//! (e.g. `Voltage` and `MeanVoltage`). Extraction is only deterministic
//! once the caller has chosen one, so a scanning pass enumerates the
//! distinct labels a file exposes before any extraction happens.

use std::collections::BTreeSet;
use std::path::Path;

use tracing::debug;

use super::layouts::{flat_label, hierarchical_label};
use crate::{Error, Result};

/// Enumerate the distinct measurement-type labels in a log's content
///
/// Two label-bearing layouts are recognized and tried in order; the
/// first one producing any labels wins. An empty set means the file
/// uses the label-less layout and needs no type selection.
///
/// `line_window` bounds the scan to a prefix of the file for
/// performance; this is heuristic sampling, not a completeness
/// guarantee - a label first appearing after the window is missed.
/// Pass `None` to scan the whole file.
pub fn scan_measurement_types(content: &str, line_window: Option<usize>) -> BTreeSet<String> {
    let window = line_window.unwrap_or(usize::MAX);

    let mut labels: BTreeSet<String> = content
        .lines()
        .take(window)
        .filter_map(hierarchical_label)
        .map(|label| label.to_string())
        .collect();

    if !labels.is_empty() {
        return labels;
    }

    labels = content
        .lines()
        .take(window)
        .filter_map(flat_label)
        .map(|label| label.to_string())
        .collect();

    labels
}

/// Scan a log file on disk for measurement-type labels
///
/// I/O failures surface as recoverable per-file errors; invalid UTF-8
/// bytes are replaced rather than rejected since equipment logs mix
/// encodings freely.
pub fn scan_file(path: &Path, line_window: Option<usize>) -> Result<BTreeSet<String>> {
    let bytes = std::fs::read(path)
        .map_err(|e| Error::io(format!("Failed to read {}", path.display()), e))?;
    let content = String::from_utf8_lossy(&bytes);

    let labels = scan_measurement_types(&content, line_window);
    debug!(
        "Scanned {}: {} measurement type(s) {:?}",
        path.display(),
        labels.len(),
        labels
    );
    Ok(labels)
}
