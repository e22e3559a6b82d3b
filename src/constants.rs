//! Application constants for the bench processor
//!
//! This module contains configuration constants, default values,
//! and mappings used throughout the bench processor application.

// =============================================================================
// File Discovery
// =============================================================================

/// File extension for Output-type device readings (tabular exports)
pub const OUTPUT_FILE_EXTENSION: &str = "csv";

/// File extension for Input-type device readings (free-text logs)
pub const INPUT_FILE_EXTENSION: &str = "txt";

// =============================================================================
// Filename Decoding
// =============================================================================

/// Unit label reported when only the generic `_<num>_` pattern matched
pub const UNKNOWN_UNIT: &str = "unknown";

/// Fallback unit when no file in a directory yields a usable one
pub const DEFAULT_UNIT: &str = "V";

/// Range-setting units accepted after the `_R` prefix
pub const RANGE_UNITS: &[&str] = &["V", "mV", "mA", "uA", "A", "ohm", "Ohm", "kOhm", "MOhm"];

// =============================================================================
// Text Extraction
// =============================================================================

/// Line window sampled when scanning a text file for measurement-type
/// labels. Labels appearing only after this window are missed unless the
/// full-scan option is enabled.
pub const SCAN_LINE_LIMIT: usize = 500;

/// Channel assigned to flat label-less logs when the filename carries no
/// channel token. Single-channel equipment exports rely on this default.
pub const DEFAULT_CHANNEL: u32 = 1;

// =============================================================================
// CSV Ingest
// =============================================================================

/// Header keywords that identify the measurement column in CSV exports,
/// checked before falling back to the last numeric column
pub const MEASUREMENT_COLUMN_KEYWORDS: &[&str] = &[
    "voltage",
    "vdc",
    "resistance",
    "ohm",
    "current",
    "adc",
    "measurement",
];

/// Number of data rows sampled when probing columns for numeric content
pub const COLUMN_PROBE_ROWS: usize = 20;

// =============================================================================
// Processing Defaults
// =============================================================================

/// Placeholder shown when a file carries no range setting
pub const RANGE_NOT_AVAILABLE: &str = "N/A";

/// Results file suffix appended to the input directory name
pub const RESULTS_FILE_SUFFIX: &str = "_results";

// =============================================================================
// Report Palette
// =============================================================================

/// Per-channel colors for report output, in channel order (wraps around).
/// Injected through [`crate::config::Config`] rather than read globally.
pub const CHANNEL_COLORS: &[&str] = &[
    "#4472C4", // Muted blue
    "#C45B5B", // Muted red
    "#70AD47", // Muted green
    "#ED7D31", // Muted orange
    "#7B7B7B", // Gray
    "#9E5ECE", // Muted purple
    "#43A6A2", // Muted teal
    "#C4A24E", // Muted gold
    "#5B9BC4", // Steel blue
    "#A85B5B", // Dusty rose
    "#5BAF7B", // Sea green
    "#C47B4E", // Terracotta
    "#6B6BAF", // Muted indigo
    "#8B6BAF", // Muted violet
    "#4EAFAF", // Turquoise
    "#AF8B4E", // Bronze
];

// =============================================================================
// Helper Functions
// =============================================================================

/// Check if a filename extension marks an Output-type (CSV) reading
pub fn is_output_file(path: &std::path::Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(OUTPUT_FILE_EXTENSION))
}

/// Check if a filename extension marks an Input-type (TXT) reading
pub fn is_input_file(path: &std::path::Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(INPUT_FILE_EXTENSION))
}
