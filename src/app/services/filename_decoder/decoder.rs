//! Filename decoding and directory-level unit resolution

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, trace};

use super::patterns::VALUE_PATTERNS;
use crate::app::models::ParsedFilename;
use crate::constants::{DEFAULT_UNIT, RANGE_UNITS, UNKNOWN_UNIT};

/// Channel token, e.g. `_CH1`, `_ch03`
static CHANNEL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)_CH(\d+)").unwrap());

/// Range-setting token, e.g. `_R10V`, `_R100ohm`. The unit alternation is
/// built from the supported range units so the accepted set stays in one
/// place.
static RANGE: LazyLock<Regex> = LazyLock::new(|| {
    let units = RANGE_UNITS.join("|");
    Regex::new(&format!(r"(?i)_R(\d+(?:\.\d+)?)({units})(?:_|$)")).unwrap()
});

/// Decode test metadata from a measurement file name
///
/// Extracts the signed test value, unit, channel number and range setting
/// from the file's base name. All fields are independently optional;
/// absence means "undeterminable", never an error. Examples:
///
/// - `VT2816A_m2V5_R10V_CH3.csv` -> (-2.5, "V", 3, "10V")
/// - `VIO2004_3mA_R10mA_CH1.txt` -> (3.0, "mA", 1, "10mA")
/// - `VT2816A_10V_R10V_1000x.txt` -> (10.0, "V", none, "10V") - a
///   multi-channel file whose channels come from the content
pub fn decode(filename: &str) -> ParsedFilename {
    let name = Path::new(filename)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(filename);

    let channel = CHANNEL
        .captures(name)
        .and_then(|caps| caps[1].parse::<u32>().ok());

    let range_setting = RANGE
        .captures(name)
        .map(|caps| format!("{}{}", &caps[1], &caps[2]));

    let (value, unit) = decode_value(name);

    let parsed = ParsedFilename {
        value,
        unit,
        channel,
        range_setting,
    };
    trace!("Decoded '{}': {:?}", filename, parsed);
    parsed
}

/// Run the ordered value-pattern table against a file stem
///
/// The first pattern that matches and parses wins; a token that matches
/// structurally but fails to parse falls through to the next family.
fn decode_value(name: &str) -> (Option<f64>, Option<String>) {
    for pattern in VALUE_PATTERNS {
        if let Some(token) = pattern.first_match(name) {
            if let Some(value) = (pattern.parse)(token) {
                return (Some(value), Some(pattern.unit.to_string()));
            }
            trace!(
                "Token '{}' matched the {} pattern but failed to parse",
                token, pattern.unit
            );
        }
    }
    (None, None)
}

/// Determine the measurement unit shared by a directory of files
///
/// A batch of files is assumed to share one measurement unit, so the
/// first decodable, non-"unknown" unit across the directory's CSV and
/// TXT files wins. Falls back to volts when nothing resolves.
pub fn unit_from_directory(input_dir: &Path) -> String {
    for file in measurement_files(input_dir) {
        if let Some(name) = file.file_name().and_then(|n| n.to_str()) {
            let parsed = decode(name);
            if let Some(unit) = parsed.unit {
                if unit != UNKNOWN_UNIT {
                    debug!("Unit '{}' derived from {}", unit, file.display());
                    return unit;
                }
            }
        }
    }

    debug!(
        "No unit derivable from {}, defaulting to {}",
        input_dir.display(),
        DEFAULT_UNIT
    );
    DEFAULT_UNIT.to_string()
}

/// All CSV and TXT files in a directory, CSV first, sorted for a
/// deterministic scan order
fn measurement_files(input_dir: &Path) -> Vec<std::path::PathBuf> {
    let mut files = Vec::new();
    for extension in ["csv", "txt"] {
        let pattern = input_dir.join(format!("*.{extension}")).display().to_string();
        let mut batch: Vec<_> = match glob::glob(&pattern) {
            Ok(paths) => paths.filter_map(|p| p.ok()).collect(),
            Err(_) => Vec::new(),
        };
        batch.sort();
        files.extend(batch);
    }
    files
}
