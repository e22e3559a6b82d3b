//! Core data model for bench measurement processing
//!
//! These structures are created fresh per source file, never mutated after
//! construction, and discarded once the aggregation layer has copied out
//! the samples it needs.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

/// Device role inferred from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum IoType {
    /// Equipment driving a value (CSV source)
    Output,
    /// Equipment reading a value (TXT source)
    Input,
}

impl IoType {
    /// Classify a file by its extension, `None` for anything else
    pub fn from_path(path: &Path) -> Option<Self> {
        if crate::constants::is_output_file(path) {
            Some(Self::Output)
        } else if crate::constants::is_input_file(path) {
            Some(Self::Input)
        } else {
            None
        }
    }

    /// Display label used in result tables
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Output => "Output",
            Self::Input => "Input",
        }
    }
}

impl std::fmt::Display for IoType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Test metadata recovered from an equipment-generated filename
///
/// All four fields are independently optional: absence means the field
/// could not be determined from the name, which is distinct from zero.
/// `value` carries its sign baked in from the magnitude+sign-prefix
/// encoding (`m` negative, `p` or absent positive).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ParsedFilename {
    /// Signed test value, e.g. -2.5 from `m2V5`
    pub value: Option<f64>,

    /// Unit label for the value ("V", "mA", "uA", "A", "Ohm" or "unknown")
    pub unit: Option<String>,

    /// Channel number from a `_CH<digits>` token
    pub channel: Option<u32>,

    /// Instrument range setting display string, e.g. "10V"
    pub range_setting: Option<String>,
}

impl ParsedFilename {
    /// True when the name yielded neither a value nor a channel
    pub fn is_empty(&self) -> bool {
        self.value.is_none()
            && self.unit.is_none()
            && self.channel.is_none()
            && self.range_setting.is_none()
    }

    /// Range setting display string, with the standard placeholder
    pub fn range_display(&self) -> &str {
        self.range_setting
            .as_deref()
            .unwrap_or(crate::constants::RANGE_NOT_AVAILABLE)
    }
}

/// Channel number -> ordered sequence of numeric samples
///
/// The text extractor's sole output artifact. Every sample in a channel's
/// sequence was parsed from a line whose channel tag (explicit or
/// filename-inherited) matches that channel. A BTreeMap keeps channel
/// iteration order deterministic for reporting.
pub type ChannelMeasurements = BTreeMap<u32, Vec<f64>>;

/// Distinct measurement-type labels found per file by the scanner
pub type MeasurementTypeCatalog = BTreeMap<std::path::PathBuf, BTreeSet<String>>;

/// Caller-supplied measurement-type choices, keyed by file path or bare
/// file name. Required before extraction when a file exposes more than
/// one label.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TypeSelections {
    selections: BTreeMap<String, String>,
}

impl TypeSelections {
    /// Build from a path/name -> label map
    pub fn new(selections: BTreeMap<String, String>) -> Self {
        Self { selections }
    }

    /// Look up the selection for a file, accepting either the full path
    /// or the bare file name as key
    pub fn for_file(&self, path: &Path) -> Option<&str> {
        if let Some(label) = self.selections.get(&path.display().to_string()) {
            return Some(label.as_str());
        }
        path.file_name()
            .and_then(|n| n.to_str())
            .and_then(|name| self.selections.get(name))
            .map(String::as_str)
    }

    /// True when no selections were supplied
    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }
}
