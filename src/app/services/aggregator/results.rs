//! Result rows and tolerance windows

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::stats::SampleStats;
use crate::app::models::IoType;
use crate::constants::RANGE_NOT_AVAILABLE;
use crate::{Error, Result};

/// Verdict of a tolerance check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CheckOutcome {
    #[serde(rename = "PASS")]
    Pass,
    #[serde(rename = "FAIL")]
    Fail,
}

impl CheckOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::Fail => "FAIL",
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }
}

impl std::fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One reference/tolerance window, keyed by test value, range setting
/// and I/O type
///
/// `range_setting` must equal the filename-derived range (absent means
/// the filename carried none). `range` optionally replaces the displayed
/// range setting, for equipment whose filenames encode a coarser range
/// than the test plan uses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToleranceWindow {
    pub test_value: f64,
    #[serde(default)]
    pub range_setting: Option<String>,
    pub io_type: IoType,
    pub reference: f64,
    pub tolerance: f64,
    #[serde(default, rename = "range")]
    pub range_override: Option<String>,
}

/// The tolerance windows configured for a processing run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToleranceSet {
    windows: Vec<ToleranceWindow>,
}

impl ToleranceSet {
    pub fn new(windows: Vec<ToleranceWindow>) -> Self {
        Self { windows }
    }

    /// Load a window list from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::io(format!("Failed to read tolerance file {}", path.display()), e))?;
        let set: Self = serde_json::from_str(&content).map_err(|e| Error::Json {
            message: format!("Invalid tolerance file {}", path.display()),
            source: e,
        })?;
        debug!("Loaded {} tolerance window(s) from {}", set.windows.len(), path.display());
        Ok(set)
    }

    /// Find the window matching a row's key, if any
    pub fn lookup(
        &self,
        test_value: f64,
        range_setting: Option<&str>,
        io_type: IoType,
    ) -> Option<&ToleranceWindow> {
        self.windows.iter().find(|w| {
            w.test_value == test_value
                && w.range_setting.as_deref() == range_setting
                && w.io_type == io_type
        })
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }
}

/// One row of the result table: a channel's samples for one test point
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultRow {
    pub channel: u32,
    pub io_type: IoType,
    /// Display string, [`RANGE_NOT_AVAILABLE`] when the filename carried
    /// no range token and no window overrides it
    pub range_setting: String,
    pub test_value: f64,
    pub reference: Option<f64>,
    pub tolerance: Option<f64>,
    pub lower_limit: Option<f64>,
    pub upper_limit: Option<f64>,
    #[serde(flatten)]
    pub stats: SampleStats,
    pub mean_check: Option<CheckOutcome>,
    pub mean_two_sigma_check: Option<CheckOutcome>,
}

impl ResultRow {
    /// Build an unchecked row; tolerance columns stay absent until
    /// [`apply_tolerance`](Self::apply_tolerance) fills them in
    pub fn new(
        channel: u32,
        io_type: IoType,
        range_setting: Option<&str>,
        test_value: f64,
        stats: SampleStats,
    ) -> Self {
        Self {
            channel,
            io_type,
            range_setting: range_setting.unwrap_or(RANGE_NOT_AVAILABLE).to_string(),
            test_value,
            reference: None,
            tolerance: None,
            lower_limit: None,
            upper_limit: None,
            stats,
            mean_check: None,
            mean_two_sigma_check: None,
        }
    }

    /// Fill in limits and pass/fail verdicts from a matching window
    ///
    /// The mean check passes when the mean lies inside
    /// [reference - tolerance, reference + tolerance]. The two-sigma
    /// check additionally requires the whole mean +/- 2 sigma band
    /// inside the limits; with fewer than two samples sigma is undefined
    /// and the check fails.
    pub fn apply_tolerance(&mut self, window: &ToleranceWindow) {
        let lower = window.reference - window.tolerance;
        let upper = window.reference + window.tolerance;

        self.reference = Some(window.reference);
        self.tolerance = Some(window.tolerance);
        self.lower_limit = Some(lower);
        self.upper_limit = Some(upper);

        if let Some(range) = &window.range_override {
            self.range_setting = range.clone();
        }

        self.mean_check = Some(if lower <= self.stats.mean && self.stats.mean <= upper {
            CheckOutcome::Pass
        } else {
            CheckOutcome::Fail
        });

        self.mean_two_sigma_check = Some(match self.stats.std_dev {
            Some(sigma)
                if lower <= self.stats.mean - 2.0 * sigma
                    && self.stats.mean + 2.0 * sigma <= upper =>
            {
                CheckOutcome::Pass
            }
            _ => CheckOutcome::Fail,
        });
    }

    /// True when any check was performed and failed
    pub fn has_failure(&self) -> bool {
        [self.mean_check, self.mean_two_sigma_check]
            .iter()
            .flatten()
            .any(|check| !check.is_pass())
    }
}

/// Sort the result table by channel, I/O type, range and test value
pub fn sort_rows(rows: &mut [ResultRow]) {
    rows.sort_by(|a, b| {
        a.channel
            .cmp(&b.channel)
            .then_with(|| a.io_type.as_str().cmp(b.io_type.as_str()))
            .then_with(|| a.range_setting.cmp(&b.range_setting))
            .then_with(|| a.test_value.total_cmp(&b.test_value))
    });
}
