//! Configuration for bench processing runs.
//!
//! Provides the processing configuration structure with builder-style
//! customization, plus the injected report style. Style constants live
//! here as an immutable value handed to the report layer rather than as
//! process-wide state.

use crate::constants::{CHANNEL_COLORS, SCAN_LINE_LIMIT};
use serde::{Deserialize, Serialize};

/// Global configuration for bench processing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Number of worker tasks for concurrent file processing
    pub workers: usize,

    /// Line window for the measurement-type scanner
    pub scan_line_limit: usize,

    /// Scan whole files for measurement types instead of the bounded window
    pub full_scan: bool,

    /// Unit override; when `None` the unit is derived from filenames
    pub unit_override: Option<String>,

    /// Report styling handed to the output layer
    pub style: ReportStyle,
}

/// Immutable styling values for report output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportStyle {
    /// Per-channel color cycle (hex strings)
    pub channel_colors: Vec<String>,
}

impl Default for ReportStyle {
    fn default() -> Self {
        Self {
            channel_colors: CHANNEL_COLORS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl ReportStyle {
    /// Color for a channel number, cycling through the palette
    pub fn color_for_channel(&self, channel: u32) -> &str {
        let index = (channel.max(1) as usize - 1) % self.channel_colors.len();
        &self.channel_colors[index]
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workers: num_cpus::get(),
            scan_line_limit: SCAN_LINE_LIMIT,
            full_scan: false,
            unit_override: None,
            style: ReportStyle::default(),
        }
    }
}

impl Config {
    /// Create configuration with a custom worker count
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Create configuration with a custom scan line window
    pub fn with_scan_line_limit(mut self, limit: usize) -> Self {
        self.scan_line_limit = limit;
        self
    }

    /// Enable full-file scanning for measurement types
    pub fn with_full_scan(mut self) -> Self {
        self.full_scan = true;
        self
    }

    /// Force the measurement unit instead of deriving it from filenames
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit_override = Some(unit.into());
        self
    }

    /// Effective scan window: `None` means scan the whole file
    pub fn scan_window(&self) -> Option<usize> {
        if self.full_scan {
            None
        } else {
            Some(self.scan_line_limit)
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> crate::Result<()> {
        if self.workers == 0 {
            return Err(crate::Error::configuration(
                "Number of workers must be greater than 0".to_string(),
            ));
        }
        if !self.full_scan && self.scan_line_limit == 0 {
            return Err(crate::Error::configuration(
                "Scan line limit must be greater than 0 unless full scan is enabled".to_string(),
            ));
        }
        Ok(())
    }
}
