//! Text measurement extractor for free-text instrument logs
//!
//! Input-type equipment writes TXT logs in several vendor dialects with
//! no declared schema. Four layouts are known:
//!
//! 1. Hierarchical (VIO1008 style):
//!    `|  Voltage_Ch01       -2.498169   V   ...`
//! 2. Flat with channel and label (VT2816A style):
//!    `66.001210   VT2816_1_Ch1::CurVoltage    10.011883`
//! 3. Flat with channel and label (VT2516A style) - same shape as 2
//!    with a different label vocabulary
//! 4. Flat without channel (VN1630A style):
//!    `15.001821   VN1600_1::AIN   0.686400` - the channel comes from
//!    the filename
//!
//! Detection is heuristic and ordered: the extractor tries each layout's
//! line shape in priority order and the first layout that claims the
//! file wins. Files that log more than one measurement type per channel
//! (e.g. `Voltage` and `MeanVoltage`) are enumerated first by the
//! [`scanner`] so the caller can choose one label before extraction.
//!
//! ## Components
//!
//! - [`layouts`] - the line-shape expressions and per-line match types
//! - [`scanner`] - bounded measurement-type label enumeration
//! - [`extractor`] - the layout-priority extraction state machine

pub mod extractor;
pub mod layouts;
pub mod scanner;

#[cfg(test)]
pub mod tests;

// Re-export main entry points for easy access
pub use extractor::{extract, extract_file};
pub use scanner::{scan_file, scan_measurement_types};
