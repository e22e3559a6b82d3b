//! Shared fixtures for aggregation testing


use crate::app::models::IoType;
use crate::app::services::aggregator::{ResultRow, SampleStats, ToleranceWindow};

/// A row with tightly clustered samples around 10 V
pub fn sample_row(channel: u32, io_type: IoType) -> ResultRow {
    let stats = SampleStats::from_samples(&[10.011883, 10.012001, 10.011790]).unwrap();
    ResultRow::new(channel, io_type, Some("10V"), 10.0, stats)
}

/// A window that the clustered 10 V samples pass comfortably
pub fn wide_window() -> ToleranceWindow {
    ToleranceWindow {
        test_value: 10.0,
        range_setting: Some("10V".to_string()),
        io_type: IoType::Output,
        reference: 10.0,
        tolerance: 0.05,
        range_override: None,
    }
}
