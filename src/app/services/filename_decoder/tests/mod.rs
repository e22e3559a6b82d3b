//! Test utilities for filename decoder testing

mod decoder_tests;

use crate::app::models::ParsedFilename;

/// Assert all four decoded fields in one call
pub fn assert_decoded(
    parsed: &ParsedFilename,
    value: Option<f64>,
    unit: Option<&str>,
    channel: Option<u32>,
    range: Option<&str>,
) {
    assert_eq!(parsed.value, value, "value mismatch: {parsed:?}");
    assert_eq!(parsed.unit.as_deref(), unit, "unit mismatch: {parsed:?}");
    assert_eq!(parsed.channel, channel, "channel mismatch: {parsed:?}");
    assert_eq!(
        parsed.range_setting.as_deref(),
        range,
        "range mismatch: {parsed:?}"
    );
}
