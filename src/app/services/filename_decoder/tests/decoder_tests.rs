//! Tests for filename decoding and directory unit resolution

use super::assert_decoded;
use crate::app::services::filename_decoder::{decode, unit_from_directory};

#[test]
fn test_negative_voltage_with_range_and_channel() {
    let parsed = decode("VT2816A_m2V5_R10V_CH3.csv");
    assert_decoded(&parsed, Some(-2.5), Some("V"), Some(3), Some("10V"));
}

#[test]
fn test_positive_voltage_without_channel() {
    // Multi-channel file: the channel is resolved later from content
    let parsed = decode("VT2816A_10V_R10V_1000x.txt");
    assert_decoded(&parsed, Some(10.0), Some("V"), None, Some("10V"));
}

#[test]
fn test_voltage_without_range_or_channel() {
    let parsed = decode("VT2516A_25V_1000x.txt");
    assert_decoded(&parsed, Some(25.0), Some("V"), None, None);
}

#[test]
fn test_explicit_positive_sign_prefix() {
    let parsed = decode("VT2816A_p7V5_R10V_CH2.csv");
    assert_decoded(&parsed, Some(7.5), Some("V"), Some(2), Some("10V"));
}

#[test]
fn test_zero_voltage() {
    let parsed = decode("VN1630A_0V7_CH1_100x.txt");
    assert_decoded(&parsed, Some(0.7), Some("V"), Some(1), None);
}

#[test]
fn test_milliamp_value() {
    let parsed = decode("VIO2004_3mA_R10mA_CH1.txt");
    assert_decoded(&parsed, Some(3.0), Some("mA"), Some(1), Some("10mA"));
}

#[test]
fn test_negative_milliamp_value() {
    let parsed = decode("VIO2004_m5mA_R10mA_CH4.csv");
    assert_decoded(&parsed, Some(-5.0), Some("mA"), Some(4), Some("10mA"));
}

#[test]
fn test_microamp_value() {
    let parsed = decode("VIO1008_100uA_R1mA_CH2.txt");
    assert_decoded(&parsed, Some(100.0), Some("uA"), Some(2), Some("1mA"));
}

#[test]
fn test_plain_amp_value() {
    let parsed = decode("LOAD_2A_R10A_CH1.csv");
    assert_decoded(&parsed, Some(2.0), Some("A"), Some(1), Some("10A"));
}

#[test]
fn test_ohm_value_variants() {
    let parsed = decode("RES_100ohms_CH1.csv");
    assert_decoded(&parsed, Some(100.0), Some("Ohm"), Some(1), None);

    let parsed = decode("RES_10_ohm_CH2.csv");
    assert_decoded(&parsed, Some(10.0), Some("Ohm"), Some(2), None);
}

#[test]
fn test_generic_fallback_reports_unknown_unit() {
    let parsed = decode("DEV_m5_run.txt");
    assert_decoded(&parsed, Some(-5.0), Some("unknown"), None, None);
}

#[test]
fn test_range_only_filename_yields_no_value() {
    // The voltage pattern must not consume the range-setting's number
    let parsed = decode("DEV_R10V_CH1.txt");
    assert_decoded(&parsed, None, None, Some(1), Some("10V"));
}

#[test]
fn test_kohm_range_unit() {
    let parsed = decode("RES_100ohm_R10kOhm_CH3.csv");
    assert_decoded(&parsed, Some(100.0), Some("Ohm"), Some(3), Some("10kOhm"));
}

#[test]
fn test_channel_token_is_case_insensitive() {
    assert_eq!(decode("DEV_10V_ch2.txt").channel, Some(2));
    assert_eq!(decode("DEV_10V_Ch2.txt").channel, Some(2));
}

#[test]
fn test_undecodable_name_yields_all_absent() {
    let parsed = decode("notes.txt");
    assert!(parsed.is_empty());
}

#[test]
fn test_malformed_token_falls_through_without_error() {
    // "M5" matches the milliamp pattern shape but its uppercase sign
    // prefix does not parse; no later family claims it either
    let parsed = decode("DEV_M5mA_CH1.txt");
    assert_decoded(&parsed, None, None, Some(1), None);
}

#[test]
fn test_decode_is_idempotent() {
    let first = decode("VT2816A_m2V5_R10V_CH3.csv");
    let second = decode("VT2816A_m2V5_R10V_CH3.csv");
    assert_eq!(first, second);
}

#[test]
fn test_unit_from_directory_prefers_first_resolvable() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("a_run_1_.txt"), "").unwrap();
    std::fs::write(temp_dir.path().join("b_3mA_CH1.txt"), "").unwrap();

    assert_eq!(unit_from_directory(temp_dir.path()), "mA");
}

#[test]
fn test_unit_from_directory_defaults_to_volts() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("unparseable.txt"), "").unwrap();

    assert_eq!(unit_from_directory(temp_dir.path()), "V");
}
