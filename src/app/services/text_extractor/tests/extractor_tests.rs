//! Tests for layout-priority sample extraction

use super::{flat_labeled_content, flat_plain_content, hierarchical_content, noise_content};
use crate::app::services::text_extractor::{extract, extract_file};

#[test]
fn test_hierarchical_extraction_with_label_filter() {
    let data = extract(hierarchical_content(), Some("Voltage"), None);

    assert_eq!(data.len(), 2);
    assert_eq!(data[&1], vec![-2.498169, -2.498170]);
    assert_eq!(data[&2], vec![2.501833]);
}

#[test]
fn test_hierarchical_extraction_without_filter_takes_all_labels() {
    let data = extract(hierarchical_content(), None, None);

    // Voltage and MeanVoltage samples interleave on each channel
    assert_eq!(data[&1].len(), 4);
    assert_eq!(data[&2].len(), 2);
}

#[test]
fn test_hierarchical_owns_file_even_when_filter_empties_result() {
    // Structural matches claim the file for layout 1; a label matching
    // nothing yields an empty mapping instead of falling through to the
    // flat layouts
    let mixed = format!("{}{}", hierarchical_content(), flat_plain_content());
    let data = extract(&mixed, Some("NoSuchLabel"), Some(1));
    assert!(data.is_empty());
}

#[test]
fn test_flat_labeled_extraction() {
    let data = extract(flat_labeled_content(), Some("CurVoltage"), None);

    assert_eq!(data.len(), 2);
    assert_eq!(data[&1], vec![10.011883, 10.011790]);
    assert_eq!(data[&2], vec![10.012001]);
}

#[test]
fn test_flat_labeled_filter_mismatch_falls_through() {
    // Layout 2 only claims the file when it produced samples, so a
    // non-matching label lets the label-less layout have a try. The
    // labeled lines also fit the label-less shape, so they come back
    // unlabeled on the fallback channel.
    let data = extract(flat_labeled_content(), Some("OtherLabel"), Some(7));

    assert_eq!(data.len(), 1);
    assert_eq!(data[&7], vec![10.011883, 10.012001, 10.011790]);
}

#[test]
fn test_flat_plain_uses_filename_channel() {
    let data = extract(flat_plain_content(), None, Some(3));

    assert_eq!(data.len(), 1);
    assert_eq!(data[&3], vec![0.686400, 0.686100, 0.686350]);
}

#[test]
fn test_flat_plain_defaults_to_channel_one() {
    let data = extract(flat_plain_content(), None, None);

    assert_eq!(data.len(), 1);
    assert_eq!(data[&1], vec![0.686400, 0.686100, 0.686350]);
}

#[test]
fn test_unrecognized_content_yields_empty_mapping() {
    assert!(extract(noise_content(), None, None).is_empty());
    assert!(extract("", None, Some(2)).is_empty());
}

#[test]
fn test_extraction_is_idempotent() {
    let first = extract(hierarchical_content(), Some("Voltage"), None);
    let second = extract(hierarchical_content(), Some("Voltage"), None);
    assert_eq!(first, second);
}

#[test]
fn test_disjoint_label_extractions_partition_the_file() {
    let voltage = extract(hierarchical_content(), Some("Voltage"), None);
    let mean = extract(hierarchical_content(), Some("MeanVoltage"), None);
    let all = extract(hierarchical_content(), None, None);

    let selected: usize = voltage.values().chain(mean.values()).map(Vec::len).sum();
    let total: usize = all.values().map(Vec::len).sum();
    assert_eq!(selected, total);
}

#[test]
fn test_extract_file_reads_from_disk() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let path = temp_dir.path().join("VN1630A_0V7_R10V.txt");
    std::fs::write(&path, flat_plain_content()).unwrap();

    let data = extract_file(&path, None, None).unwrap();
    assert_eq!(data[&1].len(), 3);
}

#[test]
fn test_extract_file_missing_path_is_an_error() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    assert!(extract_file(&temp_dir.path().join("gone.txt"), None, None).is_err());
}
