//! Layout-priority extraction of per-channel samples

use std::path::Path;

use tracing::debug;

use super::layouts::{flat_labeled_line, flat_plain_value, hierarchical_line};
use crate::app::models::ChannelMeasurements;
use crate::constants::DEFAULT_CHANNEL;
use crate::{Error, Result};

/// Extract per-channel samples from an instrument log's content
///
/// The three layouts are mutually exclusive and tried in strict
/// priority order:
///
/// 1. Hierarchical - owns the file as soon as any line structurally
///    matches it, even when label filtering leaves the result empty.
///    With a `selected_label`, lines carrying other labels are
///    discarded; without one, all labels are accepted (the caller is
///    responsible for having resolved ambiguity via the scanner).
/// 2. Flat labeled - same label-filter rule; a non-empty result
///    short-circuits layout 3.
/// 3. Flat label-less - every matched value goes into one sequence
///    assigned to `channel_from_filename`, or channel 1 when the
///    filename carried no channel either (single-channel equipment
///    exports rely on this default).
///
/// No layout matching anything yields an empty mapping - "no data
/// extracted" is a caller decision, not an error. Lines matching no
/// layout are silently ignored; equipment logs intermix headers,
/// footers and diagnostics with data lines.
pub fn extract(
    content: &str,
    selected_label: Option<&str>,
    channel_from_filename: Option<u32>,
) -> ChannelMeasurements {
    let mut channel_data = ChannelMeasurements::new();

    // Layout 1: hierarchical
    let mut structural_matches = 0usize;
    for line in content.lines() {
        let Some(matched) = hierarchical_line(line) else {
            continue;
        };
        structural_matches += 1;

        if selected_label.is_some_and(|selected| matched.label != selected) {
            continue;
        }
        if let Some((channel, value)) = matched.sample() {
            channel_data.entry(channel).or_default().push(value);
        }
    }
    if structural_matches > 0 {
        debug!(
            "Hierarchical layout: {} line(s) matched, {} channel(s) kept",
            structural_matches,
            channel_data.len()
        );
        return channel_data;
    }

    // Layout 2: flat with channel and label
    for line in content.lines() {
        let Some(matched) = flat_labeled_line(line) else {
            continue;
        };
        if selected_label.is_some_and(|selected| matched.label != selected) {
            continue;
        }
        if let Some((channel, value)) = matched.sample() {
            channel_data.entry(channel).or_default().push(value);
        }
    }
    if !channel_data.is_empty() {
        debug!("Flat labeled layout: {} channel(s)", channel_data.len());
        return channel_data;
    }

    // Layout 3: flat without channel - channel identity comes from the
    // filename, defaulting to channel 1
    let values: Vec<f64> = content.lines().filter_map(flat_plain_value).collect();
    if !values.is_empty() {
        let channel = match channel_from_filename {
            Some(channel) => channel,
            None => {
                debug!(
                    "Flat label-less layout without filename channel, defaulting to channel {}",
                    DEFAULT_CHANNEL
                );
                DEFAULT_CHANNEL
            }
        };
        debug!(
            "Flat label-less layout: {} sample(s) on channel {}",
            values.len(),
            channel
        );
        channel_data.insert(channel, values);
    }

    channel_data
}

/// Extract per-channel samples from a log file on disk
///
/// I/O failures surface as recoverable per-file errors; invalid UTF-8
/// bytes are replaced rather than rejected.
pub fn extract_file(
    path: &Path,
    selected_label: Option<&str>,
    channel_from_filename: Option<u32>,
) -> Result<ChannelMeasurements> {
    let bytes = std::fs::read(path)
        .map_err(|e| Error::io(format!("Failed to read {}", path.display()), e))?;
    let content = String::from_utf8_lossy(&bytes);

    Ok(extract(&content, selected_label, channel_from_filename))
}
