//! Decode command: filename decoding report

use std::path::PathBuf;
use std::time::Instant;

use colored::Colorize;

use super::shared::{self, RunStats, discover_measurement_files, display_name};
use crate::app::models::ParsedFilename;
use crate::app::services::filename_decoder::decode;
use crate::cli::args::{DecodeArgs, ReportFormat};
use crate::Result;

/// Run the decode command
///
/// Decodes every measurement filename in the directory and prints the
/// recovered fields. Debugging aid for naming-convention issues: a file
/// the process command would skip shows up here with absent fields.
pub async fn run_decode(args: DecodeArgs) -> Result<RunStats> {
    let start = Instant::now();

    args.validate()?;
    shared::setup_logging(args.get_log_level(), false)?;

    let input_dir = args.input_dir.clone().unwrap_or_else(|| PathBuf::from("."));
    let files = discover_measurement_files(&input_dir)?;

    let mut stats = RunStats {
        files_found: files.len(),
        ..Default::default()
    };

    if files.is_empty() {
        println!("No CSV or TXT files found in {}", input_dir.display());
        stats.processing_time = start.elapsed();
        return Ok(stats);
    }

    let decoded: Vec<(String, ParsedFilename)> = files
        .iter()
        .map(|path| {
            let name = display_name(path);
            let parsed = decode(&name);
            (name, parsed)
        })
        .collect();
    stats.files_processed = decoded.len();

    match args.format {
        ReportFormat::Human => print_human(&decoded),
        ReportFormat::Json => print_json(&decoded)?,
    }

    stats.processing_time = start.elapsed();
    Ok(stats)
}

fn field_or_dash<T: std::fmt::Display>(value: &Option<T>) -> String {
    value
        .as_ref()
        .map(|v| v.to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn print_human(decoded: &[(String, ParsedFilename)]) {
    for (name, parsed) in decoded {
        if parsed.is_empty() {
            println!("{}: {}", name, "nothing decoded".yellow());
            continue;
        }
        println!(
            "{}: value={} unit={} channel={} range={}",
            name,
            field_or_dash(&parsed.value),
            field_or_dash(&parsed.unit),
            field_or_dash(&parsed.channel),
            parsed.range_display()
        );
    }
}

fn print_json(decoded: &[(String, ParsedFilename)]) -> Result<()> {
    let map: std::collections::BTreeMap<&str, &ParsedFilename> = decoded
        .iter()
        .map(|(name, parsed)| (name.as_str(), parsed))
        .collect();
    println!("{}", serde_json::to_string_pretty(&map)?);
    Ok(())
}
