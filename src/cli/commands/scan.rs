//! Scan command: measurement-type label listing for text logs

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::time::Instant;

use colored::Colorize;
use tracing::warn;

use super::shared::{self, RunStats, discover_text_files, display_name};
use crate::app::models::MeasurementTypeCatalog;
use crate::app::services::text_extractor::scan_file;
use crate::cli::args::{ReportFormat, ScanArgs};
use crate::config::Config;
use crate::Result;

/// Run the scan command
///
/// Lists the measurement-type labels each text log exposes, so the user
/// can build `--selections` entries for the ambiguous ones before a
/// processing run.
pub async fn run_scan(args: ScanArgs) -> Result<RunStats> {
    let start = Instant::now();

    args.validate()?;
    shared::setup_logging(args.get_log_level(), false)?;

    let mut config = Config::default();
    if args.full_scan {
        config = config.with_full_scan();
    }

    let input_dir = args.input_dir.clone().unwrap_or_else(|| PathBuf::from("."));
    let files = discover_text_files(&input_dir)?;

    let mut stats = RunStats {
        files_found: files.len(),
        ..Default::default()
    };

    if files.is_empty() {
        println!("No TXT files found in {}", input_dir.display());
        stats.processing_time = start.elapsed();
        return Ok(stats);
    }

    let mut catalog = MeasurementTypeCatalog::new();
    for path in files {
        match scan_file(&path, config.scan_window()) {
            Ok(labels) => {
                catalog.insert(path, labels);
                stats.files_processed += 1;
            }
            Err(error) => {
                warn!("Skipping {}: {}", path.display(), error);
                stats.skip(display_name(&path), error.to_string());
            }
        }
    }

    match args.format {
        ReportFormat::Human => print_human(&catalog),
        ReportFormat::Json => print_json(&catalog)?,
    }

    stats.processing_time = start.elapsed();
    Ok(stats)
}

fn print_human(catalog: &MeasurementTypeCatalog) {
    for (path, labels) in catalog {
        let name = display_name(path);
        if labels.is_empty() {
            println!("{}: {}", name, "no labels (no selection needed)".dimmed());
        } else if labels.len() == 1 {
            let label = labels.iter().next().map(String::as_str).unwrap_or("");
            println!("{}: {}", name, label);
        } else {
            let joined: Vec<&str> = labels.iter().map(String::as_str).collect();
            println!(
                "{}: {} {}",
                name,
                joined.join(", "),
                "(selection required)".yellow()
            );
        }
    }
}

fn print_json(catalog: &MeasurementTypeCatalog) -> Result<()> {
    let map: std::collections::BTreeMap<String, &BTreeSet<String>> = catalog
        .iter()
        .map(|(path, labels)| (display_name(path), labels))
        .collect();
    println!("{}", serde_json::to_string_pretty(&map)?);
    Ok(())
}
