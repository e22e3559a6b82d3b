//! Process command: measurement directory to results table

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use colored::Colorize;
use futures::{StreamExt, stream};
use tracing::{debug, info, warn};

use super::shared::{
    self, RunStats, create_progress_bar, discover_measurement_files, display_name,
    is_critical_error,
};
use crate::app::models::{IoType, ParsedFilename, TypeSelections};
use crate::app::services::aggregator::{
    ResultRow, SampleStats, ToleranceSet, sort_rows, write_csv_results, write_json_results,
};
use crate::app::services::csv_ingest::read_measurements;
use crate::app::services::filename_decoder::{decode, unit_from_directory};
use crate::app::services::text_extractor::{extract_file, scan_file};
use crate::cli::args::{OutputFormat, ProcessArgs};
use crate::config::Config;
use crate::constants::RESULTS_FILE_SUFFIX;
use crate::{Error, Result};

/// One file's processing plan, settled before the concurrent phase
struct FileTask {
    path: PathBuf,
    io_type: IoType,
    parsed: ParsedFilename,
    selected_label: Option<String>,
}

/// Run the full processing pipeline
pub async fn run_process(args: ProcessArgs) -> Result<RunStats> {
    let start = Instant::now();

    args.validate()?;
    shared::setup_logging(args.get_log_level(), args.quiet)?;

    let mut config = Config::default();
    if let Some(workers) = args.workers {
        config = config.with_workers(workers);
    }
    if args.full_scan {
        config = config.with_full_scan();
    }
    if let Some(unit) = &args.unit {
        config = config.with_unit(unit);
    }
    config.validate()?;

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

    let unit = match &config.unit_override {
        Some(unit) => unit.clone(),
        None => unit_from_directory(&input_dir),
    };
    info!("Processing {} file(s), unit [{}]", files.len(), unit);

    let tolerances = match &args.tolerances {
        Some(path) => ToleranceSet::from_json_file(path)?,
        None => ToleranceSet::default(),
    };
    let selections = load_selections(args.selections.as_deref())?;

    let tasks = plan_tasks(files, &args, &config, &selections, &mut stats);
    let tolerances = Arc::new(tolerances);

    let progress = args
        .show_progress()
        .then(|| create_progress_bar(tasks.len() as u64, "Processing files"));

    let outcomes: Vec<(String, Result<Vec<ResultRow>>)> = stream::iter(tasks)
        .map(|task| {
            let tolerances = Arc::clone(&tolerances);
            let progress = progress.clone();
            async move {
                let name = display_name(&task.path);
                let result = tokio::task::spawn_blocking(move || process_file(task, &tolerances))
                    .await
                    .unwrap_or_else(|e| {
                        Err(Error::processing_interrupted(format!(
                            "Worker task failed: {e}"
                        )))
                    });
                if let Some(progress) = &progress {
                    progress.inc(1);
                }
                (name, result)
            }
        })
        .buffer_unordered(config.workers)
        .collect()
        .await;

    if let Some(progress) = progress {
        progress.finish_and_clear();
    }

    let mut rows: Vec<ResultRow> = Vec::new();
    for (name, outcome) in outcomes {
        match outcome {
            Ok(file_rows) => {
                stats.files_processed += 1;
                rows.extend(file_rows);
            }
            Err(error) if is_critical_error(&error) => return Err(error),
            Err(error) => {
                warn!("Skipping {}: {}", name, error);
                stats.skip(name, error.to_string());
            }
        }
    }

    if rows.is_empty() {
        println!("No valid results to save");
        stats.processing_time = start.elapsed();
        report_summary(&stats, &args);
        return Ok(stats);
    }

    sort_rows(&mut rows);
    stats.rows_produced = rows.len();
    for row in &rows {
        for check in [row.mean_check, row.mean_two_sigma_check].into_iter().flatten() {
            if check.is_pass() {
                stats.checks_passed += 1;
            } else {
                stats.checks_failed += 1;
            }
        }
    }

    let base = results_base_path(&args, &input_dir);
    let written = match args.output_format {
        OutputFormat::Csv => write_csv_results(&rows, &unit, &base)?,
        OutputFormat::Json => write_json_results(&rows, &unit, &base)?,
    };
    stats.output_path = Some(written);

    stats.processing_time = start.elapsed();
    report_summary(&stats, &args);
    Ok(stats)
}

/// Load per-file measurement-type selections from a JSON map file
fn load_selections(path: Option<&Path>) -> Result<TypeSelections> {
    let Some(path) = path else {
        return Ok(TypeSelections::default());
    };

    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::io(format!("Failed to read selections file {}", path.display()), e))?;
    let map = serde_json::from_str(&content).map_err(|e| Error::Json {
        message: format!("Invalid selections file {}", path.display()),
        source: e,
    })?;
    Ok(TypeSelections::new(map))
}

/// Settle each file's identity, label choice and eligibility
///
/// Files that cannot be processed are recorded as skipped here so the
/// concurrent phase only sees viable work.
fn plan_tasks(
    files: Vec<PathBuf>,
    args: &ProcessArgs,
    config: &Config,
    selections: &TypeSelections,
    stats: &mut RunStats,
) -> Vec<FileTask> {
    let mut tasks = Vec::new();

    for path in files {
        let Some(io_type) = IoType::from_path(&path) else {
            continue;
        };
        let name = display_name(&path);
        let parsed = decode(&name);

        match io_type {
            IoType::Output => {
                // Tabular exports need both identity fields from the name
                if parsed.value.is_none() || parsed.channel.is_none() {
                    stats.skip(name, "could not parse filename (value or channel missing)");
                    continue;
                }
                tasks.push(FileTask {
                    path,
                    io_type,
                    parsed,
                    selected_label: None,
                });
            }
            IoType::Input => {
                if parsed.value.is_none() {
                    stats.skip(name, "could not parse test value from filename");
                    continue;
                }

                let labels = match scan_file(&path, config.scan_window()) {
                    Ok(labels) => labels,
                    Err(error) => {
                        warn!("Skipping {}: {}", name, error);
                        stats.skip(name, error.to_string());
                        continue;
                    }
                };

                let selected_label = if labels.len() >= 2 {
                    let choice = selections
                        .for_file(&path)
                        .map(str::to_string)
                        .or_else(|| args.measurement_type.clone());
                    match choice {
                        Some(label) => Some(label),
                        None => {
                            let labels: Vec<String> = labels.into_iter().collect();
                            stats.skip(
                                name,
                                format!(
                                    "multiple measurement types ({}) - pick one with \
                                     --measurement-type or --selections (see the scan command)",
                                    labels.join(", ")
                                ),
                            );
                            continue;
                        }
                    }
                } else {
                    // Zero or one label needs no filtering
                    None
                };

                tasks.push(FileTask {
                    path,
                    io_type,
                    parsed,
                    selected_label,
                });
            }
        }
    }

    tasks
}

/// Process one file into its result rows
fn process_file(task: FileTask, tolerances: &ToleranceSet) -> Result<Vec<ResultRow>> {
    // Eligibility was settled during planning
    let test_value = task
        .parsed
        .value
        .ok_or_else(|| Error::data_validation("File task without a test value"))?;
    let range = task.parsed.range_setting.as_deref();

    let mut rows = Vec::new();

    match task.io_type {
        IoType::Output => {
            let samples = read_measurements(&task.path)?;
            let Some(sample_stats) = SampleStats::from_samples(&samples) else {
                return Err(Error::data_validation("No valid measurements in file"));
            };
            let channel = task
                .parsed
                .channel
                .ok_or_else(|| Error::data_validation("File task without a channel"))?;

            let mut row = ResultRow::new(channel, task.io_type, range, test_value, sample_stats);
            if let Some(window) = tolerances.lookup(test_value, range, task.io_type) {
                row.apply_tolerance(window);
            }
            debug!(
                "Processed {}: CH{}, {} sample(s) (Output)",
                display_name(&task.path),
                channel,
                sample_stats.count
            );
            rows.push(row);
        }
        IoType::Input => {
            let channel_data = extract_file(
                &task.path,
                task.selected_label.as_deref(),
                task.parsed.channel,
            )?;
            if channel_data.is_empty() {
                return Err(Error::data_validation("No valid measurements parsed from file"));
            }

            for (channel, samples) in channel_data {
                let Some(sample_stats) = SampleStats::from_samples(&samples) else {
                    continue;
                };
                let mut row = ResultRow::new(channel, task.io_type, range, test_value, sample_stats);
                if let Some(window) = tolerances.lookup(test_value, range, task.io_type) {
                    row.apply_tolerance(window);
                }
                debug!(
                    "Processed {}: CH{}, {} sample(s) (Input)",
                    display_name(&task.path),
                    channel,
                    sample_stats.count
                );
                rows.push(row);
            }
        }
    }

    Ok(rows)
}

/// Base results path: explicit --output, or <input>/<dirname>_results.<ext>
fn results_base_path(args: &ProcessArgs, input_dir: &Path) -> PathBuf {
    if let Some(output) = &args.output {
        return output.clone();
    }

    let dir_name = input_dir
        .canonicalize()
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_else(|| "bench".to_string());
    let extension = match args.output_format {
        OutputFormat::Csv => "csv",
        OutputFormat::Json => "json",
    };

    input_dir.join(format!("{dir_name}{RESULTS_FILE_SUFFIX}.{extension}"))
}

/// Print the end-of-run summary
fn report_summary(stats: &RunStats, args: &ProcessArgs) {
    if args.quiet {
        return;
    }

    println!();
    println!("{}", "Processing complete".bold());
    println!(
        "  Files:  {} found, {} processed, {} skipped",
        stats.files_found,
        stats.files_processed,
        stats.skipped.len()
    );
    println!("  Rows:   {}", stats.rows_produced);

    if stats.checks_passed + stats.checks_failed > 0 {
        let verdict = if stats.all_checks_passed() {
            "PASS".green().bold()
        } else {
            "FAIL".red().bold()
        };
        println!(
            "  Checks: {} passed, {} failed -> {}",
            stats.checks_passed, stats.checks_failed, verdict
        );
    }

    if !stats.skipped.is_empty() {
        println!();
        for (file, reason) in &stats.skipped {
            println!("  {} {}: {}", "skipped".yellow(), file, reason);
        }
    }

    if let Some(path) = &stats.output_path {
        println!();
        println!("  Results written to {}", path.display().to_string().cyan());
    }
    println!("  Completed in {:.2?}", stats.processing_time);
}
