//! Command-line argument definitions for the bench processor
//!
//! This module defines the complete CLI interface using clap derive API.

use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the bench measurement processor
///
/// Compiles lab bench measurement exports (CSV for Output-type device
/// readings, TXT for Input-type device readings) into a tolerance-checked
/// result table.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "bench-processor",
    version,
    about = "Compile lab bench measurement exports into tolerance-checked result tables",
    long_about = "Processes a directory of equipment-generated measurement files: test \
                  metadata (value, unit, channel, range) is decoded from filenames, \
                  per-channel samples are extracted from CSV exports and free-text \
                  instrument logs, and the aggregated statistics are checked against \
                  optional reference/tolerance windows."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the bench processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Process a measurement directory into a results table (default command)
    Process(ProcessArgs),
    /// List the measurement-type labels each text log exposes
    Scan(ScanArgs),
    /// Decode test metadata from every filename in a directory
    Decode(DecodeArgs),
}

/// Arguments for the process command (main pipeline)
#[derive(Debug, Clone, Parser)]
pub struct ProcessArgs {
    /// Input directory containing measurement files
    ///
    /// A flat directory of equipment exports: *.csv files are treated as
    /// Output-type readings, *.txt files as Input-type instrument logs.
    /// Defaults to the current directory.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "DIR",
        help = "Input directory containing *.csv / *.txt measurement files"
    )]
    pub input_dir: Option<PathBuf>,

    /// Base path for the results file
    ///
    /// Existing files are never overwritten; a _v2, _v3, ... suffix is
    /// appended instead. If not specified, defaults to
    /// <input>/<dirname>_results.<ext> next to the measurement files.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Base path for the results file (versioned, never overwritten)"
    )]
    pub output: Option<PathBuf>,

    /// Reference/tolerance window file (JSON)
    ///
    /// A JSON list of windows keyed by test value, range setting and I/O
    /// type. Rows with a matching window get limit columns and PASS/FAIL
    /// checks; without this file the table carries statistics only.
    #[arg(
        long = "tolerances",
        value_name = "FILE",
        help = "JSON file of reference/tolerance windows"
    )]
    pub tolerances: Option<PathBuf>,

    /// Per-file measurement-type selections (JSON)
    ///
    /// A JSON object mapping file paths or bare file names to the label
    /// to extract, for text logs that expose more than one
    /// measurement-type label. Use the scan command to list the labels.
    #[arg(
        long = "selections",
        value_name = "FILE",
        help = "JSON map of file name -> measurement-type label"
    )]
    pub selections: Option<PathBuf>,

    /// Measurement-type label applied to every multi-label text log
    ///
    /// A per-file entry in --selections takes precedence over this.
    #[arg(
        short = 't',
        long = "measurement-type",
        value_name = "LABEL",
        help = "Measurement-type label for all multi-label text logs"
    )]
    pub measurement_type: Option<String>,

    /// Unit label stamped into result column headers
    ///
    /// If not specified, the unit is inferred from the first filename in
    /// the directory that yields one, defaulting to V.
    #[arg(
        short = 'u',
        long = "unit",
        value_name = "UNIT",
        help = "Unit label for result columns (default: inferred from filenames)"
    )]
    pub unit: Option<String>,

    /// Number of parallel workers
    ///
    /// Controls how many files are processed concurrently. Defaults to
    /// the number of CPU cores.
    #[arg(
        short = 'j',
        long = "workers",
        value_name = "COUNT",
        help = "Number of parallel workers (default: CPU core count)"
    )]
    pub workers: Option<usize>,

    /// Scan whole text files for measurement-type labels
    ///
    /// By default only the first 500 lines of each text log are sampled
    /// when enumerating labels. This flag scans entire files, which is
    /// slower but catches labels that first appear late.
    #[arg(long = "full-scan", help = "Scan whole text files for labels")]
    pub full_scan: bool,

    /// Results file format
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "csv",
        help = "Results file format"
    )]
    pub output_format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors and critical messages. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the scan command (label listing)
#[derive(Debug, Clone, Parser)]
pub struct ScanArgs {
    /// Input directory containing text logs to scan
    #[arg(
        short = 'i',
        long = "input",
        value_name = "DIR",
        help = "Input directory containing *.txt instrument logs"
    )]
    pub input_dir: Option<PathBuf>,

    /// Scan whole files instead of the first 500 lines
    #[arg(long = "full-scan", help = "Scan whole text files for labels")]
    pub full_scan: bool,

    /// Report format
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Report format"
    )]
    pub format: ReportFormat,

    /// Enable verbose logging output
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Enable verbose logging (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Arguments for the decode command (filename debugging aid)
#[derive(Debug, Clone, Parser)]
pub struct DecodeArgs {
    /// Input directory whose filenames should be decoded
    #[arg(
        short = 'i',
        long = "input",
        value_name = "DIR",
        help = "Input directory containing measurement files"
    )]
    pub input_dir: Option<PathBuf>,

    /// Report format
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Report format"
    )]
    pub format: ReportFormat,

    /// Enable verbose logging output
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Enable verbose logging (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Results file formats for the process command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Comma-separated table
    Csv,
    /// JSON report for scripting
    Json,
}

/// Console report formats for the scan and decode commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

fn validate_input_dir(input_dir: &Option<PathBuf>) -> Result<()> {
    if let Some(dir) = input_dir {
        if !dir.exists() {
            return Err(Error::configuration(format!(
                "Input directory does not exist: {}",
                dir.display()
            )));
        }
        if !dir.is_dir() {
            return Err(Error::configuration(format!(
                "Input path is not a directory: {}",
                dir.display()
            )));
        }
    }
    Ok(())
}

impl ProcessArgs {
    /// Validate the process command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        validate_input_dir(&self.input_dir)?;

        if let Some(workers) = self.workers {
            if workers == 0 {
                return Err(Error::configuration(
                    "Number of workers must be greater than 0".to_string(),
                ));
            }
            if workers > 100 {
                return Err(Error::configuration(
                    "Number of workers cannot exceed 100".to_string(),
                ));
            }
        }

        if let Some(unit) = &self.unit {
            if unit.trim().is_empty() {
                return Err(Error::configuration(
                    "Unit label cannot be empty".to_string(),
                ));
            }
        }

        for (name, file) in [("Tolerance", &self.tolerances), ("Selections", &self.selections)] {
            if let Some(path) = file {
                if !path.exists() {
                    return Err(Error::configuration(format!(
                        "{} file does not exist: {}",
                        name,
                        path.display()
                    )));
                }
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

impl ScanArgs {
    /// Validate the scan command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        validate_input_dir(&self.input_dir)
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

impl DecodeArgs {
    /// Validate the decode command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        validate_input_dir(&self.input_dir)
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_process_defaults() {
        let args = parse(&["bench-processor", "process"]);
        let Commands::Process(process) = args.get_command() else {
            panic!("expected process command");
        };

        assert_eq!(process.input_dir, None);
        assert_eq!(process.workers, None);
        assert!(!process.full_scan);
        assert_eq!(process.output_format, OutputFormat::Csv);
        assert_eq!(process.get_log_level(), "warn");
    }

    #[test]
    fn test_process_flags() {
        let args = parse(&[
            "bench-processor",
            "process",
            "-i",
            "/data/run1",
            "-t",
            "Voltage",
            "-j",
            "4",
            "--full-scan",
            "--output-format",
            "json",
            "-vv",
        ]);
        let Commands::Process(process) = args.get_command() else {
            panic!("expected process command");
        };

        assert_eq!(process.input_dir, Some(PathBuf::from("/data/run1")));
        assert_eq!(process.measurement_type.as_deref(), Some("Voltage"));
        assert_eq!(process.workers, Some(4));
        assert!(process.full_scan);
        assert_eq!(process.output_format, OutputFormat::Json);
        assert_eq!(process.get_log_level(), "debug");
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Args::try_parse_from(["bench-processor", "process", "-q", "-v"]).is_err());
    }

    #[test]
    fn test_quiet_forces_error_level() {
        let args = parse(&["bench-processor", "process", "-q"]);
        let Commands::Process(process) = args.get_command() else {
            panic!("expected process command");
        };
        assert_eq!(process.get_log_level(), "error");
        assert!(!process.show_progress());
    }

    #[test]
    fn test_workers_validation() {
        let args = parse(&["bench-processor", "process", "-j", "0"]);
        let Commands::Process(process) = args.get_command() else {
            panic!("expected process command");
        };
        assert!(process.validate().is_err());

        let args = parse(&["bench-processor", "process", "-j", "101"]);
        let Commands::Process(process) = args.get_command() else {
            panic!("expected process command");
        };
        assert!(process.validate().is_err());
    }

    #[test]
    fn test_missing_input_dir_fails_validation() {
        let args = parse(&["bench-processor", "process", "-i", "/no/such/dir"]);
        let Commands::Process(process) = args.get_command() else {
            panic!("expected process command");
        };
        assert!(process.validate().is_err());
    }

    #[test]
    fn test_scan_command() {
        let args = parse(&["bench-processor", "scan", "--format", "json", "--full-scan"]);
        let Commands::Scan(scan) = args.get_command() else {
            panic!("expected scan command");
        };
        assert_eq!(scan.format, ReportFormat::Json);
        assert!(scan.full_scan);
    }

    #[test]
    fn test_decode_command() {
        let args = parse(&["bench-processor", "decode", "-i", "."]);
        let Commands::Decode(decode) = args.get_command() else {
            panic!("expected decode command");
        };
        assert!(decode.validate().is_ok());
        assert_eq!(decode.format, ReportFormat::Human);
    }
}
