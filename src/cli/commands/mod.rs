//! Command implementations for the bench processor CLI
//!
//! Each subcommand lives in its own module; shared helpers (logging
//! setup, file discovery, progress reporting) live in `shared`.

pub mod decode;
pub mod process;
pub mod scan;
pub mod shared;

pub use shared::RunStats;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner for the bench processor
///
/// Dispatches to the appropriate subcommand handler:
/// - `process`: full pipeline from measurement directory to results table
/// - `scan`: measurement-type label listing for text logs
/// - `decode`: filename decoding report
pub async fn run(args: Args) -> Result<RunStats> {
    match args.get_command() {
        Commands::Process(process_args) => process::run_process(process_args).await,
        Commands::Scan(scan_args) => scan::run_scan(scan_args).await,
        Commands::Decode(decode_args) => decode::run_decode(decode_args).await,
    }
}
