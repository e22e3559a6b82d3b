//! Aggregation of per-channel samples into a tolerance-checked table
//!
//! Each processed file contributes one row per channel: identity
//! (channel, I/O type, range, test value), descriptive statistics over
//! the samples, and pass/fail checks when a reference/tolerance window
//! is configured for that row's key.

pub mod results;
pub mod stats;
pub mod writer;

#[cfg(test)]
pub mod tests;

pub use results::{sort_rows, CheckOutcome, ResultRow, ToleranceSet, ToleranceWindow};
pub use stats::SampleStats;
pub use writer::{versioned_path, write_csv_results, write_json_results};
