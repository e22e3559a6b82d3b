//! Bench Processor Library
//!
//! A Rust library for compiling lab bench measurement exports into
//! tolerance-checked result tables.
//!
//! This library provides tools for:
//! - Decoding test metadata (value, unit, channel, range setting) from
//!   equipment-generated filenames using an ordered pattern table
//! - Extracting per-channel samples from free-text instrument logs in
//!   several vendor dialects, detected heuristically
//! - Selecting the measurement column from tabular CSV exports
//! - Aggregating samples into per-channel statistics with pass/fail
//!   checks against reference/tolerance windows
//! - Writing versioned results files for downstream analysis

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod aggregator;
        pub mod csv_ingest;
        pub mod filename_decoder;
        pub mod text_extractor;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{ChannelMeasurements, IoType, ParsedFilename};
pub use config::Config;

/// Result type alias for the bench processor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for bench processing operations
///
/// The parsing core itself never raises: undeterminable filename fields
/// and unrecognized text layouts are expressed as absent fields and empty
/// mappings. These variants cover the surrounding machinery - file I/O,
/// configuration, CSV handling and results writing.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV parsing error
    #[error("CSV parsing error in file '{file}': {message}")]
    CsvParsing {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Data validation error
    #[error("Data validation error: {message}")]
    DataValidation { message: String },

    /// A file exposes multiple measurement-type labels and no selection
    /// was supplied for it
    #[error("File '{file}' has multiple measurement types ({labels}) - select one")]
    MissingTypeSelection { file: String, labels: String },

    /// Results writing error
    #[error("Results writing error: {message}")]
    ResultsWriting {
        message: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// JSON serialization/deserialization error
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Processing interrupted
    #[error("Processing interrupted: {reason}")]
    ProcessingInterrupted { reason: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create an I/O error with a simple message
    pub fn io_error(message: impl Into<String>) -> Self {
        let message_str = message.into();
        Self::Io {
            message: message_str.clone(),
            source: std::io::Error::other(message_str),
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create a missing type selection error
    pub fn missing_type_selection(file: impl Into<String>, labels: &[String]) -> Self {
        Self::MissingTypeSelection {
            file: file.into(),
            labels: labels.join(", "),
        }
    }

    /// Create a results writing error
    pub fn results_writing(
        message: impl Into<String>,
        source: Box<dyn std::error::Error + Send + Sync>,
    ) -> Self {
        Self::ResultsWriting {
            message: message.into(),
            source,
        }
    }

    /// Create a processing interrupted error
    pub fn processing_interrupted(reason: impl Into<String>) -> Self {
        Self::ProcessingInterrupted {
            reason: reason.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            file: "unknown".to_string(),
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Json {
            message: "JSON processing failed".to_string(),
            source: error,
        }
    }
}
