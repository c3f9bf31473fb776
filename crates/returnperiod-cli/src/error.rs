//! Error types for the return period CLI.
//!
//! All errors use thiserror for consistent error handling across the codebase.

use returnperiod_core::{ConfigError, DecodeError, EncodeError};
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the `generate` and `inspect` commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Parameter validation failed
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Writing a record to the output file failed
    #[error("Output error: {0}")]
    Encode(#[from] EncodeError),

    /// Output file could not be created
    #[error("Cannot create output file {path}: {source}")]
    CreateOutput {
        /// Output path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Input file could not be read
    #[error("Cannot read record file {path}: {source}")]
    ReadInput {
        /// Input path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Input file is not a valid record file
    #[error("Invalid record file {path}: {source}")]
    Decode {
        /// Input path
        path: PathBuf,
        /// Decoder error
        #[source]
        source: DecodeError,
    },

    /// Echoing a value to the console stream failed
    #[error("Failed to echo return period #{ordinal}: {source}")]
    Echo {
        /// 1-based position of the value; 0 for the header line
        ordinal: u64,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// JSON report could not be serialized
    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),

    /// Report could not be written to its stream
    #[error("Failed to write report: {0}")]
    Report(#[source] std::io::Error),
}

impl CliError {
    /// 1-based ordinal of the record that failed, if the error has one
    pub const fn failed_ordinal(&self) -> Option<u64> {
        match self {
            Self::Encode(EncodeError::Write { ordinal, .. }) | Self::Echo { ordinal, .. } => {
                Some(*ordinal)
            }
            _ => None,
        }
    }
}
