//! Error types for return period generation and record encoding

use thiserror::Error;

/// Errors raised while validating a parameter set
///
/// All of these are detected before any value is generated, so no partial
/// output can exist when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Step must be at least 1
    #[error("Invalid step {0}: must be a positive integer")]
    NonPositiveStep(i32),

    /// Minimum return period must be at least 1
    #[error("Invalid minimum return period {0}: must be a positive integer")]
    NonPositiveMin(i32),

    /// The range `[min, max]` is empty or a single point
    #[error("Invalid range: minimum return period {min} must be below maximum {max}")]
    EmptyRange {
        /// Configured minimum
        min: i32,
        /// Configured maximum
        max: i32,
    },

    /// The cutover index came out as zero or negative
    #[error("Step {step} is too large for maximum return period {max}: cutover index would be below 1")]
    StepTooLarge {
        /// Configured step
        step: i32,
        /// Configured maximum
        max: i32,
    },

    /// The linear phase would emit nothing
    #[error("Minimum return period {min} is not below the cutover value {cutover}")]
    MinAboveCutover {
        /// Configured minimum
        min: i32,
        /// Computed cutover value
        cutover: i32,
    },

    /// The last linear value sits too close to the maximum
    #[error("Last linear return period {last} is within {gap} of maximum {max}")]
    TerminalGap {
        /// Last value of the linear phase
        last: i32,
        /// Configured maximum
        max: i32,
        /// Required minimum gap
        gap: i32,
    },
}

/// Errors raised while streaming records to a writer
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The underlying writer rejected a record
    #[error("Failed to write return period record #{ordinal}: {source}")]
    Write {
        /// 1-based position of the failing record
        ordinal: u64,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Flushing the writer after the last record failed
    #[error("Failed to flush return period records after #{written}: {source}")]
    Flush {
        /// Number of records handed to the writer
        written: u64,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// binrw failed to serialize a record
    #[error("Binary write error: {0}")]
    BinWrite(String),
}

impl From<binrw::Error> for EncodeError {
    fn from(e: binrw::Error) -> Self {
        Self::BinWrite(e.to_string())
    }
}

/// Errors raised while decoding a record file
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Data length is not a whole number of records
    #[error("Trailing bytes: {len} bytes is not a multiple of the {record_size}-byte record size")]
    TrailingBytes {
        /// Total data length
        len: usize,
        /// Record size in bytes
        record_size: usize,
    },

    /// Binary read error
    #[error("Binary parsing error: {0}")]
    BinRead(String),
}

impl From<binrw::Error> for DecodeError {
    fn from(e: binrw::Error) -> Self {
        Self::BinRead(e.to_string())
    }
}

/// Result type alias for parameter validation
pub type Result<T> = std::result::Result<T, ConfigError>;
