use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while turning the positional arguments into an invocation.
///
/// Every variant is reported by printing the usage text and exiting with status 1.
#[derive(Debug, Error)]
pub enum UsageError {
    #[error("Expected at least 3 arguments, got {given}")]
    MissingArguments { given: usize },

    #[error("Invalid performance value: {value}")]
    InvalidThreshold { value: String },

    #[error("Input file not found: {}", path.display())]
    MissingFile { path: PathBuf },
}

/// Errors related to scanning benchmark output for measurements
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Malformed measurement on line {line}: '{token}' is not a number before '{unit}'")]
    MalformedMeasurement {
        line: usize,
        token: String,
        unit: String,
    },

    #[error("Failed to read benchmark output")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

/// Errors related to comparing a mean against a threshold
#[derive(Debug, Error)]
pub enum ClassificationError {
    #[error("Invalid direction: '{direction}'. Must be 'greater' or 'less'")]
    InvalidDirection { direction: String },
}
