use std::io;
use thiserror::Error;

/// Error type for loading and analyzing CSV files.
#[derive(Error, Debug)]
pub enum GlanceError {
    /// IO error during file operations.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// CSV parsing error.
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// Empty file or no header row.
    #[error("Empty file or no header row to analyze")]
    EmptyData,

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for loading operations.
pub type Result<T> = std::result::Result<T, GlanceError>;
