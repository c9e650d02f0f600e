//! Error handling for the CLI application

use thiserror::Error;

/// CLI-specific errors
#[derive(Debug, Error)]
pub enum CliError {
    /// No file matched the given patterns
    #[error("No files found matching the provided patterns")]
    NoInputFiles,
    /// Invalid file pattern
    #[error("Invalid file pattern: {0}")]
    InvalidPattern(String),
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
    /// Documents contained malformed segments
    #[error("Validation failed: {malformed} malformed segment(s) in {files} file(s)")]
    ValidationFailed {
        /// Number of malformed segments
        malformed: usize,
        /// Number of files containing them
        files: usize,
    },
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
