//! Core error types
//!
//! Assembly itself never fails; these errors only surface through opt-in
//! strict assembly, configuration checks and document decoding.

use crate::classifier::Malformed;
use thiserror::Error;

/// Errors produced by the core crate
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SegmentError {
    /// A segment matched none of the four variants under the strict policy
    #[error("malformed segment at index {index}: {reason}")]
    Malformed {
        /// Position of the segment in the input sequence
        index: usize,
        /// Why classification failed
        reason: Malformed,
    },

    /// A segment document could not be decoded
    #[error("invalid segment document: {0}")]
    Decode(String),

    /// Invalid configuration
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, SegmentError>;
