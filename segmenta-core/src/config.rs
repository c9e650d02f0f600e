//! Configuration types for assembly

use crate::error::{Result, SegmentError};
use crate::renderer::DEFAULT_KEY_PREFIX;

/// What to do with a segment that matches no variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MalformedPolicy {
    /// Render an empty unit and carry on
    #[default]
    Silent,
    /// Fail assembly with [`SegmentError::Malformed`]
    Strict,
}

/// Assembler configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssemblerConfig {
    /// Prefix of positional unit keys
    pub key_prefix: String,
    /// Handling of unclassifiable segments in checked assembly
    pub policy: MalformedPolicy,
}

impl Default for AssemblerConfig {
    fn default() -> Self {
        Self {
            key_prefix: DEFAULT_KEY_PREFIX.to_string(),
            policy: MalformedPolicy::Silent,
        }
    }
}

impl AssemblerConfig {
    /// Create a strict configuration
    pub fn strict() -> Self {
        Self {
            policy: MalformedPolicy::Strict,
            ..Self::default()
        }
    }

    /// Check that unit keys built from the prefix are usable as identifiers
    pub fn validate(&self) -> Result<()> {
        if self.key_prefix.is_empty() {
            return Err(SegmentError::Config(
                "key prefix must not be empty".to_string(),
            ));
        }
        if self.key_prefix.chars().any(char::is_whitespace) {
            return Err(SegmentError::Config(format!(
                "key prefix '{}' contains whitespace",
                self.key_prefix
            )));
        }
        Ok(())
    }
}
