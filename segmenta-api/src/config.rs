//! High-level configuration API

use crate::error::{ApiError, Result};
use segmenta_core::{AssemblerConfig, MalformedPolicy, DEFAULT_KEY_PREFIX};

/// High-level configuration for sentence rendering
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    inner: AssemblerConfig,
}

impl Config {
    /// Configuration that fails on the first malformed segment
    pub fn strict() -> Self {
        Self {
            inner: AssemblerConfig::strict(),
        }
    }

    /// Configuration that renders malformed segments as empty units
    pub fn lenient() -> Self {
        Self::default()
    }

    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Whether malformed segments fail rendering
    pub fn is_strict(&self) -> bool {
        self.inner.policy == MalformedPolicy::Strict
    }

    /// Prefix of unit keys
    pub fn key_prefix(&self) -> &str {
        &self.inner.key_prefix
    }

    /// The assembler configuration this maps to
    pub fn assembler_config(&self) -> &AssemblerConfig {
        &self.inner
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Fail on malformed segments instead of rendering them empty
    pub fn strict(mut self, strict: bool) -> Self {
        self.config.inner.policy = if strict {
            MalformedPolicy::Strict
        } else {
            MalformedPolicy::Silent
        };
        self
    }

    /// Set the unit key prefix
    pub fn key_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.inner.key_prefix = prefix.into();
        self
    }

    /// Reset the unit key prefix to `segment_`
    pub fn default_key_prefix(self) -> Self {
        self.key_prefix(DEFAULT_KEY_PREFIX)
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        self.config
            .inner
            .validate()
            .map_err(|e| ApiError::Config(e.to_string()))?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = Config::builder().build().unwrap();
        assert_eq!(config, Config::default());
        assert!(!config.is_strict());
        assert_eq!(config.key_prefix(), "segment_");
    }

    #[test]
    fn test_builder_overrides() {
        let config = Config::builder()
            .strict(true)
            .key_prefix("unit-")
            .build()
            .unwrap();
        assert!(config.is_strict());
        assert_eq!(config.key_prefix(), "unit-");

        let reset = Config::builder()
            .key_prefix("x")
            .default_key_prefix()
            .build()
            .unwrap();
        assert_eq!(reset.key_prefix(), "segment_");
    }

    #[test]
    fn test_builder_rejects_empty_prefix() {
        let err = Config::builder().key_prefix("").build().unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));
        assert!(err.to_string().contains("key prefix"));
    }

    #[test]
    fn test_presets() {
        assert!(Config::strict().is_strict());
        assert!(!Config::lenient().is_strict());
    }
}
