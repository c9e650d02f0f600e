//! Configuration module

use anyhow::{Context, Result};
use segmenta_api::Config;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::CliError;
use crate::output::OutputFormat;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Rendering configuration
    #[serde(default)]
    pub render: RenderConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Rendering-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    /// Fail on malformed segments instead of rendering them empty
    pub strict: bool,

    /// Prefix of unit keys
    pub key_prefix: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            strict: false,
            key_prefix: segmenta_core::DEFAULT_KEY_PREFIX.to_string(),
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "html".to_string(),
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Load a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = toml::from_str(&text)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;
        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load `path` when given, defaults otherwise
    pub fn load(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::from_file)
    }

    /// Rendering configuration; `force_strict` overrides the file
    pub fn to_api_config(&self, force_strict: bool) -> Result<Config> {
        Config::builder()
            .strict(force_strict || self.render.strict)
            .key_prefix(self.render.key_prefix.as_str())
            .build()
            .map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    /// The configured default output format
    pub fn default_format(&self) -> Result<OutputFormat> {
        OutputFormat::from_name(&self.output.default_format).ok_or_else(|| {
            CliError::ConfigError(format!(
                "unknown output format '{}'",
                self.output.default_format
            ))
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert!(!config.render.strict);
        assert_eq!(config.render.key_prefix, "segment_");
        assert_eq!(config.default_format().unwrap(), OutputFormat::Html);
        assert!(config.output.pretty_json);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[render]\nstrict = true\n").unwrap();

        let config = CliConfig::from_file(file.path()).unwrap();
        assert!(config.render.strict);
        assert_eq!(config.render.key_prefix, "segment_");
        assert_eq!(config.output, OutputConfig::default());
    }

    #[test]
    fn test_to_api_config() {
        let config = CliConfig {
            render: RenderConfig {
                strict: false,
                key_prefix: "w".to_string(),
            },
            ..CliConfig::default()
        };
        let api = config.to_api_config(false).unwrap();
        assert!(!api.is_strict());
        assert_eq!(api.key_prefix(), "w");
        assert!(config.to_api_config(true).unwrap().is_strict());
    }

    #[test]
    fn test_invalid_values() {
        let mut config = CliConfig::default();
        config.render.key_prefix = String::new();
        assert!(config.to_api_config(false).is_err());

        config.output.default_format = "xml".to_string();
        let err = config.default_format().unwrap_err();
        assert!(err.to_string().contains("unknown output format 'xml'"));
    }

    #[test]
    fn test_malformed_toml() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[render\nstrict = ").unwrap();
        let err = CliConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::ConfigError(_))
        ));
    }
}
