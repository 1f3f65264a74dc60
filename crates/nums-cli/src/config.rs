//! Config - Configuration File Handling
//!
//! Handles parsing and validation of the optional `nums.toml` file.
//!
//! @version 0.1.0
//! @author Nums Development Team

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{CliError, CliResult};

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "nums.toml";

// =============================================================================
// CLI Configuration
// =============================================================================

/// Top-level configuration (nums.toml)
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CliConfig {
    /// Settings for the `demo` command
    #[serde(default)]
    pub demo: DemoConfig,
}

// =============================================================================
// Demo Configuration
// =============================================================================

/// Demo configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DemoConfig {
    /// Shape of the demo array, filled with 1..=product(shape)
    #[serde(default = "default_shape")]
    pub shape: Vec<usize>,

    /// Index read, written and read back
    #[serde(default = "default_index")]
    pub index: Vec<isize>,

    /// Value written at `index`
    #[serde(default = "default_value")]
    pub value: f64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            shape: default_shape(),
            index: default_index(),
            value: default_value(),
        }
    }
}

fn default_shape() -> Vec<usize> {
    vec![2, 3, 2]
}

fn default_index() -> Vec<isize> {
    vec![1, 2, 1]
}

fn default_value() -> f64 {
    100.0
}

// =============================================================================
// Loading
// =============================================================================

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> CliResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: CliConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the configuration for this run.
    ///
    /// An explicit path must exist. Without one, `nums.toml` in the working
    /// directory is used when present, otherwise the defaults.
    pub fn resolve(explicit: Option<&Path>) -> CliResult<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
        if fallback.is_file() {
            tracing::debug!(path = %fallback.display(), "loading config");
            return Self::load(fallback);
        }

        Ok(Self::default())
    }

    /// Check the settings that the type system cannot.
    pub fn validate(&self) -> CliResult<()> {
        let demo = &self.demo;
        if demo.shape.is_empty() {
            return Err(CliError::Config("demo.shape must not be empty".to_string()));
        }
        if demo.index.len() != demo.shape.len() {
            return Err(CliError::Config(format!(
                "demo.index has {} entries but demo.shape has {} dimensions",
                demo.index.len(),
                demo.shape.len()
            )));
        }
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.demo.shape, vec![2, 3, 2]);
        assert_eq!(config.demo.index, vec![1, 2, 1]);
        assert_eq!(config.demo.value, 100.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let config = CliConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: CliConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let parsed: CliConfig = toml::from_str("[demo]\nvalue = 7.5\n").unwrap();
        assert_eq!(parsed.demo.value, 7.5);
        assert_eq!(parsed.demo.shape, vec![2, 3, 2]);

        let empty: CliConfig = toml::from_str("").unwrap();
        assert_eq!(empty, CliConfig::default());
    }

    #[test]
    fn test_validate_rejects_rank_mismatch() {
        let mut config = CliConfig::default();
        config.demo.index = vec![0, 0];
        assert!(matches!(config.validate(), Err(CliError::Config(_))));

        config.demo.shape.clear();
        assert!(matches!(config.validate(), Err(CliError::Config(_))));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nums.toml");
        std::fs::write(&path, "[demo]\nshape = [4]\nindex = [3]\nvalue = -2.0\n").unwrap();

        let config = CliConfig::load(&path).unwrap();
        assert_eq!(config.demo.shape, vec![4]);
        assert_eq!(config.demo.index, vec![3]);

        let missing = dir.path().join("missing.toml");
        assert!(matches!(CliConfig::load(missing), Err(CliError::Io(_))));
    }
}
