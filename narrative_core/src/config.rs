//! Engine configuration, loadable from TOML.
//!
//! ```toml
//! [path_finder]
//! max_steps = 3
//! impulse_stride = 8
//!
//! [decomposer]
//! max_complexity = 5
//! ```
//!
//! Missing sections and fields take their defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::decomposer::DecomposerConfig;
use crate::error::{NarrativeError, Result};
use crate::path_finder::PathFinderConfig;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NarrativeConfig {
    pub path_finder: PathFinderConfig,
    pub decomposer: DecomposerConfig,
}

impl NarrativeConfig {
    /// Parse and validate configuration from a TOML string.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let config: NarrativeConfig = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading narrative config from {}", path.display());
        let input = std::fs::read_to_string(path)?;
        Self::from_toml_str(&input)
    }

    /// Check every section's bounds.
    pub fn validate(&self) -> Result<()> {
        self.path_finder.validate()?;
        self.decomposer.validate()
    }

    /// Render the configuration as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| NarrativeError::Serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_uses_defaults() {
        let config = NarrativeConfig::from_toml_str("").unwrap();
        assert_eq!(config, NarrativeConfig::default());
        assert_eq!(config.path_finder.max_steps, 3);
        assert_eq!(config.decomposer.small_delta_threshold, 8);
    }

    #[test]
    fn test_partial_sections() {
        let config = NarrativeConfig::from_toml_str(
            r#"
            [path_finder]
            impulse_stride = 1
            max_paths = 4

            [decomposer]
            max_complexity = 2
            "#,
        )
        .unwrap();

        assert_eq!(config.path_finder.impulse_stride, 1);
        assert_eq!(config.path_finder.max_paths, 4);
        assert_eq!(config.path_finder.catalyst_stride, 1);
        assert_eq!(config.decomposer.max_complexity, 2);
        assert_eq!(config.decomposer.split_max, 15);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = NarrativeConfig::from_toml_str("[path_finder]\ncatalyst_stride = 0\n").unwrap_err();
        assert!(matches!(err, NarrativeError::Config(_)));

        let err = NarrativeConfig::from_toml_str("[decomposer]\nsplit_min = 0\n").unwrap_err();
        assert!(matches!(err, NarrativeError::Config(_)));
    }

    #[test]
    fn test_malformed_toml() {
        let err = NarrativeConfig::from_toml_str("[path_finder\nmax_steps = 3").unwrap_err();
        assert!(matches!(err, NarrativeError::Config(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = NarrativeConfig::load("/nonexistent/narrative.toml").unwrap_err();
        assert!(matches!(err, NarrativeError::Io(_)));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("narrative-config-{}.toml", uuid::Uuid::new_v4()));
        std::fs::write(&path, "[path_finder]\nmax_steps = 2\n").unwrap();

        let config = NarrativeConfig::load(&path).unwrap();
        assert_eq!(config.path_finder.max_steps, 2);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = NarrativeConfig::default();
        let text = config.to_toml_string().unwrap();
        assert_eq!(NarrativeConfig::from_toml_str(&text).unwrap(), config);
    }
}
