//! Error types for the narrative engine.

use archetype_algebra::AlgebraError;
use thiserror::Error;

/// Main error type for narrative engine operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NarrativeError {
    /// Archetype construction or catalog error.
    #[error(transparent)]
    Algebra(#[from] AlgebraError),

    /// Configuration failed to parse or validate.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Reading a configuration file failed.
    #[error("I/O error: {0}")]
    Io(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Convenience Result type for narrative engine operations.
pub type Result<T> = std::result::Result<T, NarrativeError>;

impl From<serde_json::Error> for NarrativeError {
    fn from(err: serde_json::Error) -> Self {
        NarrativeError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for NarrativeError {
    fn from(err: toml::de::Error) -> Self {
        NarrativeError::Config(err.to_string())
    }
}

impl From<std::io::Error> for NarrativeError {
    fn from(err: std::io::Error) -> Self {
        NarrativeError::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algebra_errors_pass_through() {
        let err: NarrativeError = AlgebraError::OutOfRange(99).into();
        assert_eq!(err.to_string(), "Expected 0-63, got 99");
    }

    #[test]
    fn test_toml_error_is_config() {
        let parse: std::result::Result<toml::Value, _> = toml::from_str("max_steps = ");
        let err: NarrativeError = parse.unwrap_err().into();
        assert!(matches!(err, NarrativeError::Config(_)));
    }
}
