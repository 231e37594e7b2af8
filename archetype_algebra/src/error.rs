//! Error types for archetype construction and catalog integrity.

use thiserror::Error;

use crate::axis::Axis;

/// Errors raised while building archetypes or the canonical catalogs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlgebraError {
    /// A label that is not one of the four members of its axis.
    #[error("Invalid {axis} value: {value:?}")]
    InvalidAxisValue { axis: Axis, value: String },

    /// A 2-bit code with no assigned axis value.
    #[error("Invalid {axis} code: {code:?}")]
    InvalidCode { axis: Axis, code: String },

    /// A bit string of the wrong length or with characters other than 0/1.
    #[error("Malformed bits {input:?}: {reason}")]
    MalformedBits { input: String, reason: String },

    /// An integer outside 0..=63.
    #[error("Expected 0-63, got {0}")]
    OutOfRange(i64),

    /// A canonical formula whose XOR identity does not hold.
    #[error("Formula {formula:?} failed verification: expected {expected}, computed {actual}")]
    CatalogIntegrity {
        formula: String,
        expected: String,
        actual: String,
    },

    /// Two formulas in one catalog share a name or an `(initial, impulse, catalyst)` triple.
    #[error("Duplicate formula: {0}")]
    DuplicateFormula(String),
}

/// Convenience Result type for archetype algebra operations.
pub type Result<T> = std::result::Result<T, AlgebraError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_input() {
        let err = AlgebraError::InvalidAxisValue {
            axis: Axis::Who,
            value: "US".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid WHO value: \"US\"");

        assert_eq!(AlgebraError::OutOfRange(64).to_string(), "Expected 0-63, got 64");

        let err = AlgebraError::MalformedBits {
            input: "10101".to_string(),
            reason: "expected 6 bits, got 5".to_string(),
        };
        assert!(err.to_string().contains("10101"));
    }
}
