//! Transmutation formulas - named `(initial, impulse, catalyst, result)` quadruples.

use serde::{Deserialize, Serialize};

use crate::archetype::Archetype;
use crate::error::{AlgebraError, Result};

/// A named transmutation: `initial ⊕ impulse ⊕ catalyst = result`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransmutationFormula {
    pub name: String,
    pub initial: Archetype,
    pub impulse: Archetype,
    pub catalyst: Archetype,
    pub result: Archetype,
    pub description: String,
}

impl TransmutationFormula {
    /// Create a formula. The XOR identity is not checked here; see [`verify`](Self::verify).
    pub fn new(
        name: impl Into<String>,
        initial: Archetype,
        impulse: Archetype,
        catalyst: Archetype,
        result: Archetype,
    ) -> Self {
        Self {
            name: name.into(),
            initial,
            impulse,
            catalyst,
            result,
            description: String::new(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// The state actually reached by applying impulse and catalyst to the initial state.
    pub fn computed_result(&self) -> Archetype {
        self.initial.transmute(self.impulse, self.catalyst)
    }

    /// Re-check the XOR identity.
    pub fn verify(&self) -> bool {
        self.computed_result() == self.result
    }

    /// Like [`verify`](Self::verify), but reports the mismatch as an integrity error.
    pub fn check(&self) -> Result<()> {
        let actual = self.computed_result();
        if actual == self.result {
            Ok(())
        } else {
            Err(AlgebraError::CatalogIntegrity {
                formula: self.name.clone(),
                expected: self.result.bits(),
                actual: actual.bits(),
            })
        }
    }

    /// The `(initial, impulse, catalyst)` triple that identifies the formula.
    pub fn triple(&self) -> (Archetype, Archetype, Archetype) {
        (self.initial, self.impulse, self.catalyst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archetype::{ASSEMBLY, BELOVED, GHOST, PIONEER, STEADFAST};

    #[test]
    fn test_verify_correct() {
        let formula = TransmutationFormula::new("Stone", STEADFAST, GHOST, BELOVED, ASSEMBLY)
            .with_description("Personal longing becomes collective achievement");

        assert!(formula.verify());
        assert!(formula.check().is_ok());
        assert_eq!(formula.description, "Personal longing becomes collective achievement");
    }

    #[test]
    fn test_verify_incorrect() {
        let formula = TransmutationFormula::new("Broken", STEADFAST, GHOST, BELOVED, PIONEER);

        assert!(!formula.verify());
        let err = formula.check().unwrap_err();
        assert_eq!(
            err,
            AlgebraError::CatalogIntegrity {
                formula: "Broken".to_string(),
                expected: "10 10 10".to_string(),
                actual: "11 01 11".to_string(),
            }
        );
    }

    #[test]
    fn test_serialization() {
        let formula = TransmutationFormula::new("Stone", STEADFAST, GHOST, BELOVED, ASSEMBLY);
        let value = serde_json::to_value(&formula).unwrap();

        assert_eq!(value["name"], "Stone");
        assert_eq!(value["initial"], "10 11 00");
        assert_eq!(value["result"], "11 01 11");

        let back: TransmutationFormula = serde_json::from_value(value).unwrap();
        assert_eq!(back, formula);
    }
}
