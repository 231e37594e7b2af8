//! Transmutation steps and paths - the unit of change applied to a state.

use archetype_algebra::{Archetype, ZERO};
use serde::{Deserialize, Serialize};

/// One `(impulse, catalyst)` pair. Applying it to a state XORs both in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransmutationStep {
    pub impulse: Archetype,
    pub catalyst: Archetype,
}

impl TransmutationStep {
    /// Create a step from an impulse and a catalyst.
    pub fn new(impulse: Archetype, catalyst: Archetype) -> Self {
        Self { impulse, catalyst }
    }

    /// A single impulse carrying the whole change, with a zero catalyst.
    pub fn direct(change: Archetype) -> Self {
        Self::new(change, ZERO)
    }

    /// The net change this step applies: `impulse ⊕ catalyst`.
    pub fn delta(&self) -> Archetype {
        self.impulse ^ self.catalyst
    }

    /// Apply the step to `state`.
    pub fn apply(&self, state: Archetype) -> Archetype {
        state.transmute(self.impulse, self.catalyst)
    }
}

/// An ordered sequence of steps.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TransmutationPath {
    pub steps: Vec<TransmutationStep>,
}

impl TransmutationPath {
    /// Create a path from ordered steps.
    pub fn new(steps: Vec<TransmutationStep>) -> Self {
        Self { steps }
    }

    /// Number of steps in the path.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the path has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Cumulative XOR of every impulse and catalyst.
    pub fn delta(&self) -> Archetype {
        cumulative_delta(&self.steps)
    }

    /// Apply every step in order, starting from `start`.
    pub fn apply(&self, start: Archetype) -> Archetype {
        self.steps.iter().fold(start, |state, step| step.apply(state))
    }
}

/// Cumulative XOR of a step sequence.
pub fn cumulative_delta(steps: &[TransmutationStep]) -> Archetype {
    steps.iter().fold(ZERO, |acc, step| acc ^ step.delta())
}

#[cfg(test)]
mod tests {
    use super::*;
    use archetype_algebra::{ASSEMBLY, BELOVED, GHOST, PIONEER, STEADFAST};

    #[test]
    fn test_step_apply() {
        let step = TransmutationStep::new(GHOST, BELOVED);
        assert_eq!(step.apply(STEADFAST), ASSEMBLY);
        assert_eq!(step.delta(), GHOST ^ BELOVED);
    }

    #[test]
    fn test_direct_step() {
        let change = STEADFAST ^ ASSEMBLY;
        let step = TransmutationStep::direct(change);
        assert_eq!(step.catalyst, ZERO);
        assert_eq!(step.apply(STEADFAST), ASSEMBLY);
    }

    #[test]
    fn test_path_apply_and_delta() {
        let path = TransmutationPath::new(vec![
            TransmutationStep::new(GHOST, BELOVED),
            TransmutationStep::new(PIONEER, ZERO),
        ]);

        assert_eq!(path.len(), 2);
        assert_eq!(path.apply(STEADFAST), ASSEMBLY ^ PIONEER);
        assert_eq!(path.delta(), GHOST ^ BELOVED ^ PIONEER);
        assert_eq!(STEADFAST ^ path.delta(), path.apply(STEADFAST));
    }

    #[test]
    fn test_empty_path() {
        let path = TransmutationPath::default();
        assert!(path.is_empty());
        assert_eq!(path.apply(PIONEER), PIONEER);
        assert_eq!(path.delta(), ZERO);
    }
}
