//! Arc events - one state transition per decomposition step.

use archetype_algebra::{Archetype, AxisSet};
use serde::{Deserialize, Serialize};

use crate::step::TransmutationStep;

/// The set of axes an event changed.
pub type EventKind = AxisSet;

/// A single transition within a narrative arc.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// 1-based position within the arc.
    pub step: usize,
    pub kind: EventKind,
    /// Structural summary, e.g. `"Steadfast -> Assembly (WHO,WHERE,WHEN)"`.
    pub description: String,
    pub previous_state: Archetype,
    pub new_state: Archetype,
    pub impulse: Archetype,
    pub catalyst: Archetype,
    /// Fraction of axes changed, in `[0, 1]`.
    pub significance: f32,
}

impl Event {
    /// Apply `transmutation` to `previous_state` and record the transition.
    pub fn from_step(step: usize, previous_state: Archetype, transmutation: TransmutationStep) -> Self {
        let new_state = transmutation.apply(previous_state);
        let kind = previous_state.changed_axes(&new_state);

        Self {
            step,
            kind,
            description: format!(
                "{} -> {} ({})",
                previous_state.name(),
                new_state.name(),
                kind.key()
            ),
            previous_state,
            new_state,
            impulse: transmutation.impulse,
            catalyst: transmutation.catalyst,
            significance: kind.len() as f32 / 3.0,
        }
    }

    /// The `(impulse, catalyst)` pair this event applied.
    pub fn transmutation(&self) -> TransmutationStep {
        TransmutationStep::new(self.impulse, self.catalyst)
    }

    /// Number of bits that differ between the previous and new state.
    pub fn bits_changed(&self) -> u32 {
        self.previous_state.hamming_distance(&self.new_state)
    }
}
