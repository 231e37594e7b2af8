//! Analysis of the change required between two archetypes.

use serde::{Deserialize, Serialize};

use crate::archetype::Archetype;
use crate::axis::AxisSet;

/// Every `CATALYST_STRIDE`-th catalyst value is listed in an analysis.
pub const CATALYST_STRIDE: usize = 4;

/// One way to complete a required change: `impulse ⊕ catalyst = required`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalystOption {
    pub catalyst: Archetype,
    pub impulse: Archetype,
}

/// What it takes to move from `initial` to `result`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransmutationAnalysis {
    pub initial: Archetype,
    pub result: Archetype,
    /// `initial ⊕ result`: the combined impulse and catalyst needed.
    pub required_change: Archetype,
    pub bits_changed: u32,
    pub axis_changes: AxisSet,
    /// A sample of catalysts (every fourth value) with their matching impulse.
    pub possible_catalysts: Vec<CatalystOption>,
}

/// Analyze the transmutation from `initial` to `result`.
pub fn analyze(initial: Archetype, result: Archetype) -> TransmutationAnalysis {
    let required_change = initial ^ result;

    let possible_catalysts = Archetype::all()
        .step_by(CATALYST_STRIDE)
        .map(|catalyst| CatalystOption {
            catalyst,
            impulse: required_change ^ catalyst,
        })
        .collect();

    TransmutationAnalysis {
        initial,
        result,
        required_change,
        bits_changed: initial.hamming_distance(&result),
        axis_changes: initial.changed_axes(&result),
        possible_catalysts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archetype::{ASSEMBLY, PIONEER, STEADFAST};
    use crate::axis::Axis;

    #[test]
    fn test_analyze_steadfast_to_assembly() {
        let analysis = analyze(STEADFAST, ASSEMBLY);

        assert_eq!(analysis.required_change.bits(), "01 10 11");
        assert_eq!(analysis.bits_changed, 4);
        assert!(analysis.axis_changes.contains(Axis::Who));
        assert!(analysis.axis_changes.contains(Axis::Where));
        assert!(analysis.axis_changes.contains(Axis::When));
    }

    #[test]
    fn test_catalyst_options_complete_the_change() {
        let analysis = analyze(PIONEER, STEADFAST);

        assert_eq!(analysis.possible_catalysts.len(), 16);
        for option in &analysis.possible_catalysts {
            assert_eq!(option.impulse ^ option.catalyst, analysis.required_change);
            assert_eq!(PIONEER.transmute(option.impulse, option.catalyst), STEADFAST);
        }
    }

    #[test]
    fn test_analyze_identity() {
        let analysis = analyze(PIONEER, PIONEER);
        assert!(analysis.required_change.is_zero());
        assert_eq!(analysis.bits_changed, 0);
        assert!(analysis.axis_changes.is_empty());
    }
}
