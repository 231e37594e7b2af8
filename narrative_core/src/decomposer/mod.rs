//! Change Decomposer - splits a required XOR delta into plot-beat steps.
//!
//! Every branch picks impulses freely and solves the catalyst algebraically
//! (`catalyst = sub_delta ⊕ impulse`), so the cumulative XOR of the returned
//! steps always equals the requested delta.

use archetype_algebra::Archetype;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{NarrativeError, Result};
use crate::step::TransmutationStep;

/// Configuration for change decomposition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecomposerConfig {
    /// Deltas with a value below this stay a single step.
    pub small_delta_threshold: u8,

    /// Upper bound applied to the requested complexity.
    pub max_complexity: usize,

    /// Smallest value of the freely chosen first sub-delta.
    pub split_min: u8,

    /// Largest value of the freely chosen first sub-delta.
    pub split_max: u8,
}

impl Default for DecomposerConfig {
    fn default() -> Self {
        Self {
            small_delta_threshold: 8,
            max_complexity: 5,
            split_min: 1,
            split_max: 15,
        }
    }
}

impl DecomposerConfig {
    /// Check the configured bounds.
    pub fn validate(&self) -> Result<()> {
        if !(1..=64).contains(&self.small_delta_threshold) {
            return Err(NarrativeError::Config(format!(
                "decomposer.small_delta_threshold must be in 1..=64, got {}",
                self.small_delta_threshold
            )));
        }
        if self.max_complexity == 0 {
            return Err(NarrativeError::Config(
                "decomposer.max_complexity must be at least 1".to_string(),
            ));
        }
        if self.split_min == 0 || self.split_min > self.split_max || self.split_max > 63 {
            return Err(NarrativeError::Config(format!(
                "decomposer split range must satisfy 1 <= min <= max <= 63, got {}..={}",
                self.split_min, self.split_max
            )));
        }
        Ok(())
    }

    /// The split range clamped to `1..=63`, with inverted bounds swapped.
    pub fn split_range(&self) -> (u8, u8) {
        let lo = self.split_min.min(self.split_max).clamp(1, 63);
        let hi = self.split_min.max(self.split_max).clamp(1, 63);
        (lo, hi)
    }
}

/// Which branch of the decomposition policy applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecompositionStrategy {
    /// One step with a uniformly random impulse.
    Single,
    /// One step with an impulse no larger than the delta.
    Small,
    /// Two steps over a freely split delta.
    Split,
}

/// Strategy that turns a required change into `(impulse, catalyst)` steps.
pub trait Decompose {
    /// Produce steps whose cumulative XOR equals `delta`.
    fn decompose<R: Rng + ?Sized>(
        &self,
        delta: Archetype,
        complexity: usize,
        rng: &mut R,
    ) -> Vec<TransmutationStep>;
}

/// The default decomposition policy.
#[derive(Debug, Clone, Default)]
pub struct ChangeDecomposer {
    config: DecomposerConfig,
}

impl ChangeDecomposer {
    /// Create a decomposer with the given configuration.
    pub fn new(config: DecomposerConfig) -> Self {
        Self { config }
    }

    /// Create a decomposer with default configuration.
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// The active decomposition configuration.
    pub fn config(&self) -> &DecomposerConfig {
        &self.config
    }

    /// The branch taken for a given delta and complexity.
    pub fn strategy(&self, delta: Archetype, complexity: usize) -> DecompositionStrategy {
        if complexity <= 1 || delta.is_zero() {
            DecompositionStrategy::Single
        } else if delta.value() < self.config.small_delta_threshold {
            DecompositionStrategy::Small
        } else {
            DecompositionStrategy::Split
        }
    }

    /// Decompose using the thread-local RNG.
    pub fn decompose_random(&self, delta: Archetype, complexity: usize) -> Vec<TransmutationStep> {
        self.decompose(delta, complexity, &mut rand::thread_rng())
    }

    /// Complete a sub-delta with a random impulse from `0..=impulse_max`.
    fn complete<R: Rng + ?Sized>(
        sub_delta: Archetype,
        impulse_max: u8,
        rng: &mut R,
    ) -> TransmutationStep {
        let impulse = Archetype::from_low_bits(rng.gen_range(0..=impulse_max));
        TransmutationStep::new(impulse, sub_delta ^ impulse)
    }
}

impl Decompose for ChangeDecomposer {
    fn decompose<R: Rng + ?Sized>(
        &self,
        delta: Archetype,
        complexity: usize,
        rng: &mut R,
    ) -> Vec<TransmutationStep> {
        let strategy = self.strategy(delta, complexity);
        debug!(
            "Decomposing {} at complexity {} with {:?}",
            delta.bits(),
            complexity,
            strategy
        );

        match strategy {
            DecompositionStrategy::Single => vec![Self::complete(delta, 63, rng)],
            DecompositionStrategy::Small => vec![Self::complete(delta, delta.value(), rng)],
            DecompositionStrategy::Split => {
                let (lo, hi) = self.config.split_range();
                let first = Archetype::from_low_bits(rng.gen_range(lo..=hi));
                let second = delta ^ first;

                let mut steps = vec![
                    Self::complete(first, 63, rng),
                    Self::complete(second, 63, rng),
                ];
                steps.truncate(complexity);
                steps
            }
        }
    }
}
