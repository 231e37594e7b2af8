//! Path Finder - breadth-first search for transmutation paths between archetypes.
//!
//! The search runs over the 64-node graph whose edges are `(impulse, catalyst)`
//! pairs:
//! 1. **Grid**: Impulse and catalyst values are sampled with configurable strides
//! 2. **Expansion**: A state's successors are `state ⊕ impulse ⊕ catalyst`
//! 3. **Pruning**: Intermediate states are expanded once, at their minimum depth
//! 4. **Collection**: Every arrival at the target at minimum depth is a path
//!
//! With coarse strides the search is not exhaustive: a path may exist that the
//! sampled grid cannot express. An empty result means "none found", not "none exist".

use archetype_algebra::Archetype;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, VecDeque};
use tracing::debug;

use crate::config::NarrativeConfig;
use crate::error::{NarrativeError, Result};
use crate::step::{TransmutationPath, TransmutationStep};

/// Configuration for the path search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathFinderConfig {
    /// Maximum number of steps in a path.
    pub max_steps: usize,

    /// Stop once this many paths have been collected.
    pub max_paths: usize,

    /// Only every `impulse_stride`-th impulse value is tried.
    pub impulse_stride: usize,

    /// Only every `catalyst_stride`-th catalyst value is tried.
    pub catalyst_stride: usize,
}

impl Default for PathFinderConfig {
    fn default() -> Self {
        Self {
            max_steps: 3,
            max_paths: 10,
            impulse_stride: 8,
            catalyst_stride: 1,
        }
    }
}

impl PathFinderConfig {
    /// Coarse 8x8 grid. Only the WHO and upper WHERE bits can change.
    pub fn sampled() -> Self {
        Self {
            catalyst_stride: 8,
            ..Self::default()
        }
    }

    /// Full 64x64 grid.
    pub fn exhaustive() -> Self {
        Self {
            impulse_stride: 1,
            catalyst_stride: 1,
            ..Self::default()
        }
    }

    /// Check the configured bounds.
    pub fn validate(&self) -> Result<()> {
        if self.max_paths == 0 {
            return Err(NarrativeError::Config(
                "path_finder.max_paths must be at least 1".to_string(),
            ));
        }
        for (field, stride) in [
            ("impulse_stride", self.impulse_stride),
            ("catalyst_stride", self.catalyst_stride),
        ] {
            if !(1..=Archetype::COUNT).contains(&stride) {
                return Err(NarrativeError::Config(format!(
                    "path_finder.{} must be in 1..=64, got {}",
                    field, stride
                )));
            }
        }
        Ok(())
    }
}

/// Bounded breadth-first search over archetype states.
#[derive(Debug, Clone, Default)]
pub struct PathFinder {
    config: PathFinderConfig,
}

impl PathFinder {
    /// Create a path finder with the given configuration.
    pub fn new(config: PathFinderConfig) -> Self {
        Self { config }
    }

    /// Create a path finder with default configuration.
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Create a path finder from validated engine configuration.
    pub fn from_config(config: &NarrativeConfig) -> Result<Self> {
        config.path_finder.validate()?;
        Ok(Self::new(config.path_finder.clone()))
    }

    /// The active search configuration.
    pub fn config(&self) -> &PathFinderConfig {
        &self.config
    }

    /// The sampled `(impulse, catalyst)` pairs tried from every state.
    pub fn grid(&self) -> Vec<TransmutationStep> {
        let impulse_stride = self.config.impulse_stride.max(1);
        let catalyst_stride = self.config.catalyst_stride.max(1);

        Archetype::all()
            .step_by(impulse_stride)
            .flat_map(|impulse| {
                Archetype::all()
                    .step_by(catalyst_stride)
                    .map(move |catalyst| TransmutationStep::new(impulse, catalyst))
            })
            .collect()
    }

    /// Find paths from `start` to `end` within the configured step bound.
    pub fn find_paths(&self, start: Archetype, end: Archetype) -> Vec<TransmutationPath> {
        self.find_paths_within(start, end, self.config.max_steps)
    }

    /// Find paths from `start` to `end` using at most `max_steps` steps.
    ///
    /// When `start == end` the zero-length path is always the first result.
    /// Returns an empty list when nothing is found within the bound.
    pub fn find_paths_within(
        &self,
        start: Archetype,
        end: Archetype,
        max_steps: usize,
    ) -> Vec<TransmutationPath> {
        let max_paths = self.config.max_paths.max(1);
        let grid = self.grid();

        debug!(
            "Searching paths {} -> {} within {} steps over {} pairs",
            start.name(),
            end.name(),
            max_steps,
            grid.len()
        );

        let mut paths = Vec::new();
        let mut best_depth: HashMap<Archetype, usize> = HashMap::new();
        let mut queue: VecDeque<(Archetype, Vec<TransmutationStep>)> = VecDeque::new();

        best_depth.insert(start, 0);
        queue.push_back((start, Vec::new()));

        while let Some((state, steps)) = queue.pop_front() {
            if state == end {
                paths.push(TransmutationPath::new(steps));
                if paths.len() >= max_paths {
                    break;
                }
                continue;
            }

            if steps.len() >= max_steps {
                continue;
            }

            let depth = steps.len() + 1;
            for step in &grid {
                let next = step.apply(state);

                // The target may be re-entered at its minimum depth so that
                // every shortest path is reported; other states only once.
                let admit = match best_depth.get(&next) {
                    None => true,
                    Some(&known) => next == end && depth <= known,
                };
                if !admit {
                    continue;
                }

                best_depth.insert(next, depth);
                let mut next_steps = steps.clone();
                next_steps.push(*step);
                queue.push_back((next, next_steps));
            }
        }

        debug!("Found {} paths {} -> {}", paths.len(), start.name(), end.name());
        paths
    }
}
