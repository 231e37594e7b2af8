//! Narrative Arc Assembler - turns a required state change into an ordered,
//! verified sequence of events.
//!
//! Assembly runs Decomposing → Walking → (Verified | FallbackApplied). There is
//! no retry: when the walked state misses the target, the events are replaced
//! by a single direct step carrying the whole required change.

mod event;

pub use event::*;

use archetype_algebra::{Archetype, TransmutationCatalog};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::NarrativeConfig;
use crate::decomposer::{ChangeDecomposer, Decompose, DecomposerConfig};
use crate::error::Result;
use crate::step::TransmutationStep;

/// Unique identifier for a generated arc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArcId(pub Uuid);

impl ArcId {
    /// Create a new random arc ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create an arc ID from a specific UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Create a nil/empty arc ID.
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }
}

impl Default for ArcId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ArcId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How assembly terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArcOutcome {
    /// The decomposed steps reached the target.
    Verified,
    /// The decomposed steps missed and a single direct step was substituted.
    FallbackApplied,
}

/// An ordered sequence of events from an initial to a final archetype.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NarrativeArc {
    pub id: ArcId,
    pub initial_state: Archetype,
    pub final_state: Archetype,
    pub events: Vec<Event>,
    pub outcome: ArcOutcome,
}

impl NarrativeArc {
    /// Re-apply every event's impulse and catalyst from `initial_state`.
    pub fn replay(&self) -> Archetype {
        self.events
            .iter()
            .fold(self.initial_state, |state, event| {
                state.transmute(event.impulse, event.catalyst)
            })
    }

    /// Whether replaying the events lands on `final_state`.
    pub fn is_complete(&self) -> bool {
        self.replay() == self.final_state
    }

    /// Largest single-event change, as a fraction of the 6 bits.
    pub fn dramatic_tension(&self) -> f32 {
        self.events
            .iter()
            .map(|event| event.bits_changed())
            .max()
            .unwrap_or(0) as f32
            / 6.0
    }

    /// Number of events in the arc.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the arc has no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Pretty-printed JSON for downstream renderers.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse an arc previously produced by [`NarrativeArc::to_json`].
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Builds narrative arcs from a decomposition strategy.
#[derive(Debug, Clone)]
pub struct ArcAssembler<D = ChangeDecomposer> {
    decomposer: D,
    max_complexity: usize,
}

impl ArcAssembler<ChangeDecomposer> {
    /// Create an assembler using the default decomposer with `config`.
    pub fn new(config: DecomposerConfig) -> Self {
        let max_complexity = config.max_complexity.max(1);
        Self {
            decomposer: ChangeDecomposer::new(config),
            max_complexity,
        }
    }

    /// Create an assembler with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(DecomposerConfig::default())
    }

    /// Create an assembler from validated engine configuration.
    pub fn from_config(config: &NarrativeConfig) -> Result<Self> {
        config.decomposer.validate()?;
        Ok(Self::new(config.decomposer.clone()))
    }
}

impl Default for ArcAssembler<ChangeDecomposer> {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl<D: Decompose> ArcAssembler<D> {
    /// Create an assembler around a custom decomposition strategy.
    pub fn with_decomposer(decomposer: D, max_complexity: usize) -> Self {
        Self {
            decomposer,
            max_complexity: max_complexity.max(1),
        }
    }

    /// The decomposition strategy in use.
    pub fn decomposer(&self) -> &D {
        &self.decomposer
    }

    /// Generate an arc using the thread-local RNG.
    pub fn generate_arc(
        &self,
        initial: Archetype,
        target: Archetype,
        complexity: usize,
    ) -> NarrativeArc {
        self.generate_arc_with_rng(initial, target, complexity, &mut rand::thread_rng())
    }

    /// Generate an arc from `initial` to `target` with an injected RNG.
    ///
    /// The returned arc always ends at `target`.
    pub fn generate_arc_with_rng<R: Rng + ?Sized>(
        &self,
        initial: Archetype,
        target: Archetype,
        complexity: usize,
        rng: &mut R,
    ) -> NarrativeArc {
        let required = initial ^ target;
        let complexity = complexity.clamp(1, self.max_complexity);

        let steps = self.decomposer.decompose(required, complexity, rng);
        let events = walk(initial, &steps);
        let reached = events.last().map_or(initial, |event| event.new_state);

        let (events, outcome) = if reached == target {
            (events, ArcOutcome::Verified)
        } else {
            warn!(
                "Decomposition reached {} instead of {}; applying direct change {}",
                reached.name(),
                target.name(),
                required.bits()
            );
            (
                walk(initial, &[TransmutationStep::direct(required)]),
                ArcOutcome::FallbackApplied,
            )
        };

        let arc = NarrativeArc {
            id: ArcId::new(),
            initial_state: initial,
            final_state: target,
            events,
            outcome,
        };

        info!(
            "Generated arc {} {} -> {} with {} events ({:?})",
            arc.id,
            initial.name(),
            target.name(),
            arc.events.len(),
            arc.outcome
        );
        arc
    }

    /// Generate an arc between the initial and result states of a canonical
    /// formula. Returns `None` for an unknown formula name.
    pub fn generate_arc_from_formula(&self, name: &str, complexity: usize) -> Option<NarrativeArc> {
        self.generate_arc_from_formula_with_rng(name, complexity, &mut rand::thread_rng())
    }

    /// Generate a formula arc with an injected RNG.
    pub fn generate_arc_from_formula_with_rng<R: Rng + ?Sized>(
        &self,
        name: &str,
        complexity: usize,
        rng: &mut R,
    ) -> Option<NarrativeArc> {
        let formula = TransmutationCatalog::global().find_by_name(name)?;
        debug!("Generating arc for formula {}", formula.name);
        Some(self.generate_arc_with_rng(formula.initial, formula.result, complexity, rng))
    }
}

/// Apply `steps` in order from `initial`, emitting one event per step.
fn walk(initial: Archetype, steps: &[TransmutationStep]) -> Vec<Event> {
    let mut state = initial;
    steps
        .iter()
        .enumerate()
        .map(|(index, step)| {
            let event = Event::from_step(index + 1, state, *step);
            state = event.new_state;
            event
        })
        .collect()
}
