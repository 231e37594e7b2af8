//! Transmutation catalog - the twelve verified master formulas.
//!
//! Every formula satisfies `initial ⊕ impulse ⊕ catalyst = result`. The check
//! runs once when a catalog is built; the process-wide catalog treats a failure
//! as fatal.

mod analysis;
mod formula;

pub use analysis::*;
pub use formula::*;

use std::collections::HashSet;
use std::sync::LazyLock;
use tracing::debug;

use crate::archetype::Archetype;
use crate::axis::{When, Where, Who};
use crate::error::{AlgebraError, Result};

static GLOBAL_TRANSMUTATIONS: LazyLock<TransmutationCatalog> = LazyLock::new(|| {
    TransmutationCatalog::canonical()
        .unwrap_or_else(|err| panic!("canonical transmutation catalog is corrupt: {}", err))
});

/// A validated set of transmutation formulas.
#[derive(Debug, Clone)]
pub struct TransmutationCatalog {
    formulas: Vec<TransmutationFormula>,
}

impl TransmutationCatalog {
    /// Build a catalog, rejecting any formula that fails its XOR identity and
    /// any duplicate name or `(initial, impulse, catalyst)` triple.
    pub fn from_formulas(formulas: Vec<TransmutationFormula>) -> Result<Self> {
        let mut names = HashSet::new();
        let mut triples = HashSet::new();

        for formula in &formulas {
            formula.check()?;

            if !names.insert(formula.name.to_lowercase()) {
                return Err(AlgebraError::DuplicateFormula(format!(
                    "name {:?} is used twice",
                    formula.name
                )));
            }
            if !triples.insert(formula.triple()) {
                return Err(AlgebraError::DuplicateFormula(format!(
                    "{:?} repeats an existing (initial, impulse, catalyst) triple",
                    formula.name
                )));
            }
        }

        debug!("Verified {} transmutation formulas", formulas.len());
        Ok(Self { formulas })
    }

    /// Build the twelve master formulas.
    pub fn canonical() -> Result<Self> {
        Self::from_formulas(canonical_formulas())
    }

    /// The process-wide canonical catalog, built and verified on first use.
    ///
    /// # Panics
    ///
    /// Panics if a canonical formula fails verification.
    pub fn global() -> &'static TransmutationCatalog {
        &GLOBAL_TRANSMUTATIONS
    }

    /// All formulas in insertion order.
    pub fn all(&self) -> &[TransmutationFormula] {
        &self.formulas
    }

    /// Number of formulas.
    pub fn len(&self) -> usize {
        self.formulas.len()
    }

    /// Whether the catalog holds no formulas.
    pub fn is_empty(&self) -> bool {
        self.formulas.is_empty()
    }

    /// Find a formula by exact, case-insensitive name.
    pub fn find_by_name(&self, name: &str) -> Option<&TransmutationFormula> {
        let wanted = name.to_lowercase();
        self.formulas.iter().find(|f| f.name.to_lowercase() == wanted)
    }

    /// All formulas leading from `initial` to `result`. Several may match.
    pub fn find_by_initial_and_result(
        &self,
        initial: Archetype,
        result: Archetype,
    ) -> Vec<&TransmutationFormula> {
        self.formulas
            .iter()
            .filter(|f| f.initial == initial && f.result == result)
            .collect()
    }

    /// All formulas ending in `result`.
    pub fn find_by_result(&self, result: Archetype) -> Vec<&TransmutationFormula> {
        self.formulas.iter().filter(|f| f.result == result).collect()
    }

    /// Re-check every formula's identity.
    pub fn verify_all(&self) -> bool {
        self.formulas.iter().all(TransmutationFormula::verify)
    }
}

fn formula(
    name: &str,
    initial: (Who, Where, When),
    impulse: (Who, Where, When),
    catalyst: (Who, Where, When),
    result: (Who, Where, When),
    description: &str,
) -> TransmutationFormula {
    let a = |(who, place, season): (Who, Where, When)| Archetype::new(who, place, season);
    TransmutationFormula::new(name, a(initial), a(impulse), a(catalyst), a(result))
        .with_description(description)
}

/// The twelve master formulas, built from literal axis triples.
pub fn canonical_formulas() -> Vec<TransmutationFormula> {
    use When::*;
    use Where::*;
    use Who::*;

    vec![
        formula(
            "Philosopher's Stone",
            (Me, South, Winter),   // 10 11 00
            (They, East, Spring),  // 00 10 10
            (You, North, Autumn),  // 01 00 01
            (We, West, Summer),    // 11 01 11
            "Personal longing becomes collective achievement",
        ),
        formula(
            "Hero's Journey",
            (Me, East, Spring),    // 10 10 10
            (They, South, Winter), // 00 11 00
            (We, West, Autumn),    // 11 01 01
            (You, North, Summer),  // 01 00 11
            "Innocence confronts shadow, returns with wisdom",
        ),
        formula(
            "Alchemical Marriage",
            (Me, East, Spring),    // 10 10 10
            (You, West, Autumn),   // 01 01 01
            (We, South, Summer),   // 11 11 11
            (They, North, Winter), // 00 00 00
            "Union of opposites returns to the source",
        ),
        formula(
            "Creative Process",
            (Me, North, Winter),   // 10 00 00
            (They, East, Spring),  // 00 10 10
            (You, South, Summer),  // 01 11 11
            (We, West, Autumn),    // 11 01 01
            "Solitude + inspiration + mastery = shared creation",
        ),
        formula(
            "Healing",
            (Me, West, Winter),    // 10 01 00
            (They, South, Summer), // 00 11 11
            (You, East, Spring),   // 01 10 10
            (We, North, Autumn),   // 11 00 01
            "Isolation + collective energy + mediator = integration",
        ),
        formula(
            "Revelation",
            (They, North, Winter), // 00 00 00
            (Me, East, Spring),    // 10 10 10
            (We, South, Summer),   // 11 11 11
            (You, West, Autumn),   // 01 01 01
            "From void, through seeking and communion, wisdom emerges",
        ),
        formula(
            "Power Transformation",
            (Me, South, Summer),   // 10 11 11
            (They, West, Autumn),  // 00 01 01
            (You, North, Spring),  // 01 00 10
            (We, East, Winter),    // 11 10 00
            "Individual power becomes collective guardianship",
        ),
        formula(
            "Dark Night",
            (We, South, Summer),   // 11 11 11
            (They, West, Autumn),  // 00 01 01
            (You, East, Winter),   // 01 10 00
            (Me, North, Spring),   // 10 00 10
            "Community joy, through crisis, retreats to potential",
        ),
        formula(
            "Awakening",
            (Me, North, Autumn),   // 10 00 01
            (They, South, Spring), // 00 11 10
            (We, East, Summer),    // 11 10 11
            (You, West, Winter),   // 01 01 00
            "Old patterns shattered by force become witness",
        ),
        formula(
            "Renewal",
            (They, North, Autumn), // 00 00 01
            (Me, South, Winter),   // 10 11 00
            (We, East, Spring),    // 11 10 10
            (You, West, Summer),   // 01 01 11
            "Unrealized possibilities + endurance = catharsis",
        ),
        formula(
            "Reconciliation",
            (Me, West, Autumn),    // 10 01 01
            (They, East, Summer),  // 00 10 11
            (You, North, Winter),  // 01 00 00
            (We, South, Spring),   // 11 11 10
            "Judgment + higher perspective + love = renewed union",
        ),
        formula(
            "Complete Transmutation",
            (Me, East, Spring),    // 10 10 10
            (We, South, Summer),   // 11 11 11
            (You, West, Autumn),   // 01 01 01
            (They, North, Winter), // 00 00 00
            "The three active pillars return to the source",
        ),
    ]
}
