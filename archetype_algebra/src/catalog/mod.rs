//! Archetype catalog - named lookup and descriptive metadata for all 64 archetypes.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::debug;

use crate::archetype::Archetype;
use crate::axis::AxisValue;

/// Hand-written descriptions for a few well-known archetypes.
const DESCRIPTION_OVERRIDES: [(&str, &str); 6] = [
    (
        "Pioneer",
        "The one who sets out first. Unburdened by experience, driven by vision.",
    ),
    (
        "Steadfast",
        "One who has endured loss and frozen in their suffering.",
    ),
    (
        "Ghost",
        "That which comes from outside. The unexpected visitor.",
    ),
    (
        "Beloved",
        "The one who is loved and who therefore can speak truth.",
    ),
    (
        "Council",
        "The new community born from transformed suffering.",
    ),
    (
        "Zero",
        "The primordial state before manifestation. Pure potential.",
    ),
];

static GLOBAL_CATALOG: LazyLock<ArchetypeCatalog> = LazyLock::new(ArchetypeCatalog::new);

/// Descriptive metadata for one archetype.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchetypeInfo {
    pub archetype: Archetype,
    pub name: String,
    /// Comma-joined qualities of the three axis values.
    pub key_qualities: String,
    pub description: String,
}

impl ArchetypeInfo {
    /// Derive the metadata of an archetype from its axis values.
    pub fn describe(archetype: Archetype) -> Self {
        let key_qualities = key_qualities(archetype);
        let name = archetype.name();
        let description = describe(name, &key_qualities);

        Self {
            archetype,
            name: name.to_string(),
            key_qualities,
            description,
        }
    }
}

/// Qualities of the three axis values, WHO first.
pub fn key_qualities(archetype: Archetype) -> String {
    format!(
        "{}, {}, {}",
        archetype.who().qualities(),
        archetype.where_().qualities(),
        archetype.when().qualities()
    )
}

/// Description for a name, falling back to a generic sentence built from the qualities.
pub fn describe(name: &str, key_qualities: &str) -> String {
    DESCRIPTION_OVERRIDES
        .iter()
        .find(|(known, _)| *known == name)
        .map(|(_, text)| text.to_string())
        .unwrap_or_else(|| format!("A being embodying {}.", key_qualities))
}

/// The 64 archetypes with names and metadata.
#[derive(Debug, Clone)]
pub struct ArchetypeCatalog {
    /// Entries indexed by archetype value.
    entries: Vec<ArchetypeInfo>,

    /// Index: lower-cased name -> archetype.
    by_name: HashMap<String, Archetype>,
}

impl ArchetypeCatalog {
    /// Build the catalog from the canonical name table.
    pub fn new() -> Self {
        let entries: Vec<_> = Archetype::all().map(ArchetypeInfo::describe).collect();
        let by_name = entries
            .iter()
            .map(|info| (info.name.to_lowercase(), info.archetype))
            .collect();

        debug!("Built archetype catalog with {} entries", entries.len());

        Self { entries, by_name }
    }

    /// The process-wide catalog, built on first use.
    pub fn global() -> &'static ArchetypeCatalog {
        &GLOBAL_CATALOG
    }

    /// Find an archetype by exact, case-insensitive name.
    pub fn by_name(&self, name: &str) -> Option<Archetype> {
        self.by_name.get(&name.to_lowercase()).copied()
    }

    /// All 64 archetypes in value order.
    pub fn all(&self) -> impl Iterator<Item = Archetype> + '_ {
        self.entries.iter().map(|info| info.archetype)
    }

    /// Metadata for every archetype, in value order.
    pub fn all_info(&self) -> &[ArchetypeInfo] {
        &self.entries
    }

    /// Metadata for one archetype.
    pub fn info(&self, archetype: Archetype) -> &ArchetypeInfo {
        &self.entries[archetype.value() as usize]
    }

    /// Number of archetypes in the catalog.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pick an archetype uniformly at random.
    pub fn random(&self) -> Archetype {
        self.random_with_rng(&mut rand::thread_rng())
    }

    /// Pick an archetype uniformly with a specific RNG (useful for testing).
    pub fn random_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Archetype {
        self.entries[rng.gen_range(0..self.entries.len())].archetype
    }
}

impl Default for ArchetypeCatalog {
    fn default() -> Self {
        Self::new()
    }
}
