//! Canonical names of the 64 archetypes, indexed by 6-bit value.

/// Returned by lookups outside the table.
pub const UNKNOWN_NAME: &str = "Unknown";

/// `ARCHETYPE_NAMES[v]` is the canonical name of the archetype with value `v`.
pub const ARCHETYPE_NAMES: [&str; 64] = [
    // 00 xx xx - THEY
    "Zero",        // 00 00 00
    "Anchorite",   // 00 00 01
    "Oracle",      // 00 00 10
    "Spectator",   // 00 00 11
    "Judge",       // 00 01 00
    "Custodian",   // 00 01 01
    "Architect",   // 00 01 10
    "Legislator",  // 00 01 11
    "Ancestor",    // 00 10 00
    "Chronicler",  // 00 10 01
    "Ghost",       // 00 10 10
    "Harbinger",   // 00 10 11
    "Shadow",      // 00 11 00
    "Scapegoat",   // 00 11 01
    "Trickster",   // 00 11 10
    "Carnival",    // 00 11 11
    // 01 xx xx - YOU
    "Hermit",      // 01 00 00
    "Beloved",     // 01 00 01
    "Teacher",     // 01 00 10
    "Confessor",   // 01 00 11
    "Scribe",      // 01 01 00
    "Mediator",    // 01 01 01
    "Apprentice",  // 01 01 10
    "Interpreter", // 01 01 11
    "Mentor",      // 01 10 00
    "Witness",     // 01 10 01
    "Guide",       // 01 10 10
    "Prophet",     // 01 10 11
    "Mourner",     // 01 11 00
    "Lover",       // 01 11 01
    "Muse",        // 01 11 10
    "Celebrant",   // 01 11 11
    // 10 xx xx - ME
    "Recluse",     // 10 00 00
    "Philosopher", // 10 00 01
    "Seeker",      // 10 00 10
    "Sage",        // 10 00 11
    "Artisan",     // 10 01 00
    "Critic",      // 10 01 01
    "Creator",     // 10 01 10
    "Master",      // 10 01 11
    "Heir",        // 10 10 00
    "Guardian",    // 10 10 01
    "Pioneer",     // 10 10 10
    "Hero",        // 10 10 11
    "Steadfast",   // 10 11 00
    "Martyr",      // 10 11 01
    "Wanderer",    // 10 11 10
    "Ecstatic",    // 10 11 11
    // 11 xx xx - WE
    "Congregation", // 11 00 00
    "Synod",        // 11 00 01
    "Academy",      // 11 00 10
    "Pantheon",     // 11 00 11
    "Guild",        // 11 01 00
    "Council",      // 11 01 01
    "Workshop",     // 11 01 10
    "Assembly",     // 11 01 11
    "Tribe",        // 11 10 00
    "Chorus",       // 11 10 01
    "Caravan",      // 11 10 10
    "Nation",       // 11 10 11
    "Sanctuary",    // 11 11 00
    "Celebration",  // 11 11 01
    "Festival",     // 11 11 10
    "Conciliar",    // 11 11 11
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_are_distinct() {
        let unique: HashSet<_> = ARCHETYPE_NAMES.iter().map(|n| n.to_lowercase()).collect();
        assert_eq!(unique.len(), 64);
        assert!(!unique.contains(&UNKNOWN_NAME.to_lowercase()));
    }
}
