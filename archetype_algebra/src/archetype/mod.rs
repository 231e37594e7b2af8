//! Archetype definitions - the 64 six-bit states and their XOR algebra.

mod names;

pub use names::*;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitXor, BitXorAssign};
use std::str::FromStr;

use crate::axis::{parse_code, Axis, AxisSet, AxisValue, When, Where, Who};
use crate::error::{AlgebraError, Result};

/// A 6-bit archetypal state: WHO in the high bits, WHERE in the middle, WHEN low.
///
/// Archetypes are plain values. Equality, ordering and hashing all follow the
/// 6-bit value, so they work as map keys and in visited sets. XOR is the only
/// way to derive one archetype from others and forms a group: commutative,
/// associative, identity [`ZERO`], and every element is its own inverse.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Archetype(u8);

/// 00 00 00 - the identity of the algebra.
pub const ZERO: Archetype = Archetype(0b00_00_00);
/// 10 10 10 - ME, EAST, SPRING.
pub const PIONEER: Archetype = Archetype(0b10_10_10);
/// 11 11 11 - WE, SOUTH, SUMMER.
pub const CONCILIAR: Archetype = Archetype(0b11_11_11);
/// 01 01 01 - YOU, WEST, AUTUMN.
pub const MEDIATOR: Archetype = Archetype(0b01_01_01);
/// 01 01 01 - the fourth pillar as the formulas call it. The name table
/// calls this value "Mediator".
pub const CONFESSOR: Archetype = MEDIATOR;
/// 10 11 00 - ME, SOUTH, WINTER.
pub const STEADFAST: Archetype = Archetype(0b10_11_00);
/// 00 10 10 - THEY, EAST, SPRING.
pub const GHOST: Archetype = Archetype(0b00_10_10);
/// 01 00 01 - YOU, NORTH, AUTUMN.
pub const BELOVED: Archetype = Archetype(0b01_00_01);
/// 11 01 11 - WE, WEST, SUMMER. The result of the Philosopher's Stone
/// (`STEADFAST ⊕ GHOST ⊕ BELOVED`). The name table calls this value
/// "Assembly"; the archetype named "Council" is `11 01 01`.
pub const COUNCIL: Archetype = Archetype(0b11_01_11);
/// 11 01 11 - the name-table spelling of [`COUNCIL`].
pub const ASSEMBLY: Archetype = COUNCIL;

impl Archetype {
    /// Number of distinct archetypes.
    pub const COUNT: usize = 64;

    /// Build an archetype from its three axis values.
    pub fn new(who: Who, place: Where, season: When) -> Self {
        Self((who.code() << 4) | (place.code() << 2) | season.code())
    }

    /// Build an archetype from three axis labels such as `("ME", "EAST", "SPRING")`.
    ///
    /// Labels are case-insensitive; an unknown label fails with
    /// [`AlgebraError::InvalidAxisValue`].
    pub fn from_labels(who: &str, place: &str, season: &str) -> Result<Self> {
        Ok(Self::new(who.parse()?, place.parse()?, season.parse()?))
    }

    /// Parse a 6-bit string, with or without separators (`"10 10 10"`, `"101010"`).
    ///
    /// Whitespace, `_` and `-` are stripped before the length check.
    pub fn from_bits(bits: &str) -> Result<Self> {
        let clean: String = bits
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .collect();

        let count = clean.chars().count();
        if count != 6 {
            return Err(AlgebraError::MalformedBits {
                input: bits.to_string(),
                reason: format!("expected 6 bits, got {}", count),
            });
        }

        if let Some(bad) = clean.chars().find(|c| *c != '0' && *c != '1') {
            return Err(AlgebraError::MalformedBits {
                input: bits.to_string(),
                reason: format!("unexpected character {:?}", bad),
            });
        }

        let who = Who::from_code(parse_code(Axis::Who, &clean[0..2])?)?;
        let place = Where::from_code(parse_code(Axis::Where, &clean[2..4])?)?;
        let season = When::from_code(parse_code(Axis::When, &clean[4..6])?)?;

        Ok(Self::new(who, place, season))
    }

    /// Build an archetype from an integer in `0..=63`.
    pub fn from_int(value: i64) -> Result<Self> {
        if !(0..=63).contains(&value) {
            return Err(AlgebraError::OutOfRange(value));
        }
        Ok(Self(value as u8))
    }

    /// Build from the low six bits of `value`; higher bits are discarded.
    ///
    /// Total over `u8`, for callers that already work in the 6-bit space.
    pub const fn from_low_bits(value: u8) -> Self {
        Self(value & 0b11_11_11)
    }

    /// Iterate all 64 archetypes in value order.
    pub fn all() -> impl Iterator<Item = Archetype> {
        (0..Self::COUNT as u8).map(Archetype)
    }

    /// The WHO axis value (high bits).
    pub fn who(&self) -> Who {
        Self::axis_value(self.0, Axis::Who)
    }

    /// The WHERE axis value (middle bits).
    pub fn where_(&self) -> Where {
        Self::axis_value(self.0, Axis::Where)
    }

    /// The WHEN axis value (low bits).
    pub fn when(&self) -> When {
        Self::axis_value(self.0, Axis::When)
    }

    fn axis_value<V: AxisValue>(value: u8, axis: Axis) -> V {
        // Every 2-bit code is assigned on every axis.
        match V::from_code(axis.code_of(value)) {
            Ok(v) => v,
            Err(_) => unreachable!("2-bit code without an axis value"),
        }
    }

    /// The 2-bit code of one axis.
    pub fn code(&self, axis: Axis) -> u8 {
        axis.code_of(self.0)
    }

    /// Integer value in `0..=63`.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Spaced bit string, e.g. `"10 10 10"`.
    pub fn bits(&self) -> String {
        format!(
            "{:02b} {:02b} {:02b}",
            self.code(Axis::Who),
            self.code(Axis::Where),
            self.code(Axis::When)
        )
    }

    /// Compact bit string, e.g. `"101010"`.
    pub fn binary(&self) -> String {
        format!("{:06b}", self.0)
    }

    /// Canonical name from the 64-entry table.
    pub fn name(&self) -> &'static str {
        ARCHETYPE_NAMES
            .get(self.0 as usize)
            .copied()
            .unwrap_or(UNKNOWN_NAME)
    }

    /// Apply one transmutation step: `self ⊕ impulse ⊕ catalyst`.
    pub fn transmute(self, impulse: Archetype, catalyst: Archetype) -> Archetype {
        self ^ impulse ^ catalyst
    }

    /// Number of differing bits between the two 6-bit values.
    pub fn hamming_distance(&self, other: &Archetype) -> u32 {
        (self.0 ^ other.0).count_ones()
    }

    /// Axes whose codes differ between `self` and `other`.
    pub fn changed_axes(&self, other: &Archetype) -> AxisSet {
        Axis::ALL
            .into_iter()
            .filter(|axis| self.code(*axis) != other.code(*axis))
            .collect()
    }

    /// Check if this is the identity [`ZERO`].
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl BitXor for Archetype {
    type Output = Archetype;

    fn bitxor(self, rhs: Archetype) -> Archetype {
        Archetype(self.0 ^ rhs.0)
    }
}

impl BitXorAssign for Archetype {
    fn bitxor_assign(&mut self, rhs: Archetype) {
        self.0 ^= rhs.0;
    }
}

impl Default for Archetype {
    fn default() -> Self {
        ZERO
    }
}

impl FromStr for Archetype {
    type Err = AlgebraError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_bits(s)
    }
}

impl TryFrom<String> for Archetype {
    type Error = AlgebraError;

    fn try_from(bits: String) -> Result<Self> {
        Self::from_bits(&bits)
    }
}

impl From<Archetype> for String {
    fn from(archetype: Archetype) -> Self {
        archetype.bits()
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.who(), self.where_(), self.when())
    }
}

impl fmt::Debug for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Archetype({} {})", self.bits(), self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_creation_methods_agree() {
        let direct = Archetype::new(Who::Me, Where::East, When::Spring);
        let from_bits = Archetype::from_bits("10 10 10").unwrap();
        let from_int = Archetype::from_int(42).unwrap();
        let from_labels = Archetype::from_labels("me", "East", "SPRING").unwrap();

        assert_eq!(direct, from_bits);
        assert_eq!(from_bits, from_int);
        assert_eq!(from_int, from_labels);
        assert_eq!(direct, PIONEER);
    }

    #[test]
    fn test_accessors() {
        let a = PIONEER;
        assert_eq!(a.who(), Who::Me);
        assert_eq!(a.where_(), Where::East);
        assert_eq!(a.when(), When::Spring);
        assert_eq!(a.bits(), "10 10 10");
        assert_eq!(a.binary(), "101010");
        assert_eq!(a.value(), 42);
        assert_eq!(a.name(), "Pioneer");
        assert_eq!(a.to_string(), "[ME, EAST, SPRING]");
    }

    #[test]
    fn test_from_bits_separators() {
        assert_eq!(Archetype::from_bits("101100").unwrap(), STEADFAST);
        assert_eq!(Archetype::from_bits("10 11 00").unwrap(), STEADFAST);
        assert_eq!(Archetype::from_bits("10_11_00").unwrap(), STEADFAST);
        assert_eq!(Archetype::from_bits(" 10-11-00 ").unwrap(), STEADFAST);
    }

    #[test]
    fn test_malformed_bits() {
        for input in ["10101", "1010101", "", "10 10 1"] {
            assert!(
                matches!(
                    Archetype::from_bits(input),
                    Err(AlgebraError::MalformedBits { .. })
                ),
                "{:?} should be malformed",
                input
            );
        }

        let err = Archetype::from_bits("10201a").unwrap_err();
        assert!(matches!(err, AlgebraError::MalformedBits { ref input, .. } if input == "10201a"));
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(Archetype::from_int(64), Err(AlgebraError::OutOfRange(64)));
        assert_eq!(Archetype::from_int(-1), Err(AlgebraError::OutOfRange(-1)));
        assert!(Archetype::from_int(0).is_ok());
        assert!(Archetype::from_int(63).is_ok());
    }

    #[test]
    fn test_invalid_labels() {
        let err = Archetype::from_labels("ME", "UP", "SPRING").unwrap_err();
        assert_eq!(
            err,
            AlgebraError::InvalidAxisValue {
                axis: Axis::Where,
                value: "UP".to_string()
            }
        );
    }

    #[test]
    fn test_round_trip_all() {
        for a in Archetype::all() {
            assert_eq!(Archetype::from_bits(&a.bits()).unwrap(), a);
            assert_eq!(Archetype::from_bits(&a.binary()).unwrap(), a);
            assert_eq!(Archetype::from_int(a.value() as i64).unwrap(), a);
            assert_eq!(Archetype::new(a.who(), a.where_(), a.when()), a);
        }
    }

    #[test]
    fn test_names_total_and_distinct() {
        let names: HashSet<_> = Archetype::all().map(|a| a.name()).collect();
        assert_eq!(names.len(), 64);
        assert!(!names.contains(UNKNOWN_NAME));
    }

    #[test]
    fn test_named_constants() {
        assert_eq!(ZERO.name(), "Zero");
        assert_eq!(PIONEER.name(), "Pioneer");
        assert_eq!(CONCILIAR.name(), "Conciliar");
        assert_eq!(MEDIATOR.name(), "Mediator");
        assert_eq!(STEADFAST.name(), "Steadfast");
        assert_eq!(GHOST.name(), "Ghost");
        assert_eq!(BELOVED.name(), "Beloved");
        assert_eq!(ASSEMBLY.name(), "Assembly");
        assert_eq!(COUNCIL.bits(), "11 01 11");
        assert_eq!(COUNCIL, ASSEMBLY);
        assert_eq!(CONFESSOR.bits(), "01 01 01");
        assert_eq!(CONFESSOR, MEDIATOR);
        assert_eq!(Archetype::from_bits("11 01 01").unwrap().name(), "Council");
    }

    #[test]
    fn test_xor_identity_and_inverse() {
        for a in Archetype::all() {
            assert_eq!(a ^ a, ZERO);
            assert_eq!(a ^ ZERO, a);
            assert_eq!(ZERO ^ a, a);
            assert_eq!(a ^ a ^ a, a);
        }
    }

    #[test]
    fn test_xor_commutative_and_associative() {
        for a in Archetype::all() {
            for b in Archetype::all() {
                assert_eq!(a ^ b, b ^ a);
                for c in Archetype::all() {
                    assert_eq!((a ^ b) ^ c, a ^ (b ^ c));
                }
            }
        }
    }

    #[test]
    fn test_xor_reversible_for_every_triple() {
        for a in Archetype::all() {
            for b in Archetype::all() {
                for c in Archetype::all() {
                    let d = a ^ b ^ c;
                    assert_eq!(d ^ b ^ c, a);
                }
            }
        }
    }

    #[test]
    fn test_four_pillars() {
        assert_eq!(PIONEER ^ CONCILIAR, MEDIATOR ^ ZERO);
        assert_eq!(PIONEER ^ MEDIATOR, CONCILIAR ^ ZERO);
        assert_eq!(PIONEER ^ ZERO, CONCILIAR ^ MEDIATOR);
    }

    #[test]
    fn test_philosopher_stone_identity() {
        let result = STEADFAST.transmute(GHOST, BELOVED);
        assert_eq!(result.bits(), "11 01 11");
        assert_eq!(result, ASSEMBLY);
        assert_eq!(STEADFAST ^ GHOST ^ BELOVED, COUNCIL);

        // Reversible: the same impulse and catalyst lead back
        assert_eq!(result ^ GHOST ^ BELOVED, STEADFAST);
    }

    #[test]
    fn test_xor_assign() {
        let mut state = STEADFAST;
        state ^= GHOST;
        state ^= BELOVED;
        assert_eq!(state, ASSEMBLY);
    }

    #[test]
    fn test_hamming_distance() {
        assert_eq!(PIONEER.hamming_distance(&PIONEER), 0);
        assert_eq!(PIONEER.hamming_distance(&STEADFAST), 2);
        assert_eq!(PIONEER.hamming_distance(&ASSEMBLY), 4);
        assert_eq!(ZERO.hamming_distance(&CONCILIAR), 6);
    }

    #[test]
    fn test_changed_axes() {
        let changed = STEADFAST.changed_axes(&ASSEMBLY);
        assert_eq!(changed.len(), 3);

        let changed = PIONEER.changed_axes(&Archetype::from_bits("10 10 01").unwrap());
        assert_eq!(changed.key(), "WHEN");

        assert!(PIONEER.changed_axes(&PIONEER).is_empty());
    }

    #[test]
    fn test_from_low_bits() {
        assert_eq!(Archetype::from_low_bits(42), PIONEER);
        assert_eq!(Archetype::from_low_bits(64 + 42), PIONEER);
    }

    #[test]
    fn test_hash_by_value() {
        let mut set = HashSet::new();
        set.insert(Archetype::from_bits("101010").unwrap());
        set.insert(PIONEER);
        set.insert(Archetype::from_int(42).unwrap());
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_serde_as_bits() {
        let json = serde_json::to_string(&STEADFAST).unwrap();
        assert_eq!(json, "\"10 11 00\"");

        let parsed: Archetype = serde_json::from_str("\"101100\"").unwrap();
        assert_eq!(parsed, STEADFAST);

        assert!(serde_json::from_str::<Archetype>("\"10110\"").is_err());
    }
}
