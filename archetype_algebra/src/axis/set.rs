//! A small set of axes, used to describe which axes a transition changed.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Axis;

/// Set of axes, stored as a 3-bit mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Axis>", into = "Vec<Axis>")]
pub struct AxisSet(u8);

impl AxisSet {
    /// The empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// All three axes.
    pub fn full() -> Self {
        Axis::ALL.into_iter().collect()
    }

    fn bit(axis: Axis) -> u8 {
        match axis {
            Axis::Who => 0b100,
            Axis::Where => 0b010,
            Axis::When => 0b001,
        }
    }

    /// Add an axis to the set.
    pub fn insert(&mut self, axis: Axis) {
        self.0 |= Self::bit(axis);
    }

    /// Check if an axis is in the set.
    pub fn contains(&self, axis: Axis) -> bool {
        self.0 & Self::bit(axis) != 0
    }

    /// Number of axes in the set.
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Check if no axis is in the set.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Iterate the members in axis order (WHO, WHERE, WHEN).
    pub fn iter(&self) -> impl Iterator<Item = Axis> + '_ {
        Axis::ALL.into_iter().filter(|axis| self.contains(*axis))
    }

    /// Comma-joined labels (`"WHO,WHEN"`), or `"None"` for the empty set.
    pub fn key(&self) -> String {
        if self.is_empty() {
            return "None".to_string();
        }
        self.iter().map(|a| a.label()).collect::<Vec<_>>().join(",")
    }
}

impl FromIterator<Axis> for AxisSet {
    fn from_iter<I: IntoIterator<Item = Axis>>(iter: I) -> Self {
        let mut set = AxisSet::new();
        for axis in iter {
            set.insert(axis);
        }
        set
    }
}

impl From<Vec<Axis>> for AxisSet {
    fn from(axes: Vec<Axis>) -> Self {
        axes.into_iter().collect()
    }
}

impl From<AxisSet> for Vec<Axis> {
    fn from(set: AxisSet) -> Self {
        set.iter().collect()
    }
}

impl fmt::Display for AxisSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_contains() {
        let mut set = AxisSet::new();
        assert!(set.is_empty());

        set.insert(Axis::When);
        set.insert(Axis::Who);
        set.insert(Axis::Who);

        assert_eq!(set.len(), 2);
        assert!(set.contains(Axis::Who));
        assert!(!set.contains(Axis::Where));
    }

    #[test]
    fn test_key_order() {
        let set: AxisSet = vec![Axis::When, Axis::Who].into();
        assert_eq!(set.key(), "WHO,WHEN");
        assert_eq!(AxisSet::new().key(), "None");
        assert_eq!(AxisSet::full().key(), "WHO,WHERE,WHEN");
    }

    #[test]
    fn test_serde_as_list() {
        let set: AxisSet = vec![Axis::Where].into();
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, "[\"WHERE\"]");

        let parsed: AxisSet = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, set);
    }
}
