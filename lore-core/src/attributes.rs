//! Attribute scores and modifier derivation.
//!
//! Each actor carries six attribute scores in [1, 6]. The roll bonus derived
//! from a score is `max(0, value - 1)`: a score of 1 grants no bonus, a score
//! of 6 grants +5. The derivation is monotonic, non-negative, and recomputed
//! whenever the score changes — it is never stored back onto the record.

use crate::types::AttributeKey;
use serde::{Deserialize, Serialize};

/// Lowest legal attribute score.
pub const ATTRIBUTE_MIN: u8 = 1;
/// Highest legal attribute score.
pub const ATTRIBUTE_MAX: u8 = 6;

/// Derive the roll modifier for a single attribute score.
///
/// Scores below the floor contribute nothing; the schema layer upstream is
/// responsible for keeping stored values inside [1, 6].
#[must_use]
pub fn modifier(value: u8) -> i32 {
    i32::from(value).saturating_sub(1).max(0)
}

/// The six attribute scores of one actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeSet {
    scores: [u8; 6],
}

impl Default for AttributeSet {
    fn default() -> Self {
        Self {
            scores: [ATTRIBUTE_MIN; 6],
        }
    }
}

impl AttributeSet {
    /// Create a set with every score at the floor value.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current score for `key`.
    #[must_use]
    pub fn value(&self, key: AttributeKey) -> u8 {
        self.scores[Self::index(key)]
    }

    /// Set the score for `key`, clamped to [1, 6].
    pub fn set(&mut self, key: AttributeKey, value: u8) {
        self.scores[Self::index(key)] = value.clamp(ATTRIBUTE_MIN, ATTRIBUTE_MAX);
    }

    /// Builder-style setter used heavily in tests and content definitions.
    #[must_use]
    pub fn with(mut self, key: AttributeKey, value: u8) -> Self {
        self.set(key, value);
        self
    }

    /// Derived roll modifier for `key`.
    #[must_use]
    pub fn modifier(&self, key: AttributeKey) -> i32 {
        modifier(self.value(key))
    }

    /// Iterate all six (key, score) pairs in sheet order.
    pub fn iter(&self) -> impl Iterator<Item = (AttributeKey, u8)> + '_ {
        AttributeKey::ALL.iter().map(|&key| (key, self.value(key)))
    }

    fn index(key: AttributeKey) -> usize {
        AttributeKey::ALL
            .iter()
            .position(|&k| k == key)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifier_is_value_minus_one() {
        for v in ATTRIBUTE_MIN..=ATTRIBUTE_MAX {
            assert_eq!(modifier(v), i32::from(v) - 1);
        }
        assert_eq!(modifier(1), 0);
        assert_eq!(modifier(6), 5);
    }

    #[test]
    fn modifier_never_negative() {
        assert_eq!(modifier(0), 0);
    }

    #[test]
    fn set_clamps_out_of_range_scores() {
        let mut attrs = AttributeSet::new();
        attrs.set(AttributeKey::Mig, 9);
        assert_eq!(attrs.value(AttributeKey::Mig), ATTRIBUTE_MAX);
        attrs.set(AttributeKey::Mig, 0);
        assert_eq!(attrs.value(AttributeKey::Mig), ATTRIBUTE_MIN);
    }

    #[test]
    fn fresh_set_grants_no_bonuses() {
        let attrs = AttributeSet::new();
        for (key, _) in attrs.iter() {
            assert_eq!(attrs.modifier(key), 0);
        }
    }

    #[test]
    fn with_builder_sets_one_score() {
        let attrs = AttributeSet::new().with(AttributeKey::Ref, 4);
        assert_eq!(attrs.value(AttributeKey::Ref), 4);
        assert_eq!(attrs.modifier(AttributeKey::Ref), 3);
        assert_eq!(attrs.value(AttributeKey::Cha), 1);
    }
}
