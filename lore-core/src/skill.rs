//! Skill records and derived roll values.
//!
//! A skill contributes two things to a roll: a base dice pool sized by its
//! rank, and a total flat modifier combining the skill's own modifier with
//! the tied attribute's bonus. Untrained skills override both: the pool is
//! forced to a single die and the total collapses to a fixed penalty with the
//! attribute excluded.
//!
//! Derivation is a pure function here — the original sheet logic wrote the
//! derived fields back onto the skill record during data preparation, which
//! made the result depend on preparation order when the tied attribute was
//! missing. Returning a fresh [`SkillDerived`] avoids that.

use crate::attributes::AttributeSet;
use crate::config::{DiceConfig, UntrainedConfig};
use crate::types::AttributeKey;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Lowest legal skill rank.
pub const RANK_MIN: u8 = 1;
/// Highest legal skill rank.
pub const RANK_MAX: u8 = 5;

/// A trainable competency owned by an actor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    /// Display name.
    pub name: String,
    /// Rank in [1, 5]; sizes the dice pool.
    pub rank: u8,
    /// Attribute whose modifier feeds this skill's rolls.
    pub tied_attribute: AttributeKey,
    /// Flat modifier applied to this skill's rolls (can be negative).
    pub modifier: i32,
    /// Whether the skill is rolled untrained.
    pub untrained: bool,
    /// Marks the actor's brawling skill. Carried on the record for item
    /// logic elsewhere; it does not change derivation.
    pub brawling: bool,
}

impl Skill {
    /// Create a trained rank-1 skill tied to `attribute`.
    #[must_use]
    pub fn new(name: impl Into<String>, tied_attribute: AttributeKey) -> Self {
        Self {
            name: name.into(),
            rank: RANK_MIN,
            tied_attribute,
            modifier: 0,
            untrained: false,
            brawling: false,
        }
    }

    /// Builder-style rank setter, clamped to [1, 5].
    #[must_use]
    pub fn with_rank(mut self, rank: u8) -> Self {
        self.rank = rank.clamp(RANK_MIN, RANK_MAX);
        self
    }

    /// Builder-style flat-modifier setter.
    #[must_use]
    pub fn with_modifier(mut self, modifier: i32) -> Self {
        self.modifier = modifier;
        self
    }

    /// Builder-style untrained flag.
    #[must_use]
    pub fn untrained(mut self) -> Self {
        self.untrained = true;
        self
    }
}

/// Values derived from a skill for one roll attempt.
///
/// The base formula is always pure dice notation; the flat modifier is
/// deliberately *not* embedded in it. The roll handler appends modifiers
/// later so the popup can preview and adjust them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillDerived {
    /// Combined flat modifier (skill modifier + attribute modifier, or the
    /// untrained penalty).
    pub total_modifier: i32,
    /// Base dice pool, e.g. `3d6khx`.
    pub base_formula: String,
}

/// Derive the total modifier and base formula for one skill.
///
/// If the tied attribute cannot be resolved on the owning actor, the
/// attribute modifier defaults to 0, a diagnostic is logged, and the roll
/// proceeds — a missing reference is never fatal.
#[must_use]
pub fn derive(
    skill: &Skill,
    attributes: Option<&AttributeSet>,
    dice: &DiceConfig,
    untrained: &UntrainedConfig,
) -> SkillDerived {
    let attribute_mod = match attributes {
        Some(attrs) => attrs.modifier(skill.tied_attribute),
        None => {
            warn!(
                skill = %skill.name,
                attribute = %skill.tied_attribute,
                "skill could not find tied attribute on owning actor; defaulting modifier to 0"
            );
            0
        }
    };

    if skill.untrained {
        // Untrained: one die, fixed penalty, attribute excluded.
        SkillDerived {
            total_modifier: untrained.penalty,
            base_formula: format!("{}d{}{}", untrained.dice_count, dice.faces, dice.flags),
        }
    } else {
        SkillDerived {
            total_modifier: skill.modifier + attribute_mod,
            base_formula: format!("{}d{}{}", skill.rank, dice.faces, dice.flags),
        }
    }
}

/// Derive with the default d6 keep-highest-exploding pool and −3 untrained
/// penalty. Convenience for callers without a loaded [`crate::RulesConfig`].
#[must_use]
pub fn derive_default(skill: &Skill, attributes: Option<&AttributeSet>) -> SkillDerived {
    derive(
        skill,
        attributes,
        &DiceConfig::default(),
        &UntrainedConfig::default(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs_with(key: AttributeKey, value: u8) -> AttributeSet {
        AttributeSet::new().with(key, value)
    }

    #[test]
    fn trained_skill_combines_flat_and_attribute() {
        let skill = Skill::new("Archery", AttributeKey::Ref)
            .with_rank(3)
            .with_modifier(2);
        let attrs = attrs_with(AttributeKey::Ref, 2); // modifier +1

        let derived = derive_default(&skill, Some(&attrs));
        assert_eq!(derived.total_modifier, 3);
        assert_eq!(derived.base_formula, "3d6khx");
    }

    #[test]
    fn untrained_skill_forces_one_die_and_fixed_penalty() {
        for rank in RANK_MIN..=RANK_MAX {
            let skill = Skill::new("Lockpicking", AttributeKey::Int)
                .with_rank(rank)
                .with_modifier(4)
                .untrained();
            let attrs = attrs_with(AttributeKey::Int, 6); // modifier +5, must be excluded

            let derived = derive_default(&skill, Some(&attrs));
            assert_eq!(derived.total_modifier, -3);
            assert_eq!(derived.base_formula, "1d6khx");
        }
    }

    #[test]
    fn missing_attributes_default_modifier_to_zero() {
        let skill = Skill::new("Stealth", AttributeKey::Ref)
            .with_rank(2)
            .with_modifier(1);

        let derived = derive_default(&skill, None);
        assert_eq!(derived.total_modifier, 1);
        assert_eq!(derived.base_formula, "2d6khx");
    }

    #[test]
    fn brawling_flag_does_not_change_derivation() {
        let mut skill = Skill::new("Brawling", AttributeKey::Mig).with_rank(2);
        let attrs = attrs_with(AttributeKey::Mig, 3);
        let plain = derive_default(&skill, Some(&attrs));
        skill.brawling = true;
        let flagged = derive_default(&skill, Some(&attrs));
        assert_eq!(plain, flagged);
    }

    #[test]
    fn rank_is_clamped_at_construction() {
        let skill = Skill::new("Lore", AttributeKey::Int).with_rank(9);
        assert_eq!(skill.rank, RANK_MAX);
        let derived = derive_default(&skill, Some(&AttributeSet::new()));
        assert_eq!(derived.base_formula, "5d6khx");
    }
}
