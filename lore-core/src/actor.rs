//! Actor records: Players, Legends, and Lackeys.
//!
//! An actor is a plain data record the host persists as a document. The rule
//! logic attached to it lives in free functions and methods that never reach
//! back into host state: gauge updates are planned against a snapshot and the
//! amended change set is handed back to the host to persist.

use crate::attributes::AttributeSet;
use crate::config::MoraleConfig;
use crate::skill::Skill;
use crate::types::{ActorId, ItemId};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

/// A bounded counter with a current value and a maximum (wounds, fatigue).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gauge {
    /// Current value.
    pub value: u32,
    /// Maximum value; reaching it triggers the linked condition.
    pub max: u32,
}

impl Gauge {
    /// An empty gauge with the given maximum.
    #[must_use]
    pub fn with_max(max: u32) -> Self {
        Self { value: 0, max }
    }

    /// Whether the gauge has reached its maximum.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.value >= self.max
    }
}

impl Default for Gauge {
    fn default() -> Self {
        Self::with_max(3)
    }
}

/// Combat conditions an actor can carry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conditions {
    /// Set automatically when wounds fill; never cleared automatically.
    pub unconscious: bool,
    /// Set automatically when fatigue fills; never cleared automatically.
    pub incapacitated: bool,
    /// Toggled manually only.
    pub stunned: bool,
}

/// Statistics derived from ancestry and gear rather than rolled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedStatistics {
    /// Movement pace in grid spaces.
    pub pace: u32,
    /// Melee defense target.
    pub parry: u32,
    /// Resistance target.
    pub resist: u32,
}

impl Default for DerivedStatistics {
    fn default() -> Self {
        Self {
            pace: 5,
            parry: 3,
            resist: 4,
        }
    }
}

/// The three actor kinds of the LORE system, with their kind-specific fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ActorKind {
    /// A player character.
    Player {
        /// Name of the person playing this character.
        player_name: String,
        /// Lore coins held; players start with 2.
        lore_coins: u32,
    },
    /// A major story NPC.
    Legend {
        /// Lore coins held; legends start with 2.
        lore_coins: u32,
    },
    /// A minor NPC.
    Lackey {
        /// Threat rank.
        rank: u32,
    },
}

impl ActorKind {
    /// Lore coins held, if this kind carries them.
    #[must_use]
    pub fn lore_coins(&self) -> Option<u32> {
        match self {
            ActorKind::Player { lore_coins, .. } | ActorKind::Legend { lore_coins } => {
                Some(*lore_coins)
            }
            ActorKind::Lackey { .. } => None,
        }
    }

    /// Adjust the coin count by `delta`, saturating at zero. No-op for
    /// kinds without coins.
    pub fn adjust_lore_coins(&mut self, delta: i32) {
        if let ActorKind::Player { lore_coins, .. } | ActorKind::Legend { lore_coins } = self {
            *lore_coins = lore_coins.saturating_add_signed(delta);
        }
    }
}

/// A complete actor record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActorRecord {
    /// Stable identity.
    pub id: ActorId,
    /// Display name.
    pub name: String,
    /// Kind-specific data.
    pub kind: ActorKind,
    /// Character level.
    pub level: u32,
    /// The six attribute scores.
    pub attributes: AttributeSet,
    /// Wound track.
    pub wounds: Gauge,
    /// Fatigue track.
    pub fatigue: Gauge,
    /// Current conditions.
    pub conditions: Conditions,
    /// Morale adjustment applied to the outer result of every roll.
    morale: i32,
    /// Derived statistics.
    pub stats: DerivedStatistics,
    /// Current tags (manual and auto-applied, reconciled together).
    pub tags: Vec<String>,
    /// Owned skills.
    pub skills: Vec<Skill>,
    /// Equipped ancestry item, if any.
    pub equipped_ancestry: Option<ItemId>,
}

impl ActorRecord {
    /// Create a fresh actor of the given kind with floor attributes.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: ActorKind) -> Self {
        Self {
            id: ActorId::new(),
            name: name.into(),
            kind,
            level: 1,
            attributes: AttributeSet::new(),
            wounds: Gauge::default(),
            fatigue: Gauge::default(),
            conditions: Conditions::default(),
            morale: 0,
            stats: DerivedStatistics::default(),
            tags: Vec::new(),
            skills: Vec::new(),
            equipped_ancestry: None,
        }
    }

    /// Current morale.
    #[must_use]
    pub fn morale(&self) -> i32 {
        self.morale
    }

    /// Set morale, clamped to the configured bounds.
    pub fn set_morale(&mut self, morale: i32, bounds: &MoraleConfig) {
        self.morale = morale.clamp(bounds.min, bounds.max);
    }

    /// Set morale with the default [−6, 6] bounds.
    pub fn set_morale_default(&mut self, morale: i32) {
        self.set_morale(morale, &MoraleConfig::default());
    }

    /// Flat roll-data export handed to the dice evaluator alongside a
    /// formula, so expressions like `@ref.mod + 4` resolve.
    #[must_use]
    pub fn roll_data(&self) -> Value {
        let mut data = Map::new();
        for (key, value) in self.attributes.iter() {
            data.insert(
                key.as_str().to_string(),
                json!({
                    "value": value,
                    "mod": self.attributes.modifier(key),
                }),
            );
        }
        data.insert("lvl".to_string(), json!(self.level));
        data.insert("morale".to_string(), json!(self.morale));
        Value::Object(data)
    }
}

// ---------------------------------------------------------------------------
// Gauge updates
// ---------------------------------------------------------------------------

/// A pending update to an actor's gauges and conditions, as submitted by the
/// host before persisting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GaugeUpdate {
    /// New wounds value, if changing.
    pub wounds: Option<u32>,
    /// New fatigue value, if changing.
    pub fatigue: Option<u32>,
    /// Explicit unconscious change, if any. Wins over the automatic rule.
    pub unconscious: Option<bool>,
    /// Explicit incapacitated change, if any. Wins over the automatic rule.
    pub incapacitated: Option<bool>,
}

/// Amend a pending gauge update with the automatic condition rules.
///
/// When wounds reach or exceed their maximum in this update, `unconscious`
/// is set in the *same* update — unless the update already changes it
/// explicitly. The condition is never auto-cleared by dropping below the
/// maximum. Fatigue and `incapacitated` follow the same rule.
#[must_use]
pub fn plan_gauge_update(actor: &ActorRecord, mut update: GaugeUpdate) -> GaugeUpdate {
    if let Some(new_wounds) = update.wounds
        && update.unconscious.is_none()
        && new_wounds >= actor.wounds.max
        && !actor.conditions.unconscious
    {
        update.unconscious = Some(true);
    }

    if let Some(new_fatigue) = update.fatigue
        && update.incapacitated.is_none()
        && new_fatigue >= actor.fatigue.max
        && !actor.conditions.incapacitated
    {
        update.incapacitated = Some(true);
    }

    update
}

/// Apply a (planned) gauge update to the record. Gauge values clamp to
/// [0, max].
pub fn apply_gauge_update(actor: &mut ActorRecord, update: GaugeUpdate) {
    if let Some(wounds) = update.wounds {
        actor.wounds.value = wounds.min(actor.wounds.max);
    }
    if let Some(fatigue) = update.fatigue {
        actor.fatigue.value = fatigue.min(actor.fatigue.max);
    }
    if let Some(unconscious) = update.unconscious {
        actor.conditions.unconscious = unconscious;
    }
    if let Some(incapacitated) = update.incapacitated {
        actor.conditions.incapacitated = incapacitated;
    }
}
