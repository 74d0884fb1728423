//! Core type definitions for the LORE rules engine.
//!
//! All types are serializable; the host exchanges actor and item records as
//! JSON documents.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Identity Types
// ---------------------------------------------------------------------------

/// Unique identifier for an actor (Player, Legend, or Lackey).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActorId(pub Uuid);

impl ActorId {
    /// Create a new random actor ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ActorId {
    fn default() -> Self {
        Self::new()
    }
}

/// Unique identifier for an owned item (skill, gear, ancestry).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(pub Uuid);

impl ItemId {
    /// Create a new random item ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

/// Unique identifier for a token placed on a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenId(pub Uuid);

impl TokenId {
    /// Create a new random token ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TokenId {
    fn default() -> Self {
        Self::new()
    }
}

/// Unique identifier for a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SceneId(pub Uuid);

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Attribute Keys
// ---------------------------------------------------------------------------

/// The six named attribute scores of the LORE system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeKey {
    /// Reflexes.
    Ref,
    /// Intellect.
    Int,
    /// Grit.
    Gri,
    /// Might.
    Mig,
    /// Toughness.
    Tou,
    /// Charisma.
    Cha,
}

impl AttributeKey {
    /// All six keys in sheet order.
    pub const ALL: [AttributeKey; 6] = [
        AttributeKey::Ref,
        AttributeKey::Int,
        AttributeKey::Gri,
        AttributeKey::Mig,
        AttributeKey::Tou,
        AttributeKey::Cha,
    ];

    /// The short lowercase key used in roll-data formulas (`@ref.mod + 4`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            AttributeKey::Ref => "ref",
            AttributeKey::Int => "int",
            AttributeKey::Gri => "gri",
            AttributeKey::Mig => "mig",
            AttributeKey::Tou => "tou",
            AttributeKey::Cha => "cha",
        }
    }

    /// Whether the attribute is physical or mental.
    #[must_use]
    pub fn category(self) -> AttributeCategory {
        match self {
            AttributeKey::Ref | AttributeKey::Mig | AttributeKey::Tou => {
                AttributeCategory::Physical
            }
            AttributeKey::Int | AttributeKey::Gri | AttributeKey::Cha => AttributeCategory::Mental,
        }
    }
}

impl fmt::Display for AttributeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AttributeKey {
    type Err = crate::LoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ref" => Ok(AttributeKey::Ref),
            "int" => Ok(AttributeKey::Int),
            "gri" => Ok(AttributeKey::Gri),
            "mig" => Ok(AttributeKey::Mig),
            // Older LORE data files used "phy" for the toughness slot.
            "tou" | "phy" => Ok(AttributeKey::Tou),
            "cha" | "pre" => Ok(AttributeKey::Cha),
            other => Err(crate::LoreError::UnknownAttribute(other.to_string())),
        }
    }
}

/// Broad attribute grouping used by sheet layout and some item prerequisites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeCategory {
    /// Body-based attributes.
    Physical,
    /// Mind-based attributes.
    Mental,
}

// ---------------------------------------------------------------------------
// Spatial
// ---------------------------------------------------------------------------

/// A token center point in scene pixel space, as reported by the host canvas.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GridPoint {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl fmt::Display for GridPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}

/// A measured distance in the scene's grid units, formatted for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Distance {
    /// Rounded distance value.
    pub value: f64,
    /// Unit label taken from the scene grid configuration (may be empty).
    pub units: String,
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.units.is_empty() {
            write!(f, "{}", self.value)
        } else {
            write!(f, "{} {}", self.value, self.units)
        }
    }
}
