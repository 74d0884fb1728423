//! Configuration for the LORE rules engine.
//!
//! Maps directly to `lore.toml`. Every field has a default so a missing or
//! partial file still yields a playable rule set.

use serde::{Deserialize, Serialize};

/// Top-level rules configuration, loadable from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Dice-pool shape for skill rolls.
    #[serde(default)]
    pub dice: DiceConfig,
    /// Untrained-skill overrides.
    #[serde(default)]
    pub untrained: UntrainedConfig,
    /// Morale adjustment bounds.
    #[serde(default)]
    pub morale: MoraleConfig,
    /// Table-wide target number ("difficulty value") settings.
    #[serde(default)]
    pub target_number: TargetNumberConfig,
    /// Lore-coin scatter layout tuning.
    #[serde(default)]
    pub coins: CoinConfig,
}

impl RulesConfig {
    /// Load configuration from a TOML string.
    ///
    /// # Errors
    /// Returns `LoreError::Config` if the TOML is invalid.
    pub fn from_toml(toml_str: &str) -> crate::error::Result<Self> {
        toml::from_str(toml_str).map_err(|e| crate::LoreError::Config(e.to_string()))
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }
}

// ---------------------------------------------------------------------------
// Sub-configs
// ---------------------------------------------------------------------------

/// Dice-pool shape used by skill base formulas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiceConfig {
    /// Number of faces per die.
    #[serde(default = "default_faces")]
    pub faces: u8,
    /// Notation flags appended after the die size. `khx` keeps the highest
    /// die and explodes on the maximum face.
    #[serde(default = "default_flags")]
    pub flags: String,
}

impl Default for DiceConfig {
    fn default() -> Self {
        Self {
            faces: 6,
            flags: "khx".to_string(),
        }
    }
}

/// Overrides applied when a skill is rolled untrained.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UntrainedConfig {
    /// Dice count rolled regardless of stored rank.
    #[serde(default = "default_one")]
    pub dice_count: u8,
    /// Flat penalty replacing both the skill and attribute modifiers.
    #[serde(default = "default_untrained_penalty")]
    pub penalty: i32,
}

impl Default for UntrainedConfig {
    fn default() -> Self {
        Self {
            dice_count: 1,
            penalty: -3,
        }
    }
}

/// Bounds for the per-actor morale adjustment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoraleConfig {
    /// Lowest allowed morale value.
    #[serde(default = "default_morale_min")]
    pub min: i32,
    /// Highest allowed morale value.
    #[serde(default = "default_morale_max")]
    pub max: i32,
}

impl Default for MoraleConfig {
    fn default() -> Self {
        Self { min: -6, max: 6 }
    }
}

/// Table-wide target number settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TargetNumberConfig {
    /// Default target number pre-filled into the roll popup. Zero means no
    /// check is requested by default.
    #[serde(default)]
    pub default_value: u32,
}

/// Lore-coin scatter layout tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoinConfig {
    /// Smallest rendered coin sprite, in pixels.
    #[serde(default = "default_coin_min")]
    pub min_size: u32,
    /// Largest rendered coin sprite, in pixels.
    #[serde(default = "default_coin_max")]
    pub max_size: u32,
    /// Coin size as a fraction of container height.
    #[serde(default = "default_coin_scale")]
    pub height_scale: f64,
    /// Maximum rotation away from upright, in degrees.
    #[serde(default = "default_coin_tilt")]
    pub max_tilt_deg: i32,
}

impl Default for CoinConfig {
    fn default() -> Self {
        Self {
            min_size: 12,
            max_size: 28,
            height_scale: 0.35,
            max_tilt_deg: 20,
        }
    }
}

fn default_faces() -> u8 {
    6
}

fn default_flags() -> String {
    "khx".to_string()
}

fn default_one() -> u8 {
    1
}

fn default_untrained_penalty() -> i32 {
    -3
}

fn default_morale_min() -> i32 {
    -6
}

fn default_morale_max() -> i32 {
    6
}

fn default_coin_min() -> u32 {
    12
}

fn default_coin_max() -> u32 {
    28
}

fn default_coin_scale() -> f64 {
    0.35
}

fn default_coin_tilt() -> i32 {
    20
}
