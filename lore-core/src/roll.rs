//! Per-roll context and outcome types.
//!
//! A [`RollContext`] is ephemeral: it is built from values *copied* out of the
//! actor, skill, and popup at the moment the user confirms, lives for one
//! roll attempt, and is discarded. Concurrent rolls never share state.

use crate::formula;
use serde::{Deserialize, Serialize};

/// Everything one roll attempt needs, captured at confirm time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollContext {
    /// Pure dice pool from skill derivation, e.g. `3d6khx`.
    pub base_formula: String,
    /// Combined flat modifier: skill total plus whatever the user typed into
    /// the popup.
    pub user_modifier: i32,
    /// Owning actor's morale at confirm time.
    pub morale: i32,
    /// Target number; zero means no success check was requested.
    pub target_number: u32,
}

impl RollContext {
    /// Compose the final evaluable formula for this context.
    #[must_use]
    pub fn resolve(&self) -> ResolvedFormula {
        ResolvedFormula {
            text: formula::compose_final(&self.base_formula, self.user_modifier, self.morale),
        }
    }
}

/// The final dice-notation string handed to the host's dice evaluator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedFormula {
    /// Complete formula text, e.g. `(3d6khx + 2) - 1`.
    pub text: String,
}

impl std::fmt::Display for ResolvedFormula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Result of one evaluated roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollOutcome {
    /// The formula that was evaluated.
    pub formula: ResolvedFormula,
    /// Total reported by the dice evaluator.
    pub total: i64,
    /// Success verdict against the target number, when one was requested.
    pub success: Option<bool>,
    /// Chat flavor line, e.g. `[skill] Archery (Morale +2)`.
    pub flavor: String,
}
