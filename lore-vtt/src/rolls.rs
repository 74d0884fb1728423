//! End-to-end skill-roll flow.
//!
//! Ties the pieces together the way the host's item document does: derive
//! the skill, fold in the popup-captured context, compose the final formula,
//! hand it to the dice evaluator, and judge the result against the target
//! number.

use crate::host::DiceEvaluator;
use lore_core::actor::ActorRecord;
use lore_core::config::RulesConfig;
use lore_core::formula;
use lore_core::roll::{RollContext, RollOutcome};
use lore_core::skill::{self, Skill};
use tracing::debug;

/// What a roll request produced.
#[derive(Debug, Clone, PartialEq)]
pub enum RollResult {
    /// A roll was evaluated.
    Rolled(RollOutcome),
    /// The item had no formula; only a chat card is posted.
    ChatOnly {
        /// Flavor line for the chat card.
        flavor: String,
    },
}

/// Roll a skill for an actor.
///
/// `user_modifier` and `target_number` are the popup-captured values; the
/// skill's own total modifier and the actor's morale are folded in here so
/// concurrent rolls each work from their own copied context.
///
/// # Errors
/// Only evaluator failures propagate; every rules-side fallible path has
/// already resolved to a default by this point.
pub fn roll_skill(
    actor: &ActorRecord,
    skill: &Skill,
    user_modifier: i32,
    target_number: u32,
    config: &RulesConfig,
    evaluator: &impl DiceEvaluator,
) -> lore_core::error::Result<RollResult> {
    let derived = skill::derive(skill, Some(&actor.attributes), &config.dice, &config.untrained);

    let ctx = RollContext {
        base_formula: derived.base_formula,
        user_modifier: derived.total_modifier + user_modifier,
        morale: actor.morale(),
        target_number,
    };

    let resolved = ctx.resolve();
    let flavor = format!("[skill] {}{}", skill.name, formula::morale_flavor(ctx.morale));
    debug!(actor = %actor.name, formula = %resolved, "evaluating skill roll");

    let total = evaluator.evaluate(&resolved.text, &actor.roll_data())?;

    Ok(RollResult::Rolled(RollOutcome {
        success: formula::target_number_check(total, ctx.target_number),
        formula: resolved,
        total,
        flavor,
    }))
}

/// Post-only path for items without a roll formula: no dice, just flavor.
#[must_use]
pub fn chat_only(item_kind: &str, item_name: &str) -> RollResult {
    RollResult::ChatOnly {
        flavor: format!("[{item_kind}] {item_name}"),
    }
}
