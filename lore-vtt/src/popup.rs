//! Roll pop-up state and its single-resolution confirm future.
//!
//! The popup is the one asynchronous boundary in the roll flow: the host
//! renders it, forwards the user's input events into [`RollPopup`], and a
//! caller awaits [`RollPopup::confirmed`] before evaluating the roll. The
//! confirm side resolves exactly once. Dismissing the popup without
//! confirming drops the sender, which the awaiting side observes as a closed
//! channel — "dialog closed, no roll" — rather than a promise that never
//! resolves.

use crate::target::OriginHint;
use lore_core::config::RulesConfig;
use lore_core::formula;
use lore_core::roll::RollContext;
use tokio::sync::oneshot;
use tracing::debug;

/// State of one roll pop-up interaction.
///
/// Every numeric field is re-parsed from the raw input string on each input
/// event, with the coercion rules of [`lore_core::formula`]: malformed input
/// is 0, target numbers clamp to non-negative.
#[derive(Debug)]
pub struct RollPopup {
    /// Window label, usually `[skill] Name`.
    pub label: String,
    /// Base dice pool from skill derivation.
    pub base_formula: String,
    /// Whether the target-number input is shown.
    pub show_target_number: bool,
    /// Where the roll originated, for distance display.
    pub origin: OriginHint,
    modifier: i32,
    target_number: u32,
    confirm_tx: Option<oneshot::Sender<RollContext>>,
    confirm_rx: Option<oneshot::Receiver<RollContext>>,
}

impl RollPopup {
    /// Create a popup over a derived base formula.
    #[must_use]
    pub fn new(label: impl Into<String>, base_formula: impl Into<String>) -> Self {
        let (tx, rx) = oneshot::channel();
        Self {
            label: label.into(),
            base_formula: base_formula.into(),
            show_target_number: true,
            origin: OriginHint::default(),
            modifier: 0,
            target_number: 0,
            confirm_tx: Some(tx),
            confirm_rx: Some(rx),
        }
    }

    /// Create a popup with the table-wide defaults applied: the configured
    /// default target number pre-fills the target-number field.
    #[must_use]
    pub fn with_config(
        label: impl Into<String>,
        base_formula: impl Into<String>,
        config: &RulesConfig,
    ) -> Self {
        let mut popup = Self::new(label, base_formula);
        popup.prefill_target_number(config.target_number.default_value);
        popup
    }

    /// Attach an origin hint for distance display.
    #[must_use]
    pub fn with_origin(mut self, origin: OriginHint) -> Self {
        self.origin = origin;
        self
    }

    /// Pre-fill the target number from the table-wide default. Zero leaves
    /// the field empty.
    pub fn prefill_target_number(&mut self, default_value: u32) {
        if default_value > 0 {
            self.target_number = default_value;
        }
    }

    /// Handle an input event on the modifier field.
    pub fn set_modifier_input(&mut self, raw: &str) {
        self.modifier = formula::parse_modifier(raw);
    }

    /// Handle an input event on the target-number field.
    pub fn set_target_number_input(&mut self, raw: &str) {
        self.target_number = formula::parse_target_number(raw);
    }

    /// Currently parsed modifier.
    #[must_use]
    pub fn modifier(&self) -> i32 {
        self.modifier
    }

    /// Currently parsed target number.
    #[must_use]
    pub fn target_number(&self) -> u32 {
        self.target_number
    }

    /// Formula preview shown live in the popup: the base pool plus the
    /// signed user modifier. Morale is applied later by the roll handler,
    /// so it does not appear here.
    #[must_use]
    pub fn preview(&self) -> String {
        formula::apply_flat_modifier(&self.base_formula, self.modifier)
    }

    /// Future resolving to the captured [`RollContext`] when the user
    /// confirms. Can be taken once; returns `None` on later calls.
    ///
    /// If the popup is dropped without [`Self::confirm`], the receiver
    /// resolves to a [`oneshot::error::RecvError`] — callers treat that as
    /// "dialog closed, no roll".
    pub fn confirmed(&mut self) -> Option<oneshot::Receiver<RollContext>> {
        self.confirm_rx.take()
    }

    /// Confirm the roll, capturing current inputs plus the actor's morale
    /// into a fresh [`RollContext`]. Subsequent confirms are no-ops.
    pub fn confirm(&mut self, skill_total_modifier: i32, morale: i32) {
        let Some(tx) = self.confirm_tx.take() else {
            return;
        };
        let ctx = RollContext {
            base_formula: self.base_formula.clone(),
            user_modifier: skill_total_modifier + self.modifier,
            morale,
            target_number: self.target_number,
        };
        debug!(label = %self.label, formula = %ctx.resolve(), "roll popup confirmed");
        // The receiver may already be gone if the caller gave up waiting.
        let _ = tx.send(ctx);
    }
}
