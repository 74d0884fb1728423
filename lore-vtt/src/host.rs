//! Port traits the VTT host adapts to.
//!
//! The original system read the host's `game` and `canvas` globals from
//! anywhere. Here every host capability the rules layer consumes is a trait
//! the host implements once and injects, which also makes the whole crate
//! testable against plain in-memory fixtures.

use lore_core::types::{ActorId, GridPoint, SceneId, TokenId};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Plain-data snapshot of a token as reported by the host canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenSnapshot {
    /// Token identity on the canvas.
    pub id: TokenId,
    /// Display name shown under the token.
    pub name: String,
    /// Image reference for the token art, if any.
    pub image: Option<String>,
    /// The actor this token represents, if linked.
    pub actor_id: Option<ActorId>,
    /// Scene the token is placed on.
    pub scene_id: SceneId,
    /// Token center in scene pixel space.
    pub center: GridPoint,
}

/// Read-only view of the host's canvas and user state.
///
/// Every method is a cheap snapshot read; implementations must not block.
pub trait CanvasView {
    /// Look up a token by id on the current canvas.
    fn token(&self, id: TokenId) -> Option<TokenSnapshot>;

    /// Tokens currently controlled (selected) by the requesting user.
    fn controlled_tokens(&self) -> Vec<TokenSnapshot>;

    /// All active tokens representing `actor`, across scenes.
    fn active_tokens_of(&self, actor: ActorId) -> Vec<TokenSnapshot>;

    /// The scene currently displayed.
    fn current_scene(&self) -> Option<SceneId>;

    /// The requesting user's assigned character, if any.
    fn user_character(&self) -> Option<ActorId>;

    /// The user's first targeted token, if any.
    fn first_target(&self) -> Option<TokenSnapshot>;

    /// Raw grid-space distance between two points, in grid units.
    ///
    /// Returns `None` when the scene has no measurable grid. The caller
    /// treats any failure as "omit the distance display".
    fn measure(&self, from: GridPoint, to: GridPoint) -> Option<f64>;

    /// Unit label for measured distances (may be empty).
    fn grid_units(&self) -> String;
}

/// External dice-evaluation service.
///
/// The only contract between this crate and the evaluator is the composed
/// formula string format: pure dice notation with optional signed flat terms
/// and a parenthesized morale term.
pub trait DiceEvaluator {
    /// Evaluate `formula` against `roll_data` and return the numeric total.
    ///
    /// # Errors
    /// Returns [`lore_core::LoreError::FormulaRejected`] if the evaluator
    /// cannot parse the formula.
    fn evaluate(&self, formula: &str, roll_data: &Value) -> lore_core::error::Result<i64>;
}
