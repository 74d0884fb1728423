//! Origin-token resolution and target distance display.
//!
//! The roll popup shows who the user is currently targeting and, when an
//! origin token can be found for the rolling actor, the grid distance to the
//! target. All of this is cosmetic: every failure path resolves to "omit the
//! display", never an error.

use crate::host::{CanvasView, TokenSnapshot};
use lore_core::types::{ActorId, Distance, TokenId};
use serde::{Deserialize, Serialize};

/// Hint describing where a roll originated, carried by the popup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OriginHint {
    /// The rolling actor, if known.
    pub actor_id: Option<ActorId>,
    /// A specific originating token, if known.
    pub token_id: Option<TokenId>,
}

/// Read-only snapshot of the current target, recomputed on every render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetInfo {
    /// Target token name.
    pub name: String,
    /// Target token art, if any.
    pub image: Option<String>,
    /// Target token id.
    pub id: TokenId,
    /// Distance from the origin token, when measurable.
    pub distance: Option<Distance>,
}

/// Resolve the origin token for a roll.
///
/// Resolution order:
/// 1. explicit token id match;
/// 2. a controlled token belonging to the hinted actor;
/// 3. the sole controlled token, if exactly one exists;
/// 4. any active token of the hinted actor, preferring the current scene;
/// 5. an active token of the user's assigned character, same preference.
///
/// Returns `None` when every step comes up empty — the distance display is
/// simply omitted.
#[must_use]
pub fn resolve_origin_token(hint: OriginHint, canvas: &impl CanvasView) -> Option<TokenSnapshot> {
    if let Some(token_id) = hint.token_id
        && let Some(token) = canvas.token(token_id)
    {
        return Some(token);
    }

    let controlled = canvas.controlled_tokens();
    if let Some(actor_id) = hint.actor_id
        && let Some(token) = controlled.iter().find(|t| t.actor_id == Some(actor_id))
    {
        return Some(token.clone());
    }

    if controlled.len() == 1 {
        return controlled.into_iter().next();
    }

    if let Some(actor_id) = hint.actor_id
        && let Some(token) = prefer_current_scene(canvas.active_tokens_of(actor_id), canvas)
    {
        return Some(token);
    }

    let character = canvas.user_character()?;
    prefer_current_scene(canvas.active_tokens_of(character), canvas)
}

fn prefer_current_scene(
    tokens: Vec<TokenSnapshot>,
    canvas: &impl CanvasView,
) -> Option<TokenSnapshot> {
    let scene = canvas.current_scene();
    tokens
        .iter()
        .find(|t| Some(t.scene_id) == scene)
        .cloned()
        .or_else(|| tokens.into_iter().next())
}

/// Round a raw measured distance the way the host's ruler displays it:
/// two decimal places, collapsed to a whole number when the raw value sits
/// within half a hundredth of an integer.
#[must_use]
pub fn round_distance(raw: f64) -> f64 {
    let two_places = (raw * 100.0).round() / 100.0;
    if (two_places - two_places.round()).abs() < f64::EPSILON {
        two_places.round()
    } else {
        two_places
    }
}

/// Measure the display distance between two tokens.
///
/// Returns `None` on any measurement failure (no grid, non-finite result);
/// the caller omits the display rather than surfacing an error.
#[must_use]
pub fn compute_distance(
    origin: &TokenSnapshot,
    target: &TokenSnapshot,
    canvas: &impl CanvasView,
) -> Option<Distance> {
    let raw = canvas.measure(origin.center, target.center)?;
    if !raw.is_finite() {
        return None;
    }
    Some(Distance {
        value: round_distance(raw),
        units: canvas.grid_units(),
    })
}

/// Snapshot the user's current target for popup display.
///
/// The distance field is filled only when both an origin token and a grid
/// measurement are available.
#[must_use]
pub fn current_target_info(hint: OriginHint, canvas: &impl CanvasView) -> Option<TargetInfo> {
    let target = canvas.first_target()?;

    let distance = resolve_origin_token(hint, canvas)
        .and_then(|origin| compute_distance(&origin, &target, canvas));

    Some(TargetInfo {
        name: target.name,
        image: target.image,
        id: target.id,
        distance,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use lore_core::types::{GridPoint, SceneId};
    use uuid::Uuid;

    /// In-memory canvas fixture.
    #[derive(Debug, Default)]
    struct MockCanvas {
        tokens: Vec<TokenSnapshot>,
        controlled: Vec<TokenId>,
        current_scene: Option<SceneId>,
        user_character: Option<ActorId>,
        target: Option<TokenSnapshot>,
        grid_distance: Option<f64>,
        units: String,
    }

    impl CanvasView for MockCanvas {
        fn token(&self, id: TokenId) -> Option<TokenSnapshot> {
            self.tokens.iter().find(|t| t.id == id).cloned()
        }

        fn controlled_tokens(&self) -> Vec<TokenSnapshot> {
            self.tokens
                .iter()
                .filter(|t| self.controlled.contains(&t.id))
                .cloned()
                .collect()
        }

        fn active_tokens_of(&self, actor: ActorId) -> Vec<TokenSnapshot> {
            self.tokens
                .iter()
                .filter(|t| t.actor_id == Some(actor))
                .cloned()
                .collect()
        }

        fn current_scene(&self) -> Option<SceneId> {
            self.current_scene
        }

        fn user_character(&self) -> Option<ActorId> {
            self.user_character
        }

        fn first_target(&self) -> Option<TokenSnapshot> {
            self.target.clone()
        }

        fn measure(&self, _from: GridPoint, _to: GridPoint) -> Option<f64> {
            self.grid_distance
        }

        fn grid_units(&self) -> String {
            self.units.clone()
        }
    }

    fn scene() -> SceneId {
        SceneId(Uuid::new_v4())
    }

    fn token(name: &str, actor: Option<ActorId>, scene_id: SceneId) -> TokenSnapshot {
        TokenSnapshot {
            id: TokenId::new(),
            name: name.to_string(),
            image: None,
            actor_id: actor,
            scene_id,
            center: GridPoint { x: 0.0, y: 0.0 },
        }
    }

    #[test]
    fn explicit_token_id_wins() {
        let s = scene();
        let wanted = token("wanted", None, s);
        let other = token("other", None, s);
        let canvas = MockCanvas {
            tokens: vec![other.clone(), wanted.clone()],
            controlled: vec![other.id],
            ..MockCanvas::default()
        };

        let hint = OriginHint {
            token_id: Some(wanted.id),
            actor_id: None,
        };
        assert_eq!(resolve_origin_token(hint, &canvas), Some(wanted));
    }

    #[test]
    fn controlled_token_of_owner_beats_sole_controlled() {
        let s = scene();
        let actor = ActorId::new();
        let owned = token("owned", Some(actor), s);
        let stray = token("stray", None, s);
        let canvas = MockCanvas {
            tokens: vec![stray.clone(), owned.clone()],
            controlled: vec![stray.id, owned.id],
            ..MockCanvas::default()
        };

        let hint = OriginHint {
            actor_id: Some(actor),
            token_id: None,
        };
        assert_eq!(resolve_origin_token(hint, &canvas), Some(owned));
    }

    #[test]
    fn sole_controlled_token_is_used_regardless_of_owner() {
        let s = scene();
        let stray = token("stray", None, s);
        let canvas = MockCanvas {
            tokens: vec![stray.clone()],
            controlled: vec![stray.id],
            ..MockCanvas::default()
        };

        let hint = OriginHint {
            actor_id: Some(ActorId::new()),
            token_id: None,
        };
        assert_eq!(resolve_origin_token(hint, &canvas), Some(stray));
    }

    #[test]
    fn active_token_prefers_current_scene() {
        let here = scene();
        let elsewhere = scene();
        let actor = ActorId::new();
        let far = token("far", Some(actor), elsewhere);
        let near = token("near", Some(actor), here);
        let canvas = MockCanvas {
            tokens: vec![far, near.clone()],
            current_scene: Some(here),
            ..MockCanvas::default()
        };

        let hint = OriginHint {
            actor_id: Some(actor),
            token_id: None,
        };
        assert_eq!(resolve_origin_token(hint, &canvas), Some(near));
    }

    #[test]
    fn falls_back_to_user_character_token() {
        let s = scene();
        let character = ActorId::new();
        let mine = token("mine", Some(character), s);
        let canvas = MockCanvas {
            tokens: vec![mine.clone()],
            user_character: Some(character),
            ..MockCanvas::default()
        };

        assert_eq!(
            resolve_origin_token(OriginHint::default(), &canvas),
            Some(mine)
        );
    }

    #[test]
    fn exhausted_resolution_returns_none() {
        let canvas = MockCanvas::default();
        assert_eq!(resolve_origin_token(OriginHint::default(), &canvas), None);
    }

    #[test]
    fn distance_rounding_matches_ruler_display() {
        assert!((round_distance(4.004) - 4.0).abs() < f64::EPSILON);
        assert!((round_distance(4.37) - 4.37).abs() < f64::EPSILON);
        assert!((round_distance(4.006) - 4.01).abs() < f64::EPSILON);
        assert!((round_distance(5.0) - 5.0).abs() < f64::EPSILON);
        assert!((round_distance(4.995) - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn target_info_omits_distance_without_grid() {
        let s = scene();
        let target = token("goblin", None, s);
        let origin = token("hero", None, s);
        let canvas = MockCanvas {
            tokens: vec![origin.clone()],
            controlled: vec![origin.id],
            target: Some(target.clone()),
            grid_distance: None,
            ..MockCanvas::default()
        };

        let info = current_target_info(OriginHint::default(), &canvas).expect("target info");
        assert_eq!(info.name, "goblin");
        assert_eq!(info.id, target.id);
        assert_eq!(info.distance, None);
    }

    #[test]
    fn target_info_carries_rounded_distance_and_units() {
        let s = scene();
        let target = token("goblin", None, s);
        let origin = token("hero", None, s);
        let canvas = MockCanvas {
            tokens: vec![origin.clone()],
            controlled: vec![origin.id],
            target: Some(target),
            grid_distance: Some(4.004),
            units: "m".to_string(),
            ..MockCanvas::default()
        };

        let info = current_target_info(OriginHint::default(), &canvas).expect("target info");
        let distance = info.distance.expect("distance");
        assert!((distance.value - 4.0).abs() < f64::EPSILON);
        assert_eq!(distance.units, "m");
    }

    #[test]
    fn no_target_means_no_info() {
        let canvas = MockCanvas::default();
        assert_eq!(current_target_info(OriginHint::default(), &canvas), None);
    }
}
