//! Integration tests — end-to-end roll derivation flows.
//!
//! These tests follow a roll the way the popup does: attribute scores feed
//! skill derivation, derivation feeds formula composition, and the composed
//! string is checked against a target number.

use lore_core::actor::{ActorKind, ActorRecord, GaugeUpdate, apply_gauge_update, plan_gauge_update};
use lore_core::attributes::AttributeSet;
use lore_core::config::RulesConfig;
use lore_core::formula;
use lore_core::roll::RollContext;
use lore_core::skill::{Skill, derive, derive_default};
use lore_core::tags::{self, Ancestry};
use lore_core::types::AttributeKey;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("lore_core=debug")
        .with_test_writer()
        .try_init();
}

// ---------------------------------------------------------------------------
// Attribute → skill → formula → check
// ---------------------------------------------------------------------------

#[test]
fn full_roll_derivation_flow() {
    init_tracing();

    let mut actor = ActorRecord::new(
        "Saga",
        ActorKind::Player {
            player_name: "Alex".to_string(),
            lore_coins: 2,
        },
    );
    actor.attributes.set(AttributeKey::Ref, 2); // modifier +1
    actor.set_morale_default(-1);

    let skill = Skill::new("Archery", AttributeKey::Ref)
        .with_rank(3)
        .with_modifier(2);

    // 1. Derivation
    let derived = derive_default(&skill, Some(&actor.attributes));
    assert_eq!(derived.total_modifier, 3);
    assert_eq!(derived.base_formula, "3d6khx");

    // 2. Popup input: user types "+2" and a target number of 5
    let user_modifier = derived.total_modifier + formula::parse_modifier("2");
    let target_number = formula::parse_target_number("5");

    // 3. Context captured at confirm time
    let ctx = RollContext {
        base_formula: derived.base_formula,
        user_modifier,
        morale: actor.morale(),
        target_number,
    };
    assert_eq!(ctx.resolve().text, "(3d6khx + 5) - 1");

    // 4. Target check against an evaluated total
    assert_eq!(formula::target_number_check(9, ctx.target_number), Some(true));
    assert_eq!(formula::target_number_check(4, ctx.target_number), Some(false));
}

#[test]
fn untrained_roll_ignores_everything_but_the_penalty() {
    init_tracing();

    let attrs = AttributeSet::new().with(AttributeKey::Int, 6);
    let skill = Skill::new("Alchemy", AttributeKey::Int)
        .with_rank(5)
        .with_modifier(4)
        .untrained();

    let derived = derive_default(&skill, Some(&attrs));
    let ctx = RollContext {
        base_formula: derived.base_formula,
        user_modifier: derived.total_modifier,
        morale: 0,
        target_number: 0,
    };

    assert_eq!(ctx.resolve().text, "1d6khx - 3");
    assert_eq!(formula::target_number_check(4, ctx.target_number), None);
}

#[test]
fn configured_dice_shape_flows_into_derivation() {
    let config = RulesConfig::from_toml(
        r#"
        [dice]
        faces = 8

        [untrained]
        penalty = -2
        "#,
    )
    .expect("config");

    let skill = Skill::new("Archery", AttributeKey::Ref).with_rank(2);
    let derived = derive(&skill, Some(&AttributeSet::new()), &config.dice, &config.untrained);
    assert_eq!(derived.base_formula, "2d8khx");

    let untrained = derive(
        &Skill::new("Alchemy", AttributeKey::Int).untrained(),
        Some(&AttributeSet::new()),
        &config.dice,
        &config.untrained,
    );
    assert_eq!(untrained.total_modifier, -2);
    assert_eq!(untrained.base_formula, "1d8khx");
}

#[test]
fn configured_morale_bounds_flow_into_the_actor() {
    let config = RulesConfig::from_toml(
        r#"
        [morale]
        min = -1
        max = 2
        "#,
    )
    .expect("config");

    let mut actor = ActorRecord::new("Saga", ActorKind::Legend { lore_coins: 2 });
    actor.set_morale(6, &config.morale);
    assert_eq!(actor.morale(), 2);
    actor.set_morale(-6, &config.morale);
    assert_eq!(actor.morale(), -1);
}

#[test]
fn config_round_trips_through_a_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("lore.toml");
    std::fs::write(&path, "[target_number]\ndefault_value = 4\n").expect("write");

    let config = RulesConfig::from_file(&path).expect("load");
    assert_eq!(config.target_number.default_value, 4);
    assert_eq!(config.dice.faces, 6);
}

// ---------------------------------------------------------------------------
// Gauge update → condition → ancestry swap → tags
// ---------------------------------------------------------------------------

#[test]
fn wound_update_knocks_actor_unconscious_in_one_update() {
    let mut actor = ActorRecord::new("Grunt", ActorKind::Lackey { rank: 1 });

    let update = plan_gauge_update(
        &actor,
        GaugeUpdate {
            wounds: Some(3),
            ..GaugeUpdate::default()
        },
    );
    apply_gauge_update(&mut actor, update);

    assert!(actor.wounds.is_full());
    assert!(actor.conditions.unconscious);

    // Healing back down leaves the condition set.
    let heal = plan_gauge_update(
        &actor,
        GaugeUpdate {
            wounds: Some(0),
            ..GaugeUpdate::default()
        },
    );
    apply_gauge_update(&mut actor, heal);
    assert_eq!(actor.wounds.value, 0);
    assert!(actor.conditions.unconscious);
}

#[test]
fn ancestry_swap_reconciles_tags() {
    let mut actor = ActorRecord::new("Saga", ActorKind::Legend { lore_coins: 2 });
    actor.tags = vec!["brave".to_string()];

    let human = Ancestry {
        name: "Human".to_string(),
        tag: "human".to_string(),
        size_tag: "Medium".to_string(),
        extra_tags: String::new(),
    };
    let first_auto = tags::auto_tags(Some(&human));
    actor.tags = tags::reconcile(&actor.tags, &[], &first_auto);
    assert_eq!(actor.tags, vec!["brave", "ancestry:human", "size:medium"]);

    let trollkin = Ancestry {
        name: "Trollkin".to_string(),
        tag: "trollkin".to_string(),
        size_tag: "Large".to_string(),
        extra_tags: "regeneration".to_string(),
    };
    let next_auto = tags::auto_tags(Some(&trollkin));
    actor.tags = tags::reconcile(&actor.tags, &first_auto, &next_auto);
    assert_eq!(
        actor.tags,
        vec!["brave", "ancestry:trollkin", "size:large", "regeneration"]
    );
}
