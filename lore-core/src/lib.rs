//! # LORE Core Rules Library
//!
//! Host-agnostic rules engine for the LORE tabletop RPG. A virtual-tabletop
//! host owns the documents, the rendering, and the dice evaluator; this crate
//! owns the arithmetic between them:
//!
//! - **Attributes** — six ability scores (1–6) and their derived modifiers
//! - **Skills** — rank-based dice pools tied to an attribute, with trained /
//!   untrained derivation
//! - **Formula composition** — assembling a base dice pool, a flat modifier,
//!   and a morale adjustment into one evaluable dice-notation string
//! - **Actors** — Player / Legend / Lackey records, wound and fatigue gauges,
//!   auto-applied conditions, tag reconciliation
//! - **Coins** — the deterministic lore-coin scatter layout
//!
//! ## Design Contract
//!
//! Every operation here is a pure, synchronous function over already-validated
//! inputs. Derivation never mutates the record it reads; fallible paths resolve
//! to documented defaults instead of crossing the public boundary as errors.

#![deny(clippy::unwrap_used)]
#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod actor;
pub mod attributes;
pub mod coins;
pub mod config;
pub mod error;
pub mod formula;
pub mod roll;
pub mod skill;
pub mod tags;
pub mod types;

pub use config::RulesConfig;
pub use error::LoreError;
pub use types::*;
