//! # lore-vtt — Virtual-Tabletop Integration for the LORE Rules Engine
//!
//! This crate is the seam between the host-agnostic `lore-core` rules
//! library and a virtual-tabletop host that owns documents, rendering, the
//! canvas, and the dice evaluator.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │              VTT Host                    │
//! │  ┌────────────────────────────────────┐  │
//! │  │         lore-vtt                   │  │
//! │  │  ┌────────────┐  ┌─────────────┐   │  │
//! │  │  │ Host ports │  │ Roll popup  │   │  │
//! │  │  └─────┬──────┘  └──────┬──────┘   │  │
//! │  │        │                │          │  │
//! │  │        ▼                ▼          │  │
//! │  │   ┌───────────────────────────┐    │  │
//! │  │   │        lore-core          │    │  │
//! │  │   └───────────────────────────┘    │  │
//! │  └────────────────────────────────────┘  │
//! └──────────────────────────────────────────┘
//! ```
//!
//! The host never reaches into `lore-core` directly, and `lore-core` never
//! sees the host: all host state crosses through the port traits in
//! [`host`], replacing the global `game` / `canvas` singletons of the
//! original system with injected adapters.
//!
//! ## Modules
//!
//! - `host` — port traits the host adapts to (canvas view, dice evaluator)
//! - `target` — origin-token resolution and target distance display
//! - `popup` — roll pop-up state and its single-resolution confirm future
//! - `rolls` — the end-to-end skill-roll flow

#![deny(clippy::unwrap_used)]
#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod host;
pub mod popup;
pub mod rolls;
pub mod target;

pub use host::{CanvasView, DiceEvaluator, TokenSnapshot};
pub use popup::RollPopup;
pub use target::TargetInfo;
