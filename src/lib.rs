//! # shell-duel
//!
//! A turn-based duel over a partially observable magazine of live and
//! blank shells, with five modifier items and a computer opponent.
//!
//! ## Design Principles
//!
//! 1. **Exclusive Ownership**: `RoundEngine` owns the round state and
//!    never lends it out. Every operation runs to completion and either
//!    succeeds with an `EventBatch` or fails with the state untouched.
//!
//! 2. **Information Hiding by Type**: Policies receive a `RestrictedView`
//!    copy. It has shell counts and the viewer's own Magnifier reveal,
//!    never the magazine order.
//!
//! 3. **Deterministic**: A seed fixes every load, grant and round start.
//!    The heuristic opponent uses no randomness at all.
//!
//! ## Modules
//!
//! - `core`: Parties, configuration, RNG, errors
//! - `magazine`: Shell sequence with load/draw/peek/eject
//! - `items`: Item kinds, grants and the effect resolver
//! - `round`: State, turn controller, engine, events and views
//! - `policy`: Decision policies over restricted views
//! - `sim`: Self-play driver and statistics

pub mod core;
pub mod magazine;
pub mod items;
pub mod round;
pub mod policy;
pub mod sim;

// Re-export commonly used types
pub use crate::core::{DuelConfig, DuelError, GameRng, Party, PartyMap, Result};

pub use crate::magazine::{LoadSummary, Magazine, Shell};

pub use crate::items::{Item, ItemEffectResolver, ItemList, ItemOutcome};

pub use crate::round::{
    Combatant, DuelEvent, EventBatch, NarrativeCategory,
    PublicState, RestrictedView, RoundEngine, RoundState, TurnController,
};

pub use crate::policy::{Decision, DecisionPolicy, HeuristicPolicy, PolicyThresholds, RandomPolicy};

pub use crate::sim::{DuelOutcome, DuelRunner, DuelStats};
