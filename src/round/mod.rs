//! Round state machine.
//!
//! - `RoundState`: both combatants, the magazine, turn and shared flags
//! - `TurnController`: turn hand-over with handcuff skips
//! - `RoundEngine`: the public operations, returning `EventBatch`es
//! - `PublicState` / `RestrictedView`: read-only projections
//!
//! ## Information Hiding
//!
//! The engine owns its `RoundState` outright and never lends it out.
//! Consumers see copies: `PublicState` for rendering, `RestrictedView`
//! for decision policies. Neither contains the unconsumed shell order.

mod state;
mod events;
mod turn;
mod view;
mod engine;

pub use state::{Combatant, RoundState};
pub use events::{DuelEvent, EventBatch, NarrativeCategory};
pub use turn::TurnController;
pub use view::{PublicState, RestrictedView};
pub use engine::RoundEngine;
