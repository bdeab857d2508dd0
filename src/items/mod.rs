//! Modifier items and their effects.
//!
//! - `Item`: the five item kinds
//! - `ItemList`: a party's held items, in acquisition order
//! - `grant_items`: per-load item grants
//! - `ItemEffectResolver`: applies an item use to round state

mod item;
mod resolver;

pub use item::{grant_items, Item, ItemList};
pub use resolver::{ItemEffectResolver, ItemOutcome};
