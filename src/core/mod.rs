//! Core types: parties, configuration, RNG, errors.
//!
//! Everything here is independent of the round rules and is shared by
//! the magazine, items, round engine and policies.

pub mod party;
pub mod rng;
pub mod config;
pub mod error;

pub use party::{Party, PartyMap};
pub use rng::GameRng;
pub use config::DuelConfig;
pub use error::{DuelError, Result};
