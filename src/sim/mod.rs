//! Self-play driver.
//!
//! Runs engines to completion by asking each party's policy for a
//! decision whenever that party holds the turn. Used for policy
//! evaluation and regression tests; it never sleeps or paces.

mod runner;

pub use runner::{DuelOutcome, DuelRunner, DuelStats};
