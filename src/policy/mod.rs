//! Decision policies.
//!
//! A policy reads a `RestrictedView` and returns one `Decision`. It never
//! touches the engine; the driver turns the decision into an engine call.
//!
//! - `HeuristicPolicy`: deterministic priority-list opponent
//! - `RandomPolicy`: seeded uniform baseline

mod decision;
mod heuristic;
mod random;

pub use decision::{Decision, DecisionPolicy};
pub use heuristic::{HeuristicPolicy, PolicyThresholds};
pub use random::RandomPolicy;
