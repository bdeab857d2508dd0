//! The shotgun magazine: a shuffled, front-consumed sequence of shells.
//!
//! - `Shell`: one binary outcome
//! - `Magazine`: the current load, consumed through a cursor
//! - `LoadSummary`: live/blank counts announced when a load happens

mod shell;
mod load;

pub use shell::Shell;
pub use load::{LoadSummary, Magazine};
