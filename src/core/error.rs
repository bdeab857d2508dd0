//! Engine error kinds.
//!
//! Every error is a rejection: the engine reports it and leaves the
//! round state exactly as it was before the call.

use thiserror::Error;

use super::Party;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DuelError {
    #[error("it is not {party}'s turn")]
    InvalidTurn { party: Party },

    #[error("{party} has no item at index {index} (holds {len})")]
    InvalidItemIndex { party: Party, index: usize, len: usize },

    #[error("the magazine is empty")]
    EmptyMagazine,

    #[error("the game is already over")]
    GameAlreadyOver,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, DuelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = DuelError::InvalidTurn { party: Party::Opponent };
        assert_eq!(err.to_string(), "it is not OPPONENT's turn");

        let err = DuelError::InvalidItemIndex { party: Party::Player, index: 3, len: 2 };
        assert_eq!(err.to_string(), "PLAYER has no item at index 3 (holds 2)");
    }
}
