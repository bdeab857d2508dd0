//! Party identification and per-party data storage.
//!
//! ## Party
//!
//! The duel always has exactly two sides: the human-controlled `Player`
//! and the computer-controlled `Opponent`.
//!
//! ## PartyMap
//!
//! Fixed two-slot storage indexed by `Party` for O(1) access.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One side of the duel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Party {
    /// The human-controlled side.
    Player,
    /// The computer-controlled side.
    Opponent,
}

impl Party {
    /// Both parties in turn order.
    pub const ALL: [Party; 2] = [Party::Player, Party::Opponent];

    /// The other side of the table.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Party::Player => Party::Opponent,
            Party::Opponent => Party::Player,
        }
    }

    /// Slot index used by `PartyMap`.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Party::Player => 0,
            Party::Opponent => 1,
        }
    }

    /// Upper-case label used in narrative lines.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Party::Player => "PLAYER",
            Party::Opponent => "OPPONENT",
        }
    }
}

impl std::fmt::Display for Party {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-party data storage.
///
/// ## Example
///
/// ```
/// use shell_duel::core::{Party, PartyMap};
///
/// let mut health: PartyMap<u32> = PartyMap::with_value(4);
/// health[Party::Opponent] = 3;
///
/// assert_eq!(health[Party::Player], 4);
/// assert_eq!(health[Party::Opponent], 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PartyMap<T> {
    data: [T; 2],
}

impl<T> PartyMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Party) -> T) -> Self {
        Self {
            data: [factory(Party::Player), factory(Party::Opponent)],
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create a map with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Get a reference to a party's data.
    #[must_use]
    pub fn get(&self, party: Party) -> &T {
        &self.data[party.index()]
    }

    /// Get a mutable reference to a party's data.
    pub fn get_mut(&mut self, party: Party) -> &mut T {
        &mut self.data[party.index()]
    }

    /// Iterate over (Party, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (Party, &T)> {
        Party::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over (Party, &mut T) pairs in turn order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Party, &mut T)> {
        Party::ALL.into_iter().zip(self.data.iter_mut())
    }
}

impl<T: Default> Default for PartyMap<T> {
    fn default() -> Self {
        Self::with_default()
    }
}

impl<T> Index<Party> for PartyMap<T> {
    type Output = T;

    fn index(&self, party: Party) -> &Self::Output {
        self.get(party)
    }
}

impl<T> IndexMut<Party> for PartyMap<T> {
    fn index_mut(&mut self, party: Party) -> &mut Self::Output {
        self.get_mut(party)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_party_other() {
        assert_eq!(Party::Player.other(), Party::Opponent);
        assert_eq!(Party::Opponent.other(), Party::Player);
        assert_eq!(Party::Player.other().other(), Party::Player);
    }

    #[test]
    fn test_party_display() {
        assert_eq!(format!("{}", Party::Player), "PLAYER");
        assert_eq!(format!("{}", Party::Opponent), "OPPONENT");
    }

    #[test]
    fn test_party_map_new() {
        let map: PartyMap<usize> = PartyMap::new(|p| p.index() * 10);

        assert_eq!(map[Party::Player], 0);
        assert_eq!(map[Party::Opponent], 10);
    }

    #[test]
    fn test_party_map_mutation() {
        let mut map: PartyMap<i32> = PartyMap::with_value(0);

        map[Party::Player] = 10;
        map[Party::Opponent] = 20;

        assert_eq!(map[Party::Player], 10);
        assert_eq!(map[Party::Opponent], 20);
    }

    #[test]
    fn test_party_map_iter() {
        let map: PartyMap<i32> = PartyMap::new(|p| p.index() as i32);

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(Party::Player, &0), (Party::Opponent, &1)]);
    }

    #[test]
    fn test_party_map_serialization() {
        let map: PartyMap<Vec<u8>> = PartyMap::new(|p| vec![p.index() as u8]);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PartyMap<Vec<u8>> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
