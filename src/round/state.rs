//! Round state: combatants, magazine, turn ownership and shared flags.

use crate::core::{Party, PartyMap, Result};
use crate::items::ItemList;
use crate::magazine::{Magazine, Shell};

/// One side's table position.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Combatant {
    /// Remaining health. Zero means eliminated.
    pub health: u32,

    /// Held items in acquisition order.
    pub items: ItemList,

    /// Skip the next turn hand-over to this party.
    pub handcuffed: bool,

    /// Front shell revealed by this party's own Magnifier.
    ///
    /// Only the Opponent ever stores knowledge; a Player's reveal is
    /// narrated and dropped.
    pub knowledge: Option<Shell>,
}

impl Combatant {
    /// A combatant with the given health and nothing else.
    #[must_use]
    pub fn new(health: u32) -> Self {
        Self {
            health,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_eliminated(&self) -> bool {
        self.health == 0
    }
}

/// Complete round state, owned by a `RoundEngine`.
///
/// Construct one directly to set up a specific table (tests, puzzles,
/// replays) and hand it to `RoundEngine::from_state`.
#[derive(Clone, Debug)]
pub struct RoundState {
    /// Both sides of the table.
    pub combatants: PartyMap<Combatant>,

    /// Whose turn it is.
    pub turn: Party,

    /// Set by Saw, consumed by the next shot whatever its outcome.
    pub double_damage_pending: bool,

    /// Round counter (starts at 0, incremented by `start_round`).
    pub round: u32,

    /// Set the instant a combatant's health reaches zero.
    pub winner: Option<Party>,

    magazine: Magazine,
}

impl RoundState {
    /// Both parties at `health`, Player to act, empty magazine.
    #[must_use]
    pub fn new(health: u32) -> Self {
        Self {
            combatants: PartyMap::new(|_| Combatant::new(health)),
            turn: Party::Player,
            double_damage_pending: false,
            round: 0,
            winner: None,
            magazine: Magazine::new(),
        }
    }

    /// Replace the magazine.
    #[must_use]
    pub fn with_magazine(mut self, magazine: Magazine) -> Self {
        self.magazine = magazine;
        self.clear_knowledge();
        self
    }

    /// Set whose turn it is.
    #[must_use]
    pub fn with_turn(mut self, turn: Party) -> Self {
        self.turn = turn;
        self
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Read-only magazine access stays inside the crate so the shell
    /// order can only leave through `peek` under item rules.
    pub(crate) fn magazine(&self) -> &Magazine {
        &self.magazine
    }

    pub(crate) fn magazine_mut(&mut self) -> &mut Magazine {
        &mut self.magazine
    }

    /// Fire the front shell. Any reveal of it becomes stale.
    pub(crate) fn draw_shell(&mut self) -> Result<Shell> {
        let shell = self.magazine.draw()?;
        self.clear_knowledge();
        Ok(shell)
    }

    /// Eject the front shell without firing. Any reveal of it becomes stale.
    pub(crate) fn eject_shell(&mut self) -> Result<Shell> {
        let shell = self.magazine.eject()?;
        self.clear_knowledge();
        Ok(shell)
    }

    pub(crate) fn clear_knowledge(&mut self) {
        for (_, combatant) in self.combatants.iter_mut() {
            combatant.knowledge = None;
        }
    }
}
