//! Read-only projections of round state.

use serde::{Deserialize, Serialize};

use crate::core::{Party, PartyMap};
use crate::items::ItemList;
use crate::magazine::Shell;

use super::RoundState;

/// Everything a renderer may show.
///
/// Carries shell counts but not their order, and no stored knowledge.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicState {
    pub round: u32,
    pub turn: Party,
    pub health: PartyMap<u32>,
    pub items: PartyMap<ItemList>,
    pub handcuffed: PartyMap<bool>,
    pub live_left: u32,
    pub blank_left: u32,
    pub shells_remaining: usize,
    pub double_damage_pending: bool,
    pub winner: Option<Party>,
}

impl PublicState {
    pub(crate) fn project(state: &RoundState) -> Self {
        let magazine = state.magazine();
        Self {
            round: state.round,
            turn: state.turn,
            health: PartyMap::new(|p| state.combatants[p].health),
            items: PartyMap::new(|p| state.combatants[p].items.clone()),
            handcuffed: PartyMap::new(|p| state.combatants[p].handcuffed),
            live_left: magazine.live_left(),
            blank_left: magazine.blank_left(),
            shells_remaining: magazine.len(),
            double_damage_pending: state.double_damage_pending,
            winner: state.winner,
        }
    }
}

/// The only state a decision policy may read, relative to `me`.
///
/// A plain copy: holding one grants no access to the engine, and it
/// carries nothing about the magazine beyond its counts and the
/// viewer's own Magnifier reveal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestrictedView {
    /// The party this view was built for.
    pub me: Party,
    pub own_health: u32,
    pub opponent_health: u32,
    /// Nominal starting health ceiling for the round.
    pub max_health: u32,
    pub own_items: ItemList,
    /// Held items only, not how they were used.
    pub opponent_items: ItemList,
    pub live_left: u32,
    pub blank_left: u32,
    /// Front shell, when revealed by `me`'s own Magnifier.
    pub known_shell: Option<Shell>,
    pub own_handcuffed: bool,
    pub opponent_handcuffed: bool,
    pub double_damage_pending: bool,
}

impl RestrictedView {
    pub(crate) fn project(state: &RoundState, me: Party, max_health: u32) -> Self {
        let own = &state.combatants[me];
        let other = &state.combatants[me.other()];
        let magazine = state.magazine();
        Self {
            me,
            own_health: own.health,
            opponent_health: other.health,
            max_health,
            own_items: own.items.clone(),
            opponent_items: other.items.clone(),
            live_left: magazine.live_left(),
            blank_left: magazine.blank_left(),
            known_shell: own.knowledge,
            own_handcuffed: own.handcuffed,
            opponent_handcuffed: other.handcuffed,
            double_damage_pending: state.double_damage_pending,
        }
    }

    /// The other party.
    #[must_use]
    pub fn opponent(&self) -> Party {
        self.me.other()
    }

    /// Shells still in the magazine.
    #[must_use]
    pub fn shells_left(&self) -> u32 {
        self.live_left + self.blank_left
    }

    /// Chance the front shell is live, from counts alone.
    ///
    /// `None` when the magazine is empty.
    #[must_use]
    pub fn live_probability(&self) -> Option<f64> {
        let total = self.shells_left();
        (total > 0).then(|| f64::from(self.live_left) / f64::from(total))
    }

    /// Position of the first held `item`.
    #[must_use]
    pub fn item_index(&self, item: crate::items::Item) -> Option<usize> {
        self.own_items.iter().position(|&i| i == item)
    }
}
