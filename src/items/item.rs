use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{DuelConfig, GameRng, Party};
use crate::round::RoundState;

/// A modifier item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Item {
    /// Reveals the front shell.
    Magnifier,
    /// Heals the user by one.
    Cigarette,
    /// Ejects the front shell without firing.
    Beer,
    /// Makes the other party skip their next turn.
    Handcuffs,
    /// Doubles the damage of the next shot.
    Saw,
}

impl Item {
    /// Every item kind, in grant-table order.
    pub const ALL: [Item; 5] = [
        Item::Magnifier,
        Item::Cigarette,
        Item::Beer,
        Item::Handcuffs,
        Item::Saw,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Item::Magnifier => "MAGNIFIER",
            Item::Cigarette => "CIGARETTE",
            Item::Beer => "BEER",
            Item::Handcuffs => "HANDCUFFS",
            Item::Saw => "SAW",
        }
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Held items. Eight fit inline, which covers the default cap.
pub type ItemList = SmallVec<[Item; 8]>;

/// Grant a fresh batch of items to both parties.
///
/// Draws one count for the load, then deals one item at a time
/// alternating Player and Opponent. A party at `max_items` is skipped.
pub fn grant_items(state: &mut RoundState, rng: &mut GameRng, config: &DuelConfig) {
    if config.clear_items_on_load {
        for (_, combatant) in state.combatants.iter_mut() {
            combatant.items.clear();
        }
    }

    let count = rng.gen_range_inclusive(config.min_item_grant, config.max_item_grant);
    for _ in 0..count {
        for party in Party::ALL {
            let items = &mut state.combatants[party].items;
            if items.len() < config.max_items {
                if let Some(&item) = rng.choose(&Item::ALL) {
                    items.push(item);
                }
            }
        }
    }

    tracing::debug!(
        count,
        player_items = state.combatants[Party::Player].items.len(),
        opponent_items = state.combatants[Party::Opponent].items.len(),
        "items granted"
    );
}
