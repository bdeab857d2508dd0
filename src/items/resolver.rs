//! Item effect resolution.
//!
//! Applies one item use to the round state. All checks that can fail run
//! before any mutation, so a rejected use leaves the state untouched.

use crate::core::{DuelConfig, DuelError, Party, Result};
use crate::magazine::Shell;
use crate::round::{EventBatch, NarrativeCategory, RoundState};

use super::Item;

/// What an item use produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ItemOutcome {
    /// The item consumed.
    pub item: Item,
    /// Shell revealed by Magnifier or ejected by Beer.
    pub revealed: Option<Shell>,
}

/// Maps (item, user) to a state mutation.
pub struct ItemEffectResolver;

impl ItemEffectResolver {
    /// Apply the item at `index` in `user`'s list and remove it.
    ///
    /// Does not reload an emptied magazine; the engine does that after
    /// announcing the use.
    pub fn apply(
        state: &mut RoundState,
        user: Party,
        index: usize,
        config: &DuelConfig,
        events: &mut EventBatch,
    ) -> Result<ItemOutcome> {
        let items = &state.combatants[user].items;
        let item = *items.get(index).ok_or(DuelError::InvalidItemIndex {
            party: user,
            index,
            len: items.len(),
        })?;

        let revealed = match item {
            Item::Magnifier => {
                let shell = state.magazine().peek()?;
                match user {
                    Party::Player => {
                        events.narrative(format!("Current shell is {shell}."), NarrativeCategory::System);
                    }
                    Party::Opponent => state.combatants[user].knowledge = Some(shell),
                }
                Some(shell)
            }
            Item::Cigarette => {
                let combatant = &mut state.combatants[user];
                combatant.health = (combatant.health + 1).min(config.health_ceiling);
                None
            }
            Item::Beer => {
                let shell = state.eject_shell()?;
                events.narrative(format!("Ejected a {shell} shell."), NarrativeCategory::System);
                Some(shell)
            }
            Item::Handcuffs => {
                state.combatants[user.other()].handcuffed = true;
                None
            }
            Item::Saw => {
                state.double_damage_pending = true;
                None
            }
        };

        state.combatants[user].items.remove(index);
        Ok(ItemOutcome { item, revealed })
    }
}
