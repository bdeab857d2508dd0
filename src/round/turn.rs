//! Turn hand-over.

use crate::core::Party;

use super::{DuelEvent, EventBatch, NarrativeCategory, RoundState};

/// Moves turn ownership, honouring handcuffs.
pub struct TurnController;

impl TurnController {
    /// Offer the turn to `next`.
    ///
    /// A handcuffed `next` loses the offer: the flag clears, a skip is
    /// announced and the current owner keeps the turn.
    pub fn hand_over(state: &mut RoundState, next: Party, events: &mut EventBatch) {
        let combatant = &mut state.combatants[next];
        if combatant.handcuffed {
            combatant.handcuffed = false;
            tracing::debug!(skipped = %next, keeps = %state.turn, "turn skipped");
            events.push(DuelEvent::TurnSkipped { party: next });
            events.narrative(format!("{next} is handcuffed. Turn skipped."), NarrativeCategory::System);
        } else {
            state.turn = next;
            tracing::debug!(turn = %next, "turn passed");
        }
    }
}
