//! Domain events emitted by engine operations.
//!
//! Each operation returns the events it caused, in order. Consumers
//! (renderers, audio, logs) react to them; nothing in the engine reads
//! them back.

use serde::{Deserialize, Serialize};

use crate::core::Party;
use crate::items::Item;
use crate::magazine::Shell;

/// Who a narrative line is attributed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NarrativeCategory {
    System,
    Player,
    Opponent,
}

impl From<Party> for NarrativeCategory {
    fn from(party: Party) -> Self {
        match party {
            Party::Player => NarrativeCategory::Player,
            Party::Opponent => NarrativeCategory::Opponent,
        }
    }
}

/// Something that happened at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DuelEvent {
    /// A new magazine was loaded.
    Loaded { lives: u32, blanks: u32 },

    /// A shell was fired.
    ShotFired {
        shooter: Party,
        target: Party,
        is_live: bool,
        damage: u32,
    },

    /// An item was consumed.
    ItemUsed {
        user: Party,
        item: Item,
        revealed: Option<Shell>,
    },

    /// A handcuffed party lost a turn.
    TurnSkipped { party: Party },

    /// A combatant reached zero health.
    GameOver { winner: Party },

    /// Human-readable log line. Never a source of policy input.
    Narrative {
        message: String,
        category: NarrativeCategory,
    },
}

/// Ordered events from one operation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventBatch {
    events: Vec<DuelEvent>,
}

impl EventBatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: DuelEvent) {
        self.events.push(event);
    }

    /// Append a narrative line.
    pub fn narrative(&mut self, message: impl Into<String>, category: NarrativeCategory) {
        self.push(DuelEvent::Narrative {
            message: message.into(),
            category,
        });
    }

    /// Append another batch.
    pub fn extend(&mut self, other: EventBatch) {
        self.events.extend(other.events);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[DuelEvent] {
        &self.events
    }

    pub fn iter(&self) -> impl Iterator<Item = &DuelEvent> {
        self.events.iter()
    }

    /// Events that are not narrative lines.
    pub fn transitions(&self) -> impl Iterator<Item = &DuelEvent> {
        self.events
            .iter()
            .filter(|e| !matches!(e, DuelEvent::Narrative { .. }))
    }

    /// Narrative messages only, in order.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.events.iter().filter_map(|e| match e {
            DuelEvent::Narrative { message, .. } => Some(message.as_str()),
            _ => None,
        })
    }
}

impl IntoIterator for EventBatch {
    type Item = DuelEvent;
    type IntoIter = std::vec::IntoIter<DuelEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_filters() {
        let mut batch = EventBatch::new();
        batch.narrative("BOOM!", NarrativeCategory::System);
        batch.push(DuelEvent::TurnSkipped { party: Party::Opponent });

        assert_eq!(batch.len(), 2);
        assert_eq!(batch.messages().collect::<Vec<_>>(), vec!["BOOM!"]);
        assert_eq!(
            batch.transitions().collect::<Vec<_>>(),
            vec![&DuelEvent::TurnSkipped { party: Party::Opponent }]
        );
    }

    #[test]
    fn test_category_from_party() {
        assert_eq!(NarrativeCategory::from(Party::Player), NarrativeCategory::Player);
        assert_eq!(NarrativeCategory::from(Party::Opponent), NarrativeCategory::Opponent);
    }

    #[test]
    fn test_event_serialization() {
        let event = DuelEvent::ShotFired {
            shooter: Party::Player,
            target: Party::Opponent,
            is_live: true,
            damage: 2,
        };
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: DuelEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }
}
