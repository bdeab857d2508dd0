//! Fixed-priority opponent heuristic.
//!
//! Rules are tried in order and the first match wins:
//!
//! 1. Heal when health is at or below the heal threshold.
//! 2. Magnify when the front shell is unknown.
//! 3. Known live: saw, then handcuffs, then shoot the opponent.
//! 4. Known blank: shoot self for the extra turn.
//! 5. Unknown: act on the live probability of the front shell.
//!
//! Deterministic: the same view always yields the same decision.

use serde::{Deserialize, Serialize};

use crate::items::Item;
use crate::magazine::Shell;
use crate::round::RestrictedView;

use super::{Decision, DecisionPolicy};

/// Tunable cut-offs for the heuristic.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyThresholds {
    /// Heal when own health is at most this.
    pub heal_health: u32,

    /// Shoot self when the live chance is below this (and more than one shell remains).
    pub self_shot_below: f64,

    /// Play aggressively when the live chance is above this.
    pub aggressive_above: f64,

    /// Saw only when the live chance is above this.
    pub saw_above: f64,

    /// Drink Beer when the live chance is exactly this.
    pub beer_at: f64,
}

impl Default for PolicyThresholds {
    fn default() -> Self {
        Self {
            heal_health: 2,
            self_shot_below: 0.3,
            aggressive_above: 0.5,
            saw_above: 0.7,
            beer_at: 0.5,
        }
    }
}

/// The deterministic opponent policy.
#[derive(Clone, Debug, Default)]
pub struct HeuristicPolicy {
    thresholds: PolicyThresholds,
}

impl HeuristicPolicy {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_thresholds(thresholds: PolicyThresholds) -> Self {
        Self { thresholds }
    }

    /// Pure decision function behind `DecisionPolicy::decide`.
    #[must_use]
    pub fn evaluate(&self, view: &RestrictedView) -> Decision {
        let t = &self.thresholds;
        let use_item = |item| view.item_index(item).map(Decision::UseItem);
        let shoot_opponent = Decision::Shoot(view.opponent());
        let shoot_self = Decision::Shoot(view.me);

        if view.own_health <= t.heal_health {
            if let Some(d) = use_item(Item::Cigarette) {
                return d;
            }
        }

        match view.known_shell {
            None => {
                if let Some(d) = use_item(Item::Magnifier) {
                    return d;
                }
            }
            Some(Shell::Live) => {
                if !view.double_damage_pending {
                    if let Some(d) = use_item(Item::Saw) {
                        return d;
                    }
                }
                if !view.opponent_handcuffed {
                    if let Some(d) = use_item(Item::Handcuffs) {
                        return d;
                    }
                }
                return shoot_opponent;
            }
            Some(Shell::Blank) => return shoot_self,
        }

        let Some(p) = view.live_probability() else {
            return shoot_opponent;
        };
        let more_than_one = view.shells_left() > 1;

        if p < t.self_shot_below && more_than_one {
            return shoot_self;
        }

        if p > t.aggressive_above {
            if p > t.saw_above && !view.double_damage_pending {
                if let Some(d) = use_item(Item::Saw) {
                    return d;
                }
            }
            if !view.opponent_handcuffed && more_than_one {
                if let Some(d) = use_item(Item::Handcuffs) {
                    return d;
                }
            }
            return shoot_opponent;
        }

        if (p - t.beer_at).abs() < f64::EPSILON {
            if let Some(d) = use_item(Item::Beer) {
                return d;
            }
        }

        shoot_opponent
    }
}

impl DecisionPolicy for HeuristicPolicy {
    fn name(&self) -> &'static str {
        "heuristic"
    }

    fn decide(&mut self, view: &RestrictedView) -> Decision {
        let decision = self.evaluate(view);
        tracing::debug!(party = %view.me, ?decision, "heuristic decision");
        decision
    }
}
