//! Uniform random baseline.

use crate::core::GameRng;
use crate::round::RestrictedView;

use super::{Decision, DecisionPolicy};

/// Picks uniformly among shooting either party or using any held item.
#[derive(Clone, Debug)]
pub struct RandomPolicy {
    rng: GameRng,
}

impl RandomPolicy {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl DecisionPolicy for RandomPolicy {
    fn name(&self) -> &'static str {
        "random"
    }

    fn decide(&mut self, view: &RestrictedView) -> Decision {
        let choices = 2 + view.own_items.len();
        match self.rng.gen_index(choices) {
            0 => Decision::Shoot(view.me),
            1 => Decision::Shoot(view.opponent()),
            n => Decision::UseItem(n - 2),
        }
    }
}
