use serde::{Deserialize, Serialize};

use crate::core::Party;
use crate::round::RestrictedView;

/// One action chosen by a policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Decision {
    /// Use the item at this index of the deciding party's list.
    UseItem(usize),
    /// Fire at this party.
    Shoot(Party),
}

/// Chooses actions from a restricted view.
pub trait DecisionPolicy {
    /// Short name for logs and reports.
    fn name(&self) -> &'static str;

    /// Pick the next action for `view.me`.
    fn decide(&mut self, view: &RestrictedView) -> Decision;
}
