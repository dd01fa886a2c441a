//! Player actions.
//!
//! Every click in the UI maps to exactly one `Action`, and every action to
//! exactly one atomic transition.

use serde::{Deserialize, Serialize};

use super::entity::InstanceId;

/// A player action.
///
/// `Click` is the single-handler form the board uses: held cards are
/// activated, market cards are acquired, anything else is ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Acquire(InstanceId),
    Activate(InstanceId),
    Click(InstanceId),
    /// Redeal the market, keeping hand, board, trash and ledger.
    Shuffle,
    /// Start over from an empty ledger and board.
    Restart,
}

impl Action {
    /// The card this action targets, if any.
    #[must_use]
    pub fn target(&self) -> Option<InstanceId> {
        match self {
            Action::Acquire(id) | Action::Activate(id) | Action::Click(id) => Some(*id),
            Action::Shuffle | Action::Restart => None,
        }
    }
}
