//! Transition results.
//!
//! A transition always yields a new state plus an outcome describing what
//! happened. Rejections are ordinary outcomes: the state comes back
//! unchanged and the caller decides whether to show anything.

use crate::cards::EffectValues;
use crate::core::config::Zone;
use crate::core::entity::InstanceId;
use crate::core::state::EngineState;

/// New state plus what the transition did.
#[derive(Clone, Debug)]
pub struct Transition<O> {
    pub state: EngineState,
    pub outcome: O,
}

impl<O> Transition<O> {
    #[must_use]
    pub fn new(state: EngineState, outcome: O) -> Self {
        Self { state, outcome }
    }

    /// Drop the outcome, keeping the state.
    #[must_use]
    pub fn into_state(self) -> EngineState {
        self.state
    }
}

/// Why a move was refused without any state change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// Acquire on a card outside the market.
    NotInMarket(Zone),
    /// Ledger can't cover the cost.
    Unaffordable,
    /// Activate on a card outside hand and board.
    NotHeld(Zone),
}

/// Result of acquiring a market card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Acquisition {
    /// Paid and placed.
    Placed {
        /// The placed instance. For free-market templates this is a fresh copy.
        instance: InstanceId,
        zone: Zone,
        /// Card drawn into the vacated market slot, if the pool had one.
        replacement: Option<InstanceId>,
    },
    /// Paid, but the destination was full. Nothing moved.
    Lost { full_zone: Zone },
    Rejected(Rejection),
}

impl Acquisition {
    #[must_use]
    pub fn is_placed(&self) -> bool {
        matches!(self, Acquisition::Placed { .. })
    }
}

/// Result of activating a held card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Activation {
    /// Effect applied, card moved to trash.
    Trashed { from: Zone, effect: EffectValues },
    Rejected(Rejection),
}

/// Result of a generic action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    Acquired(Acquisition),
    Activated(Activation),
    /// Click on a trashed card.
    Ignored,
    /// Market redealt (shuffle or restart).
    Dealt,
}
