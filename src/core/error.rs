//! Engine errors.
//!
//! Rejected moves (unaffordable, not in market, zone full) are outcomes,
//! not errors. Only malformed input and broken invariants land here.

use thiserror::Error;

use super::config::Zone;
use super::entity::InstanceId;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("unknown card instance {0}")]
    UnknownInstance(InstanceId),

    #[error("{id} is already placed in {zone}")]
    AlreadyPlaced { id: InstanceId, zone: Zone },

    #[error("{zone} holds {size} cards, limit is {limit}")]
    CapacityExceeded { zone: Zone, size: usize, limit: usize },

    #[error("zone invariant violated: {0}")]
    InvariantViolation(String),
}
