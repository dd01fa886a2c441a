//! Card instances - one concrete occurrence of a definition.
//!
//! An instance carries a snapshot of its definition so the zone set can be
//! rendered and scored without a catalog lookup. When the catalog is edited
//! the snapshot is swapped in place; the id never changes.
//!
//! The zone an instance occupies lives in the zone set, not here, so there
//! is exactly one source of truth for membership.

use serde::{Deserialize, Serialize};

use super::definition::CardDefinition;
use crate::core::entity::InstanceId;

/// A card instance in a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardInstance {
    /// Unique id for this occurrence.
    pub id: InstanceId,

    /// Definition data as of the last catalog edit.
    pub definition: CardDefinition,
}

impl CardInstance {
    /// Create an instance of a definition.
    #[must_use]
    pub fn new(id: InstanceId, definition: CardDefinition) -> Self {
        Self { id, definition }
    }

    /// Definition name (the catalog key).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.definition.name
    }

    /// Replace the definition snapshot, keeping identity.
    pub fn refresh(&mut self, definition: CardDefinition) {
        debug_assert_eq!(self.definition.name, definition.name);
        self.definition = definition;
    }
}
