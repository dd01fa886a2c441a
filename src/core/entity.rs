//! Card instance identification.
//!
//! Every card occurrence placed in a zone gets a unique `InstanceId`.
//! Two copies of the same definition in hand are two ids, never one
//! entry with a count.
//!
//! ## Usage
//!
//! ```
//! use raccoon_market::core::{InstanceId, InstanceIdAllocator};
//!
//! let mut ids = InstanceIdAllocator::default();
//! let a = ids.alloc();
//! let b = ids.alloc();
//!
//! assert_ne!(a, b);
//! assert_eq!(b.raw(), a.raw() + 1);
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a card instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct InstanceId(pub u32);

impl InstanceId {
    /// Create an instance ID from a raw value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Instance({})", self.0)
    }
}

/// Monotonic allocator for instance ids.
///
/// Ids are never reused within a session, even after shuffle or restart,
/// so a stale id held by the presentation layer can never alias a new card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceIdAllocator {
    next: u32,
}

impl InstanceIdAllocator {
    /// Allocate the next id.
    pub fn alloc(&mut self) -> InstanceId {
        let id = InstanceId(self.next);
        self.next += 1;
        id
    }

    /// Number of ids handed out so far.
    #[must_use]
    pub fn allocated(&self) -> u32 {
        self.next
    }
}
