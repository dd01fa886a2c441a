//! Zone system for card locations.
//!
//! Zones are fixed by the game: four market rows, hand, the two board
//! areas (Den, Friend) and trash.
//!
//! ## Key Types
//!
//! - `Zone` / `MarketRow`: Zone identifiers (from `core::config`)
//! - `ZoneSet`: Instance location tracking and movement
//! - `ZonePosition`: Insertion point within a zone listing

pub mod manager;

pub use manager::{ZonePosition, ZoneSet};

// Re-export zone types from core for convenience
pub use crate::core::config::{MarketRow, Zone};
