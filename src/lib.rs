//! # raccoon-market
//!
//! Market and economy rules engine for a single-player card-drafting game.
//!
//! Players buy cards from a tiered market with two currencies (food and
//! trash), place them in hand or on their board, and later activate them
//! for resources or victory points.
//!
//! ## Design Principles
//!
//! 1. **Pure Transitions**: Every operation maps the current `EngineState`
//!    to a new one. Persistent collections (`im`) make the copy O(1).
//!
//! 2. **Explicit Membership**: Zone membership is an `InstanceId -> Zone`
//!    map, never inferred from which container holds a value.
//!
//! 3. **Injectable Randomness**: Market deals and refills go through the
//!    `Randomizer` trait so tests can script every draw.
//!
//! ## Modules
//!
//! - `core`: Instance ids, zones, ledger, state, actions, RNG, configuration
//! - `zones`: Zone set (location tracking and movement)
//! - `cards`: Definitions, instances, catalog, catalog stores, display grouping
//! - `rules`: `MarketEngine` and transition outcomes
//! - `sync`: Background catalog writer
//! - `session`: Engine + state + writer for a presentation layer

pub mod cards;
pub mod core;
pub mod rules;
pub mod session;
pub mod sync;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    Action, EngineError, EngineState, GameRng, InstanceId, MarketConfig, MarketRow, Randomizer,
    ResourceLedger, SequenceRandomizer, Zone,
};

pub use crate::zones::{ZonePosition, ZoneSet};

pub use crate::cards::{
    CardCatalog, CardCatalogStore, CardDefinition, CardInstance, CardType, CatalogEdit, JsonFileStore, Keyword,
    MemoryStore, ResourceType, StoreError, Tier,
};

pub use crate::rules::{Acquisition, ActionOutcome, Activation, MarketEngine, Rejection, Transition};

pub use crate::session::GameSession;
pub use crate::sync::{CatalogSync, SyncReport};
