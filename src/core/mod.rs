//! Core engine types: ids, zones, ledger, state, actions, RNG, configuration.

pub mod action;
pub mod config;
pub mod entity;
pub mod error;
pub mod ledger;
pub mod rng;
pub mod state;

pub use action::Action;
pub use config::{MarketConfig, MarketRow, Zone};
pub use entity::{InstanceId, InstanceIdAllocator};
pub use error::EngineError;
pub use ledger::ResourceLedger;
pub use rng::{GameRng, Randomizer, SequenceRandomizer};
pub use state::EngineState;
