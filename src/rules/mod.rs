//! Game rules: acquisition, activation, market upkeep, catalog propagation.
//!
//! `MarketEngine` is the only component that changes an `EngineState`.
//! Transitions are synchronous and never interleave; each returns a new
//! state together with an outcome.

pub mod engine;
mod market;
pub mod outcome;

pub use engine::MarketEngine;
pub use outcome::{Acquisition, ActionOutcome, Activation, Rejection, Transition};
