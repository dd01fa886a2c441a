//! Game session wiring for a presentation layer.
//!
//! A session owns two layers:
//! - the authoritative in-memory `EngineState`, changed synchronously by
//!   every action and catalog edit
//! - a `CatalogSync` writer that persists edited catalogs in the background
//!
//! Between an edit and its save completing, the store lags the session.
//! A failed save leaves them diverged; the session's view wins.

mod game;

pub use game::GameSession;
