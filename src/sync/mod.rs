//! Best-effort catalog persistence.
//!
//! Catalog edits take effect in memory immediately; the write to the store
//! happens on a background thread. There is no rollback: if a save fails
//! the in-memory catalog stays as edited and the failure is only recorded
//! and logged.

mod writer;

pub use writer::{CatalogSync, SyncReport};
