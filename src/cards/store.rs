//! Catalog persistence.
//!
//! The catalog file is a JSON document of the form `{ "cards": [...] }`.
//! The engine never touches a store; the session loads from one at startup
//! and hands saves to the background writer.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::definition::CardDefinition;

/// Errors loading or saving the catalog.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("catalog io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed catalog document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("catalog store unavailable: {0}")]
    Unavailable(String),
}

/// Load/save boundary for card definitions.
pub trait CardCatalogStore: Send + Sync {
    /// Read every definition.
    fn load(&self) -> Result<Vec<CardDefinition>, StoreError>;

    /// Replace the stored catalog with `cards`.
    fn save(&self, cards: &[CardDefinition]) -> Result<(), StoreError>;
}

impl<S: CardCatalogStore + ?Sized> CardCatalogStore for Arc<S> {
    fn load(&self) -> Result<Vec<CardDefinition>, StoreError> {
        (**self).load()
    }

    fn save(&self, cards: &[CardDefinition]) -> Result<(), StoreError> {
        (**self).save(cards)
    }
}

#[derive(Serialize)]
struct CatalogDocumentRef<'a> {
    cards: &'a [CardDefinition],
}

#[derive(Deserialize)]
struct CatalogDocument {
    cards: Vec<CardDefinition>,
}

/// File-backed store for the `{ "cards": [...] }` document.
///
/// Saves write to `<path>.tmp` first and rename over the target, so a
/// crash mid-write leaves the previous catalog intact.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl CardCatalogStore for JsonFileStore {
    fn load(&self) -> Result<Vec<CardDefinition>, StoreError> {
        let data = fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        let doc: CatalogDocument = serde_json::from_str(&data)?;
        tracing::debug!(path = ?self.path, cards = doc.cards.len(), "loaded catalog");
        Ok(doc.cards)
    }

    fn save(&self, cards: &[CardDefinition]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(&CatalogDocumentRef { cards })?;
        let tmp = self.tmp_path();
        fs::write(&tmp, json).map_err(|e| self.io_error(e))?;
        fs::rename(&tmp, &self.path).map_err(|e| self.io_error(e))?;
        tracing::debug!(path = ?self.path, cards = cards.len(), "saved catalog");
        Ok(())
    }
}

/// In-memory store. Clones share the same contents.
///
/// `set_failing(true)` makes every later call fail, which is how tests
/// exercise the no-rollback path.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    cards: Arc<Mutex<Vec<CardDefinition>>>,
    failing: Arc<AtomicBool>,
    saves: Arc<AtomicUsize>,
}

impl MemoryStore {
    #[must_use]
    pub fn new(cards: Vec<CardDefinition>) -> Self {
        Self {
            cards: Arc::new(Mutex::new(cards)),
            ..Self::default()
        }
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Number of successful saves.
    #[must_use]
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    /// Current stored contents.
    #[must_use]
    pub fn snapshot(&self) -> Vec<CardDefinition> {
        match self.cards.lock() {
            Ok(cards) => cards.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("memory store set to fail".into()));
        }
        Ok(())
    }
}

impl CardCatalogStore for MemoryStore {
    fn load(&self) -> Result<Vec<CardDefinition>, StoreError> {
        self.check()?;
        Ok(self.snapshot())
    }

    fn save(&self, cards: &[CardDefinition]) -> Result<(), StoreError> {
        self.check()?;
        let mut stored = self
            .cards
            .lock()
            .map_err(|_| StoreError::Unavailable("memory store lock poisoned".into()))?;
        *stored = cards.to_vec();
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Tier;

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("cards.json"));
        let cards = vec![
            CardDefinition::new("Acorn", Tier::Basic),
            CardDefinition::new("Storm Drain", Tier::Tier1),
        ];

        store.save(&cards).unwrap();
        let loaded = store.load().unwrap();

        assert_eq!(loaded, cards);
        assert!(!store.tmp_path().exists());
    }

    #[test]
    fn test_file_reads_hand_authored_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cards.json");
        fs::write(
            &path,
            r#"{ "cards": [ { "name": "Acorn", "tier": "Basic", "cardType": "", "keywords": ["Stackable"] } ] }"#,
        )
        .unwrap();

        let loaded = JsonFileStore::new(&path).load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert!(loaded[0].is_stackable());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nope.json"));
        assert!(matches!(store.load(), Err(StoreError::Io { .. })));
    }

    #[test]
    fn test_malformed_file_is_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cards.json");
        fs::write(&path, "[1, 2, 3]").unwrap();

        assert!(matches!(JsonFileStore::new(&path).load(), Err(StoreError::Json(_))));
    }

    #[test]
    fn test_memory_store_shares_state() {
        let store = MemoryStore::new(vec![CardDefinition::new("Acorn", Tier::Basic)]);
        let other = store.clone();

        other.save(&[]).unwrap();

        assert!(store.load().unwrap().is_empty());
        assert_eq!(store.save_count(), 1);
    }

    #[test]
    fn test_memory_store_failure_switch() {
        let store = MemoryStore::new(vec![]);
        store.set_failing(true);

        assert!(store.load().is_err());
        assert!(store.save(&[]).is_err());
        assert_eq!(store.save_count(), 0);

        store.set_failing(false);
        assert!(store.save(&[]).is_ok());
    }
}
