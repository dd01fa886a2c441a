//! Game session: authoritative state plus catalog persistence.

use crate::cards::{CardCatalog, CardCatalogStore, CardDefinition, CatalogEdit, StoreError};
use crate::core::{Action, EngineError, EngineState, GameRng, MarketConfig, Randomizer};
use crate::rules::{ActionOutcome, MarketEngine};
use crate::sync::{CatalogSync, SyncReport};

/// One running game.
///
/// Holds the engine and the current state, and forwards catalog edits to
/// the background writer after applying them locally.
#[derive(Debug)]
pub struct GameSession<R = GameRng> {
    engine: MarketEngine<R>,
    state: EngineState,
    sync: CatalogSync,
    load_error: Option<StoreError>,
}

impl<R: Randomizer> GameSession<R> {
    /// Load the catalog from `store` and deal a new game.
    ///
    /// A failed load is kept in [`GameSession::load_error`] and the game
    /// starts from an empty catalog.
    pub fn open<S>(store: S, config: MarketConfig, rng: R) -> Result<Self, EngineError>
    where
        S: CardCatalogStore + 'static,
    {
        let (catalog, load_error) = match store.load() {
            Ok(cards) => (CardCatalog::from_lossy(cards), None),
            Err(err) => {
                tracing::warn!(%err, "failed to load catalog, starting empty");
                (CardCatalog::empty(), Some(err))
            }
        };

        let mut engine = MarketEngine::with_config(config, rng);
        let state = engine.initialize(catalog)?;
        tracing::info!(cards = engine.catalog().len(), "session opened");

        Ok(Self {
            engine,
            state,
            sync: CatalogSync::spawn(store),
            load_error,
        })
    }

    #[must_use]
    pub fn state(&self) -> &EngineState {
        &self.state
    }

    #[must_use]
    pub fn engine(&self) -> &MarketEngine<R> {
        &self.engine
    }

    #[must_use]
    pub fn catalog(&self) -> &CardCatalog {
        self.engine.catalog()
    }

    /// Error from the initial catalog load, if any.
    #[must_use]
    pub fn load_error(&self) -> Option<&StoreError> {
        self.load_error.as_ref()
    }

    #[must_use]
    pub fn sync(&self) -> &CatalogSync {
        &self.sync
    }

    /// Run an action and adopt the resulting state.
    pub fn perform(&mut self, action: Action) -> Result<ActionOutcome, EngineError> {
        let step = self.engine.apply_action(&self.state, action)?;
        self.state = step.state;
        Ok(step.outcome)
    }

    /// Add or replace a card definition.
    ///
    /// Returns the sequence number of the dispatched save.
    pub fn edit_card(&mut self, definition: CardDefinition) -> u64 {
        self.apply_edit(CatalogEdit::Upsert(definition))
    }

    /// Remove a card definition and every instance of it.
    pub fn delete_card(&mut self, name: impl Into<String>) -> u64 {
        self.apply_edit(CatalogEdit::Remove(name.into()))
    }

    fn apply_edit(&mut self, edit: CatalogEdit) -> u64 {
        let updated = self.catalog().apply_edit(edit);
        let cards = updated.definitions().to_vec();
        self.state = self.engine.apply_catalog_edit(&self.state, updated);
        self.sync.dispatch(cards)
    }

    /// Wait for pending saves, stop the writer and return its reports.
    pub fn close(self) -> Vec<SyncReport> {
        self.sync.shutdown()
    }
}
