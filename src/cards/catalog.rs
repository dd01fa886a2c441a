//! Card catalog for definition lookup.
//!
//! The `CardCatalog` is the session's set of card definitions, keyed by
//! name and kept in authoring order (the order of the catalog file).
//! It is immutable: edits produce a new catalog via [`CardCatalog::apply_edit`].

use rustc_hash::FxHashMap;
use thiserror::Error;

use super::definition::{CardDefinition, Tier};

/// Errors building a catalog.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate card name '{0}'")]
    DuplicateName(String),

    #[error("card name must not be empty")]
    EmptyName,
}

/// An edit coming from the card editor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogEdit {
    /// Replace the definition with the same name, or append it if new.
    Upsert(CardDefinition),
    /// Remove the definition with this name.
    Remove(String),
}

/// Catalog of card definitions.
///
/// ## Example
///
/// ```
/// use raccoon_market::cards::{CardCatalog, CardDefinition, CatalogEdit, Tier};
///
/// let catalog = CardCatalog::new(vec![
///     CardDefinition::new("Acorn", Tier::Basic),
///     CardDefinition::new("Storm Drain", Tier::Tier1),
/// ])
/// .unwrap();
///
/// let edited = catalog.apply_edit(CatalogEdit::Remove("Acorn".into()));
/// assert_eq!(edited.len(), 1);
/// assert!(catalog.get("Acorn").is_some());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: Vec<CardDefinition>,
    index: FxHashMap<String, usize>,
}

impl CardCatalog {
    /// Build a catalog, rejecting duplicate or empty names.
    pub fn new(cards: Vec<CardDefinition>) -> Result<Self, CatalogError> {
        let mut index = FxHashMap::default();
        for (i, card) in cards.iter().enumerate() {
            if card.name.is_empty() {
                return Err(CatalogError::EmptyName);
            }
            if index.insert(card.name.clone(), i).is_some() {
                return Err(CatalogError::DuplicateName(card.name.clone()));
            }
        }
        Ok(Self { cards, index })
    }

    /// Build a catalog from untrusted data, keeping the first definition
    /// for each name and skipping unnamed cards.
    #[must_use]
    pub fn from_lossy(cards: Vec<CardDefinition>) -> Self {
        let mut kept = Vec::with_capacity(cards.len());
        let mut index = FxHashMap::default();
        for card in cards {
            if card.name.is_empty() {
                tracing::warn!("skipping catalog entry with empty name");
                continue;
            }
            if index.contains_key(&card.name) {
                tracing::warn!(name = %card.name, "skipping duplicate catalog entry");
                continue;
            }
            index.insert(card.name.clone(), kept.len());
            kept.push(card);
        }
        Self { cards: kept, index }
    }

    /// An empty catalog.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Get a definition by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CardDefinition> {
        self.index.get(name).map(|&i| &self.cards[i])
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over definitions in authoring order.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.iter()
    }

    /// Definitions of one tier, in authoring order.
    pub fn by_tier(&self, tier: Tier) -> impl Iterator<Item = &CardDefinition> {
        self.cards.iter().filter(move |c| c.tier == tier)
    }

    /// All definitions as a slice (the shape the store persists).
    #[must_use]
    pub fn definitions(&self) -> &[CardDefinition] {
        &self.cards
    }

    /// Produce the catalog that results from an editor action.
    ///
    /// Upserts keep the position of the replaced card; new cards go last.
    #[must_use]
    pub fn apply_edit(&self, edit: CatalogEdit) -> Self {
        let mut cards = self.cards.clone();
        match edit {
            CatalogEdit::Upsert(card) => match self.index.get(&card.name) {
                Some(&i) => cards[i] = card,
                None => cards.push(card),
            },
            CatalogEdit::Remove(name) => cards.retain(|c| c.name != name),
        }
        Self::from_lossy(cards)
    }
}
