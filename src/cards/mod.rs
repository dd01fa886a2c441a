//! Card system: definitions, instances, catalog, persistence.
//!
//! ## Key Types
//!
//! - `CardDefinition`: Static card data keyed by name
//! - `CardInstance`: One concrete occurrence of a definition
//! - `CardCatalog`: The session's definitions, immutable per edit
//! - `CardCatalogStore`: Load/save boundary for the catalog file
//!
//! ## Free-Market Templates
//!
//! Basic cards in the free market row are templates: acquiring one copies
//! it instead of moving it. That rule lives in the engine, not here.

pub mod catalog;
pub mod definition;
pub mod grouping;
pub mod instance;
pub mod store;

pub use catalog::{CardCatalog, CatalogEdit, CatalogError};
pub use definition::{CardDefinition, CardType, CostValues, EffectValues, Keyword, ResourceType, Tier};
pub use grouping::{display_count, group_stackable, CardGroup};
pub use instance::CardInstance;
pub use store::{CardCatalogStore, JsonFileStore, MemoryStore, StoreError};
