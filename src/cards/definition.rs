//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable properties of a card as authored in
//! the catalog file: tier, type, cost, effect, keywords. Definitions are
//! keyed by `name`; an edit replaces the whole definition.
//!
//! Where a card currently sits is tracked separately by `CardInstance`
//! and the zone set.
//!
//! The serde layout matches the catalog JSON document (`"Tier 1"`,
//! `cardType`, `resourceType`, `cost_values`, ...).

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Rarity bracket. Determines the market row a card is drawn into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tier {
    Basic,
    #[serde(rename = "Tier 1")]
    Tier1,
    #[serde(rename = "Tier 2")]
    Tier2,
    #[serde(rename = "Tier 3")]
    Tier3,
}

impl Tier {
    /// All tiers in market display order.
    pub const ALL: [Tier; 4] = [Tier::Basic, Tier::Tier1, Tier::Tier2, Tier::Tier3];
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Tier::Basic => "Basic",
            Tier::Tier1 => "Tier 1",
            Tier::Tier2 => "Tier 2",
            Tier::Tier3 => "Tier 3",
        };
        f.write_str(name)
    }
}

/// Card type. Decides where an acquired card is placed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardType {
    Resource,
    Den,
    Ally,
    Ritual,
    /// Untyped card (`""` in the catalog file).
    #[default]
    #[serde(rename = "")]
    None,
}

/// Card keywords.
///
/// Only `Stackable` has meaning here, and only for display grouping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Keyword {
    Stackable,
    Shiny,
    Spiritual,
    Friend,
    Metal,
}

/// Currency a card is associated with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceType {
    Food,
    Trash,
}

/// Acquisition cost.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CostValues {
    #[serde(default)]
    pub food: u32,
    #[serde(default)]
    pub trash: u32,
}

impl CostValues {
    #[must_use]
    pub const fn new(food: u32, trash: u32) -> Self {
        Self { food, trash }
    }

    /// Free cards cost nothing in either currency.
    #[must_use]
    pub const fn is_free(&self) -> bool {
        self.food == 0 && self.trash == 0
    }
}

/// Activation effect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EffectValues {
    #[serde(default)]
    pub food: u32,
    #[serde(default)]
    pub trash: u32,
    #[serde(default)]
    pub vp: u32,
}

impl EffectValues {
    #[must_use]
    pub const fn new(food: u32, trash: u32, vp: u32) -> Self {
        Self { food, trash, vp }
    }
}

fn default_quantity() -> u32 {
    1
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use raccoon_market::cards::{CardDefinition, CardType, CostValues, Tier};
///
/// let den = CardDefinition::new("Storm Drain", Tier::Tier1)
///     .with_type(CardType::Den)
///     .with_cost(2, 1);
///
/// assert_eq!(den.cost_values, CostValues::new(2, 1));
/// assert!(den.is_den());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Unique catalog key.
    pub name: String,

    pub tier: Tier,

    #[serde(rename = "cardType", default)]
    pub card_type: CardType,

    /// Display cost string as authored (e.g. `"2 Food"`).
    #[serde(default)]
    pub cost: String,

    #[serde(default)]
    pub cost_values: CostValues,

    #[serde(default)]
    pub cost_text: String,

    /// Rules text.
    #[serde(default)]
    pub effect: String,

    #[serde(default)]
    pub effect_values: EffectValues,

    #[serde(default)]
    pub keywords: SmallVec<[Keyword; 4]>,

    #[serde(rename = "resourceType", default)]
    pub resource_type: SmallVec<[ResourceType; 2]>,

    #[serde(default)]
    pub flavor: String,

    /// Informational multiplicity used when printing a physical deck.
    #[serde(default = "default_quantity")]
    pub quantity: u32,

    #[serde(rename = "victoryPointsText", default)]
    pub victory_points_text: String,
}

impl CardDefinition {
    /// Create an untyped, free definition with no effect.
    #[must_use]
    pub fn new(name: impl Into<String>, tier: Tier) -> Self {
        Self {
            name: name.into(),
            tier,
            card_type: CardType::None,
            cost: String::new(),
            cost_values: CostValues::default(),
            cost_text: String::new(),
            effect: String::new(),
            effect_values: EffectValues::default(),
            keywords: SmallVec::new(),
            resource_type: SmallVec::new(),
            flavor: String::new(),
            quantity: default_quantity(),
            victory_points_text: String::new(),
        }
    }

    #[must_use]
    pub fn with_type(mut self, card_type: CardType) -> Self {
        self.card_type = card_type;
        self
    }

    #[must_use]
    pub fn with_cost(mut self, food: u32, trash: u32) -> Self {
        self.cost_values = CostValues::new(food, trash);
        self
    }

    #[must_use]
    pub fn with_effect(mut self, food: u32, trash: u32, vp: u32) -> Self {
        self.effect_values = EffectValues::new(food, trash, vp);
        self
    }

    /// Add a keyword (builder pattern). Duplicates are ignored.
    #[must_use]
    pub fn with_keyword(mut self, keyword: Keyword) -> Self {
        if !self.keywords.contains(&keyword) {
            self.keywords.push(keyword);
        }
        self
    }

    /// Add a resource type (builder pattern). Duplicates are ignored.
    #[must_use]
    pub fn with_resource(mut self, resource: ResourceType) -> Self {
        if !self.resource_type.contains(&resource) {
            self.resource_type.push(resource);
        }
        self
    }

    #[must_use]
    pub fn with_flavor(mut self, flavor: impl Into<String>) -> Self {
        self.flavor = flavor.into();
        self
    }

    #[must_use]
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    #[must_use]
    pub fn has_keyword(&self, keyword: Keyword) -> bool {
        self.keywords.contains(&keyword)
    }

    #[must_use]
    pub fn is_stackable(&self) -> bool {
        self.has_keyword(Keyword::Stackable)
    }

    #[must_use]
    pub fn is_den(&self) -> bool {
        self.card_type == CardType::Den
    }

    #[must_use]
    pub fn is_ally(&self) -> bool {
        self.card_type == CardType::Ally
    }
}
