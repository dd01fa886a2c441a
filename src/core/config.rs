//! Game configuration types.
//!
//! - `Zone` / `MarketRow`: Where an instance can be
//! - `MarketConfig`: Capacity limits and market row size
//!
//! Limits default to the tabletop rules (Den 6, Hand 10, rows of 5) and can
//! be overridden from a JSON file.

use serde::{Deserialize, Serialize};

use crate::cards::Tier;

/// A market sub-zone. One row per tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MarketRow {
    /// Basic-tier templates; acquiring copies instead of moving.
    Free,
    Tier1,
    Tier2,
    Tier3,
}

impl MarketRow {
    /// All rows in display order.
    pub const ALL: [MarketRow; 4] = [MarketRow::Free, MarketRow::Tier1, MarketRow::Tier2, MarketRow::Tier3];

    /// The row a tier is drawn into.
    #[must_use]
    pub const fn for_tier(tier: Tier) -> Self {
        match tier {
            Tier::Basic => MarketRow::Free,
            Tier::Tier1 => MarketRow::Tier1,
            Tier::Tier2 => MarketRow::Tier2,
            Tier::Tier3 => MarketRow::Tier3,
        }
    }

    /// The tier whose pool refills this row.
    #[must_use]
    pub const fn tier(self) -> Tier {
        match self {
            MarketRow::Free => Tier::Basic,
            MarketRow::Tier1 => Tier::Tier1,
            MarketRow::Tier2 => Tier::Tier2,
            MarketRow::Tier3 => Tier::Tier3,
        }
    }

    #[must_use]
    pub const fn is_free(self) -> bool {
        matches!(self, MarketRow::Free)
    }
}

/// Zone an instance occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Zone {
    Market(MarketRow),
    Hand,
    /// Board: Den cards.
    Den,
    /// Board: Ally cards.
    Friend,
    /// Terminal; nothing leaves the trash.
    Trash,
}

impl Zone {
    /// Every zone, market rows first.
    pub const ALL: [Zone; 8] = [
        Zone::Market(MarketRow::Free),
        Zone::Market(MarketRow::Tier1),
        Zone::Market(MarketRow::Tier2),
        Zone::Market(MarketRow::Tier3),
        Zone::Hand,
        Zone::Den,
        Zone::Friend,
        Zone::Trash,
    ];

    #[must_use]
    pub const fn is_market(self) -> bool {
        matches!(self, Zone::Market(_))
    }

    /// Hand or board: cards that can be activated.
    #[must_use]
    pub const fn is_held(self) -> bool {
        matches!(self, Zone::Hand | Zone::Den | Zone::Friend)
    }

    /// Zones whose occupants keep a definition out of the replacement pool.
    #[must_use]
    pub const fn blocks_replacement(self) -> bool {
        !matches!(self, Zone::Trash)
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Zone::Market(MarketRow::Free) => f.write_str("Free Market"),
            Zone::Market(row) => write!(f, "Market {}", row.tier()),
            Zone::Hand => f.write_str("Hand"),
            Zone::Den => f.write_str("Den"),
            Zone::Friend => f.write_str("Friend"),
            Zone::Trash => f.write_str("Trash"),
        }
    }
}

fn default_max_den_cards() -> usize {
    6
}

fn default_max_hand_size() -> usize {
    10
}

fn default_market_row_size() -> usize {
    5
}

/// Capacity limits.
///
/// ```
/// use raccoon_market::core::MarketConfig;
///
/// let config = MarketConfig::default().with_max_hand_size(8);
/// assert_eq!(config.max_den_cards, 6);
/// assert_eq!(config.max_hand_size, 8);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketConfig {
    #[serde(default = "default_max_den_cards")]
    pub max_den_cards: usize,

    #[serde(default = "default_max_hand_size")]
    pub max_hand_size: usize,

    /// Cards drawn into each market row at setup.
    #[serde(default = "default_market_row_size")]
    pub market_row_size: usize,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            max_den_cards: default_max_den_cards(),
            max_hand_size: default_max_hand_size(),
            market_row_size: default_market_row_size(),
        }
    }
}

impl MarketConfig {
    /// Parse a JSON override; missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub fn with_max_den_cards(mut self, max: usize) -> Self {
        self.max_den_cards = max;
        self
    }

    #[must_use]
    pub fn with_max_hand_size(mut self, max: usize) -> Self {
        self.max_hand_size = max;
        self
    }

    #[must_use]
    pub fn with_market_row_size(mut self, size: usize) -> Self {
        self.market_row_size = size;
        self
    }

    /// Capacity of a zone, `None` for unbounded zones.
    ///
    /// Market rows are bounded by the row size; Friend and Trash are not.
    #[must_use]
    pub fn capacity(&self, zone: Zone) -> Option<usize> {
        match zone {
            Zone::Market(_) => Some(self.market_row_size),
            Zone::Hand => Some(self.max_hand_size),
            Zone::Den => Some(self.max_den_cards),
            Zone::Friend | Zone::Trash => None,
        }
    }
}
