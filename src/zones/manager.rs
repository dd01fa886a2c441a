//! Zone set: which instance sits in which zone.
//!
//! The `ZoneSet` keeps an explicit `InstanceId -> Zone` map plus an ordered
//! listing per zone. Order matters for display and for the market, where a
//! replacement card takes the vacated slot.
//!
//! Both structures are persistent (`im`), so cloning a zone set for the
//! next transition is O(1).

use im::{HashMap as ImHashMap, Vector};
use serde::{Deserialize, Serialize};

use crate::core::config::{MarketRow, Zone};
use crate::core::entity::InstanceId;
use crate::core::error::EngineError;

/// Where to insert an instance in a zone listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZonePosition {
    /// After the last card.
    End,
    /// At a specific index, clamped to the listing length.
    Index(usize),
}

/// Tracks zone membership for every live instance.
///
/// ## Usage
///
/// ```
/// use raccoon_market::core::{InstanceId, MarketRow, Zone};
/// use raccoon_market::zones::{ZonePosition, ZoneSet};
///
/// let mut zones = ZoneSet::new();
/// let row = Zone::Market(MarketRow::Tier1);
///
/// zones.add_to_zone(InstanceId(1), row, ZonePosition::End).unwrap();
/// zones.add_to_zone(InstanceId(2), row, ZonePosition::End).unwrap();
/// zones.move_to_zone(InstanceId(1), Zone::Hand, ZonePosition::End);
///
/// assert_eq!(zones.zone_size(row), 1);
/// assert_eq!(zones.get_zone(InstanceId(1)), Some(Zone::Hand));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneSet {
    locations: ImHashMap<InstanceId, Zone>,
    free_market: Vector<InstanceId>,
    tier1: Vector<InstanceId>,
    tier2: Vector<InstanceId>,
    tier3: Vector<InstanceId>,
    hand: Vector<InstanceId>,
    den: Vector<InstanceId>,
    friend: Vector<InstanceId>,
    trash: Vector<InstanceId>,
}

impl ZoneSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn listing(&self, zone: Zone) -> &Vector<InstanceId> {
        match zone {
            Zone::Market(MarketRow::Free) => &self.free_market,
            Zone::Market(MarketRow::Tier1) => &self.tier1,
            Zone::Market(MarketRow::Tier2) => &self.tier2,
            Zone::Market(MarketRow::Tier3) => &self.tier3,
            Zone::Hand => &self.hand,
            Zone::Den => &self.den,
            Zone::Friend => &self.friend,
            Zone::Trash => &self.trash,
        }
    }

    fn listing_mut(&mut self, zone: Zone) -> &mut Vector<InstanceId> {
        match zone {
            Zone::Market(MarketRow::Free) => &mut self.free_market,
            Zone::Market(MarketRow::Tier1) => &mut self.tier1,
            Zone::Market(MarketRow::Tier2) => &mut self.tier2,
            Zone::Market(MarketRow::Tier3) => &mut self.tier3,
            Zone::Hand => &mut self.hand,
            Zone::Den => &mut self.den,
            Zone::Friend => &mut self.friend,
            Zone::Trash => &mut self.trash,
        }
    }

    fn insert_at(&mut self, id: InstanceId, zone: Zone, position: ZonePosition) {
        let listing = self.listing_mut(zone);
        match position {
            ZonePosition::End => listing.push_back(id),
            ZonePosition::Index(i) => {
                let idx = i.min(listing.len());
                listing.insert(idx, id);
            }
        }
    }

    fn unlist(&mut self, id: InstanceId, zone: Zone) {
        let listing = self.listing_mut(zone);
        if let Some(idx) = listing.index_of(&id) {
            listing.remove(idx);
        }
    }

    /// Place a new instance.
    ///
    /// Fails if the instance is already placed somewhere.
    pub fn add_to_zone(&mut self, id: InstanceId, zone: Zone, position: ZonePosition) -> Result<(), EngineError> {
        if let Some(&existing) = self.locations.get(&id) {
            return Err(EngineError::AlreadyPlaced { id, zone: existing });
        }
        self.locations.insert(id, zone);
        self.insert_at(id, zone, position);
        Ok(())
    }

    /// Move an instance to another zone.
    ///
    /// Returns the old zone, or `None` if the instance wasn't found.
    pub fn move_to_zone(&mut self, id: InstanceId, new_zone: Zone, position: ZonePosition) -> Option<Zone> {
        let old_zone = self.locations.get(&id).copied()?;
        if old_zone == new_zone {
            return Some(old_zone);
        }

        self.unlist(id, old_zone);
        self.locations.insert(id, new_zone);
        self.insert_at(id, new_zone, position);

        Some(old_zone)
    }

    /// Remove an instance entirely.
    ///
    /// Returns the zone it was in, or `None` if not found.
    pub fn remove(&mut self, id: InstanceId) -> Option<Zone> {
        let zone = self.locations.remove(&id)?;
        self.unlist(id, zone);
        Some(zone)
    }

    /// Remove every instance from a zone, returning them in order.
    pub fn clear_zone(&mut self, zone: Zone) -> Vec<InstanceId> {
        let removed: Vec<_> = std::mem::take(self.listing_mut(zone)).into_iter().collect();
        for id in &removed {
            self.locations.remove(id);
        }
        removed
    }

    #[must_use]
    pub fn get_zone(&self, id: InstanceId) -> Option<Zone> {
        self.locations.get(&id).copied()
    }

    #[must_use]
    pub fn is_in_zone(&self, id: InstanceId, zone: Zone) -> bool {
        self.locations.get(&id) == Some(&zone)
    }

    /// Index of an instance within its zone listing.
    #[must_use]
    pub fn position_of(&self, id: InstanceId) -> Option<(Zone, usize)> {
        let zone = self.get_zone(id)?;
        let idx = self.listing(zone).index_of(&id)?;
        Some((zone, idx))
    }

    /// Instances in a zone, in listing order.
    pub fn cards_in_zone(&self, zone: Zone) -> impl Iterator<Item = InstanceId> + '_ {
        self.listing(zone).iter().copied()
    }

    #[must_use]
    pub fn zone_size(&self, zone: Zone) -> usize {
        self.listing(zone).len()
    }

    /// Total number of placed instances.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.locations.len()
    }

    #[must_use]
    pub fn contains(&self, id: InstanceId) -> bool {
        self.locations.contains_key(&id)
    }

    /// Check that the map and the listings agree.
    ///
    /// Every listed instance appears once, and its mapped zone is the
    /// listing it sits in.
    pub fn check_consistency(&self) -> Result<(), EngineError> {
        let mut listed = 0;
        for zone in Zone::ALL {
            for id in self.listing(zone).iter() {
                listed += 1;
                match self.locations.get(id) {
                    Some(&z) if z == zone => {}
                    Some(&z) => {
                        return Err(EngineError::InvariantViolation(format!(
                            "{id} listed in {zone} but mapped to {z}"
                        )))
                    }
                    None => {
                        return Err(EngineError::InvariantViolation(format!(
                            "{id} listed in {zone} but has no location"
                        )))
                    }
                }
            }
        }
        if listed != self.locations.len() {
            return Err(EngineError::InvariantViolation(format!(
                "{} listed entries for {} located instances",
                listed,
                self.locations.len()
            )));
        }
        Ok(())
    }
}
