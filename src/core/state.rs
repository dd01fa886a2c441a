//! Engine state: zones, ledger and the instance table.
//!
//! ## EngineState
//!
//! Everything a transition reads or writes:
//! - Zone set (instance membership and order)
//! - Resource ledger
//! - Instance table (definition snapshots by id)
//! - Id allocator
//!
//! The catalog is deliberately not part of the state; the engine owns it.
//! All collections are persistent, so `clone()` is O(1) and transitions
//! can return a fresh state without disturbing the caller's copy.

use im::HashMap as ImHashMap;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::config::{MarketConfig, MarketRow, Zone};
use super::entity::{InstanceId, InstanceIdAllocator};
use super::error::EngineError;
use super::ledger::ResourceLedger;
use crate::cards::{CardDefinition, CardInstance};
use crate::zones::{ZonePosition, ZoneSet};

/// Complete game state for one session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineState {
    /// Zone membership.
    pub zones: ZoneSet,

    /// Resource counters.
    pub ledger: ResourceLedger,

    /// Card instances by id.
    instances: ImHashMap<InstanceId, CardInstance>,

    ids: InstanceIdAllocator,
}

impl EngineState {
    /// An empty state: no cards anywhere, ledger at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // === Instance Management ===

    /// Create an instance of `definition` and place it.
    pub fn spawn(
        &mut self,
        definition: CardDefinition,
        zone: Zone,
        position: ZonePosition,
    ) -> Result<InstanceId, EngineError> {
        let id = self.ids.alloc();
        self.zones.add_to_zone(id, zone, position)?;
        self.instances.insert(id, CardInstance::new(id, definition));
        Ok(id)
    }

    /// Delete an instance from its zone and the table.
    pub fn discard(&mut self, id: InstanceId) -> Option<CardInstance> {
        self.zones.remove(id);
        self.instances.remove(&id)
    }

    /// Delete every instance in a zone.
    pub fn clear_zone(&mut self, zone: Zone) -> usize {
        let removed = self.zones.clear_zone(zone);
        for id in &removed {
            self.instances.remove(id);
        }
        removed.len()
    }

    #[must_use]
    pub fn instance(&self, id: InstanceId) -> Option<&CardInstance> {
        self.instances.get(&id)
    }

    pub(crate) fn instance_mut(&mut self, id: InstanceId) -> Option<&mut CardInstance> {
        self.instances.get_mut(&id)
    }

    /// Ids of every live instance.
    pub fn instance_ids(&self) -> impl Iterator<Item = InstanceId> + '_ {
        self.instances.keys().copied()
    }

    /// Zone of an instance; unknown ids are an error.
    pub fn locate(&self, id: InstanceId) -> Result<Zone, EngineError> {
        if !self.instances.contains_key(&id) {
            return Err(EngineError::UnknownInstance(id));
        }
        self.zones.get_zone(id).ok_or_else(|| {
            EngineError::InvariantViolation(format!("{id} has a definition but no zone"))
        })
    }

    // === Zone Views ===

    /// Instances in a zone, in display order.
    pub fn cards_in_zone(&self, zone: Zone) -> impl Iterator<Item = &CardInstance> + '_ {
        self.zones
            .cards_in_zone(zone)
            .filter_map(move |id| self.instances.get(&id))
    }

    #[must_use]
    pub fn zone_size(&self, zone: Zone) -> usize {
        self.zones.zone_size(zone)
    }

    pub fn hand(&self) -> impl Iterator<Item = &CardInstance> + '_ {
        self.cards_in_zone(Zone::Hand)
    }

    pub fn den(&self) -> impl Iterator<Item = &CardInstance> + '_ {
        self.cards_in_zone(Zone::Den)
    }

    pub fn friends(&self) -> impl Iterator<Item = &CardInstance> + '_ {
        self.cards_in_zone(Zone::Friend)
    }

    pub fn trash(&self) -> impl Iterator<Item = &CardInstance> + '_ {
        self.cards_in_zone(Zone::Trash)
    }

    pub fn market_row(&self, row: MarketRow) -> impl Iterator<Item = &CardInstance> + '_ {
        self.cards_in_zone(Zone::Market(row))
    }

    /// Definition names in the given zone, in order.
    #[must_use]
    pub fn names_in_zone(&self, zone: Zone) -> Vec<&str> {
        self.cards_in_zone(zone).map(CardInstance::name).collect()
    }

    /// Names of definitions with an instance in market, hand or board.
    ///
    /// These are barred from refilling a market slot.
    #[must_use]
    pub fn names_in_play(&self) -> FxHashSet<&str> {
        Zone::ALL
            .into_iter()
            .filter(|zone| zone.blocks_replacement())
            .flat_map(|zone| self.cards_in_zone(zone))
            .map(CardInstance::name)
            .collect()
    }

    // === Invariants ===

    /// Verify membership and capacity invariants.
    ///
    /// Every instance sits in exactly one zone; Hand, Den and each market
    /// row stay within their limits.
    pub fn check_invariants(&self, config: &MarketConfig) -> Result<(), EngineError> {
        self.zones.check_consistency()?;

        if self.zones.total_cards() != self.instances.len() {
            return Err(EngineError::InvariantViolation(format!(
                "{} placed instances but {} in the table",
                self.zones.total_cards(),
                self.instances.len()
            )));
        }
        for id in self.instances.keys() {
            if !self.zones.contains(*id) {
                return Err(EngineError::InvariantViolation(format!("{id} is not in any zone")));
            }
        }

        for zone in Zone::ALL {
            if let Some(limit) = config.capacity(zone) {
                let size = self.zone_size(zone);
                if size > limit {
                    return Err(EngineError::CapacityExceeded { zone, size, limit });
                }
            }
        }
        Ok(())
    }
}
