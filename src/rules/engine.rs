//! The market engine.
//!
//! `MarketEngine` owns the catalog, the capacity limits and the randomizer.
//! Every operation takes the current `EngineState` by reference and returns
//! the next one, leaving the input untouched:
//! - What can be bought and where it lands
//! - How the market refills
//! - How activation pays out
//! - How catalog edits reach cards already in play

use crate::cards::{CardCatalog, CardType};
use crate::core::action::Action;
use crate::core::config::{MarketConfig, Zone};
use crate::core::entity::InstanceId;
use crate::core::error::EngineError;
use crate::core::rng::{GameRng, Randomizer};
use crate::core::state::EngineState;
use crate::zones::ZonePosition;

use super::market::{deal_market, replenish};
use super::outcome::{Acquisition, ActionOutcome, Activation, Rejection, Transition};

/// Rules engine for one game session.
///
/// ## Example
///
/// ```
/// use raccoon_market::cards::{CardCatalog, CardDefinition, Tier};
/// use raccoon_market::core::{GameRng, MarketRow};
/// use raccoon_market::rules::{Acquisition, MarketEngine};
///
/// let catalog = CardCatalog::new(vec![CardDefinition::new("Acorn", Tier::Basic)]).unwrap();
/// let mut engine = MarketEngine::new(GameRng::new(7));
/// let state = engine.initialize(catalog).unwrap();
///
/// let template = state.market_row(MarketRow::Free).next().unwrap().id;
/// let step = engine.acquire(&state, template).unwrap();
///
/// assert!(step.outcome.is_placed());
/// assert_eq!(step.state.hand().count(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct MarketEngine<R = GameRng> {
    config: MarketConfig,
    catalog: CardCatalog,
    rng: R,
}

impl<R: Randomizer> MarketEngine<R> {
    /// Engine with default limits and an empty catalog.
    #[must_use]
    pub fn new(rng: R) -> Self {
        Self::with_config(MarketConfig::default(), rng)
    }

    #[must_use]
    pub fn with_config(config: MarketConfig, rng: R) -> Self {
        Self {
            config,
            catalog: CardCatalog::empty(),
            rng,
        }
    }

    #[must_use]
    pub fn config(&self) -> &MarketConfig {
        &self.config
    }

    /// Catalog the engine currently draws from.
    #[must_use]
    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    fn check(&self, state: &EngineState) {
        debug_assert!(
            state.check_invariants(&self.config).is_ok(),
            "transition broke an invariant: {:?}",
            state.check_invariants(&self.config)
        );
    }

    // === Setup ===

    /// Start a game: deal the market from `catalog`, everything else empty.
    pub fn initialize(&mut self, catalog: CardCatalog) -> Result<EngineState, EngineError> {
        self.restart(&EngineState::new(), catalog)
    }

    /// Redeal the market. Hand, board, trash and ledger are kept.
    pub fn shuffle(&mut self, state: &EngineState, catalog: CardCatalog) -> Result<EngineState, EngineError> {
        self.catalog = catalog;
        let mut next = state.clone();
        deal_market(&mut next, &self.catalog, &self.config, &mut self.rng)?;
        tracing::debug!(catalog = self.catalog.len(), "shuffled market");
        self.check(&next);
        Ok(next)
    }

    /// Zero the ledger, empty hand, board and trash, and redeal.
    ///
    /// Instance ids keep counting up from `state`, so ids from the previous
    /// game never come back.
    pub fn restart(&mut self, state: &EngineState, catalog: CardCatalog) -> Result<EngineState, EngineError> {
        let mut next = state.clone();
        next.ledger = Default::default();
        for zone in [Zone::Hand, Zone::Den, Zone::Friend, Zone::Trash] {
            next.clear_zone(zone);
        }
        tracing::info!(catalog = catalog.len(), "starting new game");
        self.shuffle(&next, catalog)
    }

    // === Transitions ===

    /// Buy a market card.
    ///
    /// Unknown ids are an error. Cards outside the market and unaffordable
    /// cards are rejected with no change. When the destination is full the
    /// cost is still paid and the card stays where it was.
    pub fn acquire(&mut self, state: &EngineState, id: InstanceId) -> Result<Transition<Acquisition>, EngineError> {
        let zone = state.locate(id)?;
        let Zone::Market(row) = zone else {
            return Ok(Transition::new(
                state.clone(),
                Acquisition::Rejected(Rejection::NotInMarket(zone)),
            ));
        };
        let definition = state
            .instance(id)
            .ok_or(EngineError::UnknownInstance(id))?
            .definition
            .clone();

        if !state.ledger.can_afford(&definition.cost_values) {
            tracing::debug!(%id, name = %definition.name, "cannot afford card");
            return Ok(Transition::new(
                state.clone(),
                Acquisition::Rejected(Rejection::Unaffordable),
            ));
        }

        let mut next = state.clone();
        next.ledger.spend(&definition.cost_values);

        let target = match definition.card_type {
            CardType::Den => Zone::Den,
            CardType::Ally => Zone::Friend,
            _ => Zone::Hand,
        };
        let has_room = self
            .config
            .capacity(target)
            .map_or(true, |limit| next.zone_size(target) < limit);
        if !has_room {
            tracing::warn!(%id, name = %definition.name, zone = %target, "destination full, cost kept");
            self.check(&next);
            return Ok(Transition::new(next, Acquisition::Lost { full_zone: target }));
        }

        let outcome = if row.is_free() {
            let copy = next.spawn(definition, target, ZonePosition::End)?;
            Acquisition::Placed {
                instance: copy,
                zone: target,
                replacement: None,
            }
        } else {
            let (_, slot) = next
                .zones
                .position_of(id)
                .ok_or_else(|| EngineError::InvariantViolation(format!("{id} missing from {zone}")))?;
            next.zones.move_to_zone(id, target, ZonePosition::End);
            let replacement = replenish(&mut next, &self.catalog, row, slot, &mut self.rng)?;
            Acquisition::Placed {
                instance: id,
                zone: target,
                replacement,
            }
        };

        tracing::debug!(%id, zone = %target, ledger = ?next.ledger, "acquired card");
        self.check(&next);
        Ok(Transition::new(next, outcome))
    }

    /// Play a held card: apply its effect and move it to the trash.
    pub fn activate(&self, state: &EngineState, id: InstanceId) -> Result<Transition<Activation>, EngineError> {
        let zone = state.locate(id)?;
        if !zone.is_held() {
            return Ok(Transition::new(
                state.clone(),
                Activation::Rejected(Rejection::NotHeld(zone)),
            ));
        }
        let effect = state
            .instance(id)
            .ok_or(EngineError::UnknownInstance(id))?
            .definition
            .effect_values;

        let mut next = state.clone();
        next.ledger.gain(&effect);
        next.zones.move_to_zone(id, Zone::Trash, ZonePosition::End);

        tracing::debug!(%id, from = %zone, ledger = ?next.ledger, "activated card");
        self.check(&next);
        Ok(Transition::new(next, Activation::Trashed { from: zone, effect }))
    }

    /// Reconcile every zone with an edited catalog.
    ///
    /// Instances whose definition still exists pick up the new data in
    /// place; instances whose definition was removed are deleted without
    /// refilling. The engine then draws from `updated`.
    pub fn apply_catalog_edit(&mut self, state: &EngineState, updated: CardCatalog) -> EngineState {
        let mut next = state.clone();
        let ids: Vec<InstanceId> = next.instance_ids().collect();
        let mut refreshed = 0usize;
        let mut removed = 0usize;

        for id in ids {
            let Some(current) = next.instance(id) else {
                continue;
            };
            match updated.get(current.name()) {
                Some(def) if *def == current.definition => {}
                Some(def) => {
                    let def = def.clone();
                    if let Some(card) = next.instance_mut(id) {
                        card.refresh(def);
                        refreshed += 1;
                    }
                }
                None => {
                    next.discard(id);
                    removed += 1;
                }
            }
        }

        tracing::debug!(refreshed, removed, catalog = updated.len(), "applied catalog edit");
        self.catalog = updated;
        self.check(&next);
        next
    }

    /// Run one player action.
    ///
    /// `Shuffle` and `Restart` redeal from the engine's current catalog.
    pub fn apply_action(&mut self, state: &EngineState, action: Action) -> Result<Transition<ActionOutcome>, EngineError> {
        match action {
            Action::Acquire(id) => {
                let step = self.acquire(state, id)?;
                Ok(Transition::new(step.state, ActionOutcome::Acquired(step.outcome)))
            }
            Action::Activate(id) => {
                let step = self.activate(state, id)?;
                Ok(Transition::new(step.state, ActionOutcome::Activated(step.outcome)))
            }
            Action::Click(id) => match state.locate(id)? {
                Zone::Market(_) => self.apply_action(state, Action::Acquire(id)),
                zone if zone.is_held() => self.apply_action(state, Action::Activate(id)),
                _ => Ok(Transition::new(state.clone(), ActionOutcome::Ignored)),
            },
            Action::Shuffle => {
                let catalog = self.catalog.clone();
                Ok(Transition::new(self.shuffle(state, catalog)?, ActionOutcome::Dealt))
            }
            Action::Restart => {
                let catalog = self.catalog.clone();
                Ok(Transition::new(self.restart(state, catalog)?, ActionOutcome::Dealt))
            }
        }
    }
}
