//! Market dealing and replenishment.
//!
//! Dealing shuffles the whole catalog once and walks it per tier, so each
//! row gets distinct definitions. Replenishment draws one definition of the
//! vacated row's tier that is not already in market, hand or board; trashed
//! definitions are eligible again.

use crate::cards::{CardCatalog, CardDefinition};
use crate::core::config::{MarketConfig, MarketRow, Zone};
use crate::core::entity::InstanceId;
use crate::core::error::EngineError;
use crate::core::rng::Randomizer;
use crate::core::state::EngineState;
use crate::zones::ZonePosition;

/// Replace every market row with a fresh deal.
///
/// Old market instances are discarded. Rows hold up to
/// `market_row_size` cards, fewer if the tier is short.
pub(crate) fn deal_market<R: Randomizer>(
    state: &mut EngineState,
    catalog: &CardCatalog,
    config: &MarketConfig,
    rng: &mut R,
) -> Result<(), EngineError> {
    let mut pool: Vec<&CardDefinition> = catalog.iter().collect();
    rng.shuffle(&mut pool);

    for row in MarketRow::ALL {
        let zone = Zone::Market(row);
        state.clear_zone(zone);

        let picks = pool
            .iter()
            .filter(|def| MarketRow::for_tier(def.tier) == row)
            .take(config.market_row_size);
        for def in picks {
            state.spawn((*def).clone(), zone, ZonePosition::End)?;
        }
        tracing::debug!(?row, cards = state.zone_size(zone), "dealt market row");
    }
    Ok(())
}

/// Fill the slot at `slot` in `row` from the tier pool.
///
/// Returns the new instance, or `None` when every definition of the tier
/// is already in play; the row then stays one card shorter.
pub(crate) fn replenish<R: Randomizer>(
    state: &mut EngineState,
    catalog: &CardCatalog,
    row: MarketRow,
    slot: usize,
    rng: &mut R,
) -> Result<Option<InstanceId>, EngineError> {
    let pick = {
        let in_play = state.names_in_play();
        let candidates: Vec<&CardDefinition> = catalog
            .by_tier(row.tier())
            .filter(|def| !in_play.contains(def.name.as_str()))
            .collect();
        rng.choose(&candidates).cloned()
    };

    let Some(definition) = pick else {
        tracing::debug!(?row, "no replacement available, row shrinks");
        return Ok(None);
    };

    tracing::debug!(?row, slot, name = %definition.name, "replenished market slot");
    state
        .spawn(definition, Zone::Market(row), ZonePosition::Index(slot))
        .map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Tier;
    use crate::core::rng::{GameRng, SequenceRandomizer};

    fn catalog(cards: &[(&str, Tier)]) -> CardCatalog {
        CardCatalog::new(cards.iter().map(|(n, t)| CardDefinition::new(*n, *t)).collect()).unwrap()
    }

    fn big_catalog() -> CardCatalog {
        let mut defs = Vec::new();
        for tier in Tier::ALL {
            for i in 0..8 {
                defs.push(CardDefinition::new(format!("{tier} #{i}"), tier));
            }
        }
        CardCatalog::new(defs).unwrap()
    }

    #[test]
    fn test_deal_fills_rows_without_duplicates() {
        let catalog = big_catalog();
        let mut state = EngineState::new();
        let mut rng = GameRng::new(42);

        deal_market(&mut state, &catalog, &MarketConfig::default(), &mut rng).unwrap();

        for row in MarketRow::ALL {
            let names = state.names_in_zone(Zone::Market(row));
            assert_eq!(names.len(), 5);
            let mut unique = names.clone();
            unique.sort();
            unique.dedup();
            assert_eq!(unique.len(), 5);
            assert!(state.market_row(row).all(|c| MarketRow::for_tier(c.definition.tier) == row));
        }
    }

    #[test]
    fn test_deal_short_tier() {
        let catalog = catalog(&[("A", Tier::Basic), ("B", Tier::Tier2), ("C", Tier::Tier2)]);
        let mut state = EngineState::new();

        deal_market(&mut state, &catalog, &MarketConfig::default(), &mut GameRng::new(1)).unwrap();

        assert_eq!(state.zone_size(Zone::Market(MarketRow::Free)), 1);
        assert_eq!(state.zone_size(Zone::Market(MarketRow::Tier1)), 0);
        assert_eq!(state.zone_size(Zone::Market(MarketRow::Tier2)), 2);
        assert_eq!(state.zone_size(Zone::Market(MarketRow::Tier3)), 0);
    }

    #[test]
    fn test_deal_identity_takes_catalog_order() {
        let catalog = big_catalog();
        let mut state = EngineState::new();
        let config = MarketConfig::default().with_market_row_size(2);

        deal_market(&mut state, &catalog, &config, &mut SequenceRandomizer::identity()).unwrap();

        assert_eq!(state.names_in_zone(Zone::Market(MarketRow::Tier3)), vec!["Tier 3 #0", "Tier 3 #1"]);
    }

    #[test]
    fn test_redeal_replaces_market() {
        let catalog = big_catalog();
        let mut state = EngineState::new();
        let config = MarketConfig::default();
        let mut rng = GameRng::new(5);

        deal_market(&mut state, &catalog, &config, &mut rng).unwrap();
        let first: Vec<_> = state.zones.cards_in_zone(Zone::Market(MarketRow::Tier1)).collect();
        deal_market(&mut state, &catalog, &config, &mut rng).unwrap();

        assert_eq!(state.zones.total_cards(), 20);
        for id in first {
            assert!(state.instance(id).is_none());
        }
        state.check_invariants(&config).unwrap();
    }

    #[test]
    fn test_replenish_skips_cards_in_play() {
        let catalog = catalog(&[("A", Tier::Tier1), ("B", Tier::Tier1), ("C", Tier::Tier1)]);
        let mut state = EngineState::new();
        state
            .spawn(catalog.get("A").unwrap().clone(), Zone::Hand, ZonePosition::End)
            .unwrap();
        state
            .spawn(catalog.get("B").unwrap().clone(), Zone::Market(MarketRow::Tier1), ZonePosition::End)
            .unwrap();

        let new_id = replenish(&mut state, &catalog, MarketRow::Tier1, 0, &mut GameRng::new(9))
            .unwrap()
            .unwrap();

        assert_eq!(state.instance(new_id).unwrap().name(), "C");
        assert_eq!(state.names_in_zone(Zone::Market(MarketRow::Tier1)), vec!["C", "B"]);
    }

    #[test]
    fn test_replenish_allows_trashed_cards() {
        let catalog = catalog(&[("A", Tier::Tier2)]);
        let mut state = EngineState::new();
        state
            .spawn(catalog.get("A").unwrap().clone(), Zone::Trash, ZonePosition::End)
            .unwrap();

        let new_id = replenish(&mut state, &catalog, MarketRow::Tier2, 0, &mut GameRng::new(0)).unwrap();

        assert!(new_id.is_some());
        assert_eq!(state.names_in_zone(Zone::Market(MarketRow::Tier2)), vec!["A"]);
    }

    #[test]
    fn test_replenish_empty_pool() {
        let catalog = catalog(&[("A", Tier::Tier3)]);
        let mut state = EngineState::new();
        state
            .spawn(catalog.get("A").unwrap().clone(), Zone::Den, ZonePosition::End)
            .unwrap();

        let new_id = replenish(&mut state, &catalog, MarketRow::Tier3, 0, &mut GameRng::new(0)).unwrap();

        assert_eq!(new_id, None);
        assert_eq!(state.zone_size(Zone::Market(MarketRow::Tier3)), 0);
    }
}
