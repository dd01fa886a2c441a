//! Catalog edit propagation tests.
//!
//! These tests verify that edits reach cards already in play:
//! - Edited definitions refresh every instance, wherever it is
//! - Removed definitions vanish from every zone without a refill
//! - Local edits stand even when the store rejects the save

use raccoon_market::{
    CardCatalog, CardDefinition, CardType, CatalogEdit, EngineState, GameRng, GameSession, JsonFileStore,
    MarketConfig, MarketEngine, MarketRow, MemoryStore, SequenceRandomizer, Tier, Zone,
};

fn defs() -> Vec<CardDefinition> {
    vec![
        CardDefinition::new("Acorn", Tier::Basic).with_effect(1, 0, 0),
        CardDefinition::new("Cardboard Box", Tier::Basic).with_type(CardType::Den),
        CardDefinition::new("Storm Drain", Tier::Tier1).with_cost(1, 0),
        CardDefinition::new("Pizza Crust", Tier::Tier1),
        CardDefinition::new("Attic", Tier::Tier2),
    ]
}

fn template(state: &EngineState, name: &str) -> raccoon_market::InstanceId {
    state
        .market_row(MarketRow::Free)
        .find(|card| card.name() == name)
        .map(|card| card.id)
        .unwrap()
}

/// An edit refreshes the market template and every copy in hand and trash.
#[test]
fn test_edit_refreshes_all_zones() {
    let mut engine = MarketEngine::new(GameRng::new(21));
    let mut state = engine.initialize(CardCatalog::new(defs()).unwrap()).unwrap();
    let acorn = template(&state, "Acorn");

    state = engine.acquire(&state, acorn).unwrap().state;
    state = engine.acquire(&state, acorn).unwrap().state;
    let played = state.zones.cards_in_zone(Zone::Hand).next().unwrap();
    state = engine.activate(&state, played).unwrap().state;

    let edited = CardDefinition::new("Acorn", Tier::Basic)
        .with_effect(3, 0, 1)
        .with_flavor("Now with more crunch.");
    let updated = engine.catalog().apply_edit(CatalogEdit::Upsert(edited.clone()));
    let next = engine.apply_catalog_edit(&state, updated);

    for zone in [Zone::Market(MarketRow::Free), Zone::Hand, Zone::Trash] {
        let cards: Vec<_> = next.cards_in_zone(zone).filter(|c| c.name() == "Acorn").collect();
        assert_eq!(cards.len(), 1, "one Acorn expected in {zone}");
        assert_eq!(cards[0].definition, edited);
    }
    assert_eq!(next.zones, state.zones);
    assert_eq!(next.ledger, state.ledger);
    assert_eq!(engine.catalog().get("Acorn"), Some(&edited));
}

/// Removing a definition deletes its instances and leaves the gap open.
#[test]
fn test_remove_shrinks_market_without_refill() {
    let mut engine = MarketEngine::new(SequenceRandomizer::identity());
    let state = engine.initialize(CardCatalog::new(defs()).unwrap()).unwrap();
    assert_eq!(state.zone_size(Zone::Market(MarketRow::Tier1)), 2);

    let updated = engine
        .catalog()
        .apply_edit(CatalogEdit::Remove("Storm Drain".into()));
    let next = engine.apply_catalog_edit(&state, updated);

    assert_eq!(next.names_in_zone(Zone::Market(MarketRow::Tier1)), vec!["Pizza Crust"]);
    assert_eq!(next.zones.total_cards(), state.zones.total_cards() - 1);
    assert!(!engine.catalog().contains("Storm Drain"));
    next.check_invariants(engine.config()).unwrap();
}

/// Removing a definition also clears owned copies from hand and board.
#[test]
fn test_remove_clears_owned_copies() {
    let mut engine = MarketEngine::new(GameRng::new(2));
    let mut state = engine.initialize(CardCatalog::new(defs()).unwrap()).unwrap();
    let bx = template(&state, "Cardboard Box");
    for _ in 0..3 {
        state = engine.acquire(&state, bx).unwrap().state;
    }
    assert_eq!(state.zone_size(Zone::Den), 3);

    let updated = engine
        .catalog()
        .apply_edit(CatalogEdit::Remove("Cardboard Box".into()));
    let next = engine.apply_catalog_edit(&state, updated);

    assert_eq!(next.zone_size(Zone::Den), 0);
    assert!(next.locate(bx).is_err());
    assert_eq!(next.zone_size(Zone::Market(MarketRow::Free)), 1);
}

/// New definitions wait for the next deal.
#[test]
fn test_added_definition_not_dealt_until_shuffle() {
    let mut engine = MarketEngine::new(GameRng::new(8));
    let state = engine.initialize(CardCatalog::new(defs()).unwrap()).unwrap();

    let updated = engine
        .catalog()
        .apply_edit(CatalogEdit::Upsert(CardDefinition::new("Dumpster King", Tier::Tier3)));
    let next = engine.apply_catalog_edit(&state, updated);
    assert_eq!(next.zone_size(Zone::Market(MarketRow::Tier3)), 0);

    let catalog = engine.catalog().clone();
    let dealt = engine.shuffle(&next, catalog).unwrap();
    assert_eq!(dealt.names_in_zone(Zone::Market(MarketRow::Tier3)), vec!["Dumpster King"]);
}

/// A failed save leaves the local edit in force and is reported.
#[test]
fn test_optimistic_edit_survives_failed_save() {
    let store = MemoryStore::new(defs());
    let mut session = GameSession::open(store.clone(), MarketConfig::default(), GameRng::new(4)).unwrap();
    store.set_failing(true);

    let seq = session.edit_card(CardDefinition::new("Acorn", Tier::Basic).with_effect(5, 5, 5));
    session.sync().flush();

    let acorn = session
        .state()
        .market_row(MarketRow::Free)
        .find(|c| c.name() == "Acorn")
        .unwrap();
    assert_eq!(acorn.definition.effect_values.food, 5);
    assert_eq!(session.catalog().get("Acorn").unwrap().effect_values.vp, 5);
    assert_eq!(session.sync().failures(), 1);

    store.set_failing(false);
    assert_eq!(store.snapshot()[0].effect_values.food, 1);

    let reports = session.close();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].seq, seq);
    assert!(!reports[0].is_ok());
}

/// Edits made through a session land in the catalog file.
#[test]
fn test_session_persists_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cards.json");
    let file = JsonFileStore::new(&path);
    raccoon_market::CardCatalogStore::save(&file, &defs()).unwrap();

    let mut session = GameSession::open(file.clone(), MarketConfig::default(), GameRng::new(6)).unwrap();
    session.delete_card("Attic");
    session.edit_card(CardDefinition::new("Raccoon Royalty", Tier::Tier3).with_cost(4, 4));
    let reports = session.close();

    assert_eq!(reports.len(), 2);
    assert!(reports.iter().all(|r| r.is_ok()));

    let reopened = GameSession::open(JsonFileStore::new(&path), MarketConfig::default(), GameRng::new(6)).unwrap();
    assert!(reopened.catalog().contains("Raccoon Royalty"));
    assert!(!reopened.catalog().contains("Attic"));
    assert_eq!(reopened.catalog().len(), 5);
    assert_eq!(reopened.state().names_in_zone(Zone::Market(MarketRow::Tier3)), vec!["Raccoon Royalty"]);
}

/// A missing catalog file opens an empty game instead of failing.
#[test]
fn test_missing_file_opens_empty() {
    let dir = tempfile::tempdir().unwrap();
    let session = GameSession::open(
        JsonFileStore::new(dir.path().join("missing.json")),
        MarketConfig::default(),
        GameRng::new(1),
    )
    .unwrap();

    assert!(session.load_error().is_some());
    assert!(session.catalog().is_empty());
}
