//! Display grouping for `Stackable` cards.
//!
//! Stackable instances of the same definition render as one pile with a
//! count. This is presentation only; capacity limits always count raw
//! instances.

use rustc_hash::FxHashMap;

use super::instance::CardInstance;
use crate::core::entity::InstanceId;

/// One rendered pile: a representative instance and how many it stands for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardGroup {
    /// First instance of the pile in zone order.
    pub representative: InstanceId,
    pub name: String,
    pub count: usize,
}

/// Group instances for display, preserving first-occurrence order.
///
/// Non-stackable instances always get a group of their own.
pub fn group_stackable<'a, I>(cards: I) -> Vec<CardGroup>
where
    I: IntoIterator<Item = &'a CardInstance>,
{
    let mut groups: Vec<CardGroup> = Vec::new();
    let mut piles: FxHashMap<&'a str, usize> = FxHashMap::default();

    for card in cards {
        if !card.definition.is_stackable() {
            groups.push(CardGroup {
                representative: card.id,
                name: card.definition.name.clone(),
                count: 1,
            });
            continue;
        }

        match piles.get(card.name()) {
            Some(&i) => groups[i].count += 1,
            None => {
                piles.insert(card.name(), groups.len());
                groups.push(CardGroup {
                    representative: card.id,
                    name: card.definition.name.clone(),
                    count: 1,
                });
            }
        }
    }

    groups
}

/// Number of piles a zone renders as (stackable piles count once).
pub fn display_count<'a, I>(cards: I) -> usize
where
    I: IntoIterator<Item = &'a CardInstance>,
{
    group_stackable(cards).len()
}
