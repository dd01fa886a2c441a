//! Resource ledger: food, trash and victory points.
//!
//! Counters are unsigned and every mutation saturates, so no sequence of
//! spends can drive a balance below zero.

use serde::{Deserialize, Serialize};

use crate::cards::{CostValues, EffectValues};

/// Running resource counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceLedger {
    pub food: u32,
    /// Trash currency.
    pub trash: u32,
    pub victory_points: u32,
}

impl ResourceLedger {
    #[must_use]
    pub const fn new(food: u32, trash: u32, victory_points: u32) -> Self {
        Self {
            food,
            trash,
            victory_points,
        }
    }

    /// Whether both currencies cover the cost.
    #[must_use]
    pub fn can_afford(&self, cost: &CostValues) -> bool {
        self.food >= cost.food && self.trash >= cost.trash
    }

    /// Deduct a cost, clamping each spend to the available balance.
    pub fn spend(&mut self, cost: &CostValues) {
        self.food = self.food.saturating_sub(cost.food);
        self.trash = self.trash.saturating_sub(cost.trash);
    }

    /// Add an activation effect.
    pub fn gain(&mut self, effect: &EffectValues) {
        self.food = self.food.saturating_add(effect.food);
        self.trash = self.trash.saturating_add(effect.trash);
        self.victory_points = self.victory_points.saturating_add(effect.vp);
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_affordability() {
        let ledger = ResourceLedger::new(3, 1, 0);

        assert!(ledger.can_afford(&CostValues::new(3, 1)));
        assert!(ledger.can_afford(&CostValues::new(0, 0)));
        assert!(!ledger.can_afford(&CostValues::new(4, 0)));
        assert!(!ledger.can_afford(&CostValues::new(0, 2)));
    }

    #[test]
    fn test_spend_exact() {
        let mut ledger = ResourceLedger::new(5, 4, 2);
        ledger.spend(&CostValues::new(2, 4));
        assert_eq!(ledger, ResourceLedger::new(3, 0, 2));
    }

    #[test]
    fn test_spend_clamps() {
        let mut ledger = ResourceLedger::new(1, 0, 0);
        ledger.spend(&CostValues::new(5, 5));
        assert_eq!(ledger, ResourceLedger::new(0, 0, 0));
    }

    #[test]
    fn test_gain() {
        let mut ledger = ResourceLedger::default();
        ledger.gain(&EffectValues::new(2, 1, 3));
        ledger.gain(&EffectValues::new(0, 0, 1));

        assert_eq!(ledger, ResourceLedger::new(2, 1, 4));
        assert!(!ledger.is_zero());
    }

    #[test]
    fn test_gain_saturates() {
        let mut ledger = ResourceLedger::new(u32::MAX, 0, 0);
        ledger.gain(&EffectValues::new(1, 0, 0));
        assert_eq!(ledger.food, u32::MAX);
    }
}
