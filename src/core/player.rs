//! Player combat stats.
//!
//! All quantities are unsigned and every subtraction saturates, so hp,
//! energy and block can never drop below zero. Hp never exceeds `max_hp`.

use serde::{Deserialize, Serialize};

/// How an incoming hit was split between block and hp.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageOutcome {
    /// Damage soaked by block.
    pub blocked: u32,
    /// Hp actually lost.
    pub hp_lost: u32,
}

/// The player's combat state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub hp: u32,
    pub max_hp: u32,
    pub energy: u32,
    pub max_energy: u32,
    pub block: u32,
}

impl Player {
    /// Create a player at full hp and full energy.
    #[must_use]
    pub fn new(max_hp: u32, max_energy: u32) -> Self {
        Self {
            hp: max_hp,
            max_hp,
            energy: max_energy,
            max_energy,
            block: 0,
        }
    }

    /// Set current hp (clamped to `max_hp`).
    #[must_use]
    pub fn with_hp(mut self, hp: u32) -> Self {
        self.hp = hp.min(self.max_hp);
        self
    }

    /// Refill energy and drop all block.
    pub fn reset_for_turn(&mut self) {
        self.energy = self.max_energy;
        self.block = 0;
    }

    #[must_use]
    pub fn can_afford(&self, cost: u32) -> bool {
        cost <= self.energy
    }

    /// Spend energy if there is enough of it.
    ///
    /// Returns `false` and leaves energy untouched otherwise.
    pub fn spend_energy(&mut self, cost: u32) -> bool {
        if !self.can_afford(cost) {
            return false;
        }
        self.energy -= cost;
        true
    }

    /// Gain energy. Not capped at `max_energy`.
    pub fn gain_energy(&mut self, amount: u32) {
        self.energy = self.energy.saturating_add(amount);
    }

    /// Gain block. Additive and uncapped.
    pub fn gain_block(&mut self, amount: u32) {
        self.block = self.block.saturating_add(amount);
    }

    /// Take a hit: block absorbs first, the remainder comes off hp.
    pub fn take_damage(&mut self, amount: u32) -> DamageOutcome {
        let blocked = amount.min(self.block);
        self.block -= blocked;
        let hp_lost = (amount - blocked).min(self.hp);
        self.hp -= hp_lost;
        DamageOutcome { blocked, hp_lost }
    }

    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.hp == 0
    }
}
