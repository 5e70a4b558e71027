//! Encounter configuration.
//!
//! `CombatConfig` carries the tunable numbers of an encounter: hand size,
//! keyword bonuses, player stats and the effect pool capacity. Every field
//! has a default, so a config file only needs the values it changes.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading or validating a config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse combat config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid combat config: {0}")]
    Invalid(&'static str),
}

/// Tunable numbers for one encounter.
///
/// ## Example
///
/// ```
/// use ccg_combat::core::CombatConfig;
///
/// let config = CombatConfig::default()
///     .with_hand_size(6)
///     .with_execute_bonus(12);
///
/// assert_eq!(config.hand_size, 6);
/// assert_eq!(config.draw_count, 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatConfig {
    /// Target hand size, refilled at the start of each turn.
    pub hand_size: usize,

    /// Extra damage from the Execute keyword.
    pub execute_bonus: u32,

    /// Cards drawn by the Draw keyword.
    pub draw_count: usize,

    /// Energy granted by the Energy keyword.
    pub energy_bonus: u32,

    pub player_max_hp: u32,
    pub player_max_energy: u32,

    /// Number of effect slots.
    pub effect_capacity: usize,

    /// Seed for deck shuffles.
    pub seed: u64,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            hand_size: 5,
            execute_bonus: 10,
            draw_count: 2,
            energy_bonus: 2,
            player_max_hp: 50,
            player_max_energy: 3,
            effect_capacity: 8,
            seed: 0,
        }
    }
}

impl CombatConfig {
    /// Parse a config from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the config describes a playable encounter.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hand_size == 0 {
            return Err(ConfigError::Invalid("hand_size must be at least 1"));
        }
        if self.effect_capacity == 0 {
            return Err(ConfigError::Invalid("effect_capacity must be at least 1"));
        }
        if self.player_max_hp == 0 {
            return Err(ConfigError::Invalid("player_max_hp must be at least 1"));
        }
        Ok(())
    }

    /// Cards the hand can hold: the target size plus room for one Draw,
    /// which resolves while the played card is still in hand.
    #[must_use]
    pub fn hand_capacity(&self) -> usize {
        self.hand_size + self.draw_count
    }

    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    #[must_use]
    pub fn with_execute_bonus(mut self, bonus: u32) -> Self {
        self.execute_bonus = bonus;
        self
    }

    #[must_use]
    pub fn with_draw_count(mut self, count: usize) -> Self {
        self.draw_count = count;
        self
    }

    #[must_use]
    pub fn with_energy_bonus(mut self, bonus: u32) -> Self {
        self.energy_bonus = bonus;
        self
    }

    /// Set the player's max hp and max energy.
    #[must_use]
    pub fn with_player(mut self, max_hp: u32, max_energy: u32) -> Self {
        self.player_max_hp = max_hp;
        self.player_max_energy = max_energy;
        self
    }

    #[must_use]
    pub fn with_effect_capacity(mut self, capacity: usize) -> Self {
        self.effect_capacity = capacity;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CombatConfig::default();
        assert_eq!(config.hand_size, 5);
        assert_eq!(config.execute_bonus, 10);
        assert_eq!(config.draw_count, 2);
        assert_eq!(config.energy_bonus, 2);
        assert_eq!(config.effect_capacity, 8);
        assert_eq!(config.hand_capacity(), 7);
        assert_eq!(config.with_draw_count(3).hand_capacity(), 8);
        assert!(CombatConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = CombatConfig::from_json(r#"{ "hand_size": 4, "seed": 9 }"#).unwrap();
        assert_eq!(config.hand_size, 4);
        assert_eq!(config.seed, 9);
        assert_eq!(config.execute_bonus, 10);
    }

    #[test]
    fn test_json_round_trip() {
        let config = CombatConfig::default().with_player(70, 4).with_seed(3);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(CombatConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_bad_json() {
        let err = CombatConfig::from_json("{ hand_size: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_zero_hand_rejected() {
        let err = CombatConfig::from_json(r#"{ "hand_size": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(err.to_string().contains("hand_size"));
    }

    #[test]
    fn test_zero_effect_capacity_rejected() {
        let config = CombatConfig::default().with_effect_capacity(0);
        assert!(config.validate().is_err());
    }
}
