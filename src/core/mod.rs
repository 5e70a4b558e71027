//! Core engine types: player stats, configuration, RNG.
//!
//! These are shared by every other module and know nothing about
//! cards, enemies or effects.

pub mod player;
pub mod rng;
pub mod config;

pub use player::{DamageOutcome, Player};
pub use rng::GameRng;
pub use config::{CombatConfig, ConfigError};
