//! Enemy service: definitions, intents, and the opponent's turn.
//!
//! ## Key Types
//!
//! - `Intent`: The enemy's telegraphed next action
//! - `EnemyDefinition` / `Bestiary`: Static enemy data
//! - `EnemyService`: The contract the combat engine consumes
//! - `Opponent`: The standard implementation

pub mod intent;
pub mod bestiary;
pub mod service;

pub use intent::{Intent, IntentKind};
pub use bestiary::{starter_bestiary, Bestiary, EnemyDefinition, EnemyId, CULTIST, GOLEM, SLIME};
pub use service::{Enemy, EnemyAction, EnemyService, Opponent};
