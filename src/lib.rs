//! # ccg-combat
//!
//! Turn-based card combat with a fixed-frame visual effect scheduler.
//!
//! ## Design Principles
//!
//! 1. **One Owned Encounter**: All combat state lives in a `CombatEngine`
//!    value. Nothing is global, so encounters can run side by side.
//!
//! 2. **Events, Not Text**: The engine records structured `CombatEvent`s.
//!    The view formats them and the effect cues animate them.
//!
//! 3. **Services at the Seams**: Deck and enemy behavior sit behind the
//!    `DeckService` and `EnemyService` traits; rendering and input behind
//!    `Canvas` and `InputSource`.
//!
//! ## Modules
//!
//! - `core`: player stats, RNG, configuration
//! - `cards`: card definitions, catalog, starter set
//! - `deck`: draw pile, hand and discard
//! - `enemy`: bestiary, intents, the default opponent
//! - `abilities`: card abilities and their resolution
//! - `combat`: the turn state machine, events and the combat screen
//! - `fx`: timed visual effects
//! - `ui`: character grid and key input
//! - `session`: per-frame driver tying combat, effects and UI together

pub mod core;
pub mod cards;
pub mod deck;
pub mod enemy;
pub mod abilities;
pub mod combat;
pub mod fx;
pub mod ui;
pub mod session;

// Re-export commonly used types
pub use crate::core::{CombatConfig, ConfigError, DamageOutcome, GameRng, Player};

pub use crate::cards::{Card, CardCatalog, CardId, CardType, Keyword};

pub use crate::deck::{Deck, DeckError, DeckService};

pub use crate::enemy::{
    Bestiary, Enemy, EnemyAction, EnemyDefinition, EnemyId, EnemyService, Intent, IntentKind,
    Opponent,
};

pub use crate::abilities::{Ability, AbilityPlan};

pub use crate::combat::{CombatEngine, CombatError, CombatEvent, CombatState, Rejection};

pub use crate::fx::{Effect, EffectHandle, EffectKind, EffectScheduler};

pub use crate::ui::{Canvas, CharGrid, Color, InputSource, Key, Region, ScriptedInput};

pub use crate::session::Session;
