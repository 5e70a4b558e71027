//! Timed visual effects.
//!
//! - `EffectScheduler`: fixed-capacity pool, ticked once per frame
//! - `Effect` / `EffectKind`: flash, shake, damage number, card highlight
//! - `cue`: which effects a combat event triggers

pub mod cues;
pub mod effect;
pub mod scheduler;

pub use cues::cue;
pub use effect::{
    Effect, EffectHandle, EffectKind, EffectTag, ShakeBackup, DAMAGE_NUMBER_TICKS, FLASH_TICKS,
    HIGHLIGHT_TICKS, MAX_ACTIVE_EFFECTS, SHAKE_BACKUP_CELLS, SHAKE_TICKS,
};
pub use scheduler::EffectScheduler;
