//! Turn-based combat.
//!
//! - `CombatEngine`: the per-encounter state machine
//! - `CombatEvent`: structured record of everything that happened
//! - `view`: screen layout and log-line formatting

pub mod engine;
pub mod event;
pub mod state;
pub mod view;

pub use engine::{CombatEngine, CombatError};
pub use event::{CombatEvent, Rejection};
pub use state::CombatState;
pub use view::{describe, render_combat};
