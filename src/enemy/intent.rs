//! Enemy intents: the telegraphed next action.

use serde::{Deserialize, Serialize};

/// What the enemy plans to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntentKind {
    Attack,
    Defend,
}

/// An intent with its magnitude.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Intent {
    pub kind: IntentKind,
    pub value: u32,
}

impl Intent {
    /// Attack for `value` damage.
    #[must_use]
    pub const fn attack(value: u32) -> Self {
        Self { kind: IntentKind::Attack, value }
    }

    /// Gain `value` block.
    #[must_use]
    pub const fn defend(value: u32) -> Self {
        Self { kind: IntentKind::Defend, value }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            IntentKind::Attack => write!(f, "ATTACK {}", self.value),
            IntentKind::Defend => write!(f, "DEFEND {}", self.value),
        }
    }
}
