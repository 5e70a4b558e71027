//! Combat state machine states.

use serde::{Deserialize, Serialize};

/// Where the encounter stands.
///
/// `PlayerTurn` is the only state the player can act in. `EnemyTurn`
/// exists only while `end_turn` runs. `Victory` and `Defeat` are terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CombatState {
    PlayerTurn,
    EnemyTurn,
    Victory,
    Defeat,
}

impl CombatState {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Victory | Self::Defeat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_states() {
        assert!(!CombatState::PlayerTurn.is_terminal());
        assert!(!CombatState::EnemyTurn.is_terminal());
        assert!(CombatState::Victory.is_terminal());
        assert!(CombatState::Defeat.is_terminal());
    }
}
