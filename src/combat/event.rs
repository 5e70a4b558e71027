//! Combat events.
//!
//! Every outcome of a combat call is recorded as a `CombatEvent` with a
//! typed payload. The engine never formats text; the view turns events
//! into log lines and the effect cues turn them into visuals.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::enemy::{EnemyAction, EnemyId};

/// Why a request was ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rejection {
    /// No card in that hand slot.
    NoSuchCard { index: usize },
    /// The hand holds an id missing from the catalog.
    UnknownCard { card: CardId },
    NotEnoughEnergy { cost: u32, energy: u32 },
    /// The encounter already ended.
    CombatOver,
}

/// Something that happened during combat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CombatEvent {
    EncounterStarted { enemy: EnemyId },

    TurnStarted { turn: u32, drawn: usize },

    /// A card left the hand and its cost was paid.
    CardPlayed { card: CardId, hand_index: usize, cost: u32 },

    /// Damage dealt to the enemy.
    Attacked { damage: u32, executed: bool, hp_lost: u32 },

    BlockGained { amount: u32 },

    CardsDrawn { count: usize },

    EnergyGained { amount: u32 },

    Rejected(Rejection),

    EnemyActed(EnemyAction),

    Victory,

    Defeat,
}

impl CombatEvent {
    /// Whether this event should replace the status line.
    ///
    /// Bookkeeping events (turn start, card played) keep the previous
    /// message visible.
    #[must_use]
    pub fn is_status(&self) -> bool {
        !matches!(self, Self::TurnStarted { .. } | Self::CardPlayed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_events() {
        assert!(CombatEvent::Victory.is_status());
        assert!(CombatEvent::Attacked { damage: 6, executed: false, hp_lost: 6 }.is_status());
        assert!(!CombatEvent::TurnStarted { turn: 2, drawn: 5 }.is_status());
        assert!(!CombatEvent::CardPlayed { card: CardId::new(1), hand_index: 0, cost: 1 }
            .is_status());
    }

    #[test]
    fn test_event_serialization() {
        let event = CombatEvent::Rejected(Rejection::NotEnoughEnergy { cost: 2, energy: 1 });
        let json = serde_json::to_string(&event).unwrap();
        let back: CombatEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }
}
