//! Combat event → visual effect mapping.

use crate::combat::view::{
    BLOCK_FIELD, ENEMY_DAMAGE_AT, ENEMY_NAME, ENERGY_FIELD, PLAYER_DAMAGE_AT, STATUS_BAR,
};
use crate::combat::{CombatEvent, Rejection};
use crate::enemy::EnemyAction;
use crate::ui::{display_value, Color};

use super::scheduler::EffectScheduler;

/// Queue the effects that accompany `event`.
///
/// Events with no visual cue are ignored. Requests that do not fit in
/// the pool are dropped by the scheduler.
///
/// A played card is highlighted by the slot it was played from. The hand
/// has already closed the gap, so the marker confirms the key pressed and
/// sits on the card that moved into that slot.
pub fn cue(event: &CombatEvent, fx: &mut EffectScheduler) {
    match *event {
        CombatEvent::CardPlayed { hand_index, .. } => {
            fx.add_card_highlight(hand_index);
        }
        CombatEvent::Attacked { damage, .. } => {
            fx.add_shake(ENEMY_NAME);
            let (x, y) = ENEMY_DAMAGE_AT;
            fx.add_damage_number(x, y, display_value(damage), true);
        }
        CombatEvent::EnemyActed(EnemyAction::Attacked { hp_lost, .. }) if hp_lost > 0 => {
            fx.add_flash(STATUS_BAR, Color::RED);
            let (x, y) = PLAYER_DAMAGE_AT;
            fx.add_damage_number(x, y, display_value(hp_lost), false);
        }
        CombatEvent::BlockGained { .. } => {
            fx.add_flash(BLOCK_FIELD, Color::LIGHT_BLUE);
        }
        CombatEvent::Rejected(Rejection::NotEnoughEnergy { .. }) => {
            fx.add_flash(ENERGY_FIELD, Color::RED);
        }
        _ => {}
    }
}
