//! Combat screen rendering.
//!
//! Draws the encounter onto a 40x25 `Canvas` and formats combat events
//! as log lines. The layout constants are public so effect cues can aim
//! at the same cells the view draws.

use crate::deck::DeckService;
use crate::enemy::{EnemyAction, EnemyService, IntentKind};
use crate::ui::{display_value, Canvas, Color, Region};

use super::engine::CombatEngine;
use super::event::{CombatEvent, Rejection};
use super::state::CombatState;

/// Whole player status bar.
pub const STATUS_BAR: Region = Region::new(0, 0, 40, 1);
/// `HP:nn/nn` in the status bar.
pub const HP_FIELD: Region = Region::new(1, 0, 11, 1);
/// `EN:nn/n` in the status bar; energy gets two columns.
pub const ENERGY_FIELD: Region = Region::new(15, 0, 9, 1);
/// `BLK:n` in the status bar.
pub const BLOCK_FIELD: Region = Region::new(27, 0, 8, 1);
/// Enemy name row.
pub const ENEMY_NAME: Region = Region::new(15, 3, 12, 1);
/// Where damage dealt to the enemy pops up.
pub const ENEMY_DAMAGE_AT: (u16, u16) = (31, 3);
/// Where damage taken by the player pops up.
pub const PLAYER_DAMAGE_AT: (u16, u16) = (5, 1);

pub const LOG_ROW: u16 = 8;
pub const BANNER_ROW: u16 = 9;
pub const HAND_LABEL_ROW: u16 = 11;
/// Row of the first hand card; each card takes two rows.
pub const HAND_ROW: u16 = 13;
pub const CONTROLS_ROW: u16 = 24;

/// Hand slots shown on screen: the target hand size plus one card of
/// draw overflow left after a Draw play.
pub const VISIBLE_CARDS: usize = 6;

/// Row a hand slot is drawn on.
#[must_use]
pub fn hand_slot_row(index: usize) -> u16 {
    // Only VISIBLE_CARDS slots are drawn, so this stays small.
    HAND_ROW + 2 * index as u16
}

/// Format an event as a log line.
#[must_use]
pub fn describe(event: &CombatEvent, enemy_name: &str) -> String {
    match *event {
        CombatEvent::EncounterStarted { .. } => "Combat begins!".to_string(),
        CombatEvent::TurnStarted { turn, .. } => format!("Turn {turn}."),
        CombatEvent::CardPlayed { cost, .. } => format!("Card played for {cost} energy."),
        CombatEvent::Attacked { damage, executed: true, .. } => {
            format!("Execute! You attack for {damage}!")
        }
        CombatEvent::Attacked { damage, .. } => format!("You attack for {damage}!"),
        CombatEvent::BlockGained { amount } => format!("You gain {amount} block!"),
        CombatEvent::CardsDrawn { count: 1 } => "You draw 1 card!".to_string(),
        CombatEvent::CardsDrawn { count } => format!("You draw {count} cards!"),
        CombatEvent::EnergyGained { amount } => format!("You gain {amount} energy!"),
        CombatEvent::Rejected(reason) => match reason {
            Rejection::NoSuchCard { index } => format!("No card in slot {}.", index + 1),
            Rejection::UnknownCard { card } => format!("Unknown card {card}."),
            Rejection::NotEnoughEnergy { .. } => "Not enough energy!".to_string(),
            Rejection::CombatOver => "The fight is over.".to_string(),
        },
        CombatEvent::EnemyActed(EnemyAction::Attacked { hp_lost, blocked: 0, .. }) => {
            format!("{enemy_name} hits you for {hp_lost}!")
        }
        CombatEvent::EnemyActed(EnemyAction::Attacked { hp_lost, blocked, .. }) => {
            format!("{enemy_name} hits you for {hp_lost} ({blocked} blocked)!")
        }
        CombatEvent::EnemyActed(EnemyAction::Defended { block }) => {
            format!("{enemy_name} defends for {block}.")
        }
        CombatEvent::Victory => "Victory!".to_string(),
        CombatEvent::Defeat => "You have been defeated...".to_string(),
    }
}

/// Redraw the whole combat screen.
///
/// `highlight` marks a hand slot (usually the effect scheduler's
/// highlighted card).
pub fn render_combat<D, E, C>(combat: &CombatEngine<'_, D, E>, canvas: &mut C, highlight: Option<usize>)
where
    D: DeckService,
    E: EnemyService,
    C: Canvas,
{
    canvas.clear();

    let player = combat.player();
    canvas.print_at_color(1, 0, "HP:", Color::RED);
    canvas.print_number(5, 0, display_value(player.hp), Color::WHITE);
    canvas.print_at_color(7, 0, "/", Color::WHITE);
    canvas.print_number(8, 0, display_value(player.max_hp), Color::WHITE);

    canvas.print_at_color(15, 0, "EN:", Color::CYAN);
    canvas.print_number(19, 0, display_value(player.energy), Color::WHITE);
    canvas.print_at_color(21, 0, "/", Color::WHITE);
    canvas.print_number(22, 0, display_value(player.max_energy), Color::WHITE);

    canvas.print_at_color(27, 0, "BLK:", Color::LIGHT_BLUE);
    canvas.print_number(32, 0, display_value(player.block), Color::WHITE);

    draw_enemy(combat.enemy(), canvas);

    if let Some(event) = combat.status() {
        let line = describe(event, combat.enemy().current_name());
        canvas.print_at_color(1, LOG_ROW, &line, Color::GRAY3);
    }

    match combat.state() {
        CombatState::Victory => canvas.print_at_color(15, BANNER_ROW, "VICTORY!", Color::YELLOW),
        CombatState::Defeat => canvas.print_at_color(15, BANNER_ROW, "DEFEAT", Color::RED),
        CombatState::PlayerTurn | CombatState::EnemyTurn => {}
    }

    canvas.print_at_color(1, HAND_LABEL_ROW, "HAND:", Color::YELLOW);
    let catalog = combat.catalog();
    for (i, &id) in combat.deck().hand().iter().enumerate().take(VISIBLE_CARDS) {
        let Some(card) = catalog.get(id) else {
            continue;
        };
        let row = hand_slot_row(i);
        let highlighted = highlight == Some(i);

        if highlighted {
            canvas.print_at_color(0, row, ">", Color::YELLOW);
        }
        canvas.print_at_color(1, row, "[", Color::WHITE);
        canvas.print_number(2, row, display_value(i as u32 + 1), Color::WHITE);
        canvas.print_at_color(3, row, "] ", Color::WHITE);

        let name_color = if highlighted { Color::WHITE } else { Color::YELLOW };
        canvas.print_at_color(5, row, &card.name, name_color);

        if card.attack > 0 {
            canvas.print_at_color(20, row, "ATK:", Color::RED);
            canvas.print_number(24, row, display_value(card.attack), Color::WHITE);
        }
        if card.block > 0 {
            canvas.print_at_color(27, row, "BLK:", Color::LIGHT_BLUE);
            canvas.print_number(31, row, display_value(card.block), Color::WHITE);
        }

        canvas.print_at_color(34, row, "[$", Color::CYAN);
        canvas.print_number(36, row, display_value(card.cost), Color::CYAN);
        canvas.print_at_color(38, row, "]", Color::CYAN);
    }

    canvas.print_at_color(1, CONTROLS_ROW, "[1-6]Play [E]nd Turn", Color::WHITE);
}

fn draw_enemy<E: EnemyService, C: Canvas>(enemy: &E, canvas: &mut C) {
    let state = enemy.enemy();
    canvas.print_at_color(ENEMY_NAME.x, ENEMY_NAME.y, enemy.current_name(), Color::YELLOW);

    canvas.print_at_color(13, 4, "HP:", Color::RED);
    canvas.print_number(17, 4, display_value(state.hp), Color::WHITE);
    canvas.print_at_color(19, 4, "/", Color::WHITE);
    canvas.print_number(20, 4, display_value(state.max_hp), Color::WHITE);
    if state.block > 0 {
        canvas.print_at_color(26, 4, "BLK:", Color::LIGHT_BLUE);
        canvas.print_number(31, 4, display_value(state.block), Color::WHITE);
    }

    canvas.print_at_color(12, 5, "INTENT: ", Color::WHITE);
    let (label, color) = match state.intent.kind {
        IntentKind::Attack => ("ATTACK ", Color::RED),
        IntentKind::Defend => ("DEFEND ", Color::LIGHT_BLUE),
    };
    canvas.print_at_color(20, 5, label, color);
    canvas.print_number(27, 5, display_value(state.intent.value), Color::WHITE);
}
