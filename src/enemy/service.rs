//! Enemy service: the opponent's runtime state and its turn.
//!
//! The combat engine treats enemy behaviour as opaque. It reads hp and
//! intent, deals damage, and asks the enemy to act once per enemy turn.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::combat::CombatError;
use crate::core::Player;

use super::bestiary::{Bestiary, EnemyId};
use super::intent::{Intent, IntentKind};

/// Runtime state of the enemy in the current encounter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy {
    pub id: EnemyId,
    pub hp: u32,
    pub max_hp: u32,
    /// Absorbs player damage until the enemy's next action.
    pub block: u32,
    pub intent: Intent,
    /// Enemy turns taken so far; indexes the intent pattern.
    pub step: usize,
}

impl Enemy {
    /// Hp at or below this value counts as "low" for Execute.
    #[must_use]
    pub fn execute_threshold(&self) -> u32 {
        self.max_hp / 2
    }
}

/// Result of one enemy action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyAction {
    /// Hit the player.
    Attacked { damage: u32, blocked: u32, hp_lost: u32 },
    /// Raised the enemy's own block.
    Defended { block: u32 },
}

/// Enemy state, intent, damage and turn execution.
pub trait EnemyService {
    /// Load enemy `id` at full hp with its first intent.
    fn init(&mut self, id: EnemyId) -> Result<(), CombatError>;

    /// Current enemy state.
    fn enemy(&self) -> &Enemy;

    /// Apply player damage, block first. Returns hp actually lost.
    fn take_damage(&mut self, amount: u32) -> u32;

    /// Resolve the current intent against the player, then pick the next one.
    fn execute_action(&mut self, player: &mut Player) -> EnemyAction;

    /// Display name of enemy `id`.
    fn name(&self, id: EnemyId) -> Option<&str>;

    // === Convenience Methods ===

    fn intent(&self) -> Intent {
        self.enemy().intent
    }

    fn is_dead(&self) -> bool {
        self.enemy().hp == 0
    }

    /// Display name of the current enemy.
    fn current_name(&self) -> &str {
        self.name(self.enemy().id).unwrap_or("???")
    }
}

/// Standard enemy service backed by a `Bestiary`.
///
/// ## Example
///
/// ```
/// use ccg_combat::core::Player;
/// use ccg_combat::enemy::{starter_bestiary, EnemyService, Opponent, SLIME};
///
/// let mut foe = Opponent::new(starter_bestiary());
/// foe.init(SLIME).unwrap();
/// assert_eq!(foe.enemy().hp, 20);
///
/// let mut player = Player::new(50, 3);
/// foe.execute_action(&mut player); // Slime opens with Attack 5
/// assert_eq!(player.hp, 45);
/// ```
#[derive(Clone, Debug)]
pub struct Opponent {
    bestiary: Bestiary,
    current: Enemy,
}

impl Opponent {
    /// Create the service. Call `init` before the first encounter.
    #[must_use]
    pub fn new(bestiary: Bestiary) -> Self {
        Self {
            bestiary,
            current: Enemy {
                id: EnemyId::new(0),
                hp: 0,
                max_hp: 0,
                block: 0,
                intent: Intent::defend(0),
                step: 0,
            },
        }
    }

    #[must_use]
    pub fn bestiary(&self) -> &Bestiary {
        &self.bestiary
    }

    fn next_intent(&self, step: usize) -> Intent {
        self.bestiary
            .get(self.current.id)
            .map_or(self.current.intent, |def| def.intent_at(step))
    }
}

impl EnemyService for Opponent {
    fn init(&mut self, id: EnemyId) -> Result<(), CombatError> {
        let def = self.bestiary.get(id).ok_or(CombatError::UnknownEnemy(id))?;
        self.current = Enemy {
            id,
            hp: def.max_hp,
            max_hp: def.max_hp,
            block: 0,
            intent: def.intent_at(0),
            step: 0,
        };
        Ok(())
    }

    fn enemy(&self) -> &Enemy {
        &self.current
    }

    fn take_damage(&mut self, amount: u32) -> u32 {
        let enemy = &mut self.current;
        let blocked = amount.min(enemy.block);
        enemy.block -= blocked;
        let hp_lost = (amount - blocked).min(enemy.hp);
        enemy.hp -= hp_lost;
        hp_lost
    }

    fn execute_action(&mut self, player: &mut Player) -> EnemyAction {
        // Block raised last turn only lasts through the player's turn.
        self.current.block = 0;

        let intent = self.current.intent;
        let action = match intent.kind {
            IntentKind::Attack => {
                let hit = player.take_damage(intent.value);
                EnemyAction::Attacked {
                    damage: intent.value,
                    blocked: hit.blocked,
                    hp_lost: hit.hp_lost,
                }
            }
            IntentKind::Defend => {
                self.current.block = self.current.block.saturating_add(intent.value);
                EnemyAction::Defended { block: intent.value }
            }
        };
        debug!("{} acts: {:?}", self.current.id, action);

        self.current.step += 1;
        self.current.intent = self.next_intent(self.current.step);
        action
    }

    fn name(&self, id: EnemyId) -> Option<&str> {
        self.bestiary.get(id).map(|def| def.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enemy::bestiary::{starter_bestiary, GOLEM, SLIME};

    fn slime() -> Opponent {
        let mut foe = Opponent::new(starter_bestiary());
        foe.init(SLIME).unwrap();
        foe
    }

    #[test]
    fn test_init_unknown_enemy() {
        let mut foe = Opponent::new(starter_bestiary());
        let err = foe.init(EnemyId::new(77)).unwrap_err();
        assert!(matches!(err, CombatError::UnknownEnemy(id) if id == EnemyId::new(77)));
    }

    #[test]
    fn test_damage_clamps_at_zero() {
        let mut foe = slime();
        assert_eq!(foe.take_damage(6), 6);
        assert_eq!(foe.enemy().hp, 14);
        assert_eq!(foe.take_damage(50), 14);
        assert_eq!(foe.enemy().hp, 0);
        assert!(foe.is_dead());
    }

    #[test]
    fn test_attack_hits_player_block_first() {
        let mut foe = slime();
        let mut player = Player::new(50, 3);
        player.gain_block(3);

        let action = foe.execute_action(&mut player);
        assert_eq!(
            action,
            EnemyAction::Attacked { damage: 5, blocked: 3, hp_lost: 2 }
        );
        assert_eq!(player.hp, 48);
        assert_eq!(player.block, 0);
    }

    #[test]
    fn test_defend_blocks_player_damage_until_next_action() {
        let mut foe = Opponent::new(starter_bestiary());
        foe.init(GOLEM).unwrap();
        let mut player = Player::new(50, 3);

        assert_eq!(foe.execute_action(&mut player), EnemyAction::Defended { block: 8 });
        assert_eq!(foe.take_damage(5), 0);
        assert_eq!(foe.take_damage(5), 2);
        assert_eq!(foe.enemy().hp, 43);

        // Next action clears leftover block.
        foe.execute_action(&mut player);
        assert_eq!(foe.enemy().block, 0);
    }

    #[test]
    fn test_intent_advances() {
        let mut foe = slime();
        let mut player = Player::new(50, 3);
        assert_eq!(foe.intent(), Intent::attack(5));
        foe.execute_action(&mut player);
        assert_eq!(foe.intent(), Intent::defend(4));
        foe.execute_action(&mut player);
        assert_eq!(foe.intent(), Intent::attack(7));
        foe.execute_action(&mut player);
        assert_eq!(foe.intent(), Intent::attack(5));
    }

    #[test]
    fn test_names() {
        let foe = slime();
        assert_eq!(foe.current_name(), "Slime");
        assert_eq!(foe.name(GOLEM), Some("Golem"));
        assert_eq!(foe.name(EnemyId::new(99)), None);
    }

    #[test]
    fn test_execute_threshold_floors() {
        let mut foe = slime();
        assert_eq!(foe.enemy().execute_threshold(), 10);
        foe.current.max_hp = 21;
        assert_eq!(foe.enemy().execute_threshold(), 10);
    }
}
