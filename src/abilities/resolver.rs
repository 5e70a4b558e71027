//! Ability resolution - applying abilities to the encounter.
//!
//! The resolver sees the encounter through `ResolveContext`, which
//! borrows the player and the deck and enemy services for one play.

use crate::combat::CombatEvent;
use crate::core::Player;
use crate::deck::DeckService;
use crate::enemy::EnemyService;

use super::Ability;

/// Mutable view of the encounter while a card resolves.
pub struct ResolveContext<'a> {
    pub player: &'a mut Player,
    pub deck: &'a mut dyn DeckService,
    pub enemy: &'a mut dyn EnemyService,
}

impl<'a> ResolveContext<'a> {
    pub fn new(
        player: &'a mut Player,
        deck: &'a mut dyn DeckService,
        enemy: &'a mut dyn EnemyService,
    ) -> Self {
        Self { player, deck, enemy }
    }
}

/// Resolve a single ability and report what happened.
pub fn resolve(ability: &Ability, ctx: &mut ResolveContext<'_>) -> CombatEvent {
    match *ability {
        Ability::Attack { damage, execute_bonus } => {
            let enemy = ctx.enemy.enemy();
            // Threshold is read now, so earlier plays this turn count.
            let executed = execute_bonus.is_some() && enemy.hp <= enemy.execute_threshold();
            let total = match execute_bonus {
                Some(bonus) if executed => damage.saturating_add(bonus),
                _ => damage,
            };
            let hp_lost = ctx.enemy.take_damage(total);
            CombatEvent::Attacked {
                damage: total,
                executed,
                hp_lost,
            }
        }

        Ability::Block { amount } => {
            ctx.player.gain_block(amount);
            CombatEvent::BlockGained { amount }
        }

        Ability::Draw { count } => {
            let drawn = (0..count)
                .take_while(|_| ctx.deck.draw_card().is_some())
                .count();
            CombatEvent::CardsDrawn { count: drawn }
        }

        Ability::GainEnergy { amount } => {
            ctx.player.gain_energy(amount);
            CombatEvent::EnergyGained { amount }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardId;
    use crate::deck::Deck;
    use crate::enemy::{starter_bestiary, Opponent, SLIME};

    struct Fixture {
        player: Player,
        deck: Deck,
        enemy: Opponent,
    }

    impl Fixture {
        fn new() -> Self {
            let mut enemy = Opponent::new(starter_bestiary());
            enemy.init(SLIME).unwrap();
            let cards = (1..=8).map(CardId::new).collect();
            Self {
                player: Player::new(50, 3),
                deck: Deck::stacked(cards, 5),
                enemy,
            }
        }

        fn resolve(&mut self, ability: Ability) -> CombatEvent {
            let mut ctx = ResolveContext::new(&mut self.player, &mut self.deck, &mut self.enemy);
            resolve(&ability, &mut ctx)
        }
    }

    #[test]
    fn test_execute_needs_low_hp() {
        let mut fx = Fixture::new();
        let attack = Ability::Attack { damage: 4, execute_bonus: Some(10) };

        // 20/20: no bonus.
        assert_eq!(
            fx.resolve(attack),
            CombatEvent::Attacked { damage: 4, executed: false, hp_lost: 4 }
        );
        fx.enemy.take_damage(6);
        // 10/20: exactly half, bonus applies.
        assert_eq!(
            fx.resolve(attack),
            CombatEvent::Attacked { damage: 14, executed: true, hp_lost: 10 }
        );
        assert!(fx.enemy.is_dead());
    }

    #[test]
    fn test_block_and_energy() {
        let mut fx = Fixture::new();
        fx.resolve(Ability::Block { amount: 5 });
        fx.resolve(Ability::Block { amount: 5 });
        fx.resolve(Ability::GainEnergy { amount: 2 });
        assert_eq!(fx.player.block, 10);
        assert_eq!(fx.player.energy, 5);
    }

    #[test]
    fn test_draw_stops_at_full_hand() {
        let mut fx = Fixture::new();
        fx.deck.draw_to_hand_size(4);
        assert_eq!(
            fx.resolve(Ability::Draw { count: 2 }),
            CombatEvent::CardsDrawn { count: 1 }
        );
        assert_eq!(fx.deck.hand_len(), 5);
    }
}
