//! Ability descriptors.
//!
//! Playing a card expands it into an `AbilityPlan`: a short list of
//! independent descriptors evaluated in a fixed order.
//!
//! ## Resolution Order
//!
//! 1. `Attack` (Attack cards; carries the Execute bonus if keyworded)
//! 2. `Block` (Skill cards with block > 0)
//! 3. `Draw` (Skill cards with the Draw keyword)
//! 4. `GainEnergy` (Skill cards with the Energy keyword)
//!
//! Keywords that do not apply to the card's type are ignored.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, CardType, Keyword};
use crate::core::CombatConfig;

/// One atomic part of a card's effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ability {
    /// Damage the enemy. `execute_bonus` is added when the enemy is at
    /// or below half its max hp at resolution time.
    Attack {
        damage: u32,
        execute_bonus: Option<u32>,
    },

    /// Gain block.
    Block { amount: u32 },

    /// Draw cards.
    Draw { count: usize },

    /// Gain energy (may exceed max energy).
    GainEnergy { amount: u32 },
}

/// The ordered abilities of one card play.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityPlan {
    abilities: SmallVec<[Ability; 4]>,
}

impl AbilityPlan {
    /// Build the plan for `card` using the bonuses in `config`.
    ///
    /// ```
    /// use ccg_combat::abilities::{Ability, AbilityPlan};
    /// use ccg_combat::cards::starter::{starter_catalog, EXECUTE};
    /// use ccg_combat::core::CombatConfig;
    ///
    /// let catalog = starter_catalog();
    /// let plan = AbilityPlan::for_card(catalog.get(EXECUTE).unwrap(), &CombatConfig::default());
    ///
    /// assert_eq!(
    ///     plan.as_slice(),
    ///     &[Ability::Attack { damage: 4, execute_bonus: Some(10) }]
    /// );
    /// ```
    #[must_use]
    pub fn for_card(card: &Card, config: &CombatConfig) -> Self {
        let mut abilities = SmallVec::new();

        match card.card_type {
            CardType::Attack => {
                let execute_bonus = card
                    .has_keyword(Keyword::Execute)
                    .then_some(config.execute_bonus);
                abilities.push(Ability::Attack {
                    damage: card.attack,
                    execute_bonus,
                });
            }
            CardType::Skill => {
                if card.block > 0 {
                    abilities.push(Ability::Block { amount: card.block });
                }
                if card.has_keyword(Keyword::Draw) {
                    abilities.push(Ability::Draw { count: config.draw_count });
                }
                if card.has_keyword(Keyword::Energy) {
                    abilities.push(Ability::GainEnergy { amount: config.energy_bonus });
                }
            }
        }

        Self { abilities }
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Ability] {
        &self.abilities
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ability> {
        self.abilities.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.abilities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.abilities.is_empty()
    }
}

impl<'a> IntoIterator for &'a AbilityPlan {
    type Item = &'a Ability;
    type IntoIter = std::slice::Iter<'a, Ability>;

    fn into_iter(self) -> Self::IntoIter {
        self.abilities.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardId;

    fn config() -> CombatConfig {
        CombatConfig::default()
    }

    #[test]
    fn test_plain_attack() {
        let card = Card::attack(CardId::new(1), "Strike", 1, 6);
        let plan = AbilityPlan::for_card(&card, &config());
        assert_eq!(
            plan.as_slice(),
            &[Ability::Attack { damage: 6, execute_bonus: None }]
        );
    }

    #[test]
    fn test_skill_order_is_block_draw_energy() {
        let card = Card::skill(CardId::new(7), "Second Wind", 1)
            .with_keyword(Keyword::Energy)
            .with_keyword(Keyword::Draw)
            .with_block(4);
        let plan = AbilityPlan::for_card(&card, &config());
        assert_eq!(
            plan.as_slice(),
            &[
                Ability::Block { amount: 4 },
                Ability::Draw { count: 2 },
                Ability::GainEnergy { amount: 2 },
            ]
        );
    }

    #[test]
    fn test_zero_block_skipped() {
        let card = Card::skill(CardId::new(4), "Insight", 1).with_keyword(Keyword::Draw);
        let plan = AbilityPlan::for_card(&card, &config());
        assert_eq!(plan.len(), 1);
        assert_eq!(plan.as_slice()[0], Ability::Draw { count: 2 });
    }

    #[test]
    fn test_keywords_outside_card_type_ignored() {
        let attack = Card::attack(CardId::new(1), "Odd", 1, 3).with_keyword(Keyword::Draw);
        assert_eq!(AbilityPlan::for_card(&attack, &config()).len(), 1);

        let skill = Card::skill(CardId::new(2), "Odd", 1).with_keyword(Keyword::Execute);
        assert!(AbilityPlan::for_card(&skill, &config()).is_empty());
    }

    #[test]
    fn test_bonuses_follow_config() {
        let card = Card::skill(CardId::new(5), "Adrenaline", 0).with_keyword(Keyword::Energy);
        let plan = AbilityPlan::for_card(&card, &config().with_energy_bonus(3));
        assert_eq!(plan.as_slice(), &[Ability::GainEnergy { amount: 3 }]);
    }
}
