//! Card definitions - static card data.
//!
//! A `Card` is immutable once registered. Runtime state (which pile a
//! copy sits in) lives in the deck, which only stores `CardId`s.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Unique identifier for a card definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u16);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Card type. Decides which keywords and stats apply on play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardType {
    /// Deals `attack` damage to the enemy.
    Attack,
    /// Grants block, cards or energy.
    Skill,
}

/// Independent card keywords.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Keyword {
    /// Bonus damage when the enemy is at or below half hp.
    Execute,
    /// Draw extra cards.
    Draw,
    /// Gain extra energy.
    Energy,
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use ccg_combat::cards::{Card, CardId, CardType, Keyword};
///
/// let finisher = Card::attack(CardId::new(3), "Execute", 1, 4)
///     .with_keyword(Keyword::Execute);
///
/// assert_eq!(finisher.card_type, CardType::Attack);
/// assert!(finisher.has_keyword(Keyword::Execute));
/// assert!(!finisher.has_keyword(Keyword::Draw));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,

    /// Display name.
    pub name: String,

    pub card_type: CardType,

    /// Energy cost.
    pub cost: u32,

    /// Base damage (Attack cards).
    pub attack: u32,

    /// Block granted (Skill cards).
    pub block: u32,

    /// Keyword set. Duplicates are ignored on insert.
    pub keywords: SmallVec<[Keyword; 3]>,
}

impl Card {
    /// Create a card with no stats or keywords.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, card_type: CardType, cost: u32) -> Self {
        Self {
            id,
            name: name.into(),
            card_type,
            cost,
            attack: 0,
            block: 0,
            keywords: SmallVec::new(),
        }
    }

    /// Create an Attack card.
    #[must_use]
    pub fn attack(id: CardId, name: impl Into<String>, cost: u32, damage: u32) -> Self {
        let mut card = Self::new(id, name, CardType::Attack, cost);
        card.attack = damage;
        card
    }

    /// Create a Skill card.
    #[must_use]
    pub fn skill(id: CardId, name: impl Into<String>, cost: u32) -> Self {
        Self::new(id, name, CardType::Skill, cost)
    }

    #[must_use]
    pub fn with_block(mut self, block: u32) -> Self {
        self.block = block;
        self
    }

    #[must_use]
    pub fn with_keyword(mut self, keyword: Keyword) -> Self {
        if !self.has_keyword(keyword) {
            self.keywords.push(keyword);
        }
        self
    }

    #[must_use]
    pub fn has_keyword(&self, keyword: Keyword) -> bool {
        self.keywords.contains(&keyword)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id() {
        let id = CardId::new(42);
        assert_eq!(id.raw(), 42);
        assert_eq!(format!("{}", id), "Card(42)");
    }

    #[test]
    fn test_attack_builder() {
        let card = Card::attack(CardId::new(1), "Strike", 1, 6);
        assert_eq!(card.name, "Strike");
        assert_eq!(card.card_type, CardType::Attack);
        assert_eq!(card.cost, 1);
        assert_eq!(card.attack, 6);
        assert_eq!(card.block, 0);
        assert!(card.keywords.is_empty());
    }

    #[test]
    fn test_skill_with_several_keywords() {
        let card = Card::skill(CardId::new(7), "Second Wind", 1)
            .with_block(4)
            .with_keyword(Keyword::Draw)
            .with_keyword(Keyword::Energy);

        assert_eq!(card.block, 4);
        assert!(card.has_keyword(Keyword::Draw));
        assert!(card.has_keyword(Keyword::Energy));
        assert!(!card.has_keyword(Keyword::Execute));
    }

    #[test]
    fn test_duplicate_keyword_ignored() {
        let card = Card::skill(CardId::new(4), "Insight", 1)
            .with_keyword(Keyword::Draw)
            .with_keyword(Keyword::Draw);
        assert_eq!(card.keywords.len(), 1);
    }

    #[test]
    fn test_card_serialization() {
        let card = Card::attack(CardId::new(3), "Execute", 1, 4).with_keyword(Keyword::Execute);
        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
    }
}
