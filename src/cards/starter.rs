//! The default card set and starting deck.

use super::definition::{Card, CardId, Keyword};
use super::registry::CardCatalog;

pub const STRIKE: CardId = CardId::new(1);
pub const DEFEND: CardId = CardId::new(2);
pub const EXECUTE: CardId = CardId::new(3);
pub const INSIGHT: CardId = CardId::new(4);
pub const ADRENALINE: CardId = CardId::new(5);
pub const HEAVY_BLOW: CardId = CardId::new(6);
pub const SECOND_WIND: CardId = CardId::new(7);

/// Every card in the default set.
#[must_use]
pub fn starter_catalog() -> CardCatalog {
    [
        Card::attack(STRIKE, "Strike", 1, 6),
        Card::skill(DEFEND, "Defend", 1).with_block(5),
        Card::attack(EXECUTE, "Execute", 1, 4).with_keyword(Keyword::Execute),
        Card::skill(INSIGHT, "Insight", 1).with_keyword(Keyword::Draw),
        Card::skill(ADRENALINE, "Adrenaline", 0).with_keyword(Keyword::Energy),
        Card::attack(HEAVY_BLOW, "Heavy Blow", 2, 12),
        Card::skill(SECOND_WIND, "Second Wind", 1)
            .with_block(4)
            .with_keyword(Keyword::Draw)
            .with_keyword(Keyword::Energy),
    ]
    .into_iter()
    .collect()
}

/// The fifteen-card starting deck.
#[must_use]
pub fn starter_deck() -> Vec<CardId> {
    let mut deck = Vec::with_capacity(15);
    deck.extend([STRIKE; 5]);
    deck.extend([DEFEND; 5]);
    deck.extend([EXECUTE, EXECUTE, INSIGHT, ADRENALINE, HEAVY_BLOW]);
    deck
}
