//! Concrete deck: draw pile, hand and discard pile.
//!
//! The draw pile's top is the end of its `Vec`. When it runs dry the
//! discard pile is shuffled back in. A stacked deck skips shuffling and
//! always draws in list order.

use log::trace;
use smallvec::SmallVec;
use thiserror::Error;

use crate::cards::{CardCatalog, CardId};
use crate::core::GameRng;

use super::service::DeckService;

/// Errors raised while building a deck.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeckError {
    #[error("deck list contains {0}, which is not in the catalog")]
    UnknownCard(CardId),

    #[error("deck list is empty")]
    Empty,
}

/// A player's deck for one encounter.
///
/// ## Usage
///
/// ```
/// use ccg_combat::cards::CardId;
/// use ccg_combat::deck::{Deck, DeckService};
///
/// let cards = vec![CardId::new(1), CardId::new(2), CardId::new(3)];
/// let mut deck = Deck::stacked(cards, 2);
///
/// assert_eq!(deck.draw_to_hand_size(5), 2); // hand capacity is 2
/// assert_eq!(deck.hand(), &[CardId::new(1), CardId::new(2)]);
/// assert_eq!(deck.draw_pile_len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct Deck {
    /// Deck list as given, used by `reset`.
    library: Vec<CardId>,
    draw_pile: Vec<CardId>,
    discard: Vec<CardId>,
    hand: SmallVec<[CardId; 8]>,
    hand_capacity: usize,
    /// `None` for stacked decks.
    rng: Option<GameRng>,
}

impl Deck {
    /// Create a shuffled deck.
    #[must_use]
    pub fn new(cards: Vec<CardId>, hand_capacity: usize, rng: GameRng) -> Self {
        let mut deck = Self::build(cards, hand_capacity, Some(rng));
        deck.reset();
        deck
    }

    /// Create a deck that draws in list order and never shuffles.
    #[must_use]
    pub fn stacked(cards: Vec<CardId>, hand_capacity: usize) -> Self {
        let mut deck = Self::build(cards, hand_capacity, None);
        deck.reset();
        deck
    }

    /// Create a shuffled deck, checking every card against the catalog.
    pub fn from_catalog(
        catalog: &CardCatalog,
        cards: Vec<CardId>,
        hand_capacity: usize,
        rng: GameRng,
    ) -> Result<Self, DeckError> {
        if cards.is_empty() {
            return Err(DeckError::Empty);
        }
        if let Some(&missing) = cards.iter().find(|id| !catalog.contains(**id)) {
            return Err(DeckError::UnknownCard(missing));
        }
        Ok(Self::new(cards, hand_capacity, rng))
    }

    fn build(library: Vec<CardId>, hand_capacity: usize, rng: Option<GameRng>) -> Self {
        Self {
            draw_pile: Vec::with_capacity(library.len()),
            discard: Vec::with_capacity(library.len()),
            hand: SmallVec::new(),
            library,
            hand_capacity,
            rng,
        }
    }

    #[must_use]
    pub fn hand_capacity(&self) -> usize {
        self.hand_capacity
    }

    /// Total cards owned, across all piles.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.library.len()
    }

    /// Move the discard pile under the draw pile, shuffling if allowed.
    fn recycle_discard(&mut self) {
        if self.discard.is_empty() {
            return;
        }
        trace!("reshuffling {} discarded cards", self.discard.len());
        // Discard order is play order; reversing keeps stacked decks
        // drawing the oldest discard first.
        self.discard.reverse();
        let mut recycled = std::mem::take(&mut self.discard);
        if let Some(rng) = self.rng.as_mut() {
            rng.shuffle(&mut recycled);
        }
        recycled.append(&mut self.draw_pile);
        self.draw_pile = recycled;
    }
}

impl DeckService for Deck {
    fn reset(&mut self) {
        self.hand.clear();
        self.discard.clear();
        self.draw_pile.clear();
        self.draw_pile.extend(self.library.iter().rev().copied());
        if let Some(rng) = self.rng.as_mut() {
            rng.shuffle(&mut self.draw_pile);
        }
    }

    fn draw_card(&mut self) -> Option<CardId> {
        if self.hand.len() >= self.hand_capacity {
            return None;
        }
        if self.draw_pile.is_empty() {
            self.recycle_discard();
        }
        let card = self.draw_pile.pop()?;
        self.hand.push(card);
        Some(card)
    }

    fn discard_hand(&mut self) {
        self.discard.extend(self.hand.drain(..));
    }

    fn play_card(&mut self, index: usize) -> Option<CardId> {
        if index >= self.hand.len() {
            return None;
        }
        let card = self.hand.remove(index);
        self.discard.push(card);
        Some(card)
    }

    fn hand(&self) -> &[CardId] {
        &self.hand
    }

    fn draw_pile_len(&self) -> usize {
        self.draw_pile.len()
    }

    fn discard_len(&self) -> usize {
        self.discard.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::starter::{starter_catalog, starter_deck};

    fn ids(raw: &[u16]) -> Vec<CardId> {
        raw.iter().map(|&r| CardId::new(r)).collect()
    }

    #[test]
    fn test_stacked_draw_order() {
        let mut deck = Deck::stacked(ids(&[1, 2, 3, 4, 5, 6]), 5);
        assert_eq!(deck.draw_to_hand_size(5), 5);
        assert_eq!(deck.hand(), ids(&[1, 2, 3, 4, 5]).as_slice());
        assert_eq!(deck.draw_pile_len(), 1);
    }

    #[test]
    fn test_hand_capacity_blocks_draw() {
        let mut deck = Deck::stacked(ids(&[1, 2, 3]), 2);
        deck.draw_to_hand_size(2);
        assert_eq!(deck.draw_card(), None);
        assert_eq!(deck.hand_len(), 2);
    }

    #[test]
    fn test_play_card_compacts() {
        let mut deck = Deck::stacked(ids(&[1, 2, 3]), 5);
        deck.draw_to_hand_size(3);

        assert_eq!(deck.play_card(1), Some(CardId::new(2)));
        assert_eq!(deck.hand(), ids(&[1, 3]).as_slice());
        assert_eq!(deck.discard_len(), 1);

        assert_eq!(deck.play_card(5), None);
        assert_eq!(deck.hand_len(), 2);
    }

    #[test]
    fn test_discard_then_recycle() {
        let mut deck = Deck::stacked(ids(&[1, 2, 3, 4, 5, 6, 7]), 5);
        deck.draw_to_hand_size(5);
        deck.discard_hand();
        assert_eq!(deck.discard_len(), 5);

        // 2 left in the draw pile, the rest must come from the discard.
        assert_eq!(deck.draw_to_hand_size(5), 5);
        assert_eq!(deck.hand(), ids(&[6, 7, 1, 2, 3]).as_slice());
        assert_eq!(deck.discard_len(), 0);
        assert_eq!(deck.draw_pile_len(), 2);
    }

    #[test]
    fn test_small_deck_draws_what_it_has() {
        let mut deck = Deck::stacked(ids(&[1, 2, 3]), 5);
        assert_eq!(deck.draw_to_hand_size(5), 3);
        deck.discard_hand();
        assert_eq!(deck.draw_to_hand_size(5), 3);
    }

    #[test]
    fn test_reset_restores_everything() {
        let mut deck = Deck::stacked(ids(&[1, 2, 3, 4]), 5);
        deck.draw_to_hand_size(3);
        deck.play_card(0);
        deck.reset();

        assert_eq!(deck.hand_len(), 0);
        assert_eq!(deck.discard_len(), 0);
        assert_eq!(deck.draw_pile_len(), 4);
        assert_eq!(deck.draw_card(), Some(CardId::new(1)));
    }

    #[test]
    fn test_shuffled_deck_is_deterministic() {
        let mut a = Deck::new(starter_deck(), 5, GameRng::new(11));
        let mut b = Deck::new(starter_deck(), 5, GameRng::new(11));
        a.draw_to_hand_size(5);
        b.draw_to_hand_size(5);
        assert_eq!(a.hand(), b.hand());
    }

    #[test]
    fn test_from_catalog_validates() {
        let catalog = starter_catalog();

        let err = Deck::from_catalog(&catalog, ids(&[1, 99]), 5, GameRng::new(0)).unwrap_err();
        assert_eq!(err, DeckError::UnknownCard(CardId::new(99)));

        let err = Deck::from_catalog(&catalog, Vec::new(), 5, GameRng::new(0)).unwrap_err();
        assert_eq!(err, DeckError::Empty);

        let deck = Deck::from_catalog(&catalog, starter_deck(), 5, GameRng::new(0)).unwrap();
        assert_eq!(deck.total_cards(), 15);
        assert_eq!(deck.hand_capacity(), 5);
    }
}
