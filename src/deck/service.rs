//! Deck service trait.
//!
//! The combat engine only talks to the deck through this trait, so tests
//! and alternative deck rules can swap the implementation.

use crate::cards::CardId;

/// Draw, discard and hand management for one encounter.
///
/// ## Implementation Notes
///
/// - `draw_card`: Returns `None` when the hand is full or no cards remain
/// - `play_card`: Removes the card at `index`, compacting the hand
/// - `reset`: Gathers every card back into the draw pile
pub trait DeckService {
    /// Return all cards to the draw pile and empty the hand.
    fn reset(&mut self);

    /// Draw one card into the hand.
    fn draw_card(&mut self) -> Option<CardId>;

    /// Move every card in hand to the discard pile.
    fn discard_hand(&mut self);

    /// Remove the card at `index` from the hand and discard it.
    fn play_card(&mut self, index: usize) -> Option<CardId>;

    /// Current hand, in slot order.
    fn hand(&self) -> &[CardId];

    fn draw_pile_len(&self) -> usize;

    fn discard_len(&self) -> usize;

    // === Convenience Methods ===

    fn hand_len(&self) -> usize {
        self.hand().len()
    }

    /// Card in hand slot `index`, if any.
    fn card_at(&self, index: usize) -> Option<CardId> {
        self.hand().get(index).copied()
    }

    /// Draw until the hand holds `size` cards or nothing is left to draw.
    ///
    /// Returns the number of cards drawn.
    fn draw_to_hand_size(&mut self, size: usize) -> usize {
        let mut drawn = 0;
        while self.hand_len() < size {
            if self.draw_card().is_none() {
                break;
            }
            drawn += 1;
        }
        drawn
    }
}
