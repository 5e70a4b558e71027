//! Deck service: draw pile, hand and discard pile.
//!
//! - `DeckService`: the contract the combat engine consumes
//! - `Deck`: the standard implementation (shuffled or stacked)

pub mod service;
pub mod pile;

pub use service::DeckService;
pub use pile::{Deck, DeckError};
