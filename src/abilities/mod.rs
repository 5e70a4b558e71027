//! Card abilities: what a card does when played.
//!
//! - `Ability`: One independent part of a card's effect
//! - `AbilityPlan`: The ordered abilities for one card play
//! - `resolve`: Applies an ability through a `ResolveContext`

mod ability;
mod resolver;

pub use ability::{Ability, AbilityPlan};
pub use resolver::{resolve, ResolveContext};
