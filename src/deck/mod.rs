//! Deck system: draw piles and discard piles for both card families.

pub mod pile;

pub use pile::{Deck, DeckRole};
