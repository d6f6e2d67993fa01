//! Ordered card piles.
//!
//! A `Deck` is a stack: index 0 is the bottom, the last card is the top and
//! is drawn first. The same type serves as draw pile and discard pile for
//! both roles; the role only labels the pile for errors and logs.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Oxygen};
use crate::core::{GameError, GameRng, Result};

/// Which family of cards a pile holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeckRole {
    /// Action cards plus the oxygen pool.
    Action,
    /// Space hazard cards.
    Hazard,
}

impl std::fmt::Display for DeckRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeckRole::Action => f.write_str("action"),
            DeckRole::Hazard => f.write_str("hazard"),
        }
    }
}

/// An ordered, shuffleable pile of cards.
///
/// ## Usage
///
/// ```
/// use selfish_engine::cards::{Card, Oxygen};
/// use selfish_engine::deck::{Deck, DeckRole};
///
/// let mut deck = Deck::new(DeckRole::Action);
/// deck.add(Card::new("Shield", "Blocks an attack"));
/// deck.add(Card::from(Oxygen::One));
///
/// // Last in, first out
/// assert_eq!(deck.draw().unwrap(), Card::from(Oxygen::One));
/// assert_eq!(deck.size(), 1);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Deck {
    role: DeckRole,
    /// Bottom to top.
    cards: Vec<Card>,
}

impl Deck {
    /// Create an empty pile.
    #[must_use]
    pub fn new(role: DeckRole) -> Self {
        Self {
            role,
            cards: Vec::new(),
        }
    }

    /// Create a pile holding `cards`, first card at the bottom.
    #[must_use]
    pub fn with_cards(role: DeckRole, cards: Vec<Card>) -> Self {
        Self { role, cards }
    }

    /// The family of cards this pile holds.
    #[must_use]
    pub fn role(&self) -> DeckRole {
        self.role
    }

    /// Cards from bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards.
    #[must_use]
    pub fn size(&self) -> usize {
        self.cards.len()
    }

    /// Check if the pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Put a card on top. Returns the new size.
    pub fn add(&mut self, card: impl Into<Card>) -> usize {
        self.cards.push(card.into());
        self.cards.len()
    }

    /// Put several cards on top, in order. Returns the new size.
    pub fn add_all(&mut self, cards: impl IntoIterator<Item = Card>) -> usize {
        self.cards.extend(cards);
        self.cards.len()
    }

    /// Remove and return the top card.
    pub fn draw(&mut self) -> Result<Card> {
        self.cards.pop().ok_or(GameError::EmptyDeck(self.role))
    }

    /// Remove and return the topmost card that is not an oxygen unit.
    pub fn draw_action(&mut self) -> Result<Card> {
        let index = self
            .cards
            .iter()
            .rposition(|c| !c.is_oxygen())
            .ok_or(GameError::EmptyDeck(self.role))?;
        Ok(self.cards.remove(index))
    }

    /// Remove the first card equal to `card`.
    ///
    /// Does nothing if no such card exists; check `contains` first when
    /// absence matters.
    pub fn remove(&mut self, card: &Card) {
        if let Some(index) = self.cards.iter().position(|c| c == card) {
            self.cards.remove(index);
        }
    }

    /// Check if a card equal to `card` is in the pile.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.iter().any(|c| c == card)
    }

    /// Shuffle with the engine's RNG.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Remove and return the first oxygen unit of the given value.
    pub fn draw_oxygen(&mut self, unit: Oxygen) -> Result<Oxygen> {
        let index = self
            .cards
            .iter()
            .position(|c| c.is_oxygen_of(unit))
            .ok_or(GameError::OxygenUnavailable(unit))?;
        self.cards.remove(index);
        Ok(unit)
    }

    /// Count oxygen units of the given value.
    #[must_use]
    pub fn count_oxygen(&self, unit: Oxygen) -> usize {
        self.cards.iter().filter(|c| c.is_oxygen_of(unit)).count()
    }

    /// Move every card of `other` into this pile, then shuffle.
    pub fn merge_from(&mut self, other: &mut Deck, rng: &mut GameRng) {
        log::debug!(
            "merging {} cards from {} pile into {} cards",
            other.size(),
            other.role,
            self.size()
        );
        // Drawing one at a time reverses the source order before the shuffle.
        while let Some(card) = other.cards.pop() {
            self.cards.push(card);
        }
        self.shuffle(rng);
    }
}
