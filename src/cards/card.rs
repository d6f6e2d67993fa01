//! The card model.
//!
//! Every physical card in the game is a `Card`. Oxygen units are a variant
//! rather than a subtype so that decks and hands hold one element type and
//! never downcast.
//!
//! ## Ordering
//!
//! Oxygen compares against oxygen by value. Every other pairing, including
//! oxygen against a named card, compares display names lexicographically.
//! Equality follows the same rule, so two named cards with the same name are
//! interchangeable.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// A fungible oxygen unit. Only values 1 and 2 exist.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Oxygen {
    /// Oxygen(1)
    One,
    /// Oxygen(2)
    Two,
}

impl Oxygen {
    /// Oxygen value carried by this unit.
    #[must_use]
    pub const fn value(self) -> u32 {
        match self {
            Oxygen::One => 1,
            Oxygen::Two => 2,
        }
    }

    /// Unit for a raw value, if one exists.
    #[must_use]
    pub const fn from_value(value: u32) -> Option<Self> {
        match value {
            1 => Some(Oxygen::One),
            2 => Some(Oxygen::Two),
            _ => None,
        }
    }

    /// Display name, `Oxygen(<value>)`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Oxygen::One => "Oxygen(1)",
            Oxygen::Two => "Oxygen(2)",
        }
    }
}

impl std::fmt::Display for Oxygen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl From<Oxygen> for Card {
    fn from(unit: Oxygen) -> Self {
        Card::Oxygen(unit)
    }
}

const OXYGEN_DESCRIPTION: &str = "Keeps you breathing. Discard one each time you breathe.";

/// A single card: an oxygen unit or a named action/space card.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Card {
    /// Oxygen unit from the action deck's oxygen pool.
    Oxygen(Oxygen),
    /// Action or space card loaded from a definition file.
    Named { name: String, description: String },
}

impl Card {
    /// Create a named card.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Card::Named {
            name: name.into(),
            description: description.into(),
        }
    }

    /// Display name. Oxygen units render as `Oxygen(<value>)`.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Card::Oxygen(unit) => unit.label(),
            Card::Named { name, .. } => name,
        }
    }

    /// Static description text.
    #[must_use]
    pub fn description(&self) -> &str {
        match self {
            Card::Oxygen(_) => OXYGEN_DESCRIPTION,
            Card::Named { description, .. } => description,
        }
    }

    /// The oxygen unit, if this is one.
    #[must_use]
    pub fn as_oxygen(&self) -> Option<Oxygen> {
        match self {
            Card::Oxygen(unit) => Some(*unit),
            Card::Named { .. } => None,
        }
    }

    /// Is this an oxygen unit?
    #[must_use]
    pub fn is_oxygen(&self) -> bool {
        matches!(self, Card::Oxygen(_))
    }

    /// Is this an oxygen unit of the given value?
    #[must_use]
    pub fn is_oxygen_of(&self, unit: Oxygen) -> bool {
        self.as_oxygen() == Some(unit)
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Card::Oxygen(a), Card::Oxygen(b)) => a.cmp(b),
            _ => self.name().cmp(other.name()),
        }
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Card {}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oxygen_values() {
        assert_eq!(Oxygen::One.value(), 1);
        assert_eq!(Oxygen::Two.value(), 2);
        assert_eq!(Oxygen::from_value(2), Some(Oxygen::Two));
        assert_eq!(Oxygen::from_value(3), None);
        assert_eq!(Oxygen::from_value(0), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Card::from(Oxygen::One).to_string(), "Oxygen(1)");
        assert_eq!(Card::from(Oxygen::Two).to_string(), "Oxygen(2)");
        assert_eq!(Card::new("Shield", "Blocks an attack").to_string(), "Shield");
    }

    #[test]
    fn test_oxygen_orders_by_value() {
        assert!(Card::Oxygen(Oxygen::One) < Card::Oxygen(Oxygen::Two));
        assert_eq!(Card::Oxygen(Oxygen::Two), Card::Oxygen(Oxygen::Two));
    }

    #[test]
    fn test_mixed_cards_order_by_name() {
        let hack = Card::new("Hack suit", "");
        let shield = Card::new("Shield", "");
        let oxygen = Card::Oxygen(Oxygen::Two);

        assert!(hack < oxygen); // "Hack suit" < "Oxygen(2)"
        assert!(oxygen < shield); // "Oxygen(2)" < "Shield"
        assert!(hack < shield);
    }

    #[test]
    fn test_equality_ignores_description() {
        let a = Card::new("Tether", "one");
        let b = Card::new("Tether", "two");
        assert_eq!(a, b);
        assert_eq!(a.description(), "one");
    }

    #[test]
    fn test_sorting_a_hand() {
        let mut hand = vec![
            Card::new("Tractor beam", ""),
            Card::Oxygen(Oxygen::Two),
            Card::new("Laser blast", ""),
            Card::Oxygen(Oxygen::One),
        ];
        hand.sort();

        let names: Vec<_> = hand.iter().map(Card::name).collect();
        assert_eq!(names, vec!["Laser blast", "Oxygen(1)", "Oxygen(2)", "Tractor beam"]);
    }

    #[test]
    fn test_as_oxygen() {
        assert_eq!(Card::Oxygen(Oxygen::One).as_oxygen(), Some(Oxygen::One));
        assert!(Card::new("Shield", "").as_oxygen().is_none());
        assert!(Card::Oxygen(Oxygen::One).is_oxygen_of(Oxygen::One));
        assert!(!Card::Oxygen(Oxygen::One).is_oxygen_of(Oxygen::Two));
    }

    #[test]
    fn test_card_serialization() {
        let card = Card::new("Solar flare", "Hot");
        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();

        assert_eq!(card, deserialized);
        assert_eq!(deserialized.description(), "Hot");
    }
}
