//! Astronaut state: hand, track, and the queries derived from them.
//!
//! ## Hand
//!
//! The hand is split in two. Oxygen units are fungible and kept as a small
//! multiset; action cards are kept sorted so that the full hand listing and
//! random picks over it are stable.
//!
//! ## Track
//!
//! The track holds the space cards collected while travelling, oldest first.
//! The last card is the one directly behind the astronaut, nearest the ship.
//!
//! Operations that touch decks or other players (breathing, travelling,
//! stealing) live on `GameEngine`; everything here is local to one astronaut.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{names, Card, Oxygen};
use crate::core::{GameError, PlayerId, Result, SHIP_DISTANCE};

/// One player in the race back to the ship.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Astronaut {
    id: PlayerId,
    name: String,
    /// Oxygen units in hand, in arrival order.
    oxygen: SmallVec<[Oxygen; 8]>,
    /// Action cards in hand, sorted.
    actions: Vec<Card>,
    /// Space cards, oldest first.
    track: Vec<Card>,
}

impl Astronaut {
    /// Create an astronaut with an empty hand and track.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            oxygen: SmallVec::new(),
            actions: Vec::new(),
            track: Vec::new(),
        }
    }

    /// Stable roster handle.
    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Player name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    // === Hand ===

    /// Add a card to the hand. Oxygen joins the oxygen pool, anything else the actions.
    pub fn add_to_hand(&mut self, card: Card) {
        match card {
            Card::Oxygen(unit) => self.oxygen.push(unit),
            card => {
                let index = self.actions.partition_point(|c| c <= &card);
                self.actions.insert(index, card);
            }
        }
    }

    /// Oxygen units in hand.
    #[must_use]
    pub fn oxygen(&self) -> &[Oxygen] {
        &self.oxygen
    }

    /// Action cards in hand, sorted.
    #[must_use]
    pub fn actions(&self) -> &[Card] {
        &self.actions
    }

    /// The full hand, sorted.
    #[must_use]
    pub fn hand(&self) -> Vec<Card> {
        let mut hand: Vec<Card> = self.oxygen.iter().map(|&u| Card::Oxygen(u)).collect();
        hand.extend(self.actions.iter().cloned());
        hand.sort();
        hand
    }

    /// Number of cards in hand.
    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.oxygen.len() + self.actions.len()
    }

    /// Number of hand cards whose display name is `name`.
    #[must_use]
    pub fn has_card(&self, name: &str) -> usize {
        let oxygen = self.oxygen.iter().filter(|u| u.label() == name).count();
        let actions = self.actions.iter().filter(|c| c.name() == name).count();
        oxygen + actions
    }

    /// Check for an oxygen unit of the given value.
    #[must_use]
    pub fn has_oxygen(&self, unit: Oxygen) -> bool {
        self.oxygen.contains(&unit)
    }

    /// Remove the first oxygen unit of the given value.
    pub fn take_oxygen(&mut self, unit: Oxygen) -> Option<Oxygen> {
        let index = self.oxygen.iter().position(|&u| u == unit)?;
        Some(self.oxygen.remove(index))
    }

    /// Remove a card equal to `card` from the hand.
    pub fn take_card(&mut self, card: &Card) -> Option<Card> {
        match card {
            Card::Oxygen(unit) => self.take_oxygen(*unit).map(Card::Oxygen),
            _ => {
                let index = self.actions.iter().position(|c| c == card)?;
                Some(self.actions.remove(index))
            }
        }
    }

    /// Remove the first hand card displayed as `name`.
    pub fn take_card_named(&mut self, name: &str) -> Option<Card> {
        if let Some(unit) = [Oxygen::One, Oxygen::Two].into_iter().find(|u| u.label() == name) {
            return self.take_oxygen(unit).map(Card::Oxygen);
        }
        let index = self.actions.iter().position(|c| c.name() == name)?;
        Some(self.actions.remove(index))
    }

    /// Remove the card at `index` of the sorted hand.
    pub fn take_at(&mut self, index: usize) -> Option<Card> {
        let card = self.hand().into_iter().nth(index)?;
        self.take_card(&card)
    }

    /// Empty the oxygen pool.
    pub fn take_all_oxygen(&mut self) -> Vec<Oxygen> {
        self.oxygen.drain(..).collect()
    }

    /// Empty the action cards.
    pub fn take_actions(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.actions)
    }

    // === Derived state ===

    /// Total oxygen value in hand.
    #[must_use]
    pub fn oxygen_remaining(&self) -> u32 {
        self.oxygen.iter().map(|u| u.value()).sum()
    }

    /// An astronaut is alive while any oxygen remains.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.oxygen_remaining() > 0
    }

    /// Spaces left to the ship. Negative only after track swaps.
    #[must_use]
    pub fn distance_from_ship(&self) -> i32 {
        SHIP_DISTANCE - self.track.len() as i32
    }

    /// At the ship with oxygen to spare.
    #[must_use]
    pub fn has_won(&self) -> bool {
        self.distance_from_ship() == 0 && self.is_alive()
    }

    // === Track ===

    /// Space cards, oldest first.
    #[must_use]
    pub fn track(&self) -> &[Card] {
        &self.track
    }

    /// Add a space card at the ship end of the track.
    pub fn add_to_track(&mut self, card: Card) {
        self.track.push(card);
    }

    /// The space card directly behind, if any.
    #[must_use]
    pub fn peek_at_track(&self) -> Option<&Card> {
        if self.distance_from_ship() < 0 {
            return None;
        }
        self.track.last()
    }

    /// True when a Solar flare is directly behind.
    #[must_use]
    pub fn has_melted_eyeballs(&self) -> bool {
        self.peek_at_track()
            .is_some_and(|card| card.name() == names::SOLAR_FLARE)
    }

    /// Push back one space, returning the card that was directly behind.
    pub fn laser_blast(&mut self) -> Result<Card> {
        self.track
            .pop()
            .ok_or(GameError::InvalidOperation("cannot push back from the starting position"))
    }

    /// Exchange tracks with another astronaut.
    pub fn swap_track(&mut self, other: &mut Astronaut) {
        std::mem::swap(&mut self.track, &mut other.track);
    }

    /// Install a new track, returning the old one.
    pub fn replace_track(&mut self, track: Vec<Card>) -> Vec<Card> {
        std::mem::replace(&mut self.track, track)
    }

    // === Listings ===

    /// Action cards as a comma-separated list.
    ///
    /// Enumerated listings letter each distinct card (`[A] Hack suit, [B] Shield`);
    /// plain listings count duplicates (`Hack suit, 2x Shield`).
    #[must_use]
    pub fn actions_summary(&self, enumerated: bool, exclude_shields: bool) -> String {
        let counts = self.action_counts();
        let present = names::ACTION_CARDS
            .iter()
            .filter(|&&name| !(exclude_shields && name == names::SHIELD))
            .filter_map(|&name| counts.get(name).map(|&count| (name, count)));

        let entries: Vec<String> = if enumerated {
            present
                .zip(b'A'..)
                .map(|((name, _), letter)| format!("[{}] {}", letter as char, name))
                .collect()
        } else {
            present.map(|(name, count)| counted(name, count)).collect()
        };
        entries.join(", ")
    }

    /// Whole hand, oxygen first: `Oxygen(2), 4x Oxygen(1); Hack suit, 2x Shield`.
    ///
    /// Any oxygen part is always followed by `"; "`, even with no action cards.
    #[must_use]
    pub fn hand_summary(&self) -> String {
        let oxygen: Vec<String> = [Oxygen::Two, Oxygen::One]
            .into_iter()
            .map(|unit| (unit, self.oxygen.iter().filter(|&&u| u == unit).count()))
            .filter(|&(_, count)| count > 0)
            .map(|(unit, count)| counted(unit.label(), count))
            .collect();

        let mut summary = String::new();
        if !oxygen.is_empty() {
            summary.push_str(&oxygen.join(", "));
            summary.push_str("; ");
        }
        summary.push_str(&self.actions_summary(false, false));
        summary
    }

    fn action_counts(&self) -> FxHashMap<&str, usize> {
        let mut counts = FxHashMap::default();
        for card in &self.actions {
            *counts.entry(card.name()).or_insert(0) += 1;
        }
        counts
    }
}

fn counted(name: &str, count: usize) -> String {
    if count > 1 {
        format!("{count}x {name}")
    } else {
        name.to_string()
    }
}

impl std::fmt::Display for Astronaut {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_alive() {
            f.write_str(&self.name)
        } else {
            write!(f, "{} (is dead)", self.name)
        }
    }
}
