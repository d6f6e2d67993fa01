//! Card effects that need more than one astronaut's state.
//!
//! Breathing and siphoning may split an Oxygen(2) against the shared supply,
//! travelling draws from the hazard deck, stealing uses the engine's RNG, and
//! any effect that empties an astronaut's oxygen kills them. All of those
//! live here as engine methods taking a `PlayerId`.
//!
//! ## Oxygen conservation
//!
//! Oxygen never leaves the game. Breathed and hacked units go to the action
//! discard, a split returns the Oxygen(2) to the action deck in exchange for
//! two Oxygen(1), and a corpse's remaining oxygen is discarded.

use super::game::GameEngine;
use crate::cards::{names, Card, Oxygen};
use crate::core::{GameError, PlayerId, Result};
use crate::deck::DeckRole;

impl GameEngine {
    /// Exchange one Oxygen(2) for two Oxygen(1) from the shared supply.
    ///
    /// Oxygen(1) units come from the action deck first, then the action
    /// discard. Fails without side effects when fewer than two exist.
    pub fn split_oxygen(&mut self, unit: Oxygen) -> Result<[Oxygen; 2]> {
        if unit != Oxygen::Two {
            return Err(GameError::InvalidArgument(format!("cannot split {unit}")));
        }

        let in_deck = self.action_deck.count_oxygen(Oxygen::One);
        let in_discard = self.action_discard.count_oxygen(Oxygen::One);
        if in_deck + in_discard < 2 {
            return Err(GameError::OxygenSupplyExhausted);
        }

        let mut pair = [Oxygen::One; 2];
        for slot in &mut pair {
            *slot = if self.action_deck.count_oxygen(Oxygen::One) > 0 {
                self.action_deck.draw_oxygen(Oxygen::One)?
            } else {
                self.action_discard.draw_oxygen(Oxygen::One)?
            };
        }
        self.action_deck.add(unit);

        log::debug!("split {unit} ({in_deck} Oxygen(1) in deck, {in_discard} in discard)");
        Ok(pair)
    }

    /// Swap an Oxygen(2) in the astronaut's hand for two Oxygen(1).
    fn split_in_hand(&mut self, id: PlayerId) -> Result<()> {
        if !self.player(id)?.has_oxygen(Oxygen::Two) {
            return Err(GameError::OxygenUnavailable(Oxygen::Two));
        }
        let pair = self.split_oxygen(Oxygen::Two)?;

        let astronaut = self.player_mut(id)?;
        astronaut.take_oxygen(Oxygen::Two);
        for unit in pair {
            astronaut.add_to_hand(unit.into());
        }
        Ok(())
    }

    /// Breathe once: discard one Oxygen(1), splitting an Oxygen(2) first if
    /// the hand holds no Oxygen(1).
    ///
    /// Returns the oxygen left. An astronaut who runs out is killed.
    pub fn breathe(&mut self, id: PlayerId) -> Result<u32> {
        let astronaut = self.player(id)?;
        if !astronaut.is_alive() {
            return Err(GameError::PlayerAlreadyDead(astronaut.name().to_string()));
        }
        if !astronaut.has_oxygen(Oxygen::One) {
            self.split_in_hand(id)?;
        }

        let astronaut = self.player_mut(id)?;
        let unit = astronaut
            .take_oxygen(Oxygen::One)
            .ok_or(GameError::OxygenUnavailable(Oxygen::One))?;
        let remaining = astronaut.oxygen_remaining();
        self.action_discard.add(unit);

        if remaining == 0 {
            self.kill_player(id)?;
        }
        Ok(remaining)
    }

    /// Fail with `OxygenSupplyExhausted` if breathing `breaths` times in a row
    /// would hit a split the supply cannot cover. Changes nothing.
    fn check_breaths(&self, id: PlayerId, breaths: usize) -> Result<()> {
        let mut ones = self
            .player(id)?
            .oxygen()
            .iter()
            .filter(|&&u| u == Oxygen::One)
            .count();
        let mut supply = self.action_deck.count_oxygen(Oxygen::One)
            + self.action_discard.count_oxygen(Oxygen::One);

        for _ in 0..breaths {
            if ones == 0 {
                if supply < 2 {
                    return Err(GameError::OxygenSupplyExhausted);
                }
                supply -= 2;
                ones += 2;
            }
            // The breathed unit lands in the discard and can back a later split.
            ones -= 1;
            supply += 1;
        }
        Ok(())
    }

    /// Move one space toward the ship.
    ///
    /// Costs two breaths. The drawn space card joins the track, except a
    /// Gravitational anomaly, which is discarded and leaves the astronaut in
    /// place. Running out of air on the second breath does not cancel the
    /// draw. Returns the drawn card.
    pub fn travel(&mut self, id: PlayerId) -> Result<Card> {
        let traveller = self.player(id)?;
        if !traveller.is_alive() {
            return Err(GameError::PlayerAlreadyDead(traveller.name().to_string()));
        }
        if traveller.oxygen_remaining() < 2 {
            return Err(GameError::InvalidOperation("not enough oxygen to travel"));
        }
        self.check_breaths(id, 2)?;
        if self.hazard_deck.is_empty() {
            self.merge_decks(DeckRole::Hazard);
        }
        if self.hazard_deck.is_empty() {
            return Err(GameError::EmptyDeck(DeckRole::Hazard));
        }

        self.breathe(id)?;
        self.breathe(id)?;

        let card = self.draw_hazard()?;
        if card.name() == names::GRAVITATIONAL_ANOMALY {
            log::debug!("{id} hit a gravitational anomaly");
            self.hazard_discard.add(card.clone());
        } else {
            self.player_mut(id)?.add_to_track(card.clone());
        }
        Ok(card)
    }

    /// Take one Oxygen(1) from the astronaut.
    ///
    /// With no Oxygen(1) in hand an Oxygen(2) is split; one half stays and
    /// the other is returned. Only taking a plain Oxygen(1) can kill.
    pub fn siphon(&mut self, id: PlayerId) -> Result<Oxygen> {
        let victim = self.player_mut(id)?;
        if let Some(unit) = victim.take_oxygen(Oxygen::One) {
            if victim.oxygen_remaining() == 0 {
                self.kill_player(id)?;
            }
            return Ok(unit);
        }

        if !victim.has_oxygen(Oxygen::Two) {
            return Err(GameError::OxygenUnavailable(Oxygen::One));
        }
        self.split_in_hand(id)?;
        self.player_mut(id)?
            .take_oxygen(Oxygen::One)
            .ok_or(GameError::OxygenUnavailable(Oxygen::One))
    }

    /// Discard a specific card from the astronaut's hand.
    ///
    /// Returns the discarded card. Losing the last oxygen kills.
    pub fn hack(&mut self, id: PlayerId, card: &Card) -> Result<Card> {
        let removed = self
            .player_mut(id)?
            .take_card(card)
            .ok_or_else(|| GameError::CardNotFound(card.name().to_string()))?;
        self.discard_from_hand(id, removed)
    }

    /// Discard the first hand card displayed as `name`.
    pub fn hack_by_name(&mut self, id: PlayerId, name: &str) -> Result<Card> {
        let removed = self
            .player_mut(id)?
            .take_card_named(name)
            .ok_or_else(|| GameError::CardNotFound(name.to_string()))?;
        self.discard_from_hand(id, removed)
    }

    fn discard_from_hand(&mut self, id: PlayerId, card: Card) -> Result<Card> {
        self.action_discard.add(card.clone());
        if card.is_oxygen() && !self.player(id)?.is_alive() {
            self.kill_player(id)?;
        }
        Ok(card)
    }

    /// Take a random card from the astronaut's hand and hand it to the caller.
    ///
    /// The pick is over the sorted hand with an index in `[0, size - 1)`, so
    /// the last card is never chosen from a hand of two or more. Taking the
    /// only card, or the last oxygen, kills.
    pub fn steal(&mut self, id: PlayerId) -> Result<Card> {
        let size = self.player(id)?.hand_size();
        let index = match size {
            0 => return Err(GameError::InvalidOperation("there is nothing to steal")),
            1 => 0,
            n => self.rng.gen_range_usize(0..n - 1),
        };

        let victim = self.player_mut(id)?;
        let card = victim
            .take_at(index)
            .ok_or(GameError::InvalidOperation("there is nothing to steal"))?;
        if size == 1 || (card.is_oxygen() && !victim.is_alive()) {
            self.kill_player(id)?;
        }
        Ok(card)
    }

    /// Push the astronaut back one space. The card removed from the track is
    /// discarded and returned.
    pub fn laser_blast(&mut self, id: PlayerId) -> Result<Card> {
        let card = self.player_mut(id)?.laser_blast()?;
        self.hazard_discard.add(card.clone());
        Ok(card)
    }

    /// Exchange two astronauts' tracks.
    pub fn swap_tracks(&mut self, a: PlayerId, b: PlayerId) -> Result<()> {
        self.player(a)?;
        self.player(b)?;
        if a == b {
            return Ok(());
        }

        let track_a = self.player_mut(a)?.replace_track(Vec::new());
        let track_b = self.player_mut(b)?.replace_track(track_a);
        self.player_mut(a)?.replace_track(track_b);
        Ok(())
    }

    /// Eliminate an astronaut.
    ///
    /// Remaining oxygen and action cards go to the action discard and the
    /// astronaut moves to the corpse list. Killing a corpse changes nothing.
    pub fn kill_player(&mut self, id: PlayerId) -> Result<()> {
        let corpse = self.player_mut(id)?;
        let oxygen = corpse.take_all_oxygen();
        let actions = corpse.take_actions();

        self.action_discard
            .add_all(oxygen.into_iter().map(Card::Oxygen).chain(actions));

        if self.roster.bury(id) {
            log::info!("{} has been eliminated", self.player(id)?.name());
        }
        Ok(())
    }
}
