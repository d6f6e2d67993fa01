//! The game engine: decks, roster and the turn state machine.
//!
//! ## Phases
//!
//! `NotStarted → InProgress → Over`. While in progress each round alternates
//! between no current player (`start_turn` is legal) and a player acting
//! (`end_turn` is legal).
//!
//! ## Decks
//!
//! The engine owns four piles: the action deck (action cards plus the oxygen
//! pool), its discard, the hazard deck (space cards) and its discard. A
//! discard pile only ever merges back into the deck of the same role.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::roster::Roster;
use crate::cards::{self, Card, Oxygen};
use crate::core::{GameConfig, GameError, GameRng, PlayerId, Result, MAX_PLAYERS, MIN_PLAYERS};
use crate::deck::{Deck, DeckRole};
use crate::player::Astronaut;

/// Turn machine position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Players may join.
    NotStarted,
    /// Turns are being played.
    InProgress,
    /// Someone reached the ship or everyone is dead.
    Over,
}

/// Rules engine for one game of Selfish.
#[derive(Clone, Debug)]
pub struct GameEngine {
    pub(super) config: GameConfig,
    pub(super) rng: GameRng,
    pub(super) started: bool,
    pub(super) roster: Roster,
    pub(super) next_player_id: u8,
    pub(super) action_deck: Deck,
    pub(super) action_discard: Deck,
    pub(super) hazard_deck: Deck,
    pub(super) hazard_discard: Deck,
}

impl GameEngine {
    /// Create an engine from action and space card definition files.
    pub fn new(
        seed: u64,
        action_cards: impl AsRef<Path>,
        space_cards: impl AsRef<Path>,
    ) -> Result<Self> {
        let actions = cards::load_definitions(action_cards)?;
        let space = cards::load_definitions(space_cards)?;
        Ok(Self::from_cards(GameConfig::new(seed), actions, space))
    }

    /// Create an engine from the bundled card definitions.
    pub fn with_default_cards(config: GameConfig) -> Result<Self> {
        let actions = cards::parse_definitions(cards::DEFAULT_ACTION_CARDS)?;
        let space = cards::parse_definitions(cards::DEFAULT_SPACE_CARDS)?;
        Ok(Self::from_cards(config, actions, space))
    }

    /// Create an engine from already-loaded cards.
    ///
    /// The configured oxygen pool is added to the action cards, then the
    /// action deck and the hazard deck are shuffled, in that order.
    #[must_use]
    pub fn from_cards(config: GameConfig, action_cards: Vec<Card>, space_cards: Vec<Card>) -> Self {
        let mut rng = GameRng::new(config.seed);

        let mut action_deck = Deck::with_cards(DeckRole::Action, action_cards);
        action_deck.add_all(std::iter::repeat(Card::Oxygen(Oxygen::Two)).take(config.oxygen_two_count));
        action_deck.add_all(std::iter::repeat(Card::Oxygen(Oxygen::One)).take(config.oxygen_one_count));
        action_deck.shuffle(&mut rng);

        let mut hazard_deck = Deck::with_cards(DeckRole::Hazard, space_cards);
        hazard_deck.shuffle(&mut rng);

        log::debug!(
            "engine seeded with {}: {} action cards, {} hazard cards",
            config.seed,
            action_deck.size(),
            hazard_deck.size()
        );

        Self {
            config,
            rng,
            started: false,
            roster: Roster::new(),
            next_player_id: 0,
            action_deck,
            action_discard: Deck::new(DeckRole::Action),
            hazard_deck,
            hazard_discard: Deck::new(DeckRole::Hazard),
        }
    }

    // === Setup ===

    /// Add an astronaut. Returns the roster size.
    pub fn add_player(&mut self, name: impl Into<String>) -> Result<usize> {
        if self.started {
            return Err(GameError::GameAlreadyStarted);
        }
        if self.roster.len() >= MAX_PLAYERS {
            return Err(GameError::TooManyPlayers);
        }

        let id = PlayerId::new(self.next_player_id);
        self.next_player_id += 1;
        self.roster.enqueue(Astronaut::new(id, name));
        Ok(self.roster.len())
    }

    /// Deal opening hands and begin play.
    ///
    /// Each astronaut receives the configured oxygen, then action cards are
    /// dealt round-robin.
    pub fn start_game(&mut self) -> Result<()> {
        if self.started {
            return Err(GameError::GameAlreadyStarted);
        }
        let players = self.roster.len();
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&players) {
            return Err(GameError::InvalidPlayerCount(players));
        }
        self.check_opening_deal(players)?;

        let config = &self.config;
        for astronaut in self.roster.active_mut() {
            for _ in 0..config.starting_oxygen_twos {
                astronaut.add_to_hand(self.action_deck.draw_oxygen(Oxygen::Two)?.into());
            }
            for _ in 0..config.starting_oxygen_ones {
                astronaut.add_to_hand(self.action_deck.draw_oxygen(Oxygen::One)?.into());
            }
        }
        for _ in 0..config.starting_actions {
            for astronaut in self.roster.active_mut() {
                astronaut.add_to_hand(self.action_deck.draw_action()?);
            }
        }

        self.started = true;
        log::info!("game started with {players} players");
        Ok(())
    }

    fn check_opening_deal(&self, players: usize) -> Result<()> {
        let config = &self.config;
        if self.action_deck.count_oxygen(Oxygen::Two) < players * config.starting_oxygen_twos {
            return Err(GameError::OxygenUnavailable(Oxygen::Two));
        }
        if self.action_deck.count_oxygen(Oxygen::One) < players * config.starting_oxygen_ones {
            return Err(GameError::OxygenUnavailable(Oxygen::One));
        }
        let actions = self.action_deck.cards().iter().filter(|c| !c.is_oxygen()).count();
        if actions < players * config.starting_actions {
            return Err(GameError::EmptyDeck(DeckRole::Action));
        }
        Ok(())
    }

    // === Turns ===

    /// Bring the next astronaut up and draw them a card.
    pub fn start_turn(&mut self) -> Result<()> {
        if !self.started {
            return Err(GameError::InvalidOperation("the game has not started"));
        }
        if self.roster.current().is_some() {
            return Err(GameError::InvalidOperation("a turn is already in progress"));
        }
        if self.game_over() {
            return Err(GameError::InvalidOperation("the game is over"));
        }
        if self.action_deck.is_empty() {
            self.merge_decks(DeckRole::Action);
        }
        if self.action_deck.is_empty() {
            return Err(GameError::EmptyDeck(DeckRole::Action));
        }

        let id = self
            .roster
            .advance()
            .ok_or(GameError::InvalidOperation("no astronaut is waiting for a turn"))?;
        let card = self.action_deck.draw()?;
        let current = self.roster.get_mut(id).ok_or(GameError::UnknownPlayer(id))?;
        current.add_to_hand(card);

        log::info!("{current}'s turn has started");
        Ok(())
    }

    /// Finish the current turn. Returns how many astronauts are still alive.
    ///
    /// A living current player goes to the back of the queue; a dead one is
    /// routed through `kill_player`.
    pub fn end_turn(&mut self) -> Result<usize> {
        if !self.started {
            return Err(GameError::InvalidOperation("the game has not started"));
        }
        if let Some(current) = self.roster.take_current() {
            log::info!("{current}'s turn has ended");
            if current.is_alive() {
                self.roster.enqueue(current);
            } else {
                let id = current.id();
                self.roster.restore_current(current);
                self.kill_player(id)?;
            }
        }
        if let Some(winner) = self.get_winner() {
            log::info!("{winner} has reached the ship");
        }
        Ok(self.roster.len() - self.roster.corpse_count())
    }

    // === Queries ===

    /// Current position of the turn machine.
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        if !self.started {
            GamePhase::NotStarted
        } else if self.game_over() {
            GamePhase::Over
        } else {
            GamePhase::InProgress
        }
    }

    /// Check if the game has started.
    #[must_use]
    pub fn has_started(&self) -> bool {
        self.started
    }

    /// True once someone has won or every astronaut is dead.
    #[must_use]
    pub fn game_over(&self) -> bool {
        if !self.started {
            return false;
        }
        self.roster.iter().any(Astronaut::has_won)
            || self.roster.corpse_count() == self.roster.len()
    }

    /// First astronaut in roster order who has reached the ship alive.
    #[must_use]
    pub fn get_winner(&self) -> Option<&Astronaut> {
        self.roster.iter().find(|a| a.has_won())
    }

    /// Everyone: current player, active queue, then corpses.
    #[must_use]
    pub fn get_all_players(&self) -> Vec<&Astronaut> {
        self.roster.iter().collect()
    }

    /// Roster size, dead or alive.
    #[must_use]
    pub fn full_player_count(&self) -> usize {
        self.roster.len()
    }

    /// The astronaut taking their turn.
    #[must_use]
    pub fn current_player(&self) -> Option<&Astronaut> {
        self.roster.current()
    }

    /// Eliminated astronauts, in order of death.
    pub fn corpses(&self) -> impl Iterator<Item = &Astronaut> {
        self.roster.corpses()
    }

    /// Look up an astronaut.
    pub fn player(&self, id: PlayerId) -> Result<&Astronaut> {
        self.roster.get(id).ok_or(GameError::UnknownPlayer(id))
    }

    /// Look up an astronaut mutably.
    pub fn player_mut(&mut self, id: PlayerId) -> Result<&mut Astronaut> {
        self.roster.get_mut(id).ok_or(GameError::UnknownPlayer(id))
    }

    /// Configuration the engine was built with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    // === Decks ===

    /// Action cards and the oxygen pool.
    #[must_use]
    pub fn action_deck(&self) -> &Deck {
        &self.action_deck
    }

    /// Discarded action cards and breathed oxygen.
    #[must_use]
    pub fn action_discard(&self) -> &Deck {
        &self.action_discard
    }

    /// Space hazard cards.
    #[must_use]
    pub fn hazard_deck(&self) -> &Deck {
        &self.hazard_deck
    }

    /// Discarded space cards.
    #[must_use]
    pub fn hazard_discard(&self) -> &Deck {
        &self.hazard_discard
    }

    /// Draw a space card, refilling the hazard deck from its discard if needed.
    pub fn draw_hazard(&mut self) -> Result<Card> {
        if self.hazard_deck.is_empty() {
            self.merge_decks(DeckRole::Hazard);
        }
        self.hazard_deck.draw()
    }

    /// Refill a deck from its discard pile and reshuffle.
    pub fn merge_decks(&mut self, role: DeckRole) {
        let (deck, discard) = match role {
            DeckRole::Action => (&mut self.action_deck, &mut self.action_discard),
            DeckRole::Hazard => (&mut self.hazard_deck, &mut self.hazard_discard),
        };
        deck.merge_from(discard, &mut self.rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> GameEngine {
        GameEngine::with_default_cards(GameConfig::new(16412)).unwrap()
    }

    #[test]
    fn test_new_engine_decks() {
        let engine = engine();

        assert_eq!(engine.action_deck().size(), 38 + 10 + 38);
        assert_eq!(engine.action_deck().count_oxygen(Oxygen::Two), 10);
        assert_eq!(engine.hazard_deck().size(), 42);
        assert!(engine.action_discard().is_empty());
        assert!(engine.hazard_discard().is_empty());
        assert_eq!(engine.phase(), GamePhase::NotStarted);
    }

    #[test]
    fn test_add_player_limits() {
        let mut engine = engine();
        for i in 1..=5 {
            assert_eq!(engine.add_player(format!("P{i}")).unwrap(), i);
        }
        assert!(matches!(engine.add_player("P6"), Err(GameError::TooManyPlayers)));
    }

    #[test]
    fn test_start_game_player_count() {
        let mut engine = engine();
        assert!(matches!(engine.start_game(), Err(GameError::InvalidPlayerCount(0))));

        engine.add_player("A").unwrap();
        assert!(matches!(engine.start_game(), Err(GameError::InvalidPlayerCount(1))));

        engine.add_player("B").unwrap();
        engine.start_game().unwrap();
        assert_eq!(engine.phase(), GamePhase::InProgress);

        assert!(matches!(engine.start_game(), Err(GameError::GameAlreadyStarted)));
        assert!(matches!(engine.add_player("C"), Err(GameError::GameAlreadyStarted)));
    }

    #[test]
    fn test_turns_before_start() {
        let mut engine = engine();
        engine.add_player("A").unwrap();
        assert!(matches!(engine.start_turn(), Err(GameError::InvalidOperation(_))));
        assert!(matches!(engine.end_turn(), Err(GameError::InvalidOperation(_))));
        assert!(!engine.game_over());
    }

    #[test]
    fn test_turn_cycle() {
        let mut engine = engine();
        engine.add_player("A").unwrap();
        engine.add_player("B").unwrap();
        engine.start_game().unwrap();

        engine.start_turn().unwrap();
        assert_eq!(engine.current_player().unwrap().name(), "A");
        assert_eq!(engine.current_player().unwrap().hand_size(), 10);
        assert!(matches!(engine.start_turn(), Err(GameError::InvalidOperation(_))));

        assert_eq!(engine.end_turn().unwrap(), 2);
        assert!(engine.current_player().is_none());

        engine.start_turn().unwrap();
        assert_eq!(engine.current_player().unwrap().name(), "B");

        let names: Vec<_> = engine.get_all_players().iter().map(|a| a.name()).collect();
        assert_eq!(names, vec!["B", "A"]);
    }

    #[test]
    fn test_end_turn_without_current_player() {
        let mut engine = engine();
        engine.add_player("A").unwrap();
        engine.add_player("B").unwrap();
        engine.start_game().unwrap();

        assert_eq!(engine.end_turn().unwrap(), 2);
    }

    #[test]
    fn test_start_turn_refills_from_discard() {
        let mut engine = GameEngine::from_cards(
            GameConfig::new(3).with_oxygen_pool(2, 8),
            (0..8).map(|_| Card::new("Shield", "")).collect(),
            Vec::new(),
        );
        engine.add_player("A").unwrap();
        engine.add_player("B").unwrap();
        engine.start_game().unwrap();
        assert!(engine.action_deck().is_empty());

        assert!(matches!(engine.start_turn(), Err(GameError::EmptyDeck(DeckRole::Action))));

        engine.action_discard.add(Card::new("Tether", ""));
        engine.start_turn().unwrap();
        assert_eq!(engine.current_player().unwrap().has_card("Tether"), 1);
        assert!(engine.action_discard().is_empty());
    }

    #[test]
    fn test_opening_deal_needs_enough_oxygen() {
        let mut engine = GameEngine::from_cards(
            GameConfig::new(3).with_oxygen_pool(1, 8),
            (0..8).map(|_| Card::new("Shield", "")).collect(),
            Vec::new(),
        );
        engine.add_player("A").unwrap();
        engine.add_player("B").unwrap();

        assert!(matches!(
            engine.start_game(),
            Err(GameError::OxygenUnavailable(Oxygen::Two))
        ));
        assert!(!engine.has_started());
        assert_eq!(engine.action_deck().size(), 17);
    }

    #[test]
    fn test_merge_decks_keeps_roles() {
        let mut engine = engine();
        engine.hazard_discard.add(Card::new("Meteoroid", ""));
        engine.merge_decks(DeckRole::Hazard);

        assert_eq!(engine.hazard_deck().size(), 43);
        assert!(engine.hazard_discard().is_empty());
        assert_eq!(engine.action_deck().size(), 86);
    }

    #[test]
    fn test_draw_hazard_refills() {
        let mut engine = GameEngine::from_cards(
            GameConfig::new(4),
            Vec::new(),
            vec![Card::new("Meteoroid", "")],
        );
        let card = engine.draw_hazard().unwrap();
        assert!(matches!(engine.draw_hazard(), Err(GameError::EmptyDeck(DeckRole::Hazard))));

        engine.hazard_discard.add(card);
        assert_eq!(engine.draw_hazard().unwrap().name(), "Meteoroid");
        assert!(engine.hazard_discard().is_empty());
    }
}
