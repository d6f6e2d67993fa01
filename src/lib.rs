//! # selfish-engine
//!
//! Deterministic rules engine for Selfish, a space-survival card game for
//! 2 to 5 players. Astronauts race back to the ship while breathing down a
//! shared oxygen supply; the first to arrive alive wins.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: One seeded RNG drives every shuffle and random pick.
//!    The same seed and the same calls replay the same game.
//!
//! 2. **Conserved Oxygen**: Oxygen cards move between hands, the action deck
//!    and its discard, but are never created or destroyed during play.
//!
//! 3. **No Front End**: The engine validates rules and reports outcomes.
//!    Prompting, rendering and turn-by-turn play belong to the caller.
//!
//! ## Modules
//!
//! - `core`: Player ids, RNG, configuration, errors
//! - `cards`: The card model and definition file loading
//! - `deck`: Draw and discard piles
//! - `player`: Astronaut hand and track state
//! - `engine`: Game setup, turns, card effects and snapshots
//!
//! ## Usage
//!
//! ```
//! use selfish_engine::{GameConfig, GameEngine, PlayerId};
//!
//! let mut engine = GameEngine::with_default_cards(GameConfig::new(16412)).unwrap();
//! engine.add_player("Ada").unwrap();
//! engine.add_player("Bo").unwrap();
//! engine.start_game().unwrap();
//!
//! engine.start_turn().unwrap();
//! engine.travel(PlayerId::new(0)).unwrap();
//! engine.end_turn().unwrap();
//! ```

pub mod cards;
pub mod core;
pub mod deck;
pub mod engine;
pub mod player;

// Re-export commonly used types
pub use crate::core::{
    GameConfig, GameError, GameRng, GameRngState, PlayerId, Result,
    MAX_PLAYERS, MIN_PLAYERS, SHIP_DISTANCE,
};

pub use crate::cards::{names, Card, Oxygen};

pub use crate::deck::{Deck, DeckRole};

pub use crate::player::Astronaut;

pub use crate::engine::{GameEngine, GamePhase, GameSnapshot, Roster, Seat, SNAPSHOT_VERSION};
