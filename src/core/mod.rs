//! Core engine types: players, RNG, configuration, errors.
//!
//! These are the game-wide building blocks the card, deck, player and engine
//! modules share.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{GameConfig, MAX_PLAYERS, MIN_PLAYERS, SHIP_DISTANCE};
pub use error::{GameError, Result};
pub use player::PlayerId;
pub use rng::{GameRng, GameRngState};
