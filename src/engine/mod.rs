//! The rules engine.
//!
//! - `game`: engine construction, dealing and the turn machine
//! - `effects`: card effects that reach across astronauts and decks
//! - `roster`: active queue, current player and corpses
//! - `snapshot`: versioned save and restore

mod effects;
pub mod game;
pub mod roster;
pub mod snapshot;

pub use game::{GameEngine, GamePhase};
pub use roster::{Roster, Seat};
pub use snapshot::{GameSnapshot, SNAPSHOT_VERSION};
