//! Game configuration and rule constants.
//!
//! The fixed Selfish rules live here as constants. `GameConfig` carries the
//! per-game knobs: the RNG seed, the size of the oxygen pool shuffled into the
//! action deck, and the opening deal.

use serde::{Deserialize, Serialize};

/// Fewest astronauts a game can start with.
pub const MIN_PLAYERS: usize = 2;

/// Most astronauts a roster can hold.
pub const MAX_PLAYERS: usize = 5;

/// Spaces between the starting position and the ship.
pub const SHIP_DISTANCE: i32 = 6;

/// Complete game configuration.
///
/// ## Example
///
/// ```
/// use selfish_engine::core::GameConfig;
///
/// let config = GameConfig::new(16412).with_oxygen_pool(10, 38);
///
/// assert_eq!(config.seed, 16412);
/// assert_eq!(config.oxygen_two_count, 10);
/// assert_eq!(config.oxygen_one_count, 38);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seed for the engine's RNG stream.
    pub seed: u64,

    /// Oxygen(2) units added to the action deck.
    pub oxygen_two_count: usize,

    /// Oxygen(1) units added to the action deck.
    pub oxygen_one_count: usize,

    /// Oxygen(2) units dealt to each astronaut.
    pub starting_oxygen_twos: usize,

    /// Oxygen(1) units dealt to each astronaut.
    pub starting_oxygen_ones: usize,

    /// Action cards dealt round-robin to each astronaut.
    pub starting_actions: usize,
}

impl GameConfig {
    /// Create the standard configuration with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            oxygen_two_count: 10,
            oxygen_one_count: 38,
            starting_oxygen_twos: 1,
            starting_oxygen_ones: 4,
            starting_actions: 4,
        }
    }

    /// Set the oxygen pool shuffled into the action deck.
    #[must_use]
    pub fn with_oxygen_pool(mut self, twos: usize, ones: usize) -> Self {
        self.oxygen_two_count = twos;
        self.oxygen_one_count = ones;
        self
    }

    /// Set the opening deal per astronaut.
    #[must_use]
    pub fn with_starting_hand(mut self, twos: usize, ones: usize, actions: usize) -> Self {
        self.starting_oxygen_twos = twos;
        self.starting_oxygen_ones = ones;
        self.starting_actions = actions;
        self
    }

    /// Oxygen value each astronaut starts with.
    #[must_use]
    pub fn starting_oxygen_value(&self) -> u32 {
        (self.starting_oxygen_twos * 2 + self.starting_oxygen_ones) as u32
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(0)
    }
}
