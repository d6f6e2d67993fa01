//! Names of the fixed Selfish card set.
//!
//! Card identity is by display name, so these constants are how effects
//! recognise the cards that carry special rules.

/// Hack suit
pub const HACK_SUIT: &str = "Hack suit";
/// Hole in suit
pub const HOLE_IN_SUIT: &str = "Hole in suit";
/// Laser blast
pub const LASER_BLAST: &str = "Laser blast";
/// Oxygen siphon
pub const OXYGEN_SIPHON: &str = "Oxygen siphon";
/// Rocket booster
pub const ROCKET_BOOSTER: &str = "Rocket booster";
/// Shield
pub const SHIELD: &str = "Shield";
/// Tether
pub const TETHER: &str = "Tether";
/// Tractor beam
pub const TRACTOR_BEAM: &str = "Tractor beam";

/// Action cards in menu order.
pub const ACTION_CARDS: [&str; 8] = [
    HACK_SUIT,
    HOLE_IN_SUIT,
    LASER_BLAST,
    OXYGEN_SIPHON,
    ROCKET_BOOSTER,
    SHIELD,
    TETHER,
    TRACTOR_BEAM,
];

/// Asteroid field
pub const ASTEROID_FIELD: &str = "Asteroid field";
/// Blank space
pub const BLANK_SPACE: &str = "Blank space";
/// Cosmic radiation
pub const COSMIC_RADIATION: &str = "Cosmic radiation";
/// Gravitational anomaly: drawn while travelling, it is discarded instead of tracked.
pub const GRAVITATIONAL_ANOMALY: &str = "Gravitational anomaly";
/// Hyperspace
pub const HYPERSPACE: &str = "Hyperspace";
/// Meteoroid
pub const METEOROID: &str = "Meteoroid";
/// Mysterious nebula
pub const MYSTERIOUS_NEBULA: &str = "Mysterious nebula";
/// Solar flare: melts the eyeballs of whoever has it directly behind them.
pub const SOLAR_FLARE: &str = "Solar flare";
/// Useful junk
pub const USEFUL_JUNK: &str = "Useful junk";
/// Wormhole
pub const WORMHOLE: &str = "Wormhole";
