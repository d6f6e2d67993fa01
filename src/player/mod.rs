//! Astronauts: per-player hand and track state.

pub mod astronaut;

pub use astronaut::Astronaut;
