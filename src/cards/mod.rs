//! Card system: the card model, the fixed card names, and definition loading.
//!
//! ## Key Types
//!
//! - `Card`: an oxygen unit or a named action/space card
//! - `Oxygen`: the two oxygen unit values
//! - `names`: constants for the fixed card set
//! - `parse_definitions` / `load_definitions`: the `NAME; DESCRIPTION; COUNT` format

pub mod card;
pub mod loader;
pub mod names;

pub use card::{Card, Oxygen};
pub use loader::{load_definitions, parse_definitions, DEFAULT_ACTION_CARDS, DEFAULT_SPACE_CARDS};
