//! Error type shared by every engine operation.
//!
//! All variants are caller-recoverable rule violations or I/O failures. The
//! engine never retries; the front end decides whether to re-prompt.

use super::player::PlayerId;
use crate::cards::Oxygen;
use crate::deck::DeckRole;

/// Errors surfaced by the rules engine.
#[derive(Debug)]
pub enum GameError {
    /// Roster changes and dealing are only legal before the game starts.
    GameAlreadyStarted,
    /// A game needs between 2 and 5 astronauts.
    InvalidPlayerCount(usize),
    /// The roster is full.
    TooManyPlayers,
    /// Out-of-turn call or an operation the current state forbids.
    InvalidOperation(&'static str),
    /// Drawing from a deck with no cards.
    EmptyDeck(DeckRole),
    /// No oxygen unit of the requested value where one was needed.
    OxygenUnavailable(Oxygen),
    /// Fewer than two Oxygen(1) units exist across the action deck and discard.
    OxygenSupplyExhausted,
    /// The named card is not in the astronaut's hand.
    CardNotFound(String),
    /// An operation was handed the wrong kind of card.
    InvalidArgument(String),
    /// The astronaut has no oxygen left.
    PlayerAlreadyDead(String),
    /// No astronaut with this id is on the roster.
    UnknownPlayer(PlayerId),
    /// Reading a definition file or snapshot failed.
    Io(std::io::Error),
    /// A card definition line could not be parsed.
    Definition { line: usize, reason: String },
    /// A snapshot blob could not be encoded or decoded.
    Snapshot(Box<bincode::ErrorKind>),
    /// A snapshot was written by an incompatible format version.
    SnapshotVersion { expected: u32, found: u32 },
}

impl From<std::io::Error> for GameError {
    fn from(e: std::io::Error) -> Self {
        GameError::Io(e)
    }
}

impl From<Box<bincode::ErrorKind>> for GameError {
    fn from(e: Box<bincode::ErrorKind>) -> Self {
        GameError::Snapshot(e)
    }
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::GameAlreadyStarted => f.write_str("game has already started"),
            GameError::InvalidPlayerCount(n) => {
                write!(f, "cannot start a game with {n} players")
            }
            GameError::TooManyPlayers => f.write_str("the roster is full"),
            GameError::InvalidOperation(what) => write!(f, "invalid operation: {what}"),
            GameError::EmptyDeck(role) => write!(f, "the {role} deck is empty"),
            GameError::OxygenUnavailable(unit) => write!(f, "no {unit} available"),
            GameError::OxygenSupplyExhausted => {
                f.write_str("not enough Oxygen(1) units left to split an Oxygen(2)")
            }
            GameError::CardNotFound(name) => write!(f, "card not found: {name}"),
            GameError::InvalidArgument(what) => write!(f, "invalid argument: {what}"),
            GameError::PlayerAlreadyDead(name) => write!(f, "{name} is already dead"),
            GameError::UnknownPlayer(id) => write!(f, "unknown player: {id}"),
            GameError::Io(e) => write!(f, "I/O error: {e}"),
            GameError::Definition { line, reason } => {
                write!(f, "card definition line {line}: {reason}")
            }
            GameError::Snapshot(e) => write!(f, "snapshot error: {e}"),
            GameError::SnapshotVersion { expected, found } => {
                write!(f, "snapshot version mismatch: expected {expected}, found {found}")
            }
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Io(e) => Some(e),
            GameError::Snapshot(e) => Some(e.as_ref()),
            _ => None,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            GameError::InvalidPlayerCount(6).to_string(),
            "cannot start a game with 6 players"
        );
        assert_eq!(
            GameError::EmptyDeck(DeckRole::Hazard).to_string(),
            "the hazard deck is empty"
        );
        assert_eq!(
            GameError::OxygenUnavailable(Oxygen::Two).to_string(),
            "no Oxygen(2) available"
        );
        assert_eq!(
            GameError::UnknownPlayer(PlayerId::new(3)).to_string(),
            "unknown player: Player 3"
        );
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: GameError = io.into();
        assert!(matches!(err, GameError::Io(_)));
        assert!(err.source().is_some());
    }
}
