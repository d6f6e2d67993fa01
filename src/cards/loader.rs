//! Card definition loading.
//!
//! ## Format
//!
//! ```text
//! NAME; DESCRIPTION; COUNT
//! Shield; Play to block an attack against you.; 6
//! ```
//!
//! The header line (first field `NAME`) and blank lines are skipped. Each
//! data line expands to `COUNT` identical cards.

use std::path::Path;

use super::card::Card;
use crate::core::{GameError, Result};

/// Bundled action card definitions.
pub const DEFAULT_ACTION_CARDS: &str = include_str!("../../data/ActionCards.txt");

/// Bundled space card definitions.
pub const DEFAULT_SPACE_CARDS: &str = include_str!("../../data/SpaceCards.txt");

const FIELD_SEPARATOR: &str = "; ";

/// Parse definition text into cards, in file order.
///
/// ```
/// use selfish_engine::cards::parse_definitions;
///
/// let cards = parse_definitions("NAME; DESCRIPTION; COUNT\nShield; Blocks.; 2\n").unwrap();
/// assert_eq!(cards.len(), 2);
/// assert_eq!(cards[0].name(), "Shield");
/// ```
pub fn parse_definitions(text: &str) -> Result<Vec<Card>> {
    let mut cards = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.splitn(3, FIELD_SEPARATOR).collect();
        if fields[0] == "NAME" {
            continue;
        }

        let [name, description, count] = fields[..] else {
            return Err(GameError::Definition {
                line: index + 1,
                reason: format!("expected 3 fields separated by '{FIELD_SEPARATOR}'"),
            });
        };

        let count: usize = count.trim().parse().map_err(|_| GameError::Definition {
            line: index + 1,
            reason: format!("invalid count '{}'", count.trim()),
        })?;

        cards.extend(std::iter::repeat_with(|| Card::new(name, description)).take(count));
    }

    Ok(cards)
}

/// Read and parse a definition file.
pub fn load_definitions(path: impl AsRef<Path>) -> Result<Vec<Card>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let cards = parse_definitions(&text)?;
    log::debug!("loaded {} cards from {}", cards.len(), path.display());
    Ok(cards)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::names;

    #[test]
    fn test_parse_expands_counts() {
        let text = "NAME; DESCRIPTION; COUNT\nLaser blast; Push back.; 3\nTether; Swap.; 1\n";
        let cards = parse_definitions(text).unwrap();

        assert_eq!(cards.len(), 4);
        assert_eq!(cards[0].name(), "Laser blast");
        assert_eq!(cards[0].description(), "Push back.");
        assert_eq!(cards[3].name(), "Tether");
    }

    #[test]
    fn test_parse_skips_blank_lines_and_crlf() {
        let text = "NAME; DESCRIPTION; COUNT\r\n\r\nShield; Block.; 2\r\n";
        let cards = parse_definitions(text).unwrap();

        assert_eq!(cards.len(), 2);
        assert_eq!(cards[1].name(), "Shield");
    }

    #[test]
    fn test_parse_zero_count() {
        let cards = parse_definitions("Shield; Block.; 0").unwrap();
        assert!(cards.is_empty());
    }

    #[test]
    fn test_parse_rejects_missing_fields() {
        let err = parse_definitions("NAME; DESCRIPTION; COUNT\nShield; 2\n").unwrap_err();
        assert!(matches!(err, GameError::Definition { line: 2, .. }));
    }

    #[test]
    fn test_parse_rejects_bad_count() {
        let err = parse_definitions("Shield; Block.; many").unwrap_err();
        match err {
            GameError::Definition { line, reason } => {
                assert_eq!(line, 1);
                assert!(reason.contains("many"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_bundled_definitions() {
        let actions = parse_definitions(DEFAULT_ACTION_CARDS).unwrap();
        let space = parse_definitions(DEFAULT_SPACE_CARDS).unwrap();

        assert_eq!(actions.len(), 38);
        assert_eq!(space.len(), 42);
        assert!(actions.iter().all(|c| names::ACTION_CARDS.contains(&c.name())));
        assert!(space.iter().any(|c| c.name() == names::GRAVITATIONAL_ANOMALY));
        assert!(space.iter().any(|c| c.name() == names::SOLAR_FLARE));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_definitions("/nonexistent/ActionCards.txt").unwrap_err();
        assert!(matches!(err, GameError::Io(_)));
    }
}
