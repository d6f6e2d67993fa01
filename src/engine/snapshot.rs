//! Saving and restoring a game in progress.
//!
//! A snapshot captures everything the engine needs to continue a game
//! exactly where it left off, including the RNG stream position, so a
//! restored engine makes the same shuffles and random picks as the original.
//!
//! The binary format is bincode with a leading `u32` format version.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::game::GameEngine;
use super::roster::Roster;
use crate::core::{GameConfig, GameError, GameRng, GameRngState, Result};
use crate::deck::Deck;

/// Current snapshot format version.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Full engine state at one point in time.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Format version; always the first field on the wire.
    pub version: u32,
    pub config: GameConfig,
    pub rng: GameRngState,
    pub started: bool,
    pub next_player_id: u8,
    pub roster: Roster,
    pub action_deck: Deck,
    pub action_discard: Deck,
    pub hazard_deck: Deck,
    pub hazard_discard: Deck,
}

impl GameSnapshot {
    /// Serialize to bytes.
    pub fn encode(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Deserialize from bytes, rejecting other format versions.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let found: u32 = bincode::deserialize(bytes)?;
        if found != SNAPSHOT_VERSION {
            return Err(GameError::SnapshotVersion {
                expected: SNAPSHOT_VERSION,
                found,
            });
        }
        Ok(bincode::deserialize(bytes)?)
    }
}

impl GameEngine {
    /// Capture the full engine state.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            version: SNAPSHOT_VERSION,
            config: self.config.clone(),
            rng: self.rng.state(),
            started: self.started,
            next_player_id: self.next_player_id,
            roster: self.roster.clone(),
            action_deck: self.action_deck.clone(),
            action_discard: self.action_discard.clone(),
            hazard_deck: self.hazard_deck.clone(),
            hazard_discard: self.hazard_discard.clone(),
        }
    }

    /// Rebuild an engine from a snapshot.
    pub fn restore(snapshot: GameSnapshot) -> Result<Self> {
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(GameError::SnapshotVersion {
                expected: SNAPSHOT_VERSION,
                found: snapshot.version,
            });
        }
        Ok(Self {
            config: snapshot.config,
            rng: GameRng::from_state(&snapshot.rng),
            started: snapshot.started,
            roster: snapshot.roster,
            next_player_id: snapshot.next_player_id,
            action_deck: snapshot.action_deck,
            action_discard: snapshot.action_discard,
            hazard_deck: snapshot.hazard_deck,
            hazard_discard: snapshot.hazard_discard,
        })
    }

    /// Write a snapshot to disk.
    pub fn save_state(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.snapshot().encode()?;
        fs::write(path, &bytes)?;
        log::debug!("saved game to {} ({} bytes)", path.display(), bytes.len());
        Ok(())
    }

    /// Read a snapshot from disk and rebuild the engine.
    pub fn load_state(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;
        let engine = Self::restore(GameSnapshot::decode(&bytes)?)?;
        log::debug!("loaded game from {}", path.display());
        Ok(engine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;

    fn mid_game() -> GameEngine {
        let mut engine = GameEngine::with_default_cards(GameConfig::new(77)).unwrap();
        for name in ["Ada", "Bo", "Cy"] {
            engine.add_player(name).unwrap();
        }
        engine.start_game().unwrap();
        engine.start_turn().unwrap();
        engine.travel(PlayerId::new(0)).unwrap();
        engine.end_turn().unwrap();
        engine
    }

    /// Play a fixed sequence and record what happened.
    fn play_on(engine: &mut GameEngine) -> Vec<String> {
        let mut log = Vec::new();
        for _ in 0..3 {
            engine.start_turn().unwrap();
            let id = engine.current_player().unwrap().id();
            let victim = PlayerId::new((id.0 + 1) % 3);
            log.push(engine.steal(victim).unwrap().to_string());
            log.push(engine.player(id).unwrap().hand_summary());
            engine.end_turn().unwrap();
        }
        log.push(engine.action_deck().size().to_string());
        log
    }

    #[test]
    fn test_restore_continues_identically() {
        let mut original = mid_game();
        let mut restored = GameEngine::restore(original.snapshot()).unwrap();

        assert_eq!(play_on(&mut original), play_on(&mut restored));
    }

    #[test]
    fn test_encode_decode_preserves_state() {
        let engine = mid_game();
        let bytes = engine.snapshot().encode().unwrap();
        let decoded = GameSnapshot::decode(&bytes).unwrap();
        let restored = GameEngine::restore(decoded).unwrap();

        let hands = |e: &GameEngine| -> Vec<String> {
            e.get_all_players().iter().map(|a| a.hand_summary()).collect()
        };
        let distance = |e: &GameEngine| e.player(PlayerId::new(0)).unwrap().distance_from_ship();

        assert_eq!(hands(&engine), hands(&restored));
        assert_eq!(distance(&engine), distance(&restored));
        assert_eq!(restored.config(), engine.config());
        assert_eq!(restored.phase(), engine.phase());
    }

    #[test]
    fn test_decode_rejects_other_versions() {
        let mut snapshot = mid_game().snapshot();
        snapshot.version = SNAPSHOT_VERSION + 1;
        let bytes = snapshot.encode().unwrap();

        assert!(matches!(
            GameSnapshot::decode(&bytes),
            Err(GameError::SnapshotVersion { expected: 1, found: 2 })
        ));
    }

    #[test]
    fn test_decode_garbage() {
        assert!(matches!(GameSnapshot::decode(&[1, 0]), Err(GameError::Snapshot(_))));
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir()
            .join(format!("selfish-snapshot-{}.bin", std::process::id()));
        let mut engine = mid_game();
        engine.save_state(&path).unwrap();

        let mut loaded = GameEngine::load_state(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(play_on(&mut engine), play_on(&mut loaded));
        assert!(matches!(
            GameEngine::load_state(&path),
            Err(GameError::Io(_))
        ));
    }
}
