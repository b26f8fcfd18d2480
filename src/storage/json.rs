//! JSON file store
//!
//! Keeps a single `state.json` holding the most recent session and a
//! `stats.json` with lifetime statistics. A saved session is only restored
//! for the date it was played and the generator that made its secret.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::{SessionStore, StorageError};
use crate::daily::GeneratorKind;
use crate::game::{GameSession, Statistics};

const STATE_FILE: &str = "state.json";
const STATS_FILE: &str = "stats.json";

/// Platform data directory for curdle, e.g. `~/.local/share/curdle`
#[must_use]
pub fn default_data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("curdle"))
}

/// Store backed by JSON files in one directory
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Store rooted at `dir`; the directory is created on first save
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store in the platform data directory
    ///
    /// # Errors
    /// Returns `StorageError::NoDataDir` if the platform has no data directory.
    pub fn in_default_dir() -> Result<Self, StorageError> {
        default_data_dir().map(Self::new).ok_or(StorageError::NoDataDir)
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn write_json<T: Serialize>(&self, name: &str, value: &T) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(name);
        let mut writer = BufWriter::new(File::create(&path)?);
        serde_json::to_writer_pretty(&mut writer, value)?;
        writer.flush()?;
        log::debug!("wrote {}", path.display());
        Ok(())
    }

    /// Read `name`, treating a missing or unparsable file as absent
    fn read_json<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>, StorageError> {
        let path = self.dir.join(name);
        let file = match File::open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_reader(BufReader::new(file)) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                log::warn!("ignoring unreadable {}: {e}", path.display());
                Ok(None)
            }
        }
    }
}

impl SessionStore for JsonFileStore {
    fn load(
        &self,
        date: NaiveDate,
        generator: GeneratorKind,
    ) -> Result<Option<GameSession>, StorageError> {
        let Some(session) = self.read_json::<GameSession>(STATE_FILE)? else {
            return Ok(None);
        };

        if !session.is_for(date, generator) {
            log::debug!(
                "saved session is for {} ({}), not {date} ({})",
                session.date(),
                session.generator().as_str(),
                generator.as_str()
            );
            return Ok(None);
        }

        if !session.is_consistent() {
            log::warn!("ignoring inconsistent saved session for {date}");
            return Ok(None);
        }

        log::debug!(
            "restored session for {date} with {} guesses",
            session.guesses().len()
        );
        Ok(Some(session))
    }

    fn save(&mut self, session: &GameSession) -> Result<(), StorageError> {
        self.write_json(STATE_FILE, session)
    }

    fn load_stats(&self) -> Result<Statistics, StorageError> {
        Ok(self.read_json(STATS_FILE)?.unwrap_or_default())
    }

    fn save_stats(&mut self, stats: &Statistics) -> Result<(), StorageError> {
        self.write_json(STATS_FILE, stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Code, Month};
    use crate::daily::SecretGenerator;
    use tempfile::TempDir;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    fn played_session() -> GameSession {
        let secret = Code::new(48, Month::June, 14, 1953).unwrap();
        let mut session = GameSession::new(today(), GeneratorKind::Legacy);
        session
            .submit(&secret, Code::new(84, Month::July, 31, 1935).unwrap())
            .unwrap();
        session
    }

    #[test]
    fn json_store_round_trip() {
        let tmp = TempDir::new().unwrap();
        let mut store = JsonFileStore::new(tmp.path().join("nested"));

        assert!(store.load(today(), GeneratorKind::Legacy).unwrap().is_none());

        let session = played_session();
        store.save(&session).unwrap();
        assert_eq!(store.load(today(), GeneratorKind::Legacy).unwrap(), Some(session));
    }

    #[test]
    fn json_store_ignores_other_dates() {
        let tmp = TempDir::new().unwrap();
        let mut store = JsonFileStore::new(tmp.path());

        store.save(&played_session()).unwrap();
        assert!(
            store
                .load(today().succ_opt().unwrap(), GeneratorKind::Legacy)
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn json_store_ignores_other_generators() {
        let tmp = TempDir::new().unwrap();
        let mut store = JsonFileStore::new(tmp.path());

        // A legacy game won today must not be restored as the independent puzzle
        let legacy_secret = GeneratorKind::Legacy.generate(today());
        let mut session = GameSession::new(today(), GeneratorKind::Legacy);
        session.submit(&legacy_secret, legacy_secret).unwrap();
        store.save(&session).unwrap();

        assert!(
            store
                .load(today(), GeneratorKind::Independent)
                .unwrap()
                .is_none()
        );

        let restored = store.load(today(), GeneratorKind::Legacy).unwrap().unwrap();
        assert!(restored.is_won());
        assert_eq!(restored.generator(), GeneratorKind::Legacy);
    }

    #[test]
    fn json_store_rejects_out_of_range_codes() {
        let tmp = TempDir::new().unwrap();
        let mut store = JsonFileStore::new(tmp.path());
        store.save(&played_session()).unwrap();

        let path = tmp.path().join(STATE_FILE);
        let edited = fs::read_to_string(&path)
            .unwrap()
            .replace("\"year\": 1935", "\"year\": 20000");
        assert!(edited.contains("20000"));
        fs::write(&path, edited).unwrap();

        assert!(store.load(today(), GeneratorKind::Legacy).unwrap().is_none());
    }

    #[test]
    fn json_store_treats_corrupt_files_as_missing() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(STATE_FILE), "{ not json").unwrap();
        fs::write(tmp.path().join(STATS_FILE), "[]").unwrap();

        let store = JsonFileStore::new(tmp.path());
        assert!(store.load(today(), GeneratorKind::Legacy).unwrap().is_none());
        assert_eq!(store.load_stats().unwrap(), Statistics::default());
    }

    #[test]
    fn json_store_stats_round_trip() {
        let tmp = TempDir::new().unwrap();
        let mut store = JsonFileStore::new(tmp.path());

        let stats = Statistics {
            played: 3,
            won: 2,
            current_streak: 1,
            max_streak: 2,
            guess_distribution: [0, 1, 1, 0, 0, 0],
            last_played: Some(today()),
            last_won: Some(today()),
        };
        store.save_stats(&stats).unwrap();
        assert_eq!(store.load_stats().unwrap(), stats);
    }
}
