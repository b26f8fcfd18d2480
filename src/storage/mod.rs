//! Session persistence
//!
//! Storage is an injected capability: the game never touches the filesystem
//! itself, it is handed a [`SessionStore`]. Saves are best-effort; a missing,
//! stale or corrupt save simply means "no progress today".

mod json;
mod memory;

pub use json::{JsonFileStore, default_data_dir};
pub use memory::MemoryStore;

use chrono::NaiveDate;
use thiserror::Error;

use crate::daily::GeneratorKind;
use crate::game::{GameSession, Statistics};

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Could not determine a data directory; pass --data-dir")]
    NoDataDir,
}

/// Load/save capability for the day's session and lifetime statistics
pub trait SessionStore {
    /// The saved session for the puzzle on `date` under `generator`, if one
    /// exists and is usable
    ///
    /// A save for another date or another generator counts as absent.
    ///
    /// # Errors
    /// Returns an error only for failures other than a missing or unusable save.
    fn load(
        &self,
        date: NaiveDate,
        generator: GeneratorKind,
    ) -> Result<Option<GameSession>, StorageError>;

    /// Persist `session`, replacing any previous save
    ///
    /// # Errors
    /// Returns an error if the session cannot be written.
    fn save(&mut self, session: &GameSession) -> Result<(), StorageError>;

    /// Saved statistics, or defaults if none exist
    ///
    /// # Errors
    /// Returns an error only for failures other than a missing or unusable file.
    fn load_stats(&self) -> Result<Statistics, StorageError>;

    /// Persist statistics
    ///
    /// # Errors
    /// Returns an error if the statistics cannot be written.
    fn save_stats(&mut self, stats: &Statistics) -> Result<(), StorageError>;
}

/// Load the session for `date` under `generator` or start a fresh one
///
/// # Errors
/// Propagates storage failures from [`SessionStore::load`].
pub fn load_or_new<S: SessionStore + ?Sized>(
    store: &S,
    date: NaiveDate,
    generator: GeneratorKind,
) -> Result<GameSession, StorageError> {
    Ok(store
        .load(date, generator)?
        .unwrap_or_else(|| GameSession::new(date, generator)))
}

/// Save `session` and, once it is over, fold it into the statistics
///
/// Returns the statistics after recording.
///
/// # Errors
/// Returns an error if either write fails.
pub fn persist<S: SessionStore + ?Sized>(
    store: &mut S,
    session: &GameSession,
) -> Result<Statistics, StorageError> {
    store.save(session)?;

    let mut stats = store.load_stats()?;
    if stats.record(session) {
        log::info!(
            "recorded {} in statistics ({} played, {} won)",
            session.date(),
            stats.played,
            stats.won
        );
        store.save_stats(&stats)?;
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Code, Month};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    #[test]
    fn load_or_new_starts_fresh() {
        let store = MemoryStore::default();
        let session = load_or_new(&store, date(), GeneratorKind::Legacy).unwrap();
        assert_eq!(session, GameSession::new(date(), GeneratorKind::Legacy));
    }

    #[test]
    fn load_or_new_keeps_generators_apart() {
        let secret = Code::new(1, Month::May, 2, 1990).unwrap();
        let mut store = MemoryStore::default();
        let mut legacy = GameSession::new(date(), GeneratorKind::Legacy);
        legacy.submit(&secret, secret).unwrap();
        store.save(&legacy).unwrap();

        let other = load_or_new(&store, date(), GeneratorKind::Independent).unwrap();
        assert_eq!(other, GameSession::new(date(), GeneratorKind::Independent));
        assert!(!other.is_over());

        let same = load_or_new(&store, date(), GeneratorKind::Legacy).unwrap();
        assert_eq!(same, legacy);
    }

    #[test]
    fn persist_records_finished_games_once() {
        let secret = Code::new(1, Month::May, 2, 1990).unwrap();
        let mut store = MemoryStore::default();
        let mut session = GameSession::new(date(), GeneratorKind::Legacy);

        session
            .submit(&secret, Code::new(2, Month::May, 2, 1990).unwrap())
            .unwrap();
        let stats = persist(&mut store, &session).unwrap();
        assert_eq!(stats.played, 0);

        session.submit(&secret, secret).unwrap();
        let stats = persist(&mut store, &session).unwrap();
        assert_eq!(stats.played, 1);
        assert_eq!(stats.guess_distribution[1], 1);

        let again = persist(&mut store, &session).unwrap();
        assert_eq!(again.played, 1);
        assert_eq!(store.load(date(), GeneratorKind::Legacy).unwrap(), Some(session));
    }
}
