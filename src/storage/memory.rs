//! In-memory store for practice games and tests

use chrono::NaiveDate;

use super::{SessionStore, StorageError};
use crate::daily::GeneratorKind;
use crate::game::{GameSession, Statistics};

/// Keeps the latest session and statistics in memory only
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    session: Option<GameSession>,
    stats: Statistics,
}

impl SessionStore for MemoryStore {
    fn load(
        &self,
        date: NaiveDate,
        generator: GeneratorKind,
    ) -> Result<Option<GameSession>, StorageError> {
        Ok(self.session.clone().filter(|s| s.is_for(date, generator)))
    }

    fn save(&mut self, session: &GameSession) -> Result<(), StorageError> {
        self.session = Some(session.clone());
        Ok(())
    }

    fn load_stats(&self) -> Result<Statistics, StorageError> {
        Ok(self.stats.clone())
    }

    fn save_stats(&mut self, stats: &Statistics) -> Result<(), StorageError> {
        self.stats = stats.clone();
        Ok(())
    }
}
