use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use thiserror::Error;

use quiz_core::model::{HighscoreTable, QuizSettings};

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Repository contract for the persisted settings blob.
///
/// Settings are stored as one flat record; a missing blob means "no prior
/// data" and is reported as `Ok(None)`, never as an error.
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Fetch the persisted settings, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the blob exists but cannot be read.
    async fn get_settings(&self) -> Result<Option<QuizSettings>, StorageError>;

    /// Persist the settings blob, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the blob cannot be stored.
    async fn save_settings(&self, settings: &QuizSettings) -> Result<(), StorageError>;
}

/// Repository contract for the persisted highscore table.
#[async_trait]
pub trait HighscoreRepository: Send + Sync {
    /// Fetch all highscore records; an absent blob yields an empty table.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the blob exists but cannot be read.
    async fn get_highscores(&self) -> Result<HighscoreTable, StorageError>;

    /// Persist the full highscore table, replacing any previous blob.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the blob cannot be stored.
    async fn save_highscores(&self, table: &HighscoreTable) -> Result<(), StorageError>;
}

/// In-memory repository implementation for tests and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    settings: Arc<Mutex<Option<QuizSettings>>>,
    highscores: Arc<Mutex<HighscoreTable>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SettingsRepository for InMemoryRepository {
    async fn get_settings(&self) -> Result<Option<QuizSettings>, StorageError> {
        let guard = self
            .settings
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.clone())
    }

    async fn save_settings(&self, settings: &QuizSettings) -> Result<(), StorageError> {
        let mut guard = self
            .settings
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        *guard = Some(settings.clone());
        Ok(())
    }
}

#[async_trait]
impl HighscoreRepository for InMemoryRepository {
    async fn get_highscores(&self) -> Result<HighscoreTable, StorageError> {
        let guard = self
            .highscores
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.clone())
    }

    async fn save_highscores(&self, table: &HighscoreTable) -> Result<(), StorageError> {
        let mut guard = self
            .highscores
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        *guard = table.clone();
        Ok(())
    }
}

/// Aggregates the settings and highscore repositories behind trait objects
/// for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub settings: Arc<dyn SettingsRepository>,
    pub highscores: Arc<dyn HighscoreRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let repo = InMemoryRepository::new();
        let settings: Arc<dyn SettingsRepository> = Arc::new(repo.clone());
        let highscores: Arc<dyn HighscoreRepository> = Arc::new(repo);
        Self {
            settings,
            highscores,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use quiz_core::model::{DifficultyKey, HighscoreRecord, QuizSettingsDraft};

    #[tokio::test]
    async fn settings_round_trip_in_memory() {
        let repo = InMemoryRepository::new();
        assert!(repo.get_settings().await.unwrap().is_none());

        let settings = QuizSettingsDraft {
            min_operand: Some(2),
            max_operand: Some(12),
            ..QuizSettingsDraft::new()
        }
        .validate()
        .unwrap();
        repo.save_settings(&settings).await.unwrap();

        let loaded = repo.get_settings().await.unwrap().unwrap();
        assert_eq!(loaded, settings);
    }

    #[tokio::test]
    async fn highscores_round_trip_in_memory() {
        let repo = InMemoryRepository::new();
        assert!(repo.get_highscores().await.unwrap().is_empty());

        let mut table = HighscoreTable::new();
        table.record(
            DifficultyKey::new(1, 10, 20),
            HighscoreRecord::new(
                80,
                "16/20",
                95,
                NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            ),
        );
        repo.save_highscores(&table).await.unwrap();

        let loaded = repo.get_highscores().await.unwrap();
        assert_eq!(loaded, table);
    }
}
