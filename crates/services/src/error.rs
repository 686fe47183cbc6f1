//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::{ExerciseError, QuizSettingsError};
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by `SettingsService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SettingsServiceError {
    #[error(transparent)]
    Settings(#[from] QuizSettingsError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `HighscoreService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HighscoreServiceError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `QuizSession`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no exercises available for session")]
    Empty,
    #[error("session already finished")]
    Finished,
    #[error("exercise index {0} out of bounds")]
    UnknownExercise(usize),
}

/// Errors emitted by `TranslationCatalog::fetch`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TranslationsError {
    #[error("translation fetch failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted while bootstrapping or driving the quiz services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Settings(#[from] SettingsServiceError),
    #[error(transparent)]
    Highscore(#[from] HighscoreServiceError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Exercise(#[from] ExerciseError),
}
