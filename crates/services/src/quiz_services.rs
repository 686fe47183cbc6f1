//! Aggregate wiring the quiz services to a storage backend.

use rand::Rng;

use quiz_core::Clock;
use quiz_core::model::QuizSettingsDraft;
use storage::repository::Storage;

use crate::error::QuizServicesError;
use crate::generator::ExerciseGenerator;
use crate::highscore_service::HighscoreService;
use crate::session::{QuizOutcome, QuizSession};
use crate::settings_service::SettingsService;

/// Entry point for driving quizzes: owns the settings and highscore
/// services and hands out sessions.
///
/// Only one session is meant to be live at a time; starting a new one and
/// dropping the old session is how an in-flight quiz is cancelled.
#[derive(Clone)]
pub struct QuizServices {
    settings: SettingsService,
    highscores: HighscoreService,
    clock: Clock,
}

impl QuizServices {
    #[must_use]
    pub fn new(storage: Storage, clock: Clock) -> Self {
        Self {
            settings: SettingsService::new(storage.settings),
            highscores: HighscoreService::new(storage.highscores, clock),
            clock,
        }
    }

    /// Services over volatile in-memory storage, mainly for tests.
    #[must_use]
    pub fn in_memory(clock: Clock) -> Self {
        Self::new(Storage::in_memory(), clock)
    }

    /// Services over a `SQLite` database, migrated and ready.
    ///
    /// # Errors
    ///
    /// Returns the `SQLite` error when connecting or migrating fails.
    pub async fn new_sqlite(database_url: &str, clock: Clock) -> Result<Self, QuizServicesError> {
        let storage = Storage::sqlite(database_url).await?;
        Ok(Self::new(storage, clock))
    }

    #[must_use]
    pub fn settings(&self) -> &SettingsService {
        &self.settings
    }

    #[must_use]
    pub fn highscores(&self) -> &HighscoreService {
        &self.highscores
    }

    /// Persist the submitted settings, generate a batch of exercises and
    /// start the countdown.
    ///
    /// # Errors
    ///
    /// Returns the settings error for an invalid draft, the exercise error
    /// when a drawn task is inconsistent, or the session error when no
    /// exercises were produced.
    pub async fn start_session<R: Rng>(
        &self,
        draft: QuizSettingsDraft,
        generator: &mut ExerciseGenerator<R>,
    ) -> Result<QuizSession, QuizServicesError> {
        let settings = self.settings.save(draft).await?;
        let exercises = generator.generate(&settings)?;
        let session = QuizSession::new(settings, exercises, self.clock.now())?;
        Ok(session)
    }

    /// Finish a session, offer the outcome to the highscore table, and
    /// report whether it set a new record.
    ///
    /// # Errors
    ///
    /// Returns the session error for an already-finished session and the
    /// highscore error when the table cannot be updated.
    pub async fn finish_session(
        &self,
        session: &mut QuizSession,
    ) -> Result<(QuizOutcome, bool), QuizServicesError> {
        let outcome = session.finish(self.clock.now())?;
        let is_new_record = self
            .highscores
            .record_outcome(session.settings(), &outcome)
            .await?;
        Ok((outcome, is_new_record))
    }
}
