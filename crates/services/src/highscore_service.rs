//! Best-result tracking per difficulty.

use std::sync::Arc;

use quiz_core::Clock;
use quiz_core::model::{HighscoreRecord, HighscoreTable, QuizSettings};
use storage::repository::HighscoreRepository;

use crate::error::HighscoreServiceError;
use crate::session::QuizOutcome;

/// Applies the strictly-better rule to outcomes and persists the table.
#[derive(Clone)]
pub struct HighscoreService {
    repository: Arc<dyn HighscoreRepository>,
    clock: Clock,
}

impl HighscoreService {
    #[must_use]
    pub fn new(repository: Arc<dyn HighscoreRepository>, clock: Clock) -> Self {
        Self { repository, clock }
    }

    /// The full table, or an empty one when the read fails. Highscores are
    /// display data; a broken blob should not take the app down.
    pub async fn load(&self) -> HighscoreTable {
        self.repository
            .get_highscores()
            .await
            .unwrap_or_else(|_| HighscoreTable::new())
    }

    /// Best stored result for the difficulty the given settings select.
    pub async fn best_for(&self, settings: &QuizSettings) -> Option<HighscoreRecord> {
        self.load().await.get(&settings.difficulty_key()).cloned()
    }

    /// Offer a finished outcome to the table. Persists and returns `true`
    /// only when the outcome strictly beats the stored record for this
    /// difficulty.
    ///
    /// # Errors
    ///
    /// Returns the storage error when the table cannot be read or written;
    /// the read is not defaulted here because writing over an unreadable
    /// table would discard records for other difficulties.
    pub async fn record_outcome(
        &self,
        settings: &QuizSettings,
        outcome: &QuizOutcome,
    ) -> Result<bool, HighscoreServiceError> {
        let mut table = self.repository.get_highscores().await?;
        let candidate = HighscoreRecord::new(
            outcome.percentage,
            format!("{}/{}", outcome.score, outcome.total),
            outcome.elapsed_seconds,
            self.clock.now().date_naive(),
        );
        let is_new_record = table.record(settings.difficulty_key(), candidate);
        if is_new_record {
            self.repository.save_highscores(&table).await?;
        }
        Ok(is_new_record)
    }
}
