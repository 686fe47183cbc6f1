//! Settings persistence with default fallback.

use std::sync::Arc;

use quiz_core::model::{QuizSettings, QuizSettingsDraft};
use storage::repository::SettingsRepository;

use crate::error::SettingsServiceError;

/// Loads and saves quiz settings through a repository.
#[derive(Clone)]
pub struct SettingsService {
    repository: Arc<dyn SettingsRepository>,
}

impl SettingsService {
    #[must_use]
    pub fn new(repository: Arc<dyn SettingsRepository>) -> Self {
        Self { repository }
    }

    /// Current settings, or the defaults when nothing is stored yet or the
    /// read fails. A corrupt or missing blob never blocks starting a quiz.
    pub async fn load(&self) -> QuizSettings {
        match self.repository.get_settings().await {
            Ok(Some(settings)) => settings,
            Ok(None) | Err(_) => QuizSettings::default(),
        }
    }

    /// Validate a draft and persist the result.
    ///
    /// # Errors
    ///
    /// Returns the validation error for an invalid draft, or the storage
    /// error when the write fails.
    pub async fn save(&self, draft: QuizSettingsDraft) -> Result<QuizSettings, SettingsServiceError> {
        let settings = draft.validate()?;
        self.repository.save_settings(&settings).await?;
        Ok(settings)
    }

    /// Switch the interface language, keeping every other setting.
    ///
    /// # Errors
    ///
    /// Same conditions as [`SettingsService::save`].
    pub async fn change_language(
        &self,
        language: &str,
    ) -> Result<QuizSettings, SettingsServiceError> {
        let mut draft = self.load().await.to_draft();
        draft.language = Some(language.to_owned());
        self.save(draft).await
    }
}
