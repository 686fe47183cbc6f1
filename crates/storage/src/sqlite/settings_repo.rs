use async_trait::async_trait;

use quiz_core::model::{QuizSettings, QuizSettingsDraft};

use super::{SETTINGS_KEY, SqliteRepository};
use crate::repository::{SettingsRepository, StorageError};

#[async_trait]
impl SettingsRepository for SqliteRepository {
    async fn get_settings(&self) -> Result<Option<QuizSettings>, StorageError> {
        let Some(blob) = self.kv_get(SETTINGS_KEY).await? else {
            return Ok(None);
        };

        // Fields absent from an older blob fall back to their defaults
        // through the draft.
        let draft: QuizSettingsDraft = serde_json::from_str(&blob)
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        let settings = draft
            .validate()
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        Ok(Some(settings))
    }

    async fn save_settings(&self, settings: &QuizSettings) -> Result<(), StorageError> {
        let blob = serde_json::to_string(&settings.to_draft())
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        self.kv_put(SETTINGS_KEY, &blob).await
    }
}
