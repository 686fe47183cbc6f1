use async_trait::async_trait;

use quiz_core::model::HighscoreTable;

use super::{HIGHSCORES_KEY, SqliteRepository};
use crate::repository::{HighscoreRepository, StorageError};

#[async_trait]
impl HighscoreRepository for SqliteRepository {
    async fn get_highscores(&self) -> Result<HighscoreTable, StorageError> {
        let Some(blob) = self.kv_get(HIGHSCORES_KEY).await? else {
            return Ok(HighscoreTable::new());
        };
        serde_json::from_str(&blob).map_err(|err| StorageError::Serialization(err.to_string()))
    }

    async fn save_highscores(&self, table: &HighscoreTable) -> Result<(), StorageError> {
        let blob = serde_json::to_string(table)
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        self.kv_put(HIGHSCORES_KEY, &blob).await
    }
}
