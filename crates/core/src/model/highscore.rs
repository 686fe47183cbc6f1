use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Highscore bucket identifier derived from (min operand, max operand,
/// exercise count), in the persisted `min-max-count` string form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DifficultyKey(String);

impl DifficultyKey {
    #[must_use]
    pub fn new(min_operand: i64, max_operand: i64, total_exercises: u32) -> Self {
        Self(format!("{min_operand}-{max_operand}-{total_exercises}"))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DifficultyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Formats whole seconds as `M:SS`.
#[must_use]
pub fn format_clock(total_seconds: u64) -> String {
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{minutes}:{seconds:02}")
}

/// Best result seen for one difficulty key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighscoreRecord {
    pub percentage: u32,
    /// Raw score string, e.g. `17/20`.
    pub score: String,
    /// Elapsed time as `M:SS`.
    pub time: String,
    pub date: NaiveDate,
}

impl HighscoreRecord {
    #[must_use]
    pub fn new(percentage: u32, score: impl Into<String>, time_seconds: u64, date: NaiveDate) -> Self {
        Self {
            percentage,
            score: score.into(),
            time: format_clock(time_seconds),
            date,
        }
    }
}

/// All best results, keyed by difficulty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HighscoreTable {
    records: HashMap<DifficultyKey, HighscoreRecord>,
}

impl HighscoreTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, key: &DifficultyKey) -> Option<&HighscoreRecord> {
        self.records.get(key)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Store `candidate` only if its percentage strictly exceeds the
    /// existing record for `key` (or none exists yet).
    ///
    /// Returns whether a new record was set. The stored percentage for any
    /// key is therefore non-decreasing across calls.
    pub fn record(&mut self, key: DifficultyKey, candidate: HighscoreRecord) -> bool {
        match self.records.get(&key) {
            Some(existing) if candidate.percentage <= existing.percentage => false,
            _ => {
                self.records.insert(key, candidate);
                true
            }
        }
    }
}
