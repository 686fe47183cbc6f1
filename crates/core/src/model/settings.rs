use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::highscore::DifficultyKey;

//
// ─── MODES ─────────────────────────────────────────────────────────────────────
//

/// Top-level practice mode selected in the settings screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OperationMode {
    #[default]
    Multiplication,
    Division,
    /// Per-exercise 50/50 choice between multiplication and division.
    Mixed,
    /// Dutch "cijferen": digit-column addition, subtraction,
    /// multiplication and division.
    ColumnArithmetic,
    FractionSimplify,
    FractionAddSubtract,
    FractionMultiply,
}

/// How the exercise list is laid out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayMode {
    #[default]
    Grid,
    List,
}

/// Column-arithmetic sub-operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColumnOperation {
    Addition,
    Subtraction,
    Multiplication,
    Division,
}

/// Column-arithmetic options: which sub-operations may be drawn, and
/// whether carrying/borrowing is allowed to occur.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSettings {
    pub operations: Vec<ColumnOperation>,
    pub carrying_allowed: bool,
}

impl Default for ColumnSettings {
    fn default() -> Self {
        Self {
            operations: vec![
                ColumnOperation::Addition,
                ColumnOperation::Subtraction,
                ColumnOperation::Multiplication,
                ColumnOperation::Division,
            ],
            carrying_allowed: true,
        }
    }
}

//
// ─── SETTINGS ──────────────────────────────────────────────────────────────────
//

pub const DEFAULT_MIN_OPERAND: i64 = 1;
pub const DEFAULT_MAX_OPERAND: i64 = 10;
pub const DEFAULT_TOTAL_EXERCISES: u32 = 20;
pub const DEFAULT_TIME_LIMIT_MINUTES: u32 = 5;
pub const DEFAULT_LANGUAGE: &str = "en";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizSettingsError {
    #[error("exercise count must be > 0")]
    InvalidExerciseCount,

    #[error("time limit must be > 0 minutes")]
    InvalidTimeLimit,

    #[error("language code cannot be empty")]
    EmptyLanguage,
}

/// Validated session configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSettings {
    min_operand: i64,
    max_operand: i64,
    total_exercises: u32,
    time_limit_minutes: u32,
    operation: OperationMode,
    display: DisplayMode,
    show_keypad: bool,
    language: String,
    column: ColumnSettings,
}

/// Unvalidated settings as edited by the UI or read from storage.
///
/// Every field is explicitly optional; absent fields take the documented
/// defaults rather than relying on falsy fallbacks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuizSettingsDraft {
    pub min_operand: Option<i64>,
    pub max_operand: Option<i64>,
    pub total_exercises: Option<u32>,
    pub time_limit_minutes: Option<u32>,
    pub operation: Option<OperationMode>,
    pub display: Option<DisplayMode>,
    pub show_keypad: Option<bool>,
    pub language: Option<String>,
    pub column: Option<ColumnSettings>,
}

impl QuizSettingsDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply defaults for absent fields and validate.
    ///
    /// An inverted operand range is repaired by clamping the maximum up to
    /// the minimum.
    ///
    /// # Errors
    ///
    /// Returns `QuizSettingsError` for a zero exercise count, a zero time
    /// limit, or a blank language code.
    pub fn validate(self) -> Result<QuizSettings, QuizSettingsError> {
        let min_operand = self.min_operand.unwrap_or(DEFAULT_MIN_OPERAND);
        let max_operand = self.max_operand.unwrap_or(DEFAULT_MAX_OPERAND).max(min_operand);

        let total_exercises = self.total_exercises.unwrap_or(DEFAULT_TOTAL_EXERCISES);
        if total_exercises == 0 {
            return Err(QuizSettingsError::InvalidExerciseCount);
        }

        let time_limit_minutes = self.time_limit_minutes.unwrap_or(DEFAULT_TIME_LIMIT_MINUTES);
        if time_limit_minutes == 0 {
            return Err(QuizSettingsError::InvalidTimeLimit);
        }

        let language = match self.language {
            Some(code) => {
                let code = code.trim().to_string();
                if code.is_empty() {
                    return Err(QuizSettingsError::EmptyLanguage);
                }
                code
            }
            None => DEFAULT_LANGUAGE.to_string(),
        };

        Ok(QuizSettings {
            min_operand,
            max_operand,
            total_exercises,
            time_limit_minutes,
            operation: self.operation.unwrap_or_default(),
            display: self.display.unwrap_or_default(),
            show_keypad: self.show_keypad.unwrap_or(true),
            language,
            column: self.column.unwrap_or_default(),
        })
    }
}

impl QuizSettings {
    #[must_use]
    pub fn min_operand(&self) -> i64 {
        self.min_operand
    }

    #[must_use]
    pub fn max_operand(&self) -> i64 {
        self.max_operand
    }

    #[must_use]
    pub fn total_exercises(&self) -> u32 {
        self.total_exercises
    }

    #[must_use]
    pub fn time_limit_minutes(&self) -> u32 {
        self.time_limit_minutes
    }

    #[must_use]
    pub fn time_limit_seconds(&self) -> u32 {
        self.time_limit_minutes * 60
    }

    #[must_use]
    pub fn operation(&self) -> OperationMode {
        self.operation
    }

    #[must_use]
    pub fn display(&self) -> DisplayMode {
        self.display
    }

    #[must_use]
    pub fn show_keypad(&self) -> bool {
        self.show_keypad
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    #[must_use]
    pub fn column(&self) -> &ColumnSettings {
        &self.column
    }

    /// Highscore bucket for this configuration.
    #[must_use]
    pub fn difficulty_key(&self) -> DifficultyKey {
        DifficultyKey::new(self.min_operand, self.max_operand, self.total_exercises)
    }

    /// Re-open these settings for editing.
    #[must_use]
    pub fn to_draft(&self) -> QuizSettingsDraft {
        QuizSettingsDraft {
            min_operand: Some(self.min_operand),
            max_operand: Some(self.max_operand),
            total_exercises: Some(self.total_exercises),
            time_limit_minutes: Some(self.time_limit_minutes),
            operation: Some(self.operation),
            display: Some(self.display),
            show_keypad: Some(self.show_keypad),
            language: Some(self.language.clone()),
            column: Some(self.column.clone()),
        }
    }
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            min_operand: DEFAULT_MIN_OPERAND,
            max_operand: DEFAULT_MAX_OPERAND,
            total_exercises: DEFAULT_TOTAL_EXERCISES,
            time_limit_minutes: DEFAULT_TIME_LIMIT_MINUTES,
            operation: OperationMode::default(),
            display: DisplayMode::default(),
            show_keypad: true,
            language: DEFAULT_LANGUAGE.to_string(),
            column: ColumnSettings::default(),
        }
    }
}
