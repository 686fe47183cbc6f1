mod exercise;
mod fraction;
mod highscore;
mod settings;

pub use exercise::{
    Answer, DigitSlot, DigitSlots, Exercise, ExerciseError, Operation, Task, UserAnswer,
};
pub use fraction::{Fraction, FractionParseError, gcd};
pub use highscore::{DifficultyKey, HighscoreRecord, HighscoreTable, format_clock};
pub use settings::{
    ColumnOperation, ColumnSettings, DisplayMode, OperationMode, QuizSettings, QuizSettingsDraft,
    QuizSettingsError,
};
