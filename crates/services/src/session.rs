use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use quiz_core::evaluator;
use quiz_core::model::{DigitSlot, Exercise, QuizSettings};

use crate::error::SessionError;

//
// ─── PROGRESS ──────────────────────────────────────────────────────────────────
//

/// Aggregated view of session progress, useful for UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionProgress {
    pub total: usize,
    pub answered: usize,
    pub remaining: usize,
    pub is_finished: bool,
}

/// Result of one countdown tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Seconds left on the clock.
    Running(u32),
    /// The countdown reached zero; the caller must finish the session.
    Expired,
}

/// Final result of a finished session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOutcome {
    pub score: u32,
    pub total: u32,
    /// `round(score / total × 100)`.
    pub percentage: u32,
    /// Whole seconds of wall-clock time from start to finish.
    pub elapsed_seconds: u64,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory run through one batch of generated exercises.
///
/// Input events are applied through the evaluator; the countdown advances
/// only through `tick`, so dropping the session cancels its timer along
/// with everything else. `started_at` should come from the services layer
/// clock to keep time deterministic.
#[derive(Debug, Clone)]
pub struct QuizSession {
    settings: QuizSettings,
    exercises: Vec<Exercise>,
    started_at: DateTime<Utc>,
    seconds_remaining: u32,
    finished_at: Option<DateTime<Utc>>,
}

impl QuizSession {
    /// Create a session over a freshly generated exercise batch.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if no exercises are provided.
    pub fn new(
        settings: QuizSettings,
        exercises: Vec<Exercise>,
        started_at: DateTime<Utc>,
    ) -> Result<Self, SessionError> {
        if exercises.is_empty() {
            return Err(SessionError::Empty);
        }
        let seconds_remaining = settings.time_limit_seconds();
        Ok(Self {
            settings,
            exercises,
            started_at,
            seconds_remaining,
            finished_at: None,
        })
    }

    #[must_use]
    pub fn settings(&self) -> &QuizSettings {
        &self.settings
    }

    #[must_use]
    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn finished_at(&self) -> Option<DateTime<Utc>> {
        self.finished_at
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished_at.is_some()
    }

    #[must_use]
    pub fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }

    /// Number of exercises with a recorded answer.
    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.exercises.iter().filter(|e| e.is_answered()).count()
    }

    /// True once every exercise has an answer. The presentation layer
    /// finishes the session shortly after this turns true, giving the last
    /// visual update a moment to render.
    #[must_use]
    pub fn is_fully_answered(&self) -> bool {
        self.answered_count() == self.exercises.len()
    }

    /// Number of exercises currently marked correct.
    #[must_use]
    pub fn score(&self) -> u32 {
        let correct = self
            .exercises
            .iter()
            .filter(|e| e.correct() == Some(true))
            .count();
        u32::try_from(correct).unwrap_or(u32::MAX)
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        let total = self.exercises.len();
        let answered = self.answered_count();
        SessionProgress {
            total,
            answered,
            remaining: total.saturating_sub(answered),
            is_finished: self.is_finished(),
        }
    }

    /// Apply a raw text input to the exercise at `index`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Finished` after the session has finished and
    /// `SessionError::UnknownExercise` for an out-of-range index.
    pub fn answer(&mut self, index: usize, raw: &str) -> Result<&Exercise, SessionError> {
        let exercise = self.exercise_mut(index)?;
        evaluator::record_answer(exercise, raw);
        Ok(&self.exercises[index])
    }

    /// Apply a single digit slot of a column-arithmetic answer.
    ///
    /// # Errors
    ///
    /// Same conditions as [`QuizSession::answer`].
    pub fn answer_digit(
        &mut self,
        index: usize,
        slot: DigitSlot,
        digit: Option<u8>,
    ) -> Result<&Exercise, SessionError> {
        let exercise = self.exercise_mut(index)?;
        evaluator::record_digit(exercise, slot, digit);
        Ok(&self.exercises[index])
    }

    /// Advance the countdown by one second.
    ///
    /// Returns `Tick::Expired` once the clock reaches zero; the caller must
    /// then finish the session.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Finished` if a stale timer fires after the
    /// session has already finished.
    pub fn tick(&mut self) -> Result<Tick, SessionError> {
        if self.is_finished() {
            return Err(SessionError::Finished);
        }
        self.seconds_remaining = self.seconds_remaining.saturating_sub(1);
        if self.seconds_remaining == 0 {
            Ok(Tick::Expired)
        } else {
            Ok(Tick::Running(self.seconds_remaining))
        }
    }

    /// Freeze the session and compute the final outcome.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Finished` if called twice.
    pub fn finish(&mut self, now: DateTime<Utc>) -> Result<QuizOutcome, SessionError> {
        if self.is_finished() {
            return Err(SessionError::Finished);
        }
        self.finished_at = Some(now);

        let score = self.score();
        let total = u32::try_from(self.exercises.len()).unwrap_or(u32::MAX);
        let percentage = (f64::from(score) / f64::from(total) * 100.0).round() as u32;
        let elapsed_seconds =
            u64::try_from((now - self.started_at).num_seconds().max(0)).unwrap_or(0);

        Ok(QuizOutcome {
            score,
            total,
            percentage,
            elapsed_seconds,
            started_at: self.started_at,
            finished_at: now,
        })
    }

    fn exercise_mut(&mut self, index: usize) -> Result<&mut Exercise, SessionError> {
        if self.is_finished() {
            return Err(SessionError::Finished);
        }
        self.exercises
            .get_mut(index)
            .ok_or(SessionError::UnknownExercise(index))
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
