//! Display formatting for finished sessions and exercise rows.

use quiz_core::model::{Answer, Exercise, Task, UserAnswer, format_clock};

use crate::session::QuizOutcome;
use crate::translations::TranslationCatalog;

/// Formats the left-hand side of an exercise, e.g. `7 × 8 =`.
#[must_use]
pub fn task_prompt(task: &Task) -> String {
    let symbol = task.symbol();
    match *task {
        Task::Multiply { left, right }
        | Task::ColumnAdd { left, right }
        | Task::ColumnSubtract { left, right }
        | Task::ColumnMultiply { left, right } => format!("{left} {symbol} {right} ="),
        Task::Divide { dividend, divisor } | Task::ColumnDivide { dividend, divisor } => {
            format!("{dividend} {symbol} {divisor} =")
        }
        Task::SimplifyFraction { presented } => format!("{presented} ="),
        Task::AddSubtractFractions { left, right, .. } | Task::MultiplyFractions { left, right } => {
            format!("{left} {symbol} {right} =")
        }
    }
}

/// The expected answer as it appears on the results screen.
#[must_use]
pub fn answer_text(exercise: &Exercise) -> String {
    match exercise.answer() {
        Answer::Integer(value) => value.to_string(),
        Answer::Fraction(fraction) => fraction.to_string(),
    }
}

/// The `Your answer: ...` line, with the localized `noAnswer` placeholder
/// for an unanswered exercise.
#[must_use]
pub fn user_answer_line(
    exercise: &Exercise,
    catalog: &TranslationCatalog,
    language: &str,
) -> String {
    let given = match exercise.user_answer() {
        Some(UserAnswer::Integer(value)) => value.to_string(),
        Some(UserAnswer::Fraction(fraction)) => fraction.to_string(),
        Some(UserAnswer::Raw(raw)) => raw.clone(),
        None => catalog.lookup(language, "noAnswer").to_owned(),
    };
    format!("{} {given}", catalog.lookup(language, "yourAnswer"))
}

/// Read-only presentation of a [`QuizOutcome`].
#[derive(Debug, Clone, Copy)]
pub struct OutcomeView<'a> {
    outcome: &'a QuizOutcome,
}

impl<'a> OutcomeView<'a> {
    #[must_use]
    pub fn new(outcome: &'a QuizOutcome) -> Self {
        Self { outcome }
    }

    /// `score/total`, e.g. `17/20`.
    #[must_use]
    pub fn score_line(&self) -> String {
        format!("{}/{}", self.outcome.score, self.outcome.total)
    }

    /// Percentage with the `%` sign, e.g. `85%`.
    #[must_use]
    pub fn percentage_line(&self) -> String {
        format!("{}%", self.outcome.percentage)
    }

    /// Elapsed time as `M:SS`.
    #[must_use]
    pub fn time_line(&self) -> String {
        format_clock(self.outcome.elapsed_seconds)
    }

    /// Results worth sharing: at least half correct, or a fresh record.
    #[must_use]
    pub fn is_share_worthy(&self, new_highscore: bool) -> bool {
        self.outcome.percentage >= 50 || new_highscore
    }

    /// Fill the catalog's `shareMessage` template. `{score}` is the
    /// percentage, `{correct}` the raw score.
    #[must_use]
    pub fn share_message(&self, catalog: &TranslationCatalog, language: &str) -> String {
        catalog
            .lookup(language, "shareMessage")
            .replacen("{score}", &self.outcome.percentage.to_string(), 1)
            .replacen("{correct}", &self.outcome.score.to_string(), 1)
            .replacen("{total}", &self.outcome.total.to_string(), 1)
            .replacen("{time}", &self.time_line(), 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::Fraction;
    use quiz_core::time::fixed_now;

    fn outcome() -> QuizOutcome {
        QuizOutcome {
            score: 17,
            total: 20,
            percentage: 85,
            elapsed_seconds: 125,
            started_at: fixed_now(),
            finished_at: fixed_now() + chrono::Duration::seconds(125),
        }
    }

    #[test]
    fn summary_lines_are_formatted() {
        let outcome = outcome();
        let view = OutcomeView::new(&outcome);
        assert_eq!(view.score_line(), "17/20");
        assert_eq!(view.percentage_line(), "85%");
        assert_eq!(view.time_line(), "2:05");
    }

    #[test]
    fn share_message_substitutes_all_placeholders() {
        let outcome = outcome();
        let view = OutcomeView::new(&outcome);
        let message = view.share_message(&TranslationCatalog::fallback(), "en");
        assert_eq!(
            message,
            "I scored 85% (17/20) in 2:05 practicing arithmetic!"
        );
    }

    #[test]
    fn low_scores_are_only_share_worthy_on_a_new_record() {
        let mut outcome = outcome();
        outcome.percentage = 40;
        let view = OutcomeView::new(&outcome);
        assert!(!view.is_share_worthy(false));
        assert!(view.is_share_worthy(true));
    }

    #[test]
    fn prompts_cover_integer_and_fraction_tasks() {
        assert_eq!(task_prompt(&Task::Multiply { left: 7, right: 8 }), "7 × 8 =");
        assert_eq!(
            task_prompt(&Task::Divide {
                dividend: 42,
                divisor: 6
            }),
            "42 ÷ 6 ="
        );
        assert_eq!(
            task_prompt(&Task::AddSubtractFractions {
                left: Fraction::new(1, 2),
                right: Fraction::new(1, 3),
                is_addition: false,
            }),
            "1/2 − 1/3 ="
        );
        assert_eq!(
            task_prompt(&Task::SimplifyFraction {
                presented: Fraction::new(4, 8)
            }),
            "4/8 ="
        );
    }

    #[test]
    fn unanswered_rows_use_the_no_answer_placeholder() {
        let exercise = Exercise::new(0, Task::Multiply { left: 2, right: 3 }).unwrap();
        let line = user_answer_line(&exercise, &TranslationCatalog::fallback(), "en");
        assert_eq!(line, "Your answer: No answer");
    }
}
