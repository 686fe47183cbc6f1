//! Maps raw input events onto exercise answer state.
//!
//! All functions are pure over the exercise data: no rendering environment
//! is involved, and malformed keystrokes never mark an answer wrong for
//! integer kinds (the field is simply not updated).

use crate::model::{Answer, DigitSlot, Exercise, Fraction, UserAnswer};

/// Record a raw text input against an exercise.
///
/// - Empty input resets the exercise to unanswered (never to incorrect).
/// - Integer kinds parse the input as an integer; non-numeric input leaves
///   the previous state unchanged.
/// - Column kinds additionally decompose the parsed value into the digit
///   slots, so text entry and per-digit entry stay interchangeable; values
///   outside 0–999 have no slot form and are ignored like non-numeric
///   input.
/// - Fraction-simplify compares against the expected reduced numerator.
/// - Fraction add/subtract/multiply require the exact `a/b` shape; matching
///   input is simplified before comparison, anything else is kept as the
///   raw answer and marked incorrect.
pub fn record_answer(exercise: &mut Exercise, raw: &str) {
    let input = raw.trim();
    if input.is_empty() {
        clear_answer(exercise);
        return;
    }

    if exercise.task().takes_fraction_answer() {
        record_fraction_answer(exercise, input);
    } else if exercise.task().is_column() {
        record_column_answer(exercise, input);
    } else {
        record_integer_answer(exercise, input);
    }
}

/// Record a single digit slot of a column-arithmetic answer.
///
/// Passing `None` clears the slot. Any non-empty slot recombines the digits
/// into an integer (missing digits count as 0) and re-evaluates; clearing
/// the last slot resets the exercise to unanswered. Ignored for
/// non-column kinds and for digits above 9.
pub fn record_digit(exercise: &mut Exercise, slot: DigitSlot, digit: Option<u8>) {
    if !exercise.task().is_column() {
        return;
    }
    if matches!(digit, Some(d) if d > 9) {
        return;
    }

    exercise.digits_mut().set(slot, digit);
    if exercise.digits().is_empty() {
        exercise.set_answer_state(None, None);
        return;
    }

    let value = exercise.digits().combined();
    let correct = matches!(exercise.answer(), Answer::Integer(expected) if *expected == value);
    exercise.set_answer_state(Some(UserAnswer::Integer(value)), Some(correct));
}

/// Reset an exercise to the unanswered state.
pub fn clear_answer(exercise: &mut Exercise) {
    if exercise.task().is_column() {
        exercise.digits_mut().clear();
    }
    exercise.set_answer_state(None, None);
}

fn record_column_answer(exercise: &mut Exercise, input: &str) {
    let Ok(value) = input.parse::<i64>() else {
        return;
    };
    if !(0..=999).contains(&value) {
        // No digit-slot form; keep whatever was there before.
        return;
    }

    let digits = exercise.digits_mut();
    digits.set(
        DigitSlot::Hundreds,
        (value >= 100).then(|| u8::try_from(value / 100).unwrap_or(0)),
    );
    digits.set(
        DigitSlot::Tens,
        (value >= 10).then(|| u8::try_from(value / 10 % 10).unwrap_or(0)),
    );
    digits.set(DigitSlot::Units, Some(u8::try_from(value % 10).unwrap_or(0)));

    let correct = matches!(exercise.answer(), Answer::Integer(expected) if *expected == value);
    exercise.set_answer_state(Some(UserAnswer::Integer(value)), Some(correct));
}

fn record_integer_answer(exercise: &mut Exercise, input: &str) {
    let Ok(value) = input.parse::<i64>() else {
        // Partial keystroke; keep whatever was there before.
        return;
    };
    let correct = matches!(exercise.answer(), Answer::Integer(expected) if *expected == value);
    exercise.set_answer_state(Some(UserAnswer::Integer(value)), Some(correct));
}

fn record_fraction_answer(exercise: &mut Exercise, input: &str) {
    match input.parse::<Fraction>() {
        Ok(entered) => {
            let simplified = entered.simplified();
            let correct =
                matches!(exercise.answer(), Answer::Fraction(expected) if *expected == simplified);
            exercise.set_answer_state(Some(UserAnswer::Fraction(entered)), Some(correct));
        }
        Err(_) => {
            exercise.set_answer_state(Some(UserAnswer::Raw(input.to_string())), Some(false));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Task;

    fn division_exercise() -> Exercise {
        Exercise::new(
            0,
            Task::Divide {
                dividend: 12,
                divisor: 4,
            },
        )
        .unwrap()
    }

    #[test]
    fn integer_answers_are_scored_and_cleared() {
        let mut exercise = division_exercise();

        record_answer(&mut exercise, "3");
        assert_eq!(exercise.user_answer(), Some(&UserAnswer::Integer(3)));
        assert_eq!(exercise.correct(), Some(true));

        record_answer(&mut exercise, "5");
        assert_eq!(exercise.correct(), Some(false));

        record_answer(&mut exercise, "");
        assert_eq!(exercise.user_answer(), None);
        assert_eq!(exercise.correct(), None);
    }

    #[test]
    fn repeating_the_same_answer_is_idempotent() {
        let mut exercise = division_exercise();
        record_answer(&mut exercise, "3");
        record_answer(&mut exercise, "3");
        assert_eq!(exercise.correct(), Some(true));
    }

    #[test]
    fn malformed_integer_input_keeps_prior_state() {
        let mut exercise = division_exercise();
        record_answer(&mut exercise, "3");
        record_answer(&mut exercise, "3x");
        assert_eq!(exercise.user_answer(), Some(&UserAnswer::Integer(3)));
        assert_eq!(exercise.correct(), Some(true));

        let mut fresh = division_exercise();
        record_answer(&mut fresh, "abc");
        assert_eq!(fresh.user_answer(), None);
        assert_eq!(fresh.correct(), None);
    }

    #[test]
    fn fraction_answers_compare_after_simplification() {
        let mut exercise = Exercise::new(
            0,
            Task::AddSubtractFractions {
                left: Fraction::new(1, 2),
                right: Fraction::new(1, 2),
                is_addition: true,
            },
        )
        .unwrap();

        // Expected answer is 1/1; 2/2 simplifies to it.
        record_answer(&mut exercise, "2/2");
        assert_eq!(exercise.correct(), Some(true));

        record_answer(&mut exercise, "1/2");
        assert_eq!(exercise.correct(), Some(false));
    }

    #[test]
    fn non_fraction_shapes_are_kept_raw_and_never_correct() {
        let mut exercise = Exercise::new(
            0,
            Task::MultiplyFractions {
                left: Fraction::new(1, 2),
                right: Fraction::new(2, 1),
            },
        )
        .unwrap();

        record_answer(&mut exercise, "1");
        assert_eq!(
            exercise.user_answer(),
            Some(&UserAnswer::Raw("1".to_string()))
        );
        assert_eq!(exercise.correct(), Some(false));

        // A zero denominator parses but can never match.
        record_answer(&mut exercise, "1/0");
        assert_eq!(exercise.correct(), Some(false));
    }

    #[test]
    fn simplify_tasks_take_the_reduced_numerator() {
        let mut exercise = Exercise::new(
            0,
            Task::SimplifyFraction {
                presented: Fraction::new(6, 8),
            },
        )
        .unwrap();

        record_answer(&mut exercise, "3");
        assert_eq!(exercise.correct(), Some(true));
        record_answer(&mut exercise, "6");
        assert_eq!(exercise.correct(), Some(false));
    }

    #[test]
    fn digits_recombine_and_reset() {
        let mut exercise = Exercise::new(
            0,
            Task::ColumnAdd {
                left: 120,
                right: 27,
            },
        )
        .unwrap();

        record_digit(&mut exercise, DigitSlot::Units, Some(7));
        assert_eq!(exercise.user_answer(), Some(&UserAnswer::Integer(7)));
        assert_eq!(exercise.correct(), Some(false));

        record_digit(&mut exercise, DigitSlot::Hundreds, Some(1));
        record_digit(&mut exercise, DigitSlot::Tens, Some(4));
        assert_eq!(exercise.user_answer(), Some(&UserAnswer::Integer(147)));
        assert_eq!(exercise.correct(), Some(true));

        record_digit(&mut exercise, DigitSlot::Units, None);
        record_digit(&mut exercise, DigitSlot::Tens, None);
        record_digit(&mut exercise, DigitSlot::Hundreds, None);
        assert_eq!(exercise.user_answer(), None);
        assert_eq!(exercise.correct(), None);
    }

    #[test]
    fn column_text_input_fills_the_digit_slots() {
        let mut exercise = Exercise::new(
            0,
            Task::ColumnAdd {
                left: 120,
                right: 27,
            },
        )
        .unwrap();

        record_answer(&mut exercise, "147");
        assert_eq!(exercise.correct(), Some(true));
        assert_eq!(exercise.digits().get(DigitSlot::Hundreds), Some(1));
        assert_eq!(exercise.digits().get(DigitSlot::Tens), Some(4));
        assert_eq!(exercise.digits().get(DigitSlot::Units), Some(7));

        // A later digit event edits the text answer instead of restarting
        // from empty slots.
        record_digit(&mut exercise, DigitSlot::Units, Some(8));
        assert_eq!(exercise.user_answer(), Some(&UserAnswer::Integer(148)));
        assert_eq!(exercise.correct(), Some(false));

        record_digit(&mut exercise, DigitSlot::Units, Some(7));
        assert_eq!(exercise.correct(), Some(true));
    }

    #[test]
    fn column_text_input_skips_leading_zero_slots() {
        let mut exercise = Exercise::new(0, Task::ColumnAdd { left: 20, right: 27 }).unwrap();
        record_answer(&mut exercise, "47");
        assert_eq!(exercise.digits().get(DigitSlot::Hundreds), None);
        assert_eq!(exercise.digits().get(DigitSlot::Tens), Some(4));
        assert_eq!(exercise.correct(), Some(true));
    }

    #[test]
    fn column_text_input_without_a_slot_form_keeps_prior_state() {
        let mut exercise = Exercise::new(
            0,
            Task::ColumnAdd {
                left: 120,
                right: 27,
            },
        )
        .unwrap();
        record_answer(&mut exercise, "147");

        record_answer(&mut exercise, "1600");
        assert_eq!(exercise.user_answer(), Some(&UserAnswer::Integer(147)));
        assert_eq!(exercise.correct(), Some(true));

        record_answer(&mut exercise, "-5");
        assert_eq!(exercise.user_answer(), Some(&UserAnswer::Integer(147)));
    }

    #[test]
    fn digit_events_ignore_non_column_kinds() {
        let mut exercise = division_exercise();
        record_digit(&mut exercise, DigitSlot::Units, Some(3));
        assert_eq!(exercise.user_answer(), None);
    }
}
