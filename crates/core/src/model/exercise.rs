use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::fraction::Fraction;

//
// ─── OPERATION TAGS ────────────────────────────────────────────────────────────
//

/// Operation kind tag for an exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    Multiplication,
    Division,
    ColumnAddition,
    ColumnSubtraction,
    ColumnMultiplication,
    ColumnDivision,
    FractionSimplify,
    FractionAddSubtract,
    FractionMultiply,
}

//
// ─── TASKS ─────────────────────────────────────────────────────────────────────
//

/// Operands for one exercise, varying by operation kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Task {
    Multiply {
        left: i64,
        right: i64,
    },
    Divide {
        dividend: i64,
        divisor: i64,
    },
    ColumnAdd {
        left: i64,
        right: i64,
    },
    ColumnSubtract {
        left: i64,
        right: i64,
    },
    ColumnMultiply {
        left: i64,
        right: i64,
    },
    ColumnDivide {
        dividend: i64,
        divisor: i64,
    },
    /// Presents the scaled-up fraction; the answer is the reduced numerator
    /// over [`Task::target_denominator`].
    SimplifyFraction {
        presented: Fraction,
    },
    AddSubtractFractions {
        left: Fraction,
        right: Fraction,
        is_addition: bool,
    },
    MultiplyFractions {
        left: Fraction,
        right: Fraction,
    },
}

impl Task {
    #[must_use]
    pub fn operation(&self) -> Operation {
        match self {
            Task::Multiply { .. } => Operation::Multiplication,
            Task::Divide { .. } => Operation::Division,
            Task::ColumnAdd { .. } => Operation::ColumnAddition,
            Task::ColumnSubtract { .. } => Operation::ColumnSubtraction,
            Task::ColumnMultiply { .. } => Operation::ColumnMultiplication,
            Task::ColumnDivide { .. } => Operation::ColumnDivision,
            Task::SimplifyFraction { .. } => Operation::FractionSimplify,
            Task::AddSubtractFractions { .. } => Operation::FractionAddSubtract,
            Task::MultiplyFractions { .. } => Operation::FractionMultiply,
        }
    }

    /// Operator symbol shown between the operands.
    #[must_use]
    pub fn symbol(&self) -> &'static str {
        match self {
            Task::Multiply { .. } | Task::ColumnMultiply { .. } | Task::MultiplyFractions { .. } => {
                "×"
            }
            Task::Divide { .. } | Task::ColumnDivide { .. } => "÷",
            Task::ColumnAdd { .. } => "+",
            Task::ColumnSubtract { .. } => "−",
            Task::SimplifyFraction { .. } => "=",
            Task::AddSubtractFractions { is_addition, .. } => {
                if *is_addition { "+" } else { "−" }
            }
        }
    }

    /// True for the column-arithmetic kinds answered digit by digit.
    #[must_use]
    pub fn is_column(&self) -> bool {
        matches!(
            self,
            Task::ColumnAdd { .. }
                | Task::ColumnSubtract { .. }
                | Task::ColumnMultiply { .. }
                | Task::ColumnDivide { .. }
        )
    }

    /// True for kinds whose answer is a fraction entered as `a/b`.
    #[must_use]
    pub fn takes_fraction_answer(&self) -> bool {
        matches!(
            self,
            Task::AddSubtractFractions { .. } | Task::MultiplyFractions { .. }
        )
    }

    /// The already-reduced denominator shown next to a simplify task.
    ///
    /// Returns `None` for every other kind.
    #[must_use]
    pub fn target_denominator(&self) -> Option<i64> {
        match self {
            Task::SimplifyFraction { presented } => Some(presented.simplified().denominator()),
            _ => None,
        }
    }
}

//
// ─── ANSWERS ───────────────────────────────────────────────────────────────────
//

/// Expected answer for an exercise, always in simplified form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Answer {
    Integer(i64),
    Fraction(Fraction),
}

/// What the user has entered for an exercise.
///
/// `Raw` preserves fraction input that did not match the `a/b` shape; it is
/// counted as answered but never as correct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserAnswer {
    Integer(i64),
    Fraction(Fraction),
    Raw(String),
}

//
// ─── DIGIT SLOTS ───────────────────────────────────────────────────────────────
//

/// A single digit position of a column-arithmetic answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DigitSlot {
    Hundreds,
    Tens,
    Units,
}

/// Per-position partial answer for a column-arithmetic exercise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigitSlots {
    hundreds: Option<u8>,
    tens: Option<u8>,
    units: Option<u8>,
}

impl DigitSlots {
    #[must_use]
    pub fn get(&self, slot: DigitSlot) -> Option<u8> {
        match slot {
            DigitSlot::Hundreds => self.hundreds,
            DigitSlot::Tens => self.tens,
            DigitSlot::Units => self.units,
        }
    }

    pub fn set(&mut self, slot: DigitSlot, digit: Option<u8>) {
        match slot {
            DigitSlot::Hundreds => self.hundreds = digit,
            DigitSlot::Tens => self.tens = digit,
            DigitSlot::Units => self.units = digit,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// True when no digit position has been filled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hundreds.is_none() && self.tens.is_none() && self.units.is_none()
    }

    /// Recombine the slots into an integer, treating missing digits as 0.
    #[must_use]
    pub fn combined(&self) -> i64 {
        i64::from(self.hundreds.unwrap_or(0)) * 100
            + i64::from(self.tens.unwrap_or(0)) * 10
            + i64::from(self.units.unwrap_or(0))
    }
}

//
// ─── EXERCISE ──────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ExerciseError {
    #[error("divisor cannot be zero")]
    ZeroDivisor,

    #[error("{dividend} is not divisible by {divisor}")]
    InexactDivision { dividend: i64, divisor: i64 },

    #[error("fraction denominator cannot be zero")]
    ZeroDenominator,
}

/// One practice item: a task, its expected answer, and the answer state.
///
/// Created in a batch at session start; answer state is mutated through the
/// evaluator on each input event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    index: usize,
    task: Task,
    answer: Answer,
    user_answer: Option<UserAnswer>,
    correct: Option<bool>,
    digits: DigitSlots,
}

impl Exercise {
    /// Build an exercise, deriving the expected answer from the task.
    ///
    /// # Errors
    ///
    /// Returns `ExerciseError` for a zero divisor, a quotient that is not a
    /// whole number, or a zero fraction denominator.
    pub fn new(index: usize, task: Task) -> Result<Self, ExerciseError> {
        let answer = expected_answer(&task)?;
        Ok(Self {
            index,
            task,
            answer,
            user_answer: None,
            correct: None,
            digits: DigitSlots::default(),
        })
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn task(&self) -> &Task {
        &self.task
    }

    #[must_use]
    pub fn answer(&self) -> &Answer {
        &self.answer
    }

    #[must_use]
    pub fn user_answer(&self) -> Option<&UserAnswer> {
        self.user_answer.as_ref()
    }

    /// `None` until a non-empty answer is recorded; then a pure function of
    /// (user answer, expected answer, operation kind).
    #[must_use]
    pub fn correct(&self) -> Option<bool> {
        self.correct
    }

    /// True once any non-empty answer has been entered.
    #[must_use]
    pub fn is_answered(&self) -> bool {
        self.user_answer.is_some()
    }

    #[must_use]
    pub fn digits(&self) -> &DigitSlots {
        &self.digits
    }

    pub(crate) fn digits_mut(&mut self) -> &mut DigitSlots {
        &mut self.digits
    }

    pub(crate) fn set_answer_state(
        &mut self,
        user_answer: Option<UserAnswer>,
        correct: Option<bool>,
    ) {
        self.user_answer = user_answer;
        self.correct = correct;
    }
}

fn expected_answer(task: &Task) -> Result<Answer, ExerciseError> {
    match *task {
        Task::Multiply { left, right } | Task::ColumnMultiply { left, right } => {
            Ok(Answer::Integer(left * right))
        }
        Task::ColumnAdd { left, right } => Ok(Answer::Integer(left + right)),
        Task::ColumnSubtract { left, right } => Ok(Answer::Integer(left - right)),
        Task::Divide { dividend, divisor } | Task::ColumnDivide { dividend, divisor } => {
            if divisor == 0 {
                return Err(ExerciseError::ZeroDivisor);
            }
            if dividend % divisor != 0 {
                return Err(ExerciseError::InexactDivision { dividend, divisor });
            }
            Ok(Answer::Integer(dividend / divisor))
        }
        Task::SimplifyFraction { presented } => {
            if presented.denominator() == 0 {
                return Err(ExerciseError::ZeroDenominator);
            }
            Ok(Answer::Integer(presented.simplified().numerator()))
        }
        Task::AddSubtractFractions {
            left,
            right,
            is_addition,
        } => {
            if left.denominator() == 0 || right.denominator() == 0 {
                return Err(ExerciseError::ZeroDenominator);
            }
            let result = if is_addition {
                left.add(right)
            } else {
                left.sub(right)
            };
            Ok(Answer::Fraction(result))
        }
        Task::MultiplyFractions { left, right } => {
            if left.denominator() == 0 || right.denominator() == 0 {
                return Err(ExerciseError::ZeroDenominator);
            }
            Ok(Answer::Fraction(left.mul(right)))
        }
    }
}
