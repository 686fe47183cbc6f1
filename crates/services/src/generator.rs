//! Produces a batch of exercises from a session configuration.
//!
//! All randomness flows through the `rand::Rng` the generator is built
//! over, so tests substitute a seeded `StdRng` for deterministic draws.

use rand::Rng;
use rand::rngs::ThreadRng;

use quiz_core::model::{
    ColumnOperation, Exercise, ExerciseError, Fraction, OperationMode, QuizSettings, Task,
};

/// Column answers are entered digit by digit into three slots, so every
/// column task must keep its result within three digits.
const COLUMN_RESULT_MAX: i64 = 999;

/// Simplify tasks scale the reduced base fraction by a factor in this range.
const SIMPLIFY_SCALE_MIN: i64 = 2;
const SIMPLIFY_SCALE_MAX: i64 = 4;

/// Exercise batch generator over a substitutable number source.
pub struct ExerciseGenerator<R: Rng> {
    rng: R,
}

impl ExerciseGenerator<ThreadRng> {
    #[must_use]
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for ExerciseGenerator<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> ExerciseGenerator<R> {
    /// Build a generator over a caller-supplied number source.
    #[must_use]
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Produce exactly `total_exercises` independent exercises.
    ///
    /// Draws are uniform over the configured operand range; there is no
    /// inter-exercise uniqueness guarantee.
    ///
    /// # Errors
    ///
    /// Returns `ExerciseError` if a drawn task fails validation. Every
    /// generation rule below is constructed to keep tasks valid, so this
    /// is propagation only.
    pub fn generate(&mut self, settings: &QuizSettings) -> Result<Vec<Exercise>, ExerciseError> {
        (0..settings.total_exercises() as usize)
            .map(|index| {
                let task = self.draw_task(settings);
                Exercise::new(index, task)
            })
            .collect()
    }

    fn draw_task(&mut self, settings: &QuizSettings) -> Task {
        match settings.operation() {
            OperationMode::Multiplication => self.multiplication(settings),
            OperationMode::Division => self.division(settings),
            OperationMode::Mixed => {
                if self.rng.random_bool(0.5) {
                    self.multiplication(settings)
                } else {
                    self.division(settings)
                }
            }
            OperationMode::ColumnArithmetic => self.column(settings),
            OperationMode::FractionSimplify => self.fraction_simplify(settings),
            OperationMode::FractionAddSubtract => Task::AddSubtractFractions {
                left: self.draw_fraction(settings),
                right: self.draw_fraction(settings),
                is_addition: self.rng.random_bool(0.5),
            },
            OperationMode::FractionMultiply => Task::MultiplyFractions {
                left: self.draw_fraction(settings),
                right: self.draw_fraction(settings),
            },
        }
    }

    fn draw(&mut self, min: i64, max: i64) -> i64 {
        self.rng.random_range(min..=max.max(min))
    }

    fn multiplication(&mut self, settings: &QuizSettings) -> Task {
        Task::Multiply {
            left: self.draw(settings.min_operand(), settings.max_operand()),
            right: self.draw(settings.min_operand(), settings.max_operand()),
        }
    }

    /// Division is generated from two factors so the quotient is always a
    /// whole number: dividend = factor × divisor, answer = factor.
    fn division(&mut self, settings: &QuizSettings) -> Task {
        let factor = self.draw(settings.min_operand(), settings.max_operand());
        let divisor = self.draw(settings.min_operand().max(1), settings.max_operand().max(1));
        Task::Divide {
            dividend: factor * divisor,
            divisor,
        }
    }

    fn column(&mut self, settings: &QuizSettings) -> Task {
        let enabled = &settings.column().operations;
        let operation = if enabled.is_empty() {
            ColumnOperation::Addition
        } else {
            enabled[self.rng.random_range(0..enabled.len())]
        };

        let min = settings.min_operand().min(COLUMN_RESULT_MAX);
        let max = settings.max_operand().min(COLUMN_RESULT_MAX);

        match operation {
            ColumnOperation::Addition => {
                if settings.column().carrying_allowed {
                    let left = self.draw(min, max);
                    // The second operand is capped so the sum stays within
                    // the digit slots.
                    let sum_room = COLUMN_RESULT_MAX - left;
                    Task::ColumnAdd {
                        left,
                        right: self.draw(min.min(sum_room), max.min(sum_room)),
                    }
                } else {
                    let (left, right) = self.no_carry_pair(max);
                    Task::ColumnAdd { left, right }
                }
            }
            ColumnOperation::Subtraction => {
                if settings.column().carrying_allowed {
                    let a = self.draw(min, max);
                    let b = self.draw(min, max);
                    Task::ColumnSubtract {
                        left: a.max(b),
                        right: a.min(b),
                    }
                } else {
                    let (left, right) = self.no_borrow_pair(max);
                    Task::ColumnSubtract { left, right }
                }
            }
            ColumnOperation::Multiplication => {
                let left = self.draw(min, max);
                let product_room = if left == 0 {
                    COLUMN_RESULT_MAX
                } else {
                    COLUMN_RESULT_MAX / left
                };
                Task::ColumnMultiply {
                    left,
                    right: self.draw(min.min(product_room), max.min(product_room)),
                }
            }
            ColumnOperation::Division => {
                let divisor = self.draw(min.max(1), max.max(1));
                let quotient_room = COLUMN_RESULT_MAX / divisor;
                let quotient = self.draw(
                    min.max(1).min(quotient_room),
                    max.max(1).min(quotient_room),
                );
                Task::ColumnDivide {
                    dividend: divisor * quotient,
                    divisor,
                }
            }
        }
    }

    /// Operand pair built digit by digit so no column sum exceeds 9.
    ///
    /// The pair spans the digit width of `max` (up to three digits), with a
    /// non-zero leading digit on the left operand.
    fn no_carry_pair(&mut self, max: i64) -> (i64, i64) {
        let mut left = 0_i64;
        let mut right = 0_i64;
        for position in 0..digit_width(max) {
            let leading = position == digit_width(max) - 1;
            let a = if leading {
                self.draw(1, 9)
            } else {
                self.draw(0, 9)
            };
            let b = self.draw(0, 9 - a);
            let scale = 10_i64.pow(position);
            left += a * scale;
            right += b * scale;
        }
        (left, right)
    }

    /// Operand pair built digit by digit so no column needs borrowing.
    ///
    /// Each digit of the subtrahend is at most the matching digit of the
    /// minuend, which also guarantees a non-negative result.
    fn no_borrow_pair(&mut self, max: i64) -> (i64, i64) {
        let mut left = 0_i64;
        let mut right = 0_i64;
        for position in 0..digit_width(max) {
            let leading = position == digit_width(max) - 1;
            let a = if leading {
                self.draw(1, 9)
            } else {
                self.draw(0, 9)
            };
            let b = self.draw(0, a);
            let scale = 10_i64.pow(position);
            left += a * scale;
            right += b * scale;
        }
        (left, right)
    }

    /// The presented fraction is the reduced base pair scaled up by 2–4, so
    /// the expected answer is the reduced numerator.
    fn fraction_simplify(&mut self, settings: &QuizSettings) -> Task {
        let base = self.draw_fraction(settings).simplified();
        let scale = self.draw(SIMPLIFY_SCALE_MIN, SIMPLIFY_SCALE_MAX);
        Task::SimplifyFraction {
            presented: Fraction::new(base.numerator() * scale, base.denominator() * scale),
        }
    }

    /// Fraction operands keep both components at least 1 so denominators
    /// can never be zero.
    fn draw_fraction(&mut self, settings: &QuizSettings) -> Fraction {
        let min = settings.min_operand().max(1);
        let max = settings.max_operand().max(1);
        Fraction::new(self.draw(min, max), self.draw(min, max))
    }
}

fn digit_width(max: i64) -> u32 {
    if max >= 100 {
        3
    } else if max >= 10 {
        2
    } else {
        1
    }
}
