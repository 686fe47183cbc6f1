use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Greatest common divisor of the absolute values, via Euclid.
///
/// `gcd(0, 0)` is defined as 0; callers simplifying by the result must
/// guard against dividing by it.
#[must_use]
pub fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        let remainder = a % b;
        a = b;
        b = remainder;
    }
    a
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FractionParseError {
    #[error("expected `numerator/denominator`")]
    MissingSeparator,

    #[error("fraction component is not an integer")]
    InvalidComponent,
}

/// An exact rational number with integer numerator and denominator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fraction {
    numerator: i64,
    denominator: i64,
}

impl Fraction {
    #[must_use]
    pub fn new(numerator: i64, denominator: i64) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    #[must_use]
    pub fn numerator(&self) -> i64 {
        self.numerator
    }

    #[must_use]
    pub fn denominator(&self) -> i64 {
        self.denominator
    }

    /// Lowest-terms form of this fraction.
    ///
    /// A negative denominator moves its sign to the numerator, so the
    /// simplified form of any non-degenerate fraction has a positive
    /// denominator. A zero denominator is returned unchanged.
    #[must_use]
    pub fn simplified(self) -> Self {
        let divisor = gcd(self.numerator, self.denominator);
        if divisor == 0 || self.denominator == 0 {
            return self;
        }
        let mut numerator = self.numerator / divisor;
        let mut denominator = self.denominator / divisor;
        if denominator < 0 {
            numerator = -numerator;
            denominator = -denominator;
        }
        Self {
            numerator,
            denominator,
        }
    }

    /// Sum by cross-multiplication, in lowest terms.
    #[must_use]
    pub fn add(self, other: Self) -> Self {
        Self {
            numerator: self.numerator * other.denominator + other.numerator * self.denominator,
            denominator: self.denominator * other.denominator,
        }
        .simplified()
    }

    /// Difference by cross-multiplication, in lowest terms.
    #[must_use]
    pub fn sub(self, other: Self) -> Self {
        Self {
            numerator: self.numerator * other.denominator - other.numerator * self.denominator,
            denominator: self.denominator * other.denominator,
        }
        .simplified()
    }

    /// Product, in lowest terms.
    #[must_use]
    pub fn mul(self, other: Self) -> Self {
        Self {
            numerator: self.numerator * other.numerator,
            denominator: self.denominator * other.denominator,
        }
        .simplified()
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl FromStr for Fraction {
    type Err = FractionParseError;

    /// Parses exactly the shape `integer "/" integer`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (numerator, denominator) = s
            .split_once('/')
            .ok_or(FractionParseError::MissingSeparator)?;
        let numerator = numerator
            .parse::<i64>()
            .map_err(|_| FractionParseError::InvalidComponent)?;
        let denominator = denominator
            .parse::<i64>()
            .map_err(|_| FractionParseError::InvalidComponent)?;
        Ok(Self {
            numerator,
            denominator,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gcd_handles_zero_and_negatives() {
        assert_eq!(gcd(0, 0), 0);
        assert_eq!(gcd(12, 0), 12);
        assert_eq!(gcd(0, 7), 7);
        assert_eq!(gcd(-12, 18), 6);
        assert_eq!(gcd(35, -14), 7);
    }

    #[test]
    fn simplification_ignores_common_scale() {
        for k in 1..=6 {
            assert_eq!(
                Fraction::new(3 * k, 4 * k).simplified(),
                Fraction::new(3, 4).simplified()
            );
        }
    }

    #[test]
    fn simplified_moves_sign_to_numerator() {
        assert_eq!(Fraction::new(2, -4).simplified(), Fraction::new(-1, 2));
        assert_eq!(Fraction::new(-2, -4).simplified(), Fraction::new(1, 2));
    }

    #[test]
    fn zero_denominator_is_left_alone() {
        assert_eq!(Fraction::new(5, 0).simplified(), Fraction::new(5, 0));
        assert_eq!(Fraction::new(0, 0).simplified(), Fraction::new(0, 0));
    }

    #[test]
    fn arithmetic_returns_lowest_terms() {
        let half = Fraction::new(1, 2);
        assert_eq!(half.add(half), Fraction::new(1, 1));
        assert_eq!(half.sub(Fraction::new(1, 4)), Fraction::new(1, 4));
        assert_eq!(Fraction::new(2, 3).mul(Fraction::new(3, 4)), Fraction::new(1, 2));

        let result = Fraction::new(1, 4).sub(Fraction::new(1, 2));
        assert_eq!(result, Fraction::new(-1, 4));
        assert!(result.denominator() > 0);
    }

    #[test]
    fn parses_exact_fraction_shape_only() {
        assert_eq!("3/4".parse::<Fraction>().unwrap(), Fraction::new(3, 4));
        assert_eq!("-1/2".parse::<Fraction>().unwrap(), Fraction::new(-1, 2));
        assert!(matches!(
            "3".parse::<Fraction>(),
            Err(FractionParseError::MissingSeparator)
        ));
        assert!(matches!(
            "a/4".parse::<Fraction>(),
            Err(FractionParseError::InvalidComponent)
        ));
        assert!(matches!(
            "1 / 2".parse::<Fraction>(),
            Err(FractionParseError::InvalidComponent)
        ));
    }
}
