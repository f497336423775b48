//! Numeric values consumed and produced by the counting, summing and averaging aggregates.

use std::{cmp::Ordering, fmt::Display, str::FromStr};

use num::{rational::Ratio, CheckedAdd, CheckedDiv};
use serde::{Serialize, Serializer};

use crate::error::AggregateError;

/// A number as seen by numeric aggregates.
///
/// Integer and rational arithmetic is exact and checked,
/// as soon as a [`Number::Float`] is involved the computation continues in floating point.
/// Rationals are always kept in reduced form and a rational with denominator one
/// is represented as an [`Number::Integer`].
///
/// Equality and ordering compare magnitudes, so `Integer(2) == Float(2.0)`.
#[derive(Clone, Copy, Debug)]
pub enum Number {
    /// A 64 bit signed integer
    Integer(i64),
    /// An exact fraction, result of dividing integers
    Rational(Ratio<i64>),
    /// A 64 bit floating point number
    Float(f64),
}

impl Number {
    /// Creates the reduced fraction `numer / denom`.
    ///
    /// # Panics
    /// Panics if `denom` is zero.
    pub fn ratio(numer: i64, denom: i64) -> Self {
        Self::from_ratio(Ratio::new(numer, denom))
    }

    fn from_ratio(ratio: Ratio<i64>) -> Self {
        if ratio.is_integer() {
            Self::Integer(ratio.to_integer())
        } else {
            Self::Rational(ratio)
        }
    }

    /// Exact representation, if there is one.
    fn exact(&self) -> Option<Ratio<i64>> {
        match self {
            Self::Integer(value) => Some(Ratio::from_integer(*value)),
            Self::Rational(value) => Some(*value),
            Self::Float(_) => None,
        }
    }

    /// Returns the (possibly approximated) floating point value of this number.
    pub fn to_f64(&self) -> f64 {
        match self {
            Self::Integer(value) => *value as f64,
            Self::Rational(value) => *value.numer() as f64 / *value.denom() as f64,
            Self::Float(value) => *value,
        }
    }

    /// Returns the value as an integer, if it is one.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            _ => None,
        }
    }

    /// Adds two numbers.
    ///
    /// Returns [`AggregateError::Overflow`] if exact arithmetic overflows.
    pub fn checked_add(&self, other: &Number) -> Result<Number, AggregateError> {
        let overflow = || AggregateError::Overflow {
            operation: "addition",
        };

        match (self, other) {
            (Self::Integer(left), Self::Integer(right)) => {
                let sum = i64::checked_add(*left, *right);
                sum.map(Self::Integer).ok_or_else(overflow)
            }
            _ => match (self.exact(), other.exact()) {
                (Some(left), Some(right)) => CheckedAdd::checked_add(&left, &right)
                    .map(Self::from_ratio)
                    .ok_or_else(overflow),
                _ => Ok(Self::Float(self.to_f64() + other.to_f64())),
            },
        }
    }

    /// Divides by the number of values that were summed up.
    ///
    /// Integer input gives an exact (reduced) fraction.
    /// If exact division is impossible the result falls back to floating point.
    /// Returns `None` for a count of zero.
    pub fn divide_by_count(&self, count: usize) -> Option<Number> {
        if count == 0 {
            return None;
        }

        let Ok(divisor) = i64::try_from(count) else {
            return Some(Self::Float(self.to_f64() / count as f64));
        };

        let quotient = match self {
            Self::Integer(value) => Self::from_ratio(Ratio::new(*value, divisor)),
            Self::Rational(value) => value
                .checked_div(&Ratio::from_integer(divisor))
                .map(Self::from_ratio)
                .unwrap_or_else(|| Self::Float(self.to_f64() / divisor as f64)),
            Self::Float(value) => Self::Float(value / divisor as f64),
        };

        Some(quotient)
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.exact(), other.exact()) {
            (Some(left), Some(right)) => left.partial_cmp(&right),
            _ => self.to_f64().partial_cmp(&other.to_f64()),
        }
    }
}

impl Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Rational(value) => write!(f, "{}/{}", value.numer(), value.denom()),
            Self::Float(value) => write!(f, "{value}"),
        }
    }
}

impl FromStr for Number {
    type Err = AggregateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let not_a_number = || AggregateError::NotANumber(s.to_string());

        if let Ok(value) = text.parse::<i64>() {
            return Ok(Self::Integer(value));
        }

        if let Some((numer, denom)) = text.split_once('/') {
            let numer = numer.trim().parse::<i64>().map_err(|_| not_a_number())?;
            let denom = denom.trim().parse::<i64>().map_err(|_| not_a_number())?;
            if denom == 0 {
                return Err(not_a_number());
            }
            return Ok(Self::ratio(numer, denom));
        }

        match text.parse::<f64>() {
            Ok(value) if !value.is_nan() => Ok(Self::Float(value)),
            _ => Err(not_a_number()),
        }
    }
}

impl Serialize for Number {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Integer(value) => serializer.serialize_i64(*value),
            _ => serializer.serialize_f64(self.to_f64()),
        }
    }
}

macro_rules! number_from_integer {
    ($($src:ty),+) => {
        $(
            impl From<$src> for Number {
                fn from(value: $src) -> Self {
                    Self::Integer(i64::from(value))
                }
            }
        )+
    };
}

number_from_integer!(i8, i16, i32, i64, u8, u16, u32);

/// Integers wider than `i64` stay exact if they fit, otherwise they become floats.
macro_rules! number_from_wide_integer {
    ($($src:ty),+) => {
        $(
            impl From<$src> for Number {
                fn from(value: $src) -> Self {
                    match i64::try_from(value) {
                        Ok(value) => Self::Integer(value),
                        Err(_) => Self::Float(value as f64),
                    }
                }
            }
        )+
    };
}

number_from_wide_integer!(u64, usize, i128, u128, isize);

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<Ratio<i64>> for Number {
    fn from(value: Ratio<i64>) -> Self {
        Self::from_ratio(value)
    }
}

#[cfg(test)]
mod test {
    use super::Number;
    use crate::error::AggregateError;
    use test_log::test;

    #[test]
    fn rationals_are_normalized() {
        assert!(matches!(Number::ratio(4, 2), Number::Integer(2)));
        assert!(matches!(Number::ratio(9, 2), Number::Rational(_)));
        assert_eq!(Number::ratio(9, 2), Number::Float(4.5));
        assert_eq!(Number::ratio(-6, -4).to_string(), "3/2");
    }

    #[test]
    fn addition_stays_exact() {
        let half = Number::ratio(1, 2);
        assert_eq!(half.checked_add(&half), Ok(Number::Integer(1)));
        assert_eq!(
            Number::Integer(1).checked_add(&Number::ratio(1, 3)),
            Ok(Number::ratio(4, 3))
        );
        assert_eq!(
            Number::Integer(1).checked_add(&Number::Float(0.5)),
            Ok(Number::Float(1.5))
        );
    }

    #[test]
    fn integer_addition() {
        assert_eq!(
            Number::Integer(2).checked_add(&Number::Integer(3)),
            Ok(Number::Integer(5))
        );
        assert_eq!(
            Number::Integer(i64::MAX).checked_add(&Number::Integer(-1)),
            Ok(Number::Integer(i64::MAX - 1))
        );
    }

    #[test]
    fn addition_overflow() {
        assert_eq!(
            Number::Integer(i64::MAX).checked_add(&Number::Integer(1)),
            Err(AggregateError::Overflow {
                operation: "addition"
            })
        );
    }

    #[test]
    fn division_by_count() {
        assert_eq!(
            Number::Integer(45).divide_by_count(10),
            Some(Number::ratio(9, 2))
        );
        assert_eq!(
            Number::Integer(20).divide_by_count(5),
            Some(Number::Integer(4))
        );
        assert_eq!(
            Number::Float(1.0).divide_by_count(4),
            Some(Number::Float(0.25))
        );
        assert_eq!(Number::Integer(3).divide_by_count(0), None);
    }

    #[test]
    fn ordering_across_variants() {
        assert!(Number::Integer(4) < Number::ratio(9, 2));
        assert!(Number::ratio(9, 2) < Number::Float(4.6));
        assert!(Number::Float(f64::NAN)
            .partial_cmp(&Number::Integer(0))
            .is_none());
    }

    #[test]
    fn parsing() {
        assert_eq!("42".parse::<Number>(), Ok(Number::Integer(42)));
        assert_eq!(" 3/6 ".parse::<Number>(), Ok(Number::ratio(1, 2)));
        assert_eq!("2.5".parse::<Number>(), Ok(Number::Float(2.5)));
        assert_eq!(
            "apple".parse::<Number>(),
            Err(AggregateError::NotANumber("apple".to_string()))
        );
        assert!("1/0".parse::<Number>().is_err());
        assert!("NaN".parse::<Number>().is_err());
    }

    #[test]
    fn wide_integers() {
        assert!(matches!(Number::from(7_usize), Number::Integer(7)));
        assert!(matches!(Number::from(-3_i128), Number::Integer(-3)));
        assert_eq!(Number::from(u64::MAX), Number::Float(u64::MAX as f64));
        assert!(matches!(Number::from(u64::MAX), Number::Float(_)));
    }

    #[test]
    fn serialization() {
        let numbers = [Number::from(3), Number::ratio(9, 2), Number::Float(0.25)];
        let json = serde_json::to_string(&numbers).expect("numbers serialize");
        assert_eq!(json, "[3,4.5,0.25]");
    }
}
