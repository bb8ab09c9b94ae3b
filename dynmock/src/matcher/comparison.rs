use std::cmp::Ordering;
use std::fmt::{Formatter, Result as FmtResult};

use crate::value::{ToValue, Value};

use super::Matcher;

/// Create a [`Comparison`] matcher that accepts values whose ordering
/// relative to `value` lies within `min..=max`.
pub fn comparison<T: ToValue>(value: T, min: Ordering, max: Ordering) -> Comparison {
    Comparison {
        value: value.to_value(),
        min: min.min(max),
        max: max.max(min),
    }
}

/// Accepts values less than `value`.
pub fn lt<T: ToValue>(value: T) -> Comparison {
    comparison(value, Ordering::Less, Ordering::Less)
}

/// Accepts values less than or equal to `value`.
pub fn le<T: ToValue>(value: T) -> Comparison {
    comparison(value, Ordering::Less, Ordering::Equal)
}

/// Accepts values greater than `value`.
pub fn gt<T: ToValue>(value: T) -> Comparison {
    comparison(value, Ordering::Greater, Ordering::Greater)
}

/// Accepts values greater than or equal to `value`.
pub fn ge<T: ToValue>(value: T) -> Comparison {
    comparison(value, Ordering::Equal, Ordering::Greater)
}

/// Compares values against a fixed value.
///
/// Values that can not be compared (like a string and a number) are never
/// matched.
#[must_use]
#[derive(Debug, Clone)]
pub struct Comparison {
    value: Value,
    min: Ordering,
    max: Ordering,
}

impl Matcher<Value> for Comparison {
    fn matches(&self, value: &Value) -> bool {
        value
            .partial_cmp(&self.value)
            .is_some_and(|o| self.min <= o && o <= self.max)
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "? ")?;

        for (ordering, op) in [
            (Ordering::Less, "<"),
            (Ordering::Equal, "="),
            (Ordering::Greater, ">"),
        ] {
            if self.min <= ordering && ordering <= self.max {
                write!(f, "{op}")?;
            }
        }

        write!(f, " {}", self.value)
    }
}
