use std::fmt::{Formatter, Result as FmtResult};

use crate::value::Value;

use super::Matcher;

/// Create a matcher that accepts [`Value::Null`] only.
pub fn null() -> Null {
    Null(true)
}

/// Create a matcher that accepts everything except [`Value::Null`].
pub fn not_null() -> Null {
    Null(false)
}

/// Checks whether a value is null or not.
#[must_use]
#[derive(Debug, Clone, Copy)]
pub struct Null(bool);

impl Matcher<Value> for Null {
    fn matches(&self, value: &Value) -> bool {
        value.is_null() == self.0
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        if self.0 {
            write!(f, "null")
        } else {
            write!(f, "not null")
        }
    }
}
