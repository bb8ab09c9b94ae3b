use std::fmt::{Formatter, Result as FmtResult};

use crate::value::{ToValue, Value};

use super::{not, Matcher, Not};

/// Create an [`Equal`] matcher for the passed `value`.
pub fn eq<T: ToValue>(value: T) -> Equal {
    Equal(value.to_value())
}

/// Create a matcher that accepts everything that is not equal to `value`.
pub fn ne<T: ToValue>(value: T) -> Not<Equal> {
    not(eq(value))
}

/// Matches values that are equal to the expected one.
///
/// Lists are compared element wise (including nested lists), maps ignore the
/// order of their entries and numbers are compared by their numeric value.
#[must_use]
#[derive(Debug, Clone)]
pub struct Equal(pub Value);

impl Matcher<Value> for Equal {
    fn matches(&self, value: &Value) -> bool {
        self.0 == *value
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "equal to {}", self.0)
    }
}
