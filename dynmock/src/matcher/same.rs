use std::fmt::{Formatter, Result as FmtResult};

use crate::value::{ToValue, Value};

use super::Matcher;

/// Create a [`Same`] matcher for the passed `value`.
pub fn same<T: ToValue>(value: T) -> Same {
    Same(value.to_value())
}

/// Matches the very same object, mock or handler. Values without an identity
/// are never matched.
#[must_use]
#[derive(Debug, Clone)]
pub struct Same(pub Value);

impl Matcher<Value> for Same {
    fn matches(&self, value: &Value) -> bool {
        self.0.is_same(value)
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "same as {}", self.0)
    }
}
