use std::borrow::Cow;
use std::fmt::{Formatter, Result as FmtResult};

use super::Matcher;

/// Create a [`Constant`] matcher that accepts every value.
pub fn any() -> Constant {
    constant(true, "anything")
}

/// Create a [`Constant`] matcher that rejects every value.
pub fn nothing() -> Constant {
    constant(false, "nothing")
}

/// Create a [`Constant`] matcher that always returns `result` and is
/// described by `description`.
pub fn constant<D>(result: bool, description: D) -> Constant
where
    D: Into<Cow<'static, str>>,
{
    Constant {
        result,
        description: description.into(),
    }
}

/// Matcher that ignores the value and always returns the same result.
#[must_use]
#[derive(Debug, Clone)]
pub struct Constant {
    result: bool,
    description: Cow<'static, str>,
}

impl<T> Matcher<T> for Constant {
    fn matches(&self, _value: &T) -> bool {
        self.result
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.description)
    }
}
