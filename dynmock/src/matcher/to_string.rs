use std::fmt::{Formatter, Result as FmtResult};

use crate::value::Value;

use super::Matcher;

/// Create a [`ToStringMatcher`] that checks the string representation of a
/// value using `inner`.
pub fn to_string<M>(inner: M) -> ToStringMatcher<M> {
    ToStringMatcher(inner)
}

/// Converts the value into its plain string representation and forwards it
/// to the inner matcher.
#[must_use]
#[derive(Debug, Clone)]
pub struct ToStringMatcher<M>(pub M);

impl<M> Matcher<Value> for ToStringMatcher<M>
where
    M: Matcher<Value>,
{
    fn matches(&self, value: &Value) -> bool {
        self.0.matches(&Value::Str(value.to_plain_string()))
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "string representation ")?;
        self.0.fmt(f)
    }
}
