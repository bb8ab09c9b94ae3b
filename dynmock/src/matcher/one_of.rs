use std::fmt::{Formatter, Result as FmtResult};

use crate::value::{ToValue, Value};

use super::Matcher;

/// Create a [`OneOf`] matcher for the passed set of values.
pub fn one_of<I>(values: I) -> OneOf
where
    I: IntoIterator,
    I::Item: ToValue,
{
    OneOf(values.into_iter().map(|x| x.to_value()).collect())
}

/// Matches values that are equal to one element of a fixed set.
#[must_use]
#[derive(Debug, Clone)]
pub struct OneOf(pub Vec<Value>);

impl Matcher<Value> for OneOf {
    fn matches(&self, value: &Value) -> bool {
        self.0.iter().any(|x| x == value)
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "one of {}", Value::List(self.0.clone()))
    }
}
