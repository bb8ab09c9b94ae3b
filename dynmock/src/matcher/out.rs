use std::fmt::{Formatter, Result as FmtResult};

use crate::value::Value;

use super::Matcher;

/// Create an [`Out`] matcher.
pub fn out() -> Out {
    Out
}

/// Matches the placeholder of an output-only argument.
#[must_use]
#[derive(Debug, Clone, Copy)]
pub struct Out;

impl Matcher<Value> for Out {
    fn matches(&self, value: &Value) -> bool {
        matches!(value, Value::Out)
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "out")
    }
}
