use std::fmt::{Formatter, Result as FmtResult};

use crate::value::Value;

use super::Matcher;

/// Create a [`Field`] matcher that checks the field `name` using `inner`.
pub fn field<S, M>(name: S, inner: M) -> Field<M>
where
    S: Into<String>,
{
    Field {
        name: name.into(),
        inner,
    }
}

/// Reads a named field of a record (or a string key of a map) and forwards it
/// to the inner matcher. Values without that field are not matched.
#[must_use]
#[derive(Debug, Clone)]
pub struct Field<M> {
    name: String,
    inner: M,
}

impl<M> Matcher<Value> for Field<M>
where
    M: Matcher<Value>,
{
    fn matches(&self, value: &Value) -> bool {
        value
            .field(&self.name)
            .is_some_and(|x| self.inner.matches(x))
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "field {} ", self.name)?;
        self.inner.fmt(f)
    }
}
