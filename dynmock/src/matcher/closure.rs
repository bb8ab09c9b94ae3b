use std::any::type_name;
use std::borrow::Cow;
use std::fmt::{Formatter, Result as FmtResult};
use std::marker::PhantomData;

use crate::value::{FromValue, Value};

use super::Matcher;

/* Closure */

/// Create a [`Closure`] matcher from a predicate.
pub fn closure<F>(f: F) -> Closure<F> {
    Closure {
        f,
        description: Cow::Borrowed("closure"),
    }
}

/// Matcher that calls a predicate.
#[must_use]
#[derive(Debug, Clone)]
pub struct Closure<F> {
    f: F,
    description: Cow<'static, str>,
}

impl<F> Closure<F> {
    /// Set the description of the matcher.
    pub fn described<D: Into<Cow<'static, str>>>(mut self, description: D) -> Self {
        self.description = description.into();

        self
    }
}

impl<T, F> Matcher<T> for Closure<F>
where
    F: Fn(&T) -> bool,
{
    fn matches(&self, value: &T) -> bool {
        (self.f)(value)
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.description)
    }
}

/* Typed */

/// Create a [`Typed`] matcher from a predicate over `T`.
pub fn typed<T, F>(f: F) -> Typed<T, F>
where
    T: FromValue,
    F: Fn(&T) -> bool,
{
    Typed {
        f,
        _marker: PhantomData,
    }
}

/// Converts the value into `T` and calls a predicate with it. Values that can
/// not be converted are not matched.
#[must_use]
pub struct Typed<T, F> {
    f: F,
    _marker: PhantomData<fn(&T)>,
}

impl<T, F> Matcher<Value> for Typed<T, F>
where
    T: FromValue,
    F: Fn(&T) -> bool,
{
    fn matches(&self, value: &Value) -> bool {
        T::from_value(value.clone()).is_ok_and(|x| (self.f)(&x))
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "<{}> matching closure", type_name::<T>())
    }
}
