use std::any::type_name;
use std::fmt::{Formatter, Result as FmtResult};
use std::marker::PhantomData;

use crate::value::{FromValue, Value};

use super::Matcher;

/// Create a [`TypeOf`] matcher that accepts values convertible into `T`.
pub fn type_of<T: FromValue>() -> TypeOf<T> {
    TypeOf(PhantomData)
}

/// Matches values that can be converted into `T`.
#[must_use]
#[derive(Debug)]
pub struct TypeOf<T>(PhantomData<fn() -> T>);

impl<T> Matcher<Value> for TypeOf<T>
where
    T: FromValue,
{
    fn matches(&self, value: &Value) -> bool {
        T::accepts(value)
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "type {}", type_name::<T>())
    }
}
