use std::fmt::{Formatter, Result as FmtResult};

use crate::value::Value;

use super::Matcher;

/* IsEmpty */

/// Create an [`IsEmpty`] matcher.
pub fn is_empty() -> IsEmpty {
    IsEmpty
}

/// Matches empty strings, lists and maps.
#[must_use]
#[derive(Debug, Clone, Copy)]
pub struct IsEmpty;

impl Matcher<Value> for IsEmpty {
    fn matches(&self, value: &Value) -> bool {
        match value {
            Value::Str(s) => s.is_empty(),
            Value::List(items) => items.is_empty(),
            Value::Map(entries) => entries.is_empty(),
            _ => false,
        }
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "empty")
    }
}

macro_rules! impl_str_matcher {
    ($type:ident, str::$method:ident, $fmt:tt) => {
        #[doc = concat!("Create a [`", stringify!($type), "`] matcher for the passed `pattern`.")]
        pub fn $method<P: Into<String>>(pattern: P) -> $type {
            $type(pattern.into())
        }

        #[doc = concat!("Matches strings using [`str::", stringify!($method), "`].")]
        #[must_use]
        #[derive(Debug, Clone)]
        pub struct $type(String);

        impl Matcher<Value> for $type {
            fn matches(&self, value: &Value) -> bool {
                value.as_str().is_some_and(|s| s.$method(self.0.as_str()))
            }

            fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
                write!(f, $fmt, self.0)
            }
        }
    };
}

impl_str_matcher!(StartsWith, str::starts_with, "starting with {:?}");
impl_str_matcher!(EndsWith, str::ends_with, "ending with {:?}");
impl_str_matcher!(Contains, str::contains, "containing {:?}");
