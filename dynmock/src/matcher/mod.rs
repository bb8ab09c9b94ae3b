//! The [`matcher`](self) module contains the [`Matcher`] trait and the
//! pre-defined matchers that are used to check the arguments of an invocation.

mod closure;
mod comparison;
mod constant;
mod equal;
mod field;
mod logic;
mod multi;
mod null;
mod one_of;
mod out;
mod range;
mod same;
mod string;
mod to_string;
mod type_of;

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::sync::Arc;

use crate::value::{Handler, Record, Value};
use crate::MockRef;

pub use closure::{closure, typed, Closure, Typed};
pub use comparison::{comparison, ge, gt, le, lt, Comparison};
pub use constant::{any, constant, nothing, Constant};
pub use equal::{eq, ne, Equal};
pub use field::{field, Field};
pub use logic::{and, not, or, And, Not, Or};
pub use multi::IntoArgMatchers;
pub use null::{not_null, null, Null};
pub use one_of::{one_of, OneOf};
pub use out::{out, Out};
pub use range::{range, Range};
pub use same::{same, Same};
pub use string::{
    contains, ends_with, is_empty, starts_with, Contains, EndsWith, IsEmpty, StartsWith,
};
pub use to_string::{to_string, ToStringMatcher};
pub use type_of::{type_of, TypeOf};

/// A matcher is used to check if the passed argument matches a pre-defined
/// expectation. It is mostly used to verify the arguments to an expected call.
pub trait Matcher<T> {
    /// Returns `true` if the passed `value` matches the expectations, `false`
    /// otherwise.
    fn matches(&self, value: &T) -> bool;

    /// Write a human readable representation of the matcher to the passed
    /// formatter.
    ///
    /// # Errors
    /// Returns an error if writing to the formatter failed.
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult;
}

impl<T, M> Matcher<T> for Box<M>
where
    M: Matcher<T> + ?Sized,
{
    fn matches(&self, value: &T) -> bool {
        (**self).matches(value)
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        (**self).fmt(f)
    }
}

impl<T, M> Matcher<T> for Arc<M>
where
    M: Matcher<T> + ?Sized,
{
    fn matches(&self, value: &T) -> bool {
        (**self).matches(value)
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        (**self).fmt(f)
    }
}

/// Extension methods that combine matchers.
pub trait MatcherEx<T>: Matcher<T> + Sized {
    /// Matches if `self` and `other` both match.
    fn and<M: Matcher<T>>(self, other: M) -> And<Self, M> {
        and(self, other)
    }

    /// Matches if `self` or `other` matches.
    fn or<M: Matcher<T>>(self, other: M) -> Or<Self, M> {
        or(self, other)
    }

    /// Matches if `self` does not match.
    fn not(self) -> Not<Self> {
        not(self)
    }
}

impl<T, X> MatcherEx<T> for X where X: Matcher<T> {}

/// Implements [`Display`] for a borrowed matcher.
pub struct Description<'a, T>(pub &'a dyn Matcher<T>);

impl<T> Display for Description<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        self.0.fmt(f)
    }
}

/// Render the description of the passed matcher into a string.
pub fn describe<T, M>(matcher: &M) -> String
where
    M: Matcher<T>,
{
    Description(matcher).to_string()
}

/// Matcher for a single argument of an invocation.
pub type ArgMatcher = Box<dyn Matcher<Value> + Send + Sync>;

/// Converts matchers and literal values into an [`ArgMatcher`].
///
/// Literal values are compared using the [`eq`] matcher.
pub trait IntoArgMatcher {
    /// Get the argument matcher.
    fn into_arg_matcher(self) -> ArgMatcher;
}

impl<M> IntoArgMatcher for M
where
    M: Matcher<Value> + Send + Sync + 'static,
{
    fn into_arg_matcher(self) -> ArgMatcher {
        Box::new(self)
    }
}

macro_rules! impl_literal {
    ($( $type:ty ),+ $(,)?) => {
        $(
            impl IntoArgMatcher for $type {
                fn into_arg_matcher(self) -> ArgMatcher {
                    Box::new(eq(self))
                }
            }
        )+
    };
}

impl_literal!(bool, char, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
impl_literal!(&str, String, Value, Record, Handler, MockRef);
