use std::fmt::{Formatter, Result as FmtResult};

use super::Matcher;

/// Create an [`And`] matcher.
pub fn and<A, B>(left: A, right: B) -> And<A, B> {
    And(left, right)
}

/// Create an [`Or`] matcher.
pub fn or<A, B>(left: A, right: B) -> Or<A, B> {
    Or(left, right)
}

/// Create a [`Not`] matcher.
pub fn not<M>(inner: M) -> Not<M> {
    Not(inner)
}

/// Matches if both inner matchers match.
#[must_use]
#[derive(Debug, Clone)]
pub struct And<A, B>(pub A, pub B);

impl<T, A, B> Matcher<T> for And<A, B>
where
    A: Matcher<T>,
    B: Matcher<T>,
{
    fn matches(&self, value: &T) -> bool {
        self.0.matches(value) && self.1.matches(value)
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "(")?;
        self.0.fmt(f)?;
        write!(f, " and ")?;
        self.1.fmt(f)?;
        write!(f, ")")
    }
}

/// Matches if at least one of the inner matchers matches.
#[must_use]
#[derive(Debug, Clone)]
pub struct Or<A, B>(pub A, pub B);

impl<T, A, B> Matcher<T> for Or<A, B>
where
    A: Matcher<T>,
    B: Matcher<T>,
{
    fn matches(&self, value: &T) -> bool {
        self.0.matches(value) || self.1.matches(value)
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "(")?;
        self.0.fmt(f)?;
        write!(f, " or ")?;
        self.1.fmt(f)?;
        write!(f, ")")
    }
}

/// Matches if the inner matcher does not match.
#[must_use]
#[derive(Debug, Clone)]
pub struct Not<M>(pub M);

impl<T, M> Matcher<T> for Not<M>
where
    M: Matcher<T>,
{
    fn matches(&self, value: &T) -> bool {
        !self.0.matches(value)
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "not ")?;
        self.0.fmt(f)
    }
}
