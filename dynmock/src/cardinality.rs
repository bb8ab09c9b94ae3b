//! The [`cardinality`](self) module contains different types and helpers to
//! define how often an expectation may and must be invoked.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::ops::{
    Bound, Range, RangeBounds, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive,
};

use crate::matcher::Matcher;

type CountMatcher = Box<dyn Matcher<usize> + Send + Sync>;

/// Defines how often an expectation must be invoked to be met (the required
/// count) and how often it may be invoked at all (the active count).
pub struct Cardinality {
    description: String,
    required: CountMatcher,
    active: CountMatcher,
}

impl Cardinality {
    /// Create a cardinality from custom count matchers.
    pub fn custom<D, R, A>(description: D, required: R, active: A) -> Self
    where
        D: Into<String>,
        R: Matcher<usize> + Send + Sync + 'static,
        A: Matcher<usize> + Send + Sync + 'static,
    {
        Self {
            description: description.into(),
            required: Box::new(required),
            active: Box::new(active),
        }
    }

    /// Expect exactly `n` calls.
    #[must_use]
    pub fn exactly(n: usize) -> Self {
        let description = match n {
            0 => "never".into(),
            n => times(n),
        };

        Self::custom(description, CountRange::from(n), CountRange::from(..=n))
    }

    /// Expect exactly one call.
    #[must_use]
    pub fn once() -> Self {
        Self::exactly(1)
    }

    /// Expect no call at all.
    #[must_use]
    pub fn never() -> Self {
        Self::exactly(0)
    }

    /// Expect at least `n` calls.
    #[must_use]
    pub fn at_least(n: usize) -> Self {
        Self::custom(
            format!("at least {}", times(n)),
            CountRange::from(n..),
            CountRange::from(..),
        )
    }

    /// Allow at most `n` calls.
    #[must_use]
    pub fn at_most(n: usize) -> Self {
        Self::custom(
            format!("at most {}", times(n)),
            CountRange::from(..),
            CountRange::from(..=n),
        )
    }

    /// Expect between `min` and `max` calls (both inclusive).
    #[must_use]
    pub fn between(min: usize, max: usize) -> Self {
        Self::custom(
            format!("{min} to {max} times"),
            CountRange::from(min..=max),
            CountRange::from(..=max),
        )
    }

    /// Allow any number of calls, including none.
    #[must_use]
    pub fn allowed() -> Self {
        Self::custom("allowed", CountRange::from(..), CountRange::from(..))
    }

    /// Returns `true` if one more call is accepted after `count` calls.
    #[must_use]
    pub fn is_active(&self, count: usize) -> bool {
        self.active.matches(&(count + 1))
    }

    /// Returns `true` if `count` calls satisfy the expectation.
    #[must_use]
    pub fn has_been_met(&self, count: usize) -> bool {
        self.required.matches(&count)
    }
}

impl Display for Cardinality {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.description)
    }
}

impl std::fmt::Debug for Cardinality {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Cardinality({})", self.description)
    }
}

impl From<usize> for Cardinality {
    fn from(value: usize) -> Self {
        Self::exactly(value)
    }
}

impl From<CountRange> for Cardinality {
    fn from(range: CountRange) -> Self {
        let lower = match range.lower {
            Bound::Unbounded => 0,
            Bound::Included(x) => x,
            Bound::Excluded(x) => x + 1,
        };

        let upper = match range.upper {
            Bound::Unbounded => None,
            Bound::Included(x) => Some(x),
            Bound::Excluded(x) => Some(x.saturating_sub(1)),
        };

        match (lower, upper) {
            (0, None) => Self::allowed(),
            (lower, None) => Self::at_least(lower),
            (lower, Some(upper)) if lower == upper => Self::exactly(lower),
            (0, Some(upper)) => Self::at_most(upper),
            (lower, Some(upper)) => Self::between(lower, upper),
        }
    }
}

/// Formats `n time(s)`.
pub(crate) fn times(n: usize) -> String {
    if n == 1 {
        "1 time".into()
    } else {
        format!("{n} times")
    }
}

/// Range of call counts with a lower and a upper limit.
///
/// Similar to [`RangeBounds`] from the standard library but as struct instead
/// of trait.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct CountRange {
    lower: Bound<usize>,
    upper: Bound<usize>,
}

impl Default for CountRange {
    fn default() -> Self {
        Self {
            lower: Bound::Unbounded,
            upper: Bound::Unbounded,
        }
    }
}

impl Matcher<usize> for CountRange {
    fn matches(&self, value: &usize) -> bool {
        (self.lower, self.upper).contains(value)
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self.lower {
            Bound::Unbounded => write!(f, "[_, "),
            Bound::Included(x) => write!(f, "[{x}, "),
            Bound::Excluded(x) => write!(f, "({x}, "),
        }?;

        match self.upper {
            Bound::Unbounded => write!(f, "_]"),
            Bound::Included(x) => write!(f, "{x}]"),
            Bound::Excluded(x) => write!(f, "{x})"),
        }
    }
}

impl From<usize> for CountRange {
    fn from(value: usize) -> Self {
        Self {
            lower: Bound::Included(value),
            upper: Bound::Included(value),
        }
    }
}

macro_rules! impl_from_range_bounds {
    ($x:ty) => {
        impl From<$x> for CountRange {
            fn from(value: $x) -> Self {
                Self {
                    lower: value.start_bound().cloned(),
                    upper: value.end_bound().cloned(),
                }
            }
        }

        impl From<$x> for Cardinality {
            fn from(value: $x) -> Self {
                CountRange::from(value).into()
            }
        }
    };
}

impl_from_range_bounds!(Range<usize>);
impl_from_range_bounds!(RangeFrom<usize>);
impl_from_range_bounds!(RangeFull);
impl_from_range_bounds!(RangeInclusive<usize>);
impl_from_range_bounds!(RangeTo<usize>);
impl_from_range_bounds!(RangeToInclusive<usize>);
