use std::fmt::{Formatter, Result as FmtResult};
use std::ops::{Bound, RangeBounds};

use crate::value::{ToValue, Value};

use super::Matcher;

/// Create a [`Range`] matcher from any range of values.
pub fn range<R, T>(range: R) -> Range
where
    R: RangeBounds<T>,
    T: ToValue,
{
    Range {
        start: range.start_bound().map(ToValue::to_value),
        end: range.end_bound().map(ToValue::to_value),
    }
}

/// Matches values inside a range.
#[must_use]
#[derive(Debug, Clone)]
pub struct Range {
    start: Bound<Value>,
    end: Bound<Value>,
}

impl Matcher<Value> for Range {
    fn matches(&self, value: &Value) -> bool {
        let above = match &self.start {
            Bound::Unbounded => true,
            Bound::Included(x) => value.partial_cmp(x).is_some_and(|o| o.is_ge()),
            Bound::Excluded(x) => value.partial_cmp(x).is_some_and(|o| o.is_gt()),
        };

        let below = match &self.end {
            Bound::Unbounded => true,
            Bound::Included(x) => value.partial_cmp(x).is_some_and(|o| o.is_le()),
            Bound::Excluded(x) => value.partial_cmp(x).is_some_and(|o| o.is_lt()),
        };

        above && below
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match &self.start {
            Bound::Unbounded => write!(f, "[_, "),
            Bound::Included(x) => write!(f, "[{x}, "),
            Bound::Excluded(x) => write!(f, "({x}, "),
        }?;

        match &self.end {
            Bound::Unbounded => write!(f, "_]"),
            Bound::Included(x) => write!(f, "{x}]"),
            Bound::Excluded(x) => write!(f, "{x})"),
        }
    }
}
