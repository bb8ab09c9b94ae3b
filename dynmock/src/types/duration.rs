use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;
use std::time::Duration as StdDuration;

use thiserror::Error;

/// Timeout used when waiting for a [`WaitHandle`](crate::action::WaitHandle).
///
/// Besides the conversion from [`std::time::Duration`] it can be parsed from
/// human readable strings like `"250ms"` or `"1 min 30 s"`.
#[derive(Default, Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Duration(StdDuration);

/// Error returned if a [`Duration`] could not be parsed.
#[derive(Debug, Error)]
#[error("Invalid duration `{input}`: {reason}")]
pub struct DurationError {
    input: String,
    reason: String,
}

impl Duration {
    /// Create a duration from milliseconds.
    #[must_use]
    pub const fn from_millis(value: u64) -> Self {
        Self(StdDuration::from_millis(value))
    }

    /// Create a duration from seconds.
    #[must_use]
    pub const fn from_secs(value: u64) -> Self {
        Self(StdDuration::from_secs(value))
    }

    /// Get the duration as [`std::time::Duration`].
    #[must_use]
    pub fn as_std(&self) -> StdDuration {
        self.0
    }
}

impl From<StdDuration> for Duration {
    fn from(value: StdDuration) -> Self {
        Self(value)
    }
}

impl From<Duration> for StdDuration {
    fn from(value: Duration) -> Self {
        value.0
    }
}

impl FromStr for Duration {
    type Err = DurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_duration::parse(s).map(Self).map_err(|err| DurationError {
            input: s.into(),
            reason: err.to_string(),
        })
    }
}

impl Display for Duration {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let millis = self.0.as_millis();

        if millis % 1000 == 0 {
            write!(f, "{}s", millis / 1000)
        } else {
            write!(f, "{millis}ms")
        }
    }
}
