//! The [`types`](self) module defines helper types that are used by the
//! actions and the configuration of a mockery.

pub mod duration;

pub use duration::{Duration, DurationError};
