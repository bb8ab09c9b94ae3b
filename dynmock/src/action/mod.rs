//! The [`action`](self) module contains different pre-defined actions that may
//! be executed when an expectation of a mocked type is invoked.

mod collect;
mod event;
mod invoke;
mod returns;
mod set_out;
mod signal;
mod throw;

use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::error::MockError;
use crate::invocation::Invocation;

pub use collect::{collect, Collect, Collector};
pub use event::{fire_event, FireEvent};
pub use invoke::{call, invoke, Call, Invoke};
pub use returns::{return_default, return_value, ReturnDefault, ReturnValue};
pub use set_out::{set_named_out, set_out, SetNamedOut, SetOut};
pub use signal::{block_on, signal, BlockOn, Signal, WaitHandle};
pub use throw::{throw, Throw};

/// Trait that defines an action that is executed each time the expectation it
/// belongs to is invoked.
///
/// Actions are executed in the order they were declared, after the mockery
/// has released its internal lock. So they may call other mocks.
pub trait Action: Send + Sync {
    /// Execute the action for the passed `invocation`.
    ///
    /// # Errors
    /// Returns an error if the action can not be applied to the invocation,
    /// for example because the result does not match the return type.
    fn exec(&self, invocation: &mut Invocation) -> Result<(), MockError>;

    /// Write a human readable representation of the action to the passed
    /// formatter.
    ///
    /// # Errors
    /// Returns an error if writing to the formatter failed.
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult;
}

/// Implements [`Display`] for a borrowed action.
pub struct Description<'a>(pub &'a dyn Action);

impl Display for Description<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        self.0.fmt(f)
    }
}
