use std::fmt::{Formatter, Result as FmtResult};

use crate::error::MockError;
use crate::invocation::Invocation;

use super::Action;

/// Creates an [`Invoke`] action that calls the passed callback without any
/// arguments.
pub fn invoke<F>(func: F) -> Invoke<F>
where
    F: Fn() + Send + Sync,
{
    Invoke(func)
}

/// Action that calls a callback without arguments.
pub struct Invoke<F>(pub F);

impl<F> Action for Invoke<F>
where
    F: Fn() + Send + Sync,
{
    fn exec(&self, _invocation: &mut Invocation) -> Result<(), MockError> {
        (self.0)();

        Ok(())
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "invoke callback")
    }
}

/// Creates a [`Call`] action that calls the passed callback with the
/// invocation.
pub fn call<F>(func: F) -> Call<F>
where
    F: Fn(&mut Invocation) -> Result<(), MockError> + Send + Sync,
{
    Call(func)
}

/// Action that calls a callback with mutable access to the invocation, for
/// example to compute the result from the arguments.
pub struct Call<F>(pub F);

impl<F> Action for Call<F>
where
    F: Fn(&mut Invocation) -> Result<(), MockError> + Send + Sync,
{
    fn exec(&self, invocation: &mut Invocation) -> Result<(), MockError> {
        (self.0)(invocation)
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "call closure")
    }
}
