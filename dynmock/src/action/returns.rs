use std::fmt::{Formatter, Result as FmtResult};

use crate::error::MockError;
use crate::invocation::Invocation;
use crate::value::{ToValue, Value};

use super::Action;

/// Creates a [`ReturnValue`] action that returns the passed `value` when called.
pub fn return_value<T: ToValue>(value: T) -> ReturnValue {
    ReturnValue(value.to_value())
}

/// Action that sets the result of the invocation to a fixed value.
///
/// Every invocation receives its own clone of the value.
#[derive(Debug, Clone)]
pub struct ReturnValue(pub Value);

impl Action for ReturnValue {
    fn exec(&self, invocation: &mut Invocation) -> Result<(), MockError> {
        invocation.set_result(self.0.clone())
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "return {}", self.0)
    }
}

/// Creates a [`ReturnDefault`] action.
pub fn return_default() -> ReturnDefault {
    ReturnDefault
}

/// Action that sets the result of the invocation to the default value of the
/// return type of the member.
#[derive(Debug, Clone, Copy)]
pub struct ReturnDefault;

impl Action for ReturnDefault {
    fn exec(&self, invocation: &mut Invocation) -> Result<(), MockError> {
        invocation.set_default();

        Ok(())
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "return default")
    }
}
