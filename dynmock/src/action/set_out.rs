use std::fmt::{Formatter, Result as FmtResult};

use crate::error::MockError;
use crate::invocation::Invocation;
use crate::value::{ToValue, Value};

use super::Action;

/// Creates a [`SetOut`] action that assigns `value` to the parameter at `index`.
pub fn set_out<T: ToValue>(index: usize, value: T) -> SetOut {
    SetOut {
        index,
        value: value.to_value(),
    }
}

/// Action that assigns an output parameter by its position.
#[derive(Debug, Clone)]
pub struct SetOut {
    index: usize,
    value: Value,
}

impl Action for SetOut {
    fn exec(&self, invocation: &mut Invocation) -> Result<(), MockError> {
        invocation.set_parameter(self.index, self.value.clone())
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "set arg {}={}", self.index, self.value)
    }
}

/// Creates a [`SetNamedOut`] action that assigns `value` to the parameter
/// called `name`.
pub fn set_named_out<S: Into<String>, T: ToValue>(name: S, value: T) -> SetNamedOut {
    SetNamedOut {
        name: name.into(),
        value: value.to_value(),
    }
}

/// Action that assigns an output parameter by its name.
#[derive(Debug, Clone)]
pub struct SetNamedOut {
    name: String,
    value: Value,
}

impl Action for SetNamedOut {
    fn exec(&self, invocation: &mut Invocation) -> Result<(), MockError> {
        invocation.set_parameter_by_name(&self.name, self.value.clone())
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "set {}={}", self.name, self.value)
    }
}
