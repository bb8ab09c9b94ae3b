use std::fmt::{Formatter, Result as FmtResult};

use crate::error::{Fault, MockError};
use crate::invocation::Invocation;

use super::Action;

/// Creates a [`Throw`] action that raises the passed `fault`.
pub fn throw<F: Into<Fault>>(fault: F) -> Throw {
    Throw(fault.into())
}

/// Action that lets the invocation raise a [`Fault`] instead of returning.
#[derive(Debug, Clone)]
pub struct Throw(pub Fault);

impl Action for Throw {
    fn exec(&self, invocation: &mut Invocation) -> Result<(), MockError> {
        invocation.set_fault(self.0.clone());

        Ok(())
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "throw {:?}", self.0.message())
    }
}
