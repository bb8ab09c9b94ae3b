use std::fmt::{Formatter, Result as FmtResult};

use tracing::trace;

use crate::error::MockError;
use crate::invocation::Invocation;
use crate::value::Value;

use super::Action;

/// Creates a [`FireEvent`] action that calls every handler registered for the
/// event `name` of the receiver with the passed `args`.
pub fn fire_event<S: Into<String>>(name: S, args: Vec<Value>) -> FireEvent {
    FireEvent {
        name: name.into(),
        args,
    }
}

/// Action that fires an event of the mock the invocation was made on.
///
/// Handlers are registered by invoking an expectation of the matching
/// `add_<event>` member. Firing an event without handlers does nothing.
#[derive(Debug, Clone)]
pub struct FireEvent {
    name: String,
    args: Vec<Value>,
}

impl Action for FireEvent {
    fn exec(&self, invocation: &mut Invocation) -> Result<(), MockError> {
        let handlers = invocation.receiver().handlers(&self.name);

        trace!(
            mock = invocation.receiver().name(),
            event = %self.name,
            handlers = handlers.len(),
            "Fire event"
        );

        for handler in handlers {
            handler.call(&self.args);
        }

        Ok(())
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "fire {}", self.name)?;

        if !self.args.is_empty() {
            write!(f, " with {}", Value::List(self.args.clone()))?;
        }

        Ok(())
    }
}
