use std::fmt::{Formatter, Result as FmtResult};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::MockError;
use crate::invocation::Invocation;
use crate::value::{FromValue, Value};

use super::Action;

/// Slot that receives the arguments captured by [`collect`].
///
/// Clones of a collector share the same slot.
#[derive(Default, Debug, Clone)]
pub struct Collector {
    values: Arc<Mutex<Vec<Value>>>,
}

impl Collector {
    /// Create a new empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently collected value.
    #[must_use]
    pub fn last(&self) -> Option<Value> {
        self.values.lock().last().cloned()
    }

    /// All collected values, oldest first.
    #[must_use]
    pub fn values(&self) -> Vec<Value> {
        self.values.lock().clone()
    }

    /// Number of collected values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.lock().len()
    }

    /// Returns `true` if nothing was collected yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.lock().is_empty()
    }

    /// Convert the most recently collected value into `T`.
    ///
    /// # Errors
    /// Returns an error if the value can not be converted. `Ok(None)` is
    /// returned if nothing was collected yet.
    pub fn last_as<T: FromValue>(&self) -> Result<Option<T>, MockError> {
        self.last().map(T::from_value).transpose()
    }
}

/// Creates a [`Collect`] action that stores the argument at `index` in the
/// passed `collector`.
pub fn collect(index: usize, collector: &Collector) -> Collect {
    Collect {
        index,
        collector: collector.clone(),
    }
}

/// Action that captures one argument of the invocation.
#[derive(Debug, Clone)]
pub struct Collect {
    index: usize,
    collector: Collector,
}

impl Action for Collect {
    fn exec(&self, invocation: &mut Invocation) -> Result<(), MockError> {
        let value = invocation.parameter(self.index)?.clone();

        self.collector.values.lock().push(value);

        Ok(())
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "collect argument {}", self.index)
    }
}
