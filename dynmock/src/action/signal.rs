use std::fmt::{Formatter, Result as FmtResult};
use std::sync::Arc;

use parking_lot::{Condvar, Mutex};

use crate::error::MockError;
use crate::invocation::Invocation;
use crate::types::Duration;

use super::Action;

/// Wait handle that lets a test thread wait for a call made by a background
/// thread.
///
/// The handle stays signalled until it is [`reset`](WaitHandle::reset).
/// Clones of a handle share the same state.
#[derive(Default, Debug, Clone)]
pub struct WaitHandle {
    inner: Arc<Inner>,
}

#[derive(Default, Debug)]
struct Inner {
    signalled: Mutex<bool>,
    condvar: Condvar,
}

impl WaitHandle {
    /// Create a new handle that is not signalled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Signal the handle and wake up all waiting threads.
    pub fn signal(&self) {
        *self.inner.signalled.lock() = true;
        self.inner.condvar.notify_all();
    }

    /// Reset the handle to the not signalled state.
    pub fn reset(&self) {
        *self.inner.signalled.lock() = false;
    }

    /// Returns `true` if the handle is signalled.
    #[must_use]
    pub fn is_signalled(&self) -> bool {
        *self.inner.signalled.lock()
    }

    /// Block the current thread until the handle is signalled.
    pub fn wait(&self) {
        let mut signalled = self.inner.signalled.lock();
        while !*signalled {
            self.inner.condvar.wait(&mut signalled);
        }
    }

    /// Block the current thread until the handle is signalled or the passed
    /// `timeout` elapsed.
    ///
    /// Returns `true` if the handle was signalled.
    pub fn wait_timeout<D: Into<Duration>>(&self, timeout: D) -> bool {
        let timeout: std::time::Duration = timeout.into().into();

        let mut signalled = self.inner.signalled.lock();
        if !*signalled {
            let _ = self
                .inner
                .condvar
                .wait_while_for(&mut signalled, |signalled| !*signalled, timeout);
        }

        *signalled
    }
}

/// Creates a [`Signal`] action that signals the passed `handle`.
pub fn signal(handle: &WaitHandle) -> Signal {
    Signal(handle.clone())
}

/// Action that signals a [`WaitHandle`].
#[derive(Debug, Clone)]
pub struct Signal(pub WaitHandle);

impl Action for Signal {
    fn exec(&self, _invocation: &mut Invocation) -> Result<(), MockError> {
        self.0.signal();

        Ok(())
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "signal")
    }
}

/// Creates a [`BlockOn`] action that blocks the calling thread until the
/// passed `handle` is signalled.
pub fn block_on(handle: &WaitHandle) -> BlockOn {
    BlockOn(handle.clone())
}

/// Action that blocks the calling thread until a [`WaitHandle`] is signalled.
#[derive(Debug, Clone)]
pub struct BlockOn(pub WaitHandle);

impl Action for BlockOn {
    fn exec(&self, _invocation: &mut Invocation) -> Result<(), MockError> {
        self.0.wait();

        Ok(())
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "block until signalled")
    }
}
