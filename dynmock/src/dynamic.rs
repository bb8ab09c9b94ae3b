//! The [`dynamic`](self) module contains [`DynamicMock`], a mock object whose
//! type is described at runtime instead of by a rust trait.

use std::collections::HashMap;
use std::fmt::{Debug, Display, Formatter, Result as FmtResult};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::{Fault, MockError};
use crate::invocation::Invocation;
use crate::member::MemberSelector;
use crate::proxy::{AsProxy, Dispatched, Proxy};
use crate::value::Value;

type Body = Arc<dyn Fn(&mut Invocation) -> Result<(), MockError> + Send + Sync>;

/// Late bound mock object.
///
/// Members are called by name with a list of [`Value`]s. The calls take the
/// same path through the mockery as the calls of mocks generated by
/// [`mock!`](crate::mock). Members that are marked as concrete may get a real
/// implementation using [`implement`](DynamicMock::implement), which is
/// called by [`Transparent`](crate::MockStyle::Transparent) mocks.
#[derive(Clone)]
pub struct DynamicMock {
    proxy: Proxy,
    bodies: Arc<Mutex<HashMap<String, Body>>>,
}

impl DynamicMock {
    pub(crate) fn from_proxy(proxy: Proxy) -> Self {
        Self {
            proxy,
            bodies: Arc::default(),
        }
    }

    /// Set the real implementation of the member `name`.
    pub fn implement<S, F>(&self, name: S, body: F)
    where
        S: Into<String>,
        F: Fn(&mut Invocation) -> Result<(), MockError> + Send + Sync + 'static,
    {
        self.bodies.lock().insert(name.into(), Arc::new(body));
    }

    /// Create the invocation of `member` with the passed arguments.
    ///
    /// # Errors
    /// Returns an error if the member is unknown or the number of arguments
    /// does not match.
    pub fn invocation<S>(&self, member: S, args: Vec<Value>) -> Result<Invocation, MockError>
    where
        S: Into<MemberSelector>,
    {
        self.proxy.invocation(member, args)
    }

    /// Dispatch the invocation. Afterwards it carries the result or the fault.
    ///
    /// # Errors
    /// Returns an error if the invocation was unexpected, or if it should be
    /// forwarded to a real implementation that does not exist.
    pub fn invoke(&self, invocation: &mut Invocation) -> Result<(), MockError> {
        match self.proxy.dispatch(invocation)? {
            Dispatched::Handled => Ok(()),
            Dispatched::CallThrough => {
                let name = &invocation.member().name;
                let body = self.bodies.lock().get(name).cloned();
                let Some(body) = body else {
                    return Err(MockError::NoImplementation(invocation.member().to_string()));
                };

                body(invocation)?;
                invocation.mark_all_set();

                Ok(())
            }
        }
    }

    /// Call the member `name` with the passed arguments and return its result.
    ///
    /// # Errors
    /// Returns an error if the call could not be dispatched. A fault raised by
    /// the expectation is returned as the inner `Err`.
    pub fn call<S>(&self, member: S, args: Vec<Value>) -> Result<Result<Value, Fault>, MockError>
    where
        S: Into<MemberSelector>,
    {
        let mut invocation = self.invocation(member, args)?;

        self.invoke(&mut invocation)?;

        invocation.into_outcome::<Value>()
    }
}

impl AsProxy for DynamicMock {
    fn proxy(&self) -> &Proxy {
        &self.proxy
    }
}

impl PartialEq for DynamicMock {
    fn eq(&self, other: &Self) -> bool {
        self.proxy == other.proxy
    }
}

impl Eq for DynamicMock {}

impl Display for DynamicMock {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.proxy, f)
    }
}

impl Debug for DynamicMock {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "DynamicMock({:?})", self.proxy.mock())
    }
}
