//! The [`proxy`](self) module contains the types that connect a mock object
//! with the [`Mockery`](crate::Mockery) it was created by.
//!
//! Every mocked member turns its call into an [`Invocation`] and hands it to
//! [`Proxy::dispatch`]. The helpers [`finish`], [`finish_fallible`] and
//! [`write_back`] convert the outcome back at the boundary of the member.

use std::collections::HashMap;
use std::fmt::{Debug, Display, Formatter, Result as FmtResult};
use std::hash::{Hash, Hasher};
use std::panic::panic_any;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::trace;

use crate::error::{fail, Fault, MockError};
use crate::invocation::Invocation;
use crate::member::{MemberRef, MemberSelector, TypeDescriptor};
use crate::mockery::{Core, Decision};
use crate::value::{FromValue, Handler, Value};

/// Policy of a mock for invocations that no expectation matches.
#[derive(Default, Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum MockStyle {
    /// Unmatched invocations fail.
    #[default]
    Default,

    /// Unmatched invocations return the default value of the return type.
    Loose,

    /// Like [`Loose`](MockStyle::Loose), but the default value of each member
    /// is created once and returned on every following call.
    Stub,

    /// Unmatched invocations call the real implementation of the member, if
    /// there is one.
    Transparent,
}

/* MockRef */

/// Identity of a mock object.
///
/// Two references are equal if they refer to the same mock.
#[derive(Clone)]
pub struct MockRef(Arc<MockState>);

struct MockState {
    id: usize,
    name: String,
    descriptor: Arc<TypeDescriptor>,
    style: MockStyle,
    events: Mutex<HashMap<String, Vec<Handler>>>,
    stub_results: Mutex<HashMap<String, Value>>,
}

impl MockRef {
    pub(crate) fn new(
        id: usize,
        name: String,
        descriptor: Arc<TypeDescriptor>,
        style: MockStyle,
    ) -> Self {
        Self(Arc::new(MockState {
            id,
            name,
            descriptor,
            style,
            events: Mutex::default(),
            stub_results: Mutex::default(),
        }))
    }

    /// Id of the mock, unique within its mockery.
    #[must_use]
    pub fn id(&self) -> usize {
        self.0.id
    }

    /// Name of the mock.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// Style of the mock.
    #[must_use]
    pub fn style(&self) -> MockStyle {
        self.0.style
    }

    /// Descriptor of the mocked type.
    #[must_use]
    pub fn descriptor(&self) -> &Arc<TypeDescriptor> {
        &self.0.descriptor
    }

    /// Handlers currently registered for `event`.
    #[must_use]
    pub fn handlers(&self, event: &str) -> Vec<Handler> {
        self.0
            .events
            .lock()
            .get(event)
            .cloned()
            .unwrap_or_default()
    }

    pub(crate) fn add_handler(&self, event: &str, handler: Handler) {
        self.0
            .events
            .lock()
            .entry(event.into())
            .or_default()
            .push(handler);
    }

    pub(crate) fn remove_handler(&self, event: &str, handler: &Handler) {
        let mut events = self.0.events.lock();

        if let Some(handlers) = events.get_mut(event) {
            if let Some(pos) = handlers.iter().position(|h| Handler::ptr_eq(h, handler)) {
                handlers.remove(pos);
            }
        }
    }

    pub(crate) fn stub_result<F>(&self, member: &str, create: F) -> Option<Value>
    where
        F: FnOnce() -> Option<Value>,
    {
        let mut results = self.0.stub_results.lock();

        if let Some(value) = results.get(member) {
            return Some(value.clone());
        }

        let value = create()?;
        results.insert(member.into(), value.clone());

        Some(value)
    }
}

impl PartialEq for MockRef {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for MockRef {}

impl Hash for MockRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Arc::as_ptr(&self.0).hash(state);
    }
}

impl Display for MockRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0.name)
    }
}

impl Debug for MockRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "MockRef({}#{})", self.0.name, self.0.id)
    }
}

/* Proxy */

/// Result of [`Proxy::dispatch`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Dispatched {
    /// The invocation carries its result (or fault).
    Handled,

    /// The invocation should be forwarded to the real implementation of the member.
    CallThrough,
}

/// Connection between a mock object and its mockery.
///
/// Every mock object owns exactly one proxy. Clones of the proxy share the
/// identity of the mock.
#[derive(Clone)]
pub struct Proxy {
    mock: MockRef,
    core: Arc<Mutex<Core>>,
}

impl Proxy {
    pub(crate) fn new(mock: MockRef, core: Arc<Mutex<Core>>) -> Self {
        Self { mock, core }
    }

    /// Identity of the mock.
    #[must_use]
    pub fn mock(&self) -> &MockRef {
        &self.mock
    }

    pub(crate) fn core(&self) -> &Arc<Mutex<Core>> {
        &self.core
    }

    /// Create the invocation of `member` with the passed arguments.
    ///
    /// # Errors
    /// Returns an error if the mocked type has no such member or the number
    /// of arguments is wrong.
    pub fn invocation<S>(&self, member: S, args: Vec<Value>) -> Result<Invocation, MockError>
    where
        S: Into<MemberSelector>,
    {
        let selector = member.into();
        let descriptor = self.mock.descriptor();
        let member = descriptor
            .find(&selector)
            .ok_or_else(|| MockError::UnknownMember {
                type_name: descriptor.name.clone(),
                member: selector.name().into(),
            })?;

        Invocation::new(self.mock.clone(), member.clone(), args)
    }

    /// Route the invocation through the mockery.
    ///
    /// If an expectation matches, its actions are executed on the invocation.
    /// Otherwise the style of the mock decides what happens.
    ///
    /// # Errors
    /// Returns [`MockError::UnexpectedInvocation`] if no expectation matches
    /// and the mock is strict, or any error raised by the executed actions.
    pub fn dispatch(&self, invocation: &mut Invocation) -> Result<Dispatched, MockError> {
        let decision = self.core.lock().decide(invocation)?;

        match decision {
            Decision::Perform(actions) => {
                trace!(%invocation, actions = actions.len(), "Perform expectation");

                for action in actions {
                    action.exec(invocation)?;
                }

                let member = invocation.member();
                if invocation.is_pending() && !member.returns.is_void() {
                    return Err(MockError::MissingResult {
                        member: member.to_string(),
                        expected: member.returns.type_name().into(),
                    });
                }

                Ok(Dispatched::Handled)
            }
            Decision::Default(Some(value)) => {
                trace!(%invocation, %value, "Return default value");

                invocation.set_result(value)?;

                Ok(Dispatched::Handled)
            }
            Decision::Default(None) => {
                trace!(%invocation, "Return default value of the call site");

                invocation.set_default();

                Ok(Dispatched::Handled)
            }
            Decision::CallThrough => {
                trace!(%invocation, "Call real implementation");

                Ok(Dispatched::CallThrough)
            }
        }
    }
}

impl PartialEq for Proxy {
    fn eq(&self, other: &Self) -> bool {
        self.mock == other.mock
    }
}

impl Eq for Proxy {}

impl Hash for Proxy {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.mock.hash(state);
    }
}

impl Display for Proxy {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.mock, f)
    }
}

impl Debug for Proxy {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Proxy({:?})", self.mock)
    }
}

/// Gives access to the [`Proxy`] of a mock object.
pub trait AsProxy {
    /// Get the proxy.
    fn proxy(&self) -> &Proxy;
}

impl AsProxy for Proxy {
    fn proxy(&self) -> &Proxy {
        self
    }
}

/// Type that can be created by [`Mockery::mock`](crate::Mockery::mock).
///
/// This is implemented by the [`mock!`](crate::mock) macro.
pub trait Mockable: AsProxy + Sized {
    /// Descriptor of the mocked type.
    fn descriptor() -> Arc<TypeDescriptor>;

    /// Create the mock object from its proxy.
    fn from_proxy(proxy: Proxy) -> Self;
}

/* Boundary helpers */

/// Convert the outcome of a dispatched invocation into the return value of
/// the mocked member.
///
/// A fault is raised using [`panic_any`], so it can be caught and inspected
/// with [`std::panic::catch_unwind`].
///
/// # Panics
/// Panics if the invocation carries a fault, or if the result can not be
/// converted into `T`.
#[track_caller]
pub fn finish<T: FromValue>(invocation: Invocation) -> T {
    match invocation.into_outcome::<T>() {
        Ok(Ok(value)) => value,
        Ok(Err(fault)) => panic_any(fault),
        Err(error) => fail(error),
    }
}

/// Convert the outcome of a dispatched invocation into the return value of a
/// mocked member that returns `Result<T, E>`.
///
/// # Panics
/// Panics if the result can not be converted into `T`.
#[track_caller]
pub fn finish_fallible<T, E>(invocation: Invocation) -> Result<T, E>
where
    T: FromValue,
    E: From<Fault>,
{
    match invocation.into_outcome::<T>() {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(fault)) => Err(E::from(fault)),
        Err(error) => fail(error),
    }
}

/// Write the value assigned to the output parameter at `index` back to the
/// caller's variable. Nothing is written if the parameter was not assigned.
///
/// # Panics
/// Panics if the assigned value can not be converted into `T`.
#[track_caller]
pub fn write_back<T: FromValue>(invocation: &Invocation, index: usize, target: &mut T) {
    if invocation.is_faulted() {
        return;
    }

    match invocation.take_output::<T>(index) {
        Ok(Some(value)) => *target = value,
        Ok(None) => (),
        Err(error) => fail(error),
    }
}
