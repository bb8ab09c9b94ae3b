//! The [`mockery`](self) module contains the [`Mockery`] that creates mock
//! objects, stores the expectations declared for them and dispatches every
//! invocation of a mock to those expectations.

use std::collections::HashMap;
use std::fmt::Write;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, trace, warn};

use crate::builder::ReceiverBuilder;
use crate::cardinality::Cardinality;
use crate::dynamic::DynamicMock;
use crate::error::{fail, MockError};
use crate::expectation::{
    Actions, Expectation, ExpectationHandle, ExpectationList, Node, OrderedList, UnorderedList,
};
use crate::invocation::Invocation;
use crate::member::TypeDescriptor;
use crate::proxy::{AsProxy, MockRef, MockStyle, Mockable, Proxy};
use crate::value::Value;

/// Options of a [`Mockery`].
#[derive(Debug, Clone, Copy)]
pub struct MockeryOptions {
    /// Style of mocks that are created without an explicit style.
    pub default_style: MockStyle,

    /// Verify all expectations when the mockery is dropped.
    pub verify_on_drop: bool,
}

impl Default for MockeryOptions {
    fn default() -> Self {
        Self {
            default_style: MockStyle::Default,
            verify_on_drop: true,
        }
    }
}

/// Creates mock objects and manages the expectations declared for them.
///
/// Unless [`release`](Mockery::release) or one of the verify methods was
/// called, all expectations are verified when the mockery is dropped.
#[must_use]
pub struct Mockery {
    core: Arc<Mutex<Core>>,
    options: MockeryOptions,
    checked: AtomicBool,
}

impl Mockery {
    /// Create a new mockery with default options.
    pub fn new() -> Self {
        Self::with_options(MockeryOptions::default())
    }

    /// Create a new mockery with the passed `options`.
    pub fn with_options(options: MockeryOptions) -> Self {
        Self {
            core: Arc::new(Mutex::new(Core::default())),
            options,
            checked: AtomicBool::new(false),
        }
    }

    /// Start the creation of a mock of type `T`.
    pub fn mock<T: Mockable>(&self) -> MockBuilder<'_, T> {
        MockBuilder::new(self, T::descriptor(), T::from_proxy)
    }

    /// Create a mock of type `T` with default name and style.
    ///
    /// # Errors
    /// Returns [`MockError::InvalidMockType`] if `T` can not be mocked.
    pub fn create_mock<T: Mockable>(&self) -> Result<T, MockError> {
        self.mock::<T>().build()
    }

    /// Start the creation of a late bound mock for the passed `descriptor`.
    pub fn dynamic(&self, descriptor: TypeDescriptor) -> MockBuilder<'_, DynamicMock> {
        MockBuilder::new(self, Arc::new(descriptor), DynamicMock::from_proxy)
    }

    /// Declare a new expectation that is invoked `cardinality` times.
    pub fn expect<C: Into<Cardinality>>(&self, cardinality: C) -> ReceiverBuilder<'_> {
        ReceiverBuilder::new(self, cardinality.into())
    }

    /// Declare a new expectation that may be invoked any number of times.
    pub fn stub(&self) -> ReceiverBuilder<'_> {
        self.expect(Cardinality::allowed())
    }

    /// Open a scope in which all declared expectations must be invoked in
    /// the order of declaration. The scope ends when the guard is dropped.
    pub fn ordered(&self) -> OrderingScope<'_> {
        OrderingScope::new(self, Node::Ordered(OrderedList::new()))
    }

    /// Open a scope in which all declared expectations may be invoked in
    /// any order. The scope ends when the guard is dropped.
    pub fn unordered(&self) -> OrderingScope<'_> {
        OrderingScope::new(self, Node::Unordered(UnorderedList::new()))
    }

    /// Verify that all expectations have been met.
    ///
    /// If an unexpected invocation was reported before, that error is
    /// returned first, even if the caller of the mock swallowed it.
    ///
    /// # Errors
    /// Returns [`MockError::UnexpectedInvocation`] for a previously reported
    /// unexpected invocation or [`MockError::UnmetExpectations`] if any
    /// expectation was not met.
    pub fn verify_all_expectations_have_been_met(&self) -> Result<(), MockError> {
        self.checked.store(true, Ordering::Relaxed);

        let mut core = self.core.lock();

        if let Some(error) = core.first_error.take() {
            return Err(error);
        }

        if core.root.has_been_met() {
            return Ok(());
        }

        let mut msg = String::from("not all expected invocations were performed\nExpected:\n");
        core.root.describe_unmet_to(&mut msg, 0);

        Err(MockError::UnmetExpectations(msg))
    }

    /// Verify that all expectations declared for `mock` have been met.
    ///
    /// # Errors
    /// Returns [`MockError::UnmetExpectations`] if any expectation of the
    /// mock was not met.
    pub fn verify_expectations_of<M: AsProxy>(&self, mock: &M) -> Result<(), MockError> {
        let unmet = self
            .expectations_of(mock)
            .into_iter()
            .filter(|x| !x.has_been_met())
            .collect::<Vec<_>>();

        if unmet.is_empty() {
            return Ok(());
        }

        let mut msg = format!(
            "not all expected invocations of {} were performed\nExpected:\n",
            mock.proxy()
        );
        for expectation in unmet {
            let _ = writeln!(msg, "  {expectation}");
        }

        Err(MockError::UnmetExpectations(msg))
    }

    /// Get all expectations that were declared for `mock`, including the
    /// ones inside nested ordering scopes.
    #[must_use]
    pub fn expectations_of<M: AsProxy>(&self, mock: &M) -> Vec<ExpectationHandle> {
        let mut result = Vec::new();

        self.core
            .lock()
            .root
            .query_expectations_belonging_to(mock.proxy().mock(), &mut result);

        result
    }

    /// Do not verify the expectations when the mockery is dropped.
    pub fn release(self) {
        self.checked.store(true, Ordering::Relaxed);
    }

    pub(crate) fn core(&self) -> &Arc<Mutex<Core>> {
        &self.core
    }
}

impl Default for Mockery {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Mockery {
    fn drop(&mut self) {
        if !self.options.verify_on_drop
            || self.checked.load(Ordering::Relaxed)
            || std::thread::panicking()
        {
            return;
        }

        if let Err(error) = self.verify_all_expectations_have_been_met() {
            fail(error);
        }
    }
}

/* MockBuilder */

/// Builder that creates a new mock object.
///
/// The name and the style of the mock may only be assigned once.
#[must_use]
pub struct MockBuilder<'a, T> {
    mockery: &'a Mockery,
    descriptor: Arc<TypeDescriptor>,
    make: fn(Proxy) -> T,
    name: Option<String>,
    style: Option<MockStyle>,
    error: Option<MockError>,
    _marker: PhantomData<T>,
}

impl<'a, T> MockBuilder<'a, T> {
    fn new(mockery: &'a Mockery, descriptor: Arc<TypeDescriptor>, make: fn(Proxy) -> T) -> Self {
        Self {
            mockery,
            descriptor,
            make,
            name: None,
            style: None,
            error: None,
            _marker: PhantomData,
        }
    }

    /// Set the name of the mock.
    pub fn named<S: Into<String>>(mut self, name: S) -> Self {
        match &self.name {
            Some(current) => {
                let error = MockError::NameAlreadySet(current.clone());
                self.error.get_or_insert(error);
            }
            None => self.name = Some(name.into()),
        }

        self
    }

    /// Set the style of the mock.
    pub fn style(mut self, style: MockStyle) -> Self {
        match self.style {
            Some(current) => {
                self.error.get_or_insert(MockError::StyleAlreadySet(current));
            }
            None => self.style = Some(style),
        }

        self
    }

    /// Create the mock.
    ///
    /// # Errors
    /// Returns an error if the name or the style was assigned more than once,
    /// or if the type can not be mocked.
    pub fn build(self) -> Result<T, MockError> {
        if let Some(error) = self.error {
            return Err(error);
        }

        let proxy = {
            let mut core = self.mockery.core.lock();

            let descriptor = core.cache.resolve(self.descriptor)?;
            let name = self
                .name
                .unwrap_or_else(|| descriptor.default_mock_name());
            let style = self.style.unwrap_or(self.mockery.options.default_style);

            let id = core.next_id;
            core.next_id += 1;

            debug!(mock = %name, ?style, type_name = %descriptor.name, "Create mock");

            let mock = MockRef::new(id, name, descriptor, style);

            Proxy::new(mock, self.mockery.core.clone())
        };

        Ok((self.make)(proxy))
    }
}

/* OrderingScope */

/// Guard of a nested ordering scope. All expectations declared while the
/// guard is alive are added to the scope.
#[must_use]
pub struct OrderingScope<'a> {
    mockery: &'a Mockery,
    depth: usize,
}

impl<'a> OrderingScope<'a> {
    fn new(mockery: &'a Mockery, node: Node) -> Self {
        let mut core = mockery.core.lock();
        let depth = core.scopes.len();

        core.push_scope(node);

        debug!(depth = depth + 1, "Enter ordering scope");

        Self { mockery, depth }
    }
}

impl Drop for OrderingScope<'_> {
    fn drop(&mut self) {
        self.mockery.core.lock().scopes.truncate(self.depth);

        debug!(depth = self.depth, "Leave ordering scope");
    }
}

/* ProxyCache */

/// Cache of validated type descriptors.
///
/// The key is the ordered and de-duplicated set of interface names. A cached
/// entry is only reused for an equal descriptor; a different descriptor with
/// the same interfaces is validated and replaces the entry.
#[derive(Default)]
pub(crate) struct ProxyCache {
    entries: HashMap<Vec<String>, Arc<TypeDescriptor>>,
}

impl ProxyCache {
    fn resolve(
        &mut self,
        descriptor: Arc<TypeDescriptor>,
    ) -> Result<Arc<TypeDescriptor>, MockError> {
        let key = descriptor.cache_key();

        if let Some(cached) = self.entries.get(&key) {
            if Arc::ptr_eq(cached, &descriptor) || **cached == *descriptor {
                return Ok(cached.clone());
            }
        }

        descriptor.validate()?;

        trace!(type_name = %descriptor.name, interfaces = ?key, "Cache proxy type");

        self.entries.insert(key, descriptor.clone());

        Ok(descriptor)
    }
}

/* Core */

/// Decision of the mockery for a single invocation.
pub(crate) enum Decision {
    /// An expectation matched; execute its actions.
    Perform(Actions),

    /// Nothing matched and the mock returns a default value. `None` if the
    /// default depends on the concrete return type at the call site.
    Default(Option<Value>),

    /// Nothing matched and the real implementation should be called.
    CallThrough,
}

/// Shared state of a mockery.
#[derive(Default)]
pub(crate) struct Core {
    root: UnorderedList,
    scopes: Vec<usize>,
    first_error: Option<MockError>,
    cache: ProxyCache,
    next_id: usize,
}

impl Core {
    /// Add the passed node to the current ordering scope.
    pub(crate) fn add(&mut self, node: Node) -> usize {
        self.current_list().push(node)
    }

    fn push_scope(&mut self, node: Node) {
        let index = self.add(node);

        self.scopes.push(index);
    }

    fn current_list(&mut self) -> &mut dyn ExpectationList {
        let Self { root, scopes, .. } = self;

        let mut list: &mut dyn ExpectationList = root;
        for index in scopes.iter() {
            list = list.child_list_mut(*index);
        }

        list
    }

    /// Find the expectation for the passed invocation and record it, or decide
    /// what to do with an unmatched invocation based on the style of the mock.
    pub(crate) fn decide(&mut self, invocation: &Invocation) -> Result<Decision, MockError> {
        if self.root.matches(invocation) {
            return Ok(Decision::Perform(self.root.perform(invocation)));
        }

        let mock = invocation.receiver();
        let member = invocation.member();

        match mock.style() {
            MockStyle::Transparent if member.concrete => Ok(Decision::CallThrough),
            MockStyle::Loose => Ok(Decision::Default(member.returns.default_value())),
            MockStyle::Stub => Ok(Decision::Default(
                mock.stub_result(&member.name, || member.returns.default_value()),
            )),
            MockStyle::Default | MockStyle::Transparent => {
                Err(self.unexpected_invocation(invocation))
            }
        }
    }

    fn unexpected_invocation(&mut self, invocation: &Invocation) -> MockError {
        let mut msg = format!("unexpected invocation of {invocation}\nExpected:\n");
        self.root.describe_active_to(&mut msg, 0);

        warn!(%invocation, "Unexpected invocation");

        let error = MockError::UnexpectedInvocation(msg);
        self.first_error.get_or_insert_with(|| error.clone());

        error
    }
}
