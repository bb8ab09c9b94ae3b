//! The [`builder`](self) module contains the fluent API that declares new
//! expectations:
//!
//! ```ignore
//! mockery
//!     .expect(1)
//!     .on(&warehouse)
//!     .method(MockWarehouse::HAS_INVENTORY)?
//!     .with(("Talisker", 50))
//!     .will(return_value(true));
//! ```
//!
//! The expectation is added to the current ordering scope as soon as the
//! member is selected. All following calls only refine it.

use std::sync::Arc;

use crate::action::Action;
use crate::call_matcher::{ArgumentsMatcher, GenericArgsMatcher, MemberMatcher, TypeArgMatcher};
use crate::cardinality::Cardinality;
use crate::error::MockError;
use crate::expectation::{ExpectationHandle, InvocationExpectation, Node};
use crate::invocation::{Invocation, TypeArg};
use crate::matcher::{IntoArgMatcher, IntoArgMatchers, Matcher};
use crate::member::{CallShape, Member, MemberSelector, INDEX_GET, INDEX_SET};
use crate::mockery::Mockery;
use crate::proxy::{AsProxy, Proxy};

/// First step of an expectation: the expected number of calls is known, the
/// receiver is not.
#[must_use]
pub struct ReceiverBuilder<'a> {
    mockery: &'a Mockery,
    cardinality: Cardinality,
}

impl<'a> ReceiverBuilder<'a> {
    pub(crate) fn new(mockery: &'a Mockery, cardinality: Cardinality) -> Self {
        Self {
            mockery,
            cardinality,
        }
    }

    /// Set the mock that should receive the calls.
    pub fn on<M: AsProxy>(self, mock: &M) -> MemberBuilder<'a> {
        let proxy = mock.proxy().clone();
        let error = (!Arc::ptr_eq(proxy.core(), self.mockery.core()))
            .then(|| MockError::ForeignMock(proxy.mock().name().into()));

        MemberBuilder {
            mockery: self.mockery,
            cardinality: self.cardinality,
            proxy,
            error,
        }
    }
}

/// Second step of an expectation: selects the expected member.
///
/// Each method checks that the mocked type declares a member of the requested
/// shape and fails with a configuration error otherwise.
#[must_use]
pub struct MemberBuilder<'a> {
    mockery: &'a Mockery,
    cardinality: Cardinality,
    proxy: Proxy,
    error: Option<MockError>,
}

impl MemberBuilder<'_> {
    /// Expect a call of the passed method.
    ///
    /// # Errors
    /// Returns [`MockError::UnknownMember`] if the type has no such member.
    pub fn method<S: Into<MemberSelector>>(
        self,
        member: S,
    ) -> Result<ExpectationBuilder, MockError> {
        let selector = member.into();
        let member = self.find(&selector)?;

        self.register(selector, &member, ArgumentsMatcher::any())
    }

    /// Expect a read of the property `name`.
    ///
    /// # Errors
    /// Returns an error if the type has no getter for this property.
    pub fn get_property(self, name: &str) -> Result<ExpectationBuilder, MockError> {
        let selector = MemberSelector::Name(format!("get_{name}"));
        let member = self.find_shaped(&selector, "a property getter", |s| {
            matches!(s, CallShape::PropertyGet(_))
        })?;

        self.register(selector, &member, ArgumentsMatcher::getter())
    }

    /// Expect an assignment to the property `name`.
    ///
    /// # Errors
    /// Returns an error if the type has no setter for this property.
    pub fn set_property(self, name: &str) -> Result<ExpectationBuilder, MockError> {
        let selector = MemberSelector::Name(format!("set_{name}"));
        let member = self.find_shaped(&selector, "a property setter", |s| {
            matches!(s, CallShape::PropertySet(_))
        })?;

        self.register(selector, &member, ArgumentsMatcher::setter())
    }

    /// Expect a read of the indexer with the passed index arguments.
    ///
    /// # Errors
    /// Returns an error if the type has no indexer getter.
    pub fn get_index<A: IntoArgMatchers>(self, index: A) -> Result<ExpectationBuilder, MockError> {
        let selector = MemberSelector::Name(INDEX_GET.into());
        let member = self.find_shaped(&selector, "an indexer getter", |s| {
            matches!(s, CallShape::IndexGet)
        })?;

        self.register(
            selector,
            &member,
            ArgumentsMatcher::index_get(index.into_arg_matchers()),
        )
    }

    /// Expect an assignment to the indexer with the passed index arguments.
    /// Use [`ExpectationBuilder::to`] to restrict the assigned value.
    ///
    /// # Errors
    /// Returns an error if the type has no indexer setter.
    pub fn set_index<A: IntoArgMatchers>(self, index: A) -> Result<ExpectationBuilder, MockError> {
        let selector = MemberSelector::Name(INDEX_SET.into());
        let member = self.find_shaped(&selector, "an indexer setter", |s| {
            matches!(s, CallShape::IndexSet)
        })?;

        self.register(
            selector,
            &member,
            ArgumentsMatcher::index_set(index.into_arg_matchers()),
        )
    }

    /// Expect a handler to be added to the event `name`.
    ///
    /// # Errors
    /// Returns an error if the type has no such event.
    pub fn add_handler(self, event: &str) -> Result<ExpectationBuilder, MockError> {
        let selector = MemberSelector::Name(format!("add_{event}"));
        let member = self.find_shaped(&selector, "an event", |s| {
            matches!(s, CallShape::EventAdd(_))
        })?;

        self.register(selector, &member, ArgumentsMatcher::event_add())
    }

    /// Expect a handler to be removed from the event `name`.
    ///
    /// # Errors
    /// Returns an error if the type has no such event.
    pub fn remove_handler(self, event: &str) -> Result<ExpectationBuilder, MockError> {
        let selector = MemberSelector::Name(format!("remove_{event}"));
        let member = self.find_shaped(&selector, "an event", |s| {
            matches!(s, CallShape::EventRemove(_))
        })?;

        self.register(selector, &member, ArgumentsMatcher::event_remove())
    }

    fn find(&self, selector: &MemberSelector) -> Result<Arc<Member>, MockError> {
        if let Some(error) = &self.error {
            return Err(error.clone());
        }

        let descriptor = self.proxy.mock().descriptor();

        descriptor
            .find(selector)
            .cloned()
            .ok_or_else(|| MockError::UnknownMember {
                type_name: descriptor.name.clone(),
                member: selector.name().into(),
            })
    }

    fn find_shaped<F>(
        &self,
        selector: &MemberSelector,
        expected: &'static str,
        accept: F,
    ) -> Result<Arc<Member>, MockError>
    where
        F: FnOnce(CallShape<'_>) -> bool,
    {
        let member = self.find(selector)?;

        if accept(member.shape()) {
            Ok(member)
        } else {
            Err(MockError::WrongMemberShape {
                type_name: self.proxy.mock().descriptor().name.clone(),
                member: member.name.clone(),
                expected,
            })
        }
    }

    fn register(
        self,
        selector: MemberSelector,
        member: &Member,
        arguments: ArgumentsMatcher,
    ) -> Result<ExpectationBuilder, MockError> {
        let mut expectation = InvocationExpectation::new(
            self.cardinality,
            self.proxy.mock().clone(),
            MemberMatcher::new(selector, member),
        );
        expectation.arguments = arguments;

        let handle = ExpectationHandle::new(expectation);

        self.mockery
            .core()
            .lock()
            .add(Node::Leaf(handle.clone()));

        Ok(ExpectationBuilder {
            handle,
            member: member.name.clone(),
        })
    }
}

/// Last step of an expectation: refines the arguments and adds actions.
#[derive(Debug)]
pub struct ExpectationBuilder {
    handle: ExpectationHandle,
    member: String,
}

impl ExpectationBuilder {
    /// Expect the arguments to match the passed matchers or literal values.
    ///
    /// Use `()` for no arguments, a single matcher for one argument or a
    /// tuple for many arguments.
    pub fn with<A: IntoArgMatchers>(self, args: A) -> Self {
        self.handle
            .0
            .lock()
            .arguments
            .set_arguments(args.into_arg_matchers());

        self
    }

    /// Accept any arguments.
    pub fn with_any_arguments(self) -> Self {
        self.handle.0.lock().arguments = ArgumentsMatcher::any();

        self
    }

    /// Expect no arguments.
    pub fn with_no_arguments(self) -> Self {
        self.with(())
    }

    /// Expect the generic type argument `T`. Call it once per type argument.
    pub fn generic<T: ?Sized>(self) -> Self {
        self.generic_matching(crate::call_matcher::type_arg::<T>())
    }

    /// Expect the next generic type argument to match `matcher`.
    pub fn generic_matching<M>(self, matcher: M) -> Self
    where
        M: Matcher<TypeArg> + Send + Sync + 'static,
    {
        let matcher: TypeArgMatcher = Box::new(matcher);

        self.handle
            .0
            .lock()
            .generics
            .get_or_insert_with(GenericArgsMatcher::default)
            .0
            .push(matcher);

        self
    }

    /// Add a matcher that has to accept the whole invocation.
    pub fn matching<M>(self, matcher: M) -> Self
    where
        M: Matcher<Invocation> + Send + Sync + 'static,
    {
        self.handle.0.lock().extra.push(Box::new(matcher));

        self
    }

    /// Expect the assigned value of a property or indexer setter, or the
    /// handler passed to an event accessor, to match `value`.
    ///
    /// # Errors
    /// Returns [`MockError::WrongMemberShape`] if the member does not receive
    /// such a value.
    pub fn to<M: IntoArgMatcher>(self, value: M) -> Result<Self, MockError> {
        let accepted = self
            .handle
            .0
            .lock()
            .arguments
            .set_value(value.into_arg_matcher());

        if !accepted {
            return Err(MockError::WrongMemberShape {
                type_name: self.handle.receiver().descriptor().name.clone(),
                member: self.member.clone(),
                expected: "a setter or an event",
            });
        }

        Ok(self)
    }

    /// Add an action that is executed each time the expectation is invoked.
    pub fn will<A: Action + 'static>(self, action: A) -> Self {
        self.handle.0.lock().actions.push(Arc::new(action));

        self
    }

    /// Add a comment that is shown in the description of the expectation.
    pub fn comment<S: Into<String>>(self, comment: S) -> Self {
        self.handle.0.lock().comment = Some(comment.into());

        self
    }

    /// Get a handle to the declared expectation.
    pub fn handle(&self) -> ExpectationHandle {
        self.handle.clone()
    }
}
