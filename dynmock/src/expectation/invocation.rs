use std::fmt::{Display, Formatter, Result as FmtResult, Write};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::action::{self, Action};
use crate::call_matcher::{ArgumentsMatcher, GenericArgsMatcher, MemberMatcher};
use crate::cardinality::{times, Cardinality};
use crate::invocation::Invocation;
use crate::matcher::{Description, Matcher};
use crate::member::CallShape;
use crate::proxy::MockRef;
use crate::value::Value;

use super::{indent, Actions, Expectation};

/// Matcher for the whole invocation that is checked in addition to the
/// member and the arguments.
pub type InvocationMatcher = Box<dyn Matcher<Invocation> + Send + Sync>;

/// Expectation for a single member of a single mock.
pub struct InvocationExpectation {
    pub(crate) cardinality: Cardinality,
    pub(crate) receiver: MockRef,
    pub(crate) member: MemberMatcher,
    pub(crate) generics: Option<GenericArgsMatcher>,
    pub(crate) arguments: ArgumentsMatcher,
    pub(crate) extra: Vec<InvocationMatcher>,
    pub(crate) actions: Vec<Arc<dyn Action>>,
    pub(crate) comment: Option<String>,
    call_count: usize,
}

impl InvocationExpectation {
    /// Create a new expectation that expects `cardinality` calls of `member`
    /// on `receiver` with any arguments.
    #[must_use]
    pub fn new(cardinality: Cardinality, receiver: MockRef, member: MemberMatcher) -> Self {
        Self {
            cardinality,
            receiver,
            member,
            generics: None,
            arguments: ArgumentsMatcher::any(),
            extra: Vec::new(),
            actions: Vec::new(),
            comment: None,
            call_count: 0,
        }
    }

    /// Number of calls this expectation received.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.call_count
    }

    /// Returns `true` if the expectation accepts one more call.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.cardinality.is_active(self.call_count)
    }

    /// Returns `true` if the expectation received the required number of calls.
    #[must_use]
    pub fn has_been_met(&self) -> bool {
        self.cardinality.has_been_met(self.call_count)
    }

    /// Returns `true` if the invocation is accepted by this expectation.
    #[must_use]
    pub fn matches(&self, invocation: &Invocation) -> bool {
        self.is_active()
            && *invocation.receiver() == self.receiver
            && self.member.matches(invocation)
            && self.generics.as_ref().map_or(true, |g| g.matches(invocation))
            && self.arguments.matches(invocation)
            && self.extra.iter().all(|m| m.matches(invocation))
    }

    /// Record the invocation.
    ///
    /// Handlers passed to event accessors are added to or removed from the
    /// event table of the receiver.
    pub fn perform(&mut self, invocation: &Invocation) -> Actions {
        self.call_count += 1;

        let handler = match invocation.parameter(0) {
            Ok(Value::Handler(handler)) => Some(handler),
            _ => None,
        };

        match (invocation.member().shape(), handler) {
            (CallShape::EventAdd(event), Some(handler)) => {
                invocation.receiver().add_handler(event, handler.clone());
            }
            (CallShape::EventRemove(event), Some(handler)) => {
                invocation.receiver().remove_handler(event, handler);
            }
            _ => (),
        }

        self.actions.clone()
    }
}

impl Display for InvocationExpectation {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}: {}", self.cardinality, self.receiver)?;
        self.member.fmt(f)?;

        if let Some(generics) = &self.generics {
            generics.fmt(f)?;
        }

        self.arguments.fmt(f)?;

        for matcher in &self.extra {
            write!(f, " where {}", Description(matcher))?;
        }

        for (i, action) in self.actions.iter().enumerate() {
            if i == 0 {
                write!(f, ", will ")?;
            } else {
                write!(f, ", ")?;
            }

            write!(f, "{}", action::Description(&**action))?;
        }

        if let Some(comment) = &self.comment {
            write!(f, " ({comment})")?;
        }

        write!(f, " [called {}]", times(self.call_count))?;

        if !self.is_active() {
            write!(f, " (inactive)")?;
        }

        Ok(())
    }
}

/// Shared handle of an [`InvocationExpectation`].
///
/// The handle is returned by the expectation builder and can be used to
/// inspect the state of the expectation while the test runs.
#[must_use]
#[derive(Clone)]
pub struct ExpectationHandle(pub(crate) Arc<Mutex<InvocationExpectation>>);

impl ExpectationHandle {
    pub(crate) fn new(expectation: InvocationExpectation) -> Self {
        Self(Arc::new(Mutex::new(expectation)))
    }

    /// Number of calls the expectation received.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.0.lock().call_count()
    }

    /// Returns `true` if the expectation accepts one more call.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.0.lock().is_active()
    }

    /// Returns `true` if the expectation received the required number of calls.
    #[must_use]
    pub fn has_been_met(&self) -> bool {
        self.0.lock().has_been_met()
    }

    /// The mock this expectation belongs to.
    #[must_use]
    pub fn receiver(&self) -> MockRef {
        self.0.lock().receiver.clone()
    }

    fn write_line(&self, out: &mut String, depth: usize) {
        indent(out, depth);
        let _ = writeln!(out, "{}", self.0.lock());
    }
}

impl Expectation for ExpectationHandle {
    fn matches(&self, invocation: &Invocation) -> bool {
        self.0.lock().matches(invocation)
    }

    fn perform(&mut self, invocation: &Invocation) -> Actions {
        self.0.lock().perform(invocation)
    }

    fn is_active(&self) -> bool {
        ExpectationHandle::is_active(self)
    }

    fn has_been_met(&self) -> bool {
        ExpectationHandle::has_been_met(self)
    }

    fn describe_active_to(&self, out: &mut String, depth: usize) {
        self.write_line(out, depth);
    }

    fn describe_unmet_to(&self, out: &mut String, depth: usize) {
        self.write_line(out, depth);
    }

    fn query_expectations_belonging_to(&self, mock: &MockRef, result: &mut Vec<ExpectationHandle>) {
        if self.0.lock().receiver == *mock {
            result.push(self.clone());
        }
    }
}

impl Display for ExpectationHandle {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&*self.0.lock(), f)
    }
}

impl std::fmt::Debug for ExpectationHandle {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "ExpectationHandle({self})")
    }
}
