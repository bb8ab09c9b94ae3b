//! The [`expectation`](self) module contains the [`Expectation`] contract and
//! its implementations: single invocation expectations and the ordered and
//! unordered lists that group them.

mod invocation;
mod ordered;
mod unordered;

use std::sync::Arc;

use crate::action::Action;
use crate::invocation::Invocation;
use crate::proxy::MockRef;

pub use invocation::{ExpectationHandle, InvocationExpectation};
pub use ordered::OrderedList;
pub use unordered::UnorderedList;

/// Actions of an expectation that have to be executed for an invocation.
pub type Actions = Vec<Arc<dyn Action>>;

/// Defines an expected invocation, or a group of expected invocations.
pub trait Expectation: Send {
    /// Returns `true` if the invocation is accepted by this expectation.
    fn matches(&self, invocation: &Invocation) -> bool;

    /// Record the invocation and return the actions to execute for it.
    ///
    /// Must only be called directly after [`matches`](Expectation::matches)
    /// returned `true` for the same invocation.
    fn perform(&mut self, invocation: &Invocation) -> Actions;

    /// Returns `true` if the expectation accepts at least one more call.
    fn is_active(&self) -> bool;

    /// Returns `true` if the expectation received the required number of calls.
    fn has_been_met(&self) -> bool;

    /// Write the active expectations to `out`, indented by `depth`.
    fn describe_active_to(&self, out: &mut String, depth: usize);

    /// Write the expectations that are not met to `out`, indented by `depth`.
    fn describe_unmet_to(&self, out: &mut String, depth: usize);

    /// Collect all invocation expectations that belong to `mock`.
    fn query_expectations_belonging_to(&self, mock: &MockRef, result: &mut Vec<ExpectationHandle>);
}

/// Element of an expectation list.
pub enum Node {
    /// A single expected invocation.
    Leaf(ExpectationHandle),

    /// Nested ordered list.
    Ordered(OrderedList),

    /// Nested unordered list.
    Unordered(UnorderedList),
}

impl Node {
    fn as_expectation(&self) -> &dyn Expectation {
        match self {
            Self::Leaf(x) => x,
            Self::Ordered(x) => x,
            Self::Unordered(x) => x,
        }
    }

    fn as_expectation_mut(&mut self) -> &mut dyn Expectation {
        match self {
            Self::Leaf(x) => x,
            Self::Ordered(x) => x,
            Self::Unordered(x) => x,
        }
    }

    fn as_list_mut(&mut self) -> Option<&mut dyn ExpectationList> {
        match self {
            Self::Leaf(_) => None,
            Self::Ordered(x) => Some(x),
            Self::Unordered(x) => Some(x),
        }
    }
}

impl Expectation for Node {
    fn matches(&self, invocation: &Invocation) -> bool {
        self.as_expectation().matches(invocation)
    }

    fn perform(&mut self, invocation: &Invocation) -> Actions {
        self.as_expectation_mut().perform(invocation)
    }

    fn is_active(&self) -> bool {
        self.as_expectation().is_active()
    }

    fn has_been_met(&self) -> bool {
        self.as_expectation().has_been_met()
    }

    fn describe_active_to(&self, out: &mut String, depth: usize) {
        self.as_expectation().describe_active_to(out, depth);
    }

    fn describe_unmet_to(&self, out: &mut String, depth: usize) {
        self.as_expectation().describe_unmet_to(out, depth);
    }

    fn query_expectations_belonging_to(&self, mock: &MockRef, result: &mut Vec<ExpectationHandle>) {
        self.as_expectation()
            .query_expectations_belonging_to(mock, result);
    }
}

/// A list of expectations that new expectations can be added to.
pub trait ExpectationList: Expectation {
    /// Add a new element to the end of the list and return its index.
    fn push(&mut self, node: Node) -> usize;

    /// Get the nested list at `index`.
    ///
    /// # Panics
    /// Panics if the element at `index` is not a list.
    fn child_list_mut(&mut self, index: usize) -> &mut dyn ExpectationList;
}

fn child_list(children: &mut [Node], index: usize) -> &mut dyn ExpectationList {
    children
        .get_mut(index)
        .and_then(Node::as_list_mut)
        .expect("Invalid ordering scope")
}

fn indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str("  ");
    }
}

fn write_header(out: &mut String, depth: usize, header: &str) {
    if depth > 0 {
        indent(out, depth);
        out.push_str(header);
        out.push('\n');
    }
}
