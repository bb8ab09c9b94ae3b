use crate::invocation::Invocation;
use crate::proxy::MockRef;

use super::{
    child_list, write_header, Actions, Expectation, ExpectationHandle, ExpectationList, Node,
};

/// List of expectations that must be invoked in the order they were added.
///
/// A cursor points to the current expectation. An invocation is accepted if it
/// matches the current expectation, or if the current expectation has been
/// met and the invocation matches the next one. So each invocation skips at
/// most one expectation that has been met.
#[derive(Default)]
pub struct OrderedList {
    children: Vec<Node>,
    cursor: usize,
}

impl OrderedList {
    /// Create a new empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn current(&self) -> Option<&Node> {
        self.children.get(self.cursor)
    }

    fn following(&self) -> Option<&Node> {
        self.children.get(self.cursor + 1)
    }
}

impl Expectation for OrderedList {
    fn matches(&self, invocation: &Invocation) -> bool {
        let Some(current) = self.current() else {
            return false;
        };

        current.matches(invocation)
            || (current.has_been_met() && self.following().is_some_and(|x| x.matches(invocation)))
    }

    fn perform(&mut self, invocation: &Invocation) -> Actions {
        if !self.current().is_some_and(|x| x.matches(invocation)) {
            self.cursor += 1;
        }

        match self.children.get_mut(self.cursor) {
            Some(child) => child.perform(invocation),
            None => panic!("Ordered list does not match the invocation {invocation}"),
        }
    }

    fn is_active(&self) -> bool {
        let Some(current) = self.current() else {
            return false;
        };

        current.is_active()
            || (current.has_been_met() && self.following().is_some_and(Expectation::is_active))
    }

    fn has_been_met(&self) -> bool {
        self.children
            .iter()
            .skip(self.cursor)
            .all(Expectation::has_been_met)
    }

    fn describe_active_to(&self, out: &mut String, depth: usize) {
        write_header(out, depth, "Ordered:");

        for child in self.children.iter().skip(self.cursor) {
            if child.is_active() {
                child.describe_active_to(out, depth + 1);
            }
        }
    }

    fn describe_unmet_to(&self, out: &mut String, depth: usize) {
        write_header(out, depth, "Ordered:");

        for child in self.children.iter().skip(self.cursor) {
            if !child.has_been_met() {
                child.describe_unmet_to(out, depth + 1);
            }
        }
    }

    fn query_expectations_belonging_to(&self, mock: &MockRef, result: &mut Vec<ExpectationHandle>) {
        for child in &self.children {
            child.query_expectations_belonging_to(mock, result);
        }
    }
}

impl ExpectationList for OrderedList {
    fn push(&mut self, node: Node) -> usize {
        self.children.push(node);

        self.children.len() - 1
    }

    fn child_list_mut(&mut self, index: usize) -> &mut dyn ExpectationList {
        child_list(&mut self.children, index)
    }
}
