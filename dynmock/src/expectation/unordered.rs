use crate::invocation::Invocation;
use crate::proxy::MockRef;

use super::{
    child_list, write_header, Actions, Expectation, ExpectationHandle, ExpectationList, Node,
};

/// List of expectations that may be invoked in any order.
#[derive(Default)]
pub struct UnorderedList {
    children: Vec<Node>,
}

impl UnorderedList {
    /// Create a new empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Expectation for UnorderedList {
    fn matches(&self, invocation: &Invocation) -> bool {
        self.children.iter().any(|x| x.matches(invocation))
    }

    fn perform(&mut self, invocation: &Invocation) -> Actions {
        match self.children.iter_mut().find(|x| x.matches(invocation)) {
            Some(child) => child.perform(invocation),
            None => panic!("Unordered list does not match the invocation {invocation}"),
        }
    }

    fn is_active(&self) -> bool {
        self.children.iter().any(Expectation::is_active)
    }

    fn has_been_met(&self) -> bool {
        self.children.iter().all(Expectation::has_been_met)
    }

    fn describe_active_to(&self, out: &mut String, depth: usize) {
        write_header(out, depth, "Unordered:");

        for child in &self.children {
            if child.is_active() {
                child.describe_active_to(out, depth + 1);
            }
        }
    }

    fn describe_unmet_to(&self, out: &mut String, depth: usize) {
        write_header(out, depth, "Unordered:");

        for child in &self.children {
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

impl ExpectationList for UnorderedList {
    fn push(&mut self, node: Node) -> usize {
        self.children.push(node);

        self.children.len() - 1
    }

    fn child_list_mut(&mut self, index: usize) -> &mut dyn ExpectationList {
        child_list(&mut self.children, index)
    }
}
