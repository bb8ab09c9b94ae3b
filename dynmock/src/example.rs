//! Contains a generated example for the mocked types.

#![allow(unused)]

use crate::mock;

/// Simple test trait to generate a mocked version for.
pub trait Greeter {
    /// Returns the greeting for `name`.
    fn greet(&self, name: &str) -> String;

    /// Counts the greetings sent so far and stores the result in `count`.
    fn count(&self, count: &mut usize);

    /// Returns a farewell, with a default implementation in the mock.
    fn farewell(&self) -> String;
}

mock! {
    /// Type that implements the [`Greeter`] trait.
    pub struct MockGreeter;

    impl Greeter for MockGreeter {
        fn greet(&self, name: &str) -> String;

        fn count(&self, #[dynmock(out)] count: &mut usize);

        fn farewell(&self) -> String {
            "bye".into()
        }
    }
}
