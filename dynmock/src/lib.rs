//! `dynmock` is a mock object framework that records expected calls on mock
//! objects and checks the actual calls against them while the test runs.
//!
//! Mock types are generated for traits using the [`mock!`] macro, or created
//! at runtime from a [`TypeDescriptor`] as a [`DynamicMock`]. Every call of a
//! mocked member is routed through the [`Mockery`] that created the mock,
//! which finds the matching expectation and executes its actions.

extern crate self as dynmock;

pub mod action;
pub mod builder;
pub mod call_matcher;
pub mod cardinality;
pub mod dynamic;
pub mod error;
pub mod example;
pub mod expectation;
pub mod invocation;
pub mod matcher;
pub mod member;
pub mod mockery;
pub mod proxy;
pub mod types;
pub mod value;

pub use dynmock_macros::mock;
pub use once_cell::sync::Lazy;

pub use action::Action;
pub use cardinality::Cardinality;
pub use dynamic::DynamicMock;
pub use error::{fail, ErrorKind, Fault, MockError};
pub use expectation::ExpectationHandle;
pub use invocation::{Invocation, TypeArg};
pub use matcher::Matcher;
pub use member::{Member, MemberRef, ParamKind, Returns, TypeDescriptor};
pub use mockery::{Mockery, MockeryOptions};
pub use proxy::{
    finish, finish_fallible, write_back, AsProxy, Dispatched, MockRef, MockStyle, Mockable, Proxy,
};
pub use value::{FromValue, ToValue, Value};
