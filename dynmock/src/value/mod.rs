//! The [`value`](self) module defines the dynamic [`Value`] that carries
//! arguments, results and event payloads through the dispatch engine.

mod convert;
mod object;

use std::cmp::Ordering;
use std::fmt::{Debug, Display, Formatter, Result as FmtResult};

use crate::proxy::MockRef;

pub use convert::{FromValue, ToValue};
pub use object::{Handler, Object, Record};

/// Dynamically typed value that is passed to and returned from a mocked member.
#[derive(Clone)]
pub enum Value {
    /// Absence of a value. Returned by members without a result.
    Null,

    /// A boolean.
    Bool(bool),

    /// Any signed integer.
    Int(i64),

    /// Any unsigned integer.
    UInt(u64),

    /// Any floating point number.
    Float(f64),

    /// A single character.
    Char(char),

    /// A string.
    Str(String),

    /// Ordered sequence of values. Equality is element wise.
    List(Vec<Value>),

    /// Key/value pairs. Equality ignores the order of the entries.
    Map(Vec<(Value, Value)>),

    /// Named fields of a structured value.
    Record(Record),

    /// Opaque rust value that was registered with [`value_type!`](crate::value_type).
    Object(Object),

    /// Reference to a mock object.
    Mock(MockRef),

    /// Event handler that may be attached to a mock.
    Handler(Handler),

    /// Placeholder seen by matchers at output-only argument positions.
    Out,
}

impl Value {
    /// Returns `true` if this is [`Value::Null`].
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the string slice if this is a [`Value::Str`].
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the element slice if this is a [`Value::List`].
    #[must_use]
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the handler if this is a [`Value::Handler`].
    #[must_use]
    pub fn as_handler(&self) -> Option<&Handler> {
        match self {
            Self::Handler(h) => Some(h),
            _ => None,
        }
    }

    /// Read a named field of a [`Value::Record`], or the entry with a string
    /// key of a [`Value::Map`].
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        match self {
            Self::Record(record) => record.get(name),
            Self::Map(entries) => entries
                .iter()
                .find(|(key, _)| key.as_str() == Some(name))
                .map(|(_, value)| value),
            _ => None,
        }
    }

    /// Returns `true` if both values refer to the same allocation.
    ///
    /// Only reference-like values (objects, mocks and handlers) have an
    /// identity, everything else is never the same as anything.
    #[must_use]
    pub fn is_same(&self, other: &Value) -> bool {
        match (self, other) {
            (Self::Object(a), Self::Object(b)) => Object::ptr_eq(a, b),
            (Self::Mock(a), Self::Mock(b)) => a == b,
            (Self::Handler(a), Self::Handler(b)) => Handler::ptr_eq(a, b),
            _ => false,
        }
    }

    /// String representation of the value without any quoting.
    #[must_use]
    pub fn to_plain_string(&self) -> String {
        match self {
            Self::Str(s) => s.clone(),
            Self::Char(c) => c.to_string(),
            x => x.to_string(),
        }
    }

    fn number(&self) -> Option<Number> {
        match self {
            Self::Int(x) => Some(Number::Integer(i128::from(*x))),
            Self::UInt(x) => Some(Number::Integer(i128::from(*x))),
            Self::Float(x) => Some(Number::Float(*x)),
            _ => None,
        }
    }
}

#[derive(Clone, Copy)]
enum Number {
    Integer(i128),
    Float(f64),
}

impl Number {
    #[allow(clippy::cast_precision_loss)]
    fn as_f64(self) -> f64 {
        match self {
            Self::Integer(x) => x as f64,
            Self::Float(x) => x,
        }
    }

    fn partial_cmp(self, other: Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => Some(a.cmp(&b)),
            (a, b) => a.as_f64().partial_cmp(&b.as_f64()),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) | (Self::Out, Self::Out) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Char(a), Self::Char(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::List(a), Self::List(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(a, b)| a == b)
            }
            (Self::Map(a), Self::Map(b)) => same_entries(a, b),
            (Self::Record(a), Self::Record(b)) => a == b,
            (Self::Object(a), Self::Object(b)) => a == b,
            (Self::Mock(a), Self::Mock(b)) => a == b,
            (Self::Handler(a), Self::Handler(b)) => Handler::ptr_eq(a, b),
            (a, b) => match (a.number(), b.number()) {
                (Some(a), Some(b)) => a.partial_cmp(b) == Some(Ordering::Equal),
                _ => false,
            },
        }
    }
}

/// Compares two maps as multisets of entries: every entry of `a` is paired
/// with a distinct equal entry of `b`.
fn same_entries(a: &[(Value, Value)], b: &[(Value, Value)]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut used = vec![false; b.len()];

    a.iter().all(|entry| {
        let found = b
            .iter()
            .enumerate()
            .position(|(i, other)| !used[i] && other == entry);

        match found {
            Some(i) => {
                used[i] = true;

                true
            }
            None => false,
        }
    })
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            return Some(Ordering::Equal);
        }

        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a.partial_cmp(b),
            (Self::Char(a), Self::Char(b)) => a.partial_cmp(b),
            (Self::Str(a), Self::Str(b)) => a.partial_cmp(b),
            (a, b) => match (a.number(), b.number()) {
                (Some(a), Some(b)) => a.partial_cmp(b),
                _ => None,
            },
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool(x) => write!(f, "{x}"),
            Self::Int(x) => write!(f, "{x}"),
            Self::UInt(x) => write!(f, "{x}"),
            Self::Float(x) => write!(f, "{x:?}"),
            Self::Char(x) => write!(f, "{x:?}"),
            Self::Str(x) => write!(f, "{x:?}"),
            Self::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Self::Map(entries) => {
                write!(f, "{{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                write!(f, "}}")
            }
            Self::Record(record) => write!(f, "{record}"),
            Self::Object(object) => write!(f, "{object}"),
            Self::Mock(mock) => write!(f, "{mock}"),
            Self::Handler(handler) => write!(f, "{handler}"),
            Self::Out => write!(f, "out"),
        }
    }
}

impl Debug for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(self, f)
    }
}
