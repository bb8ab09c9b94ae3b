use std::any::{type_name, Any};
use std::fmt::{Debug, Display, Formatter, Result as FmtResult};
use std::sync::Arc;

use super::{ToValue, Value};

/* Object */

/// Opaque rust value stored inside a [`Value::Object`].
///
/// Equality is delegated to the [`PartialEq`] implementation of the wrapped
/// type, the textual representation to its [`Debug`] implementation.
#[derive(Clone)]
pub struct Object(Arc<dyn ObjectValue>);

trait ObjectValue: Send + Sync {
    fn as_any(&self) -> &dyn Any;
    fn eq_dyn(&self, other: &dyn Any) -> bool;
    fn fmt_dyn(&self, f: &mut Formatter<'_>) -> FmtResult;
    fn type_name(&self) -> &'static str;
}

impl<T> ObjectValue for T
where
    T: PartialEq + Debug + Send + Sync + 'static,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn eq_dyn(&self, other: &dyn Any) -> bool {
        other.downcast_ref::<T>().is_some_and(|other| self == other)
    }

    fn fmt_dyn(&self, f: &mut Formatter<'_>) -> FmtResult {
        Debug::fmt(self, f)
    }

    fn type_name(&self) -> &'static str {
        type_name::<T>()
    }
}

impl Object {
    /// Wrap the passed `value`.
    pub fn new<T>(value: T) -> Self
    where
        T: PartialEq + Debug + Send + Sync + 'static,
    {
        Self(Arc::new(value))
    }

    /// Get a reference to the wrapped value if it is of type `T`.
    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.as_any().downcast_ref::<T>()
    }

    /// Name of the wrapped type.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.0.type_name()
    }

    /// Returns `true` if both objects share the same allocation.
    #[must_use]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        Self::ptr_eq(self, other) || self.0.eq_dyn(other.0.as_any())
    }
}

impl Display for Object {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        self.0.fmt_dyn(f)
    }
}

impl Debug for Object {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        self.0.fmt_dyn(f)
    }
}

/* Record */

/// Structured value with named fields.
///
/// Records are the values the field matcher can look into.
#[derive(Default, Debug, Clone)]
pub struct Record {
    type_name: String,
    fields: Vec<(String, Value)>,
}

impl Record {
    /// Create a new empty record of the passed type.
    pub fn new<S: Into<String>>(type_name: S) -> Self {
        Self {
            type_name: type_name.into(),
            fields: Vec::new(),
        }
    }

    /// Add or replace the field `name`.
    #[must_use]
    pub fn with<S, V>(mut self, name: S, value: V) -> Self
    where
        S: Into<String>,
        V: ToValue,
    {
        self.set(name, value.to_value());

        self
    }

    /// Add or replace the field `name`.
    pub fn set<S: Into<String>>(&mut self, name: S, value: Value) {
        let name = name.into();

        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some((_, v)) => *v = value,
            None => self.fields.push((name, value)),
        }
    }

    /// Get the value of the field `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, value)| value)
    }

    /// Name of the type this record describes.
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Iterator over all fields of the record.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v))
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.type_name == other.type_name
            && self.fields.len() == other.fields.len()
            && self
                .fields
                .iter()
                .all(|(name, value)| other.get(name) == Some(value))
    }
}

impl Display for Record {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} {{", self.type_name)?;

        for (i, (name, value)) in self.fields.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, " {name}: {value}")?;
        }

        write!(f, " }}")
    }
}

/* Handler */

type HandlerFn = dyn Fn(&[Value]) + Send + Sync;

/// Event handler that can be added to or removed from an event of a mock.
///
/// Handlers are compared by identity: a clone of a handler is the same
/// handler, two handlers created from equal closures are not.
#[derive(Clone)]
pub struct Handler {
    name: Option<String>,
    func: Arc<HandlerFn>,
}

impl Handler {
    /// Create a new handler from the passed closure.
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(&[Value]) + Send + Sync + 'static,
    {
        Self {
            name: None,
            func: Arc::new(func),
        }
    }

    /// Set the name that is used to describe the handler.
    #[must_use]
    pub fn named<S: Into<String>>(mut self, name: S) -> Self {
        self.name = Some(name.into());

        self
    }

    /// Invoke the handler with the passed event arguments.
    pub fn call(&self, args: &[Value]) {
        (self.func)(args);
    }

    /// Returns `true` if both handlers refer to the same closure.
    #[must_use]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.func, &b.func)
    }
}

impl Display for Handler {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match &self.name {
            Some(name) => write!(f, "<{name}>"),
            None => write!(f, "<handler>"),
        }
    }
}

impl Debug for Handler {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(self, f)
    }
}
