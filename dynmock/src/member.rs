//! The [`member`](self) module describes the members of a mocked type.
//!
//! A [`TypeDescriptor`] lists the interfaces (traits) a mock implements and
//! every [`Member`] those interfaces declare. Descriptors are generated by the
//! [`mock!`](crate::mock) macro or built by hand for a
//! [`DynamicMock`](crate::DynamicMock).

use std::any::type_name;
use std::collections::HashSet;
use std::fmt::{Debug, Display, Formatter, Result as FmtResult};
use std::sync::Arc;

use convert_case::{Case, Casing};

use crate::error::MockError;
use crate::value::{FromValue, Value};

/// Names of the identity operations a mocked interface must not re-declare.
const IDENTITY_MEMBERS: &[&str] = &["to_string", "fmt", "eq", "ne", "hash"];

/// Direction of a parameter.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum ParamKind {
    /// Value is passed by the caller and can not be changed.
    In,

    /// Value is produced by the member, the caller's value is not read.
    Out,

    /// Value is passed by the caller and may be replaced by the member.
    InOut,
}

/// Parameter of a [`Member`].
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Param {
    pub name: String,
    pub type_name: String,
    pub kind: ParamKind,
}

/// Return contract of a [`Member`].
#[derive(Clone)]
pub struct Returns {
    type_name: String,
    void: bool,
    accepts: Option<fn(&Value) -> bool>,
    default: fn() -> Option<Value>,
}

impl Returns {
    /// Contract of a member without result.
    #[must_use]
    pub fn void() -> Self {
        Self {
            type_name: "()".into(),
            void: true,
            accepts: Some(Value::is_null),
            default: || Some(Value::Null),
        }
    }

    /// Contract of a member returning `T`.
    #[must_use]
    pub fn of<T: FromValue>() -> Self {
        Self {
            type_name: type_name::<T>().into(),
            void: false,
            accepts: Some(T::accepts),
            default: T::default_value,
        }
    }

    /// Contract of a member whose return type can not be checked, for example
    /// because it depends on a generic parameter of the member.
    #[must_use]
    pub fn unchecked<S: Into<String>>(type_name: S) -> Self {
        Self {
            type_name: type_name.into(),
            void: false,
            accepts: None,
            default: || None,
        }
    }

    /// Name of the returned type.
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Returns `true` if the member has no result.
    #[must_use]
    pub fn is_void(&self) -> bool {
        self.void
    }

    /// Returns `true` if `value` is a valid result for this contract.
    #[must_use]
    pub fn accepts(&self, value: &Value) -> bool {
        self.accepts.map_or(true, |accepts| accepts(value))
    }

    /// Default result used by lenient mocks.
    #[must_use]
    pub fn default_value(&self) -> Option<Value> {
        (self.default)()
    }
}

impl PartialEq for Returns {
    fn eq(&self, other: &Self) -> bool {
        self.type_name == other.type_name
            && self.void == other.void
            && self.accepts.is_some() == other.accepts.is_some()
    }
}

impl Debug for Returns {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Returns")
            .field("type_name", &self.type_name)
            .field("void", &self.void)
            .field("checked", &self.accepts.is_some())
            .finish()
    }
}

/// Shape of a member, derived from its naming convention.
///
/// Properties, indexers and events are ordinary members whose names follow
/// the `get_`/`set_`, `get_item`/`set_item` and `add_`/`remove_` conventions.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum CallShape<'a> {
    /// Ordinary method.
    Method,

    /// Getter of the named property.
    PropertyGet(&'a str),

    /// Setter of the named property.
    PropertySet(&'a str),

    /// Getter of the indexer.
    IndexGet,

    /// Setter of the indexer.
    IndexSet,

    /// Adds a handler to the named event.
    EventAdd(&'a str),

    /// Removes a handler from the named event.
    EventRemove(&'a str),
}

pub(crate) const INDEX_GET: &str = "get_item";
pub(crate) const INDEX_SET: &str = "set_item";

/// Member (method, property accessor, indexer or event accessor) of a mocked type.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub interface: String,
    pub name: String,
    pub params: Vec<Param>,
    pub generics: Vec<String>,
    pub returns: Returns,
    pub concrete: bool,
}

impl Member {
    /// Create a new member without parameters and without result.
    pub fn new<I, N>(interface: I, name: N) -> Self
    where
        I: Into<String>,
        N: Into<String>,
    {
        Self {
            interface: interface.into(),
            name: name.into(),
            params: Vec::new(),
            generics: Vec::new(),
            returns: Returns::void(),
            concrete: false,
        }
    }

    /// Add a parameter.
    #[must_use]
    pub fn param<N, T>(mut self, name: N, type_name: T, kind: ParamKind) -> Self
    where
        N: Into<String>,
        T: Into<String>,
    {
        self.params.push(Param {
            name: name.into(),
            type_name: type_name.into(),
            kind,
        });

        self
    }

    /// Add a generic type parameter.
    #[must_use]
    pub fn generic<N: Into<String>>(mut self, name: N) -> Self {
        self.generics.push(name.into());

        self
    }

    /// Set the return contract.
    #[must_use]
    pub fn returns(mut self, returns: Returns) -> Self {
        self.returns = returns;

        self
    }

    /// Mark the member as having a real implementation.
    #[must_use]
    pub fn concrete(mut self) -> Self {
        self.concrete = true;

        self
    }

    /// Get the shape of this member.
    #[must_use]
    pub fn shape(&self) -> CallShape<'_> {
        let name = self.name.as_str();
        let params = self.params.len();
        let takes_handler = params == 1 && self.params[0].type_name.ends_with("Handler");

        if name == INDEX_GET && params > 0 {
            CallShape::IndexGet
        } else if name == INDEX_SET && params > 1 {
            CallShape::IndexSet
        } else if let Some(property) = name.strip_prefix("get_").filter(|_| params == 0) {
            CallShape::PropertyGet(property)
        } else if let Some(property) = name
            .strip_prefix("set_")
            .filter(|_| params == 1 && self.returns.is_void())
        {
            CallShape::PropertySet(property)
        } else if let Some(event) = name.strip_prefix("add_").filter(|_| takes_handler) {
            CallShape::EventAdd(event)
        } else if let Some(event) = name.strip_prefix("remove_").filter(|_| takes_handler) {
            CallShape::EventRemove(event)
        } else {
            CallShape::Method
        }
    }

    /// Get the index of the parameter called `name`.
    #[must_use]
    pub fn param_index(&self, name: &str) -> Option<usize> {
        self.params.iter().position(|p| p.name == name)
    }

    /// Returns `true` if `member` refers to this member.
    #[must_use]
    pub fn is(&self, member: MemberRef) -> bool {
        self.interface == member.interface && self.name == member.name
    }
}

impl Display for Member {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}::{}", self.interface, self.name)
    }
}

/// Type-safe reference to a member of an interface.
///
/// The [`mock!`](crate::mock) macro generates one constant per member, for
/// example `MockWarehouse::GET_PRODUCTS`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct MemberRef {
    pub interface: &'static str,
    pub name: &'static str,
}

impl MemberRef {
    /// Create a new member reference.
    #[must_use]
    pub const fn new(interface: &'static str, name: &'static str) -> Self {
        Self { interface, name }
    }
}

impl Display for MemberRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}::{}", self.interface, self.name)
    }
}

/// Selects a member either by name or by [`MemberRef`].
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum MemberSelector {
    /// Late bound selection by name; matches the member of any interface.
    Name(String),

    /// Selection of the member of one specific interface.
    Ref(MemberRef),
}

impl MemberSelector {
    /// Returns `true` if `member` is selected.
    #[must_use]
    pub fn selects(&self, member: &Member) -> bool {
        match self {
            Self::Name(name) => member.name == *name,
            Self::Ref(member_ref) => member.is(*member_ref),
        }
    }

    /// Name of the selected member.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Name(name) => name,
            Self::Ref(member_ref) => member_ref.name,
        }
    }
}

impl From<&str> for MemberSelector {
    fn from(value: &str) -> Self {
        Self::Name(value.into())
    }
}

impl From<String> for MemberSelector {
    fn from(value: String) -> Self {
        Self::Name(value)
    }
}

impl From<MemberRef> for MemberSelector {
    fn from(value: MemberRef) -> Self {
        Self::Ref(value)
    }
}

/// Describes a mocked type: its name, the interfaces it implements and their members.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDescriptor {
    pub name: String,
    pub interfaces: Vec<String>,
    pub members: Vec<Arc<Member>>,
}

impl TypeDescriptor {
    /// Create a new descriptor without interfaces.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            interfaces: Vec::new(),
            members: Vec::new(),
        }
    }

    /// Add an implemented interface.
    #[must_use]
    pub fn interface<S: Into<String>>(mut self, name: S) -> Self {
        self.interfaces.push(name.into());

        self
    }

    /// Add a member.
    #[must_use]
    pub fn member(mut self, member: Member) -> Self {
        self.members.push(Arc::new(member));

        self
    }

    /// Find the member selected by `selector`.
    #[must_use]
    pub fn find(&self, selector: &MemberSelector) -> Option<&Arc<Member>> {
        self.members.iter().find(|m| selector.selects(m))
    }

    /// Key of the proxy cache: the ordered, de-duplicated interface names.
    #[must_use]
    pub fn cache_key(&self) -> Vec<String> {
        let mut key = self.interfaces.clone();
        key.sort();
        key.dedup();

        key
    }

    /// Name a mock of this type gets if no name is assigned: the first
    /// interface in snake case.
    #[must_use]
    pub fn default_mock_name(&self) -> String {
        self.interfaces
            .first()
            .unwrap_or(&self.name)
            .to_case(Case::Snake)
    }

    /// Check that the described type can be mocked.
    ///
    /// # Errors
    /// Returns [`MockError::InvalidMockType`] if the type implements no
    /// interface, lists an interface twice, declares the same member in two
    /// interfaces or re-declares one of the identity operations.
    pub fn validate(&self) -> Result<(), MockError> {
        let invalid = |reason: String| MockError::InvalidMockType {
            type_name: self.name.clone(),
            reason,
        };

        if self.interfaces.is_empty() {
            return Err(invalid("no interface to mock".into()));
        }

        let mut interfaces = HashSet::new();
        for interface in &self.interfaces {
            if !interfaces.insert(interface.as_str()) {
                return Err(invalid(format!("interface `{interface}` is listed twice")));
            }
        }

        let mut names = HashSet::new();
        for member in &self.members {
            if !interfaces.contains(member.interface.as_str()) {
                return Err(invalid(format!(
                    "member `{member}` belongs to an interface that is not implemented"
                )));
            }

            if IDENTITY_MEMBERS.contains(&member.name.as_str()) {
                return Err(invalid(format!(
                    "member `{member}` re-declares an identity operation"
                )));
            }

            if !names.insert(member.name.as_str()) {
                return Err(invalid(format!(
                    "member `{}` is declared by more than one interface",
                    member.name
                )));
            }
        }

        Ok(())
    }
}
