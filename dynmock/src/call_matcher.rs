//! The [`call_matcher`](self) module contains the matchers that check an
//! [`Invocation`] as a whole: the called member, the list of arguments and the
//! generic type arguments.

use std::fmt::{Formatter, Result as FmtResult};

use crate::invocation::{Invocation, TypeArg};
use crate::matcher::{any, ArgMatcher, IntoArgMatcher, Matcher};
use crate::member::{CallShape, Member, MemberSelector};

/* MemberMatcher */

/// Matches the member of an invocation, either by name or by a [`MemberRef`](crate::MemberRef).
#[derive(Debug, Clone)]
pub struct MemberMatcher {
    selector: MemberSelector,
    display: String,
}

impl MemberMatcher {
    /// Create a matcher for the passed `member`.
    ///
    /// The member is used to render the description according to its shape.
    #[must_use]
    pub fn new(selector: MemberSelector, member: &Member) -> Self {
        let display = match member.shape() {
            CallShape::Method => format!(".{}", member.name),
            CallShape::PropertyGet(name)
            | CallShape::PropertySet(name)
            | CallShape::EventAdd(name)
            | CallShape::EventRemove(name) => format!(".{name}"),
            CallShape::IndexGet | CallShape::IndexSet => String::new(),
        };

        Self { selector, display }
    }
}

impl Matcher<Invocation> for MemberMatcher {
    fn matches(&self, value: &Invocation) -> bool {
        self.selector.selects(value.member())
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.display)
    }
}

/* ArgumentsMatcher */

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
enum ArgShape {
    Call,
    Getter,
    Setter,
    IndexGet,
    IndexSet,
    EventAdd,
    EventRemove,
}

/// Matches the arguments of an invocation.
///
/// The number of arguments must be equal to the number of matchers, and each
/// matcher must accept the argument at its position. Output-only arguments
/// are represented by [`Value::Out`](crate::Value::Out), so they are matched
/// by [`out`](crate::matcher::out) or [`any`].
pub struct ArgumentsMatcher {
    shape: ArgShape,
    matchers: Option<Vec<ArgMatcher>>,
}

impl ArgumentsMatcher {
    /// Accepts any arguments.
    #[must_use]
    pub fn any() -> Self {
        Self {
            shape: ArgShape::Call,
            matchers: None,
        }
    }

    /// Accepts the arguments matched by `matchers`.
    #[must_use]
    pub fn list(matchers: Vec<ArgMatcher>) -> Self {
        Self {
            shape: ArgShape::Call,
            matchers: Some(matchers),
        }
    }

    /// Matcher for a property getter.
    #[must_use]
    pub fn getter() -> Self {
        Self {
            shape: ArgShape::Getter,
            matchers: Some(Vec::new()),
        }
    }

    /// Matcher for a property setter that accepts any value.
    #[must_use]
    pub fn setter() -> Self {
        Self {
            shape: ArgShape::Setter,
            matchers: None,
        }
    }

    /// Matcher for an indexer getter.
    #[must_use]
    pub fn index_get(index: Vec<ArgMatcher>) -> Self {
        Self {
            shape: ArgShape::IndexGet,
            matchers: Some(index),
        }
    }

    /// Matcher for an indexer setter that accepts any value.
    ///
    /// The last matcher of the list is the matcher of the assigned value.
    #[must_use]
    pub fn index_set(mut index: Vec<ArgMatcher>) -> Self {
        index.push(any().into_arg_matcher());

        Self {
            shape: ArgShape::IndexSet,
            matchers: Some(index),
        }
    }

    /// Matcher for adding a handler to an event.
    #[must_use]
    pub fn event_add() -> Self {
        Self {
            shape: ArgShape::EventAdd,
            matchers: None,
        }
    }

    /// Matcher for removing a handler from an event.
    #[must_use]
    pub fn event_remove() -> Self {
        Self {
            shape: ArgShape::EventRemove,
            matchers: None,
        }
    }

    /// Replace the argument matchers.
    ///
    /// For indexer setters only the index matchers are replaced.
    pub fn set_arguments(&mut self, mut matchers: Vec<ArgMatcher>) {
        if self.shape == ArgShape::IndexSet {
            if let Some(value) = self.matchers.as_mut().and_then(Vec::pop) {
                matchers.push(value);
            }
        }

        self.matchers = Some(matchers);
    }

    /// Replace the matcher of the assigned value of a setter, or the matcher
    /// of the handler of an event.
    ///
    /// Returns `false` if the shape has no such value.
    pub fn set_value(&mut self, matcher: ArgMatcher) -> bool {
        match self.shape {
            ArgShape::Setter | ArgShape::EventAdd | ArgShape::EventRemove => {
                self.matchers = Some(vec![matcher]);

                true
            }
            ArgShape::IndexSet => {
                let matchers = self.matchers.get_or_insert_with(Vec::new);
                matchers.pop();
                matchers.push(matcher);

                true
            }
            ArgShape::Call | ArgShape::Getter | ArgShape::IndexGet => false,
        }
    }

    fn fmt_list(f: &mut Formatter<'_>, matchers: &[ArgMatcher]) -> FmtResult {
        for (i, matcher) in matchers.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }

            matcher.fmt(f)?;
        }

        Ok(())
    }

    fn fmt_value(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self.matchers.as_deref().and_then(<[_]>::last) {
            Some(matcher) => matcher.fmt(f),
            None => write!(f, "anything"),
        }
    }
}

impl Matcher<Invocation> for ArgumentsMatcher {
    fn matches(&self, value: &Invocation) -> bool {
        let Some(matchers) = &self.matchers else {
            return true;
        };

        matchers.len() == value.len()
            && matchers
                .iter()
                .enumerate()
                .all(|(i, m)| m.matches(value.argument_for_matching(i)))
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match (self.shape, &self.matchers) {
            (ArgShape::Call, None) => write!(f, "(any arguments)"),
            (ArgShape::Call, Some(matchers)) => {
                write!(f, "(")?;
                Self::fmt_list(f, matchers)?;
                write!(f, ")")
            }
            (ArgShape::Getter, _) => Ok(()),
            (ArgShape::Setter, _) => {
                write!(f, " = ")?;
                self.fmt_value(f)
            }
            (ArgShape::IndexGet, None) => write!(f, "[any arguments]"),
            (ArgShape::IndexGet, Some(matchers)) => {
                write!(f, "[")?;
                Self::fmt_list(f, matchers)?;
                write!(f, "]")
            }
            (ArgShape::IndexSet, None) => write!(f, "[any arguments] = anything"),
            (ArgShape::IndexSet, Some(matchers)) => {
                let index = matchers.split_last().map_or(&[][..], |(_, index)| index);

                write!(f, "[")?;
                Self::fmt_list(f, index)?;
                write!(f, "] = ")?;
                self.fmt_value(f)
            }
            (ArgShape::EventAdd, _) => {
                write!(f, " += ")?;
                self.fmt_value(f)
            }
            (ArgShape::EventRemove, _) => {
                write!(f, " -= ")?;
                self.fmt_value(f)
            }
        }
    }
}

/* GenericArgsMatcher */

/// Matcher for a single generic type argument.
pub type TypeArgMatcher = Box<dyn Matcher<TypeArg> + Send + Sync>;

/// Matches the generic type arguments of an invocation.
#[derive(Default)]
pub struct GenericArgsMatcher(pub Vec<TypeArgMatcher>);

impl Matcher<Invocation> for GenericArgsMatcher {
    fn matches(&self, value: &Invocation) -> bool {
        let generics = value.generics();

        self.0.len() == generics.len() && self.0.iter().zip(generics).all(|(m, g)| m.matches(g))
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "<")?;

        for (i, matcher) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }

            matcher.fmt(f)?;
        }

        write!(f, ">")
    }
}

/// Create a matcher that accepts the type argument `T`.
#[must_use]
pub fn type_arg<T: ?Sized>() -> TypeArgEq {
    TypeArgEq(TypeArg::of::<T>())
}

/// Matches one specific generic type argument.
#[derive(Debug, Clone, Copy)]
pub struct TypeArgEq(pub TypeArg);

impl Matcher<TypeArg> for TypeArgEq {
    fn matches(&self, value: &TypeArg) -> bool {
        self.0 == *value
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}
