//! The [`error`](self) module contains the errors reported by the mockery and
//! the [`Fault`] type that mocked members raise instead of returning.

use std::fmt::{Display, Formatter, Result as FmtResult};

use thiserror::Error;

use crate::proxy::MockStyle;
use crate::value::Value;

/// Errors reported by the mockery.
#[derive(Debug, Clone, Error)]
pub enum MockError {
    /// The name of a mock was assigned more than once.
    #[error("Name of the mock was already set to `{0}`")]
    NameAlreadySet(String),

    /// The style of a mock was assigned more than once.
    #[error("Style of the mock was already set to {0:?}")]
    StyleAlreadySet(MockStyle),

    /// The requested type can not be mocked.
    #[error("Unable to mock `{type_name}`: {reason}")]
    InvalidMockType { type_name: String, reason: String },

    /// The mock was created by a different mockery.
    #[error("Mock `{0}` belongs to a different mockery")]
    ForeignMock(String),

    /// An expectation was declared for a member the mocked type does not have.
    #[error("`{type_name}` has no member `{member}`")]
    UnknownMember { type_name: String, member: String },

    /// An expectation was declared for a member with the wrong shape, for
    /// example a property getter that takes arguments.
    #[error("`{type_name}::{member}` is not {expected}")]
    WrongMemberShape {
        type_name: String,
        member: String,
        expected: &'static str,
    },

    /// An output-only parameter was read before it was assigned.
    #[error("Parameter {index} of `{member}` has not been set")]
    ParameterNotSet { member: String, index: usize },

    /// An input-only parameter was assigned.
    #[error("Parameter {index} of `{member}` is an input parameter and can not be set")]
    ParameterReadOnly { member: String, index: usize },

    /// A parameter was addressed by a name the member does not declare.
    #[error("`{member}` has no parameter named `{name}`")]
    UnknownParameter { member: String, name: String },

    /// A parameter was addressed by an index the invocation does not have.
    #[error("Parameter index {index} is out of range for `{member}`")]
    ParameterOutOfRange { member: String, index: usize },

    /// The number of arguments passed to a member does not match its signature.
    #[error("`{member}` expects {expected} arguments, but {actual} were passed")]
    ArgumentCount {
        member: String,
        expected: usize,
        actual: usize,
    },

    /// A result was assigned that does not satisfy the return contract.
    #[error("Unable to return {value} from `{member}`: expected `{expected}`")]
    ResultTypeMismatch {
        member: String,
        expected: String,
        value: String,
    },

    /// An expectation matched, but none of its actions produced a result.
    #[error("No result was set for `{member}`, which returns `{expected}`")]
    MissingResult { member: String, expected: String },

    /// A lenient mock has no default result for the return type of the member.
    #[error("No default value available for `{expected}` returned by `{member}`")]
    NoDefaultValue { member: String, expected: String },

    /// A transparent mock tried to call a member that has no implementation.
    #[error("`{0}` has no implementation to call")]
    NoImplementation(String),

    /// A value could not be converted into the requested rust type.
    #[error("Unable to convert {value} into `{expected}`")]
    Conversion {
        expected: &'static str,
        value: String,
    },

    /// A strict mock received a call that no active expectation matched.
    #[error("{0}")]
    UnexpectedInvocation(String),

    /// Verification found expectations that have not been met.
    #[error("{0}")]
    UnmetExpectations(String),
}

/// Category of a [`MockError`].
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    /// Invalid use of the declaration API, detected eagerly.
    Configuration,

    /// Invalid use of an invocation by an action or the mocked member.
    Usage,

    /// A call that no expectation matched.
    UnexpectedInvocation,

    /// Expectations that were not met at verification time.
    UnmetExpectations,
}

impl MockError {
    /// Get the category of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NameAlreadySet(_)
            | Self::StyleAlreadySet(_)
            | Self::InvalidMockType { .. }
            | Self::ForeignMock(_)
            | Self::UnknownMember { .. }
            | Self::WrongMemberShape { .. } => ErrorKind::Configuration,
            Self::ParameterNotSet { .. }
            | Self::ParameterReadOnly { .. }
            | Self::UnknownParameter { .. }
            | Self::ParameterOutOfRange { .. }
            | Self::ArgumentCount { .. }
            | Self::ResultTypeMismatch { .. }
            | Self::MissingResult { .. }
            | Self::NoDefaultValue { .. }
            | Self::NoImplementation(_)
            | Self::Conversion { .. } => ErrorKind::Usage,
            Self::UnexpectedInvocation(_) => ErrorKind::UnexpectedInvocation,
            Self::UnmetExpectations(_) => ErrorKind::UnmetExpectations,
        }
    }

    /// Returns `true` if this is an expectation or verification failure.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::UnexpectedInvocation | ErrorKind::UnmetExpectations
        )
    }
}

/// Raise the passed error at the boundary of a mocked member.
///
/// Mocked members can not return a [`MockError`] to their caller, so the
/// error is turned into a panic carrying the rendered message.
#[track_caller]
pub fn fail(error: MockError) -> ! {
    panic!("{error}")
}

/// Error raised by a mocked member instead of returning a result.
///
/// Members that return a `Result<T, E>` with `E: From<Fault>` receive the
/// fault as `Err`, all other members raise it with [`std::panic::panic_any`].
#[derive(Debug, Clone, PartialEq)]
pub struct Fault {
    message: String,
    payload: Option<Value>,
}

impl Fault {
    /// Create a new fault with the passed message.
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
            payload: None,
        }
    }

    /// Attach a payload to the fault.
    #[must_use]
    pub fn with_payload(mut self, payload: Value) -> Self {
        self.payload = Some(payload);

        self
    }

    /// Message of the fault.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Payload of the fault, if any.
    #[must_use]
    pub fn payload(&self) -> Option<&Value> {
        self.payload.as_ref()
    }
}

impl Display for Fault {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.message)?;

        if let Some(payload) = &self.payload {
            write!(f, " ({payload})")?;
        }

        Ok(())
    }
}

impl std::error::Error for Fault {}

impl From<&str> for Fault {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for Fault {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}
