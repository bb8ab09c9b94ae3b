//! The [`invocation`](self) module contains the [`Invocation`] record that is
//! created for every call on a mock.

use std::any::type_name;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::sync::Arc;

use crate::error::{Fault, MockError};
use crate::member::{CallShape, Member, ParamKind};
use crate::proxy::MockRef;
use crate::value::{FromValue, Value};

const OUT: &Value = &Value::Out;

/// Generic type argument of an invocation.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct TypeArg {
    name: &'static str,
}

impl TypeArg {
    /// Get the type argument for `T`.
    #[must_use]
    pub fn of<T: ?Sized>() -> Self {
        Self {
            name: type_name::<T>(),
        }
    }

    /// Name of the type.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Display for TypeArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.name)
    }
}

#[derive(Debug, Clone)]
struct Slot {
    value: Value,
    kind: ParamKind,
    assigned: bool,
}

#[derive(Debug, Clone)]
enum Outcome {
    Pending,
    Default,
    Result(Value),
    Fault(Fault),
}

/// A single call of a member of a mock.
///
/// The invocation carries the receiver, the called member, the arguments and
/// finally either a result or a [`Fault`].
#[derive(Debug, Clone)]
pub struct Invocation {
    receiver: MockRef,
    member: Arc<Member>,
    generics: Vec<TypeArg>,
    args: Vec<Slot>,
    outcome: Outcome,
}

impl Invocation {
    /// Create a new invocation of `member` on `receiver`.
    ///
    /// The values passed for output-only parameters are ignored.
    ///
    /// # Errors
    /// Returns [`MockError::ArgumentCount`] if the number of arguments does
    /// not match the parameters of the member.
    pub fn new(
        receiver: MockRef,
        member: Arc<Member>,
        args: Vec<Value>,
    ) -> Result<Self, MockError> {
        if args.len() != member.params.len() {
            return Err(MockError::ArgumentCount {
                member: member.to_string(),
                expected: member.params.len(),
                actual: args.len(),
            });
        }

        let args = args
            .into_iter()
            .zip(&member.params)
            .map(|(value, param)| match param.kind {
                ParamKind::Out => Slot {
                    value: Value::Out,
                    kind: param.kind,
                    assigned: false,
                },
                kind => Slot {
                    value,
                    kind,
                    assigned: true,
                },
            })
            .collect();

        Ok(Self {
            receiver,
            member,
            generics: Vec::new(),
            args,
            outcome: Outcome::Pending,
        })
    }

    /// Set the generic type arguments of the invocation.
    #[must_use]
    pub fn with_generics(mut self, generics: Vec<TypeArg>) -> Self {
        self.generics = generics;

        self
    }

    /// The mock the member was called on.
    #[must_use]
    pub fn receiver(&self) -> &MockRef {
        &self.receiver
    }

    /// The called member.
    #[must_use]
    pub fn member(&self) -> &Arc<Member> {
        &self.member
    }

    /// The generic type arguments of the call.
    #[must_use]
    pub fn generics(&self) -> &[TypeArg] {
        &self.generics
    }

    /// Number of arguments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.args.len()
    }

    /// Returns `true` if the member has no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// Get the value of the parameter at `index`.
    ///
    /// # Errors
    /// Returns [`MockError::ParameterNotSet`] if the parameter is output-only
    /// and was not assigned yet.
    pub fn parameter(&self, index: usize) -> Result<&Value, MockError> {
        let slot = self.slot(index)?;

        if slot.assigned {
            Ok(&slot.value)
        } else {
            Err(MockError::ParameterNotSet {
                member: self.member.to_string(),
                index,
            })
        }
    }

    /// Get the value of the parameter called `name`.
    ///
    /// # Errors
    /// See [`parameter`](Self::parameter), additionally returns
    /// [`MockError::UnknownParameter`] if the member has no such parameter.
    pub fn parameter_by_name(&self, name: &str) -> Result<&Value, MockError> {
        self.parameter(self.param_index(name)?)
    }

    /// Assign the parameter at `index`.
    ///
    /// # Errors
    /// Returns [`MockError::ParameterReadOnly`] if the parameter is an input
    /// parameter.
    pub fn set_parameter(&mut self, index: usize, value: Value) -> Result<(), MockError> {
        let member = &self.member;
        let slot = self
            .args
            .get_mut(index)
            .ok_or_else(|| MockError::ParameterOutOfRange {
                member: member.to_string(),
                index,
            })?;

        if slot.kind == ParamKind::In {
            return Err(MockError::ParameterReadOnly {
                member: member.to_string(),
                index,
            });
        }

        slot.value = value;
        slot.assigned = true;

        Ok(())
    }

    /// Assign the parameter called `name`.
    ///
    /// # Errors
    /// See [`set_parameter`](Self::set_parameter).
    pub fn set_parameter_by_name(&mut self, name: &str, value: Value) -> Result<(), MockError> {
        let index = self.param_index(name)?;

        self.set_parameter(index, value)
    }

    /// Value of the argument at `index` as seen by argument matchers.
    ///
    /// Output-only parameters are represented by [`Value::Out`].
    #[must_use]
    pub fn argument_for_matching(&self, index: usize) -> &Value {
        match self.args.get(index) {
            Some(slot) if slot.kind != ParamKind::Out => &slot.value,
            _ => OUT,
        }
    }

    /// Mark all parameters as assigned. Used after a real implementation was
    /// called for the invocation.
    pub fn mark_all_set(&mut self) {
        for slot in &mut self.args {
            if !slot.assigned {
                slot.value = Value::Null;
                slot.assigned = true;
            }
        }
    }

    /// Set the result of the invocation. Any pending fault is cleared.
    ///
    /// # Errors
    /// Returns [`MockError::ResultTypeMismatch`] if `value` does not satisfy
    /// the return contract of the member.
    pub fn set_result(&mut self, value: Value) -> Result<(), MockError> {
        let returns = &self.member.returns;

        let valid = if returns.is_void() {
            value.is_null()
        } else {
            returns.accepts(&value)
        };

        if !valid {
            return Err(MockError::ResultTypeMismatch {
                member: self.member.to_string(),
                expected: returns.type_name().into(),
                value: value.to_string(),
            });
        }

        self.outcome = Outcome::Result(value);

        Ok(())
    }

    /// Set the result to the default value of the return type.
    ///
    /// If the return contract of the member has no default, for example
    /// because the returned type depends on a generic parameter, the default
    /// is taken from the concrete type the result is converted into.
    pub fn set_default(&mut self) {
        self.outcome = match self.member.returns.default_value() {
            Some(value) => Outcome::Result(value),
            None => Outcome::Default,
        };
    }

    /// Set the fault the invocation raises. Any pending result is cleared.
    pub fn set_fault(&mut self, fault: Fault) {
        self.outcome = Outcome::Fault(fault);
    }

    /// The result, if one was set.
    #[must_use]
    pub fn result(&self) -> Option<&Value> {
        match &self.outcome {
            Outcome::Result(value) => Some(value),
            _ => None,
        }
    }

    /// The fault, if one was set.
    #[must_use]
    pub fn fault(&self) -> Option<&Fault> {
        match &self.outcome {
            Outcome::Fault(fault) => Some(fault),
            _ => None,
        }
    }

    /// Returns `true` if the invocation raises a fault.
    #[must_use]
    pub fn is_faulted(&self) -> bool {
        matches!(self.outcome, Outcome::Fault(_))
    }

    /// Returns `true` if neither a result nor a fault was set.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self.outcome, Outcome::Pending)
    }

    /// Converts the value assigned to the output parameter at `index`.
    ///
    /// Returns `None` if the parameter was not assigned.
    ///
    /// # Errors
    /// Returns an error if the index is invalid or the assigned value can not
    /// be converted into `T`.
    pub fn take_output<T: FromValue>(&self, index: usize) -> Result<Option<T>, MockError> {
        let slot = self.slot(index)?;

        if slot.kind == ParamKind::In || !slot.assigned {
            return Ok(None);
        }

        T::from_value(slot.value.clone()).map(Some)
    }

    /// Consume the invocation and convert its outcome.
    ///
    /// # Errors
    /// Returns [`MockError::MissingResult`] if the member returns a value but
    /// neither a result nor a fault was set, [`MockError::NoDefaultValue`] if
    /// a default was requested but `T` has none, or a conversion error if the
    /// result is not a `T`.
    pub fn into_outcome<T: FromValue>(self) -> Result<Result<T, Fault>, MockError> {
        match self.outcome {
            Outcome::Fault(fault) => Ok(Err(fault)),
            Outcome::Result(value) => T::from_value(value).map(Ok),
            Outcome::Default => match T::default_value() {
                Some(value) => T::from_value(value).map(Ok),
                None => Err(MockError::NoDefaultValue {
                    member: self.member.to_string(),
                    expected: type_name::<T>().into(),
                }),
            },
            Outcome::Pending if self.member.returns.is_void() => T::from_value(Value::Null).map(Ok),
            Outcome::Pending => Err(MockError::MissingResult {
                member: self.member.to_string(),
                expected: self.member.returns.type_name().into(),
            }),
        }
    }

    fn slot(&self, index: usize) -> Result<&Slot, MockError> {
        self.args
            .get(index)
            .ok_or_else(|| MockError::ParameterOutOfRange {
                member: self.member.to_string(),
                index,
            })
    }

    fn param_index(&self, name: &str) -> Result<usize, MockError> {
        self.member
            .param_index(name)
            .ok_or_else(|| MockError::UnknownParameter {
                member: self.member.to_string(),
                name: name.into(),
            })
    }

    fn fmt_args(&self, f: &mut Formatter<'_>, args: &[Slot]) -> FmtResult {
        for (i, slot) in args.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }

            match slot.kind {
                ParamKind::Out => write!(f, "out")?,
                _ => write!(f, "{}", slot.value)?,
            }
        }

        Ok(())
    }
}

impl Display for Invocation {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.receiver)?;

        match self.member.shape() {
            CallShape::Method => {
                write!(f, ".{}", self.member.name)?;

                if !self.generics.is_empty() {
                    write!(f, "<")?;
                    for (i, generic) in self.generics.iter().enumerate() {
                        if i > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "{generic}")?;
                    }
                    write!(f, ">")?;
                }

                write!(f, "(")?;
                self.fmt_args(f, &self.args)?;
                write!(f, ")")
            }
            CallShape::PropertyGet(name) => write!(f, ".{name}"),
            CallShape::PropertySet(name) => {
                write!(f, ".{name} = ")?;
                self.fmt_args(f, &self.args)
            }
            CallShape::IndexGet => {
                write!(f, "[")?;
                self.fmt_args(f, &self.args)?;
                write!(f, "]")
            }
            CallShape::IndexSet => {
                let (value, index) = self.args.split_last().expect("Indexer setter without value");

                write!(f, "[")?;
                self.fmt_args(f, index)?;
                write!(f, "] = ")?;
                self.fmt_args(f, std::slice::from_ref(value))
            }
            CallShape::EventAdd(name) => {
                write!(f, ".{name} += ")?;
                self.fmt_args(f, &self.args)
            }
            CallShape::EventRemove(name) => {
                write!(f, ".{name} -= ")?;
                self.fmt_args(f, &self.args)
            }
        }
    }
}
