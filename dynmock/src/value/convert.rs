use std::any::type_name;

use crate::error::MockError;
use crate::proxy::MockRef;

use super::{Handler, Object, Record, Value};

/// Converts a rust value into a [`Value`].
///
/// This is used by mocked members to pass their arguments to the mockery.
pub trait ToValue {
    /// Get the dynamic representation of `self`.
    fn to_value(&self) -> Value;
}

/// Converts a [`Value`] back into a rust value.
///
/// This is used by mocked members to convert their result, and to write
/// back output arguments.
pub trait FromValue: Sized {
    /// Convert the passed `value`.
    ///
    /// # Errors
    /// Returns [`MockError::Conversion`] if the value does not represent `Self`.
    fn from_value(value: Value) -> Result<Self, MockError>;

    /// Returns `true` if [`from_value`](FromValue::from_value) would succeed
    /// for the passed `value`.
    fn accepts(value: &Value) -> bool;

    /// Benign default result that is used by lenient mocks.
    fn default_value() -> Option<Value> {
        None
    }
}

pub(crate) fn conversion_error<T>(value: &Value) -> MockError {
    MockError::Conversion {
        expected: type_name::<T>(),
        value: value.to_string(),
    }
}

impl<T> ToValue for &T
where
    T: ToValue + ?Sized,
{
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<T> ToValue for &mut T
where
    T: ToValue + ?Sized,
{
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

/* Value */

impl ToValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl FromValue for Value {
    fn from_value(value: Value) -> Result<Self, MockError> {
        Ok(value)
    }

    fn accepts(_value: &Value) -> bool {
        true
    }

    fn default_value() -> Option<Value> {
        Some(Value::Null)
    }
}

/* Unit */

impl ToValue for () {
    fn to_value(&self) -> Value {
        Value::Null
    }
}

impl FromValue for () {
    fn from_value(value: Value) -> Result<Self, MockError> {
        match value {
            Value::Null => Ok(()),
            value => Err(conversion_error::<()>(&value)),
        }
    }

    fn accepts(value: &Value) -> bool {
        value.is_null()
    }

    fn default_value() -> Option<Value> {
        Some(Value::Null)
    }
}

/* bool */

impl ToValue for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

impl FromValue for bool {
    fn from_value(value: Value) -> Result<Self, MockError> {
        match value {
            Value::Bool(x) => Ok(x),
            value => Err(conversion_error::<bool>(&value)),
        }
    }

    fn accepts(value: &Value) -> bool {
        matches!(value, Value::Bool(_))
    }

    fn default_value() -> Option<Value> {
        Some(Value::Bool(false))
    }
}

/* Integers */

macro_rules! impl_integer {
    ($variant:ident: $repr:ty => $( $type:ty ),+) => {
        $(
            impl ToValue for $type {
                fn to_value(&self) -> Value {
                    Value::$variant(<$repr>::from(*self))
                }
            }

            impl FromValue for $type {
                fn from_value(value: Value) -> Result<Self, MockError> {
                    let ret = match &value {
                        Value::Int(x) => <$type>::try_from(*x).ok(),
                        Value::UInt(x) => <$type>::try_from(*x).ok(),
                        _ => None,
                    };

                    ret.ok_or_else(|| conversion_error::<$type>(&value))
                }

                fn accepts(value: &Value) -> bool {
                    match value {
                        Value::Int(x) => <$type>::try_from(*x).is_ok(),
                        Value::UInt(x) => <$type>::try_from(*x).is_ok(),
                        _ => false,
                    }
                }

                fn default_value() -> Option<Value> {
                    Some(Value::$variant(0))
                }
            }
        )+
    };
}

impl_integer!(Int: i64 => i8, i16, i32, i64);
impl_integer!(UInt: u64 => u8, u16, u32, u64);

macro_rules! impl_size {
    ($variant:ident: $repr:ty => $type:ty) => {
        impl ToValue for $type {
            fn to_value(&self) -> Value {
                #[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
                Value::$variant(*self as $repr)
            }
        }

        impl FromValue for $type {
            fn from_value(value: Value) -> Result<Self, MockError> {
                let ret = match &value {
                    Value::Int(x) => <$type>::try_from(*x).ok(),
                    Value::UInt(x) => <$type>::try_from(*x).ok(),
                    _ => None,
                };

                ret.ok_or_else(|| conversion_error::<$type>(&value))
            }

            fn accepts(value: &Value) -> bool {
                match value {
                    Value::Int(x) => <$type>::try_from(*x).is_ok(),
                    Value::UInt(x) => <$type>::try_from(*x).is_ok(),
                    _ => false,
                }
            }

            fn default_value() -> Option<Value> {
                Some(Value::$variant(0))
            }
        }
    };
}

impl_size!(Int: i64 => isize);
impl_size!(UInt: u64 => usize);

/* Floats */

macro_rules! impl_float {
    ($( $type:ty ),+) => {
        $(
            impl ToValue for $type {
                fn to_value(&self) -> Value {
                    Value::Float(f64::from(*self))
                }
            }

            impl FromValue for $type {
                #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
                fn from_value(value: Value) -> Result<Self, MockError> {
                    match value {
                        Value::Float(x) => Ok(x as $type),
                        Value::Int(x) => Ok(x as $type),
                        Value::UInt(x) => Ok(x as $type),
                        value => Err(conversion_error::<$type>(&value)),
                    }
                }

                fn accepts(value: &Value) -> bool {
                    matches!(value, Value::Float(_) | Value::Int(_) | Value::UInt(_))
                }

                fn default_value() -> Option<Value> {
                    Some(Value::Float(0.0))
                }
            }
        )+
    };
}

impl_float!(f32, f64);

/* Strings */

impl ToValue for char {
    fn to_value(&self) -> Value {
        Value::Char(*self)
    }
}

impl FromValue for char {
    fn from_value(value: Value) -> Result<Self, MockError> {
        match value {
            Value::Char(x) => Ok(x),
            value => Err(conversion_error::<char>(&value)),
        }
    }

    fn accepts(value: &Value) -> bool {
        matches!(value, Value::Char(_))
    }

    fn default_value() -> Option<Value> {
        Some(Value::Char('\0'))
    }
}

impl ToValue for str {
    fn to_value(&self) -> Value {
        Value::Str(self.to_owned())
    }
}

impl ToValue for String {
    fn to_value(&self) -> Value {
        Value::Str(self.clone())
    }
}

impl FromValue for String {
    fn from_value(value: Value) -> Result<Self, MockError> {
        match value {
            Value::Str(x) => Ok(x),
            value => Err(conversion_error::<String>(&value)),
        }
    }

    fn accepts(value: &Value) -> bool {
        matches!(value, Value::Str(_))
    }

    fn default_value() -> Option<Value> {
        Some(Value::Str(String::new()))
    }
}

/* Containers */

impl<T> ToValue for [T]
where
    T: ToValue,
{
    fn to_value(&self) -> Value {
        Value::List(self.iter().map(ToValue::to_value).collect())
    }
}

impl<T, const N: usize> ToValue for [T; N]
where
    T: ToValue,
{
    fn to_value(&self) -> Value {
        self[..].to_value()
    }
}

impl<T> ToValue for Vec<T>
where
    T: ToValue,
{
    fn to_value(&self) -> Value {
        self[..].to_value()
    }
}

impl<T> FromValue for Vec<T>
where
    T: FromValue,
{
    fn from_value(value: Value) -> Result<Self, MockError> {
        match value {
            Value::List(items) => items.into_iter().map(T::from_value).collect(),
            value => Err(conversion_error::<Self>(&value)),
        }
    }

    fn accepts(value: &Value) -> bool {
        matches!(value, Value::List(items) if items.iter().all(T::accepts))
    }

    fn default_value() -> Option<Value> {
        Some(Value::List(Vec::new()))
    }
}

impl<T> ToValue for Option<T>
where
    T: ToValue,
{
    fn to_value(&self) -> Value {
        match self {
            Some(x) => x.to_value(),
            None => Value::Null,
        }
    }
}

impl<T> FromValue for Option<T>
where
    T: FromValue,
{
    fn from_value(value: Value) -> Result<Self, MockError> {
        match value {
            Value::Null => Ok(None),
            value => T::from_value(value).map(Some),
        }
    }

    fn accepts(value: &Value) -> bool {
        value.is_null() || T::accepts(value)
    }

    fn default_value() -> Option<Value> {
        Some(Value::Null)
    }
}

/* Tuples */

macro_rules! impl_tuple {
    ($( $name:ident: $type:ident ),+) => {
        impl<$( $type ),+> ToValue for ($( $type, )+)
        where
            $( $type: ToValue, )+
        {
            fn to_value(&self) -> Value {
                let ($( $name, )+) = self;

                Value::List(vec![$( $name.to_value() ),+])
            }
        }
    };
}

impl_tuple!(a: A);
impl_tuple!(a: A, b: B);
impl_tuple!(a: A, b: B, c: C);
impl_tuple!(a: A, b: B, c: C, d: D);
impl_tuple!(a: A, b: B, c: C, d: D, e: E);
impl_tuple!(a: A, b: B, c: C, d: D, e: E, f: F);

/* Engine types */

macro_rules! impl_variant {
    ($variant:ident => $type:ty) => {
        impl ToValue for $type {
            fn to_value(&self) -> Value {
                Value::$variant(self.clone())
            }
        }

        impl FromValue for $type {
            fn from_value(value: Value) -> Result<Self, MockError> {
                match value {
                    Value::$variant(x) => Ok(x),
                    value => Err(conversion_error::<$type>(&value)),
                }
            }

            fn accepts(value: &Value) -> bool {
                matches!(value, Value::$variant(_))
            }
        }
    };
}

impl_variant!(Record => Record);
impl_variant!(Object => Object);
impl_variant!(Handler => Handler);
impl_variant!(Mock => MockRef);

/// Implements [`ToValue`] and [`FromValue`] for the passed types by storing
/// them as [`Value::Object`].
///
/// The types must implement [`Clone`], [`PartialEq`] and [`Debug`](std::fmt::Debug)
/// and must be [`Send`] + [`Sync`] + `'static`. Lenient mocks return
/// [`Default::default`] for these types; types without a [`Default`]
/// implementation pass their default value explicitly.
///
/// ```
/// #[derive(Clone, Debug, Default, PartialEq)]
/// struct Product(String);
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Price(u32);
///
/// dynmock::value_type!(Product);
/// dynmock::value_type!(Price => Price(0));
/// ```
#[macro_export]
macro_rules! value_type {
    (@impl $type:ty, $default:expr) => {
        impl $crate::ToValue for $type {
            fn to_value(&self) -> $crate::Value {
                let value = ::std::clone::Clone::clone(self);

                $crate::Value::Object($crate::value::Object::new(value))
            }
        }

        impl $crate::FromValue for $type {
            fn from_value(value: $crate::Value) -> ::std::result::Result<Self, $crate::MockError> {
                let object = match &value {
                    $crate::Value::Object(o) => o.downcast_ref::<$type>(),
                    _ => ::std::option::Option::None,
                };

                match object {
                    ::std::option::Option::Some(x) => {
                        ::std::result::Result::Ok(::std::clone::Clone::clone(x))
                    }
                    ::std::option::Option::None => {
                        ::std::result::Result::Err($crate::MockError::Conversion {
                            expected: ::std::any::type_name::<$type>(),
                            value: ::std::string::ToString::to_string(&value),
                        })
                    }
                }
            }

            fn accepts(value: &$crate::Value) -> bool {
                matches!(value, $crate::Value::Object(o) if o.downcast_ref::<$type>().is_some())
            }

            fn default_value() -> ::std::option::Option<$crate::Value> {
                let value: $type = $default;

                ::std::option::Option::Some($crate::ToValue::to_value(&value))
            }
        }
    };
    ($type:ty => $default:expr $(,)?) => {
        $crate::value_type!(@impl $type, $default);
    };
    ($( $type:ty ),+ $(,)?) => {
        $(
            $crate::value_type!(@impl $type, <$type as ::std::default::Default>::default());
        )+
    };
}

/// Creates a `Vec<Value>` from the passed expressions.
///
/// ```
/// let args = dynmock::values![1, "two", true];
///
/// assert_eq!(args.len(), 3);
/// ```
#[macro_export]
macro_rules! values {
    ($( $value:expr ),* $(,)?) => {
        vec![ $( $crate::ToValue::to_value(&$value) ),* ]
    };
}
