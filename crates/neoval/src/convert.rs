//! # Typed Conversions
//!
//! Bridges Rust parameter and result types to `Value`. Scalars are generated
//! from `for_each_scalar!`; blobs are written out below.

use crate::Error;
use crate::Result;
use crate::Type;
use crate::Value;
use crate::macros::for_each_scalar;
use crate::macros::impl_value_conversions;

/// A Rust type that can be extracted from a positional argument.
pub trait FromValue: Sized {
    /// The declared type this Rust type stands for.
    const TYPE: Type;

    /// Converts `value`, substituting the zero value for `Nothing`.
    fn from_value(value: Value) -> Result<Self>;
}

/// A Rust type that can be handed back as a call result.
pub trait IntoValue {
    const TYPE: Type;

    fn into_value(self) -> Value;
}

for_each_scalar!(impl_value_conversions);

impl FromValue for String {
    const TYPE: Type = Type::String;

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::String(s) => Ok(s),
            Value::Nothing => Ok(String::new()),
            other => Err(Error::TypeMismatch { expected: Type::String, found: other.type_name() }),
        }
    }
}

impl IntoValue for String {
    const TYPE: Type = Type::String;

    fn into_value(self) -> Value {
        Value::String(self)
    }
}

impl FromValue for Vec<u8> {
    const TYPE: Type = Type::Bytes;

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Bytes(b) => Ok(b),
            Value::Nothing => Ok(Vec::new()),
            other => Err(Error::TypeMismatch { expected: Type::Bytes, found: other.type_name() }),
        }
    }
}

impl IntoValue for Vec<u8> {
    const TYPE: Type = Type::Bytes;

    fn into_value(self) -> Value {
        Value::Bytes(self)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<Vec<u8>> for Value {
    fn from(b: Vec<u8>) -> Self {
        Value::Bytes(b)
    }
}

impl From<&[u8]> for Value {
    fn from(b: &[u8]) -> Self {
        Value::Bytes(b.to_vec())
    }
}

/// `None` is an absent argument.
impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Nothing, Into::into)
    }
}
