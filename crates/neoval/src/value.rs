//! # Values and Types
//!
//! `Type` is the closed set of shapes a late-bound parameter or result may take.
//! `Value` is one dynamically typed datum of those shapes, plus `Nothing`.
//!
//! ## Invariants
//! - **Zero Values**: Every `Type` has exactly one zero value, and `Type::zero`
//!   always produces a `Value` whose `ty()` is that type.
//! - **Strictness**: Coercion never widens or narrows. A `U8` is not an `S32`.

use crate::Error;
use crate::Result;

/// The declared type of a parameter or result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Type {
    Bool,
    U8,
    U16,
    U32,
    U64,
    S8,
    S16,
    S32,
    S64,
    F32,
    F64,
    Char,
    String,
    Bytes,
}

impl Type {
    /// Short lowercase name, as used in signatures (`s32`, `string`, ...).
    pub fn name(self) -> &'static str {
        match self {
            Type::Bool => "bool",
            Type::U8 => "u8",
            Type::U16 => "u16",
            Type::U32 => "u32",
            Type::U64 => "u64",
            Type::S8 => "s8",
            Type::S16 => "s16",
            Type::S32 => "s32",
            Type::S64 => "s64",
            Type::F32 => "f32",
            Type::F64 => "f64",
            Type::Char => "char",
            Type::String => "string",
            Type::Bytes => "bytes",
        }
    }

    /// The value an absent argument of this type stands for.
    pub fn zero(self) -> Value {
        match self {
            Type::Bool => Value::Bool(false),
            Type::U8 => Value::U8(0),
            Type::U16 => Value::U16(0),
            Type::U32 => Value::U32(0),
            Type::U64 => Value::U64(0),
            Type::S8 => Value::S8(0),
            Type::S16 => Value::S16(0),
            Type::S32 => Value::S32(0),
            Type::S64 => Value::S64(0),
            Type::F32 => Value::F32(0.0),
            Type::F64 => Value::F64(0.0),
            Type::Char => Value::Char('\0'),
            Type::String => Value::String(String::new()),
            Type::Bytes => Value::Bytes(Vec::new()),
        }
    }

    /// Checks `value` against this type.
    ///
    /// `Nothing` becomes `self.zero()`. A value of the same type passes through
    /// untouched. Anything else is a `TypeMismatch`.
    pub fn coerce(self, value: Value) -> Result<Value> {
        match value.ty() {
            None => Ok(self.zero()),
            Some(ty) if ty == self => Ok(value),
            Some(_) => Err(Error::TypeMismatch { expected: self, found: value.type_name() }),
        }
    }
}

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A dynamically typed value.
///
/// `Nothing` doubles as the absent argument and as the result of a method
/// that produces no value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Nothing,
    Bool(bool),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    S8(i8),
    S16(i16),
    S32(i32),
    S64(i64),
    F32(f32),
    F64(f64),
    Char(char),
    String(String),
    Bytes(Vec<u8>),
}

impl Value {
    /// The type of this value, or `None` for `Nothing`.
    pub fn ty(&self) -> Option<Type> {
        let ty = match self {
            Value::Nothing => return None,
            Value::Bool(_) => Type::Bool,
            Value::U8(_) => Type::U8,
            Value::U16(_) => Type::U16,
            Value::U32(_) => Type::U32,
            Value::U64(_) => Type::U64,
            Value::S8(_) => Type::S8,
            Value::S16(_) => Type::S16,
            Value::S32(_) => Type::S32,
            Value::S64(_) => Type::S64,
            Value::F32(_) => Type::F32,
            Value::F64(_) => Type::F64,
            Value::Char(_) => Type::Char,
            Value::String(_) => Type::String,
            Value::Bytes(_) => Type::Bytes,
        };
        Some(ty)
    }

    /// Name of this value's type for diagnostics; `nothing` for `Nothing`.
    pub fn type_name(&self) -> &'static str {
        self.ty().map_or("nothing", Type::name)
    }

    pub fn is_nothing(&self) -> bool {
        matches!(self, Value::Nothing)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}
