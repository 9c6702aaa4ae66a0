//! # Error Definitions
//!
//! Failures that belong to the invocation layer itself. A bound method's own
//! faults are never represented here: they reach the caller as the method
//! returned them.

use neoval::Type;

use crate::signature::MAX_ARITY;
use crate::signature::ReturnMode;
use crate::signature::Shape;

/// Bind-time failures, raised by `Binder` before any call is made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindError {
    /// The method's (arity, return mode) has no catalog entry.
    UnsupportedShape { method: String, shape: Shape },
    /// A method table had no method under the requested name.
    MethodNotFound { owner: &'static str, name: String },
}

impl std::fmt::Display for BindError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedShape { method, shape } => {
                let kind = match shape.returns {
                    ReturnMode::Nothing => "action",
                    ReturnMode::Value => "function",
                };
                write!(
                    f,
                    "could not create an invoker for the method '{}': {} with {} parameters is not supported; reduce it to at most {}",
                    method, kind, shape.arity, MAX_ARITY
                )
            }
            Self::MethodNotFound { owner, name } => {
                write!(f, "method '{}' not found on '{}'", name, owner)
            }
        }
    }
}

impl std::error::Error for BindError {}

/// Call-time failures caused by the argument list rather than the method.
///
/// `Count` and `Type` are reported before the method body runs; `Result` after
/// a runtime-described method returns. They reach the caller through the
/// method's fault type, which must implement `From<ArgumentError>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    /// The argument list length differs from the parameter count.
    Count { method: String, expected: usize, found: usize },
    /// A non-`Nothing` argument does not have the declared parameter type.
    Type { method: String, position: usize, expected: Type, found: &'static str },
    /// A runtime-described method returned something other than its declared result type.
    Result { method: String, expected: Type, found: &'static str },
}

impl ArgumentError {
    pub(crate) fn mismatch(method: &str, position: usize, err: neoval::Error) -> Self {
        match err {
            neoval::Error::TypeMismatch { expected, found } => Self::Type {
                method: method.to_string(),
                position,
                expected,
                found,
            },
        }
    }
}

impl std::fmt::Display for ArgumentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Count { method, expected, found } => {
                write!(f, "'{}' takes {} arguments but {} were supplied", method, expected, found)
            }
            Self::Type { method, position, expected, found } => {
                write!(f, "argument {} of '{}' must be {}, found {}", position, method, expected, found)
            }
            Self::Result { method, expected, found } => {
                write!(f, "'{}' must return {}, found {}", method, expected, found)
            }
        }
    }
}

impl std::error::Error for ArgumentError {}

pub type Result<T> = std::result::Result<T, BindError>;
