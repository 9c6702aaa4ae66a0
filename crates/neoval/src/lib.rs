//! # Neoval
//!
//! A small, strict value model for calling Rust methods through a positional,
//! dynamically typed argument list.
//!
//! ## Philosophy
//!
//! - **Closed Types**: A fixed set of scalar and blob types. No nested containers.
//! - **Zero Substitution**: An absent argument (`Value::Nothing`) always becomes the
//!   declared type's zero value, never an error.
//! - **No Widening**: A value converts only to its own type.

mod convert;
mod macros;
mod value;


pub use convert::FromValue;
pub use convert::IntoValue;
pub use value::Type;
pub use value::Value;

/// Conversion errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The value's type does not match the declared type.
    TypeMismatch { expected: Type, found: &'static str },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::TypeMismatch { expected, found } => {
                write!(f, "type mismatch: expected {}, found {}", expected, found)
            }
        }
    }
}

impl std::error::Error for Error {}

/// Specialized `Result` for value conversions.
pub type Result<T> = std::result::Result<T, Error>;
