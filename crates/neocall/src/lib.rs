//! # Neocall
//!
//! Late-bound method calls that keep their faults.
//!
//! Given a receiver and a descriptor of one of its methods (0 to 10 parameters,
//! with or without a result), `Binder::create` produces a `BoundInvocation`
//! whose `call` takes a positional list of `Value`s. The call goes straight to
//! the method: an `Err` it returns reaches the caller exactly as produced, and a
//! panic unwinds through untouched.
//!
//! ```
//! use std::sync::Arc;
//!
//! use neocall::ArgumentError;
//! use neocall::Binder;
//! use neocall::MethodDescriptor;
//! use neocall::Value;
//! use neocall::args;
//!
//! #[derive(Debug)]
//! enum Fault {
//!     Negative,
//!     Arguments(ArgumentError),
//! }
//!
//! impl From<ArgumentError> for Fault {
//!     fn from(e: ArgumentError) -> Self { Fault::Arguments(e) }
//! }
//!
//! struct Calc;
//!
//! impl Calc {
//!     fn sqrt(&self, x: f64) -> Result<f64, Fault> {
//!         if x < 0.0 { Err(Fault::Negative) } else { Ok(x.sqrt()) }
//!     }
//! }
//!
//! let method = MethodDescriptor::function("sqrt", Calc::sqrt);
//! let sqrt = Binder::create(Arc::new(Calc), &method).unwrap();
//!
//! assert_eq!(sqrt.call(args![9.0f64]).unwrap(), Value::F64(3.0));
//! assert!(matches!(sqrt.call(args![-1.0f64]), Err(Fault::Negative)));
//! ```

/// Builds a positional argument list: `args![1, "two", None::<i32>]`.
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::Value>::new()
    };
    ($($arg:expr),+ $(,)?) => {
        ::std::vec![$($crate::Value::from($arg)),+]
    };
}

pub mod bind;
pub mod catalog;
pub mod error;
pub mod method;
pub mod signature;
pub mod table;


pub use bind::Binder;
pub use bind::BoundInvocation;
pub use error::ArgumentError;
pub use error::BindError;
pub use method::IntoAction;
pub use method::IntoFunction;
pub use method::MethodDescriptor;
pub use method::RawMethod;
pub use signature::MAX_ARITY;
pub use signature::ReturnMode;
pub use signature::Shape;
pub use signature::Signature;
pub use table::MethodTable;

pub use neoval::FromValue;
pub use neoval::IntoValue;
pub use neoval::Type;
pub use neoval::Value;
