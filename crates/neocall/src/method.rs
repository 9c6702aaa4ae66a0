//! # Method Descriptors
//!
//! A `MethodDescriptor<T, E>` names one method on receiver type `T` and holds
//! the shape-specific callable that reaches it. Faults of type `E` produced by
//! the method travel back through the callable without being touched.
//!
//! ## Shapes
//!
//! Typed methods are `Fn(&T, A0, .., An) -> Result<_, E>` for n in 0..=10.
//! `impl_shapes!` generates one `IntoAction` and one `IntoFunction` impl per
//! arity, so every shape is a direct call with positional extraction in front.
//! Methods only known at run time go through `MethodDescriptor::dynamic` and
//! are coerced against their declared `Signature` instead.

use std::sync::Arc;

use neoval::FromValue;
use neoval::IntoValue;
use neoval::Type;
use neoval::Value;

use crate::error::ArgumentError;
use crate::signature::Signature;

/// The shape-specific callable behind a descriptor.
///
/// Takes the receiver and exactly `arity` arguments; the binder checks the
/// count before calling it.
pub type RawMethod<T, E> = Arc<dyn Fn(&T, Vec<Value>) -> Result<Value, E> + Send + Sync>;

/// Identifies a callable member of `T`: its signature and a direct call path.
pub struct MethodDescriptor<T, E> {
    signature: Signature,
    raw: RawMethod<T, E>,
}

impl<T, E> MethodDescriptor<T, E> {
    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    pub fn name(&self) -> &str {
        &self.signature.name
    }

    /// The receiver type's name.
    pub fn owner(&self) -> &'static str {
        std::any::type_name::<T>()
    }

    /// `owner::name`, the identity used in diagnostics.
    pub fn qualified_name(&self) -> String {
        qualify::<T>(&self.signature.name)
    }

    pub(crate) fn raw(&self) -> &RawMethod<T, E> {
        &self.raw
    }
}

impl<T: 'static, E: 'static> MethodDescriptor<T, E> {
    /// Describes a method that produces no value.
    pub fn action<F, Args>(name: impl Into<String>, f: F) -> Self
    where
        F: IntoAction<T, Args, E>,
    {
        let name = name.into();
        let raw = f.into_raw(Arc::from(qualify::<T>(&name)));
        let signature = Signature {
            name,
            params: F::params(),
            returns: None,
        };
        Self { signature, raw }
    }

    /// Describes a method that produces a value.
    pub fn function<F, Args, R>(name: impl Into<String>, f: F) -> Self
    where
        F: IntoFunction<T, Args, R, E>,
    {
        let name = name.into();
        let raw = f.into_raw(Arc::from(qualify::<T>(&name)));
        let signature = Signature {
            name,
            params: F::params(),
            returns: Some(F::returns()),
        };
        Self { signature, raw }
    }

    /// Describes a method whose signature is only known at run time.
    ///
    /// Each argument is coerced to the declared parameter type before `f`
    /// sees it, and a declared result type is enforced on what `f` returns.
    /// The signature is not checked here; the binder rejects shapes outside
    /// the catalog.
    pub fn dynamic<F>(signature: Signature, f: F) -> Self
    where
        F: Fn(&T, Vec<Value>) -> Result<Value, E> + Send + Sync + 'static,
        E: From<ArgumentError>,
    {
        let method: Arc<str> = Arc::from(qualify::<T>(&signature.name));
        let params = signature.params.clone();
        let returns = signature.returns;

        let raw: RawMethod<T, E> = Arc::new(move |receiver: &T, args: Vec<Value>| -> Result<Value, E> {
            let mut coerced = Vec::with_capacity(params.len());
            for (position, (ty, value)) in params.iter().zip(args).enumerate() {
                let value = ty.coerce(value)
                    .map_err(|e| ArgumentError::mismatch(&method, position, e))?;
                coerced.push(value);
            }
            let result = match f(receiver, coerced) {
                Ok(result) => result,
                Err(fault) => return Err(fault),
            };

            match returns {
                Some(expected) if result.ty() != Some(expected) => Err(E::from(ArgumentError::Result {
                    method: method.to_string(),
                    expected,
                    found: result.type_name(),
                })),
                _ => Ok(result),
            }
        });

        Self { signature, raw }
    }
}

impl<T, E> Clone for MethodDescriptor<T, E> {
    fn clone(&self) -> Self {
        Self {
            signature: self.signature.clone(),
            raw: Arc::clone(&self.raw),
        }
    }
}

impl<T, E> std::fmt::Debug for MethodDescriptor<T, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MethodDescriptor")
            .field("owner", &self.owner())
            .field("signature", &self.signature)
            .finish_non_exhaustive()
    }
}

fn qualify<T>(name: &str) -> String {
    format!("{}::{}", std::any::type_name::<T>(), name)
}

/// A method of `T` taking `Args` and producing nothing.
pub trait IntoAction<T, Args, E>: Sized + Send + Sync + 'static {
    fn params() -> Vec<Type>;

    fn into_raw(self, method: Arc<str>) -> RawMethod<T, E>;
}

/// A method of `T` taking `Args` and producing an `R`.
pub trait IntoFunction<T, Args, R, E>: Sized + Send + Sync + 'static {
    fn params() -> Vec<Type>;

    fn returns() -> Type;

    fn into_raw(self, method: Arc<str>) -> RawMethod<T, E>;
}

/// Positional argument cursor used by the generated shapes.
struct Arguments<'a> {
    method: &'a str,
    values: std::vec::IntoIter<Value>,
    position: usize,
}

impl<'a> Arguments<'a> {
    fn new(method: &'a str, values: Vec<Value>) -> Self {
        Self {
            method,
            values: values.into_iter(),
            position: 0,
        }
    }

    fn extract<A: FromValue>(&mut self) -> Result<A, ArgumentError> {
        let position = self.position;
        self.position += 1;
        let value = self.values.next().unwrap_or_default();
        A::from_value(value).map_err(|e| ArgumentError::mismatch(self.method, position, e))
    }
}

macro_rules! impl_shapes {
    ($($arg:ident),*) => {
        impl<T, E, F, $($arg,)*> IntoAction<T, ($($arg,)*), E> for F
        where
            T: 'static,
            E: From<ArgumentError> + 'static,
            F: Fn(&T, $($arg,)*) -> Result<(), E> + Send + Sync + 'static,
            $($arg: FromValue + 'static,)*
        {
            fn params() -> Vec<Type> {
                vec![$(<$arg as FromValue>::TYPE),*]
            }

            #[allow(non_snake_case, unused_mut, unused_variables)]
            fn into_raw(self, method: Arc<str>) -> RawMethod<T, E> {
                Arc::new(move |receiver: &T, args: Vec<Value>| -> Result<Value, E> {
                    let mut args = Arguments::new(&method, args);
                    $(let $arg = args.extract::<$arg>()?;)*
                    (self)(receiver, $($arg),*).map(|()| Value::Nothing)
                })
            }
        }

        impl<T, E, F, R, $($arg,)*> IntoFunction<T, ($($arg,)*), R, E> for F
        where
            T: 'static,
            E: From<ArgumentError> + 'static,
            R: IntoValue + 'static,
            F: Fn(&T, $($arg,)*) -> Result<R, E> + Send + Sync + 'static,
            $($arg: FromValue + 'static,)*
        {
            fn params() -> Vec<Type> {
                vec![$(<$arg as FromValue>::TYPE),*]
            }

            fn returns() -> Type {
                R::TYPE
            }

            #[allow(non_snake_case, unused_mut, unused_variables)]
            fn into_raw(self, method: Arc<str>) -> RawMethod<T, E> {
                Arc::new(move |receiver: &T, args: Vec<Value>| -> Result<Value, E> {
                    let mut args = Arguments::new(&method, args);
                    $(let $arg = args.extract::<$arg>()?;)*
                    (self)(receiver, $($arg),*).map(IntoValue::into_value)
                })
            }
        }
    };
}

impl_shapes!();
impl_shapes!(A0);
impl_shapes!(A0, A1);
impl_shapes!(A0, A1, A2);
impl_shapes!(A0, A1, A2, A3);
impl_shapes!(A0, A1, A2, A3, A4);
impl_shapes!(A0, A1, A2, A3, A4, A5);
impl_shapes!(A0, A1, A2, A3, A4, A5, A6);
impl_shapes!(A0, A1, A2, A3, A4, A5, A6, A7);
impl_shapes!(A0, A1, A2, A3, A4, A5, A6, A7, A8);
impl_shapes!(A0, A1, A2, A3, A4, A5, A6, A7, A8, A9);
