//! # Binder & Bound Invocations
//!
//! The Binder turns (receiver, method descriptor) into a `BoundInvocation`: one
//! object with one operation, `call(args)`.
//!
//! ## Architecture
//!
//! - **Binder**: Validates the descriptor's shape against the catalog, then
//!   captures the receiver and the descriptor's raw callable in one closure.
//! - **BoundInvocation**: Checks the argument count and hands the list to that
//!   closure. The method's own `Err` comes back as-is; panics unwind through.

use std::collections::HashMap;
use std::sync::Arc;

use neoval::Value;

use crate::catalog;
use crate::catalog::Entry;
use crate::error::ArgumentError;
use crate::error::BindError;
use crate::error::Result;
use crate::method::MethodDescriptor;
use crate::signature::ReturnMode;
use crate::signature::Shape;
use crate::signature::Signature;
use crate::table::MethodTable;

type Call<E> = Arc<dyn Fn(Vec<Value>) -> std::result::Result<Value, E> + Send + Sync>;

/// A method bound to its receiver, callable with a positional argument list.
///
/// Cheap to clone. Holds no state between calls, so it may be shared across
/// threads and called concurrently whenever the underlying method allows it.
pub struct BoundInvocation<E> {
    method: Arc<str>,
    signature: Arc<Signature>,
    entry: &'static Entry,
    call: Call<E>,
}

impl<E> BoundInvocation<E> {
    /// The qualified name of the bound method (`owner::name`).
    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    pub fn shape(&self) -> Shape {
        self.entry.shape
    }

    /// The catalog label of this invocation's shape.
    pub fn label(&self) -> &'static str {
        self.entry.label
    }
}

impl<E: From<ArgumentError>> BoundInvocation<E> {
    /// Calls the bound method with `args`, one value per parameter, in order.
    ///
    /// `Value::Nothing` stands for an absent argument and becomes the
    /// parameter type's zero value. Returns the method's value, or
    /// `Value::Nothing` for a method that produces none.
    ///
    /// # Errors
    ///
    /// Whatever the method returns as `Err`, unchanged. Argument count and type
    /// problems are converted into `E` through `From<ArgumentError>` and are
    /// detected before the method body runs.
    pub fn call(&self, args: Vec<Value>) -> std::result::Result<Value, E> {
        let expected = self.signature.arity();
        if args.len() != expected {
            tracing::trace!(method = %self.method, expected, found = args.len(), "argument count mismatch");
            return Err(E::from(ArgumentError::Count {
                method: self.method.to_string(),
                expected,
                found: args.len(),
            }));
        }

        match self.entry.shape.returns {
            ReturnMode::Value => (self.call)(args),
            ReturnMode::Nothing => (self.call)(args).map(|_| Value::Nothing),
        }
    }
}

impl<E> Clone for BoundInvocation<E> {
    fn clone(&self) -> Self {
        Self {
            method: Arc::clone(&self.method),
            signature: Arc::clone(&self.signature),
            entry: self.entry,
            call: Arc::clone(&self.call),
        }
    }
}

impl<E> std::fmt::Debug for BoundInvocation<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundInvocation")
            .field("method", &self.method)
            .field("shape", &self.entry.label)
            .finish_non_exhaustive()
    }
}

/// Creates bound invocations.
pub struct Binder;

impl Binder {
    /// Binds `method` to `receiver`.
    ///
    /// The descriptor's shape must be in the catalog; anything with more than
    /// `MAX_ARITY` parameters is rejected here, never at call time.
    pub fn create<T, E>(
        receiver: impl Into<Arc<T>>,
        method: &MethodDescriptor<T, E>,
    ) -> Result<BoundInvocation<E>>
    where
        T: Send + Sync + 'static,
        E: 'static,
    {
        let name: Arc<str> = Arc::from(method.qualified_name());
        let shape = method.signature().shape();
        let Some(entry) = catalog::lookup(shape) else {
            tracing::warn!(method = %name, %shape, "unsupported method shape");
            return Err(BindError::UnsupportedShape {
                method: name.to_string(),
                shape,
            });
        };

        let receiver: Arc<T> = receiver.into();
        let raw = Arc::clone(method.raw());
        let call: Call<E> = Arc::new(move |args: Vec<Value>| raw(&*receiver, args));

        tracing::debug!(method = %name, shape = entry.label, "bound method");

        Ok(BoundInvocation {
            method: name,
            signature: Arc::new(method.signature().clone()),
            entry,
            call,
        })
    }

    /// Looks `name` up in `table` and binds it to `receiver`.
    pub fn create_named<T, E>(
        receiver: impl Into<Arc<T>>,
        table: &MethodTable<T, E>,
        name: &str,
    ) -> Result<BoundInvocation<E>>
    where
        T: Send + Sync + 'static,
        E: 'static,
    {
        let method = table.get(name).ok_or_else(|| BindError::MethodNotFound {
            owner: std::any::type_name::<T>(),
            name: name.to_string(),
        })?;

        Self::create(receiver, method)
    }

    /// Binds every method in `table` to one shared receiver.
    ///
    /// Fails on the first method whose shape is unsupported.
    pub fn bind_table<T, E>(
        receiver: impl Into<Arc<T>>,
        table: &MethodTable<T, E>,
    ) -> Result<HashMap<String, BoundInvocation<E>>>
    where
        T: Send + Sync + 'static,
        E: 'static,
    {
        let receiver: Arc<T> = receiver.into();
        let mut bound = HashMap::with_capacity(table.len());

        for method in table.iter() {
            let invocation = Self::create(Arc::clone(&receiver), method)?;
            bound.insert(method.name().to_string(), invocation);
        }

        Ok(bound)
    }
}
