//! # Signatures and Shapes
//!
//! A `Signature` is the declared surface of one method: its name, ordered
//! parameter types, and optional result type. Its `Shape` is the part the
//! catalog cares about: how many parameters, and whether a value comes back.

use neoval::Type;

/// The largest parameter count a bound method may have.
pub const MAX_ARITY: usize = 10;

/// Whether a method hands back a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ReturnMode {
    /// Effectful only; calls yield `Value::Nothing`.
    Nothing,
    /// Produces a single value.
    Value,
}

/// The catalog key: parameter count and return mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Shape {
    pub arity: usize,
    pub returns: ReturnMode,
}

impl Shape {
    pub fn action(arity: usize) -> Self {
        Self { arity, returns: ReturnMode::Nothing }
    }

    pub fn function(arity: usize) -> Self {
        Self { arity, returns: ReturnMode::Value }
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.returns {
            ReturnMode::Nothing => write!(f, "action/{}", self.arity),
            ReturnMode::Value => write!(f, "function/{}", self.arity),
        }
    }
}

/// The declared signature of a method.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    pub name: String,
    pub params: Vec<Type>,
    pub returns: Option<Type>,
}

impl Signature {
    /// Starts a signature with no parameters and no result.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            returns: None,
        }
    }

    /// Appends one parameter.
    pub fn param(mut self, ty: Type) -> Self {
        self.params.push(ty);
        self
    }

    /// Appends several parameters in order.
    pub fn params(mut self, tys: impl IntoIterator<Item = Type>) -> Self {
        self.params.extend(tys);
        self
    }

    /// Declares the result type.
    pub fn returns(mut self, ty: Type) -> Self {
        self.returns = Some(ty);
        self
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }

    pub fn shape(&self) -> Shape {
        Shape {
            arity: self.params.len(),
            returns: match self.returns {
                Some(_) => ReturnMode::Value,
                None => ReturnMode::Nothing,
            },
        }
    }
}

impl std::fmt::Display for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}(", self.name)?;
        for (i, ty) in self.params.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", ty)?;
        }
        f.write_str(")")?;
        if let Some(ty) = self.returns {
            write!(f, " -> {}", ty)?;
        }
        Ok(())
    }
}
