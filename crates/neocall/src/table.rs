//! # Method Table
//!
//! Name-based lookup of the methods a receiver type exposes. The binder does not
//! need it: it is how a host finds a descriptor by name before binding.

use std::collections::BTreeMap;

use crate::method::MethodDescriptor;

/// The methods of one receiver type, keyed by name.
pub struct MethodTable<T, E> {
    methods: BTreeMap<String, MethodDescriptor<T, E>>,
}

impl<T, E> MethodTable<T, E> {
    pub fn new() -> Self {
        Self { methods: BTreeMap::new() }
    }

    /// Adds a method, replacing any method of the same name.
    pub fn with(mut self, method: MethodDescriptor<T, E>) -> Self {
        self.insert(method);
        self
    }

    /// Adds a method and returns the one it replaced, if any.
    pub fn insert(&mut self, method: MethodDescriptor<T, E>) -> Option<MethodDescriptor<T, E>> {
        self.methods.insert(method.name().to_string(), method)
    }

    pub fn get(&self, name: &str) -> Option<&MethodDescriptor<T, E>> {
        self.methods.get(name)
    }

    /// Methods in name order.
    pub fn iter(&self) -> impl Iterator<Item = &MethodDescriptor<T, E>> {
        self.methods.values()
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}

impl<T, E> Default for MethodTable<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> Clone for MethodTable<T, E> {
    fn clone(&self) -> Self {
        Self { methods: self.methods.clone() }
    }
}

impl<T, E> std::fmt::Debug for MethodTable<T, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.methods.values()).finish()
    }
}
