//! Shared receiver for the integration suites.
//!
//! `Target` records every call it receives and can be told to fail a method,
//! standing in for a mocked interface.

#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Mutex;

use neocall::ArgumentError;
use neocall::MethodDescriptor;
use neocall::MethodTable;

/// The fault `Target` methods raise.
#[derive(Debug, Clone, PartialEq)]
pub enum Fault {
    /// Raised by a method told to fail; carries the method name.
    InvalidArgument(String),
    /// Raised by the invocation layer for a bad argument list.
    Arguments(ArgumentError),
}

impl From<ArgumentError> for Fault {
    fn from(e: ArgumentError) -> Self {
        Fault::Arguments(e)
    }
}

/// One call as the receiver saw it.
#[derive(Debug, Clone, PartialEq)]
pub struct Received {
    pub method: String,
    pub args: Vec<i32>,
}

#[derive(Default)]
pub struct Target {
    received: Mutex<Vec<Received>>,
    failing: Mutex<HashSet<String>>,
}

impl Target {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `method` return `Fault::InvalidArgument` from now on.
    pub fn fail(&self, method: &str) {
        self.failing.lock().unwrap().insert(method.to_string());
    }

    pub fn received(&self) -> Vec<Received> {
        self.received.lock().unwrap().clone()
    }

    /// Asserts that exactly one call to `method` was received, with `args`.
    pub fn assert_received_once(&self, method: &str, args: &[i32]) {
        let calls: Vec<Received> = self.received()
            .into_iter()
            .filter(|r| r.method == method)
            .collect();
        assert_eq!(calls.len(), 1, "{method} received {} calls", calls.len());
        assert_eq!(calls[0].args, args, "{method} received the wrong arguments");
    }

    fn record(&self, method: &str, args: &[i32]) -> Result<(), Fault> {
        self.received.lock().unwrap().push(Received { method: method.to_string(), args: args.to_vec() });
        if self.failing.lock().unwrap().contains(method) {
            return Err(Fault::InvalidArgument(method.to_string()));
        }
        Ok(())
    }

    pub fn void0(&self) -> Result<(), Fault> {
        self.record("void0", &[])
    }

    pub fn void1(&self, a1: i32) -> Result<(), Fault> {
        self.record("void1", &[a1])
    }

    pub fn void2(&self, a1: i32, a2: i32) -> Result<(), Fault> {
        self.record("void2", &[a1, a2])
    }

    pub fn void3(&self, a1: i32, a2: i32, a3: i32) -> Result<(), Fault> {
        self.record("void3", &[a1, a2, a3])
    }

    pub fn void4(&self, a1: i32, a2: i32, a3: i32, a4: i32) -> Result<(), Fault> {
        self.record("void4", &[a1, a2, a3, a4])
    }

    pub fn void5(&self, a1: i32, a2: i32, a3: i32, a4: i32, a5: i32) -> Result<(), Fault> {
        self.record("void5", &[a1, a2, a3, a4, a5])
    }

    pub fn void6(&self, a1: i32, a2: i32, a3: i32, a4: i32, a5: i32, a6: i32) -> Result<(), Fault> {
        self.record("void6", &[a1, a2, a3, a4, a5, a6])
    }

    pub fn void7(&self, a1: i32, a2: i32, a3: i32, a4: i32, a5: i32, a6: i32, a7: i32) -> Result<(), Fault> {
        self.record("void7", &[a1, a2, a3, a4, a5, a6, a7])
    }

    pub fn void8(&self, a1: i32, a2: i32, a3: i32, a4: i32, a5: i32, a6: i32, a7: i32, a8: i32) -> Result<(), Fault> {
        self.record("void8", &[a1, a2, a3, a4, a5, a6, a7, a8])
    }

    pub fn void9(&self, a1: i32, a2: i32, a3: i32, a4: i32, a5: i32, a6: i32, a7: i32, a8: i32, a9: i32) -> Result<(), Fault> {
        self.record("void9", &[a1, a2, a3, a4, a5, a6, a7, a8, a9])
    }

    pub fn void10(&self, a1: i32, a2: i32, a3: i32, a4: i32, a5: i32, a6: i32, a7: i32, a8: i32, a9: i32, a10: i32) -> Result<(), Fault> {
        self.record("void10", &[a1, a2, a3, a4, a5, a6, a7, a8, a9, a10])
    }

    pub fn returns0(&self) -> Result<String, Fault> {
        self.record("returns0", &[])?;
        Ok(echo("returns0", &[]))
    }

    pub fn returns1(&self, a1: i32) -> Result<String, Fault> {
        self.record("returns1", &[a1])?;
        Ok(echo("returns1", &[a1]))
    }

    pub fn returns2(&self, a1: i32, a2: i32) -> Result<String, Fault> {
        self.record("returns2", &[a1, a2])?;
        Ok(echo("returns2", &[a1, a2]))
    }

    pub fn returns3(&self, a1: i32, a2: i32, a3: i32) -> Result<String, Fault> {
        self.record("returns3", &[a1, a2, a3])?;
        Ok(echo("returns3", &[a1, a2, a3]))
    }

    pub fn returns4(&self, a1: i32, a2: i32, a3: i32, a4: i32) -> Result<String, Fault> {
        self.record("returns4", &[a1, a2, a3, a4])?;
        Ok(echo("returns4", &[a1, a2, a3, a4]))
    }

    pub fn returns5(&self, a1: i32, a2: i32, a3: i32, a4: i32, a5: i32) -> Result<String, Fault> {
        self.record("returns5", &[a1, a2, a3, a4, a5])?;
        Ok(echo("returns5", &[a1, a2, a3, a4, a5]))
    }

    pub fn returns6(&self, a1: i32, a2: i32, a3: i32, a4: i32, a5: i32, a6: i32) -> Result<String, Fault> {
        self.record("returns6", &[a1, a2, a3, a4, a5, a6])?;
        Ok(echo("returns6", &[a1, a2, a3, a4, a5, a6]))
    }

    pub fn returns7(&self, a1: i32, a2: i32, a3: i32, a4: i32, a5: i32, a6: i32, a7: i32) -> Result<String, Fault> {
        self.record("returns7", &[a1, a2, a3, a4, a5, a6, a7])?;
        Ok(echo("returns7", &[a1, a2, a3, a4, a5, a6, a7]))
    }

    pub fn returns8(&self, a1: i32, a2: i32, a3: i32, a4: i32, a5: i32, a6: i32, a7: i32, a8: i32) -> Result<String, Fault> {
        self.record("returns8", &[a1, a2, a3, a4, a5, a6, a7, a8])?;
        Ok(echo("returns8", &[a1, a2, a3, a4, a5, a6, a7, a8]))
    }

    pub fn returns9(&self, a1: i32, a2: i32, a3: i32, a4: i32, a5: i32, a6: i32, a7: i32, a8: i32, a9: i32) -> Result<String, Fault> {
        self.record("returns9", &[a1, a2, a3, a4, a5, a6, a7, a8, a9])?;
        Ok(echo("returns9", &[a1, a2, a3, a4, a5, a6, a7, a8, a9]))
    }

    pub fn returns10(&self, a1: i32, a2: i32, a3: i32, a4: i32, a5: i32, a6: i32, a7: i32, a8: i32, a9: i32, a10: i32) -> Result<String, Fault> {
        self.record("returns10", &[a1, a2, a3, a4, a5, a6, a7, a8, a9, a10])?;
        Ok(echo("returns10", &[a1, a2, a3, a4, a5, a6, a7, a8, a9, a10]))
    }
}

/// The string every `returnsN` method produces.
pub fn echo(method: &str, args: &[i32]) -> String {
    let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
    format!("{}({})", method, args.join(", "))
}

/// Every `Target` method, keyed by name.
pub fn methods() -> MethodTable<Target, Fault> {
    MethodTable::new()
        .with(MethodDescriptor::action("void0", Target::void0))
        .with(MethodDescriptor::action("void1", Target::void1))
        .with(MethodDescriptor::action("void2", Target::void2))
        .with(MethodDescriptor::action("void3", Target::void3))
        .with(MethodDescriptor::action("void4", Target::void4))
        .with(MethodDescriptor::action("void5", Target::void5))
        .with(MethodDescriptor::action("void6", Target::void6))
        .with(MethodDescriptor::action("void7", Target::void7))
        .with(MethodDescriptor::action("void8", Target::void8))
        .with(MethodDescriptor::action("void9", Target::void9))
        .with(MethodDescriptor::action("void10", Target::void10))
        .with(MethodDescriptor::function("returns0", Target::returns0))
        .with(MethodDescriptor::function("returns1", Target::returns1))
        .with(MethodDescriptor::function("returns2", Target::returns2))
        .with(MethodDescriptor::function("returns3", Target::returns3))
        .with(MethodDescriptor::function("returns4", Target::returns4))
        .with(MethodDescriptor::function("returns5", Target::returns5))
        .with(MethodDescriptor::function("returns6", Target::returns6))
        .with(MethodDescriptor::function("returns7", Target::returns7))
        .with(MethodDescriptor::function("returns8", Target::returns8))
        .with(MethodDescriptor::function("returns9", Target::returns9))
        .with(MethodDescriptor::function("returns10", Target::returns10))
}

/// `[1, 2, .., n]`
pub fn ordinals(n: usize) -> Vec<i32> {
    (1..=n as i32).collect()
}

/// Installs a test-friendly subscriber once; `RUST_LOG` picks the level.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
