//! # Shape Catalog
//!
//! The process-wide table of invocation shapes the binder accepts: every
//! arity from 0 to `MAX_ARITY`, in both return modes.
//!
//! ## Invariants
//! - **Populate Once**: Built on first lookup and read-only afterwards.
//! - **Closed**: A shape missing from the table is unsupported. There is no fallback.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::signature::MAX_ARITY;
use crate::signature::ReturnMode;
use crate::signature::Shape;

/// A supported invocation shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub shape: Shape,
    /// Stable diagnostic label, e.g. `action/3` or `function/10`.
    pub label: &'static str,
}

const ACTION_LABELS: [&str; MAX_ARITY + 1] = [
    "action/0", "action/1", "action/2", "action/3", "action/4", "action/5",
    "action/6", "action/7", "action/8", "action/9", "action/10",
];

const FUNCTION_LABELS: [&str; MAX_ARITY + 1] = [
    "function/0", "function/1", "function/2", "function/3", "function/4", "function/5",
    "function/6", "function/7", "function/8", "function/9", "function/10",
];

static CATALOG: LazyLock<BTreeMap<Shape, Entry>> = LazyLock::new(build);

fn build() -> BTreeMap<Shape, Entry> {
    let mut catalog = BTreeMap::new();

    for (arity, label) in ACTION_LABELS.into_iter().enumerate() {
        let shape = Shape { arity, returns: ReturnMode::Nothing };
        catalog.insert(shape, Entry { shape, label });
    }

    for (arity, label) in FUNCTION_LABELS.into_iter().enumerate() {
        let shape = Shape { arity, returns: ReturnMode::Value };
        catalog.insert(shape, Entry { shape, label });
    }

    catalog
}

/// Finds the catalog entry for a shape.
pub fn lookup(shape: Shape) -> Option<&'static Entry> {
    CATALOG.get(&shape)
}

/// All supported shapes, ordered by arity then return mode.
pub fn entries() -> impl Iterator<Item = &'static Entry> {
    CATALOG.values()
}
