//! Target definitions - the compilation units products are made of.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Index of a target within a [`PackageGraph`](crate::graph::PackageGraph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TargetId(pub(crate) usize);

impl TargetId {
    /// Get the raw arena index.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A resolved target: one buildable compilation unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    name: String,
}

impl ResolvedTarget {
    /// Create a new target with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        ResolvedTarget { name: name.into() }
    }

    /// Get the target name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the C99-compatible form of the target name.
    ///
    /// Letters and digits (Unicode included) and `_` are kept, everything
    /// else becomes `_`, and a leading digit gets a `_` prefix.
    pub fn c99_name(&self) -> String {
        c99_name(&self.name)
    }
}

/// Convert an arbitrary name into a C99 identifier.
pub fn c99_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 1);

    if name.chars().next().is_some_and(char::is_numeric) {
        out.push('_');
    }

    for c in name.chars() {
        if c.is_alphanumeric() || c == '_' {
            out.push(c);
        } else {
            out.push('_');
        }
    }

    out
}
