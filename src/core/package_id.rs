//! Package identification - WHICH package (identity + name + version).
//!
//! PackageId uniquely identifies a package within a resolved graph.
//! It's Arc-wrapped for cheap cloning.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use semver::Version;
use serde::{Deserialize, Serialize};

/// The stable identity string of a package.
///
/// Identities are opaque to this crate: they are copied verbatim from the
/// graph and are what downstream consumers key packages by.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackageIdentity(String);

impl PackageIdentity {
    /// Create an identity from any string-like value.
    pub fn new(identity: impl Into<String>) -> Self {
        PackageIdentity(identity.into())
    }

    /// Get the identity as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PackageIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PackageIdentity {
    fn from(s: &str) -> Self {
        PackageIdentity::new(s)
    }
}

impl From<String> for PackageIdentity {
    fn from(s: String) -> Self {
        PackageIdentity(s)
    }
}

/// A unique identifier for a package in the graph.
///
/// Two ids are equal when their identities are equal; name and version are
/// carried for display.
#[derive(Clone)]
pub struct PackageId {
    inner: Arc<PackageIdInner>,
}

#[derive(Debug)]
struct PackageIdInner {
    identity: PackageIdentity,
    name: String,
    version: Version,
}

impl PackageId {
    /// Create a package ID whose identity is the package name.
    pub fn new(name: impl Into<String>, version: Version) -> Self {
        let name = name.into();
        let identity = PackageIdentity::new(name.clone());
        Self::with_identity(identity, name, version)
    }

    /// Create a package ID with an explicit identity.
    pub fn with_identity(
        identity: impl Into<PackageIdentity>,
        name: impl Into<String>,
        version: Version,
    ) -> Self {
        PackageId {
            inner: Arc::new(PackageIdInner {
                identity: identity.into(),
                name: name.into(),
                version,
            }),
        }
    }

    /// Get the package identity.
    pub fn identity(&self) -> &PackageIdentity {
        &self.inner.identity
    }

    /// Get the package name.
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Get the package version.
    pub fn version(&self) -> &Version {
        &self.inner.version
    }
}

impl PartialEq for PackageId {
    fn eq(&self, other: &Self) -> bool {
        self.inner.identity == other.inner.identity
    }
}

impl Eq for PackageId {}

impl Hash for PackageId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.identity.hash(state)
    }
}

impl PartialOrd for PackageId {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PackageId {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.inner.identity.cmp(&other.inner.identity)
    }
}

impl fmt::Debug for PackageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PackageId")
            .field("identity", &self.inner.identity.as_str())
            .field("name", &self.inner.name)
            .field("version", &self.inner.version)
            .finish()
    }
}

impl fmt::Display for PackageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.inner.identity.as_str() == self.inner.name {
            write!(f, "{} v{}", self.inner.name, self.inner.version)
        } else {
            write!(
                f,
                "{} v{} ({})",
                self.inner.name, self.inner.version, self.inner.identity
            )
        }
    }
}
