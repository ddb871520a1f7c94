//! Product definitions - what consumers of a package can use.
//!
//! A product is an externally consumable artifact (executable, library,
//! test bundle, plugin, snippet or macro) composed of one or more targets.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::target::TargetId;

/// Index of a product within a [`PackageGraph`](crate::graph::PackageGraph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProductId(pub(crate) usize);

impl ProductId {
    /// Get the raw arena index.
    pub fn index(&self) -> usize {
        self.0
    }
}

/// The linkage of a library product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LibraryType {
    /// Static archive
    Static,

    /// Dynamic/shared library
    Dynamic,

    /// Linkage left to the consumer
    Automatic,
}

impl fmt::Display for LibraryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LibraryType::Static => write!(f, "static"),
            LibraryType::Dynamic => write!(f, "dynamic"),
            LibraryType::Automatic => write!(f, "automatic"),
        }
    }
}

/// The kind of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    /// A library with the given linkage
    Library(LibraryType),

    /// Executable binary
    #[serde(alias = "exe")]
    Executable,

    /// Single-file example program
    Snippet,

    /// Build tool plugin
    Plugin,

    /// Test bundle
    Test,

    /// Compiler macro
    Macro,
}

impl ProductType {
    /// Check if the low-level build executor has a target for this kind.
    ///
    /// Plugins and automatic libraries are never built on their own.
    pub fn has_build_target(&self) -> bool {
        match self {
            ProductType::Plugin | ProductType::Library(LibraryType::Automatic) => false,
            ProductType::Library(LibraryType::Static | LibraryType::Dynamic)
            | ProductType::Executable
            | ProductType::Snippet
            | ProductType::Test
            | ProductType::Macro => true,
        }
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductType::Library(kind) => write!(f, "{} library", kind),
            ProductType::Executable => write!(f, "executable"),
            ProductType::Snippet => write!(f, "snippet"),
            ProductType::Plugin => write!(f, "plugin"),
            ProductType::Test => write!(f, "test"),
            ProductType::Macro => write!(f, "macro"),
        }
    }
}

/// A resolved product with its member targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedProduct {
    name: String,
    product_type: ProductType,
    targets: Vec<TargetId>,
}

impl ResolvedProduct {
    /// Create a new product.
    pub fn new(name: impl Into<String>, product_type: ProductType, targets: Vec<TargetId>) -> Self {
        ResolvedProduct {
            name: name.into(),
            product_type,
            targets,
        }
    }

    /// Get the product name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the product type.
    pub fn product_type(&self) -> ProductType {
        self.product_type
    }

    /// Get the member targets, in declaration order.
    pub fn targets(&self) -> &[TargetId] {
        &self.targets
    }

    /// Get the first member target, which decides the owning package.
    pub fn first_target(&self) -> Option<TargetId> {
        self.targets.first().copied()
    }
}
