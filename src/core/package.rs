//! Package - a resolved package and the targets and products it owns.

use crate::core::product::ProductId;
use crate::core::target::TargetId;
use crate::core::{PackageId, PackageIdentity};

/// A package as it appears in the resolved graph.
#[derive(Debug, Clone)]
pub struct ResolvedPackage {
    /// The package ID
    package_id: PackageId,

    /// Targets owned by this package, in declaration order
    targets: Vec<TargetId>,

    /// Products declared by this package, in declaration order
    products: Vec<ProductId>,
}

impl ResolvedPackage {
    /// Create an empty package.
    pub fn new(package_id: PackageId) -> Self {
        ResolvedPackage {
            package_id,
            targets: Vec::new(),
            products: Vec::new(),
        }
    }

    /// Get the package ID.
    pub fn package_id(&self) -> &PackageId {
        &self.package_id
    }

    /// Get the package identity.
    pub fn identity(&self) -> &PackageIdentity {
        self.package_id.identity()
    }

    /// Get the package name.
    pub fn name(&self) -> &str {
        self.package_id.name()
    }

    /// Get the targets owned by this package.
    pub fn targets(&self) -> &[TargetId] {
        &self.targets
    }

    /// Get the products declared by this package.
    pub fn products(&self) -> &[ProductId] {
        &self.products
    }

    pub(crate) fn push_target(&mut self, target: TargetId) {
        self.targets.push(target);
    }

    pub(crate) fn push_product(&mut self, product: ProductId) {
        self.products.push(product);
    }
}
