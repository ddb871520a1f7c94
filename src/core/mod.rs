//! Core data structures for graphinfo.
//!
//! This module contains the foundational types of a resolved build graph:
//! - Package identification (PackageId, PackageIdentity)
//! - Targets and products
//! - Resolved packages

pub mod package;
pub mod package_id;
pub mod product;
pub mod target;

pub use package::ResolvedPackage;
pub use package_id::{PackageId, PackageIdentity};
pub use product::{LibraryType, ProductId, ProductType, ResolvedProduct};
pub use target::{ResolvedTarget, TargetId};
