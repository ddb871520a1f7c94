//! graphinfo - describe what a resolved build graph builds
//!
//! This crate projects a resolved package graph into a serializable summary
//! of its products and targets, grouped by owning package, with the name the
//! low-level build executor uses for each of them under every build
//! configuration.

pub mod builder;
pub mod core;
pub mod graph;
pub mod ops;
pub mod util;

/// Test fixtures and naming mocks for graphinfo unit tests.
#[cfg(test)]
pub mod test_support;

pub use builder::{BuildConfiguration, LlbuildNaming, ProductNaming, TargetNaming};
pub use core::{PackageId, ResolvedPackage, ResolvedProduct, ResolvedTarget};
pub use graph::PackageGraph;
pub use ops::ManifestInfo;
pub use util::context::GlobalContext;
