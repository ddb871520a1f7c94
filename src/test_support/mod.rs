//! Test utilities and mocks for graphinfo unit tests.
//!
//! This module provides graph fixtures and naming schemes with controlled
//! behavior, so projection rules can be tested without the llbuild scheme.
//!
//! # Example
//!
//! ```rust,ignore
//! use graphinfo::test_support::{fixtures, PrefixNaming};
//!
//! #[test]
//! fn test_example() {
//!     let graph = fixtures::exe_and_autolib_graph();
//!     let info = ManifestInfo::from_graph_with(&graph, &PrefixNaming::new("P"));
//! }
//! ```

pub mod fixtures;

use crate::builder::{
    BuildConfiguration, LlbuildNaming, NamingError, ProductNaming, TargetNaming,
};
use crate::core::{ResolvedProduct, ResolvedTarget};

/// Names every item `<prefix>_<name>_<config>`.
#[derive(Debug, Clone)]
pub struct PrefixNaming {
    prefix: String,
}

impl PrefixNaming {
    pub fn new(prefix: impl Into<String>) -> Self {
        PrefixNaming {
            prefix: prefix.into(),
        }
    }
}

impl TargetNaming for PrefixNaming {
    fn target_build_name(&self, target: &ResolvedTarget, config: BuildConfiguration) -> String {
        format!("{}_{}_{}", self.prefix, target.name(), config)
    }
}

impl ProductNaming for PrefixNaming {
    fn product_build_name(
        &self,
        product: &ResolvedProduct,
        config: BuildConfiguration,
    ) -> Result<String, NamingError> {
        Ok(format!("{}_{}_{}", self.prefix, product.name(), config))
    }
}

/// Fails to name one product under one configuration; otherwise llbuild names.
#[derive(Debug, Clone)]
pub struct FailingProductNaming {
    product: String,
    config: BuildConfiguration,
}

impl FailingProductNaming {
    pub fn new(product: impl Into<String>, config: BuildConfiguration) -> Self {
        FailingProductNaming {
            product: product.into(),
            config,
        }
    }
}

impl TargetNaming for FailingProductNaming {
    fn target_build_name(&self, target: &ResolvedTarget, config: BuildConfiguration) -> String {
        LlbuildNaming.target_build_name(target, config)
    }
}

impl ProductNaming for FailingProductNaming {
    fn product_build_name(
        &self,
        product: &ResolvedProduct,
        config: BuildConfiguration,
    ) -> Result<String, NamingError> {
        if product.name() == self.product && config == self.config {
            return Err(NamingError::Unsupported {
                product: product.name().to_string(),
                kind: product.product_type(),
            });
        }
        LlbuildNaming.product_build_name(product, config)
    }
}

/// A target naming scheme that violates its contract by panicking.
#[derive(Debug, Clone, Copy)]
pub struct BrokenTargetNaming;

impl TargetNaming for BrokenTargetNaming {
    fn target_build_name(&self, target: &ResolvedTarget, _config: BuildConfiguration) -> String {
        panic!("no name for target `{}`", target.name())
    }
}

impl ProductNaming for BrokenTargetNaming {
    fn product_build_name(
        &self,
        product: &ResolvedProduct,
        config: BuildConfiguration,
    ) -> Result<String, NamingError> {
        LlbuildNaming.product_build_name(product, config)
    }
}
