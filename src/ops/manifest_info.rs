//! Manifest info - a serializable summary of what a graph builds.
//!
//! For every product and target of a resolved graph, the summary records the
//! owning package and the build-system target name under each build
//! configuration. Items that cannot be attributed to a package, and products
//! the build executor has no name for, are left out.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::builder::{BuildConfiguration, LlbuildNaming, NamingError, ProductNaming, TargetNaming};
use crate::core::{PackageIdentity, ProductType, ResolvedPackage, ResolvedProduct, ResolvedTarget};
use crate::graph::PackageGraph;

/// Build-system target name under each build configuration.
pub type BuildNameByConfig = BTreeMap<BuildConfiguration, String>;

/// The package an item belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageRef {
    pub identity: PackageIdentity,
}

impl From<&ResolvedPackage> for PackageRef {
    fn from(package: &ResolvedPackage) -> Self {
        PackageRef {
            identity: package.identity().clone(),
        }
    }
}

/// Summary of one product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductInfo {
    pub package: PackageRef,
    pub name: String,
    #[serde(rename = "type")]
    pub product_type: ProductType,
    #[serde(rename = "LLBuildTargetNameByConfig")]
    pub build_names: BuildNameByConfig,
}

/// Summary of one target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetInfo {
    pub package: PackageRef,
    pub name: String,
    #[serde(rename = "LLBuildTargetNameByConfig")]
    pub build_names: BuildNameByConfig,
}

/// The products and targets of a graph, in graph iteration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestInfo {
    pub products: Vec<ProductInfo>,
    pub targets: Vec<TargetInfo>,
}

impl ManifestInfo {
    /// Summarize a graph using the llbuild naming scheme.
    pub fn from_graph(graph: &PackageGraph) -> Self {
        Self::from_graph_with(graph, &LlbuildNaming)
    }

    /// Summarize a graph using the given naming scheme.
    ///
    /// Never fails: products and targets that cannot be summarized are
    /// dropped. A naming scheme that panics for a target aborts the call.
    pub fn from_graph_with<N>(graph: &PackageGraph, naming: &N) -> Self
    where
        N: TargetNaming + ProductNaming + ?Sized,
    {
        let products: Vec<ProductInfo> = graph
            .all_products()
            .filter_map(|(_, product)| project_product(graph, product, naming))
            .collect();

        let targets: Vec<TargetInfo> = graph
            .all_targets()
            .filter_map(|(id, target)| {
                let Some(package) = graph.package_for(id) else {
                    tracing::debug!(name = target.name(), "skipping target without owning package");
                    return None;
                };
                Some(project_target(package, target, naming))
            })
            .collect();

        tracing::debug!(
            products = products.len(),
            targets = targets.len(),
            "projected manifest info"
        );

        ManifestInfo { products, targets }
    }

    /// Check if nothing survived projection.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty() && self.targets.is_empty()
    }
}

fn project_product<N>(
    graph: &PackageGraph,
    product: &ResolvedProduct,
    naming: &N,
) -> Option<ProductInfo>
where
    N: ProductNaming + ?Sized,
{
    if !product.product_type().has_build_target() {
        tracing::debug!(
            product = product.name(),
            kind = %product.product_type(),
            "skipping product without build-system target"
        );
        return None;
    }

    let Some(package) = product.first_target().and_then(|t| graph.package_for(t)) else {
        tracing::debug!(product = product.name(), "skipping product without owning package");
        return None;
    };

    match product_build_names(product, naming) {
        Ok(build_names) => Some(ProductInfo {
            package: package.into(),
            name: product.name().to_string(),
            product_type: product.product_type(),
            build_names,
        }),
        Err(e) => {
            tracing::debug!(product = product.name(), error = %e, "skipping unnamed product");
            None
        }
    }
}

fn project_target<N>(package: &ResolvedPackage, target: &ResolvedTarget, naming: &N) -> TargetInfo
where
    N: TargetNaming + ?Sized,
{
    TargetInfo {
        package: package.into(),
        name: target.name().to_string(),
        build_names: target_build_names(target, naming),
    }
}

/// Name a product under every build configuration; any failure fails all.
pub fn product_build_names<N>(
    product: &ResolvedProduct,
    naming: &N,
) -> Result<BuildNameByConfig, NamingError>
where
    N: ProductNaming + ?Sized,
{
    BuildConfiguration::all()
        .map(|config| {
            naming
                .product_build_name(product, config)
                .map(|name| (config, name))
        })
        .collect()
}

/// Name a target under every build configuration.
pub fn target_build_names<N>(target: &ResolvedTarget, naming: &N) -> BuildNameByConfig
where
    N: TargetNaming + ?Sized,
{
    BuildConfiguration::all()
        .map(|config| (config, naming.target_build_name(target, config)))
        .collect()
}
