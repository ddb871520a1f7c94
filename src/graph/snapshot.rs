//! Graph snapshots - a resolved graph serialized as TOML.
//!
//! A snapshot lists every package of a resolved graph with its targets,
//! products and dependencies:
//!
//! ```toml
//! [[package]]
//! name = "app"
//! version = "1.0.0"
//! dependencies = ["json"]
//!
//! [[package.target]]
//! name = "App"
//!
//! [[package.product]]
//! name = "app"
//! type = "executable"
//! targets = ["App"]
//! ```

use std::collections::{HashMap, HashSet};
use std::path::Path;

use anyhow::{Context, Result};
use semver::Version;
use serde::{Deserialize, Serialize};

use crate::core::{PackageId, ProductType, ResolvedProduct, ResolvedTarget};
use crate::graph::{GraphError, PackageGraph, SnapshotError};

/// Default snapshot file name.
pub const SNAPSHOT_NAME: &str = "BuildGraph.toml";

/// A graph snapshot as deserialized from TOML.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    #[serde(default, rename = "package")]
    pub packages: Vec<PackageSnapshot>,
}

/// One package entry of a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageSnapshot {
    /// Package name
    pub name: String,

    /// Resolved version (defaults to 0.0.0)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Identity, if it differs from the name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity: Option<String>,

    /// Names of the packages this package depends on
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<String>,

    /// Targets declared by the package
    #[serde(default, rename = "target")]
    pub targets: Vec<TargetSnapshot>,

    /// Products declared by the package
    #[serde(default, rename = "product")]
    pub products: Vec<ProductSnapshot>,
}

/// One target entry of a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetSnapshot {
    pub name: String,
}

/// One product entry of a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSnapshot {
    pub name: String,

    #[serde(rename = "type")]
    pub product_type: ProductType,

    /// Member target names, first one decides the owning package
    #[serde(default)]
    pub targets: Vec<String>,
}

impl GraphSnapshot {
    /// Parse a snapshot from TOML text.
    pub fn parse(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("failed to parse build graph snapshot")
    }

    /// Load a snapshot from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read build graph snapshot: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse build graph snapshot: {}", path.display()))
    }

    /// Build the package graph described by this snapshot.
    pub fn into_graph(self) -> std::result::Result<PackageGraph, GraphError> {
        let mut graph = PackageGraph::new();
        let mut ids: HashMap<String, PackageId> = HashMap::new();
        let mut identities: HashMap<String, String> = HashMap::new();

        // Packages first, so dependency edges can refer to any of them
        for pkg in &self.packages {
            if ids.contains_key(&pkg.name) {
                return Err(GraphError::DuplicatePackage {
                    package: pkg.name.clone(),
                });
            }

            let version = match &pkg.version {
                Some(v) => v.parse::<Version>().map_err(|source| GraphError::InvalidVersion {
                    package: pkg.name.clone(),
                    version: v.clone(),
                    source,
                })?,
                None => Version::new(0, 0, 0),
            };

            let identity = pkg.identity.clone().unwrap_or_else(|| pkg.name.clone());
            if let Some(first) = identities.insert(identity.clone(), pkg.name.clone()) {
                return Err(GraphError::DuplicateIdentity {
                    identity,
                    packages: vec![first, pkg.name.clone()],
                });
            }

            let pkg_id = PackageId::with_identity(identity, pkg.name.clone(), version);

            graph.add_package(pkg_id.clone());
            ids.insert(pkg.name.clone(), pkg_id);
        }

        for pkg in &self.packages {
            let from = &ids[&pkg.name];
            for dep in &pkg.dependencies {
                let to = ids.get(dep).ok_or_else(|| {
                    let mut available: Vec<String> = ids.keys().cloned().collect();
                    available.sort();
                    GraphError::UnknownDependency {
                        package: pkg.name.clone(),
                        dependency: dep.clone(),
                        available,
                    }
                })?;
                graph.add_dependency(from, to);
            }
        }

        if let Some(cycle) = graph.find_cycle() {
            return Err(GraphError::CycleDetected {
                packages: cycle.iter().map(|id| id.name().to_string()).collect(),
            });
        }

        for pkg in self.packages {
            let owner = &ids[&pkg.name];

            let mut seen = HashSet::new();
            let mut by_name = HashMap::new();
            for target in &pkg.targets {
                if !seen.insert(target.name.clone()) {
                    return Err(GraphError::DuplicateTarget {
                        package: pkg.name.clone(),
                        target: target.name.clone(),
                    });
                }
                let id = graph.add_target(ResolvedTarget::new(&target.name), Some(owner));
                by_name.insert(target.name.clone(), id);
            }

            for product in pkg.products {
                if product.targets.is_empty() {
                    return Err(GraphError::EmptyProduct {
                        package: pkg.name.clone(),
                        product: product.name,
                    });
                }

                let targets = product
                    .targets
                    .iter()
                    .map(|name| {
                        by_name.get(name).copied().ok_or_else(|| GraphError::UnknownTarget {
                            package: pkg.name.clone(),
                            product: product.name.clone(),
                            target: name.clone(),
                            available: pkg.targets.iter().map(|t| t.name.clone()).collect(),
                        })
                    })
                    .collect::<std::result::Result<Vec<_>, _>>()?;

                graph.add_product(
                    ResolvedProduct::new(product.name, product.product_type, targets),
                    Some(owner),
                );
            }
        }

        tracing::debug!(
            packages = graph.len(),
            targets = graph.all_targets().count(),
            products = graph.all_products().count(),
            "built package graph from snapshot"
        );

        Ok(graph)
    }
}

/// Load a package graph from a snapshot file.
pub fn load_graph(path: &Path) -> Result<PackageGraph> {
    let snapshot = GraphSnapshot::load(path)?;
    let graph = snapshot
        .into_graph()
        .map_err(|error| SnapshotError {
            path: path.to_path_buf(),
            error,
        })?;
    Ok(graph)
}
