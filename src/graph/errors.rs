//! Graph construction error types and diagnostics.

use std::path::PathBuf;

use thiserror::Error;

use crate::util::diagnostic::{suggestions, Diagnostic};

/// Error while building a package graph from a snapshot.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("package `{package}` is declared more than once")]
    DuplicatePackage { package: String },

    #[error("packages `{}` share the identity `{identity}`", .packages.join("`, `"))]
    DuplicateIdentity {
        identity: String,
        packages: Vec<String>,
    },

    #[error("invalid version `{version}` for package `{package}`")]
    InvalidVersion {
        package: String,
        version: String,
        #[source]
        source: semver::Error,
    },

    #[error("package `{package}` depends on unknown package `{dependency}`")]
    UnknownDependency {
        package: String,
        dependency: String,
        available: Vec<String>,
    },

    #[error("target `{target}` is declared more than once in package `{package}`")]
    DuplicateTarget { package: String, target: String },

    #[error("product `{product}` in package `{package}` references unknown target `{target}`")]
    UnknownTarget {
        package: String,
        product: String,
        target: String,
        available: Vec<String>,
    },

    #[error("product `{product}` in package `{package}` has no targets")]
    EmptyProduct { package: String, product: String },

    #[error("cycle detected in package dependency graph")]
    CycleDetected { packages: Vec<String> },
}

/// A snapshot file whose contents do not form a valid graph.
#[derive(Debug, Error)]
#[error("invalid build graph snapshot: {}", .path.display())]
pub struct SnapshotError {
    pub path: PathBuf,
    #[source]
    pub error: GraphError,
}

impl SnapshotError {
    /// Convert to a diagnostic pointing at the snapshot file.
    pub fn to_diagnostic(&self) -> Diagnostic {
        self.error.to_diagnostic().with_location(self.path.clone())
    }
}

impl GraphError {
    /// Convert to a user-friendly diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            GraphError::DuplicatePackage { package } => {
                Diagnostic::error(format!("package `{}` is declared more than once", package))
                    .with_suggestion("Merge the duplicate `[[package]]` entries into one")
            }

            GraphError::DuplicateIdentity { identity, packages } => Diagnostic::error(format!(
                "package identity `{}` is used by more than one package",
                identity
            ))
            .with_context(format!("packages: {}", packages.join(", ")))
            .with_suggestion("Give each package a distinct `identity`"),

            GraphError::InvalidVersion {
                package,
                version,
                source,
            } => Diagnostic::error(format!(
                "invalid version `{}` for package `{}`",
                version, package
            ))
            .with_context(source.to_string())
            .with_suggestion("Use a semantic version such as `1.2.3`"),

            GraphError::UnknownDependency {
                package,
                dependency,
                available,
            } => {
                let mut diag = Diagnostic::error(format!(
                    "`{}` depends on `{}`, which is not in the graph",
                    package, dependency
                ));

                if !available.is_empty() {
                    diag = diag.with_context(format!("known packages: {}", available.join(", ")));
                }

                diag.with_suggestion(suggestions::REGENERATE_SNAPSHOT)
            }

            GraphError::DuplicateTarget { package, target } => Diagnostic::error(format!(
                "target `{}` is declared more than once in `{}`",
                target, package
            ))
            .with_suggestion("Target names must be unique within a package"),

            GraphError::UnknownTarget {
                package,
                product,
                target,
                available,
            } => {
                let mut diag = Diagnostic::error(format!(
                    "product `{}` references target `{}`, which `{}` does not declare",
                    product, target, package
                ));

                if !available.is_empty() {
                    diag = diag.with_context(format!("targets in `{}`: {}", package, available.join(", ")));
                }

                diag.with_suggestion(suggestions::TARGET_NOT_FOUND)
            }

            GraphError::EmptyProduct { package, product } => Diagnostic::error(format!(
                "product `{}` in `{}` has no targets",
                product, package
            ))
            .with_suggestion("Add at least one entry to the product's `targets` list"),

            GraphError::CycleDetected { packages } => {
                Diagnostic::error("cycle detected in package dependency graph")
                    .with_context(format!("cycle: {}", packages.join(" -> ")))
                    .with_suggestion(suggestions::REGENERATE_SNAPSHOT)
            }
        }
    }
}
