//! Build-system target names.
//!
//! The low-level build executor refers to every compiled artifact by a name
//! that depends on the build configuration. Targets always have such a name;
//! some product kinds do not, so the two capabilities are separate traits.

use thiserror::Error;

use crate::builder::configuration::BuildConfiguration;
use crate::core::{LibraryType, ProductType, ResolvedProduct, ResolvedTarget};

/// Error computing a product's build-system target name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NamingError {
    #[error("{kind} product `{product}` has no build-system target name")]
    Unsupported { product: String, kind: ProductType },
}

/// Computes build-system target names for targets. Infallible.
pub trait TargetNaming {
    fn target_build_name(&self, target: &ResolvedTarget, config: BuildConfiguration) -> String;
}

/// Computes build-system target names for products.
pub trait ProductNaming {
    fn product_build_name(
        &self,
        product: &ResolvedProduct,
        config: BuildConfiguration,
    ) -> Result<String, NamingError>;
}

/// The naming scheme of the llbuild executor.
///
/// - targets: `<c99name>-<config>.module`
/// - executables and snippets: `<name>-<config>.exe`
/// - tests: `<name>-<config>.test`
/// - static libraries: `<name>-<config>.a`
/// - dynamic libraries: `<name>-<config>.dylib`
/// - macros: `<name>-<config>.macro`
#[derive(Debug, Clone, Copy, Default)]
pub struct LlbuildNaming;

impl TargetNaming for LlbuildNaming {
    fn target_build_name(&self, target: &ResolvedTarget, config: BuildConfiguration) -> String {
        format!("{}-{}.module", target.c99_name(), config)
    }
}

impl ProductNaming for LlbuildNaming {
    fn product_build_name(
        &self,
        product: &ResolvedProduct,
        config: BuildConfiguration,
    ) -> Result<String, NamingError> {
        let suffix = match product.product_type() {
            ProductType::Executable | ProductType::Snippet => "exe",
            ProductType::Test => "test",
            ProductType::Library(LibraryType::Static) => "a",
            ProductType::Library(LibraryType::Dynamic) => "dylib",
            ProductType::Macro => "macro",
            kind @ (ProductType::Library(LibraryType::Automatic) | ProductType::Plugin) => {
                return Err(NamingError::Unsupported {
                    product: product.name().to_string(),
                    kind,
                })
            }
        };

        Ok(format!("{}-{}.{}", product.name(), config, suffix))
    }
}
