//! Build-system vocabulary.
//!
//! This module defines the build configurations and the names the low-level
//! build executor uses for targets and products.

pub mod configuration;
pub mod naming;

pub use configuration::BuildConfiguration;
pub use naming::{LlbuildNaming, NamingError, ProductNaming, TargetNaming};
