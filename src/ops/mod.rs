//! High-level operations.
//!
//! This module contains the implementation of graphinfo commands.

pub mod describe;
pub mod manifest_info;

pub use describe::{describe, describe_snapshot, render, DescribeOptions, OutputFormat};
pub use manifest_info::{
    product_build_names, target_build_names, BuildNameByConfig, ManifestInfo, PackageRef,
    ProductInfo, TargetInfo,
};
