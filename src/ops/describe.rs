//! Describe a build graph - project it and serialize the result.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::graph::{load_graph, PackageGraph};
use crate::ops::manifest_info::ManifestInfo;

/// Serialization format of the manifest info.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Toml,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Toml => write!(f, "toml"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "toml" => Ok(OutputFormat::Toml),
            _ => Err(format!(
                "invalid output format '{}'; expected 'json' or 'toml'",
                s
            )),
        }
    }
}

/// Options for `describe`.
#[derive(Debug, Clone)]
pub struct DescribeOptions {
    /// Output format
    pub format: OutputFormat,

    /// Pretty-print (JSON only; TOML is always multi-line)
    pub pretty: bool,
}

impl Default for DescribeOptions {
    fn default() -> Self {
        DescribeOptions {
            format: OutputFormat::Json,
            pretty: true,
        }
    }
}

/// Project a graph and serialize the manifest info.
pub fn describe(graph: &PackageGraph, opts: &DescribeOptions) -> Result<String> {
    let info = ManifestInfo::from_graph(graph);

    let total_products = graph.all_products().count();
    let total_targets = graph.all_targets().count();
    tracing::info!(
        "Describing {} of {} products and {} of {} targets",
        info.products.len(),
        total_products,
        info.targets.len(),
        total_targets
    );

    render(&info, opts)
}

/// Load a graph snapshot, project it and serialize the manifest info.
pub fn describe_snapshot(path: &Path, opts: &DescribeOptions) -> Result<String> {
    let graph = load_graph(path)?;
    describe(&graph, opts)
}

/// Serialize manifest info in the requested format.
pub fn render(info: &ManifestInfo, opts: &DescribeOptions) -> Result<String> {
    let mut output = match opts.format {
        OutputFormat::Json if opts.pretty => {
            serde_json::to_string_pretty(info).context("failed to serialize manifest info")?
        }
        OutputFormat::Json => serde_json::to_string(info).context("failed to serialize manifest info")?,
        OutputFormat::Toml => toml::to_string(info).context("failed to serialize manifest info")?,
    };

    if !output.ends_with('\n') {
        output.push('\n');
    }

    Ok(output)
}
