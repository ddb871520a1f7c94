//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// graphinfo - Describe the products and targets of a resolved build graph
#[derive(Parser)]
#[command(name = "graphinfo")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the manifest info of a build graph snapshot
    Describe(DescribeArgs),

    /// List the build configurations
    Configs(ConfigsArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct DescribeArgs {
    /// Path to the graph snapshot (defaults to the nearest BuildGraph.toml)
    pub snapshot: Option<PathBuf>,

    /// Output format: json or toml
    #[arg(long)]
    pub format: Option<String>,

    /// Emit compact single-line JSON
    #[arg(long)]
    pub compact: bool,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct ConfigsArgs {
    /// Print as a JSON array
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}
