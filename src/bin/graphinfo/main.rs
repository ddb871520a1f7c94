//! graphinfo CLI - describe what a resolved build graph builds

use std::io::IsTerminal;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use graphinfo::graph::SnapshotError;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    let color = !cli.no_color && std::io::stderr().is_terminal();

    if let Err(e) = run(cli, color) {
        match e.downcast_ref::<SnapshotError>() {
            Some(snapshot_err) => eprint!("{}", snapshot_err.to_diagnostic().format(color)),
            None => eprintln!("error: {:#}", e),
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli, color: bool) -> Result<()> {
    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("graphinfo=debug")
    } else {
        EnvFilter::new("graphinfo=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(color)
        .with_target(false)
        .without_time()
        .init();

    // Execute command
    match cli.command {
        Commands::Describe(args) => commands::describe::execute(args),
        Commands::Configs(args) => commands::configs::execute(args),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}
