//! `graphinfo configs` command

use anyhow::{Context, Result};

use crate::cli::ConfigsArgs;
use graphinfo::BuildConfiguration;

pub fn execute(args: ConfigsArgs) -> Result<()> {
    if args.json {
        let configs: Vec<_> = BuildConfiguration::all().collect();
        let json = serde_json::to_string(&configs).context("failed to serialize configurations")?;
        println!("{}", json);
    } else {
        for config in BuildConfiguration::all() {
            println!("{}", config);
        }
    }

    Ok(())
}
