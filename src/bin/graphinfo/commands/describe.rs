//! `graphinfo describe` command

use anyhow::{Context, Result};

use crate::cli::DescribeArgs;
use graphinfo::ops::{describe_snapshot, OutputFormat};
use graphinfo::util::diagnostic::suggestions;
use graphinfo::util::GlobalContext;

pub fn execute(args: DescribeArgs) -> Result<()> {
    let ctx = GlobalContext::new()?;

    let snapshot = match args.snapshot {
        Some(path) => path,
        None => ctx.find_snapshot().ok_or_else(|| {
            anyhow::anyhow!(
                "could not find BuildGraph.toml in {} or any parent directory\n{}",
                ctx.cwd().display(),
                suggestions::NO_SNAPSHOT
            )
        })?,
    };

    // Config first, CLI flags override
    let mut opts = ctx.config().describe_options();
    if let Some(ref format) = args.format {
        opts.format = format
            .parse::<OutputFormat>()
            .map_err(|e| anyhow::anyhow!("{}", e))?;
    }
    if args.compact {
        opts.pretty = false;
    }

    tracing::debug!("Describing {} as {}", snapshot.display(), opts.format);

    let output = describe_snapshot(&snapshot, &opts)?;

    match args.output {
        Some(path) => {
            std::fs::write(&path, output)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!("Wrote {}", path.display());
        }
        None => print!("{}", output),
    }

    Ok(())
}
