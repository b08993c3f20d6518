//! Drop-partition command implementation

use super::shared::{
    RunSummary, build_pipeline, load_configuration, resolve_countries, setup_logging,
};
use crate::Result;
use crate::cli::args::RunArgs;
use colored::Colorize;
use std::time::Instant;
use tracing::{error, info};

/// Drop the selected partition of every country
pub async fn run_drop_partition(args: &RunArgs) -> Result<RunSummary> {
    let start_time = Instant::now();

    args.validate()?;
    let config = load_configuration(args)?;
    setup_logging(args, &config.logging)?;

    let pipeline = build_pipeline(&config, args).await?;
    let keys = resolve_countries(&args.countries, pipeline.store())?;

    let mut summary = RunSummary {
        countries: keys.len(),
        ..RunSummary::default()
    };

    for key in keys {
        match pipeline.drop_partition(&key).await {
            Ok(partition_name) => {
                info!("{}: dropped {}", key, partition_name);
                if !args.quiet {
                    println!("{} {}: dropped {}", "✓".green().bold(), key, partition_name);
                }
                summary.succeeded += 1;
            }
            Err(e) => {
                error!("{}: {}", key, e);
                summary.failures.push((key.to_string(), e.to_string()));
            }
        }
    }

    summary.elapsed = start_time.elapsed();
    if !args.quiet {
        summary.print();
    }

    Ok(summary)
}
