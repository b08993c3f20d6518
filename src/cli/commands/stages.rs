//! Stage command implementation
//!
//! Runs the requested pipeline stages for every selected country and prints
//! what each stage did.

use super::shared::{
    RunSummary, build_pipeline, load_configuration, print_country_reports, resolve_countries,
    setup_logging,
};
use crate::Result;
use crate::app::models::Stage;
use crate::cli::args::RunArgs;
use indicatif::HumanDuration;
use std::time::Instant;
use tracing::info;

/// Stage command runner
///
/// 1. Set up logging and configuration
/// 2. Build the pipeline and resolve the country selection
/// 3. Run the stages for every country concurrently
/// 4. Report per-country outcomes
pub async fn run_stages(args: &RunArgs, stages: &[Stage]) -> Result<RunSummary> {
    let start_time = Instant::now();

    args.validate()?;
    let config = load_configuration(args)?;
    setup_logging(args, &config.logging)?;

    let pipeline = build_pipeline(&config, args).await?;
    let keys = resolve_countries(&args.countries, pipeline.store())?;

    let reports = pipeline.run_batch(keys, stages).await;

    if args.show_progress() {
        print_country_reports(&reports);
    }

    let summary = RunSummary::from_reports(&reports, start_time.elapsed());
    info!(
        "Finished in {} ({} of {} countries succeeded)",
        HumanDuration(summary.elapsed),
        summary.succeeded,
        summary.countries
    );

    if args.show_progress() {
        summary.print();
    }

    Ok(summary)
}
