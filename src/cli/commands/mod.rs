//! Command implementations for the location processor CLI
//!
//! Each command lives in its own module:
//! - `stages`: download, enrich, normalize, export, deploy and process
//! - `validate`: region code coverage of normalized data
//! - `partition`: dropping country partitions

pub mod partition;
pub mod shared;
pub mod stages;
pub mod validate;

pub use shared::RunSummary;

use crate::app::models::Stage;
use crate::cli::args::{Args, Commands};
use crate::{Error, Result};

/// Main command runner
///
/// Dispatches to the subcommand handler. Commands that touch the database
/// are refused before any work starts when no partition was given.
pub async fn run(args: Args) -> Result<RunSummary> {
    let Some(command) = args.get_command() else {
        return Err(Error::configuration("No command given"));
    };

    let run_args = command.run_args();
    if command.needs_partition() && run_args.partition.is_none() {
        return Err(Error::configuration(
            "A partition ('a' or 'b') is mandatory for deploying",
        ));
    }

    match command {
        Commands::Validate(validate_args) => validate::run_validate(validate_args).await,
        Commands::DropPartition(partition_args) => {
            partition::run_drop_partition(partition_args).await
        }
        _ => stages::run_stages(run_args, &stages_for(command)).await,
    }
}

/// Stages a pipeline command runs, in order
pub fn stages_for(command: &Commands) -> Vec<Stage> {
    let mut stages = match command {
        Commands::Download(_) => vec![Stage::Download],
        Commands::Enrich(_) => vec![Stage::Enrich],
        Commands::Normalize(_) => vec![Stage::Normalize],
        Commands::Export(_) => vec![Stage::Export],
        Commands::Deploy(_) => vec![Stage::Deploy],
        Commands::Process(_) => vec![
            Stage::Download,
            Stage::Enrich,
            Stage::Normalize,
            Stage::Export,
        ],
        Commands::Validate(_) | Commands::DropPartition(_) => Vec::new(),
    };

    let deploy_after =
        matches!(command, Commands::Export(args) | Commands::Process(args) if args.deploy);
    if deploy_after {
        stages.push(Stage::Deploy);
    }

    stages
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn command(args: &[&str]) -> Commands {
        Args::try_parse_from(args).unwrap().command.unwrap()
    }

    #[test]
    fn test_stages_for_commands() {
        assert_eq!(
            stages_for(&command(&["location-processor", "enrich", "--countries", "AT"])),
            vec![Stage::Enrich]
        );
        assert_eq!(
            stages_for(&command(&["location-processor", "process", "--countries", "AT"])),
            vec![Stage::Download, Stage::Enrich, Stage::Normalize, Stage::Export]
        );
        assert_eq!(
            stages_for(&command(&[
                "location-processor",
                "export",
                "--countries",
                "AT",
                "--deploy",
                "--partition",
                "a"
            ])),
            vec![Stage::Export, Stage::Deploy]
        );
        assert!(
            stages_for(&command(&["location-processor", "validate", "--countries", "AT"]))
                .is_empty()
        );
    }

    #[tokio::test]
    async fn test_deploy_without_partition_is_refused() {
        let args =
            Args::try_parse_from(["location-processor", "deploy", "--countries", "AT"]).unwrap();
        let error = run(args).await.unwrap_err();
        assert!(matches!(error, Error::Configuration { .. }));
        assert!(error.to_string().contains("partition"));
    }
}
