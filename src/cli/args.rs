//! Command-line argument definitions for the location processor
//!
//! Every subcommand shares the same flags: which countries to run, which
//! stages to force, and where data and configuration live.

use crate::app::models::{CountryKey, Partition, RunOptions};
use crate::constants::ALL_COUNTRIES;
use crate::{Error, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;

/// CLI arguments for the postal code location processor
///
/// Builds per-country postal code reference data in stages: download,
/// enrich through geocoding, normalize region codes, export insert
/// statements and deploy them into a partition of `location.location`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "location-processor",
    version,
    about = "Build postal code reference data per country and load it into PostgreSQL",
    long_about = "Downloads postal code data per country, fills missing coordinates and \
                  administrative areas through a geocoding service, maps administrative \
                  names to ISO 3166-2 region codes and exports bulk insert statements for a \
                  partitioned location table. Every stage writes an artifact under the data \
                  directory and is skipped on later runs unless forced."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Download raw postal code data
    Download(RunArgs),
    /// Fill missing coordinates and administrative areas
    #[command(visible_alias = "geocode")]
    Enrich(RunArgs),
    /// Resolve ISO 3166-2 region codes
    #[command(visible_alias = "map")]
    Normalize(RunArgs),
    /// Write bulk insert statements (and deploy them with --deploy)
    #[command(visible_alias = "sql")]
    Export(RunArgs),
    /// Load exported statements into a fresh partition
    Deploy(RunArgs),
    /// Run download through export (and deploy with --deploy)
    Process(RunArgs),
    /// Report region code coverage of normalized data
    Validate(RunArgs),
    /// Drop the partition of each country
    DropPartition(RunArgs),
}

/// Flags shared by every subcommand
#[derive(Debug, Clone, Parser)]
pub struct RunArgs {
    /// Countries to process
    ///
    /// Either `all` for every country directory under the data directory,
    /// or a comma-separated list of country keys such as `AT,BE,RU2`.
    #[arg(
        long = "countries",
        value_name = "LIST",
        help = "Comma-separated country keys, or 'all' for every country in the data directory"
    )]
    pub countries: CountrySelection,

    #[arg(long = "force", help = "Re-run stages even when their artifact exists")]
    pub force: bool,

    #[arg(
        long = "force-fallback",
        help = "Download only from the pre-scraped fallback data"
    )]
    pub force_fallback: bool,

    #[arg(
        long = "force-lookup",
        help = "Look up every entry, not only incomplete ones"
    )]
    pub force_lookup: bool,

    #[arg(
        long = "lookup-twice",
        help = "Run a second lookup pass for entries still missing lower admin levels"
    )]
    pub lookup_twice: bool,

    #[arg(
        long = "reenrich",
        help = "Enrich from the existing enriched artifact instead of the raw one"
    )]
    pub reenrich: bool,

    #[arg(
        long = "partition",
        value_name = "a|b",
        help = "Partition slot for deploy and drop-partition"
    )]
    pub partition: Option<Partition>,

    #[arg(long = "deploy", help = "Deploy after exporting")]
    pub deploy: bool,

    #[arg(
        long = "data-dir",
        value_name = "PATH",
        help = "Directory holding the per-country artifacts"
    )]
    pub data_dir: Option<PathBuf>,

    #[arg(
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Countries selected on the command line
#[derive(Debug, Clone, PartialEq)]
pub enum CountrySelection {
    /// Every country directory under the data directory
    All,
    Keys(Vec<CountryKey>),
}

impl FromStr for CountrySelection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case(ALL_COUNTRIES) {
            return Ok(CountrySelection::All);
        }

        let mut keys = Vec::new();
        for part in s.split(',').map(str::trim).filter(|part| !part.is_empty()) {
            let key: CountryKey = part.parse()?;
            if !keys.contains(&key) {
                keys.push(key);
            }
        }

        if keys.is_empty() {
            return Err(Error::configuration("Country list cannot be empty"));
        }

        Ok(CountrySelection::Keys(keys))
    }
}

impl Args {
    pub fn get_command(&self) -> Option<&Commands> {
        self.command.as_ref()
    }
}

impl Commands {
    pub fn run_args(&self) -> &RunArgs {
        match self {
            Commands::Download(args)
            | Commands::Enrich(args)
            | Commands::Normalize(args)
            | Commands::Export(args)
            | Commands::Deploy(args)
            | Commands::Process(args)
            | Commands::Validate(args)
            | Commands::DropPartition(args) => args,
        }
    }

    /// Whether the command writes to the database
    pub fn needs_partition(&self) -> bool {
        match self {
            Commands::Deploy(_) | Commands::DropPartition(_) => true,
            Commands::Export(args) | Commands::Process(args) => args.deploy,
            Commands::Download(_)
            | Commands::Enrich(_)
            | Commands::Normalize(_)
            | Commands::Validate(_) => false,
        }
    }
}

impl RunArgs {
    pub fn validate(&self) -> Result<()> {
        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        if let Some(data_dir) = &self.data_dir {
            if data_dir.exists() && !data_dir.is_dir() {
                return Err(Error::configuration(format!(
                    "Data path is not a directory: {}",
                    data_dir.display()
                )));
            }
        }

        Ok(())
    }

    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            force: self.force,
            force_fallback: self.force_fallback,
            force_lookup: self.force_lookup,
            lookup_twice: self.lookup_twice,
            reenrich_existing: self.reenrich,
            deploy: self.deploy,
            partition: self.partition,
        }
    }

    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_country_selection() {
        assert_eq!("all".parse::<CountrySelection>().unwrap(), CountrySelection::All);

        let selection: CountrySelection = "at, be,ru2,AT".parse().unwrap();
        let keys = match selection {
            CountrySelection::Keys(keys) => keys,
            CountrySelection::All => panic!("expected explicit keys"),
        };
        let keys: Vec<&str> = keys.iter().map(CountryKey::as_str).collect();
        assert_eq!(keys, vec!["AT", "BE", "RU2"]);

        assert!(" , ".parse::<CountrySelection>().is_err());
        assert!("A1".parse::<CountrySelection>().is_err());
    }

    #[test]
    fn test_stage_flags() {
        let args = parse(&[
            "location-processor",
            "process",
            "--countries",
            "AT",
            "--force",
            "--lookup-twice",
            "--deploy",
            "--partition",
            "b",
        ]);

        let command = args.get_command().unwrap();
        assert!(matches!(command, Commands::Process(_)));
        assert!(command.needs_partition());

        let options = command.run_args().run_options();
        assert!(options.force);
        assert!(options.lookup_twice);
        assert!(options.deploy);
        assert!(!options.force_lookup);
        assert_eq!(options.partition, Some(Partition::B));
    }

    #[test]
    fn test_aliases() {
        let args = parse(&["location-processor", "geocode", "--countries", "all"]);
        assert!(matches!(args.get_command(), Some(Commands::Enrich(_))));

        let args = parse(&["location-processor", "map", "--countries", "BE"]);
        assert!(matches!(args.get_command(), Some(Commands::Normalize(_))));

        let args = parse(&["location-processor", "sql", "--countries", "BE"]);
        let command = args.get_command().unwrap();
        assert!(matches!(command, Commands::Export(_)));
        assert!(!command.needs_partition());
    }

    #[test]
    fn test_log_levels() {
        let args = parse(&["location-processor", "download", "--countries", "AT", "-vv"]);
        assert_eq!(args.get_command().unwrap().run_args().get_log_level(), "debug");

        let args = parse(&["location-processor", "download", "--countries", "AT", "-q"]);
        let run_args = args.get_command().unwrap().run_args();
        assert_eq!(run_args.get_log_level(), "error");
        assert!(!run_args.show_progress());

        let conflicting = ["location-processor", "download", "--countries", "AT", "-q", "-v"];
        assert!(Args::try_parse_from(conflicting).is_err());
    }

    #[test]
    fn test_invalid_partition() {
        assert!(
            Args::try_parse_from([
                "location-processor",
                "deploy",
                "--countries",
                "AT",
                "--partition",
                "c"
            ])
            .is_err()
        );
    }

    #[test]
    fn test_drop_partition_command() {
        let args = parse(&[
            "location-processor",
            "drop-partition",
            "--countries",
            "AT",
            "--partition",
            "a",
        ]);
        assert!(matches!(args.get_command(), Some(Commands::DropPartition(_))));
    }
}
