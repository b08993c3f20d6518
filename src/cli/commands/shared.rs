//! Shared components for CLI commands
//!
//! Logging setup, layered configuration loading, pipeline construction and
//! the run summary printed at the end of every command.

use crate::app::adapters::database::PostgresStore;
use crate::app::adapters::geocoder::GoogleGeocoder;
use crate::app::adapters::sources::SourceChain;
use crate::app::models::{CountryKey, RegionCatalog};
use crate::app::services::artifact_store::ArtifactStore;
use crate::app::services::enrichment::EnrichmentSettings;
use crate::app::services::pipeline::{CountryReport, Pipeline};
use crate::app::services::sql_export::ExportSettings;
use crate::cli::args::{CountrySelection, RunArgs};
use crate::config::{Config, LoggingConfig};
use crate::{Error, Result};
use colored::Colorize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Outcome of a command across all requested countries
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub countries: usize,
    pub succeeded: usize,
    /// Country key and error message of every failed country
    pub failures: Vec<(String, String)>,
    pub elapsed: Duration,
}

impl RunSummary {
    pub fn from_reports(reports: &[CountryReport], elapsed: Duration) -> Self {
        let failures: Vec<(String, String)> = reports
            .iter()
            .filter_map(|report| {
                report
                    .error
                    .as_ref()
                    .map(|e| (report.key.to_string(), e.to_string()))
            })
            .collect();

        Self {
            countries: reports.len(),
            succeeded: reports.len() - failures.len(),
            failures,
            elapsed,
        }
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn print(&self) {
        println!();
        if self.is_success() {
            println!(
                "{} {} of {} countries in {:.1}s",
                "✓".green().bold(),
                self.succeeded,
                self.countries,
                self.elapsed.as_secs_f64()
            );
        } else {
            println!(
                "{} {} of {} countries failed ({:.1}s)",
                "✗".red().bold(),
                self.failures.len(),
                self.countries,
                self.elapsed.as_secs_f64()
            );
            for (key, message) in &self.failures {
                println!("  {} {}", key.red().bold(), message);
            }
        }
    }
}

/// Print the stage reports of every country
pub fn print_country_reports(reports: &[CountryReport]) {
    for report in reports {
        let marker = if report.is_success() {
            "✓".green().bold()
        } else {
            "✗".red().bold()
        };
        println!("{} {}", marker, report.key.to_string().bold());
        for stage in &report.stages {
            println!("    {}", stage);
        }
        if let Some(error) = &report.error {
            println!("    {}", error.to_string().red());
        }
    }
}

/// Set up structured logging on stderr, plus the optional log file
pub fn setup_logging(args: &RunArgs, logging: &LoggingConfig) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("location_processor={}", log_level)));

    let file_layer = match &logging.file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| Error::io(format!("Failed to open log file {}", path.display()), e))?;
            Some(
                fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(std::sync::Mutex::new(file)),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .with(file_layer)
        .try_init()
        .map_err(|e| Error::configuration(format!("Failed to initialize logging: {}", e)))?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration using layered approach (file -> env -> args)
pub fn load_configuration(args: &RunArgs) -> Result<Config> {
    let default_config_path = if args.config_file.is_none() {
        Config::default_config_path().ok()
    } else {
        None
    };

    let config_file = match &args.config_file {
        Some(path) => Some(path.as_path()),
        None => default_config_path
            .as_ref()
            .filter(|path| path.exists())
            .map(|path| path.as_path()),
    };

    let mut config = Config::load_layered(config_file)?;
    apply_cli_overrides(&mut config, args);
    config.validate()?;

    Ok(config)
}

/// Apply CLI argument overrides to configuration
pub fn apply_cli_overrides(config: &mut Config, args: &RunArgs) {
    if let Some(data_dir) = &args.data_dir {
        config.paths.data_dir = data_dir.clone();
    }
}

/// Build the pipeline and its collaborators from configuration
pub async fn build_pipeline(config: &Config, args: &RunArgs) -> Result<Pipeline> {
    let catalog = Arc::new(RegionCatalog::load(&config.paths.catalog).await?);
    let store = ArtifactStore::new(&config.paths.data_dir);
    let sources = SourceChain::from_config(config, Arc::clone(&catalog))?;

    let export = ExportSettings::default().with_statement_count(config.export.statement_count);
    let record_store = PostgresStore::new(&config.database, export.clone())
        .with_progress(args.show_progress());

    let mut pipeline = Pipeline::new(store, sources, catalog)
        .with_record_store(Arc::new(record_store))
        .with_options(args.run_options())
        .with_enrichment_settings(EnrichmentSettings::from(&config.lookup))
        .with_export_settings(export)
        .with_max_concurrency(config.pipeline.max_concurrent_countries)
        .with_progress(args.show_progress());

    match GoogleGeocoder::new(&config.lookup) {
        Ok(geocoder) => pipeline = pipeline.with_lookup(Arc::new(geocoder)),
        Err(e) => debug!("Geocoding unavailable: {}", e),
    }

    info!("Using data directory {}", config.paths.data_dir.display());
    Ok(pipeline)
}

/// Expand the country selection against the data directory
pub fn resolve_countries(
    selection: &CountrySelection,
    store: &ArtifactStore,
) -> Result<Vec<CountryKey>> {
    let keys = match selection {
        CountrySelection::All => store.discover_countries()?,
        CountrySelection::Keys(keys) => keys.clone(),
    };

    if keys.is_empty() {
        return Err(Error::configuration(format!(
            "No countries found in {}",
            store.root().display()
        )));
    }

    Ok(keys)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::Stage;
    use crate::app::services::pipeline::{StageReport, StageStatus};
    use tempfile::TempDir;

    fn report(key: &str, error: Option<Error>) -> CountryReport {
        CountryReport {
            key: key.parse().unwrap(),
            stages: vec![StageReport {
                stage: Stage::Download,
                status: StageStatus::Skipped,
                records: 0,
                detail: None,
            }],
            error,
        }
    }

    #[test]
    fn test_summary_from_reports() {
        let reports = vec![
            report("AT", None),
            report("LI", Some(Error::source_unavailable("LI", "offline"))),
        ];
        let summary = RunSummary::from_reports(&reports, Duration::from_secs(3));

        assert_eq!(summary.countries, 2);
        assert_eq!(summary.succeeded, 1);
        assert!(!summary.is_success());
        assert_eq!(summary.failures[0].0, "LI");
        assert!(summary.failures[0].1.contains("offline"));
    }

    #[test]
    fn test_resolve_countries() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::create_dir(temp_dir.path().join("BE")).unwrap();
        std::fs::create_dir(temp_dir.path().join("AT")).unwrap();
        let store = ArtifactStore::new(temp_dir.path());

        let all = resolve_countries(&CountrySelection::All, &store).unwrap();
        assert_eq!(all.iter().map(CountryKey::as_str).collect::<Vec<_>>(), vec!["AT", "BE"]);

        let explicit = CountrySelection::Keys(vec!["LU".parse().unwrap()]);
        assert_eq!(resolve_countries(&explicit, &store).unwrap().len(), 1);

        let empty_dir = TempDir::new().unwrap();
        let empty_store = ArtifactStore::new(empty_dir.path());
        assert!(resolve_countries(&CountrySelection::All, &empty_store).is_err());
    }

    #[test]
    fn test_cli_overrides() {
        let mut config = Config::default();
        let args = RunArgs {
            countries: CountrySelection::All,
            force: false,
            force_fallback: false,
            force_lookup: false,
            lookup_twice: false,
            reenrich: false,
            partition: None,
            deploy: false,
            data_dir: Some("/srv/location".into()),
            config_file: None,
            verbose: 0,
            quiet: false,
        };

        apply_cli_overrides(&mut config, &args);
        assert_eq!(config.paths.data_dir, std::path::PathBuf::from("/srv/location"));
    }
}
