//! Configuration management and validation.
//!
//! Settings are layered: built-in defaults, then an optional TOML file,
//! then environment variables (a `.env` file is honoured), then command
//! line overrides applied by the CLI.

use crate::constants::{
    DEFAULT_CATALOG_FILE, DEFAULT_DATA_DIR, DEFAULT_DB_PORT, DEFAULT_FALLBACK_DIR,
    DEFAULT_HTTP_TIMEOUT_SECS, DEFAULT_LOOKUP_CHUNK_DELAY, DEFAULT_LOOKUP_CHUNK_SIZE,
    DEFAULT_STATEMENT_COUNT, GEONAMES_BASE_URL, GOOGLE_GEOCODE_URL, ZIPCODEBASE_BASE_URL, env,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Global configuration for location processing
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub paths: PathsConfig,
    pub lookup: LookupConfig,
    pub sources: SourcesConfig,
    pub database: DatabaseConfig,
    pub export: ExportConfig,
    pub pipeline: PipelineConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Root of the per-country artifact directories
    pub data_dir: PathBuf,
    /// Pre-scraped data used by the fallback source
    pub fallback_dir: PathBuf,
    /// ISO 3166 catalog JSON
    pub catalog: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            fallback_dir: PathBuf::from(DEFAULT_FALLBACK_DIR),
            catalog: PathBuf::from(DEFAULT_CATALOG_FILE),
        }
    }
}

/// Geocoding lookup settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    /// Requests issued concurrently per chunk
    pub chunk_size: usize,
    /// Pause between chunks in milliseconds
    pub chunk_delay_ms: u64,
    pub timeout_secs: u64,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: GOOGLE_GEOCODE_URL.to_string(),
            chunk_size: DEFAULT_LOOKUP_CHUNK_SIZE,
            chunk_delay_ms: DEFAULT_LOOKUP_CHUNK_DELAY.as_millis() as u64,
            timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }
}

/// Download source settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcesConfig {
    pub geonames_base_url: String,
    pub zipcodebase_base_url: String,
    pub zipcodebase_api_key: Option<String>,
    pub timeout_secs: u64,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            geonames_base_url: GEONAMES_BASE_URL.to_string(),
            zipcodebase_base_url: ZIPCODEBASE_BASE_URL.to_string(),
            zipcodebase_api_key: None,
            timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }
}

/// Target database connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: Option<String>,
    pub database: String,
    pub ssl: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: DEFAULT_DB_PORT,
            user: "postgres".to_string(),
            password: None,
            database: "postgres".to_string(),
            ssl: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Number of insert statements per country
    pub statement_count: usize,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            statement_count: DEFAULT_STATEMENT_COUNT,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Countries processed concurrently
    pub max_concurrent_countries: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_concurrent_countries: num_cpus::get(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Append log output to this file in addition to stderr
    pub file: Option<PathBuf>,
}

impl Config {
    /// Default location of the configuration file
    pub fn default_config_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("location-processor").join("config.toml"))
            .ok_or_else(|| Error::configuration("Could not determine the user config directory"))
    }

    /// Parse a TOML configuration document
    pub fn from_toml(content: &str, file: &str) -> Result<Self> {
        toml::from_str(content).map_err(|source| Error::ConfigFile {
            file: file.to_string(),
            source,
        })
    }

    /// Load defaults, then the optional file, then the process environment
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => {
                let content = std::fs::read_to_string(path).map_err(|e| {
                    Error::io(format!("Failed to read config file {}", path.display()), e)
                })?;
                Self::from_toml(&content, &path.display().to_string())?
            }
            None => Self::default(),
        };

        match dotenvy::dotenv() {
            Ok(path) => debug!("Loaded environment from {}", path.display()),
            Err(e) if e.not_found() => {}
            Err(e) => {
                return Err(Error::configuration(format!(
                    "Failed to load .env file: {}",
                    e
                )));
            }
        }

        config.apply_env(|name| std::env::var(name).ok())?;
        Ok(config)
    }

    /// Apply environment overrides through the given variable reader
    pub fn apply_env<F>(&mut self, var: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| var(name).filter(|value| !value.trim().is_empty());

        if let Some(value) = var(env::GOOGLE_MAPS_API_KEY) {
            self.lookup.api_key = Some(value);
        }
        if let Some(value) = var(env::ZIPCODEBASE_API_KEY) {
            self.sources.zipcodebase_api_key = Some(value);
        }
        if let Some(value) = var(env::DATA_DIR) {
            self.paths.data_dir = PathBuf::from(value);
        }
        if let Some(value) = var(env::DB_HOST) {
            self.database.host = value;
        }
        if let Some(value) = var(env::DB_PORT) {
            self.database.port = value.trim().parse().map_err(|_| {
                Error::configuration(format!(
                    "{} must be a port number, got '{}'",
                    env::DB_PORT, value
                ))
            })?;
        }
        if let Some(value) = var(env::DB_USER) {
            self.database.user = value;
        }
        if let Some(value) = var(env::DB_PASSWORD) {
            self.database.password = Some(value);
        }
        if let Some(value) = var(env::DB_DATABASE) {
            self.database.database = value;
        }
        if let Some(value) = var(env::DB_SSL) {
            self.database.ssl = matches!(
                value.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            );
        }

        Ok(())
    }

    /// Reject settings the pipeline cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.lookup.chunk_size == 0 {
            return Err(Error::configuration("lookup.chunk_size must be greater than 0"));
        }
        if self.export.statement_count == 0 {
            return Err(Error::configuration(
                "export.statement_count must be greater than 0",
            ));
        }
        if self.pipeline.max_concurrent_countries == 0 {
            return Err(Error::configuration(
                "pipeline.max_concurrent_countries must be greater than 0",
            ));
        }
        Ok(())
    }
}
