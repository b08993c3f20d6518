//! Location Processor Library
//!
//! A Rust library for building postal-code reference data per country and
//! loading it into a partitioned `location.location` table.
//!
//! This library provides tools for:
//! - Decoding and encoding the tab-delimited postal-code record format
//! - Downloading raw data through an ordered chain of sources
//! - Enriching records with a rate-limited geocoding lookup
//! - Resolving heterogeneous administrative names to ISO 3166-2 region codes
//! - Exporting bulk `INSERT` statements and deploying them into a partition
//! - Running every step as a resumable stage backed by per-country artifacts

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod artifact_store;
        pub mod enrichment;
        pub mod pipeline;
        pub mod progress;
        pub mod record_codec;
        pub mod region_resolver;
        pub mod sql_export;
        pub mod validation;
    }
    pub mod adapters {
        pub mod database;
        pub mod geocoder;
        pub mod sources;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{CountryKey, EntryRecord, Partition, RegionCatalog, RunOptions, Stage};
pub use app::services::pipeline::Pipeline;
pub use config::Config;

/// Result type alias for the location processor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for location processing operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Configuration file could not be parsed
    #[error("Configuration file error in '{file}': {source}")]
    ConfigFile {
        file: String,
        #[source]
        source: toml::de::Error,
    },

    /// Country selector is not a usable country key
    #[error("Invalid country key '{key}': {reason}")]
    InvalidCountry { key: String, reason: String },

    /// Every download source failed for a country
    #[error("No source available for {country}: {message}")]
    SourceUnavailable { country: String, message: String },

    /// HTTP transport error talking to an external service
    #[error("HTTP error: {message}")]
    Http {
        message: String,
        #[source]
        source: reqwest::Error,
    },

    /// External lookup service answered with an error status
    #[error("Lookup error: {message}")]
    Lookup { message: String },

    /// Database error during deploy or partition maintenance
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: sqlx::Error,
    },

    /// Downloaded archive could not be read
    #[error("Archive error: {message}")]
    Archive {
        message: String,
        #[source]
        source: zip::result::ZipError,
    },

    /// JSON (de)serialization error
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Stage input artifact is missing and could not be produced
    #[error("Artifact not found: {path}")]
    ArtifactNotFound { path: String },

    /// Values exceed the target column limits
    #[error("{count} constraint violation(s) in {country}: {}", .violations.join("; "))]
    ConstraintViolation {
        country: String,
        count: usize,
        violations: Vec<String>,
    },

    /// Directory traversal error
    #[error("Directory traversal error: {message}")]
    DirectoryTraversal {
        message: String,
        #[source]
        source: walkdir::Error,
    },

    /// Processing interrupted
    #[error("Processing interrupted: {reason}")]
    ProcessingInterrupted { reason: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an invalid country error
    pub fn invalid_country(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidCountry {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Create a source unavailable error
    pub fn source_unavailable(country: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SourceUnavailable {
            country: country.into(),
            message: message.into(),
        }
    }

    /// Create an HTTP error with context
    pub fn http(message: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Http {
            message: message.into(),
            source,
        }
    }

    /// Create a lookup error
    pub fn lookup(message: impl Into<String>) -> Self {
        Self::Lookup {
            message: message.into(),
        }
    }

    /// Create a database error with context
    pub fn database(message: impl Into<String>, source: sqlx::Error) -> Self {
        Self::Database {
            message: message.into(),
            source,
        }
    }

    /// Create an archive error with context
    pub fn archive(message: impl Into<String>, source: zip::result::ZipError) -> Self {
        Self::Archive {
            message: message.into(),
            source,
        }
    }

    /// Create a serialization error with context
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }

    /// Create an artifact not found error
    pub fn artifact_not_found(path: impl Into<String>) -> Self {
        Self::ArtifactNotFound { path: path.into() }
    }

    /// Create a constraint violation error
    pub fn constraint_violation(country: impl Into<String>, violations: Vec<String>) -> Self {
        Self::ConstraintViolation {
            country: country.into(),
            count: violations.len(),
            violations,
        }
    }

    /// Create a processing interrupted error
    pub fn processing_interrupted(reason: impl Into<String>) -> Self {
        Self::ProcessingInterrupted {
            reason: reason.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Self::Http {
            message: "HTTP request failed".to_string(),
            source: error,
        }
    }
}

impl From<sqlx::Error> for Error {
    fn from(error: sqlx::Error) -> Self {
        Self::Database {
            message: "Database operation failed".to_string(),
            source: error,
        }
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(error: zip::result::ZipError) -> Self {
        Self::Archive {
            message: "Archive extraction failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: "JSON processing failed".to_string(),
            source: error,
        }
    }
}

impl From<walkdir::Error> for Error {
    fn from(error: walkdir::Error) -> Self {
        Self::DirectoryTraversal {
            message: "Directory traversal failed".to_string(),
            source: error,
        }
    }
}
