//! Application constants for the location processor
//!
//! Record layout, artifact names, target table layout and the default
//! settings for external services.

use std::time::Duration;

// =============================================================================
// Record Format
// =============================================================================

/// Number of positional fields in an entry record
pub const FIELD_COUNT: usize = 13;

/// Cell delimiter of the canonical text format
pub const FIELD_DELIMITER: char = '\t';

/// Record delimiter of the canonical text format
pub const RECORD_DELIMITER: char = '\n';

// =============================================================================
// Stage Artifacts
// =============================================================================

/// Raw artifact written by the download stage
pub const RAW_ARTIFACT: &str = "raw.txt";

/// Enriched artifact written by the enrich stage
pub const ENRICHED_ARTIFACT: &str = "geocoded.txt";

/// Normalized artifact written by the normalize stage
pub const NORMALIZED_ARTIFACT: &str = "processed.txt";

/// Export artifact written by the export stage
pub const EXPORT_ARTIFACT: &str = "insert.sql";

/// Provenance string of the source that produced the raw artifact
pub const PROVENANCE_FILE: &str = "source.txt";

/// Suffix of a file being written before it is renamed into place
pub const STAGING_SUFFIX: &str = ".tmp";

/// Selector that expands to every country directory under the data dir
pub const ALL_COUNTRIES: &str = "all";

// =============================================================================
// Target Table
// =============================================================================

/// Schema holding the partitioned location table
pub const TABLE_SCHEMA: &str = "location";

/// Parent table of the per-country partitions
pub const TABLE_NAME: &str = "location";

/// Prefix of per-country partition tables
pub const PARTITION_PREFIX: &str = "location_partition";

/// Insert column order, matching the record field order
pub const COLUMN_NAMES: [&str; FIELD_COUNT] = [
    "country_code",
    "postal_code",
    "municipality",
    "admin_name_1",
    "admin_code_1",
    "admin_name_2",
    "admin_code_2",
    "admin_name_3",
    "admin_code_3",
    "latitude",
    "longitude",
    "accuracy",
    "region_code",
];

/// Maximum character length per text column, `None` for numeric columns
pub const COLUMN_LIMITS: [Option<usize>; FIELD_COUNT] = [
    Some(2),
    Some(20),
    Some(180),
    Some(100),
    Some(20),
    Some(100),
    Some(20),
    Some(100),
    Some(20),
    None,
    None,
    None,
    Some(20),
];

/// Number of insert statements an export is split into
pub const DEFAULT_STATEMENT_COUNT: usize = 100;

// =============================================================================
// Enrichment Lookup
// =============================================================================

/// Requests issued concurrently per chunk
pub const DEFAULT_LOOKUP_CHUNK_SIZE: usize = 50;

/// Pause between consecutive chunks
pub const DEFAULT_LOOKUP_CHUNK_DELAY: Duration = Duration::from_millis(1000);

/// Per-request timeout for external HTTP services
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Short names at or above this length are not used as admin codes
pub const MAX_ADMIN_CODE_LENGTH: usize = 4;

pub const GOOGLE_GEOCODE_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";

// =============================================================================
// Download Sources
// =============================================================================

pub const GEONAMES_BASE_URL: &str = "https://download.geonames.org/export/zip";

pub const ZIPCODEBASE_BASE_URL: &str = "https://app.zipcodebase.com/api/v1";

/// Provenance recorded for records obtained from ZipCodeBase
pub const ZIPCODEBASE_SOURCE: &str = "https://zipcodebase.com";

// =============================================================================
// Defaults
// =============================================================================

pub const DEFAULT_DATA_DIR: &str = "./data";

pub const DEFAULT_FALLBACK_DIR: &str = "./fallback";

pub const DEFAULT_CATALOG_FILE: &str = "./data/iso-3166.json";

pub const DEFAULT_DB_PORT: u16 = 5432;

/// Country names that take precedence over the ISO catalog
pub const COUNTRY_NAME_OVERRIDES: [(&str, &str); 5] = [
    ("MD", "Moldova"),
    ("XK", "Kosovo"),
    ("RU", "Russia"),
    ("GB", "United Kingdom"),
    ("VA", "Vatican City"),
];

/// Environment variables read during configuration loading
pub mod env {
    pub const GOOGLE_MAPS_API_KEY: &str = "GOOGLE_MAPS_API_KEY";
    pub const ZIPCODEBASE_API_KEY: &str = "ZIPCODEBASE_API_KEY";
    pub const DATA_DIR: &str = "LOCATION_DATA_DIR";
    pub const DB_HOST: &str = "DB_HOST";
    pub const DB_PORT: &str = "DB_PORT";
    pub const DB_USER: &str = "DB_USER";
    pub const DB_PASSWORD: &str = "DB_PASSWORD";
    pub const DB_DATABASE: &str = "DB_DATABASE";
    pub const DB_SSL: &str = "DB_SSL";
}
