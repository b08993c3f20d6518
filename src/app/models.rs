//! Data models for location processing
//!
//! This module contains the entry record that flows through every stage,
//! the identifiers used to key per-country artifacts, and the run options
//! threaded through the pipeline.

pub mod catalog;

pub use catalog::{CountryName, RegionCatalog, Subdivision};

use crate::constants::{
    ENRICHED_ARTIFACT, EXPORT_ARTIFACT, FIELD_COUNT, NORMALIZED_ARTIFACT, RAW_ARTIFACT,
};
use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Entry Record
// =============================================================================

/// One postal code (or administrative unit) of a country
///
/// Field order matches the positional order of the serialized form. Absent
/// values are always `None`; an empty cell never survives as `Some("")`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryRecord {
    /// ISO 3166-1 alpha-2 country code
    pub country_code: String,

    /// Postal code, empty for some government sourced rows
    pub postal_code: String,

    pub municipality: Option<String>,

    pub admin_name_1: Option<String>,
    pub admin_code_1: Option<String>,
    pub admin_name_2: Option<String>,
    pub admin_code_2: Option<String>,
    pub admin_name_3: Option<String>,
    pub admin_code_3: Option<String>,

    /// WGS84 latitude, present together with `longitude`
    pub latitude: Option<f64>,

    /// WGS84 longitude, present together with `latitude`
    pub longitude: Option<f64>,

    /// Source confidence level of the coordinates
    pub accuracy: Option<i32>,

    /// Region suffix of the ISO 3166-2 subdivision code (`AT-1` -> `1`)
    pub region_code: Option<String>,
}

/// Administrative hierarchy level carried by an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminLevel {
    One,
    Two,
    Three,
}

impl AdminLevel {
    pub const ALL: [AdminLevel; 3] = [AdminLevel::One, AdminLevel::Two, AdminLevel::Three];

    pub fn number(self) -> u8 {
        match self {
            AdminLevel::One => 1,
            AdminLevel::Two => 2,
            AdminLevel::Three => 3,
        }
    }
}

/// Borrowed view of a single record column, used by the codec and exporter
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(Option<&'a str>),
    Float(Option<f64>),
    Integer(Option<i32>),
}

impl EntryRecord {
    /// Create a record with only the required fields set
    pub fn new(country_code: impl Into<String>, postal_code: impl Into<String>) -> Self {
        Self {
            country_code: country_code.into(),
            postal_code: postal_code.into(),
            ..Default::default()
        }
    }

    pub fn with_municipality(mut self, municipality: impl Into<String>) -> Self {
        self.municipality = Some(municipality.into());
        self
    }

    /// Set the name and code of an administrative level
    pub fn with_admin(
        mut self,
        level: AdminLevel,
        name: Option<&str>,
        code: Option<&str>,
    ) -> Self {
        let (name_slot, code_slot) = self.admin_slots_mut(level);
        *name_slot = name.map(str::to_string);
        *code_slot = code.map(str::to_string);
        self
    }

    pub fn with_coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }

    pub fn with_region_code(mut self, region_code: impl Into<String>) -> Self {
        self.region_code = Some(region_code.into());
        self
    }

    /// Both coordinates are present
    pub fn has_coordinates(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }

    pub fn admin_name(&self, level: AdminLevel) -> Option<&str> {
        match level {
            AdminLevel::One => self.admin_name_1.as_deref(),
            AdminLevel::Two => self.admin_name_2.as_deref(),
            AdminLevel::Three => self.admin_name_3.as_deref(),
        }
    }

    pub fn admin_code(&self, level: AdminLevel) -> Option<&str> {
        match level {
            AdminLevel::One => self.admin_code_1.as_deref(),
            AdminLevel::Two => self.admin_code_2.as_deref(),
            AdminLevel::Three => self.admin_code_3.as_deref(),
        }
    }

    /// Mutable name and code slots of an administrative level
    pub fn admin_slots_mut(
        &mut self,
        level: AdminLevel,
    ) -> (&mut Option<String>, &mut Option<String>) {
        match level {
            AdminLevel::One => (&mut self.admin_name_1, &mut self.admin_code_1),
            AdminLevel::Two => (&mut self.admin_name_2, &mut self.admin_code_2),
            AdminLevel::Three => (&mut self.admin_name_3, &mut self.admin_code_3),
        }
    }

    /// All columns in serialized order
    pub fn fields(&self) -> [FieldValue<'_>; FIELD_COUNT] {
        [
            FieldValue::Text(Some(self.country_code.as_str())),
            FieldValue::Text(Some(self.postal_code.as_str())),
            FieldValue::Text(self.municipality.as_deref()),
            FieldValue::Text(self.admin_name_1.as_deref()),
            FieldValue::Text(self.admin_code_1.as_deref()),
            FieldValue::Text(self.admin_name_2.as_deref()),
            FieldValue::Text(self.admin_code_2.as_deref()),
            FieldValue::Text(self.admin_name_3.as_deref()),
            FieldValue::Text(self.admin_code_3.as_deref()),
            FieldValue::Float(self.latitude),
            FieldValue::Float(self.longitude),
            FieldValue::Integer(self.accuracy),
            FieldValue::Text(self.region_code.as_deref()),
        ]
    }
}

// =============================================================================
// Country Key
// =============================================================================

/// Identifier of a per-country pipeline run
///
/// A two-letter country code, optionally followed by a variant suffix for
/// alternate source formats of the same country (`RU2`, `MA2`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CountryKey(String);

impl CountryKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// ISO 3166-1 alpha-2 part of the key
    pub fn country_code(&self) -> &str {
        &self.0[..2]
    }

    pub fn is_variant(&self) -> bool {
        self.0.len() > 2
    }
}

impl FromStr for CountryKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_ascii_uppercase();

        if key.len() < 2 || !key.chars().take(2).all(|c| c.is_ascii_alphabetic()) {
            return Err(Error::invalid_country(
                s,
                "expected a two-letter country code",
            ));
        }

        if !key.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(Error::invalid_country(
                s,
                "variant suffix must be alphanumeric",
            ));
        }

        Ok(Self(key))
    }
}

impl fmt::Display for CountryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Stages and Artifacts
// =============================================================================

/// Named per-country file produced by a stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    Raw,
    Enriched,
    Normalized,
    Export,
}

impl ArtifactKind {
    pub fn file_name(self) -> &'static str {
        match self {
            ArtifactKind::Raw => RAW_ARTIFACT,
            ArtifactKind::Enriched => ENRICHED_ARTIFACT,
            ArtifactKind::Normalized => NORMALIZED_ARTIFACT,
            ArtifactKind::Export => EXPORT_ARTIFACT,
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ArtifactKind::Raw => "raw",
            ArtifactKind::Enriched => "enriched",
            ArtifactKind::Normalized => "normalized",
            ArtifactKind::Export => "export",
        };
        f.write_str(name)
    }
}

/// Pipeline stages in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    Download,
    Enrich,
    Normalize,
    Export,
    Deploy,
}

impl Stage {
    pub const ALL: [Stage; 5] = [
        Stage::Download,
        Stage::Enrich,
        Stage::Normalize,
        Stage::Export,
        Stage::Deploy,
    ];

    /// Artifact written by the stage; deploy writes none
    pub fn output(self) -> Option<ArtifactKind> {
        match self {
            Stage::Download => Some(ArtifactKind::Raw),
            Stage::Enrich => Some(ArtifactKind::Enriched),
            Stage::Normalize => Some(ArtifactKind::Normalized),
            Stage::Export => Some(ArtifactKind::Export),
            Stage::Deploy => None,
        }
    }

    /// Stage whose artifact this stage consumes
    pub fn previous(self) -> Option<Stage> {
        match self {
            Stage::Download => None,
            Stage::Enrich => Some(Stage::Download),
            Stage::Normalize => Some(Stage::Enrich),
            Stage::Export => Some(Stage::Normalize),
            Stage::Deploy => Some(Stage::Export),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Stage::Download => "download",
            Stage::Enrich => "enrich",
            Stage::Normalize => "normalize",
            Stage::Export => "export",
            Stage::Deploy => "deploy",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Run Options
// =============================================================================

/// Target partition slot; deploys alternate between the two
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Partition {
    A,
    B,
}

impl Partition {
    pub fn suffix(self) -> &'static str {
        match self {
            Partition::A => "a",
            Partition::B => "b",
        }
    }
}

impl FromStr for Partition {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a" => Ok(Partition::A),
            "b" => Ok(Partition::B),
            other => Err(Error::configuration(format!(
                "Partition must be 'a' or 'b', got '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// Flags controlling a single pipeline run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunOptions {
    /// Re-run stages even when their artifact exists
    pub force: bool,

    /// Skip the primary and secondary download sources
    pub force_fallback: bool,

    /// Look up every entry, not only incomplete ones
    pub force_lookup: bool,

    /// Run a second, relaxed enrichment pass
    pub lookup_twice: bool,

    /// Enrich from the existing enriched artifact instead of the raw one
    pub reenrich_existing: bool,

    /// Deploy after exporting
    pub deploy: bool,

    /// Partition slot for deploy and partition maintenance
    pub partition: Option<Partition>,
}

impl RunOptions {
    pub fn with_force(mut self) -> Self {
        self.force = true;
        self
    }

    pub fn with_force_fallback(mut self) -> Self {
        self.force_fallback = true;
        self
    }

    pub fn with_force_lookup(mut self) -> Self {
        self.force_lookup = true;
        self
    }

    pub fn with_lookup_twice(mut self) -> Self {
        self.lookup_twice = true;
        self
    }

    pub fn with_reenrich_existing(mut self) -> Self {
        self.reenrich_existing = true;
        self
    }

    pub fn with_deploy(mut self, partition: Partition) -> Self {
        self.deploy = true;
        self.partition = Some(partition);
        self
    }

    pub fn with_partition(mut self, partition: Partition) -> Self {
        self.partition = Some(partition);
        self
    }

    /// Partition required by deploy and partition maintenance
    pub fn require_partition(&self) -> Result<Partition> {
        self.partition.ok_or_else(|| {
            Error::configuration("A partition ('a' or 'b') is mandatory for deploying")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_key_parsing() {
        let key: CountryKey = "ru2".parse().unwrap();
        assert_eq!(key.as_str(), "RU2");
        assert_eq!(key.country_code(), "RU");
        assert!(key.is_variant());

        let plain: CountryKey = " at ".parse().unwrap();
        assert_eq!(plain.as_str(), "AT");
        assert!(!plain.is_variant());

        assert!("A".parse::<CountryKey>().is_err());
        assert!("1A".parse::<CountryKey>().is_err());
        assert!("AT-2".parse::<CountryKey>().is_err());
    }

    #[test]
    fn test_stage_chain() {
        assert_eq!(Stage::Download.previous(), None);
        assert_eq!(Stage::Normalize.previous(), Some(Stage::Enrich));
        assert_eq!(Stage::Deploy.output(), None);
        assert_eq!(Stage::Enrich.output(), Some(ArtifactKind::Enriched));
        assert_eq!(ArtifactKind::Normalized.file_name(), "processed.txt");
    }

    #[test]
    fn test_partition_parsing() {
        assert_eq!("a".parse::<Partition>().unwrap(), Partition::A);
        assert_eq!("B".parse::<Partition>().unwrap(), Partition::B);
        assert!("c".parse::<Partition>().is_err());
    }

    #[test]
    fn test_require_partition() {
        assert!(RunOptions::default().require_partition().is_err());
        let options = RunOptions::default().with_deploy(Partition::B);
        assert_eq!(options.require_partition().unwrap(), Partition::B);
        assert!(options.deploy);
    }

    #[test]
    fn test_admin_slots() {
        let mut entry =
            EntryRecord::new("AT", "7000").with_admin(AdminLevel::Two, Some("Eisenstadt"), None);
        assert_eq!(entry.admin_name(AdminLevel::Two), Some("Eisenstadt"));
        assert_eq!(entry.admin_code(AdminLevel::Two), None);

        let (_, code) = entry.admin_slots_mut(AdminLevel::Two);
        *code = Some("101".to_string());
        assert_eq!(entry.admin_code_2.as_deref(), Some("101"));
    }
}
