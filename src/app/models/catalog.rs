//! ISO 3166 reference catalog
//!
//! Country names (ISO 3166-1) and subdivisions (ISO 3166-2) used to build
//! lookup queries, validate region codes and derive partition names. The
//! catalog is loaded once and passed explicitly to whatever needs it.

use crate::constants::COUNTRY_NAME_OVERRIDES;
use crate::{Error, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, warn};

/// ISO 3166-1 country entry
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CountryName {
    pub alpha2: String,
    pub name: String,
}

/// ISO 3166-2 subdivision entry
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Subdivision {
    /// Full code, e.g. `MA-06`
    pub code: String,
    pub name: String,
    /// Country code for top-level subdivisions, parent subdivision code otherwise
    #[serde(default)]
    pub parent: Option<String>,
}

impl Subdivision {
    /// Part of the code after the country prefix (`MA-06` -> `06`)
    pub fn suffix(&self) -> &str {
        self.code
            .split_once('-')
            .map(|(_, suffix)| suffix)
            .unwrap_or(&self.code)
    }
}

#[derive(Debug, Default, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    countries: Vec<CountryName>,
    #[serde(default)]
    subdivisions: Vec<Subdivision>,
}

/// In-memory ISO 3166 catalog
#[derive(Debug, Clone, Default)]
pub struct RegionCatalog {
    countries: HashMap<String, String>,
    subdivisions: HashMap<String, Subdivision>,
}

impl RegionCatalog {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a catalog from its JSON representation
    pub fn from_json(content: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(content)
            .map_err(|e| Error::serialization("Invalid region catalog", e))?;

        let mut catalog = Self::default();
        for country in file.countries {
            catalog.countries.insert(country.alpha2, country.name);
        }
        for subdivision in file.subdivisions {
            catalog
                .subdivisions
                .insert(subdivision.code.clone(), subdivision);
        }
        Ok(catalog)
    }

    /// Load the catalog file, falling back to an empty catalog if it is absent
    pub async fn load(path: &Path) -> Result<Self> {
        if !tokio::fs::try_exists(path).await.unwrap_or(false) {
            warn!(
                "Region catalog not found at {}, continuing with an empty catalog",
                path.display()
            );
            return Ok(Self::empty());
        }

        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            Error::io(
                format!("Failed to read region catalog {}", path.display()),
                e,
            )
        })?;
        let catalog = Self::from_json(&content)?;
        debug!(
            "Loaded region catalog: {} countries, {} subdivisions",
            catalog.countries.len(),
            catalog.subdivisions.len()
        );
        Ok(catalog)
    }

    pub fn with_country(mut self, alpha2: &str, name: &str) -> Self {
        self.countries.insert(alpha2.to_string(), name.to_string());
        self
    }

    pub fn with_subdivision(mut self, code: &str, name: &str, parent: Option<&str>) -> Self {
        self.subdivisions.insert(
            code.to_string(),
            Subdivision {
                code: code.to_string(),
                name: name.to_string(),
                parent: parent.map(str::to_string),
            },
        );
        self
    }

    /// Display name of a country, preferring the built-in overrides
    pub fn country_name(&self, country_code: &str) -> Option<&str> {
        COUNTRY_NAME_OVERRIDES
            .iter()
            .find(|(code, _)| *code == country_code)
            .map(|(_, name)| *name)
            .or_else(|| self.countries.get(country_code).map(String::as_str))
    }

    pub fn subdivision(&self, code: &str) -> Option<&Subdivision> {
        self.subdivisions.get(code)
    }

    /// Subdivision for a country and region suffix
    pub fn region(&self, country_code: &str, region_code: &str) -> Option<&Subdivision> {
        self.subdivision(&format!("{}-{}", country_code, region_code))
    }

    pub fn contains_region(&self, country_code: &str, region_code: &str) -> bool {
        self.region(country_code, region_code).is_some()
    }

    /// Top-level subdivisions of a country, ordered by code
    pub fn subdivisions_of(&self, country_code: &str) -> Vec<&Subdivision> {
        let mut subdivisions: Vec<&Subdivision> = self
            .subdivisions
            .values()
            .filter(|s| s.parent.as_deref() == Some(country_code))
            .collect();
        subdivisions.sort_by(|a, b| a.code.cmp(&b.code));
        subdivisions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"{
        "countries": [
            {"alpha2": "AT", "name": "Austria"},
            {"alpha2": "GB", "name": "United Kingdom of Great Britain and Northern Ireland"}
        ],
        "subdivisions": [
            {"code": "AT-1", "name": "Burgenland", "parent": "AT"},
            {"code": "AT-2", "name": "Kärnten", "parent": "AT"},
            {"code": "MA-06", "name": "Casablanca-Settat", "parent": "MA"},
            {"code": "MA-CAS", "name": "Casablanca", "parent": "MA-06"}
        ]
    }"#;

    #[test]
    fn test_from_json() {
        let catalog = RegionCatalog::from_json(SAMPLE).unwrap();
        assert_eq!(catalog.country_name("AT"), Some("Austria"));
        assert!(catalog.contains_region("AT", "1"));
        assert!(!catalog.contains_region("AT", "01"));
        assert_eq!(
            catalog.region("MA", "CAS").and_then(|s| s.parent.as_deref()),
            Some("MA-06")
        );
    }

    #[test]
    fn test_country_name_overrides_catalog() {
        let catalog = RegionCatalog::from_json(SAMPLE).unwrap();
        assert_eq!(catalog.country_name("GB"), Some("United Kingdom"));
        assert_eq!(catalog.country_name("XK"), Some("Kosovo"));
        assert_eq!(catalog.country_name("ZZ"), None);
    }

    #[test]
    fn test_subdivisions_of_only_top_level() {
        let catalog = RegionCatalog::from_json(SAMPLE).unwrap();
        let codes: Vec<&str> = catalog
            .subdivisions_of("MA")
            .iter()
            .map(|s| s.code.as_str())
            .collect();
        assert_eq!(codes, vec!["MA-06"]);
        assert_eq!(catalog.subdivisions_of("AT").len(), 2);
        assert_eq!(catalog.subdivisions_of("AT")[0].suffix(), "1");
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(RegionCatalog::from_json("{not json").is_err());
    }

    #[tokio::test]
    async fn test_load_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let catalog = RegionCatalog::load(&temp_dir.path().join("missing.json"))
            .await
            .unwrap();
        assert!(catalog.subdivisions_of("AT").is_empty());
    }

    #[tokio::test]
    async fn test_load_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("iso.json");
        std::fs::write(&path, SAMPLE).unwrap();

        let catalog = RegionCatalog::load(&path).await.unwrap();
        assert_eq!(catalog.subdivision("AT-2").unwrap().name, "Kärnten");
    }
}
