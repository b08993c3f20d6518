//! Raw data download sources
//!
//! The download stage asks a [`SourceChain`] for a country's raw entries.
//! The chain tries each [`SourceProvider`] in order and keeps the first
//! success; the pre-scraped fallback always comes last and is the only
//! source consulted when a run forces the fallback.

use crate::app::models::{CountryKey, EntryRecord, RegionCatalog, Subdivision};
use crate::app::services::record_codec;
use crate::config::Config;
use crate::constants::{PROVENANCE_FILE, RAW_ARTIFACT, ZIPCODEBASE_SOURCE};
use crate::{Error, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::io::{Cursor, Read};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Entries obtained from a source together with their provenance
#[derive(Debug, Clone, PartialEq)]
pub struct Download {
    pub entries: Vec<EntryRecord>,
    /// Where the entries came from, persisted next to the raw artifact
    pub source: String,
}

/// A place raw entries for a country can be fetched from
#[async_trait]
pub trait SourceProvider: Send + Sync {
    fn name(&self) -> &str;

    async fn fetch(&self, key: &CountryKey) -> Result<Download>;
}

fn build_client(timeout_secs: u64) -> Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .map_err(|e| Error::http("Failed to build download client", e))
}

fn reject_variant(key: &CountryKey, source: &str) -> Result<()> {
    if key.is_variant() {
        return Err(Error::source_unavailable(
            key.as_str(),
            format!("{} only serves plain country codes", source),
        ));
    }
    Ok(())
}

// =============================================================================
// GeoNames
// =============================================================================

/// GeoNames postal code dumps, one zip archive per country
#[derive(Debug, Clone)]
pub struct GeoNamesSource {
    client: Client,
    base_url: String,
}

impl GeoNamesSource {
    pub fn new(base_url: impl Into<String>, timeout_secs: u64) -> Result<Self> {
        Ok(Self {
            client: build_client(timeout_secs)?,
            base_url: base_url.into(),
        })
    }
}

/// Read one text member out of a zip archive
pub fn extract_archive_member(bytes: &[u8], member: &str) -> Result<String> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| Error::archive("Failed to open downloaded archive", e))?;
    let mut file = archive
        .by_name(member)
        .map_err(|e| Error::archive(format!("Archive has no member {}", member), e))?;

    let mut content = Vec::new();
    file.read_to_end(&mut content)
        .map_err(|e| Error::io(format!("Failed to extract {}", member), e))?;
    Ok(String::from_utf8_lossy(&content).into_owned())
}

#[async_trait]
impl SourceProvider for GeoNamesSource {
    fn name(&self) -> &str {
        "geonames"
    }

    async fn fetch(&self, key: &CountryKey) -> Result<Download> {
        reject_variant(key, self.name())?;

        let code = key.country_code();
        let url = format!("{}/{}.zip", self.base_url.trim_end_matches('/'), code);
        debug!("Downloading {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::http(format!("Download failed for {}", url), e))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(Error::source_unavailable(code, format!("{} not found", url)));
        }

        let bytes = response
            .error_for_status()
            .map_err(|e| Error::http(format!("Download rejected for {}", url), e))?
            .bytes()
            .await
            .map_err(|e| Error::http(format!("Download interrupted for {}", url), e))?;

        let content = extract_archive_member(&bytes, &format!("{}.txt", code))?;
        Ok(Download {
            entries: record_codec::decode(&content),
            source: url,
        })
    }
}

// =============================================================================
// ZipCodeBase
// =============================================================================

#[derive(Debug, Deserialize)]
struct StateCodesResponse {
    #[serde(default)]
    results: serde_json::Value,
}

/// Postal codes listed in a `code/state` response; anything but an array is empty
fn state_codes(results: &serde_json::Value) -> Vec<String> {
    results
        .as_array()
        .map(|codes| {
            codes
                .iter()
                .filter_map(|code| match code {
                    serde_json::Value::String(code) => Some(code.trim().to_string()),
                    serde_json::Value::Number(code) => Some(code.to_string()),
                    _ => None,
                })
                .filter(|code| !code.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

fn region_entries(
    country_code: &str,
    subdivision: &Subdivision,
    codes: Vec<String>,
) -> Vec<EntryRecord> {
    codes
        .into_iter()
        .map(|code| EntryRecord::new(country_code, code).with_region_code(subdivision.suffix()))
        .collect()
}

/// ZipCodeBase postal codes per ISO subdivision
pub struct ZipCodeBaseSource {
    client: Client,
    base_url: String,
    api_key: String,
    catalog: Arc<RegionCatalog>,
}

impl ZipCodeBaseSource {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout_secs: u64,
        catalog: Arc<RegionCatalog>,
    ) -> Result<Self> {
        Ok(Self {
            client: build_client(timeout_secs)?,
            base_url: base_url.into(),
            api_key: api_key.into(),
            catalog,
        })
    }

    async fn codes_for_region(&self, country_code: &str, region_name: &str) -> Result<Vec<String>> {
        let url = format!("{}/code/state", self.base_url.trim_end_matches('/'));
        let response: StateCodesResponse = self
            .client
            .get(&url)
            .query(&[
                ("apikey", self.api_key.as_str()),
                ("state_name", region_name),
                ("country", country_code),
            ])
            .send()
            .await
            .map_err(|e| {
                Error::http(format!("Postal code request failed for {}", region_name), e)
            })?
            .json()
            .await
            .map_err(|e| {
                Error::http(format!("Invalid postal code response for {}", region_name), e)
            })?;

        Ok(state_codes(&response.results))
    }
}

#[async_trait]
impl SourceProvider for ZipCodeBaseSource {
    fn name(&self) -> &str {
        "zipcodebase"
    }

    async fn fetch(&self, key: &CountryKey) -> Result<Download> {
        reject_variant(key, self.name())?;

        let code = key.country_code();
        let mut entries = Vec::new();

        for subdivision in self.catalog.subdivisions_of(code) {
            let codes = self.codes_for_region(code, &subdivision.name).await?;
            debug!("{} postal codes for {} {}", codes.len(), subdivision.code, subdivision.name);
            entries.extend(region_entries(code, subdivision, codes));
        }

        if entries.is_empty() {
            return Err(Error::source_unavailable(code, "zipcodebase returned no postal codes"));
        }

        Ok(Download {
            entries,
            source: ZIPCODEBASE_SOURCE.to_string(),
        })
    }
}

// =============================================================================
// Pre-scraped fallback
// =============================================================================

/// Pre-scraped data laid out as `<dir>/<KEY>/raw.txt` with optional `source.txt`
#[derive(Debug, Clone)]
pub struct FallbackSource {
    dir: PathBuf,
}

impl FallbackSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl SourceProvider for FallbackSource {
    fn name(&self) -> &str {
        "fallback"
    }

    async fn fetch(&self, key: &CountryKey) -> Result<Download> {
        let country_dir = self.dir.join(key.as_str());
        let raw_path = country_dir.join(RAW_ARTIFACT);

        let content = match tokio::fs::read_to_string(&raw_path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::source_unavailable(
                    key.as_str(),
                    format!("no pre-scraped data at {}", raw_path.display()),
                ));
            }
            Err(e) => return Err(Error::io(format!("Failed to read {}", raw_path.display()), e)),
        };

        let source = match tokio::fs::read_to_string(country_dir.join(PROVENANCE_FILE)).await {
            Ok(source) if !source.trim().is_empty() => source.trim().to_string(),
            _ => raw_path.display().to_string(),
        };

        Ok(Download {
            entries: record_codec::decode(&content),
            source,
        })
    }
}

// =============================================================================
// Chain
// =============================================================================

/// Ordered download sources, first success wins
pub struct SourceChain {
    sources: Vec<Arc<dyn SourceProvider>>,
    fallback: Option<Arc<dyn SourceProvider>>,
}

impl SourceChain {
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
            fallback: None,
        }
    }

    pub fn with_source(mut self, source: Arc<dyn SourceProvider>) -> Self {
        self.sources.push(source);
        self
    }

    pub fn with_fallback(mut self, fallback: Arc<dyn SourceProvider>) -> Self {
        self.fallback = Some(fallback);
        self
    }

    /// GeoNames, ZipCodeBase when an API key is configured, then the fallback
    pub fn from_config(config: &Config, catalog: Arc<RegionCatalog>) -> Result<Self> {
        let sources = &config.sources;
        let mut chain = Self::new().with_source(Arc::new(GeoNamesSource::new(
            &sources.geonames_base_url,
            sources.timeout_secs,
        )?));

        match &sources.zipcodebase_api_key {
            Some(api_key) => {
                chain = chain.with_source(Arc::new(ZipCodeBaseSource::new(
                    &sources.zipcodebase_base_url,
                    api_key,
                    sources.timeout_secs,
                    catalog,
                )?));
            }
            None => debug!("No ZipCodeBase API key configured, skipping that source"),
        }

        Ok(chain.with_fallback(Arc::new(FallbackSource::new(&config.paths.fallback_dir))))
    }

    /// Fetch from the first source that yields entries
    pub async fn fetch(&self, key: &CountryKey, force_fallback: bool) -> Result<Download> {
        let providers: Vec<&Arc<dyn SourceProvider>> = if force_fallback {
            self.fallback.iter().collect()
        } else {
            self.sources.iter().chain(self.fallback.iter()).collect()
        };

        let mut failures = Vec::new();
        for provider in providers {
            match provider.fetch(key).await {
                Ok(download) if download.entries.is_empty() => {
                    warn!("{}: {} returned no entries", key, provider.name());
                    failures.push(format!("{}: no entries", provider.name()));
                }
                Ok(download) => {
                    info!(
                        "{}: downloaded {} entries from {}",
                        key,
                        download.entries.len(),
                        provider.name()
                    );
                    return Ok(download);
                }
                Err(e) => {
                    warn!("{}: {} failed: {}", key, provider.name(), e);
                    failures.push(format!("{}: {}", provider.name(), e));
                }
            }
        }

        if failures.is_empty() {
            failures.push("no sources configured".to_string());
        }
        Err(Error::source_unavailable(key.as_str(), failures.join("; ")))
    }
}

impl Default for SourceChain {
    fn default() -> Self {
        Self::new()
    }
}
