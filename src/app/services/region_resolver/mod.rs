//! Region code resolution
//!
//! Maps the heterogeneous administrative fields of an entry to the suffix of
//! its ISO 3166-2 subdivision code. Each country (or source variant such as
//! `RU2`) has one resolver: a plain function over the entry and the region
//! catalog. Resolvers are combinations of a few rule families:
//!
//! - **passthrough** of a source-provided `admin_code_1`
//! - **table lookups** of an admin name, picked through a fallback chain
//! - **priority checks** (e.g. city codes) that win over the table
//! - **named exceptions** that deliberately yield no region
//!
//! A table miss is an [`UnknownRegion`]; it is reported per entry and never
//! aborts normalization of the remaining entries.

pub mod rules;

mod beyond_europe;
mod central_europe;
mod eastern_europe;
mod great_britain;
mod southeastern_europe;
mod western_europe;

#[cfg(test)]
mod tests;

use crate::app::models::{CountryKey, EntryRecord, RegionCatalog};
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// Outcome of resolving one entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Region suffix, e.g. `VLG` for `BE-VLG`
    Code(String),
    /// The entry legitimately has no region
    NoRegion,
    /// The entry's administrative name is not recognized
    Unknown(UnknownRegion),
}

impl Resolution {
    /// An empty code means no region
    pub fn code(code: &str) -> Self {
        if code.is_empty() {
            Resolution::NoRegion
        } else {
            Resolution::Code(code.to_string())
        }
    }

    pub fn unknown(entry: &EntryRecord, name: Option<&str>) -> Self {
        Resolution::Unknown(UnknownRegion {
            country: entry.country_code.clone(),
            name: name.map(str::to_string),
        })
    }
}

/// Administrative name that no resolver rule recognizes
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown region in {country}: {}", .name.as_deref().unwrap_or("<missing name>"))]
pub struct UnknownRegion {
    pub country: String,
    pub name: Option<String>,
}

/// Resolver function signature
pub type Resolver = fn(&EntryRecord, &RegionCatalog) -> Resolution;

fn passthrough(entry: &EntryRecord, _catalog: &RegionCatalog) -> Resolution {
    rules::passthrough(entry)
}

fn no_region(_entry: &EntryRecord, _catalog: &RegionCatalog) -> Resolution {
    Resolution::NoRegion
}

/// Registry of resolvers keyed by country key
#[derive(Clone)]
pub struct ResolverRegistry {
    resolvers: HashMap<String, Resolver>,
}

impl std::fmt::Debug for ResolverRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolverRegistry")
            .field("keys", &self.keys())
            .finish()
    }
}

impl Default for ResolverRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl ResolverRegistry {
    pub fn empty() -> Self {
        Self {
            resolvers: HashMap::new(),
        }
    }

    /// Registry with every built-in country resolver
    pub fn standard() -> Self {
        let mut registry = Self::empty();

        for key in ["AD", "BE", "CH", "DE", "DZ", "ES", "IE", "LU", "MT", "SK"] {
            registry = registry.with_resolver(key, passthrough);
        }
        registry = registry.with_resolver("VA", no_region);

        let families: [&[(&str, Resolver)]; 6] = [
            western_europe::RESOLVERS,
            central_europe::RESOLVERS,
            eastern_europe::RESOLVERS,
            southeastern_europe::RESOLVERS,
            great_britain::RESOLVERS,
            beyond_europe::RESOLVERS,
        ];
        for (key, resolver) in families.into_iter().flatten() {
            registry = registry.with_resolver(key, *resolver);
        }

        registry
    }

    pub fn with_resolver(mut self, key: &str, resolver: Resolver) -> Self {
        self.resolvers.insert(key.to_ascii_uppercase(), resolver);
        self
    }

    pub fn get(&self, key: &str) -> Option<Resolver> {
        self.resolvers.get(key).copied()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.resolvers.contains_key(key)
    }

    /// Registered keys in sorted order
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.resolvers.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Resolve one entry; `None` when no resolver exists for the key
    pub fn resolve(
        &self,
        key: &CountryKey,
        entry: &EntryRecord,
        catalog: &RegionCatalog,
    ) -> Option<Resolution> {
        self.get(key.as_str())
            .map(|resolver| resolver(entry, catalog))
    }
}

/// Counters reported by a normalization run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizationStats {
    pub total: usize,
    /// Entries that already carried a region code
    pub preset: usize,
    pub resolved: usize,
    pub no_region: usize,
    pub unknown: usize,
    /// Entries left untouched because the country has no resolver
    pub without_resolver: usize,
}

/// Fill missing region codes in place
///
/// Entries with a region code are never touched. Unknown regions are logged
/// and counted, leaving the entry's region code empty.
pub fn normalize_entries(
    key: &CountryKey,
    entries: &mut [EntryRecord],
    registry: &ResolverRegistry,
    catalog: &RegionCatalog,
) -> NormalizationStats {
    let mut stats = NormalizationStats {
        total: entries.len(),
        ..Default::default()
    };

    let Some(resolver) = registry.get(key.as_str()) else {
        stats.preset = entries.iter().filter(|e| e.region_code.is_some()).count();
        stats.without_resolver = stats.total - stats.preset;
        info!("{}: no region resolver, keeping source region codes", key);
        return stats;
    };

    for entry in entries.iter_mut() {
        if entry.region_code.is_some() {
            stats.preset += 1;
            continue;
        }

        match resolver(entry, catalog) {
            Resolution::Code(code) => {
                entry.region_code = Some(code);
                stats.resolved += 1;
            }
            Resolution::NoRegion => {
                stats.no_region += 1;
            }
            Resolution::Unknown(unknown) => {
                warn!("{} (postal code '{}')", unknown, entry.postal_code);
                stats.unknown += 1;
            }
        }
    }

    debug!(
        "{}: {} resolved, {} preset, {} without region, {} unknown",
        key, stats.resolved, stats.preset, stats.no_region, stats.unknown
    );
    stats
}
