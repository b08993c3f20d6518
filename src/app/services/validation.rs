//! Region code coverage of normalized entries
//!
//! Checks a country's normalized entries against the ISO 3166-2 catalog:
//! which subdivisions have no entries at all, and which entries carry a
//! wrong country code or a missing or unknown region code.

use crate::app::models::{EntryRecord, RegionCatalog};
use tracing::debug;

/// Why an entry failed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidEntry {
    WrongCountry { postal_code: String, country_code: String },
    MissingRegion { postal_code: String },
    UnknownRegion { postal_code: String, region_code: String },
}

/// Coverage report for one country
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationReport {
    /// The normalized artifact has no entries
    Empty,
    /// The catalog has no subdivisions for the country
    NotValidatable { country_code: String },
    Checked {
        country_code: String,
        total: usize,
        /// Subdivision codes without a single entry
        missing_regions: Vec<String>,
        invalid: Vec<InvalidEntry>,
    },
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        match self {
            ValidationReport::Checked {
                missing_regions,
                invalid,
                ..
            } => missing_regions.is_empty() && invalid.is_empty(),
            ValidationReport::Empty | ValidationReport::NotValidatable { .. } => true,
        }
    }
}

fn check_entry(
    entry: &EntryRecord,
    country_code: &str,
    catalog: &RegionCatalog,
) -> Option<InvalidEntry> {
    if entry.country_code != country_code {
        return Some(InvalidEntry::WrongCountry {
            postal_code: entry.postal_code.clone(),
            country_code: entry.country_code.clone(),
        });
    }

    let Some(region_code) = entry.region_code.as_deref() else {
        return Some(InvalidEntry::MissingRegion {
            postal_code: entry.postal_code.clone(),
        });
    };

    if !catalog.contains_region(country_code, region_code) {
        return Some(InvalidEntry::UnknownRegion {
            postal_code: entry.postal_code.clone(),
            region_code: region_code.to_string(),
        });
    }

    None
}

/// Validate normalized entries; the first entry decides the country
pub fn validate_entries(entries: &[EntryRecord], catalog: &RegionCatalog) -> ValidationReport {
    let Some(first) = entries.first() else {
        return ValidationReport::Empty;
    };
    let country_code = first.country_code.clone();

    let subdivisions = catalog.subdivisions_of(&country_code);
    if subdivisions.is_empty() {
        return ValidationReport::NotValidatable { country_code };
    }

    let missing_regions = subdivisions
        .iter()
        .filter(|subdivision| {
            !entries.iter().any(|entry| {
                entry.country_code == country_code
                    && entry.region_code.as_deref() == Some(subdivision.suffix())
            })
        })
        .map(|subdivision| subdivision.code.clone())
        .collect();

    let invalid: Vec<InvalidEntry> = entries
        .iter()
        .filter_map(|entry| check_entry(entry, &country_code, catalog))
        .inspect(|problem| debug!("{}: {:?}", country_code, problem))
        .collect();

    ValidationReport::Checked {
        country_code,
        total: entries.len(),
        missing_regions,
        invalid,
    }
}
