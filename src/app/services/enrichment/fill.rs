//! Filling entry fields from lookup candidates

use crate::app::adapters::geocoder::GeocodeCandidate;
use crate::app::models::{AdminLevel, EntryRecord, RegionCatalog};
use crate::constants::MAX_ADMIN_CODE_LENGTH;

/// Keep candidates located in the entry's country
pub fn matching_candidates(
    candidates: Vec<GeocodeCandidate>,
    country_code: &str,
) -> Vec<GeocodeCandidate> {
    candidates
        .into_iter()
        .filter(|candidate| {
            candidate
                .component("country")
                .is_some_and(|country| country.short_name == country_code)
        })
        .collect()
}

/// Fill the entry's missing fields from the candidates
///
/// Returns whether any field changed. Present values are never replaced:
/// coordinates only when both are missing, each admin level only when both
/// its name and code are missing.
pub fn apply_candidates(
    entry: &mut EntryRecord,
    candidates: &[GeocodeCandidate],
    catalog: &RegionCatalog,
) -> bool {
    let before = entry.clone();

    if entry.municipality.is_none() {
        entry.municipality = candidates
            .iter()
            .find_map(|c| c.component("locality"))
            .map(|locality| locality.long_name.clone());
    }

    if entry.latitude.is_none() && entry.longitude.is_none() {
        if let Some(location) = candidates.iter().find_map(|c| c.location()) {
            entry.latitude = Some(location.lat);
            entry.longitude = Some(location.lng);
        }
    }

    for level in AdminLevel::ALL {
        let kind = format!("administrative_area_level_{}", level.number());
        let (name, code) = entry.admin_slots_mut(level);
        if name.is_some() || code.is_some() {
            continue;
        }

        if let Some(area) = candidates.iter().find_map(|c| c.component(&kind)) {
            *name = Some(area.long_name.clone());
            if area.short_name != area.long_name
                && area.short_name.chars().count() < MAX_ADMIN_CODE_LENGTH
            {
                *code = Some(area.short_name.clone());
            }
        }
    }

    if entry.region_code.is_none() {
        let country_code = entry.country_code.clone();
        entry.region_code = candidates
            .iter()
            .filter_map(|c| c.component("administrative_area_level_1"))
            .find(|area| catalog.contains_region(&country_code, &area.short_name))
            .map(|area| area.short_name.clone());
    }

    *entry != before
}
