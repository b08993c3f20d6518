//! Lookup query construction

use crate::app::adapters::geocoder::LookupQuery;
use crate::app::models::{EntryRecord, RegionCatalog};

/// Build the lookup query for an entry
///
/// Coordinates are preferred. Otherwise the postal code is qualified with
/// the best available region hint and the country name. Entries with
/// neither coordinates nor a postal code cannot be looked up.
pub fn build_query(entry: &EntryRecord, catalog: &RegionCatalog) -> Option<LookupQuery> {
    if let (Some(latitude), Some(longitude)) = (entry.latitude, entry.longitude) {
        return Some(LookupQuery::Coordinates {
            latitude,
            longitude,
        });
    }

    if entry.postal_code.is_empty() {
        return None;
    }

    let region = entry
        .region_code
        .as_deref()
        .map(|code| {
            catalog
                .region(&entry.country_code, code)
                .map(|subdivision| subdivision.name.clone())
                .unwrap_or_else(|| code.to_string())
        })
        .or_else(|| entry.municipality.clone())
        .or_else(|| entry.admin_name_1.clone());

    let country = catalog
        .country_name(&entry.country_code)
        .unwrap_or(&entry.country_code)
        .to_string();

    Some(LookupQuery::Address {
        postal_code: entry.postal_code.clone(),
        region,
        country,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::AdminLevel;

    fn catalog() -> RegionCatalog {
        RegionCatalog::empty()
            .with_country("AT", "Austria")
            .with_subdivision("AT-1", "Burgenland", Some("AT"))
    }

    #[test]
    fn test_coordinates_preferred() {
        let entry = EntryRecord::new("AT", "7000").with_coordinates(47.8, 16.5);
        assert_eq!(
            build_query(&entry, &catalog()),
            Some(LookupQuery::Coordinates {
                latitude: 47.8,
                longitude: 16.5
            })
        );
    }

    #[test]
    fn test_region_name_from_catalog() {
        let entry = EntryRecord::new("AT", "7000")
            .with_region_code("1")
            .with_municipality("Eisenstadt");
        let query = build_query(&entry, &catalog()).unwrap();
        assert_eq!(query.to_string(), "7000,Burgenland,Austria");
    }

    #[test]
    fn test_region_hint_fallbacks() {
        let unknown_code = EntryRecord::new("AT", "7000").with_region_code("99");
        assert_eq!(
            build_query(&unknown_code, &catalog()).unwrap().to_string(),
            "7000,99,Austria"
        );

        let admin_only =
            EntryRecord::new("XX", "123").with_admin(AdminLevel::One, Some("North"), None);
        assert_eq!(
            build_query(&admin_only, &catalog()).unwrap().to_string(),
            "123,North,XX"
        );

        let bare = EntryRecord::new("AT", "7000");
        assert_eq!(build_query(&bare, &catalog()).unwrap().to_string(), "7000,Austria");
    }

    #[test]
    fn test_no_query_without_postal_code() {
        let entry = EntryRecord::new("AT", "").with_municipality("Wien");
        assert_eq!(build_query(&entry, &catalog()), None);
    }
}
