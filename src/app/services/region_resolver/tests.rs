use super::*;
use crate::app::models::AdminLevel;

fn key(s: &str) -> CountryKey {
    s.parse().unwrap()
}

fn resolve(country: &str, entry: &EntryRecord) -> Resolution {
    ResolverRegistry::standard()
        .resolve(&key(country), entry, &RegionCatalog::empty())
        .expect("resolver registered")
}

fn named(country: &str, admin_name_1: &str) -> EntryRecord {
    EntryRecord::new(&country[..2], "1000").with_admin(AdminLevel::One, Some(admin_name_1), None)
}

#[test]
fn test_passthrough_returns_admin_code() {
    let entry = EntryRecord::new("BE", "1000").with_admin(AdminLevel::One, None, Some("VLG"));
    assert_eq!(resolve("BE", &entry), Resolution::Code("VLG".to_string()));
}

#[test]
fn test_passthrough_without_code_is_no_region() {
    let entry = EntryRecord::new("DE", "10115");
    assert_eq!(resolve("DE", &entry), Resolution::NoRegion);
}

#[test]
fn test_austria_table() {
    assert_eq!(
        resolve("AT", &named("AT", "Burgenland")),
        Resolution::Code("01".to_string())
    );
    assert_eq!(
        resolve("AT", &named("AT", "Wien")),
        Resolution::Code("09".to_string())
    );
}

#[test]
fn test_unknown_name_carries_offending_value() {
    let resolution = resolve("AT", &named("AT", "Atlantis"));
    assert_eq!(
        resolution,
        Resolution::Unknown(UnknownRegion {
            country: "AT".to_string(),
            name: Some("Atlantis".to_string()),
        })
    );
}

#[test]
fn test_missing_name_is_unknown() {
    let entry = EntryRecord::new("IT", "00100");
    assert!(matches!(
        resolve("IT", &entry),
        Resolution::Unknown(UnknownRegion { name: None, .. })
    ));
}

#[test]
fn test_fallback_chain_uses_municipality() {
    let entry = EntryRecord::new("FR", "98799").with_municipality("Clipperton Island");
    assert_eq!(resolve("FR", &entry), Resolution::Code("CP".to_string()));

    let entry = named("FR", "Île-de-France").with_municipality("Clipperton Island");
    assert_eq!(resolve("FR", &entry), Resolution::Code("IDF".to_string()));
}

#[test]
fn test_hungary_city_takes_priority() {
    let entry = EntryRecord::new("HU", "4024")
        .with_municipality("Debrecen")
        .with_admin(AdminLevel::One, Some("Hajdú-Bihar"), Some("HB"));
    assert_eq!(resolve("HU", &entry), Resolution::Code("DE".to_string()));

    let entry = EntryRecord::new("HU", "4030")
        .with_municipality("Hajdúszoboszló")
        .with_admin(AdminLevel::One, Some("Hajdú-Bihar"), Some("HB"));
    assert_eq!(resolve("HU", &entry), Resolution::Code("HB".to_string()));
}

#[test]
fn test_belarus_minsk_city() {
    let entry = named("BY", "Minsk").with_municipality("Минск");
    assert_eq!(resolve("BY", &entry), Resolution::Code("HM".to_string()));

    let entry = named("BY", "Minsk").with_municipality("Borisov");
    assert_eq!(resolve("BY", &entry), Resolution::Code("MI".to_string()));

    let entry = EntryRecord::new("BY", "230000").with_admin(AdminLevel::Two, Some("Rodno"), None);
    assert_eq!(resolve("BY", &entry), Resolution::Code("HR".to_string()));
}

#[test]
fn test_sweden_admin_code_wins() {
    let entry =
        EntryRecord::new("SE", "11120").with_admin(AdminLevel::One, Some("Atlantis"), Some("AB"));
    assert_eq!(resolve("SE", &entry), Resolution::Code("AB".to_string()));
}

#[test]
fn test_named_exceptions_yield_no_region() {
    let baikonur = EntryRecord::new("RU", "468320").with_municipality("Байконур");
    assert_eq!(resolve("RU", &baikonur), Resolution::NoRegion);

    let sevastopol = named("RU2", "Sevastopol");
    assert_eq!(resolve("RU2", &sevastopol), Resolution::NoRegion);

    let kktc = named("TR", "Kktc");
    assert_eq!(resolve("TR", &kktc), Resolution::NoRegion);

    assert_eq!(resolve("VA", &named("VA", "Vatican")), Resolution::NoRegion);
    assert_eq!(resolve("MA", &EntryRecord::new("MA", "20000")), Resolution::NoRegion);
    assert_eq!(resolve("SM", &EntryRecord::new("SM", "")), Resolution::NoRegion);
}

#[test]
fn test_russia_chain() {
    let entry = EntryRecord::new("RU", "385000").with_admin(
        AdminLevel::Three,
        Some("Адыгея Республика"),
        None,
    );
    assert_eq!(resolve("RU", &entry), Resolution::Code("AD".to_string()));
    assert_eq!(
        resolve("RU2", &named("RU2", "Altai Republic")),
        Resolution::Code("AL".to_string())
    );
}

#[test]
fn test_san_marino_by_postal_code() {
    let entry = EntryRecord::new("SM", "47890");
    assert_eq!(resolve("SM", &entry), Resolution::Code("07".to_string()));
    assert!(matches!(
        resolve("SM", &EntryRecord::new("SM", "12345")),
        Resolution::Unknown(_)
    ));
}

#[test]
fn test_great_britain_rules() {
    let district = EntryRecord::new("GB", "NW1")
        .with_admin(AdminLevel::One, Some("England"), None)
        .with_admin(AdminLevel::Two, Some("Camden"), None);
    assert_eq!(resolve("GB", &district), Resolution::Code("CMD".to_string()));

    let metropolitan = EntryRecord::new("GB", "ME1")
        .with_admin(AdminLevel::One, Some("Kent"), None)
        .with_admin(AdminLevel::Two, Some("Greater London"), None);
    assert_eq!(resolve("GB", &metropolitan), Resolution::Code("KEN".to_string()));

    let unmapped_county = EntryRecord::new("GB", "M1")
        .with_admin(AdminLevel::One, Some("England"), None)
        .with_admin(AdminLevel::Two, Some("Greater Manchester"), None);
    assert_eq!(resolve("GB", &unmapped_county), Resolution::NoRegion);

    let missing = EntryRecord::new("GB", "GY1").with_admin(AdminLevel::One, Some("Guernsey"), None);
    assert_eq!(resolve("GB", &missing), Resolution::NoRegion);

    let unknown = EntryRecord::new("GB", "ZZ1")
        .with_admin(AdminLevel::One, Some("England"), None)
        .with_admin(AdminLevel::Two, Some("Nowhere"), None);
    assert!(matches!(resolve("GB", &unknown), Resolution::Unknown(_)));
}

#[test]
fn test_morocco_provinces_use_catalog_parent() {
    let catalog = RegionCatalog::empty().with_subdivision("MA-HOC", "Al Hoceïma", Some("MA-01"));
    let registry = ResolverRegistry::standard();
    let entry = named("MA2", "Al Hoceima");

    assert_eq!(
        registry.resolve(&key("MA2"), &entry, &catalog),
        Some(Resolution::Code("01".to_string()))
    );
    // Known province missing from the catalog
    assert!(matches!(
        registry.resolve(&key("MA2"), &entry, &RegionCatalog::empty()),
        Some(Resolution::Unknown(_))
    ));
}

#[test]
fn test_variant_shares_base_rules() {
    let entry = EntryRecord::new("SI", "1000").with_admin(AdminLevel::Two, Some("Ljubljana"), None);
    assert_eq!(resolve("SI", &entry), resolve("SI2", &entry));
    assert_eq!(resolve("SI2", &entry), Resolution::Code("061".to_string()));
}

#[test]
fn test_registry_lookup() {
    let registry = ResolverRegistry::standard();
    assert!(registry.contains("RU2"));
    assert!(!registry.contains("US"));
    let entry = EntryRecord::new("US", "10001");
    assert!(
        registry
            .resolve(&key("US"), &entry, &RegionCatalog::empty())
            .is_none()
    );
    assert!(registry.keys().len() > 50);
}

#[test]
fn test_normalize_entries_counts_outcomes() {
    let mut entries = vec![
        named("AT", "Burgenland"),
        named("AT", "Atlantis"),
        named("AT", "Atlantis").with_region_code("manual"),
        EntryRecord::new("AT", "9999"),
    ];

    let stats = normalize_entries(
        &key("AT"),
        &mut entries,
        &ResolverRegistry::standard(),
        &RegionCatalog::empty(),
    );

    assert_eq!(stats.total, 4);
    assert_eq!(stats.resolved, 1);
    assert_eq!(stats.preset, 1);
    assert_eq!(stats.unknown, 2);
    assert_eq!(entries[0].region_code.as_deref(), Some("01"));
    assert_eq!(entries[1].region_code, None);
    assert_eq!(entries[2].region_code.as_deref(), Some("manual"));
}

#[test]
fn test_normalize_without_resolver_keeps_codes() {
    let mut entries = vec![
        EntryRecord::new("US", "10001").with_region_code("NY"),
        EntryRecord::new("US", "90001"),
    ];

    let stats = normalize_entries(
        &key("US"),
        &mut entries,
        &ResolverRegistry::standard(),
        &RegionCatalog::empty(),
    );

    assert_eq!(stats.preset, 1);
    assert_eq!(stats.without_resolver, 1);
    assert_eq!(entries[0].region_code.as_deref(), Some("NY"));
    assert_eq!(entries[1].region_code, None);
}

#[test]
fn test_custom_resolver_registration() {
    fn fixed(_entry: &EntryRecord, _catalog: &RegionCatalog) -> Resolution {
        Resolution::code("X")
    }

    let registry = ResolverRegistry::empty().with_resolver("zz", fixed);
    assert_eq!(
        registry.resolve(&key("ZZ"), &EntryRecord::new("ZZ", "1"), &RegionCatalog::empty()),
        Some(Resolution::Code("X".to_string()))
    );
}

/// Entry field a resolver reads its region name from
#[derive(Debug, Clone, Copy)]
enum Field {
    AdminName1,
    AdminName2,
    AdminName3,
    AdminCode1,
    Municipality,
    PostalCode,
}

fn entry_with(country: &str, field: Field, value: &str) -> EntryRecord {
    let entry = EntryRecord::new(&country[..2], "1000");
    match field {
        Field::AdminName1 => entry.with_admin(AdminLevel::One, Some(value), None),
        Field::AdminName2 => entry.with_admin(AdminLevel::Two, Some(value), None),
        Field::AdminName3 => entry.with_admin(AdminLevel::Three, Some(value), None),
        Field::AdminCode1 => entry.with_admin(AdminLevel::One, None, Some(value)),
        Field::Municipality => entry.with_municipality(value),
        Field::PostalCode => EntryRecord::new(&country[..2], value),
    }
}

/// One known name per table-driven resolver, in the field it reads first
const TABLE_CASES: &[(&str, Field, &str, &str)] = &[
    ("AL", Field::AdminName1, "Berat County", "01"),
    ("AM", Field::AdminName1, "Aragatsotn Province", "AG"),
    ("AT", Field::AdminName1, "Burgenland", "01"),
    ("BA", Field::AdminName1, "Republika Srpska", "SRP"),
    ("BG", Field::AdminCode1, "BLG", "01"),
    ("BH", Field::AdminName1, "Capital", "13"),
    ("BR", Field::AdminName1, "Bahia", "BA"),
    ("BY", Field::AdminName1, "Brest", "BR"),
    ("CY", Field::AdminName1, "Lefkosia", "01"),
    ("CZ", Field::AdminName1, "Hlavní město Praha", "10"),
    ("DK", Field::AdminName1, "Region Hovedstaden", "84"),
    ("EE", Field::AdminName1, "Harju maakond", "37"),
    ("EG2", Field::AdminName1, "Cairo", "C"),
    ("FI", Field::AdminName1, "Kainuu", "05"),
    ("FR", Field::AdminName1, "Île-de-France", "IDF"),
    ("GE", Field::AdminName1, "Adjara", "AJ"),
    ("GR", Field::AdminName1, "Attica", "I"),
    ("HR", Field::AdminName1, "Zagrebačka", "01"),
    ("IT", Field::AdminName1, "Abruzzi", "65"),
    ("LI", Field::AdminName1, "Balzers", "01"),
    ("LT", Field::AdminName1, "Alytus County", "AL"),
    ("LV", Field::AdminName1, "Riga", "RIX"),
    ("MA", Field::AdminName1, "Casablanca-Settat", "06"),
    ("MC", Field::AdminName3, "Monte-Carlo", "MC"),
    ("MD", Field::AdminName1, "Chisinau", "CU"),
    ("ME2", Field::AdminName1, "Budva", "05"),
    ("MK", Field::AdminName2, "Centar", "814"),
    ("MX", Field::AdminName1, "Aguascalientes", "AGU"),
    ("NL", Field::AdminName1, "Drenthe", "DR"),
    ("NO", Field::AdminName1, "Agder", "42"),
    ("PL", Field::AdminName1, "Mazovia", "14"),
    ("PT", Field::AdminName1, "Aveiro", "01"),
    ("RO", Field::AdminName1, "Alba", "AB"),
    ("RS", Field::AdminName2, "Grad Beograd", "00"),
    ("RU", Field::AdminName1, "Адыгея Республика", "AD"),
    ("RU2", Field::AdminName1, "Adygea, Republic Of", "AD"),
    ("SE", Field::AdminName1, "Stockholm", "AB"),
    ("SI", Field::AdminName2, "Ljubljana", "061"),
    ("SI2", Field::AdminName2, "Ljubljana", "061"),
    ("SM", Field::PostalCode, "47890", "07"),
    ("TN2", Field::AdminName1, "Ariana", "12"),
    ("TR", Field::AdminName1, "Ankara", "06"),
    ("UA", Field::AdminName1, "Cherkaska", "71"),
];

/// Resolvers whose chains end at the municipality
const MUNICIPALITY_FALLBACKS: &[(&str, &str, &str)] = &[
    ("AL", "Berat County", "01"),
    ("AM", "Aragatsotn Province", "AG"),
    ("MD", "Chisinau", "CU"),
    ("MK", "Centar", "814"),
    ("RS", "Grad Beograd", "00"),
    ("SE", "Stockholm", "AB"),
];

const PASSTHROUGH_KEYS: [&str; 10] = ["AD", "BE", "CH", "DE", "DZ", "ES", "IE", "LU", "MT", "SK"];

/// Keys covered by their own tests above
const RULE_KEYS: [&str; 4] = ["GB", "HU", "MA2", "VA"];

#[test]
fn test_every_table_maps_known_and_flags_unmapped_names() {
    for &(country, field, known, code) in TABLE_CASES {
        assert_eq!(
            resolve(country, &entry_with(country, field, known)),
            Resolution::Code(code.to_string()),
            "{} {:?} {}",
            country,
            field,
            known
        );

        let unmapped = entry_with(country, field, "Nowhere Special");
        assert_eq!(
            resolve(country, &unmapped),
            Resolution::Unknown(UnknownRegion {
                country: country[..2].to_string(),
                name: Some("Nowhere Special".to_string()),
            }),
            "{} {:?}",
            country,
            field
        );
    }
}

#[test]
fn test_municipality_ends_fallback_chains() {
    for &(country, known, code) in MUNICIPALITY_FALLBACKS {
        let entry = entry_with(country, Field::Municipality, known);
        assert_eq!(
            resolve(country, &entry),
            Resolution::Code(code.to_string()),
            "{}",
            country
        );
    }
}

#[test]
fn test_passthrough_keys_never_report_unknown() {
    for country in PASSTHROUGH_KEYS {
        let coded = entry_with(country, Field::AdminCode1, "XY");
        assert_eq!(resolve(country, &coded), Resolution::Code("XY".to_string()));

        let named = entry_with(country, Field::AdminName1, "Nowhere Special");
        assert_eq!(resolve(country, &named), Resolution::NoRegion, "{}", country);
    }
    assert_eq!(
        resolve("VA", &entry_with("VA", Field::AdminName1, "Nowhere Special")),
        Resolution::NoRegion
    );
}

#[test]
fn test_every_registered_key_has_a_case() {
    let mut covered: Vec<&str> = TABLE_CASES
        .iter()
        .map(|(country, ..)| *country)
        .chain(PASSTHROUGH_KEYS)
        .chain(RULE_KEYS)
        .collect();
    covered.sort_unstable();

    assert_eq!(ResolverRegistry::standard().keys(), covered);
}
