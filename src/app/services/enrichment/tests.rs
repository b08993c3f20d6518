use super::*;
use crate::app::adapters::geocoder::{
    AddressComponent, GeocodeCandidate, Geometry, LatLng, LookupQuery,
};
use crate::{Error, Result};
use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;
use tokio::sync::Barrier;

fn component(long_name: &str, short_name: &str, kind: &str) -> AddressComponent {
    AddressComponent {
        long_name: long_name.to_string(),
        short_name: short_name.to_string(),
        types: vec![kind.to_string(), "political".to_string()],
    }
}

fn eisenstadt() -> GeocodeCandidate {
    GeocodeCandidate {
        address_components: vec![
            component("Eisenstadt", "Eisenstadt", "locality"),
            component("Burgenland", "1", "administrative_area_level_1"),
            component("Eisenstadt-Umgebung", "Eisenstadt-Umgebung", "administrative_area_level_2"),
            component("Austria", "AT", "country"),
        ],
        geometry: Some(Geometry {
            location: Some(LatLng {
                lat: 47.8456,
                lng: 16.5232,
            }),
        }),
    }
}

fn catalog() -> Arc<RegionCatalog> {
    Arc::new(
        RegionCatalog::empty()
            .with_country("AT", "Austria")
            .with_subdivision("AT-1", "Burgenland", Some("AT")),
    )
}

/// Lookup returning canned candidates and counting calls
struct CannedLookup {
    candidates: Vec<GeocodeCandidate>,
    fail_for: Option<String>,
    calls: AtomicUsize,
    queries: Mutex<Vec<LookupQuery>>,
}

impl CannedLookup {
    fn new(candidates: Vec<GeocodeCandidate>) -> Self {
        Self {
            candidates,
            fail_for: None,
            calls: AtomicUsize::new(0),
            queries: Mutex::new(Vec::new()),
        }
    }

    fn failing_for(mut self, postal_code: &str) -> Self {
        self.fail_for = Some(postal_code.to_string());
        self
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LookupService for CannedLookup {
    async fn lookup(&self, query: &LookupQuery) -> Result<Vec<GeocodeCandidate>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.queries.lock().unwrap().push(query.clone());

        if let LookupQuery::Address { postal_code, .. } = query {
            if self.fail_for.as_ref() == Some(postal_code) {
                return Err(Error::lookup("OVER_QUERY_LIMIT"));
            }
        }
        Ok(self.candidates.clone())
    }
}

fn batcher(lookup: Arc<CannedLookup>) -> EnrichmentBatcher {
    EnrichmentBatcher::new(lookup, catalog()).with_settings(EnrichmentSettings {
        chunk_size: 2,
        chunk_delay: Duration::ZERO,
    })
}

fn complete_entry() -> EntryRecord {
    EntryRecord::new("AT", "7000")
        .with_municipality("Eisenstadt")
        .with_admin(AdminLevel::One, Some("Burgenland"), Some("01"))
        .with_coordinates(47.8, 16.5)
}

#[test]
fn test_candidate_selection() {
    let options = EnrichmentOptions::default();

    assert!(!is_candidate(&complete_entry(), &options));
    assert!(is_candidate(&EntryRecord::new("AT", "7000"), &options));

    let no_admin = EntryRecord::new("AT", "7000").with_coordinates(47.8, 16.5);
    assert!(is_candidate(&no_admin, &options));

    let forced = EnrichmentOptions {
        force_lookup: true,
        pass: LookupPass::First,
    };
    assert!(is_candidate(&complete_entry(), &forced));
}

#[test]
fn test_second_pass_ignores_first_level_fields() {
    let entry = complete_entry();
    let second = EnrichmentOptions {
        force_lookup: false,
        pass: LookupPass::Second,
    };
    assert!(is_candidate(&entry, &second));

    let with_level_two = entry.with_admin(AdminLevel::Two, Some("Eisenstadt"), None);
    assert!(!is_candidate(&with_level_two, &second));
}

#[test]
fn test_needs_lookup_follows_requested_passes() {
    let complete = vec![complete_entry()];
    assert!(!needs_lookup(&complete, false, false));
    // No level two or three fields, so the relaxed pass still wants it
    assert!(needs_lookup(&complete, false, true));
    assert!(needs_lookup(&complete, true, false));

    let mixed = vec![complete_entry(), EntryRecord::new("AT", "1010")];
    assert!(needs_lookup(&mixed, false, false));
    assert!(!needs_lookup(&[], false, true));
}

#[test]
fn test_matching_candidates_filters_country() {
    let mut foreign = eisenstadt();
    foreign.address_components[3] = component("Hungary", "HU", "country");
    let no_country = GeocodeCandidate {
        address_components: vec![],
        geometry: None,
    };

    let matching = matching_candidates(vec![foreign, eisenstadt(), no_country], "AT");
    assert_eq!(matching, vec![eisenstadt()]);
}

#[test]
fn test_apply_fills_missing_fields() {
    let mut entry = EntryRecord::new("AT", "7000");
    let changed = apply_candidates(&mut entry, &[eisenstadt()], &catalog());

    assert!(changed);
    assert_eq!(entry.municipality.as_deref(), Some("Eisenstadt"));
    assert_eq!(entry.latitude, Some(47.8456));
    assert_eq!(entry.longitude, Some(16.5232));
    assert_eq!(entry.admin_name_1.as_deref(), Some("Burgenland"));
    assert_eq!(entry.admin_code_1.as_deref(), Some("1"));
    // Identical long and short names carry no code
    assert_eq!(entry.admin_name_2.as_deref(), Some("Eisenstadt-Umgebung"));
    assert_eq!(entry.admin_code_2, None);
    assert_eq!(entry.admin_name_3, None);
    assert_eq!(entry.region_code.as_deref(), Some("1"));
}

#[test]
fn test_apply_never_overwrites() {
    let mut entry = EntryRecord::new("AT", "7000")
        .with_municipality("Trausdorf")
        .with_admin(AdminLevel::One, None, Some("01"))
        .with_coordinates(1.0, 2.0)
        .with_region_code("manual");

    apply_candidates(&mut entry, &[eisenstadt()], &catalog());

    assert_eq!(entry.municipality.as_deref(), Some("Trausdorf"));
    assert_eq!(entry.latitude, Some(1.0));
    assert_eq!(entry.admin_name_1, None);
    assert_eq!(entry.admin_code_1.as_deref(), Some("01"));
    assert_eq!(entry.region_code.as_deref(), Some("manual"));
}

#[test]
fn test_apply_is_idempotent() {
    let mut entry = EntryRecord::new("AT", "7000");
    assert!(apply_candidates(&mut entry, &[eisenstadt()], &catalog()));
    let enriched = entry.clone();

    assert!(!apply_candidates(&mut entry, &[eisenstadt()], &catalog()));
    assert_eq!(entry, enriched);
}

#[test]
fn test_region_code_requires_known_subdivision() {
    let mut entry = EntryRecord::new("AT", "7000");
    apply_candidates(&mut entry, &[eisenstadt()], &RegionCatalog::empty());
    assert_eq!(entry.region_code, None);
}

#[test]
fn test_long_short_names_are_not_codes() {
    let candidate = GeocodeCandidate {
        address_components: vec![
            component("Niederösterreich", "Niederösterreich", "administrative_area_level_1"),
            component("Bezirk Baden", "Baden", "administrative_area_level_2"),
            component("Austria", "AT", "country"),
        ],
        geometry: None,
    };
    let mut entry = EntryRecord::new("AT", "2500");
    apply_candidates(&mut entry, &[candidate], &catalog());

    assert_eq!(entry.admin_name_1.as_deref(), Some("Niederösterreich"));
    assert_eq!(entry.admin_code_1, None);
    assert_eq!(entry.admin_code_2, None);
    assert_eq!(entry.latitude, None);
}

#[tokio::test]
async fn test_enrich_only_candidates() {
    let lookup = Arc::new(CannedLookup::new(vec![eisenstadt()]));
    let mut entries = vec![
        complete_entry(),
        EntryRecord::new("AT", "7000"),
        EntryRecord::new("AT", "7001"),
        EntryRecord::new("AT", ""),
    ];

    let stats = batcher(lookup.clone())
        .enrich(&mut entries, &EnrichmentOptions::default())
        .await;

    assert_eq!(lookup.calls(), 2);
    assert_eq!(stats.total, 4);
    assert_eq!(stats.candidates, 3);
    assert_eq!(stats.without_query, 1);
    assert_eq!(stats.requested, 2);
    assert_eq!(stats.updated, 2);
    assert_eq!(entries[0], complete_entry());
    assert_eq!(entries[1].municipality.as_deref(), Some("Eisenstadt"));
    assert_eq!(entries[3].municipality, None);
}

#[tokio::test]
async fn test_failed_lookup_does_not_stop_batch() {
    let lookup = Arc::new(CannedLookup::new(vec![eisenstadt()]).failing_for("7001"));
    let mut entries = vec![
        EntryRecord::new("AT", "7000"),
        EntryRecord::new("AT", "7001"),
        EntryRecord::new("AT", "7002"),
    ];

    let stats = batcher(lookup.clone())
        .enrich(&mut entries, &EnrichmentOptions::default())
        .await;

    assert_eq!(lookup.calls(), 3);
    assert_eq!(stats.failed, 1);
    assert_eq!(stats.updated, 2);
    assert_eq!(entries[1], EntryRecord::new("AT", "7001"));
    assert!(entries[2].has_coordinates());
}

#[tokio::test]
async fn test_unmatched_country_leaves_entry() {
    let mut foreign = eisenstadt();
    foreign.address_components[3] = component("Hungary", "HU", "country");
    let lookup = Arc::new(CannedLookup::new(vec![foreign]));
    let mut entries = vec![EntryRecord::new("AT", "7000")];

    let stats = batcher(lookup)
        .enrich(&mut entries, &EnrichmentOptions::default())
        .await;

    assert_eq!(stats.unmatched, 1);
    assert_eq!(entries[0], EntryRecord::new("AT", "7000"));
}

#[tokio::test]
async fn test_enriching_twice_is_a_no_op() {
    let lookup = Arc::new(CannedLookup::new(vec![eisenstadt()]));
    let batcher = batcher(lookup.clone());
    let options = EnrichmentOptions {
        force_lookup: true,
        pass: LookupPass::First,
    };
    let mut entries = vec![EntryRecord::new("AT", "7000")];

    batcher.enrich(&mut entries, &options).await;
    let once = entries.clone();
    let stats = batcher.enrich(&mut entries, &options).await;

    assert_eq!(entries, once);
    assert_eq!(stats.updated, 0);
    assert_eq!(lookup.calls(), 2);
}

#[tokio::test]
async fn test_chunks_are_delayed() {
    let lookup = Arc::new(CannedLookup::new(vec![]));
    let settings = EnrichmentSettings {
        chunk_size: 2,
        chunk_delay: Duration::from_millis(30),
    };
    let batcher = EnrichmentBatcher::new(lookup.clone(), catalog()).with_settings(settings);
    let mut entries: Vec<EntryRecord> = (0..5)
        .map(|i| EntryRecord::new("AT", format!("70{:02}", i)))
        .collect();

    let started = Instant::now();
    batcher.enrich(&mut entries, &EnrichmentOptions::default()).await;

    // Three chunks, two pauses
    assert!(started.elapsed() >= Duration::from_millis(60));
    assert_eq!(lookup.calls(), 5);
}

#[tokio::test]
async fn test_coordinates_are_used_for_query() {
    let lookup = Arc::new(CannedLookup::new(vec![eisenstadt()]));
    let mut entries = vec![EntryRecord::new("AT", "7000").with_coordinates(47.8, 16.5)];

    batcher(lookup.clone())
        .enrich(&mut entries, &EnrichmentOptions::default())
        .await;

    let queries = lookup.queries.lock().unwrap();
    assert!(matches!(queries[0], LookupQuery::Coordinates { .. }));
    assert_eq!(entries[0].latitude, Some(47.8));
}

#[tokio::test]
async fn test_second_pass_runs_when_requested() {
    let only_level_one = GeocodeCandidate {
        address_components: vec![
            component("Burgenland", "1", "administrative_area_level_1"),
            component("Austria", "AT", "country"),
        ],
        geometry: None,
    };
    let lookup = Arc::new(CannedLookup::new(vec![only_level_one]));
    let mut entries = vec![complete_entry()];

    let stats = batcher(lookup.clone())
        .enrich_passes(&mut entries, false, true)
        .await;

    // The complete entry only qualifies for the relaxed second pass
    assert_eq!(lookup.calls(), 1);
    assert_eq!(stats.candidates, 1);
}

/// Lookup whose calls wait on each other before answering
struct RendezvousLookup {
    barrier: Barrier,
    calls: AtomicUsize,
}

#[async_trait]
impl LookupService for RendezvousLookup {
    async fn lookup(&self, _query: &LookupQuery) -> Result<Vec<GeocodeCandidate>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.barrier.wait().await;
        Ok(vec![eisenstadt()])
    }
}

#[tokio::test]
async fn test_chunk_requests_run_concurrently() {
    let lookup = Arc::new(RendezvousLookup {
        barrier: Barrier::new(4),
        calls: AtomicUsize::new(0),
    });
    let settings = EnrichmentSettings {
        chunk_size: 4,
        chunk_delay: Duration::ZERO,
    };
    let batcher = EnrichmentBatcher::new(lookup.clone(), catalog()).with_settings(settings);
    let mut entries: Vec<EntryRecord> = (0..4)
        .map(|i| EntryRecord::new("AT", format!("70{:02}", i)))
        .collect();

    // Sequential requests would wait on the barrier forever
    let stats = tokio::time::timeout(
        Duration::from_secs(5),
        batcher.enrich(&mut entries, &EnrichmentOptions::default()),
    )
    .await
    .expect("requests within a chunk were not concurrent");

    assert_eq!(lookup.calls.load(Ordering::SeqCst), 4);
    assert_eq!(stats.requested, 4);
    assert_eq!(stats.updated, 4);
}

/// Lookup that answers one postal code slowly and records completion order
struct SlowLookup {
    slow_postal_code: String,
    finished: Mutex<Vec<String>>,
}

#[async_trait]
impl LookupService for SlowLookup {
    async fn lookup(&self, query: &LookupQuery) -> Result<Vec<GeocodeCandidate>> {
        let postal_code = match query {
            LookupQuery::Address { postal_code, .. } => postal_code.clone(),
            LookupQuery::Coordinates { .. } => String::new(),
        };
        if postal_code == self.slow_postal_code {
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        self.finished.lock().unwrap().push(postal_code);
        Ok(vec![])
    }
}

#[tokio::test]
async fn test_slow_request_does_not_hold_up_siblings() {
    let lookup = Arc::new(SlowLookup {
        slow_postal_code: "7000".to_string(),
        finished: Mutex::new(Vec::new()),
    });
    let settings = EnrichmentSettings {
        chunk_size: 3,
        chunk_delay: Duration::ZERO,
    };
    let batcher = EnrichmentBatcher::new(lookup.clone(), catalog()).with_settings(settings);
    let mut entries = vec![
        EntryRecord::new("AT", "7000"),
        EntryRecord::new("AT", "7001"),
        EntryRecord::new("AT", "7002"),
    ];

    let stats = batcher
        .enrich(&mut entries, &EnrichmentOptions::default())
        .await;

    let finished = lookup.finished.lock().unwrap();
    assert_eq!(finished.last().map(String::as_str), Some("7000"));
    assert_eq!(finished.len(), 3);
    assert_eq!(stats.unmatched, 3);
}
