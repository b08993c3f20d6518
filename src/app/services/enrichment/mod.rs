//! Enrichment of entries through the geocoding lookup
//!
//! Entries missing coordinates or administrative fields are looked up in
//! fixed-size chunks. Requests inside a chunk run concurrently; chunks run
//! one after another with a fixed pause in between, which is the only rate
//! limit applied to the external service. A failed request is logged and
//! leaves its entry untouched.
//!
//! Enrichment only ever fills fields that are `None`, so enriching the same
//! entries twice changes nothing the second time.

pub mod fill;
pub mod query;

#[cfg(test)]
mod tests;

pub use fill::{apply_candidates, matching_candidates};
pub use query::build_query;

use crate::app::adapters::geocoder::LookupService;
use crate::app::models::{AdminLevel, EntryRecord, RegionCatalog};
use crate::app::services::progress::progress_bar;
use crate::config::LookupConfig;
use crate::constants::{DEFAULT_LOOKUP_CHUNK_DELAY, DEFAULT_LOOKUP_CHUNK_SIZE};
use futures::future::join_all;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Chunking and pacing of lookup requests
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichmentSettings {
    pub chunk_size: usize,
    pub chunk_delay: Duration,
}

impl Default for EnrichmentSettings {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_LOOKUP_CHUNK_SIZE,
            chunk_delay: DEFAULT_LOOKUP_CHUNK_DELAY,
        }
    }
}

impl From<&LookupConfig> for EnrichmentSettings {
    fn from(config: &LookupConfig) -> Self {
        Self {
            chunk_size: config.chunk_size.max(1),
            chunk_delay: Duration::from_millis(config.chunk_delay_ms),
        }
    }
}

/// Which required-field set decides candidacy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupPass {
    /// Municipality and all three admin levels
    First,
    /// Only admin levels two and three
    Second,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnrichmentOptions {
    /// Look up every entry regardless of completeness
    pub force_lookup: bool,
    pub pass: LookupPass,
}

impl Default for EnrichmentOptions {
    fn default() -> Self {
        Self {
            force_lookup: false,
            pass: LookupPass::First,
        }
    }
}

/// Counters reported by an enrichment run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnrichmentStats {
    pub total: usize,
    pub candidates: usize,
    /// Candidates with neither coordinates nor postal code
    pub without_query: usize,
    pub requested: usize,
    pub failed: usize,
    /// Requests that returned no candidate in the entry's country
    pub unmatched: usize,
    /// Entries that gained at least one field
    pub updated: usize,
}

impl EnrichmentStats {
    pub fn merge(&mut self, other: &EnrichmentStats) {
        self.total = self.total.max(other.total);
        self.candidates += other.candidates;
        self.without_query += other.without_query;
        self.requested += other.requested;
        self.failed += other.failed;
        self.unmatched += other.unmatched;
        self.updated += other.updated;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryOutcome {
    NoQuery,
    Failed,
    Unmatched,
    Matched { updated: bool },
}

/// Decide whether an entry needs a lookup
pub fn is_candidate(entry: &EntryRecord, options: &EnrichmentOptions) -> bool {
    options.force_lookup
        || entry.latitude.is_none()
        || entry.longitude.is_none()
        || required_fields_missing(entry, options.pass)
}

/// Whether any entry would be looked up by the passes a run requests
pub fn needs_lookup(entries: &[EntryRecord], force_lookup: bool, lookup_twice: bool) -> bool {
    let mut passes = vec![LookupPass::First];
    if lookup_twice {
        passes.push(LookupPass::Second);
    }

    passes.into_iter().any(|pass| {
        let options = EnrichmentOptions { force_lookup, pass };
        entries.iter().any(|entry| is_candidate(entry, &options))
    })
}

fn required_fields_missing(entry: &EntryRecord, pass: LookupPass) -> bool {
    let (check_municipality, levels): (bool, &[AdminLevel]) = match pass {
        LookupPass::First => (true, &AdminLevel::ALL[..]),
        LookupPass::Second => (false, &[AdminLevel::Two, AdminLevel::Three][..]),
    };

    (!check_municipality || entry.municipality.is_none())
        && levels
            .iter()
            .all(|level| entry.admin_name(*level).is_none() && entry.admin_code(*level).is_none())
}

/// Rate-limited enrichment of entry batches
pub struct EnrichmentBatcher {
    lookup: Arc<dyn LookupService>,
    catalog: Arc<RegionCatalog>,
    settings: EnrichmentSettings,
    show_progress: bool,
}

impl EnrichmentBatcher {
    pub fn new(lookup: Arc<dyn LookupService>, catalog: Arc<RegionCatalog>) -> Self {
        Self {
            lookup,
            catalog,
            settings: EnrichmentSettings::default(),
            show_progress: false,
        }
    }

    pub fn with_settings(mut self, settings: EnrichmentSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Run the first pass and, if requested, the relaxed second pass
    pub async fn enrich_passes(
        &self,
        entries: &mut [EntryRecord],
        force_lookup: bool,
        lookup_twice: bool,
    ) -> EnrichmentStats {
        let mut stats = self
            .enrich(
                entries,
                &EnrichmentOptions {
                    force_lookup,
                    pass: LookupPass::First,
                },
            )
            .await;

        if lookup_twice {
            info!("Running second lookup pass");
            let second = self
                .enrich(
                    entries,
                    &EnrichmentOptions {
                        force_lookup,
                        pass: LookupPass::Second,
                    },
                )
                .await;
            stats.merge(&second);
        }

        stats
    }

    /// Enrich candidate entries in place
    pub async fn enrich(
        &self,
        entries: &mut [EntryRecord],
        options: &EnrichmentOptions,
    ) -> EnrichmentStats {
        let mut stats = EnrichmentStats {
            total: entries.len(),
            ..Default::default()
        };

        let mut candidates: Vec<&mut EntryRecord> = entries
            .iter_mut()
            .filter(|entry| is_candidate(entry, options))
            .collect();
        stats.candidates = candidates.len();

        if candidates.is_empty() {
            debug!("No entries need a lookup");
            return stats;
        }

        let chunk_size = self.settings.chunk_size.max(1);
        info!(
            "Looking up {} of {} entries in chunks of {}",
            stats.candidates, stats.total, chunk_size
        );

        let progress = progress_bar(stats.candidates as u64, "lookups", self.show_progress);

        for (index, chunk) in candidates.chunks_mut(chunk_size).enumerate() {
            if index > 0 {
                tokio::time::sleep(self.settings.chunk_delay).await;
            }

            let outcomes = join_all(chunk.iter_mut().map(|entry| self.enrich_entry(entry))).await;

            for outcome in outcomes {
                match outcome {
                    EntryOutcome::NoQuery => stats.without_query += 1,
                    EntryOutcome::Failed => {
                        stats.requested += 1;
                        stats.failed += 1;
                    }
                    EntryOutcome::Unmatched => {
                        stats.requested += 1;
                        stats.unmatched += 1;
                    }
                    EntryOutcome::Matched { updated } => {
                        stats.requested += 1;
                        if updated {
                            stats.updated += 1;
                        }
                    }
                }
            }
            progress.inc(chunk.len() as u64);
        }

        progress.finish_and_clear();
        info!(
            "Lookups complete: {} requested, {} updated, {} unmatched, {} failed",
            stats.requested, stats.updated, stats.unmatched, stats.failed
        );
        stats
    }

    async fn enrich_entry(&self, entry: &mut EntryRecord) -> EntryOutcome {
        let Some(query) = build_query(entry, &self.catalog) else {
            debug!(
                "No lookup query for {} entry without coordinates or postal code",
                entry.country_code
            );
            return EntryOutcome::NoQuery;
        };

        match self.lookup.lookup(&query).await {
            Ok(candidates) => {
                let candidates = matching_candidates(candidates, &entry.country_code);
                if candidates.is_empty() {
                    debug!("No {} candidates for {}", entry.country_code, query);
                    return EntryOutcome::Unmatched;
                }
                let updated = apply_candidates(entry, &candidates, &self.catalog);
                EntryOutcome::Matched { updated }
            }
            Err(e) => {
                warn!("Lookup failed for {}: {}", query, e);
                EntryOutcome::Failed
            }
        }
    }
}
