//! Staged, resumable per-country pipeline
//!
//! Every country runs the fixed sequence
//! `Download -> Enrich -> Normalize -> Export (-> Deploy)`. Each stage
//! reads the artifact of the stage before it and writes its own. A stage
//! whose artifact already exists is skipped unless the run is forced; a
//! stage whose input is missing first runs the earlier stages that produce
//! it. Deploy has no artifact and always runs when requested.
//!
//! Countries share no mutable state and are processed concurrently. A
//! failure in one country ends that country's run and is recorded in its
//! report; the other countries carry on.


use crate::app::adapters::database::{DeployPlan, RecordStore};
use crate::app::adapters::geocoder::LookupService;
use crate::app::adapters::sources::SourceChain;
use crate::app::models::{ArtifactKind, CountryKey, RegionCatalog, RunOptions, Stage};
use crate::app::services::artifact_store::ArtifactStore;
use crate::app::services::enrichment::{EnrichmentBatcher, EnrichmentSettings, needs_lookup};
use crate::app::services::region_resolver::{ResolverRegistry, normalize_entries};
use crate::app::services::sql_export::{self, ExportSettings};
use crate::app::services::validation::{ValidationReport, validate_entries};
use crate::{Error, Result};
use futures::stream::{self, StreamExt};
use std::fmt;
use std::sync::Arc;
use tracing::{error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageStatus {
    /// The artifact existed and was reused
    Skipped,
    Completed,
}

/// Outcome of one stage for one country
#[derive(Debug, Clone, PartialEq)]
pub struct StageReport {
    pub stage: Stage,
    pub status: StageStatus,
    /// Entries (or statements, for deploy) the stage handled
    pub records: usize,
    pub detail: Option<String>,
}

impl StageReport {
    fn skipped(stage: Stage) -> Self {
        Self {
            stage,
            status: StageStatus::Skipped,
            records: 0,
            detail: None,
        }
    }

    fn completed(stage: Stage, records: usize, detail: impl Into<String>) -> Self {
        Self {
            stage,
            status: StageStatus::Completed,
            records,
            detail: Some(detail.into()),
        }
    }
}

impl fmt::Display for StageReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            StageStatus::Skipped => write!(f, "{}: skipped (artifact exists)", self.stage),
            StageStatus::Completed => {
                write!(f, "{}: {} records", self.stage, self.records)?;
                if let Some(detail) = &self.detail {
                    write!(f, " ({})", detail)?;
                }
                Ok(())
            }
        }
    }
}

/// Everything that happened to one country during a batch
#[derive(Debug)]
pub struct CountryReport {
    pub key: CountryKey,
    pub stages: Vec<StageReport>,
    /// The error that ended the country's run, if any
    pub error: Option<Error>,
}

impl CountryReport {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Stage orchestrator over a data directory and its collaborators
pub struct Pipeline {
    store: ArtifactStore,
    sources: Arc<SourceChain>,
    lookup: Option<Arc<dyn LookupService>>,
    record_store: Option<Arc<dyn RecordStore>>,
    registry: Arc<ResolverRegistry>,
    catalog: Arc<RegionCatalog>,
    options: RunOptions,
    enrichment: EnrichmentSettings,
    export: ExportSettings,
    max_concurrency: usize,
    show_progress: bool,
}

impl Pipeline {
    pub fn new(store: ArtifactStore, sources: SourceChain, catalog: Arc<RegionCatalog>) -> Self {
        Self {
            store,
            sources: Arc::new(sources),
            lookup: None,
            record_store: None,
            registry: Arc::new(ResolverRegistry::standard()),
            catalog,
            options: RunOptions::default(),
            enrichment: EnrichmentSettings::default(),
            export: ExportSettings::default(),
            max_concurrency: 1,
            show_progress: false,
        }
    }

    pub fn with_lookup(mut self, lookup: Arc<dyn LookupService>) -> Self {
        self.lookup = Some(lookup);
        self
    }

    pub fn with_record_store(mut self, record_store: Arc<dyn RecordStore>) -> Self {
        self.record_store = Some(record_store);
        self
    }

    pub fn with_registry(mut self, registry: ResolverRegistry) -> Self {
        self.registry = Arc::new(registry);
        self
    }

    pub fn with_options(mut self, options: RunOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_enrichment_settings(mut self, settings: EnrichmentSettings) -> Self {
        self.enrichment = settings;
        self
    }

    pub fn with_export_settings(mut self, settings: ExportSettings) -> Self {
        self.export = settings;
        self
    }

    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.max_concurrency = max_concurrency.max(1);
        self
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn options(&self) -> &RunOptions {
        &self.options
    }

    pub fn store(&self) -> &ArtifactStore {
        &self.store
    }

    pub fn catalog(&self) -> &RegionCatalog {
        &self.catalog
    }

    /// Run the requested stages for every country, concurrently
    pub async fn run_batch(&self, keys: Vec<CountryKey>, stages: &[Stage]) -> Vec<CountryReport> {
        info!(
            "Running {} for {} countries ({} at a time)",
            stages
                .iter()
                .map(|stage| stage.name())
                .collect::<Vec<_>>()
                .join(", "),
            keys.len(),
            self.max_concurrency
        );

        let mut reports: Vec<CountryReport> = stream::iter(keys)
            .map(|key| self.run_country(key, stages))
            .buffer_unordered(self.max_concurrency)
            .collect()
            .await;

        reports.sort_by(|a, b| a.key.cmp(&b.key));
        reports
    }

    /// Run the requested stages in order, stopping at the first failure
    pub async fn run_country(&self, key: CountryKey, stages: &[Stage]) -> CountryReport {
        let mut reports = Vec::new();

        for &stage in stages {
            match self.run_stage(&key, stage).await {
                Ok(stage_reports) => reports.extend(stage_reports),
                Err(e) => {
                    error!("{}: {} failed: {}", key, stage, e);
                    return CountryReport {
                        key,
                        stages: reports,
                        error: Some(e),
                    };
                }
            }
        }

        CountryReport {
            key,
            stages: reports,
            error: None,
        }
    }

    /// Run one stage, producing any missing earlier artifacts first
    pub async fn run_stage(&self, key: &CountryKey, target: Stage) -> Result<Vec<StageReport>> {
        if self.is_satisfied(key, target) {
            info!("{}: {} skipped, artifact exists", key, target);
            return Ok(vec![StageReport::skipped(target)]);
        }

        let mut plan = vec![target];
        let mut current = target;
        while let Some(previous) = current.previous() {
            let input_ready = self
                .input_kind(key, current)
                .is_some_and(|kind| self.store.exists(key, kind));
            if input_ready {
                break;
            }
            plan.push(previous);
            current = previous;
        }
        plan.reverse();

        let mut reports = Vec::with_capacity(plan.len());
        for stage in plan {
            info!("{}: running {}", key, stage);
            reports.push(self.execute(key, stage).await?);
        }
        Ok(reports)
    }

    fn is_satisfied(&self, key: &CountryKey, stage: Stage) -> bool {
        let Some(kind) = stage.output() else {
            return false;
        };
        if self.options.force || (stage == Stage::Enrich && self.options.reenrich_existing) {
            return false;
        }
        self.store.exists(key, kind)
    }

    /// Artifact a stage reads
    fn input_kind(&self, key: &CountryKey, stage: Stage) -> Option<ArtifactKind> {
        if stage == Stage::Enrich
            && self.options.reenrich_existing
            && self.store.exists(key, ArtifactKind::Enriched)
        {
            return Some(ArtifactKind::Enriched);
        }
        stage.previous().and_then(Stage::output)
    }

    async fn execute(&self, key: &CountryKey, stage: Stage) -> Result<StageReport> {
        match stage {
            Stage::Download => self.download(key).await,
            Stage::Enrich => self.enrich(key).await,
            Stage::Normalize => self.normalize(key).await,
            Stage::Export => self.export(key).await,
            Stage::Deploy => self.deploy(key).await,
        }
    }

    async fn download(&self, key: &CountryKey) -> Result<StageReport> {
        let download = self.sources.fetch(key, self.options.force_fallback).await?;

        self.store
            .write_entries(key, ArtifactKind::Raw, &download.entries)
            .await?;
        self.store.write_provenance(key, &download.source).await?;

        Ok(StageReport::completed(
            Stage::Download,
            download.entries.len(),
            download.source,
        ))
    }

    async fn enrich(&self, key: &CountryKey) -> Result<StageReport> {
        let input = self
            .input_kind(key, Stage::Enrich)
            .unwrap_or(ArtifactKind::Raw);
        let mut entries = self.store.read_entries(key, input).await?;

        let force_lookup = self.options.force_lookup;
        let lookup_twice = self.options.lookup_twice;
        if !needs_lookup(&entries, force_lookup, lookup_twice) {
            info!("{}: every entry is complete, no lookups needed", key);
            self.store
                .write_entries(key, ArtifactKind::Enriched, &entries)
                .await?;
            return Ok(StageReport::completed(
                Stage::Enrich,
                entries.len(),
                "no lookups needed",
            ));
        }

        let lookup = self.lookup.clone().ok_or_else(|| {
            Error::configuration("Enrichment needs a geocoding API key (GOOGLE_MAPS_API_KEY)")
        })?;

        let batcher = EnrichmentBatcher::new(lookup, Arc::clone(&self.catalog))
            .with_settings(self.enrichment.clone())
            .with_progress(self.show_progress);
        let stats = batcher
            .enrich_passes(&mut entries, force_lookup, lookup_twice)
            .await;

        self.store
            .write_entries(key, ArtifactKind::Enriched, &entries)
            .await?;

        Ok(StageReport::completed(
            Stage::Enrich,
            entries.len(),
            format!(
                "{} looked up, {} updated, {} failed",
                stats.requested, stats.updated, stats.failed
            ),
        ))
    }

    async fn normalize(&self, key: &CountryKey) -> Result<StageReport> {
        let mut entries = self.store.read_entries(key, ArtifactKind::Enriched).await?;
        let stats = normalize_entries(key, &mut entries, &self.registry, &self.catalog);

        self.store
            .write_entries(key, ArtifactKind::Normalized, &entries)
            .await?;

        Ok(StageReport::completed(
            Stage::Normalize,
            entries.len(),
            format!(
                "{} resolved, {} preset, {} unknown",
                stats.resolved, stats.preset, stats.unknown
            ),
        ))
    }

    async fn export(&self, key: &CountryKey) -> Result<StageReport> {
        let entries = self
            .store
            .read_entries(key, ArtifactKind::Normalized)
            .await?;
        let content = sql_export::export(key.as_str(), &entries, &self.export)?;
        let statements = sql_export::parse_statements(&content).len();

        self.store
            .write_text(key, ArtifactKind::Export, &content)
            .await?;

        Ok(StageReport::completed(
            Stage::Export,
            entries.len(),
            format!("{} statements", statements),
        ))
    }

    async fn deploy(&self, key: &CountryKey) -> Result<StageReport> {
        let record_store = self.require_record_store()?;
        let partition_name = self.partition_name(key)?;

        let content = self.store.read_text(key, ArtifactKind::Export).await?;
        let plan = DeployPlan {
            key: key.to_string(),
            country_code: key.country_code().to_string(),
            partition_name,
            statements: sql_export::parse_statements(&content),
        };

        let stats = record_store.deploy(&plan).await?;
        Ok(StageReport::completed(
            Stage::Deploy,
            stats.statements_executed,
            plan.partition_name,
        ))
    }

    fn require_record_store(&self) -> Result<Arc<dyn RecordStore>> {
        self.record_store
            .clone()
            .ok_or_else(|| Error::configuration("No database is configured for deploying"))
    }

    /// Partition table for a country in the selected slot
    pub fn partition_name(&self, key: &CountryKey) -> Result<String> {
        let partition = self.options.require_partition()?;
        let country_name = self
            .catalog
            .country_name(key.country_code())
            .ok_or_else(|| {
                Error::invalid_country(key.as_str(), "country is not in the region catalog")
            })?;
        Ok(sql_export::partition_name(country_name, partition))
    }

    /// Drop the country's partition in the selected slot
    pub async fn drop_partition(&self, key: &CountryKey) -> Result<String> {
        let record_store = self.require_record_store()?;
        let partition_name = self.partition_name(key)?;
        record_store.drop_partition(&partition_name).await?;
        Ok(partition_name)
    }

    /// Region code coverage of the country's normalized artifact
    pub async fn validate(&self, key: &CountryKey) -> Result<ValidationReport> {
        let entries = self
            .store
            .read_entries(key, ArtifactKind::Normalized)
            .await?;
        Ok(validate_entries(&entries, &self.catalog))
    }
}
