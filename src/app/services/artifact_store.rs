//! Per-country stage artifacts on disk
//!
//! Every country key owns a directory under the data directory holding one
//! file per produced stage artifact plus the provenance file. The existence
//! of an artifact file is the only checkpoint the pipeline consults, so
//! files are written to a staging name and renamed once complete.

use crate::app::models::{ArtifactKind, CountryKey, EntryRecord};
use crate::app::services::record_codec;
use crate::constants::{PROVENANCE_FILE, STAGING_SUFFIX};
use crate::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct ArtifactStore {
    root: PathBuf,
}

impl ArtifactStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn country_dir(&self, key: &CountryKey) -> PathBuf {
        self.root.join(key.as_str())
    }

    pub fn path(&self, key: &CountryKey, kind: ArtifactKind) -> PathBuf {
        self.country_dir(key).join(kind.file_name())
    }

    pub fn exists(&self, key: &CountryKey, kind: ArtifactKind) -> bool {
        self.path(key, kind).is_file()
    }

    pub async fn read_text(&self, key: &CountryKey, kind: ArtifactKind) -> Result<String> {
        let path = self.path(key, kind);
        match tokio::fs::read_to_string(&path).await {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(Error::artifact_not_found(path.display().to_string()))
            }
            Err(e) => Err(Error::io(format!("Failed to read {}", path.display()), e)),
        }
    }

    /// Write an artifact, creating the country directory when needed
    pub async fn write_text(
        &self,
        key: &CountryKey,
        kind: ArtifactKind,
        content: &str,
    ) -> Result<PathBuf> {
        let dir = self.country_dir(key);
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| Error::io(format!("Failed to create {}", dir.display()), e))?;

        let path = self.path(key, kind);
        write_atomically(&path, content).await?;

        debug!("Wrote {} ({} bytes)", path.display(), content.len());
        Ok(path)
    }

    pub async fn read_entries(
        &self,
        key: &CountryKey,
        kind: ArtifactKind,
    ) -> Result<Vec<EntryRecord>> {
        let content = self.read_text(key, kind).await?;
        Ok(record_codec::decode(&content))
    }

    pub async fn write_entries(
        &self,
        key: &CountryKey,
        kind: ArtifactKind,
        entries: &[EntryRecord],
    ) -> Result<PathBuf> {
        self.write_text(key, kind, &record_codec::encode(entries)).await
    }

    pub async fn write_provenance(&self, key: &CountryKey, source: &str) -> Result<()> {
        let path = self.country_dir(key).join(PROVENANCE_FILE);
        write_atomically(&path, source).await
    }

    /// Provenance of the raw artifact, if recorded
    pub async fn read_provenance(&self, key: &CountryKey) -> Result<Option<String>> {
        let path = self.country_dir(key).join(PROVENANCE_FILE);
        match tokio::fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(content.trim().to_string())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::io(format!("Failed to read {}", path.display()), e)),
        }
    }

    /// Country keys of every directory directly under the root, sorted
    pub fn discover_countries(&self) -> Result<Vec<CountryKey>> {
        if !self.root.is_dir() {
            return Err(Error::configuration(format!(
                "Data directory does not exist: {}",
                self.root.display()
            )));
        }

        let mut keys = Vec::new();
        for entry in WalkDir::new(&self.root).min_depth(1).max_depth(1) {
            let entry = entry?;
            if !entry.file_type().is_dir() {
                continue;
            }

            let name = entry.file_name().to_string_lossy();
            match name.parse::<CountryKey>() {
                Ok(key) => keys.push(key),
                Err(_) => warn!("Skipping non-country directory: {}", entry.path().display()),
            }
        }

        keys.sort();
        keys.dedup();
        Ok(keys)
    }
}

/// Write next to `path` and rename over it once the content is on disk
async fn write_atomically(path: &Path, content: &str) -> Result<()> {
    let mut staging = path.as_os_str().to_owned();
    staging.push(STAGING_SUFFIX);
    let staging = PathBuf::from(staging);

    tokio::fs::write(&staging, content)
        .await
        .map_err(|e| Error::io(format!("Failed to write {}", staging.display()), e))?;

    if let Err(e) = tokio::fs::rename(&staging, path).await {
        if let Err(cleanup) = tokio::fs::remove_file(&staging).await {
            warn!("Failed to remove {}: {}", staging.display(), cleanup);
        }
        return Err(Error::io(
            format!("Failed to move {} into place", path.display()),
            e,
        ));
    }
    Ok(())
}
