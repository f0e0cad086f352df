use std::{fs, path::PathBuf};

use {async_trait::async_trait, tracing::debug};

#[cfg(feature = "metrics")]
use projector_metrics::{catalog as catalog_metrics, counter, gauge};

use crate::{
    error::{CatalogSource, Error, Result},
    types::Project,
};

/// Source of the project catalog.
///
/// Every `load()` reads the backing storage afresh: there is no invalidation
/// signal for external edits, so nothing is cached between queries.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn load(&self) -> Result<Vec<Project>>;
}

// ── File-backed implementation ──────────────────────────────────────

#[derive(Debug, serde::Deserialize, Default)]
struct CatalogFile {
    #[serde(default)]
    projects: Vec<Project>,
}

/// Reads the catalog from a `.json`, `.toml`, `.yaml` or `.yml` file.
///
/// Files without an extension are read as JSON.
pub struct FileCatalogStore {
    path: PathBuf,
}

impl FileCatalogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    fn read_file(&self) -> std::result::Result<CatalogFile, CatalogSource> {
        let data = fs::read_to_string(&self.path)?;
        let ext = self
            .path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("json")
            .to_ascii_lowercase();
        match ext.as_str() {
            "json" => Ok(serde_json::from_str(&data)?),
            "toml" => Ok(toml::from_str(&data)?),
            "yaml" | "yml" => Ok(serde_yaml::from_str(&data)?),
            _ => Err(CatalogSource::UnsupportedFormat(ext)),
        }
    }
}

#[async_trait]
impl CatalogStore for FileCatalogStore {
    async fn load(&self) -> Result<Vec<Project>> {
        #[cfg(feature = "metrics")]
        counter!(catalog_metrics::LOADS_TOTAL).increment(1);

        match self.read_file() {
            Ok(file) => {
                debug!(path = %self.path.display(), count = file.projects.len(), "loaded catalog");
                #[cfg(feature = "metrics")]
                gauge!(catalog_metrics::ENTRIES).set(file.projects.len() as f64);
                Ok(file.projects)
            },
            Err(source) => {
                #[cfg(feature = "metrics")]
                counter!(catalog_metrics::LOAD_ERRORS_TOTAL).increment(1);
                Err(Error::catalog_unavailable(&self.path, source))
            },
        }
    }
}
