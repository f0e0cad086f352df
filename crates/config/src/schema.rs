/// Config schema types (project catalog, folder root, server identity).
use std::path::PathBuf;

use {
    projector_common::FilterStrategy,
    serde::{Deserialize, Serialize},
};

use crate::error::{Error, Result};

pub const ROOT_ENV: &str = "PROJECT_FOLDERS_ROOT";
pub const CATALOG_ENV: &str = "PROJECTS_JSON_FILE_PATH";
pub const STRATEGY_ENV: &str = "FILTER_STRATEGY";

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectorConfig {
    pub projects: ProjectsConfig,
    pub server: ServerConfig,
}

/// Where projects live and how keyword queries combine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectsConfig {
    /// Directory new `p<YYYYMMDD><a-z>` folders are created in. Must exist.
    pub root: Option<PathBuf>,
    /// Catalog file (`.json`, `.toml`, `.yaml`).
    pub catalog: Option<PathBuf>,
    /// `AND`/`ALL` or `OR`/`ANY`. Defaults to `AND`.
    pub strategy: FilterStrategy,
}

impl ProjectsConfig {
    /// Check that the required paths are set and freeze them.
    pub fn resolve(&self) -> Result<ProjectsSettings> {
        let root = self.root.clone().ok_or(Error::Missing {
            field: "project folders root",
            env_var: ROOT_ENV,
            key: "projects.root",
        })?;
        let catalog = self.catalog.clone().ok_or(Error::Missing {
            field: "project catalog",
            env_var: CATALOG_ENV,
            key: "projects.catalog",
        })?;
        Ok(ProjectsSettings {
            root,
            catalog,
            strategy: self.strategy,
        })
    }
}

/// Fixed process-wide settings, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectsSettings {
    pub root: PathBuf,
    pub catalog: PathBuf,
    pub strategy: FilterStrategy,
}

/// Identity reported by the status query.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub name: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "Projector".into(),
        }
    }
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_requires_root_and_catalog() {
        let mut cfg = ProjectsConfig::default();
        let err = cfg.resolve().unwrap_err();
        assert!(err.to_string().contains(ROOT_ENV));

        cfg.root = Some("/srv/projects".into());
        let err = cfg.resolve().unwrap_err();
        assert!(err.to_string().contains(CATALOG_ENV));

        cfg.catalog = Some("/srv/projects.json".into());
        let settings = cfg.resolve().unwrap();
        assert_eq!(settings.root, PathBuf::from("/srv/projects"));
        assert_eq!(settings.strategy, FilterStrategy::All);
    }

    #[test]
    fn parses_toml_sections() {
        let cfg: ProjectorConfig = toml::from_str(
            "[projects]\nroot = \"/srv/p\"\ncatalog = \"/srv/p.json\"\nstrategy = \"or\"\n",
        )
        .unwrap();
        assert_eq!(cfg.projects.strategy, FilterStrategy::Any);
        assert_eq!(cfg.server.name, "Projector");
    }
}
