use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{
    env_subst::substitute_env,
    error::{Context, Error, Result},
    schema::{CATALOG_ENV, ProjectorConfig, ROOT_ENV, STRATEGY_ENV},
};

/// Standard config file names, checked in order.
const CONFIG_FILENAMES: &[&str] = &[
    "projector.toml",
    "projector.yaml",
    "projector.yml",
    "projector.json",
];

/// Load config from the given path (any supported format).
pub fn load_config(path: &Path) -> Result<ProjectorConfig> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let raw = substitute_env(&raw);
    parse_config(&raw, path)
}

/// Load and parse the config file into a generic value, with env substitution.
pub fn load_config_value(path: &Path) -> Result<serde_json::Value> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let raw = substitute_env(&raw);
    parse_config_value(&raw, path)
}

/// Discover and load config from standard locations, then apply environment
/// overrides.
///
/// Search order:
/// 1. `./projector.{toml,yaml,yml,json}` (project-local)
/// 2. `~/.config/projector/projector.{toml,yaml,yml,json}` (user-global)
///
/// A missing file yields defaults; a file that exists but does not parse is
/// an error.
pub fn discover_and_load() -> Result<ProjectorConfig> {
    let mut config = match find_config_file() {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            load_config(&path)?
        },
        None => {
            debug!("no config file found, using defaults");
            ProjectorConfig::default()
        },
    };
    apply_env_overrides(&mut config)?;
    Ok(config)
}

/// Find the first config file in standard locations.
pub fn find_config_file() -> Option<PathBuf> {
    for name in CONFIG_FILENAMES {
        let p = PathBuf::from(name);
        if p.exists() {
            return Some(p);
        }
    }

    let dir = config_dir()?;
    CONFIG_FILENAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|p| p.exists())
}

/// Returns the user-global config directory (`~/.config/projector/`).
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "projector").map(|d| d.config_dir().to_path_buf())
}

/// Override file values from `PROJECT_FOLDERS_ROOT`, `PROJECTS_JSON_FILE_PATH`
/// and `FILTER_STRATEGY`. Empty variables are ignored.
pub fn apply_env_overrides(config: &mut ProjectorConfig) -> Result<()> {
    apply_env_overrides_with(config, |name| std::env::var(name).ok())
}

pub(crate) fn apply_env_overrides_with(
    config: &mut ProjectorConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<()> {
    let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

    if let Some(root) = get(ROOT_ENV) {
        config.projects.root = Some(PathBuf::from(root));
    }
    if let Some(catalog) = get(CATALOG_ENV) {
        config.projects.catalog = Some(PathBuf::from(catalog));
    }
    if let Some(strategy) = get(STRATEGY_ENV) {
        config.projects.strategy = strategy.parse()?;
    }
    Ok(())
}

fn parse_config(raw: &str, path: &Path) -> Result<ProjectorConfig> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("toml");

    match ext {
        "toml" => Ok(toml::from_str(raw)?),
        "yaml" | "yml" => Ok(serde_yaml::from_str(raw)?),
        "json" => Ok(serde_json::from_str(raw)?),
        _ => Err(Error::UnsupportedFormat(ext.to_string())),
    }
}

fn parse_config_value(raw: &str, path: &Path) -> Result<serde_json::Value> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("toml");

    match ext {
        "toml" => {
            let v: toml::Value = toml::from_str(raw)?;
            Ok(serde_json::to_value(v)?)
        },
        "yaml" | "yml" => {
            let v: serde_yaml::Value = serde_yaml::from_str(raw)?;
            Ok(serde_json::to_value(v)?)
        },
        "json" => Ok(serde_json::from_str(raw)?),
        _ => Err(Error::UnsupportedFormat(ext.to_string())),
    }
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use {super::*, projector_common::FilterStrategy};

    #[test]
    fn loads_each_format() {
        let dir = tempfile::tempdir().unwrap();
        let cases = [
            (
                "projector.toml",
                "[projects]\nroot = \"/srv/p\"\nstrategy = \"OR\"\n",
            ),
            (
                "projector.yaml",
                "projects:\n  root: /srv/p\n  strategy: OR\n",
            ),
            (
                "projector.json",
                r#"{"projects": {"root": "/srv/p", "strategy": "OR"}}"#,
            ),
        ];
        for (name, body) in cases {
            let path = dir.path().join(name);
            std::fs::write(&path, body).unwrap();
            let cfg = load_config(&path).unwrap();
            assert_eq!(cfg.projects.root, Some(PathBuf::from("/srv/p")), "{name}");
            assert_eq!(cfg.projects.strategy, FilterStrategy::Any, "{name}");
        }
    }

    #[test]
    fn bad_strategy_in_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("projector.toml");
        std::fs::write(&path, "[projects]\nstrategy = \"XOR\"\n").unwrap();
        assert!(load_config(&path).is_err());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_config(Path::new("/nonexistent/projector.toml")).unwrap_err();
        assert!(err.to_string().contains("failed to read /nonexistent/projector.toml"));
    }

    #[test]
    fn unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("projector.ini");
        std::fs::write(&path, "root=/srv").unwrap();
        assert!(matches!(
            load_config(&path).unwrap_err(),
            Error::UnsupportedFormat(ref ext) if ext == "ini"
        ));
    }

    #[test]
    fn env_overrides_win_over_file() {
        let mut cfg = ProjectorConfig::default();
        cfg.projects.root = Some("/from/file".into());
        let lookup = |name: &str| match name {
            "PROJECT_FOLDERS_ROOT" => Some("/from/env".to_string()),
            "PROJECTS_JSON_FILE_PATH" => Some("/from/env/projects.json".to_string()),
            "FILTER_STRATEGY" => Some("or".to_string()),
            _ => None,
        };
        apply_env_overrides_with(&mut cfg, lookup).unwrap();
        assert_eq!(cfg.projects.root, Some(PathBuf::from("/from/env")));
        assert_eq!(
            cfg.projects.catalog,
            Some(PathBuf::from("/from/env/projects.json"))
        );
        assert_eq!(cfg.projects.strategy, FilterStrategy::Any);
    }

    #[test]
    fn empty_env_values_are_ignored() {
        let mut cfg = ProjectorConfig::default();
        cfg.projects.root = Some("/from/file".into());
        apply_env_overrides_with(&mut cfg, |_| Some("  ".to_string())).unwrap();
        assert_eq!(cfg.projects.root, Some(PathBuf::from("/from/file")));
        assert_eq!(cfg.projects.strategy, FilterStrategy::All);
    }

    #[test]
    fn invalid_env_strategy_is_an_error() {
        let mut cfg = ProjectorConfig::default();
        let lookup = |name: &str| (name == "FILTER_STRATEGY").then(|| "sometimes".to_string());
        let err = apply_env_overrides_with(&mut cfg, lookup).unwrap_err();
        assert!(matches!(err, Error::Common(_)));
    }

    #[test]
    fn config_value_for_validation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("projector.toml");
        std::fs::write(&path, "[projects]\nroot = \"/srv\"\n").unwrap();
        let value = load_config_value(&path).unwrap();
        assert_eq!(value["projects"]["root"], "/srv");
    }
}
