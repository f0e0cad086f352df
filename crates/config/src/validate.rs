//! Configuration validation.
//!
//! Reports unknown/misspelled fields in the config file and checks that the
//! configured project root and catalog actually exist on disk.

use std::path::{Path, PathBuf};

use crate::{
    loader::{apply_env_overrides, find_config_file, load_config, load_config_value},
    schema::ProjectorConfig,
};

/// Severity level for a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warning => write!(f, "warning"),
            Self::Info => write!(f, "info"),
        }
    }
}

/// A single validation diagnostic.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Category: "syntax", "type-error", "unknown-field", "missing",
    /// "file-ref", "strategy"
    pub category: &'static str,
    /// Dotted path, e.g. "projects.root"
    pub path: String,
    pub message: String,
}

impl Diagnostic {
    fn new(
        severity: Severity,
        category: &'static str,
        path: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            category,
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Result of validating a configuration.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub diagnostics: Vec<Diagnostic>,
    pub config_path: Option<PathBuf>,
}

impl ValidationResult {
    /// Returns `true` if any diagnostic is an error.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    /// Count diagnostics by severity.
    #[must_use]
    pub fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }
}

const TOP_LEVEL_KEYS: &[&str] = &["projects", "server"];
const PROJECTS_KEYS: &[&str] = &["root", "catalog", "strategy"];
const SERVER_KEYS: &[&str] = &["name"];

// ── Levenshtein distance ────────────────────────────────────────────────────

/// Compute the Levenshtein edit distance between two strings.
fn levenshtein(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.chars().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != *cb);
            curr[j + 1] = (prev[j] + cost).min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

/// Closest candidate to `needle` within `max_distance` edits, if any.
fn suggest<'a>(needle: &str, candidates: &[&'a str], max_distance: usize) -> Option<&'a str> {
    candidates
        .iter()
        .map(|c| (*c, levenshtein(needle, c)))
        .filter(|(_, d)| *d > 0 && *d <= max_distance)
        .min_by_key(|(_, d)| *d)
        .map(|(c, _)| c)
}

// ── Core validation ─────────────────────────────────────────────────────────

/// Validate the config file at `path`, or the discovered one if `None`, with
/// environment overrides applied as they would be at startup.
#[must_use]
pub fn validate(path: Option<&Path>) -> ValidationResult {
    validate_with(path, |_| {})
}

/// Like [`validate`], with `overrides` applied on top of the environment, the
/// way command-line flags are at startup.
#[must_use]
pub fn validate_with(
    path: Option<&Path>,
    overrides: impl FnOnce(&mut ProjectorConfig),
) -> ValidationResult {
    let config_path = path.map(Path::to_path_buf).or_else(find_config_file);
    let mut diagnostics = Vec::new();

    let mut config = match config_path {
        None => {
            diagnostics.push(Diagnostic::new(
                Severity::Info,
                "file-ref",
                "",
                "no config file found; using defaults and environment",
            ));
            ProjectorConfig::default()
        },
        Some(ref p) => {
            match load_config_value(p) {
                Ok(value) => check_unknown_fields(&value, &mut diagnostics),
                Err(e) => {
                    diagnostics.push(Diagnostic::new(Severity::Error, "syntax", "", e.to_string()));
                    return ValidationResult {
                        diagnostics,
                        config_path: Some(p.clone()),
                    };
                },
            }
            match load_config(p) {
                Ok(cfg) => cfg,
                Err(e) => {
                    diagnostics.push(Diagnostic::new(
                        Severity::Error,
                        "type-error",
                        "",
                        format!("type error: {e}"),
                    ));
                    return ValidationResult {
                        diagnostics,
                        config_path: Some(p.clone()),
                    };
                },
            }
        },
    };

    if let Err(e) = apply_env_overrides(&mut config) {
        diagnostics.push(Diagnostic::new(
            Severity::Error,
            "type-error",
            "projects.strategy",
            e.to_string(),
        ));
    }
    overrides(&mut config);
    diagnostics.extend(validate_config(&config));

    ValidationResult {
        diagnostics,
        config_path,
    }
}

/// Semantic checks on a loaded config (no file parsing).
#[must_use]
pub fn validate_config(config: &ProjectorConfig) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    let projects = &config.projects;

    match &projects.root {
        None => diagnostics.push(Diagnostic::new(
            Severity::Error,
            "missing",
            "projects.root",
            "project folders root is not set (PROJECT_FOLDERS_ROOT)",
        )),
        Some(root) if !root.exists() => diagnostics.push(Diagnostic::new(
            Severity::Error,
            "file-ref",
            "projects.root",
            format!("directory does not exist: {}", root.display()),
        )),
        Some(root) if !root.is_dir() => diagnostics.push(Diagnostic::new(
            Severity::Error,
            "file-ref",
            "projects.root",
            format!("not a directory: {}", root.display()),
        )),
        Some(_) => {},
    }

    match &projects.catalog {
        None => diagnostics.push(Diagnostic::new(
            Severity::Error,
            "missing",
            "projects.catalog",
            "project catalog is not set (PROJECTS_JSON_FILE_PATH)",
        )),
        // Searches fail until the file shows up, but folder creation still works.
        Some(catalog) if !catalog.is_file() => diagnostics.push(Diagnostic::new(
            Severity::Warning,
            "file-ref",
            "projects.catalog",
            format!("catalog file does not exist: {}", catalog.display()),
        )),
        Some(_) => {},
    }

    diagnostics.push(Diagnostic::new(
        Severity::Info,
        "strategy",
        "projects.strategy",
        format!(
            "queries match {} keywords ({})",
            projects.strategy.quantifier(),
            projects.strategy
        ),
    ));

    diagnostics
}

/// Flag keys that are not part of the schema, with a spelling suggestion.
fn check_unknown_fields(value: &serde_json::Value, diagnostics: &mut Vec<Diagnostic>) {
    let Some(table) = value.as_object() else {
        return;
    };
    for (key, child) in table {
        let known = match key.as_str() {
            "projects" => PROJECTS_KEYS,
            "server" => SERVER_KEYS,
            _ => {
                report_unknown(key, key, TOP_LEVEL_KEYS, diagnostics);
                continue;
            },
        };
        if let Some(section) = child.as_object() {
            for field in section.keys() {
                if !known.contains(&field.as_str()) {
                    report_unknown(&format!("{key}.{field}"), field, known, diagnostics);
                }
            }
        }
    }
}

fn report_unknown(path: &str, key: &str, known: &[&str], diagnostics: &mut Vec<Diagnostic>) {
    let message = match suggest(key, known, 3) {
        Some(s) => format!("unknown field (did you mean \"{s}\"?)"),
        None => "unknown field".to_string(),
    };
    diagnostics.push(Diagnostic::new(
        Severity::Error,
        "unknown-field",
        path,
        message,
    ));
}
