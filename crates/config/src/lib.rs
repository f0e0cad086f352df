//! Configuration loading, validation, env substitution, and env overrides.
//!
//! Config files: `projector.toml`, `projector.yaml`, or `projector.json`
//! Searched in `./` then `~/.config/projector/`.
//!
//! Supports `${ENV_VAR}` substitution in all string values. The environment
//! variables `PROJECT_FOLDERS_ROOT`, `PROJECTS_JSON_FILE_PATH` and
//! `FILTER_STRATEGY` override the file.

pub mod env_subst;
pub mod error;
pub mod loader;
pub mod schema;
pub mod validate;

pub use {
    error::{Error, Result},
    loader::{
        apply_env_overrides, config_dir, discover_and_load, find_config_file, load_config,
        load_config_value,
    },
    schema::{ProjectorConfig, ProjectsConfig, ProjectsSettings, ServerConfig},
    validate::{Diagnostic, Severity, ValidationResult, validate_with},
};
