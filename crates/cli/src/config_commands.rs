use {anyhow::Result, clap::Subcommand};

use projector_config::validate::{self, Diagnostic, Severity};

use crate::ConfigOverrides;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Validate the configuration that commands would run with.
    Check {
        /// Show informational diagnostics in addition to errors and warnings.
        #[arg(long)]
        verbose: bool,
    },
}

pub async fn handle_config(action: ConfigAction, overrides: &ConfigOverrides) -> Result<()> {
    match action {
        ConfigAction::Check { verbose } => check(overrides, verbose),
    }
}

const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

fn check(overrides: &ConfigOverrides, verbose: bool) -> Result<()> {
    let result =
        validate::validate_with(overrides.config.as_deref(), |config| overrides.apply(config));

    match result.config_path {
        Some(ref path) => eprintln!("Checking {}", path.display()),
        None => eprintln!("No config file found; checking environment and flags"),
    }

    let mut shown: Vec<&Diagnostic> = result
        .diagnostics
        .iter()
        .filter(|d| verbose || d.severity != Severity::Info)
        .collect();
    shown.sort_by_key(|d| d.severity);

    for d in &shown {
        let color = match d.severity {
            Severity::Error => RED,
            Severity::Warning => YELLOW,
            Severity::Info => CYAN,
        };
        let location = if d.path.is_empty() {
            String::new()
        } else {
            format!("{}: ", d.path)
        };
        eprintln!("  {BOLD}{color}{}{RESET} {location}{}", d.severity, d.message);
    }

    let errors = result.count(Severity::Error);
    let warnings = result.count(Severity::Warning);
    match (errors, warnings) {
        (0, 0) => eprintln!("Configuration OK."),
        _ => eprintln!("{errors} error(s), {warnings} warning(s)"),
    }

    if errors > 0 {
        anyhow::bail!("configuration has {errors} error(s)");
    }
    Ok(())
}
