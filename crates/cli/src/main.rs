mod config_commands;
mod tool_commands;

use std::path::PathBuf;

use {
    anyhow::Context,
    clap::{Parser, Subcommand},
    projector_config::ProjectorConfig,
    projector_projects::FilterStrategy,
    tracing::{debug, info},
    tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt},
};

#[derive(Parser)]
#[command(name = "projector", about = "Projector: project catalog search and folder setup")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    /// Output logs as JSON instead of human-readable.
    #[arg(long, global = true, default_value_t = false)]
    json_logs: bool,

    /// Print collected metrics (Prometheus text) to stderr on exit.
    #[cfg(feature = "metrics")]
    #[arg(long, global = true, default_value_t = false)]
    metrics: bool,

    #[command(flatten)]
    overrides: ConfigOverrides,
}

#[derive(clap::Args)]
struct ConfigOverrides {
    /// Config file to load instead of the discovered one.
    #[arg(long, global = true, env = "PROJECTOR_CONFIG")]
    config: Option<PathBuf>,
    /// Directory project folders are created in (overrides config value).
    #[arg(long, global = true)]
    root: Option<PathBuf>,
    /// Project catalog file (overrides config value).
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    /// Keyword combination: AND/ALL or OR/ANY (overrides config value).
    #[arg(long, global = true)]
    strategy: Option<FilterStrategy>,
}

#[derive(Subcommand)]
enum Commands {
    /// Find catalog projects by keywords.
    Find {
        /// Keywords to search for.
        keywords: Vec<String>,
    },
    /// Create today's next project folder.
    NewFolder,
    /// Write a README.md into an existing project folder.
    Readme {
        /// Target folder.
        folder: PathBuf,
        /// Project title, used as the heading.
        #[arg(long)]
        title: String,
        /// Keyword to list as a #tag (repeatable).
        #[arg(long = "keyword")]
        keywords: Vec<String>,
    },
    /// Report service status and version.
    Status,
    /// Print the schemas of every available tool.
    Tools,
    /// Invoke a tool by name with JSON parameters.
    Call {
        /// Tool name, e.g. `find_projects`.
        tool: String,
        /// Parameters as a JSON object.
        #[arg(long, default_value = "{}")]
        params: String,
    },
    /// Print the welcome prompt.
    Welcome,
    /// Configuration management.
    Config {
        #[command(subcommand)]
        action: config_commands::ConfigAction,
    },
}

fn init_telemetry(cli: &Cli) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));

    let registry = tracing_subscriber::registry().with(filter);

    if cli.json_logs {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_ansi(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

impl ConfigOverrides {
    /// Apply the command-line overrides on top of file and environment values.
    fn apply(&self, config: &mut ProjectorConfig) {
        if let Some(ref root) = self.root {
            config.projects.root = Some(root.clone());
        }
        if let Some(ref catalog) = self.catalog {
            config.projects.catalog = Some(catalog.clone());
        }
        if let Some(strategy) = self.strategy {
            config.projects.strategy = strategy;
        }
    }

    /// Load the config file (explicit or discovered), apply environment
    /// overrides, then the command-line ones.
    fn load(&self) -> anyhow::Result<ProjectorConfig> {
        let mut config = match self.config {
            Some(ref path) => {
                let mut config = projector_config::load_config(path)
                    .with_context(|| format!("loading {}", path.display()))?;
                projector_config::apply_env_overrides(&mut config)?;
                config
            },
            None => projector_config::discover_and_load()?,
        };
        self.apply(&mut config);
        debug!(
            root = ?config.projects.root,
            catalog = ?config.projects.catalog,
            strategy = %config.projects.strategy,
            "resolved configuration"
        );
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    init_telemetry(&cli);

    info!(version = env!("CARGO_PKG_VERSION"), "projector starting");

    #[cfg(feature = "metrics")]
    let metrics = projector_metrics::init_metrics(projector_metrics::MetricsRecorderConfig {
        enabled: cli.metrics,
        ..Default::default()
    })?;

    let result = match cli.command {
        Commands::Config { action } => config_commands::handle_config(action, &cli.overrides).await,
        command => {
            let config = cli.overrides.load()?;
            tool_commands::handle(command, &config).await
        },
    };

    #[cfg(feature = "metrics")]
    if cli.metrics {
        eprint!("{}", metrics.render());
    }

    result
}
